pub mod cost_model;
pub use cost_model::*;
pub mod place;
pub use place::*;

/// A row or column index into the grid
pub type Coord = u32;

/// A day label in `[0, N)`; displayed 1-indexed
pub type Day = u32;

pub type NumDays = u32;
