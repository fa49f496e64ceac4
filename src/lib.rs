pub mod algorithm;
pub mod errors;
pub mod exact;
pub mod grid;
pub mod log;
pub mod utils;

pub mod prelude {
    pub use super::algorithm::*;
    pub use super::exact::*;
    pub use super::grid::*;
    pub use super::utils::*;
}

#[cfg(test)]
mod testing;
