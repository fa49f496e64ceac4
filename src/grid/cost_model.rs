use super::{Coord, Day, NumDays, Place};
use crate::utils::Assignment;

/// A fixed-point scaled cost contribution
pub type Cost = i64;

/// Returns true if the worst-case accumulated cost of an `height`x`width`
/// instance fits the signed 64-bit budget at the given precision shift: every
/// one of the `N*(N-1)` ordered pairs contributes at most `(H + W - 2) << precision`.
///
/// Usable in `const` position so binaries can validate their compile-time
/// grid constants before the first table entry is ever computed.
pub const fn fits_in_cost_budget(height: Coord, width: Coord, precision: u32) -> bool {
    if precision >= 63 {
        return false;
    }
    let n = height as i128 * width as i128;
    let worst_case = n * (n - 1) * (height as i128 + width as i128 - 2);
    worst_case <= (Cost::MAX >> precision) as i128
}

/// The cost model of the placement puzzle: for every offset triple
/// (|Δy|, |Δx|, |Δday|) with `Δday >= 1`, the table holds
/// `round((D_max - hypot(Δx, Δy)) / Δday * 2^precision)` where `D_max` is the
/// grid diagonal. The table is built once and never mutated; all solver
/// components share it by reference.
#[derive(Clone, Debug)]
pub struct CostModel {
    height: Coord,
    width: Coord,
    precision: u32,
    num_days: NumDays,
    max_distance: f64,
    scale: f64,
    table: Vec<Cost>,
}

impl CostModel {
    /// Builds the table for an `height`x`width` grid. The precision shift must
    /// leave enough headroom for the worst-case accumulated cost; violating
    /// the budget is a programming error.
    pub fn new(height: Coord, width: Coord, precision: u32) -> Self {
        assert!(height >= 1 && width >= 1);
        assert!(
            fits_in_cost_budget(height, width, precision),
            "worst-case cost of a {height}x{width} grid overflows i64 at precision {precision}"
        );

        let num_days = height * width;
        let max_distance = f64::hypot((height - 1) as f64, (width - 1) as f64);
        let scale = (1u64 << precision) as f64;

        let offsets_per_cell = (num_days - 1) as usize;
        let mut table = vec![0; (height * width) as usize * offsets_per_cell];
        for dy in 0..height {
            for dx in 0..width {
                let base_cost = max_distance - f64::hypot(dx as f64, dy as f64);
                let cell = ((dy * width + dx) as usize) * offsets_per_cell;
                for dday in 1..num_days {
                    table[cell + (dday - 1) as usize] =
                        (base_cost / dday as f64 * scale).round() as Cost;
                }
            }
        }

        Self {
            height,
            width,
            precision,
            num_days,
            max_distance,
            scale,
            table,
        }
    }

    pub fn height(&self) -> Coord {
        self.height
    }

    pub fn width(&self) -> Coord {
        self.width
    }

    pub fn precision(&self) -> u32 {
        self.precision
    }

    /// Number of day labels, i.e. the number of grid cells.
    pub fn num_days(&self) -> NumDays {
        self.num_days
    }

    /// The maximum Euclidean distance between two cells (the grid diagonal).
    pub fn max_distance(&self) -> f64 {
        self.max_distance
    }

    /// Looks up the scaled cost contribution of one ordered assignment pair at
    /// offset (`dy`, `dx`, `dday`). `dday == 0` is never a valid query since
    /// assignments carry distinct days.
    pub fn cost(&self, dy: Coord, dx: Coord, dday: NumDays) -> Cost {
        assert!(dy < self.height && dx < self.width);
        assert!(dday >= 1 && dday < self.num_days);
        self.table[((dy * self.width + dx) * (self.num_days - 1) + (dday - 1)) as usize]
    }

    /// The scaled cost contributed by the ordered pair (`a1`, `a2`).
    pub fn cost_term(&self, a1: Assignment, a2: Assignment) -> Cost {
        let (dy, dx) = a1.place.delta(a2.place);
        self.cost(dy, dx, a1.day.abs_diff(a2.day))
    }

    /// Removes the fixed-point scaling for reporting.
    pub fn to_real(&self, cost: Cost) -> f64 {
        cost as f64 / self.scale
    }

    /// All cells in row-major order.
    pub fn places(&self) -> impl Iterator<Item = Place> {
        let (height, width) = (self.height, self.width);
        (0..height).flat_map(move |y| (0..width).map(move |x| Place::new(y, x)))
    }

    /// All day labels in ascending order.
    pub fn days(&self) -> impl Iterator<Item = Day> {
        0..self.num_days
    }

    /// Row-major index of a cell, usable for bitmap-style bookkeeping.
    pub fn cell_index(&self, place: Place) -> usize {
        assert!(place.y < self.height && place.x < self.width);
        (place.y * self.width + place.x) as usize
    }
}
