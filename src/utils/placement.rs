use std::io::Write;

use fxhash::FxHashSet;
use itertools::Itertools;
use thiserror::Error;

use crate::errors::InvariantCheck;
use crate::grid::{Coord, Cost, CostModel, Day, Place};

/// One stamped cell: this place holds this day.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Assignment {
    pub place: Place,
    pub day: Day,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PlacementError {
    #[error("place ({0}, {1}) holds more than one day")]
    DuplicatePlace(Coord, Coord),
    #[error("day {0} is stamped into more than one place")]
    DuplicateDay(Day),
}

/// An in-progress, injective partial mapping from places to days. All places
/// are distinct and all days are distinct; the sequence only ever grows.
#[derive(Clone, Debug, Default)]
pub struct PartialSolution {
    assignments: Vec<Assignment>,
}

impl PartialSolution {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an assignment. The caller guarantees that neither the place
    /// nor the day is already taken.
    pub fn push(&mut self, assignment: Assignment) {
        debug_assert!(
            self.assignments
                .iter()
                .all(|a| a.place != assignment.place && a.day != assignment.day)
        );
        self.assignments.push(assignment);
    }

    /// Returns an independent copy extended by one assignment.
    pub fn extended_with(&self, assignment: Assignment) -> Self {
        let mut child = self.clone();
        child.push(assignment);
        child
    }

    pub fn len(&self) -> usize {
        self.assignments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assignments.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = Assignment> + '_ {
        self.assignments.iter().copied()
    }

    /// The scaled cost accrued by the assignments made so far. Both
    /// orientations of every unordered pair contribute, which keeps partial
    /// costs and lower bounds on the same scale.
    pub fn pairwise_cost(&self, model: &CostModel) -> Cost {
        self.assignments
            .iter()
            .tuple_combinations()
            .map(|(a1, a2)| 2 * model.cost_term(*a1, *a2))
            .sum()
    }

    /// The unscaled objective `sum over ordered pairs of
    /// (D_max - euclid) / |Δday|`. This is the value alternative solvers of
    /// the same puzzle report, so printed results stay comparable.
    pub fn real_cost(&self, model: &CostModel) -> f64 {
        let max_distance = model.max_distance();
        self.assignments
            .iter()
            .tuple_combinations()
            .map(|(a1, a2)| {
                let (dy, dx) = a1.place.delta(a2.place);
                2.0 * (max_distance - f64::hypot(dx as f64, dy as f64))
                    / a1.day.abs_diff(a2.day) as f64
            })
            .sum()
    }

    /// Splits the grid into the places and days not used by this partial
    /// solution, in row-major respectively ascending order.
    pub fn availability(&self, model: &CostModel) -> (Vec<Place>, Vec<Day>) {
        let mut place_used = vec![false; (model.height() * model.width()) as usize];
        let mut day_used = vec![false; model.num_days() as usize];
        for a in &self.assignments {
            place_used[model.cell_index(a.place)] = true;
            day_used[a.day as usize] = true;
        }

        let places = model
            .places()
            .filter(|&p| !place_used[model.cell_index(p)])
            .collect();
        let days = model.days().filter(|&day| !day_used[day as usize]).collect();
        (places, days)
    }

    /// Writes one line per assignment as `y,x:<day>` with 1-indexed days.
    ///
    /// # Example
    /// ```
    /// use acs::grid::Place;
    /// use acs::utils::{Assignment, PartialSolution};
    ///
    /// let mut sol = PartialSolution::new();
    /// sol.push(Assignment { place: Place::new(0, 1), day: 2 });
    /// sol.push(Assignment { place: Place::new(1, 0), day: 0 });
    ///
    /// let mut buffer: Vec<u8> = Vec::new();
    /// sol.write(&mut buffer).unwrap();
    /// assert_eq!(buffer, b"0,1:3\n1,0:1\n");
    /// ```
    pub fn write<W: Write>(&self, mut writer: W) -> Result<(), std::io::Error> {
        for a in &self.assignments {
            writeln!(writer, "{},{}:{}", a.place.y, a.place.x, a.day + 1)?;
        }
        Ok(())
    }

    /// Renders the grid with 1-indexed day labels; cells without an
    /// assignment show a dot.
    pub fn write_grid<W: Write>(
        &self,
        model: &CostModel,
        mut writer: W,
    ) -> Result<(), std::io::Error> {
        let mut cells = vec![None; (model.height() * model.width()) as usize];
        for a in &self.assignments {
            cells[model.cell_index(a.place)] = Some(a.day);
        }

        for y in 0..model.height() {
            for x in 0..model.width() {
                if x > 0 {
                    write!(writer, " ")?;
                }
                match cells[model.cell_index(Place::new(y, x))] {
                    Some(day) => write!(writer, "{:>2}", day + 1)?,
                    None => write!(writer, " .")?,
                }
            }
            writeln!(writer)?;
        }
        Ok(())
    }
}

impl InvariantCheck<PlacementError> for PartialSolution {
    fn is_correct(&self) -> Result<(), PlacementError> {
        let mut places = FxHashSet::default();
        let mut days = FxHashSet::default();
        for a in &self.assignments {
            if !places.insert(a.place) {
                return Err(PlacementError::DuplicatePlace(a.place.y, a.place.x));
            }
            if !days.insert(a.day) {
                return Err(PlacementError::DuplicateDay(a.day));
            }
        }
        Ok(())
    }
}
