use std::cmp::Reverse;

use crate::exact::assignment::min_assignment_cost;
use crate::grid::{Cost, CostModel};
use crate::utils::{Assignment, PartialSolution};

/// A lower bound on the scaled cost of any complete placement extending
/// `sol`; exact once `sol` is complete.
///
/// Every candidate (place, day) pair among the unassigned places and days
/// gets a matrix entry: twice the cost against everything already placed,
/// plus a greedy positional pairing of the remaining places (farthest from
/// the candidate place first) with the remaining days (closest to the
/// candidate day first). The entries are cheap estimates; the matching over
/// the matrix is resolved exactly, which keeps the result admissible.
pub fn cost_lower_bound(model: &CostModel, sol: &PartialSolution) -> Cost {
    let (places, days) = sol.availability(model);
    if places.is_empty() {
        return sol.pairwise_cost(model);
    }
    assert_eq!(places.len(), days.len());

    let mut matrix = vec![vec![0; days.len()]; places.len()];
    for (i, &place) in places.iter().enumerate() {
        let mut other_places = places.clone();
        other_places.remove(i);
        other_places.sort_by_key(|&p| Reverse(place.squared_distance(p)));

        for (j, &day) in days.iter().enumerate() {
            let mut other_days = days.clone();
            other_days.remove(j);
            other_days.sort_by_key(|&d| day.abs_diff(d));

            let candidate = Assignment { place, day };
            // both cost directions against the fixed part of the solution
            let mut entry: Cost = sol.iter().map(|a| 2 * model.cost_term(candidate, a)).sum();
            for (&p, &d) in other_places.iter().zip(&other_days) {
                entry += model.cost_term(candidate, Assignment { place: p, day: d });
            }
            matrix[i][j] = entry;
        }
    }

    sol.pairwise_cost(model) + min_assignment_cost(&matrix)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::testing::exhaustive_optimum;
    use itertools::Itertools;

    /// True minimum cost over all completions, by exhaustive enumeration.
    fn exhaustive_completion_cost(model: &CostModel, sol: &PartialSolution) -> Cost {
        let (places, days) = sol.availability(model);
        days.iter()
            .copied()
            .permutations(days.len())
            .map(|perm| {
                let mut full = sol.clone();
                for (&place, day) in places.iter().zip(perm) {
                    full.push(Assignment { place, day });
                }
                full.pairwise_cost(model)
            })
            .min()
            .expect("at least one completion")
    }

    #[test]
    fn exact_on_complete_solutions() {
        let model = CostModel::new(2, 2, 20);
        let mut sol = PartialSolution::new();
        for (place, day) in model.places().zip([2, 0, 3, 1]) {
            sol.push(Assignment { place, day });
        }
        assert_eq!(cost_lower_bound(&model, &sol), sol.pairwise_cost(&model));
    }

    #[test]
    fn never_exceeds_true_completion_cost() {
        for (height, width) in [(2, 2), (2, 3)] {
            let model = CostModel::new(height, width, 20);
            let places = model.places().collect_vec();

            let mut sol = PartialSolution::new();
            assert!(cost_lower_bound(&model, &sol) <= exhaustive_completion_cost(&model, &sol));

            // grow along an arbitrary fixed path and re-check at every depth
            let days = [3, 0, 2, 1, 5, 4];
            for (&place, &day) in places.iter().zip(&days[..places.len()]) {
                sol.push(Assignment { place, day });
                assert!(
                    cost_lower_bound(&model, &sol) <= exhaustive_completion_cost(&model, &sol),
                    "depth {}",
                    sol.len()
                );
            }
        }
    }

    #[test]
    fn admissible_along_the_optimal_path() {
        let model = CostModel::new(2, 2, 30);
        let (optimum, best) = exhaustive_optimum(&model);

        let mut prefix = PartialSolution::new();
        assert!(cost_lower_bound(&model, &prefix) <= optimum);
        for a in best.iter() {
            prefix.push(a);
            assert!(cost_lower_bound(&model, &prefix) <= optimum);
        }
        assert_eq!(cost_lower_bound(&model, &prefix), optimum);
    }

    #[test]
    fn single_cell_bound_is_zero() {
        let model = CostModel::new(1, 1, 40);
        let sol = PartialSolution::new();
        assert_eq!(cost_lower_bound(&model, &sol), 0);
    }
}
