use itertools::Itertools;
use rand::Rng;

use super::grid::{Cost, CostModel};
use super::utils::{Assignment, PartialSolution};

/// Cheapest complete placement by enumerating every bijection of days onto
/// the grid cells. Only feasible for tiny grids.
pub fn exhaustive_optimum(model: &CostModel) -> (Cost, PartialSolution) {
    let places = model.places().collect_vec();
    model
        .days()
        .permutations(places.len())
        .map(|perm| {
            let mut sol = PartialSolution::new();
            for (&place, day) in places.iter().zip(perm) {
                sol.push(Assignment { place, day });
            }
            (sol.pairwise_cost(model), sol)
        })
        .min_by_key(|&(cost, _)| cost)
        .expect("at least one permutation")
}

/// Minimum assignment cost by trying every row-to-column bijection.
pub fn exhaustive_min_assignment(matrix: &[Vec<Cost>]) -> Cost {
    let n = matrix.len();
    (0..n)
        .permutations(n)
        .map(|mates| {
            mates
                .iter()
                .enumerate()
                .map(|(row, &col)| matrix[row][col])
                .sum()
        })
        .min()
        .expect("at least one permutation")
}

/// Square matrix with entries drawn uniformly from `[low, high]`.
pub fn random_cost_matrix(rng: &mut impl Rng, n: usize, low: Cost, high: Cost) -> Vec<Vec<Cost>> {
    (0..n)
        .map(|_| (0..n).map(|_| rng.gen_range(low..=high)).collect())
        .collect()
}
