use smallvec::SmallVec;

use crate::grid::Cost;

type Cycle = SmallVec<[usize; 16]>;

fn square_matrix_size(matrix: &[Vec<Cost>]) -> usize {
    assert!(!matrix.is_empty());
    let n = matrix.len();
    for row in matrix {
        assert_eq!(row.len(), n);
    }
    n
}

/// Searches for a negative-weight cycle in the dense directed graph given by
/// its weight matrix. Runs `n` rounds of all-edges relaxation seeded from node
/// 0; a round without an improving edge proves no negative cycle is reachable.
/// Otherwise the last improved node lies on (or leads into) a negative cycle,
/// which is extracted by walking parent pointers with a visited-position map
/// until a node repeats; the walk's suffix from that node's first visit is the
/// cycle, returned in forward edge order.
fn find_negative_cycle(graph: &[Vec<Cost>]) -> Cycle {
    let n = graph.len();
    let mut distance = graph[0].clone();
    let mut parent = vec![0; n];

    let mut last = None;
    for _ in 0..n {
        last = None;
        for v in 0..n {
            for w in 0..n {
                let relaxed = distance[v] + graph[v][w];
                if relaxed < distance[w] {
                    distance[w] = relaxed;
                    parent[w] = v;
                    last = Some(w);
                }
            }
        }
        if last.is_none() {
            return Cycle::new();
        }
    }

    let mut position = vec![usize::MAX; n];
    let mut cycle = Cycle::new();
    let mut v = last.unwrap();
    while position[v] == usize::MAX {
        position[v] = cycle.len();
        cycle.push(v);
        v = parent[v];
    }
    cycle.drain(..position[v]);
    cycle.reverse();
    cycle
}

/// Minimum-cost perfect matching over a square cost matrix (rows and columns
/// are the two entity sets) by negative-cycle canceling: starting from the
/// identity matching, repeatedly rotate mates along a negative cycle of the
/// residual graph until none remains. Every cancellation strictly decreases
/// the integer total cost, so the loop terminates.
///
/// Returns `min over bijections m of sum matrix[row][m(row)]`. Passing an
/// empty or non-square matrix is a programming error.
pub fn min_assignment_cost(matrix: &[Vec<Cost>]) -> Cost {
    let n = square_matrix_size(matrix);
    let mut mates: Vec<usize> = (0..n).collect();

    loop {
        // residual edge u -> v weighs u taking over v's current mate
        let mut graph = vec![vec![0; n]; n];
        for v in 0..n {
            let col = mates[v];
            let back_entry = matrix[v][col];
            for (u, matrix_row) in matrix.iter().enumerate() {
                graph[u][v] = matrix_row[col] - back_entry;
            }
        }

        let cycle = find_negative_cycle(&graph);
        if cycle.is_empty() {
            break;
        }
        for i in 0..cycle.len() - 1 {
            mates.swap(cycle[i], cycle[i + 1]);
        }
    }

    (0..n).map(|row| matrix[row][mates[row]]).sum()
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::testing::{exhaustive_min_assignment, random_cost_matrix};
    use rand::SeedableRng;

    #[test]
    fn single_entry() {
        assert_eq!(min_assignment_cost(&[vec![5]]), 5);
    }

    #[test]
    fn hand_checked() {
        // identity is already optimal
        assert_eq!(min_assignment_cost(&[vec![1, 100], vec![100, 1]]), 2);
        // the anti-diagonal must be taken
        assert_eq!(min_assignment_cost(&[vec![100, 1], vec![1, 100]]), 2);
        assert_eq!(
            min_assignment_cost(&[vec![4, 1, 3], vec![2, 0, 5], vec![3, 2, 2]]),
            5
        );
    }

    #[test]
    fn all_ties_terminate() {
        for n in 1..8 {
            let matrix = vec![vec![7; n]; n];
            assert_eq!(min_assignment_cost(&matrix), 7 * n as Cost);
        }
        let zeros = vec![vec![0; 6]; 6];
        assert_eq!(min_assignment_cost(&zeros), 0);
    }

    #[test]
    fn never_worse_than_identity() {
        let mut rng = rand_pcg::Pcg64::seed_from_u64(0x5eed);
        for _ in 0..50 {
            for n in 1..9 {
                let matrix = random_cost_matrix(&mut rng, n, 0, 1_000_000);
                let identity: Cost = (0..n).map(|i| matrix[i][i]).sum();
                assert!(min_assignment_cost(&matrix) <= identity);
            }
        }
    }

    #[test]
    fn matches_exhaustive_search() {
        let mut rng = rand_pcg::Pcg64::seed_from_u64(1234);
        for round in 0..100 {
            for n in 1..=6 {
                // negative entries and narrow ranges (many ties) included
                let matrix = if round % 2 == 0 {
                    random_cost_matrix(&mut rng, n, -100, 100)
                } else {
                    random_cost_matrix(&mut rng, n, 0, 3)
                };
                assert_eq!(
                    min_assignment_cost(&matrix),
                    exhaustive_min_assignment(&matrix),
                    "matrix: {matrix:?}"
                );
            }
        }
    }
}
