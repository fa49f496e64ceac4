use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

use log::info;

use crate::algorithm::{IterativeAlgorithm, TerminatingIterativeAlgorithm};
use crate::exact::lower_bound::cost_lower_bound;
use crate::grid::{Cost, CostModel};
use crate::utils::{Assignment, PartialSolution};

/// Report the head bound every this many queue expansions.
const REPORT_PERIOD: usize = 1000;

/// A partial solution paired with a lower bound on the scaled cost of any of
/// its completions. Ordering considers the bound alone.
#[derive(Clone, Debug)]
pub struct BoundedPartialSolution {
    pub cost_lower_bound: Cost,
    pub solution: PartialSolution,
}

impl PartialEq for BoundedPartialSolution {
    fn eq(&self, other: &Self) -> bool {
        self.cost_lower_bound == other.cost_lower_bound
    }
}

impl Eq for BoundedPartialSolution {}

impl PartialOrd for BoundedPartialSolution {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for BoundedPartialSolution {
    fn cmp(&self, other: &Self) -> Ordering {
        self.cost_lower_bound.cmp(&other.cost_lower_bound)
    }
}

/// Expands `sol` by one branching step: picks the unassigned place with the
/// smallest summed offset-one cost to the unassigned places (ties kept at the
/// first place in row-major order) and emits one bounded child per remaining
/// day. A complete solution has no children.
pub fn children(model: &CostModel, sol: &PartialSolution) -> Vec<BoundedPartialSolution> {
    let (places, days) = sol.availability(model);
    if places.is_empty() {
        return Vec::new();
    }

    let place = if places.len() == 1 {
        places[0]
    } else {
        *places
            .iter()
            .min_by_key(|&&p1| {
                places
                    .iter()
                    .map(|&p2| {
                        let (dy, dx) = p1.delta(p2);
                        model.cost(dy, dx, 1)
                    })
                    .sum::<Cost>()
            })
            .unwrap()
    };

    days.into_iter()
        .map(|day| {
            let solution = sol.extended_with(Assignment { place, day });
            BoundedPartialSolution {
                cost_lower_bound: cost_lower_bound(model, &solution),
                solution,
            }
        })
        .collect()
}

/// Best-first branch and bound over partial placements. The queue is seeded
/// with the bounded empty solution; every step expands the minimum-bound
/// entry. Once the head has no children it is a complete placement whose
/// bound is exact, and no open entry can undercut it, so the search stops
/// with the optimum.
pub struct BranchAndBound<'a> {
    model: &'a CostModel,
    queue: BinaryHeap<Reverse<BoundedPartialSolution>>,
    solution: Option<BoundedPartialSolution>,
    iterations: usize,
}

impl<'a> BranchAndBound<'a> {
    pub fn new(model: &'a CostModel) -> Self {
        let root = PartialSolution::new();
        let bounded_root = BoundedPartialSolution {
            cost_lower_bound: cost_lower_bound(model, &root),
            solution: root,
        };

        let mut queue = BinaryHeap::new();
        queue.push(Reverse(bounded_root));

        Self {
            model,
            queue,
            solution: None,
            iterations: 0,
        }
    }

    /// Number of queue expansions processed so far.
    pub fn number_of_iterations(&self) -> usize {
        self.iterations
    }

    /// Number of open partial solutions in the queue.
    pub fn queue_size(&self) -> usize {
        self.queue.len()
    }
}

impl IterativeAlgorithm<BoundedPartialSolution> for BranchAndBound<'_> {
    fn execute_step(&mut self) {
        assert!(self.solution.is_none());

        let (head_bound, expansion) = {
            let Reverse(head) = self
                .queue
                .peek()
                .expect("queue never drains while searching");
            (head.cost_lower_bound, children(self.model, &head.solution))
        };

        if self.iterations % REPORT_PERIOD == 0 {
            info!(
                "{:>8}: cost_lower_bound={}",
                self.iterations,
                self.model.to_real(head_bound)
            );
        }
        self.iterations += 1;

        if expansion.is_empty() {
            // the head is complete; nothing in the queue can beat its exact cost
            self.solution = Some(self.queue.pop().unwrap().0);
            return;
        }

        self.queue.pop();
        for child in expansion {
            self.queue.push(Reverse(child));
        }
    }

    fn is_completed(&self) -> bool {
        self.solution.is_some()
    }

    fn best_known_solution(&mut self) -> Option<BoundedPartialSolution> {
        self.solution.clone()
    }
}

impl TerminatingIterativeAlgorithm<BoundedPartialSolution> for BranchAndBound<'_> {}
