//! Solvers are implemented against the [`IterativeAlgorithm`] trait.
//!
//! The idea is to decouple an algorithm from its control loop: one call to
//! [`IterativeAlgorithm::execute_step`] does a bounded chunk of work, and the
//! caller decides whether to keep going. This keeps long-running searches
//! observable, as the driver regains control between steps.

/// [`IterativeAlgorithm`] provides a consistent interface to execute all our
/// solvers. Observe that it does not prescribe any constructor which is left
/// to the algorithm designer as each algorithm has specific parameters et
/// cetera. The construction phase should, in general, be quite fast and only
/// involve little computation.
///
/// As an adopter of [`IterativeAlgorithm`], you have to implement at least the
/// methods [`IterativeAlgorithm::execute_step`],
/// [`IterativeAlgorithm::is_completed`] and
/// [`IterativeAlgorithm::best_known_solution`].
///
/// If your algorithm is known to eventually terminate please also implement
/// the marker trait [`TerminatingIterativeAlgorithm`]. It offers an easy
/// interface to run the algorithm to completion.
pub trait IterativeAlgorithm<Result> {
    /// Advances the computation of this algorithm by one unit of work.
    fn execute_step(&mut self);

    /// Returns true iff the algorithm is completed and
    /// [`IterativeAlgorithm::execute_step`] may not be called again.
    fn is_completed(&self) -> bool;

    /// Returns the currently best known solution or None if no solution is
    /// known yet.
    fn best_known_solution(&mut self) -> Option<Result>;

    /// Keeps calling [`IterativeAlgorithm::execute_step`] until either the
    /// `predicate` becomes false or [`IterativeAlgorithm::is_completed`]
    /// becomes true. The function `predicate` is evaluated after each
    /// iteration, i.e. a step is carried out even if the predicate always
    /// returns false.
    fn run_while<F: FnMut(&mut Self) -> bool>(&mut self, mut predicate: F) {
        while !self.is_completed() {
            self.execute_step();

            if !predicate(self) {
                break;
            }
        }
    }
}

/// [`TerminatingIterativeAlgorithm`] is a marker trait, i.e. to adopt it, you
/// give an empty `impl` block. Add this trait to algorithms that will
/// eventually terminate (i.e. in contrast to an algorithm that does not know
/// when to stop).
pub trait TerminatingIterativeAlgorithm<Result>: IterativeAlgorithm<Result> {
    /// Executes the algorithm until it completed and returns the solution if
    /// one was found.
    fn run_to_completion(&mut self) -> Option<Result> {
        while !self.is_completed() {
            self.execute_step();
        }
        self.best_known_solution()
    }
}
