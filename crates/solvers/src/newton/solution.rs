/// Indicates whether the solver converged or hit the iteration limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Consecutive iterates agreed within the configured tolerances.
    Converged,

    /// Reached the iteration limit without converging.
    MaxIters,

    /// Stopped early due to an observer decision.
    StoppedByObserver,
}

/// The result of a Newton solve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Solution {
    /// Final solver status.
    pub status: Status,

    /// Latest iterate when the solver finished.
    pub x: f64,

    /// Iteration count when the solver finished.
    pub iters: usize,
}

impl Solution {
    /// A solution known without iterating.
    #[must_use]
    pub fn exact(x: f64) -> Self {
        Self {
            status: Status::Converged,
            x,
            iters: 0,
        }
    }
}
