/// Actions an observer can take during Newton iteration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Stop the solver early and return the latest iterate.
    StopEarly,
}
