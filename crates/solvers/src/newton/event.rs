/// Event emitted by the Newton solver after each update.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Event {
    /// Iteration counter (1-based).
    pub iter: usize,

    /// The guess the update was applied to.
    pub guess: f64,

    /// The iterate produced by the update.
    pub next: f64,
}

impl Event {
    /// Returns the change from `guess` to `next`.
    #[must_use]
    pub fn step(&self) -> f64 {
        self.next - self.guess
    }
}
