use crate::MathError;

/// A value approximated by iterating an update map from a seed.
///
/// Solvers start from [`RootProblem::seed`] and repeatedly apply
/// [`RootProblem::update`] until consecutive iterates agree within tolerance.
/// The approximated value is the fixed point of the update map.
pub trait RootProblem {
    /// Returns the initial guess.
    fn seed(&self) -> f64;

    /// Returns the next iterate given the current guess.
    ///
    /// # Errors
    ///
    /// Returns an error if an arithmetic step of the update fails, such as a
    /// division by a guess that underflowed to zero.
    fn update(&self, guess: f64) -> Result<f64, MathError>;
}
