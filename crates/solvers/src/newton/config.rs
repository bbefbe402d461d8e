use thiserror::Error;

/// Stopping rules for Newton iteration.
///
/// Iteration ends when two consecutive iterates are within
/// `x_abs_tol + x_rel_tol * |next|` of each other, or after `max_iters`
/// updates, whichever comes first. A zero cap returns the seed unchanged.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    max_iters: usize,
    x_abs_tol: f64,
    x_rel_tol: f64,
}

/// A tolerance that cannot bound the distance between iterates.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum ConfigError {
    #[error("absolute step tolerance must be finite and non-negative, got {0}")]
    AbsoluteTolerance(f64),

    #[error("relative step tolerance must be finite and non-negative, got {0}")]
    RelativeTolerance(f64),
}

impl Default for Config {
    /// At most 1000 updates, stopping once consecutive iterates agree to
    /// within four units of machine epsilon.
    fn default() -> Self {
        Self {
            max_iters: 1000,
            x_abs_tol: 0.0,
            x_rel_tol: 4.0 * f64::EPSILON,
        }
    }
}

impl Config {
    /// Creates stopping rules from an update cap and step tolerances.
    ///
    /// Both tolerances at zero stop only on a repeated iterate, which Newton
    /// reaches for many roots but not all, so keep a finite cap.
    ///
    /// # Errors
    ///
    /// Returns an error if a tolerance is negative, NaN or infinite.
    pub fn new(max_iters: usize, x_abs_tol: f64, x_rel_tol: f64) -> Result<Self, ConfigError> {
        if !is_valid_tolerance(x_abs_tol) {
            return Err(ConfigError::AbsoluteTolerance(x_abs_tol));
        }
        if !is_valid_tolerance(x_rel_tol) {
            return Err(ConfigError::RelativeTolerance(x_rel_tol));
        }

        Ok(Self {
            max_iters,
            x_abs_tol,
            x_rel_tol,
        })
    }

    /// Returns the maximum number of updates.
    #[must_use]
    pub fn max_iters(&self) -> usize {
        self.max_iters
    }

    /// Returns the fixed part of the allowed step between iterates.
    #[must_use]
    pub fn x_abs_tol(&self) -> f64 {
        self.x_abs_tol
    }

    /// Returns the part of the allowed step that scales with `|next|`.
    #[must_use]
    pub fn x_rel_tol(&self) -> f64 {
        self.x_rel_tol
    }

    /// Returns true if the step from `guess` to `next` is small enough to stop.
    ///
    /// A repeated iterate always stops.
    #[must_use]
    pub fn is_converged(&self, guess: f64, next: f64) -> bool {
        (next - guess).abs() <= self.x_abs_tol + self.x_rel_tol * next.abs()
    }
}

fn is_valid_tolerance(tol: f64) -> bool {
    tol.is_finite() && tol >= 0.0
}
