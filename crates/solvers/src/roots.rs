//! Square and nth roots by Newton iteration.
//!
//! Both roots are fixed points of a Newton update on `x^n - value`:
//!
//! ```text
//! square root:  next = (guess + value / guess) / 2
//! nth root:     next = ((n - 1) * guess + value / guess^(n - 1)) / n
//! ```
//!
//! Square roots start from `value / 2`, raised to at least `1` so the seed is
//! never zero and never far below the root of a small value. Far above the
//! root, a Newton step on `x^n - value` only shrinks the guess by a factor of
//! `(n - 1) / n`, so nth roots instead start from a tight upper bound: the
//! binary exponent of `value` brackets the root between consecutive powers of
//! two, and a few bisection steps narrow that bracket before Newton takes
//! over. Domain checks happen before iterating; zero, infinity and
//! first-degree roots are returned without iterating.
//!
//! Odd roots of negative values are computed as the negated root of the
//! magnitude, so observers of [`nth_root_observed`] see the iterates for
//! `|value|`. A negative degree returns the reciprocal of the positive-degree
//! root.

use thiserror::Error;

use abacus_core::{
    MathError, Observer, RootProblem,
    arithmetic::{add, divide, multiply},
};

use crate::{
    newton::{self, Action, Config, Event, Solution, Status},
    power::integer_power,
};

/// Errors that can occur when approximating a root.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum RootError {
    #[error(transparent)]
    Math(#[from] MathError),

    #[error(transparent)]
    Solver(#[from] newton::Error),

    #[error("no convergence after {iters} iterations (last estimate {estimate})")]
    NotConverged { iters: usize, estimate: f64 },
}

/// Approximates the square root of `num` with the default solver config.
///
/// # Errors
///
/// Returns [`MathError::InvalidDomain`] for negative input,
/// [`MathError::InvalidArgument`] for NaN, or [`RootError::NotConverged`] if
/// the iteration cap is reached.
pub fn square_root(num: f64) -> Result<f64, RootError> {
    estimate(square_root_observed(num, &Config::default(), ())?)
}

/// Approximates the square root of `num`, reporting each update to `observer`.
///
/// # Errors
///
/// Returns an error for negative or NaN input, or if the solver fails.
/// Reaching the iteration cap is not an error here; check the returned
/// [`Status`] or pass the solution to [`estimate`].
pub fn square_root_observed<Obs>(
    num: f64,
    config: &Config,
    observer: Obs,
) -> Result<Solution, RootError>
where
    Obs: Observer<Event, Action>,
{
    if num.is_nan() {
        return Err(MathError::InvalidArgument {
            reason: "cannot take the root of NaN",
        }
        .into());
    }
    if num < 0.0 {
        return Err(MathError::InvalidDomain {
            value: num,
            degree: 2.0,
        }
        .into());
    }
    if is_trivial(num) {
        return Ok(Solution::exact(num));
    }

    Ok(newton::solve(&SquareRoot { value: num }, config, observer)?)
}

/// Approximates the `n`th root of `num` with the default solver config.
///
/// # Errors
///
/// Returns [`MathError::InvalidArgument`] if `n` is zero, fractional or
/// non-finite, [`MathError::InvalidDomain`] for an even root of a negative
/// value, or [`RootError::NotConverged`] if the iteration cap is reached.
pub fn nth_root(num: f64, n: f64) -> Result<f64, RootError> {
    estimate(nth_root_observed(num, n, &Config::default(), ())?)
}

/// Approximates the `n`th root of `num`, reporting each update to `observer`.
///
/// # Errors
///
/// Returns an error for an invalid degree or domain, or if the solver fails.
/// Reaching the iteration cap is not an error here; check the returned
/// [`Status`] or pass the solution to [`estimate`].
pub fn nth_root_observed<Obs>(
    num: f64,
    n: f64,
    config: &Config,
    observer: Obs,
) -> Result<Solution, RootError>
where
    Obs: Observer<Event, Action>,
{
    let degree = Degree::new(n)?;

    if num.is_nan() {
        return Err(MathError::InvalidArgument {
            reason: "cannot take the root of NaN",
        }
        .into());
    }
    if num < 0.0 && degree.is_even() {
        return Err(MathError::InvalidDomain {
            value: num,
            degree: n,
        }
        .into());
    }

    let mut solution = if degree.magnitude == 1 || is_trivial(num.abs()) {
        Solution::exact(num.abs())
    } else {
        let problem = NthRoot {
            value: num.abs(),
            degree: degree.magnitude,
        };
        newton::solve(&problem, config, observer)?
    };

    if num < 0.0 {
        solution.x = -solution.x;
    }
    if degree.is_reciprocal {
        solution.x = divide(1.0, solution.x)?;
    }

    Ok(solution)
}

/// Returns the root estimate of a solution that converged or was stopped.
///
/// # Errors
///
/// Returns [`RootError::NotConverged`] if the solver hit its iteration cap.
pub fn estimate(solution: Solution) -> Result<f64, RootError> {
    match solution.status {
        Status::Converged | Status::StoppedByObserver => Ok(solution.x),
        Status::MaxIters => Err(RootError::NotConverged {
            iters: solution.iters,
            estimate: solution.x,
        }),
    }
}

/// Zero and infinity are their own roots.
fn is_trivial(value: f64) -> bool {
    value == 0.0 || value == f64::INFINITY
}

/// Bisection steps that narrow the nth-root bracket before Newton starts.
const SEED_REFINEMENTS: usize = 16;

fn seed(value: f64) -> f64 {
    (value / 2.0).max(1.0)
}

/// Returns a seed at or just above `value^(1 / degree)`.
///
/// `2^e <= value < 2^(e + 1)` puts the root in `[2^(k - 1), 2^k]` with
/// `k = ceil((e + 1) / degree)`. Bisection keeps `hi^degree >= value`, so the
/// seed stays on the convex side of the root where Newton descends
/// monotonically.
fn bracketed_seed(value: f64, degree: u32) -> f64 {
    let n = i64::from(degree);
    let k = (binary_exponent(value) + n).div_euclid(n);

    #[allow(clippy::cast_possible_truncation)]
    let mut hi = 2.0_f64.powi(k as i32);
    let mut lo = hi / 2.0;

    for _ in 0..SEED_REFINEMENTS {
        let mid = multiply(add(lo, hi), 0.5);
        if integer_power(mid, u64::from(degree)) >= value {
            hi = mid;
        } else {
            lo = mid;
        }
    }

    hi
}

/// Returns `e` with `2^e <= value < 2^(e + 1)` for finite positive `value`.
fn binary_exponent(value: f64) -> i64 {
    const SUBNORMAL_SCALE: f64 = 18_446_744_073_709_551_616.0;

    if value < f64::MIN_POSITIVE {
        return binary_exponent(value * SUBNORMAL_SCALE) - 64;
    }

    #[allow(clippy::cast_possible_truncation)]
    let biased = ((value.to_bits() >> 52) & 0x7ff) as u16;

    i64::from(biased) - 1023
}

/// Babylonian update for `sqrt(value)`.
struct SquareRoot {
    value: f64,
}

impl RootProblem for SquareRoot {
    fn seed(&self) -> f64 {
        seed(self.value)
    }

    fn update(&self, guess: f64) -> Result<f64, MathError> {
        divide(add(guess, divide(self.value, guess)?), 2.0)
    }
}

/// Newton update for `value^(1/degree)` with `degree >= 2`.
struct NthRoot {
    value: f64,
    degree: u32,
}

impl RootProblem for NthRoot {
    fn seed(&self) -> f64 {
        bracketed_seed(self.value, self.degree)
    }

    fn update(&self, guess: f64) -> Result<f64, MathError> {
        let n = f64::from(self.degree);
        let power = integer_power(guess, u64::from(self.degree - 1));
        let correction = divide(self.value, power)?;
        divide(add(multiply(n - 1.0, guess), correction), n)
    }
}

/// A validated root degree.
struct Degree {
    magnitude: u32,
    is_reciprocal: bool,
}

impl Degree {
    fn new(n: f64) -> Result<Self, MathError> {
        if n == 0.0 {
            return Err(MathError::InvalidArgument {
                reason: "root degree must be nonzero",
            });
        }
        if !n.is_finite() || n.fract() != 0.0 || n.abs() > f64::from(u32::MAX) {
            return Err(MathError::InvalidArgument {
                reason: "root degree must be an integer",
            });
        }

        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let magnitude = n.abs() as u32;

        Ok(Self {
            magnitude,
            is_reciprocal: n < 0.0,
        })
    }

    fn is_even(&self) -> bool {
        self.magnitude % 2 == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn square_roots() {
        assert_relative_eq!(square_root(4.0).unwrap(), 2.0, epsilon = 1e-12);
        assert_relative_eq!(square_root(2.0).unwrap(), 1.414_213_56, epsilon = 1e-6);
        assert_relative_eq!(square_root(0.25).unwrap(), 0.5, epsilon = 1e-12);
        assert_relative_eq!(square_root(1e10).unwrap(), 1e5, max_relative = 1e-12);
    }

    #[test]
    fn square_root_of_zero_skips_iteration() {
        let solution = square_root_observed(0.0, &Config::default(), ()).unwrap();
        assert_eq!(solution, Solution::exact(0.0));
    }

    #[test]
    fn square_root_of_negative_is_invalid_domain() {
        assert!(matches!(
            square_root(-1.0),
            Err(RootError::Math(MathError::InvalidDomain { .. }))
        ));
    }

    #[test]
    fn square_root_of_nan_is_invalid_argument() {
        assert!(matches!(
            square_root(f64::NAN),
            Err(RootError::Math(MathError::InvalidArgument { .. }))
        ));
    }

    #[test]
    fn square_root_of_extreme_magnitudes() {
        assert_relative_eq!(square_root(1e-300).unwrap(), 1e-150, max_relative = 1e-12);
        assert_relative_eq!(square_root(1e300).unwrap(), 1e150, max_relative = 1e-12);
        assert_eq!(square_root(f64::INFINITY), Ok(f64::INFINITY));
    }

    #[test]
    fn nth_roots() {
        assert_relative_eq!(nth_root(27.0, 3.0).unwrap(), 3.0, epsilon = 1e-6);
        assert_relative_eq!(nth_root(16.0, 4.0).unwrap(), 2.0, epsilon = 1e-6);
        assert_relative_eq!(nth_root(2.0, 2.0).unwrap(), 2.0_f64.sqrt(), epsilon = 1e-12);
        assert_relative_eq!(nth_root(0.001, 3.0).unwrap(), 0.1, epsilon = 1e-12);
        assert_relative_eq!(nth_root(1024.0, 10.0).unwrap(), 2.0, epsilon = 1e-12);
    }

    #[test]
    fn nth_roots_of_large_values_and_degrees() {
        assert_relative_eq!(nth_root(1e300, 3.0).unwrap(), 1e100, max_relative = 1e-12);
        assert_relative_eq!(nth_root(1e100, 10.0).unwrap(), 1e10, max_relative = 1e-12);
        assert_relative_eq!(nth_root(1e30, 40.0).unwrap(), 10.0_f64.powf(0.75), max_relative = 1e-12);
        assert_relative_eq!(nth_root(1e6, 100.0).unwrap(), 10.0_f64.powf(0.06), max_relative = 1e-12);
        assert_relative_eq!(nth_root(10.0, 1000.0).unwrap(), 10.0_f64.powf(0.001), max_relative = 1e-12);
        assert_relative_eq!(nth_root(f64::MAX, 3.0).unwrap(), f64::MAX.cbrt(), max_relative = 1e-12);
    }

    #[test]
    fn nth_roots_across_magnitudes() {
        let values = [
            f64::MIN_POSITIVE,
            1e-300,
            1e-100,
            1e-10,
            0.5,
            2.0,
            1e10,
            1e100,
            1e300,
            f64::MAX,
        ];

        for degree in [3.0, 10.0, 100.0] {
            for value in values {
                let root = nth_root(value, degree)
                    .unwrap_or_else(|err| panic!("root {degree} of {value} failed: {err}"));
                assert_relative_eq!(root, value.powf(1.0 / degree), max_relative = 1e-12);
            }
        }
    }

    #[test]
    fn nth_root_seed_brackets_the_root() {
        for (value, degree) in [(27.0, 3), (1e-300, 7), (1e300, 3), (10.0, 1000), (5e-324, 2)] {
            let seed = bracketed_seed(value, degree);
            let root = value.powf(1.0 / f64::from(degree));
            assert!(seed >= root * (1.0 - 1e-12), "seed {seed} below root {root}");
            assert!(seed <= root * (1.0 + 1e-3), "seed {seed} far above root {root}");
        }
    }

    #[test]
    fn binary_exponents() {
        assert_eq!(binary_exponent(1.0), 0);
        assert_eq!(binary_exponent(3.0), 1);
        assert_eq!(binary_exponent(0.75), -1);
        assert_eq!(binary_exponent(f64::MAX), 1023);
        assert_eq!(binary_exponent(f64::MIN_POSITIVE), -1022);
        assert_eq!(binary_exponent(5e-324), -1074);
    }

    #[test]
    fn first_degree_root_is_identity() {
        assert_eq!(nth_root(7.5, 1.0), Ok(7.5));
        assert_eq!(nth_root(-7.5, 1.0), Ok(-7.5));
    }

    #[test]
    fn even_root_of_negative_is_invalid_domain() {
        assert!(matches!(
            nth_root(-8.0, 2.0),
            Err(RootError::Math(MathError::InvalidDomain { .. }))
        ));
        assert!(matches!(
            nth_root(-16.0, -4.0),
            Err(RootError::Math(MathError::InvalidDomain { .. }))
        ));
    }

    #[test]
    fn odd_root_of_negative_is_negated() {
        assert_relative_eq!(nth_root(-8.0, 3.0).unwrap(), -2.0, epsilon = 1e-12);
        assert_relative_eq!(nth_root(-32.0, 5.0).unwrap(), -2.0, epsilon = 1e-12);
    }

    #[test]
    fn negative_degree_takes_reciprocal() {
        assert_relative_eq!(nth_root(8.0, -3.0).unwrap(), 0.5, epsilon = 1e-12);
        assert_relative_eq!(nth_root(-8.0, -3.0).unwrap(), -0.5, epsilon = 1e-12);
        assert!(matches!(
            nth_root(0.0, -2.0),
            Err(RootError::Math(MathError::DivisionByZero { .. }))
        ));
    }

    #[test]
    fn invalid_degrees_are_rejected() {
        for n in [0.0, -0.0, 2.5, f64::NAN, f64::INFINITY, 1e12] {
            assert!(
                matches!(
                    nth_root(8.0, n),
                    Err(RootError::Math(MathError::InvalidArgument { .. }))
                ),
                "degree {n} should be rejected"
            );
        }
    }

    #[test]
    fn iteration_cap_reports_not_converged() {
        let config = Config::new(1, 0.0, 0.0).unwrap();

        let solution = nth_root_observed(10.0, 3.0, &config, ()).unwrap();
        assert_eq!(solution.status, Status::MaxIters);

        assert!(matches!(
            estimate(solution),
            Err(RootError::NotConverged { iters: 1, .. })
        ));
    }

    #[test]
    fn observer_sees_square_root_iterates() {
        let mut guesses = Vec::new();
        let observer = |event: &Event| {
            guesses.push(event.guess);
            None::<Action>
        };

        let solution = square_root_observed(16.0, &Config::default(), observer).unwrap();

        assert_eq!(solution.status, Status::Converged);
        assert_relative_eq!(guesses[0], 8.0);
        assert_relative_eq!(solution.x, 4.0, epsilon = 1e-12);
    }

    #[test]
    fn repeated_calls_agree() {
        assert_eq!(square_root(2.0), square_root(2.0));
        assert_eq!(nth_root(10.0, 3.0), nth_root(10.0, 3.0));
    }
}
