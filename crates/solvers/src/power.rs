//! Integer exponentiation.
//!
//! Powers are built from [`multiply`] alone, so they carry no more rounding
//! than the repeated products themselves. Fractional exponents are truncated
//! toward zero: `exponent(2.0, 3.7)` is `2^3`. Use [`f64::powf`] when a true
//! continuous power is wanted.

use abacus_core::{
    MathError,
    arithmetic::{divide, multiply},
};

/// Computes `base^exp` after truncating `exp` toward zero.
///
/// A negative exponent computes the positive power and returns its reciprocal.
///
/// # Errors
///
/// Returns [`MathError::InvalidArgument`] if `exp` is non-finite, or
/// [`MathError::DivisionByZero`] if `exp` is negative and the positive power
/// is zero (for example `0^-2`).
pub fn exponent(base: f64, exp: f64) -> Result<f64, MathError> {
    if !exp.is_finite() {
        return Err(MathError::InvalidArgument {
            reason: "exponent must be finite",
        });
    }

    let magnitude = loop_count(exp);

    let power = integer_power(base, magnitude);

    if exp < 0.0 {
        divide(1.0, power)
    } else {
        Ok(power)
    }
}

/// Computes `base^n` by repeated multiplication.
///
/// Uses exponentiation by squaring: `x^n = (x^2)^(n/2)` for even `n` and
/// `x * (x^2)^((n-1)/2)` for odd `n`, so the loop runs at most 64 times.
#[must_use]
pub fn integer_power(base: f64, n: u64) -> f64 {
    let mut result = 1.0;
    let mut square = base;
    let mut exp = n;

    while exp > 0 {
        if exp & 1 == 1 {
            result = multiply(result, square);
        }
        exp >>= 1;
        if exp > 0 {
            square = multiply(square, square);
        }
    }

    result
}

/// Returns the truncated magnitude of a finite exponent.
///
/// Magnitudes of 2^64 and above saturate to the largest even `u64`, since
/// every `f64` that large is an even integer and parity decides the sign of
/// a negative base.
fn loop_count(exp: f64) -> u64 {
    const SATURATION: f64 = 18_446_744_073_709_551_616.0;

    let magnitude = exp.abs().trunc();
    if magnitude >= SATURATION {
        return u64::MAX - 1;
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let count = magnitude as u64;

    count
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn positive_integer_exponents() {
        assert_eq!(exponent(2.0, 10.0), Ok(1024.0));
        assert_eq!(exponent(-2.0, 3.0), Ok(-8.0));
        assert_eq!(exponent(1.5, 2.0), Ok(2.25));
    }

    #[test]
    fn zero_exponent_is_one() {
        assert_eq!(exponent(7.0, 0.0), Ok(1.0));
        assert_eq!(exponent(0.0, 0.0), Ok(1.0));
    }

    #[test]
    fn negative_exponent_takes_reciprocal() {
        let value = exponent(2.0, -2.0).expect("nonzero base");
        assert_relative_eq!(value, 0.25);

        let value = exponent(-4.0, -3.0).expect("nonzero base");
        assert_relative_eq!(value, -1.0 / 64.0);
    }

    #[test]
    fn fractional_exponent_is_truncated() {
        assert_eq!(exponent(2.0, 3.7), Ok(8.0));
        assert_eq!(exponent(9.0, 0.5), Ok(1.0));
        assert_eq!(exponent(2.0, -0.5), Ok(1.0));
        assert_eq!(exponent(2.0, -1.9), Ok(0.5));
    }

    #[test]
    fn zero_to_negative_power_is_an_error() {
        assert!(matches!(
            exponent(0.0, -2.0),
            Err(MathError::DivisionByZero { .. })
        ));
    }

    #[test]
    fn non_finite_exponent_is_an_error() {
        assert!(matches!(
            exponent(2.0, f64::NAN),
            Err(MathError::InvalidArgument { .. })
        ));
        assert!(matches!(
            exponent(2.0, f64::NEG_INFINITY),
            Err(MathError::InvalidArgument { .. })
        ));
    }

    #[test]
    fn huge_exponents_saturate() {
        assert_eq!(exponent(2.0, 1e30), Ok(f64::INFINITY));
        assert_eq!(exponent(0.5, 1e30), Ok(0.0));
        assert_eq!(exponent(-1.0, 1e30), Ok(1.0));
        assert_eq!(exponent(2.0, -1e30), Ok(0.0));
    }

    #[test]
    fn integer_power_matches_repeated_products() {
        let base = 1.1_f64;
        let mut expected = 1.0;
        for n in 0..20 {
            assert_relative_eq!(integer_power(base, n), expected, max_relative = 1e-14);
            expected *= base;
        }
    }
}
