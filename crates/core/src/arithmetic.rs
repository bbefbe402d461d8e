//! Basic two-operand arithmetic.
//!
//! [`add`], [`subtract`] and [`multiply`] are total over `f64`. [`divide`] and
//! [`modulus`] return a [`MathError`] instead of a placeholder value when the
//! divisor is zero, so a legitimate zero result is never confused with a
//! failure.

use crate::MathError;

/// Returns `a + b`.
#[must_use]
pub fn add(a: f64, b: f64) -> f64 {
    a + b
}

/// Returns `a - b`.
#[must_use]
pub fn subtract(a: f64, b: f64) -> f64 {
    a - b
}

/// Returns `a * b`.
#[must_use]
pub fn multiply(a: f64, b: f64) -> f64 {
    a * b
}

/// Returns `a / b`.
///
/// # Errors
///
/// Returns [`MathError::DivisionByZero`] if `b` is zero (of either sign).
pub fn divide(a: f64, b: f64) -> Result<f64, MathError> {
    #[allow(clippy::float_cmp)]
    if b == 0.0 {
        return Err(MathError::DivisionByZero { dividend: a });
    }
    Ok(a / b)
}

/// Returns the integer remainder of `a / b`.
///
/// Both operands are truncated toward zero before the remainder is taken, so
/// `modulus(10.9, 3.2)` is `10 % 3 = 1`. The result has the sign of the
/// truncated dividend.
///
/// # Errors
///
/// Returns [`MathError::DivisionByZero`] if `b` truncates to zero, or
/// [`MathError::InvalidArgument`] if either operand is non-finite or does not
/// fit in an `i64` once truncated.
pub fn modulus(a: f64, b: f64) -> Result<f64, MathError> {
    let dividend = truncate(a)?;
    let divisor = truncate(b)?;

    if divisor == 0 {
        return Err(MathError::DivisionByZero { dividend: a });
    }

    // `i64::MIN % -1` overflows; the remainder is zero either way.
    let remainder = dividend.wrapping_rem(divisor);

    #[allow(clippy::cast_precision_loss)]
    let remainder = remainder as f64;

    Ok(remainder)
}

/// Truncates a finite value toward zero into an `i64`.
fn truncate(value: f64) -> Result<i64, MathError> {
    if !value.is_finite() {
        return Err(MathError::InvalidArgument {
            reason: "modulus operands must be finite",
        });
    }

    let truncated = value.trunc();

    // `i64::MAX as f64` rounds up to 2^63, which is already out of range.
    #[allow(clippy::cast_precision_loss)]
    if truncated < i64::MIN as f64 || truncated >= i64::MAX as f64 {
        return Err(MathError::InvalidArgument {
            reason: "modulus operands must fit in a 64-bit integer",
        });
    }

    #[allow(clippy::cast_possible_truncation)]
    let truncated = truncated as i64;

    Ok(truncated)
}
