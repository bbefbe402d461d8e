use thiserror::Error;

/// Errors that can occur when evaluating a numeric operation.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum MathError {
    /// The divisor was exactly zero.
    #[error("division by zero: {dividend} / 0")]
    DivisionByZero { dividend: f64 },

    /// An even root was requested for a negative value.
    #[error("no real root of degree {degree} for negative value {value}")]
    InvalidDomain { value: f64, degree: f64 },

    /// An operand is outside what the operation accepts.
    #[error("invalid argument: {reason}")]
    InvalidArgument { reason: &'static str },
}
