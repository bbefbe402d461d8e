use thiserror::Error;

use abacus_core::{
    MathError, Observer,
    arithmetic::{add, divide, modulus, multiply, subtract},
};
use abacus_solvers::{
    exponent,
    newton::{Action, Config, Event},
    roots::{self, RootError},
};

/// The operations offered by the shell menu, in menu order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Addition,
    Subtraction,
    Multiplication,
    Division,
    Modulus,
    Exponentiation,
    SquareRoot,
    NthRoot,
}

/// Errors that can occur when applying an [`Operation`].
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum OperationError {
    #[error("{operation} takes {expected} operand(s), got {found}")]
    Arity {
        operation: &'static str,
        expected: usize,
        found: usize,
    },

    #[error(transparent)]
    Math(#[from] MathError),

    #[error(transparent)]
    Root(#[from] RootError),
}

impl Operation {
    /// Every operation, in menu order.
    pub const ALL: [Self; 8] = [
        Self::Addition,
        Self::Subtraction,
        Self::Multiplication,
        Self::Division,
        Self::Modulus,
        Self::Exponentiation,
        Self::SquareRoot,
        Self::NthRoot,
    ];

    /// Returns the operation for a 1-based menu choice.
    #[must_use]
    pub fn from_choice(choice: i64) -> Option<Self> {
        let index = usize::try_from(choice).ok()?.checked_sub(1)?;
        Self::ALL.get(index).copied()
    }

    /// Returns the 1-based menu choice for this operation.
    #[must_use]
    pub fn choice(self) -> usize {
        self as usize + 1
    }

    /// Returns the menu label.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Addition => "Addition",
            Self::Subtraction => "Subtraction",
            Self::Multiplication => "Multiplication",
            Self::Division => "Division",
            Self::Modulus => "Modulus",
            Self::Exponentiation => "Exponentiation",
            Self::SquareRoot => "Square Root",
            Self::NthRoot => "Nth Root",
        }
    }

    /// Returns the number of operands the operation reads.
    #[must_use]
    pub fn arity(self) -> usize {
        match self {
            Self::SquareRoot => 1,
            _ => 2,
        }
    }

    /// Returns the prompt shown before reading operands.
    #[must_use]
    pub fn prompt(self) -> &'static str {
        match self {
            Self::SquareRoot => "Enter a number: ",
            Self::NthRoot => "Enter number and root value: ",
            _ => "Enter two numbers: ",
        }
    }

    /// Applies the operation to its operands.
    ///
    /// Root operations run Newton iteration with `config` and report each
    /// update to `observer`; the other operations ignore both.
    ///
    /// # Errors
    ///
    /// Returns an error if the operand count does not match [`arity`], or if
    /// the underlying computation fails.
    ///
    /// [`arity`]: Operation::arity
    pub fn apply<Obs>(
        self,
        operands: &[f64],
        config: &Config,
        observer: Obs,
    ) -> Result<f64, OperationError>
    where
        Obs: Observer<Event, Action>,
    {
        let value = match (self, operands) {
            (Self::Addition, &[a, b]) => add(a, b),
            (Self::Subtraction, &[a, b]) => subtract(a, b),
            (Self::Multiplication, &[a, b]) => multiply(a, b),
            (Self::Division, &[a, b]) => divide(a, b)?,
            (Self::Modulus, &[a, b]) => modulus(a, b)?,
            (Self::Exponentiation, &[base, exp]) => exponent(base, exp)?,
            (Self::SquareRoot, &[num]) => {
                roots::estimate(roots::square_root_observed(num, config, observer)?)?
            }
            (Self::NthRoot, &[num, n]) => {
                roots::estimate(roots::nth_root_observed(num, n, config, observer)?)?
            }
            _ => {
                return Err(OperationError::Arity {
                    operation: self.label(),
                    expected: self.arity(),
                    found: operands.len(),
                });
            }
        };

        Ok(value)
    }
}
