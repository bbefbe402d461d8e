//! Exponentiation and iterative root finders for the Abacus calculator.
//!
//! - [`power`] — integer exponentiation built on the core arithmetic
//! - [`newton`] — a bounded fixed-point iteration solver for [`RootProblem`]s
//! - [`roots`] — square and nth roots approximated with [`newton`]
//!
//! [`RootProblem`]: abacus_core::RootProblem

pub mod newton;
pub mod power;
pub mod roots;

pub use power::{exponent, integer_power};
pub use roots::{RootError, nth_root, square_root};
