//! Core traits and types for the Abacus calculator.
//!
//! This crate defines the pieces the rest of the workspace builds on:
//!
//! - [`arithmetic`] — the basic two-operand operations
//! - [`MathError`] — the error taxonomy shared by every operation
//! - [`Observer`] — receives solver events and optionally returns control actions
//! - [`RootProblem`] — a seed and update map that iterative solvers drive to a
//!   fixed point

pub mod arithmetic;

mod error;
mod observer;
mod problem;

pub use error::MathError;
pub use observer::Observer;
pub use problem::RootProblem;
