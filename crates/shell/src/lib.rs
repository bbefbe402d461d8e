//! Interactive console for the Abacus calculator.
//!
//! A session prints the operation menu, reads a selection and its operands,
//! and prints either the result or the error that prevented one. All
//! rendering happens here; the core crates only return values and errors.
//!
//! - [`ShellConfig`] — output precision, tracing and solver settings, loaded
//!   from TOML
//! - [`Operation`] — the eight menu entries and their dispatch
//! - [`TraceObserver`] — writes each root-finding iteration to a log stream
//! - [`run`] — one complete session over any reader and writers

mod config;
mod operation;
mod session;
mod trace;

pub use config::{ConfigError, MAX_PRECISION, ShellConfig, SolverSettings};
pub use operation::{Operation, OperationError};
pub use session::{Outcome, SessionError, run};
pub use trace::TraceObserver;
