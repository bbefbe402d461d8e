//! Bounded Newton iteration for single-variable root problems.
//!
//! # Algorithm
//!
//! Starting from [`RootProblem::seed`], the solver applies
//! [`RootProblem::update`] until two consecutive iterates agree within the
//! configured tolerances:
//!
//! ```text
//! |next - guess| <= x_abs_tol + x_rel_tol * |next|
//! ```
//!
//! With both tolerances at zero this reduces to exact equality of iterates.
//! The iteration cap in [`Config`] is always a hard bound, so the solver
//! terminates even when iterates oscillate in the last representable bit.
//!
//! # Observer Events
//!
//! The solver emits one [`Event`] per update, after the new iterate is known
//! and before convergence is checked. Observers can return
//! [`Action::StopEarly`] to halt with the latest iterate.
//!
//! [`RootProblem::seed`]: abacus_core::RootProblem::seed
//! [`RootProblem::update`]: abacus_core::RootProblem::update

mod action;
mod config;
mod error;
mod event;
mod solution;


pub use action::Action;
pub use config::{Config, ConfigError};
pub use error::Error;
pub use event::Event;
pub use solution::{Solution, Status};

use abacus_core::{Observer, RootProblem};

/// Iterates the problem's update map until consecutive iterates converge.
///
/// The observer receives an [`Event`] for each update.
///
/// # Errors
///
/// Returns an error if the seed or an iterate is non-finite, or if the
/// problem's update fails.
pub fn solve<P, Obs>(problem: &P, config: &Config, mut observer: Obs) -> Result<Solution, Error>
where
    P: RootProblem,
    Obs: Observer<Event, Action>,
{
    let mut guess = problem.seed();
    if !guess.is_finite() {
        return Err(Error::NonFiniteIterate { iter: 0, x: guess });
    }

    for iter in 1..=config.max_iters() {
        let next = problem
            .update(guess)
            .map_err(|source| Error::Update { iter, source })?;

        if !next.is_finite() {
            return Err(Error::NonFiniteIterate { iter, x: next });
        }

        let event = Event { iter, guess, next };

        if let Some(action) = observer.observe(&event) {
            match action {
                Action::StopEarly => {
                    return Ok(Solution {
                        status: Status::StoppedByObserver,
                        x: next,
                        iters: iter,
                    });
                }
            }
        }

        if config.is_converged(guess, next) {
            return Ok(Solution {
                status: Status::Converged,
                x: next,
                iters: iter,
            });
        }

        guess = next;
    }

    Ok(Solution {
        status: Status::MaxIters,
        x: guess,
        iters: config.max_iters(),
    })
}

/// Runs Newton iteration without observation.
///
/// # Errors
///
/// Returns an error if the seed or an iterate is non-finite, or if the
/// problem's update fails.
pub fn solve_unobserved<P: RootProblem>(problem: &P, config: &Config) -> Result<Solution, Error> {
    solve(problem, config, ())
}
