use abacus_core::MathError;

/// Errors that can occur during Newton iteration.
#[derive(Debug, thiserror::Error, Clone, Copy, PartialEq)]
pub enum Error {
    #[error("update failed at iteration {iter}: {source}")]
    Update {
        iter: usize,
        #[source]
        source: MathError,
    },

    #[error("non-finite iterate {x} at iteration {iter}")]
    NonFiniteIterate { iter: usize, x: f64 },
}
