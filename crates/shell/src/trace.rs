use std::io::Write;

use abacus_core::Observer;
use abacus_solvers::newton::{Action, Event};

/// Writes one line per Newton iteration to a log stream.
///
/// A header is written before the first iteration. Write failures are
/// ignored so tracing never changes the outcome of a calculation.
#[derive(Debug)]
pub struct TraceObserver<W: Write> {
    writer: W,
    wrote_header: bool,
}

impl<W: Write> TraceObserver<W> {
    /// Creates an observer that traces to `writer`.
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            wrote_header: false,
        }
    }

    /// Consumes the observer and returns its writer.
    pub fn into_inner(self) -> W {
        self.writer
    }

    fn write_header(&mut self) {
        let _ = writeln!(
            self.writer,
            "{:>5} | {:>24} | {:>24} | {:>12}",
            "Iter", "Guess", "Next", "Step"
        );
        self.wrote_header = true;
    }
}

impl<W: Write> Observer<Event, Action> for TraceObserver<W> {
    fn observe(&mut self, event: &Event) -> Option<Action> {
        if !self.wrote_header {
            self.write_header();
        }

        let _ = writeln!(
            self.writer,
            "{:>5} | {:>24.17e} | {:>24.17e} | {:>12.3e}",
            event.iter,
            event.guess,
            event.next,
            event.step(),
        );

        None
    }
}
