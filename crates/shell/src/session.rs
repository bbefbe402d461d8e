use std::{
    collections::VecDeque,
    io::{self, BufRead, Write},
};

use thiserror::Error;

use crate::{ConfigError, MAX_PRECISION, Operation, ShellConfig, TraceObserver};

/// How a session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// A result was printed.
    Computed,

    /// The menu selection was missing or out of range.
    InvalidOperation,

    /// An operand was missing or not a number.
    InvalidInput,

    /// The operation failed and its error was printed.
    Failed,
}

impl Outcome {
    /// Returns the process exit status for this outcome.
    #[must_use]
    pub fn exit_code(self) -> u8 {
        match self {
            Self::Computed => 0,
            Self::InvalidOperation | Self::InvalidInput => 1,
            Self::Failed => 2,
        }
    }
}

/// Errors that prevent a session from completing.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("console i/o failed")]
    Io(#[from] io::Error),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Runs one calculation: menu, selection, operands, result.
///
/// Prompts and results go to `output`. When tracing is enabled, root-finding
/// iterations go to `log`.
///
/// # Errors
///
/// Returns an error if the solver settings are invalid or reading from
/// `input` or writing to `output` fails. Invalid selections, invalid operands
/// and failed operations are reported through the returned [`Outcome`].
pub fn run<R, W, L>(
    config: &ShellConfig,
    input: R,
    output: &mut W,
    log: &mut L,
) -> Result<Outcome, SessionError>
where
    R: BufRead,
    W: Write,
    L: Write,
{
    let solver = config.solver_config()?;
    let mut tokens = Tokens::new(input);

    write_menu(output)?;

    let operation = tokens
        .next_token()?
        .and_then(|token| token.parse::<i64>().ok())
        .and_then(Operation::from_choice);

    let Some(operation) = operation else {
        writeln!(output, "Invalid operation")?;
        return Ok(Outcome::InvalidOperation);
    };

    write!(output, "{}", operation.prompt())?;
    output.flush()?;

    let mut operands = Vec::with_capacity(operation.arity());
    for _ in 0..operation.arity() {
        match tokens.next_token()?.and_then(|token| token.parse::<f64>().ok()) {
            Some(value) => operands.push(value),
            None => {
                writeln!(output, "Invalid input")?;
                return Ok(Outcome::InvalidInput);
            }
        }
    }

    let result = if config.trace {
        operation.apply(&operands, &solver, TraceObserver::new(&mut *log))
    } else {
        operation.apply(&operands, &solver, ())
    };

    match result {
        Ok(value) => {
            let prec = config.precision.min(MAX_PRECISION);
            writeln!(output, "Result: {value:.prec$}")?;
            Ok(Outcome::Computed)
        }
        Err(error) => {
            writeln!(output, "Error: {error}")?;
            Ok(Outcome::Failed)
        }
    }
}

fn write_menu<W: Write>(output: &mut W) -> io::Result<()> {
    writeln!(output, "Welcome to the Calculator!")?;
    writeln!(output, "Choose an operation:")?;
    for operation in Operation::ALL {
        writeln!(output, "{}. {}", operation.choice(), operation.label())?;
    }
    write!(output, "Enter your choice: ")?;
    output.flush()
}

/// Whitespace-separated tokens read lazily, one line at a time.
struct Tokens<R> {
    reader: R,
    pending: VecDeque<String>,
}

impl<R: BufRead> Tokens<R> {
    fn new(reader: R) -> Self {
        Self {
            reader,
            pending: VecDeque::new(),
        }
    }

    /// Returns the next token, or `None` at end of input.
    fn next_token(&mut self) -> io::Result<Option<String>> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Ok(Some(token));
            }

            let mut line = String::new();
            if self.reader.read_line(&mut line)? == 0 {
                return Ok(None);
            }
            self.pending
                .extend(line.split_whitespace().map(str::to_owned));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokens_span_lines_and_skip_blanks() {
        let mut tokens = Tokens::new("1  2\n\n   3\n".as_bytes());

        assert_eq!(tokens.next_token().unwrap().as_deref(), Some("1"));
        assert_eq!(tokens.next_token().unwrap().as_deref(), Some("2"));
        assert_eq!(tokens.next_token().unwrap().as_deref(), Some("3"));
        assert_eq!(tokens.next_token().unwrap(), None);
    }

    #[test]
    fn exit_codes() {
        assert_eq!(Outcome::Computed.exit_code(), 0);
        assert_eq!(Outcome::InvalidOperation.exit_code(), 1);
        assert_eq!(Outcome::InvalidInput.exit_code(), 1);
        assert_eq!(Outcome::Failed.exit_code(), 2);
    }
}
