use rustyline::error::ReadlineError;
use thiserror::Error;

use crate::errors::CalculatorError;

/// failures that end the shell
#[derive(Error, Debug)]
pub enum ShellError {
    #[error("line editor failure: {0}")]
    Readline(#[from] ReadlineError),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// failure of a single command; reported to the user, the shell keeps going
#[derive(Error, Debug)]
pub enum CommandError {
    /// rendered argument parsing error
    #[error("{0}")]
    Usage(String),

    #[error(transparent)]
    Calculation(#[from] CalculatorError),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
