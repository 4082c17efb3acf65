//! Unified error types for the calculator.
//!
//! Every fallible step of a command (argument parsing, registry lookups,
//! matrix arithmetic, file sourcing) returns [`CalcResult`]. The interpreter
//! catches the error at the boundary of the command that raised it, reports
//! it and carries on with the next command.
//!
//! ## Usage Examples
//!
//! ```ignore
//! return Err(CalcError::Range("matrix value is out of range".into()));
//! let value: i32 = parse_int(token, "scalar value")?;
//! ```

use std::path::PathBuf;

#[derive(thiserror::Error, Debug)]
pub enum CalcError {
    /// A token that should have been an integer was not.
    #[error("Invalid input: {0}")]
    InvalidFormat(String),
    /// An operation index does not resolve to a registered operation.
    #[error("Operation index out of range: {index} (valid: 0..{len})")]
    Index { index: i64, len: usize },
    /// A value, size or capacity outside its allowed range.
    #[error("{0}")]
    Range(String),
    /// Too many or too few tokens for a command or matrix.
    #[error("{0}")]
    ArgumentCount(String),
    /// The registry already holds as many operations as its bound allows.
    #[error("Maximum number of operations reached ({0})")]
    Capacity(usize),
    #[error("Unknown command: {0}")]
    UnknownCommand(String),
    /// A script could not be sourced.
    #[error("{}: {reason}", .path.display())]
    File { path: PathBuf, reason: String },
    /// The input stream ran out in the middle of a command.
    #[error("Unexpected end of input: {0}")]
    EndOfInput(String),
    #[error("io: {0}")]
    Io(#[from] std::io::Error),
}

pub type CalcResult<T> = Result<T, CalcError>;

/// Parse a strict `i32` token, naming what was expected on failure.
pub fn parse_int(token: &str, what: &str) -> CalcResult<i32> {
    token
        .parse::<i32>()
        .map_err(|_| CalcError::InvalidFormat(format!("expected an integer for {what}, got '{token}'")))
}
