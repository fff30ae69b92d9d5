//! Error types for line selection.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from reading a line source.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum LinesError {
    /// I/O error while opening or reading the source.
    Io(String),
}

impl Display for LinesError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(msg) => write!(f, "I/O error: {msg}"),
        }
    }
}

impl Error for LinesError {}

impl From<std::io::Error> for LinesError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e.to_string())
    }
}
