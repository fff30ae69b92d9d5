//! Error types for calendar handling.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from calendar validation or date/time parsing.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum TimeError {
    /// A calendar field is outside its accepted range.
    InvalidDateComponent {
        /// Name of the offending field ("month", "day", ...).
        field: &'static str,
        /// The rejected value.
        value: u32,
    },
    /// A date/time string could not be parsed.
    Parse(String),
}

impl Display for TimeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidDateComponent { field, value } => {
                write!(f, "invalid {field}: {value}")
            }
            Self::Parse(msg) => write!(f, "date parse error: {msg}"),
        }
    }
}

impl Error for TimeError {}

impl From<std::num::ParseIntError> for TimeError {
    fn from(e: std::num::ParseIntError) -> Self {
        Self::Parse(e.to_string())
    }
}
