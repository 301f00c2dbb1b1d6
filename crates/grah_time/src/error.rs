//! Error types for birth-moment parsing and calendar math.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from parsing or constructing a birth moment.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum TimeError {
    /// Date string was not `YYYY-MM-DD` or named an impossible day.
    InvalidDate(String),
    /// Time string was not `HH:MM`, `HH:MM:SS` or `hh:mm AM/PM`.
    InvalidTime(String),
    /// Calendar fields outside the representable range.
    OutOfRange,
    /// A derived quantity was NaN or infinite.
    NonFinite(&'static str),
}

impl Display for TimeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidDate(s) => write!(f, "invalid date: {s:?}"),
            Self::InvalidTime(s) => write!(f, "invalid time: {s:?}"),
            Self::OutOfRange => write!(f, "calendar fields out of range"),
            Self::NonFinite(what) => write!(f, "non-finite value: {what}"),
        }
    }
}

impl Error for TimeError {}
