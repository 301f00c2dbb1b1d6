//! Error types for chart calculations.

use std::error::Error;
use std::fmt::{Display, Formatter};

use grah_time::TimeError;

use crate::graha::Graha;

/// Errors from chart sub-calculations.
///
/// None of these cross the engine boundary: each step that fails is
/// replaced by its fixed fallback value and the error is kept as the
/// fallback cause.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum VedicError {
    /// Error from calendar conversion.
    Time(TimeError),
    /// An input or intermediate value was NaN or infinite.
    NonFinite(&'static str),
    /// Yoga detection ran before house assignment.
    HousesUnassigned(Graha),
    /// Invalid engine configuration.
    InvalidConfig(&'static str),
    /// The assembled chart violated a structural invariant.
    InvalidChart(&'static str),
}

impl Display for VedicError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Time(e) => write!(f, "time error: {e}"),
            Self::NonFinite(what) => write!(f, "non-finite value: {what}"),
            Self::HousesUnassigned(g) => write!(f, "house not assigned for {}", g.name()),
            Self::InvalidConfig(msg) => write!(f, "invalid config: {msg}"),
            Self::InvalidChart(msg) => write!(f, "invalid chart: {msg}"),
        }
    }
}

impl Error for VedicError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Time(e) => Some(e),
            _ => None,
        }
    }
}

impl From<TimeError> for VedicError {
    fn from(e: TimeError) -> Self {
        Self::Time(e)
    }
}

/// Return `value` if finite, otherwise a [`VedicError::NonFinite`].
pub(crate) fn finite(value: f64, what: &'static str) -> Result<f64, VedicError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(VedicError::NonFinite(what))
    }
}
