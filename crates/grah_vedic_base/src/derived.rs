//! Fallback-flagged results.
//!
//! Every chart step always yields a value. [`Derived`] carries that value
//! together with the error that forced a fallback, so callers and tests can
//! tell a computed result from a substituted one without inspecting the
//! numbers.

use std::fmt::{Display, Formatter};

use serde::Serialize;
use tracing::warn;

use crate::error::VedicError;

/// The independently recoverable steps of chart generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartStep {
    Ayanamsa,
    Positions,
    Ascendant,
    Houses,
    Dasha,
    Yogas,
    /// The whole chart was replaced by the fixed fallback chart.
    Chart,
}

impl ChartStep {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Ayanamsa => "ayanamsa",
            Self::Positions => "positions",
            Self::Ascendant => "ascendant",
            Self::Houses => "houses",
            Self::Dasha => "dasha",
            Self::Yogas => "yogas",
            Self::Chart => "chart",
        }
    }
}

impl Display for ChartStep {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A step result that is either computed or a documented fallback.
#[derive(Debug, Clone, PartialEq)]
pub struct Derived<T> {
    value: T,
    fallback: Option<VedicError>,
}

impl<T> Derived<T> {
    pub fn computed(value: T) -> Self {
        Self {
            value,
            fallback: None,
        }
    }

    pub fn fallback(value: T, cause: VedicError) -> Self {
        Self {
            value,
            fallback: Some(cause),
        }
    }

    /// Keep `result` if it succeeded, otherwise substitute `fallback()` and
    /// log the cause against `step`.
    pub fn recover(
        step: ChartStep,
        result: Result<T, VedicError>,
        fallback: impl FnOnce() -> T,
    ) -> Self {
        match result {
            Ok(value) => Self::computed(value),
            Err(cause) => {
                warn!(step = %step, error = %cause, "chart step fell back to fixed value");
                Self::fallback(fallback(), cause)
            }
        }
    }

    pub fn value(&self) -> &T {
        &self.value
    }

    pub fn into_value(self) -> T {
        self.value
    }

    pub fn is_fallback(&self) -> bool {
        self.fallback.is_some()
    }

    /// The error that forced the fallback, if any.
    pub fn cause(&self) -> Option<&VedicError> {
        self.fallback.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recover_keeps_ok() {
        let d = Derived::recover(ChartStep::Ayanamsa, Ok(23.9), || 24.0);
        assert!(!d.is_fallback());
        assert_eq!(*d.value(), 23.9);
    }

    #[test]
    fn recover_substitutes_err() {
        let d = Derived::recover(
            ChartStep::Ayanamsa,
            Err(VedicError::NonFinite("test")),
            || 24.0,
        );
        assert!(d.is_fallback());
        assert_eq!(d.cause(), Some(&VedicError::NonFinite("test")));
        assert_eq!(d.into_value(), 24.0);
    }
}
