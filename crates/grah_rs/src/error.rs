use std::error::Error;
use std::fmt::{Display, Formatter};

use grah_palm::PalmError;
use grah_time::TimeError;
use grah_vedic_base::VedicError;

/// Errors surfaced by the strict (`try_*`) entry points.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum GrahError {
    Time(TimeError),
    Vedic(VedicError),
    Palm(PalmError),
}

impl Display for GrahError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Time(e) => write!(f, "time error: {e}"),
            Self::Vedic(e) => write!(f, "chart error: {e}"),
            Self::Palm(e) => write!(f, "palm error: {e}"),
        }
    }
}

impl Error for GrahError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Time(e) => Some(e),
            Self::Vedic(e) => Some(e),
            Self::Palm(e) => Some(e),
        }
    }
}

impl From<TimeError> for GrahError {
    fn from(e: TimeError) -> Self {
        Self::Time(e)
    }
}

impl From<VedicError> for GrahError {
    fn from(e: VedicError) -> Self {
        Self::Vedic(e)
    }
}

impl From<PalmError> for GrahError {
    fn from(e: PalmError) -> Self {
        Self::Palm(e)
    }
}
