//! Error types for palm analysis.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from palm-line classification.
///
/// [`PalmClassifier::analyze`](crate::PalmClassifier::analyze) never returns
/// these; they are kept as the cause of a fallback analysis.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum PalmError {
    /// Image width or height is not a positive finite number.
    InvalidImageSize { width: f64, height: f64 },
    /// A segment endpoint or keypoint is NaN or infinite.
    NonFinite(&'static str),
    /// Classifier thresholds are out of range.
    InvalidConfig(&'static str),
}

impl Display for PalmError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidImageSize { width, height } => {
                write!(f, "invalid image size: {width}x{height}")
            }
            Self::NonFinite(what) => write!(f, "non-finite {what}"),
            Self::InvalidConfig(msg) => write!(f, "invalid config: {msg}"),
        }
    }
}

impl Error for PalmError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_image_size() {
        let e = PalmError::InvalidImageSize {
            width: 0.0,
            height: 480.0,
        };
        assert_eq!(e.to_string(), "invalid image size: 0x480");
    }
}
