//! Full palm analysis with fallbacks.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::config::ClassifierConfig;
use crate::error::PalmError;
use crate::geometry::{NormalizedSegment, Segment};
use crate::keypoints::HandKeypoints;
use crate::lines::{FALLBACK_LINES, PalmLine, classify_lines};
use crate::mounts::{FALLBACK_MOUNTS, FingerLengths, Mount, detect_mounts, finger_lengths};
use crate::shape::{HandShape, hand_shape};

/// Where the lines of an analysis came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PalmSource {
    /// At least one line was classified from the segments.
    Detected,
    /// No segment qualified; the fixed lines were substituted.
    FallbackLines,
    /// The input was unusable; the whole analysis is fixed.
    Fallback,
}

/// Classifier input as read from detector output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PalmInput {
    pub width: f64,
    pub height: f64,
    #[serde(default)]
    pub segments: Vec<Segment>,
    #[serde(default)]
    pub keypoints: HandKeypoints,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PalmAnalysis {
    pub lines: Vec<PalmLine>,
    pub mounts: Vec<Mount>,
    pub hand_shape: HandShape,
    pub finger_lengths: FingerLengths,
    pub source: PalmSource,
}

impl PalmAnalysis {
    /// The fixed analysis returned for unusable input.
    pub fn fallback() -> Self {
        Self {
            lines: FALLBACK_LINES.to_vec(),
            mounts: FALLBACK_MOUNTS.to_vec(),
            hand_shape: HandShape::Balanced,
            finger_lengths: FingerLengths::default(),
            source: PalmSource::Fallback,
        }
    }

    pub fn is_fallback(&self) -> bool {
        self.source != PalmSource::Detected
    }
}

/// Palm-line classifier.
#[derive(Debug, Clone, Copy, Default)]
pub struct PalmClassifier {
    config: ClassifierConfig,
}

impl PalmClassifier {
    pub fn new(config: ClassifierConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ClassifierConfig {
        &self.config
    }

    /// Analyze segments and keypoints. Never fails; see [`PalmAnalysis::source`].
    pub fn analyze(
        &self,
        segments: &[Segment],
        keypoints: &HandKeypoints,
        width: f64,
        height: f64,
    ) -> PalmAnalysis {
        match self.try_analyze(segments, keypoints, width, height) {
            Ok(analysis) => analysis,
            Err(e) => {
                warn!(error = %e, "palm analysis failed, using fallback analysis");
                PalmAnalysis::fallback()
            }
        }
    }

    pub fn analyze_input(&self, input: &PalmInput) -> PalmAnalysis {
        self.analyze(&input.segments, &input.keypoints, input.width, input.height)
    }

    /// Analyze, reporting unusable input as an error instead of falling back.
    pub fn try_analyze(
        &self,
        segments: &[Segment],
        keypoints: &HandKeypoints,
        width: f64,
        height: f64,
    ) -> Result<PalmAnalysis, PalmError> {
        self.config.validate()?;
        if !(width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0) {
            return Err(PalmError::InvalidImageSize { width, height });
        }
        if !keypoints.all_finite() {
            return Err(PalmError::NonFinite("keypoint"));
        }
        let normalized = segments
            .iter()
            .map(|s| NormalizedSegment::from_pixels(s, width, height))
            .collect::<Result<Vec<_>, _>>()?;

        let center = keypoints.palm_center();
        let mut lines = classify_lines(&normalized, center, width, height, &self.config);
        let source = if lines.is_empty() {
            debug!(segments = segments.len(), "no palm lines classified");
            lines = FALLBACK_LINES.to_vec();
            PalmSource::FallbackLines
        } else {
            PalmSource::Detected
        };

        Ok(PalmAnalysis {
            lines,
            mounts: detect_mounts(keypoints),
            hand_shape: hand_shape(keypoints),
            finger_lengths: finger_lengths(keypoints),
            source,
        })
    }
}

/// Analyze with the default thresholds.
pub fn analyze_palm(
    segments: &[Segment],
    keypoints: &HandKeypoints,
    width: f64,
    height: f64,
) -> PalmAnalysis {
    PalmClassifier::default().analyze(segments, keypoints, width, height)
}
