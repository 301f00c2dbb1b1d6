//! Heuristic palm-line classification.
//!
//! Given line segments from an edge/line detector and approximate hand
//! keypoints, this crate assigns segments to the life, heart and head
//! lines using position and orientation rules, and reports a coarse hand
//! shape. Mount prominence and finger lengths are fixed estimates.
//!
//! Classification never fails: unusable input yields
//! [`PalmAnalysis::fallback`] and an empty match yields fixed lines, both
//! flagged through [`PalmSource`].

pub mod analysis;
pub mod config;
pub mod error;
pub mod geometry;
pub mod keypoints;
pub mod lines;
pub mod mounts;
pub mod shape;

pub use analysis::{PalmAnalysis, PalmClassifier, PalmInput, PalmSource, analyze_palm};
pub use config::ClassifierConfig;
pub use error::PalmError;
pub use geometry::{NormalizedSegment, Point, Segment};
pub use keypoints::{
    DEFAULT_PALM_CENTER, HAND_KEYPOINT_COUNT, HandKeypoints, INDEX_BASE, MIDDLE_TIP, PINKY_BASE,
    WRIST, default_keypoint,
};
pub use lines::{
    ALL_LINE_KINDS, FALLBACK_LINES, PalmLine, PalmLineKind, classify_lines, line_strength,
};
pub use mounts::{
    DEFAULT_MOUNTS, FALLBACK_MOUNTS, FingerLengths, Mount, MountKind, detect_mounts, finger_lengths,
};
pub use shape::{HandShape, PALM_WIDTH, hand_shape};
