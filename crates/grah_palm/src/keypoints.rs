//! Hand keypoints in normalized image coordinates.
//!
//! The layout follows the common 21-point hand model: 0 is the wrist,
//! 5 the index-finger base, 12 the middle fingertip and 17 the
//! pinky base. Missing points are replaced by fixed defaults.

use serde::{Deserialize, Serialize};

use crate::geometry::Point;

pub const WRIST: usize = 0;
pub const INDEX_BASE: usize = 5;
pub const MIDDLE_TIP: usize = 12;
pub const PINKY_BASE: usize = 17;

/// Number of points in a full hand model.
pub const HAND_KEYPOINT_COUNT: usize = 21;

/// Palm center used when no keypoints were detected.
pub const DEFAULT_PALM_CENTER: Point = Point::new(0.5, 0.6);

/// Default position of a missing keypoint, if it has one.
pub const fn default_keypoint(index: usize) -> Option<Point> {
    match index {
        WRIST => Some(Point::new(0.5, 0.9)),
        INDEX_BASE => Some(Point::new(0.3, 0.5)),
        MIDDLE_TIP => Some(Point::new(0.5, 0.1)),
        PINKY_BASE => Some(Point::new(0.7, 0.5)),
        _ => None,
    }
}

/// Detected hand keypoints; may be empty or shorter than 21 points.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HandKeypoints(Vec<Point>);

impl HandKeypoints {
    pub fn new(points: Vec<Point>) -> Self {
        Self(points)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn points(&self) -> &[Point] {
        &self.0
    }

    /// Keypoint `index`, or its default when missing.
    ///
    /// Returns the origin for indices with no default; only the four named
    /// indices are read by the classifier.
    pub fn get_or_default(&self, index: usize) -> Point {
        self.0
            .get(index)
            .copied()
            .or(default_keypoint(index))
            .unwrap_or(Point::new(0.0, 0.0))
    }

    /// Palm center estimated from the wrist, index base and pinky base.
    pub fn palm_center(&self) -> Point {
        if self.is_empty() {
            return DEFAULT_PALM_CENTER;
        }
        let wrist = self.get_or_default(WRIST);
        let index = self.get_or_default(INDEX_BASE);
        let pinky = self.get_or_default(PINKY_BASE);
        Point::new((index.x + pinky.x) / 2.0, (wrist.y + index.y) / 2.0)
    }

    pub fn all_finite(&self) -> bool {
        self.0.iter().all(Point::is_finite)
    }
}

impl From<Vec<Point>> for HandKeypoints {
    fn from(points: Vec<Point>) -> Self {
        Self(points)
    }
}
