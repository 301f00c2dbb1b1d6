//! Points and line segments in pixel and normalized image coordinates.

use std::f64::consts::FRAC_PI_4;

use serde::{Deserialize, Serialize};

use crate::error::PalmError;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// A detected line segment in pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

impl Segment {
    pub const fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self { x1, y1, x2, y2 }
    }

    pub fn is_finite(&self) -> bool {
        self.x1.is_finite() && self.y1.is_finite() && self.x2.is_finite() && self.y2.is_finite()
    }
}

/// A segment scaled into the unit square, with its length and angle.
///
/// Length and angle are measured in normalized coordinates so that the
/// classifier thresholds do not depend on image resolution.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NormalizedSegment {
    pub start: Point,
    pub end: Point,
    pub length: f64,
    /// `atan2(dy, dx)` in radians, in (-π, π].
    pub angle: f64,
}

impl NormalizedSegment {
    /// Normalize a pixel segment against the image size.
    pub fn from_pixels(seg: &Segment, width: f64, height: f64) -> Result<Self, PalmError> {
        if !seg.is_finite() {
            return Err(PalmError::NonFinite("segment endpoint"));
        }
        let start = Point::new(seg.x1 / width, seg.y1 / height);
        let end = Point::new(seg.x2 / width, seg.y2 / height);
        let dx = end.x - start.x;
        let dy = end.y - start.y;
        Ok(Self {
            start,
            end,
            length: dx.hypot(dy),
            angle: dy.atan2(dx),
        })
    }

    pub fn midpoint(&self) -> Point {
        Point::new(
            (self.start.x + self.end.x) / 2.0,
            (self.start.y + self.end.y) / 2.0,
        )
    }

    /// Within 45° of horizontal, in either direction.
    pub fn is_horizontal(&self) -> bool {
        let a = self.angle.abs();
        a < FRAC_PI_4 || a > 3.0 * FRAC_PI_4
    }

    /// Endpoints scaled back to pixel coordinates.
    pub fn to_pixels(&self, width: f64, height: f64) -> [Point; 2] {
        [
            Point::new(self.start.x * width, self.start.y * height),
            Point::new(self.end.x * width, self.end.y * height),
        ]
    }
}
