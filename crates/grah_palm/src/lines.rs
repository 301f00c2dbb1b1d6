//! Assignment of segments to the life, heart and head lines.

use std::fmt::{Display, Formatter};

use serde::Serialize;

use crate::config::ClassifierConfig;
use crate::geometry::{NormalizedSegment, Point};

/// The palm lines the classifier recognizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PalmLineKind {
    Life,
    Heart,
    Head,
}

/// All recognized lines, in classification order.
pub const ALL_LINE_KINDS: [PalmLineKind; 3] =
    [PalmLineKind::Life, PalmLineKind::Heart, PalmLineKind::Head];

impl PalmLineKind {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Life => "Life Line",
            Self::Heart => "Heart Line",
            Self::Head => "Head Line",
        }
    }

    /// Whether a normalized segment qualifies as this line around `center`.
    pub fn matches(self, seg: &NormalizedSegment, center: Point, cfg: &ClassifierConfig) -> bool {
        let mid = seg.midpoint();
        match self {
            // Curves around the thumb on the left of the palm.
            Self::Life => {
                mid.x < center.x
                    && mid.y > center.y - cfg.life_band
                    && seg.length > cfg.life_min_length
            }
            // Horizontal across the upper palm.
            Self::Heart => {
                mid.y < center.y && seg.is_horizontal() && seg.length > cfg.heart_min_length
            }
            // Horizontal across the middle of the palm.
            Self::Head => {
                (mid.y - center.y).abs() < cfg.head_band
                    && seg.is_horizontal()
                    && seg.length > cfg.head_min_length
            }
        }
    }
}

impl Display for PalmLineKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl Serialize for PalmLineKind {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

/// A classified palm line.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PalmLine {
    pub name: PalmLineKind,
    /// Endpoints in pixel coordinates.
    pub points: [Point; 2],
    /// 0-1.
    pub strength: f64,
    pub length: f64,
    pub breaks: u32,
}

/// Strength grows with length and saturates at 1.
pub fn line_strength(length: f64) -> f64 {
    (length * 10.0).min(1.0)
}

/// Assign at most one segment to each line kind.
///
/// Segments are considered longest first; for each kind the first
/// qualifying segment wins. A segment may satisfy more than one kind.
/// Returns an empty list when nothing matches.
pub fn classify_lines(
    segments: &[NormalizedSegment],
    center: Point,
    width: f64,
    height: f64,
    cfg: &ClassifierConfig,
) -> Vec<PalmLine> {
    let mut sorted: Vec<&NormalizedSegment> = segments.iter().collect();
    sorted.sort_by(|a, b| b.length.total_cmp(&a.length));

    ALL_LINE_KINDS
        .iter()
        .filter_map(|&kind| {
            sorted
                .iter()
                .find(|seg| kind.matches(seg, center, cfg))
                .map(|seg| PalmLine {
                    name: kind,
                    points: seg.to_pixels(width, height),
                    strength: line_strength(seg.length),
                    length: seg.length,
                    breaks: 0,
                })
        })
        .collect()
}

/// Fixed lines reported when nothing could be classified.
pub const FALLBACK_LINES: [PalmLine; 3] = [
    PalmLine {
        name: PalmLineKind::Life,
        points: [Point::new(100.0, 200.0), Point::new(80.0, 350.0)],
        strength: 0.8,
        length: 150.0,
        breaks: 0,
    },
    PalmLine {
        name: PalmLineKind::Heart,
        points: [Point::new(50.0, 120.0), Point::new(250.0, 100.0)],
        strength: 0.7,
        length: 200.0,
        breaks: 0,
    },
    PalmLine {
        name: PalmLineKind::Head,
        points: [Point::new(70.0, 180.0), Point::new(220.0, 190.0)],
        strength: 0.75,
        length: 150.0,
        breaks: 0,
    },
];
