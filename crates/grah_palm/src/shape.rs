//! Coarse hand-shape estimate from keypoints.

use serde::Serialize;

use crate::keypoints::{HandKeypoints, MIDDLE_TIP, WRIST};

/// Assumed palm width in normalized units.
pub const PALM_WIDTH: f64 = 0.3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum HandShape {
    Long,
    Square,
    Balanced,
}

impl HandShape {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Long => "Long",
            Self::Square => "Square",
            Self::Balanced => "Balanced",
        }
    }
}

impl std::fmt::Display for HandShape {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Classify the hand by wrist-to-middle-fingertip length over palm width.
///
/// Ratios above 1.2 are `Long`, below 0.8 `Square`, otherwise `Balanced`.
/// With no keypoints the hand is `Square`.
pub fn hand_shape(keypoints: &HandKeypoints) -> HandShape {
    if keypoints.is_empty() {
        return HandShape::Square;
    }
    let wrist = keypoints.get_or_default(WRIST);
    let tip = keypoints.get_or_default(MIDDLE_TIP);
    let ratio = (tip.y - wrist.y).abs() / PALM_WIDTH;
    if ratio > 1.2 {
        HandShape::Long
    } else if ratio < 0.8 {
        HandShape::Square
    } else {
        HandShape::Balanced
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Point;

    fn hand(wrist_y: f64, tip_y: f64) -> HandKeypoints {
        let mut pts = vec![Point::new(0.5, 0.5); 21];
        pts[WRIST].y = wrist_y;
        pts[MIDDLE_TIP].y = tip_y;
        HandKeypoints::new(pts)
    }

    #[test]
    fn empty_is_square() {
        assert_eq!(hand_shape(&HandKeypoints::default()), HandShape::Square);
    }

    #[test]
    fn ratios() {
        assert_eq!(hand_shape(&hand(0.9, 0.4)), HandShape::Long);
        assert_eq!(hand_shape(&hand(0.9, 0.7)), HandShape::Square);
        assert_eq!(hand_shape(&hand(0.9, 0.6)), HandShape::Balanced);
    }

    #[test]
    fn missing_tip_uses_default() {
        // Wrist only: tip defaults to y = 0.1, ratio (0.9 - 0.1) / 0.3 > 1.2.
        let kp = HandKeypoints::new(vec![Point::new(0.5, 0.9)]);
        assert_eq!(hand_shape(&kp), HandShape::Long);
    }
}
