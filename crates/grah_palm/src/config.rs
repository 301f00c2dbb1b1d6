//! Classifier thresholds.

use serde::{Deserialize, Serialize};

use crate::error::PalmError;

/// Thresholds for assigning segments to palm lines, in normalized units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassifierConfig {
    /// Minimum life-line length (default 0.1).
    pub life_min_length: f64,
    /// Minimum heart-line length (default 0.15).
    pub heart_min_length: f64,
    /// Minimum head-line length (default 0.12).
    pub head_min_length: f64,
    /// Max vertical distance of the head-line midpoint from the palm center (default 0.1).
    pub head_band: f64,
    /// How far above the palm center a life-line midpoint may sit (default 0.2).
    pub life_band: f64,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            life_min_length: 0.1,
            heart_min_length: 0.15,
            head_min_length: 0.12,
            head_band: 0.1,
            life_band: 0.2,
        }
    }
}

impl ClassifierConfig {
    pub fn validate(&self) -> Result<(), PalmError> {
        let all = [
            self.life_min_length,
            self.heart_min_length,
            self.head_min_length,
            self.head_band,
            self.life_band,
        ];
        if all.iter().any(|v| !v.is_finite() || *v < 0.0) {
            return Err(PalmError::InvalidConfig(
                "thresholds must be finite and non-negative",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let c = ClassifierConfig::default();
        assert!((c.life_min_length - 0.1).abs() < 1e-15);
        assert!((c.heart_min_length - 0.15).abs() < 1e-15);
        assert!((c.head_min_length - 0.12).abs() < 1e-15);
        assert!(c.validate().is_ok());
    }

    #[test]
    fn negative_threshold_rejected() {
        let c = ClassifierConfig {
            head_band: -0.1,
            ..ClassifierConfig::default()
        };
        assert!(c.validate().is_err());
    }
}
