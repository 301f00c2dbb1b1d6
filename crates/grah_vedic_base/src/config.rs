//! Tunable parameters for chart generation.

use serde::Serialize;

use crate::error::VedicError;

/// Configuration for [`ChartEngine`](crate::ChartEngine).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ChartConfig {
    /// Maximum angular separation for a conjunction yoga, degrees (default 10).
    pub conjunction_orb_deg: f64,
    /// Floor on the remaining years of the running dasha (default 0.5).
    pub min_dasha_remaining_years: f64,
    /// Maximum number of yogas reported (default 5).
    pub max_yogas: usize,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            conjunction_orb_deg: 10.0,
            min_dasha_remaining_years: 0.5,
            max_yogas: 5,
        }
    }
}

impl ChartConfig {
    pub fn validate(&self) -> Result<(), VedicError> {
        if !self.conjunction_orb_deg.is_finite()
            || !(0.0..=180.0).contains(&self.conjunction_orb_deg)
        {
            return Err(VedicError::InvalidConfig(
                "conjunction_orb_deg must be in [0, 180]",
            ));
        }
        if !self.min_dasha_remaining_years.is_finite() || self.min_dasha_remaining_years < 0.0 {
            return Err(VedicError::InvalidConfig(
                "min_dasha_remaining_years must be non-negative",
            ));
        }
        if self.max_yogas == 0 {
            return Err(VedicError::InvalidConfig("max_yogas must be > 0"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let c = ChartConfig::default();
        assert!((c.conjunction_orb_deg - 10.0).abs() < 1e-15);
        assert!((c.min_dasha_remaining_years - 0.5).abs() < 1e-15);
        assert_eq!(c.max_yogas, 5);
        assert!(c.validate().is_ok());
    }

    #[test]
    fn rejects_negative_orb() {
        let c = ChartConfig {
            conjunction_orb_deg: -1.0,
            ..ChartConfig::default()
        };
        assert!(matches!(c.validate(), Err(VedicError::InvalidConfig(_))));
    }

    #[test]
    fn rejects_nan_floor() {
        let c = ChartConfig {
            min_dasha_remaining_years: f64::NAN,
            ..ChartConfig::default()
        };
        assert!(c.validate().is_err());
    }

    #[test]
    fn rejects_zero_yogas() {
        let c = ChartConfig {
            max_yogas: 0,
            ..ChartConfig::default()
        };
        assert!(c.validate().is_err());
    }
}
