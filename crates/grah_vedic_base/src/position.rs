//! Per-body chart position: longitude with its derived sign, nakshatra,
//! pada and (once assigned) house.

use serde::Serialize;

use crate::nakshatra::{Nakshatra, nakshatra_from_longitude};
use crate::rashi::{Rashi, rashi_from_longitude};
use crate::util::normalize_360;

/// A body (or the ascendant) placed on the sidereal zodiac.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PlanetPosition {
    /// Sidereal longitude in [0, 360).
    pub longitude: f64,
    pub sign: Rashi,
    /// Degrees within the sign, `longitude mod 30`.
    pub degree: f64,
    pub nakshatra: Nakshatra,
    /// 1-4.
    pub pada: u8,
    /// 1-12 after house assignment, `None` before.
    pub house: Option<u8>,
}

impl PlanetPosition {
    /// Derive sign, degree, nakshatra and pada from a raw longitude.
    ///
    /// The longitude is wrapped into [0, 360) first; the house is left
    /// unassigned.
    pub fn from_longitude(raw_longitude: f64) -> Self {
        let longitude = normalize_360(raw_longitude);
        let rashi = rashi_from_longitude(longitude);
        let nak = nakshatra_from_longitude(longitude);
        Self {
            longitude,
            sign: rashi.rashi,
            degree: rashi.degrees_in_rashi,
            nakshatra: nak.nakshatra,
            pada: nak.pada,
            house: None,
        }
    }

    /// Same position with the house set.
    pub fn in_house(mut self, house: u8) -> Self {
        self.house = Some(house);
        self
    }

    pub fn sign_name(&self) -> &'static str {
        self.sign.western_name()
    }

    /// True when every numeric field is finite.
    pub fn is_finite(&self) -> bool {
        self.longitude.is_finite() && self.degree.is_finite()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derive_from_longitude() {
        let p = PlanetPosition::from_longitude(145.0);
        assert_eq!(p.sign, Rashi::Simha);
        assert!((p.degree - 25.0).abs() < 1e-12);
        assert_eq!(p.nakshatra, Nakshatra::PurvaPhalguni);
        assert_eq!(p.pada, 4);
        assert_eq!(p.house, None);
    }

    #[test]
    fn wraps_raw_longitude() {
        let p = PlanetPosition::from_longitude(-5.0);
        assert!((p.longitude - 355.0).abs() < 1e-12);
        assert_eq!(p.sign, Rashi::Meena);
        assert_eq!(p.nakshatra, Nakshatra::Revati);
    }

    #[test]
    fn in_house_sets_house() {
        let p = PlanetPosition::from_longitude(10.0).in_house(7);
        assert_eq!(p.house, Some(7));
    }
}
