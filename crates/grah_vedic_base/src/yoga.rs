//! Named planetary combinations.
//!
//! Five rules are checked in fixed priority order; the result keeps that
//! order and is truncated to [`ChartConfig::max_yogas`].

use std::fmt::{Display, Formatter};

use serde::Serialize;

use crate::config::ChartConfig;
use crate::derived::{ChartStep, Derived};
use crate::error::VedicError;
use crate::graha::{ALL_GRAHAS, Graha};
use crate::positions::GrahaPositions;
use crate::util::angular_separation;

/// Houses counted for the Raja combination (kendras and trikonas).
pub const KENDRA_TRIKONA_HOUSES: [u8; 6] = [1, 4, 5, 7, 9, 10];

/// House differences between Jupiter and the Moon that form Gajakesari.
pub const GAJAKESARI_HOUSE_DIFFS: [u8; 4] = [0, 3, 6, 8];

/// Minimum number of bodies in kendra/trikona houses for Raja.
pub const RAJA_MIN_BODIES: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Yoga {
    BudhaAditya,
    Gajakesari,
    ChandraMangal,
    Raja,
    Dhana,
    /// Placeholder reported when the rules could not be evaluated.
    BasicCombinations,
}

impl Yoga {
    /// Display label including the traditional signification.
    pub const fn label(self) -> &'static str {
        match self {
            Self::BudhaAditya => "Budha-Aditya Yoga (Intelligence & Communication)",
            Self::Gajakesari => "Gajakesari Yoga (Wisdom & Prosperity)",
            Self::ChandraMangal => "Chandra-Mangal Yoga (Wealth & Property)",
            Self::Raja => "Raja Yoga combinations (Leadership & Success)",
            Self::Dhana => "Dhana Yoga (Financial Prosperity)",
            Self::BasicCombinations => "Basic planetary combinations present",
        }
    }

    /// Label used by the fixed whole-chart fallback, which omits the
    /// signification.
    pub const fn fallback_label(self) -> &'static str {
        match self {
            Self::BudhaAditya => "Budha-Aditya Yoga",
            Self::Gajakesari => "Gajakesari Yoga",
            Self::ChandraMangal => "Chandra-Mangal Yoga",
            Self::Raja => "Raja Yoga combinations",
            Self::Dhana => "Dhana Yoga",
            Self::BasicCombinations => "Basic planetary combinations present",
        }
    }

    pub const fn short_name(self) -> &'static str {
        match self {
            Self::BudhaAditya => "Budha-Aditya",
            Self::Gajakesari => "Gajakesari",
            Self::ChandraMangal => "Chandra-Mangal",
            Self::Raja => "Raja",
            Self::Dhana => "Dhana",
            Self::BasicCombinations => "Basic",
        }
    }
}

impl Display for Yoga {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl Serialize for Yoga {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

fn house(planets: &GrahaPositions, graha: Graha) -> Result<u8, VedicError> {
    planets.house(graha).ok_or(VedicError::HousesUnassigned(graha))
}

fn conjunct(planets: &GrahaPositions, a: Graha, b: Graha, orb: f64) -> bool {
    angular_separation(planets.longitude(a), planets.longitude(b)) <= orb
}

/// Evaluate the yoga rules against positions with houses assigned.
pub fn identify_yogas(
    planets: &GrahaPositions,
    config: &ChartConfig,
) -> Result<Vec<Yoga>, VedicError> {
    config.validate()?;
    for g in ALL_GRAHAS {
        house(planets, g)?;
    }
    let orb = config.conjunction_orb_deg;
    let mut yogas = Vec::with_capacity(5);

    if conjunct(planets, Graha::Surya, Graha::Buddh, orb) {
        yogas.push(Yoga::BudhaAditya);
    }

    let diff = house(planets, Graha::Guru)?.abs_diff(house(planets, Graha::Chandra)?);
    if GAJAKESARI_HOUSE_DIFFS.contains(&diff) {
        yogas.push(Yoga::Gajakesari);
    }

    if conjunct(planets, Graha::Chandra, Graha::Mangal, orb) {
        yogas.push(Yoga::ChandraMangal);
    }

    let in_kendra_trikona = planets
        .iter()
        .filter(|(_, p)| p.house.is_some_and(|h| KENDRA_TRIKONA_HOUSES.contains(&h)))
        .count();
    if in_kendra_trikona >= RAJA_MIN_BODIES {
        yogas.push(Yoga::Raja);
    }

    if house(planets, Graha::Shukra)? == 2 || house(planets, Graha::Guru)? == 11 {
        yogas.push(Yoga::Dhana);
    }

    yogas.truncate(config.max_yogas);
    Ok(yogas)
}

/// Yoga list, or `[BasicCombinations]` if the rules could not be evaluated.
pub fn yogas(planets: &GrahaPositions, config: &ChartConfig) -> Derived<Vec<Yoga>> {
    Derived::recover(ChartStep::Yogas, identify_yogas(planets, config), || {
        vec![Yoga::BasicCombinations]
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Positions where no rule fires: bodies spread out, Moon/Jupiter 4 houses
    /// apart, at most two bodies in kendra/trikona houses.
    fn quiet_chart() -> GrahaPositions {
        let lons = [0.0, 100.0, 200.0, 30.0, 130.0, 60.0, 160.0, 250.0, 70.0];
        let houses = [2, 2, 7, 11, 6, 12, 8, 11, 1];
        let mut p = GrahaPositions::from_longitudes(lons);
        for (pos, h) in p.positions_mut().zip(houses) {
            pos.house = Some(h);
        }
        p
    }

    #[test]
    fn quiet_chart_has_no_yogas() {
        let y = identify_yogas(&quiet_chart(), &ChartConfig::default()).unwrap();
        assert!(y.is_empty(), "{y:?}");
    }

    #[test]
    fn budha_aditya_wraps_around_zero() {
        let mut p = quiet_chart();
        p.get_mut(Graha::Surya).longitude = 355.0;
        p.get_mut(Graha::Buddh).longitude = 3.0;
        let y = identify_yogas(&p, &ChartConfig::default()).unwrap();
        assert_eq!(y, vec![Yoga::BudhaAditya]);
    }

    #[test]
    fn gajakesari_on_house_difference() {
        let mut p = quiet_chart();
        p.get_mut(Graha::Guru).house = Some(6);
        p.get_mut(Graha::Chandra).house = Some(12);
        let y = identify_yogas(&p, &ChartConfig::default()).unwrap();
        assert_eq!(y, vec![Yoga::Gajakesari]);
    }

    #[test]
    fn dhana_from_jupiter_in_eleventh() {
        let mut p = quiet_chart();
        p.get_mut(Graha::Guru).house = Some(11);
        let y = identify_yogas(&p, &ChartConfig::default()).unwrap();
        assert_eq!(y, vec![Yoga::Dhana]);
    }

    #[test]
    fn priority_order_and_truncation() {
        let mut p = quiet_chart();
        p.get_mut(Graha::Buddh).longitude = 5.0;
        p.get_mut(Graha::Mangal).longitude = 104.0;
        p.get_mut(Graha::Shukra).house = Some(2);
        let y = identify_yogas(&p, &ChartConfig::default()).unwrap();
        assert_eq!(y, vec![Yoga::BudhaAditya, Yoga::ChandraMangal, Yoga::Dhana]);

        let cfg = ChartConfig {
            max_yogas: 2,
            ..ChartConfig::default()
        };
        let y = identify_yogas(&p, &cfg).unwrap();
        assert_eq!(y, vec![Yoga::BudhaAditya, Yoga::ChandraMangal]);
    }

    #[test]
    fn raja_needs_three_bodies() {
        let mut p = quiet_chart();
        p.get_mut(Graha::Surya).house = Some(10);
        let y = identify_yogas(&p, &ChartConfig::default()).unwrap();
        assert_eq!(y, vec![Yoga::Raja]);
    }

    #[test]
    fn unassigned_houses_fall_back() {
        let p = GrahaPositions::from_longitudes([0.0; 9]);
        assert!(matches!(
            identify_yogas(&p, &ChartConfig::default()),
            Err(VedicError::HousesUnassigned(Graha::Surya))
        ));
        let d = yogas(&p, &ChartConfig::default());
        assert!(d.is_fallback());
        assert_eq!(d.value(), &vec![Yoga::BasicCombinations]);
    }

    #[test]
    fn label_matches_serialized_form() {
        assert_eq!(Yoga::Dhana.to_string(), "Dhana Yoga (Financial Prosperity)");
    }
}
