//! Lagna (ascendant) approximation.
//!
//! A sidereal-time proxy is built from clock hours and east longitude
//! (`(hours + lon/15) * 15`), the ayanamsa is subtracted and half the
//! latitude is added as a deterministic perturbation.

use grah_geo::GeoPoint;
use grah_time::BirthMoment;
use tracing::debug;

use crate::ayanamsha::ayanamsa;
use crate::derived::{ChartStep, Derived};
use crate::error::{VedicError, finite};
use crate::position::PlanetPosition;
use crate::util::normalize_360;

/// Ascendant longitude used when the lagna cannot be computed (Leo 15°).
pub const FALLBACK_ASCENDANT_DEG: f64 = 135.0;

/// Ascendant longitude in [0, 360) from local hours, place and ayanamsa.
pub fn ascendant_longitude(hours_of_day: f64, point: GeoPoint, ayanamsa_deg: f64) -> f64 {
    let local_sidereal_proxy = (hours_of_day + point.longitude / 15.0) * 15.0;
    normalize_360(local_sidereal_proxy - ayanamsa_deg + point.latitude * 0.5)
}

/// Compute the ascendant for a birth moment and place.
///
/// The ascendant is always in house 1.
pub fn lagna_position(moment: &BirthMoment, point: GeoPoint) -> Result<PlanetPosition, VedicError> {
    finite(point.latitude, "latitude")?;
    finite(point.longitude, "longitude")?;
    let aya = ayanamsa(moment).into_value();
    let lon = finite(
        ascendant_longitude(moment.hours_of_day(), point, aya),
        "ascendant",
    )?;
    debug!(lon, "ascendant");
    Ok(PlanetPosition::from_longitude(lon).in_house(1))
}

/// The fixed fallback ascendant.
pub fn fallback_ascendant() -> PlanetPosition {
    PlanetPosition::from_longitude(FALLBACK_ASCENDANT_DEG).in_house(1)
}

/// Ascendant, or [`fallback_ascendant`] on failure.
pub fn ascendant(moment: &BirthMoment, point: GeoPoint) -> Derived<PlanetPosition> {
    Derived::recover(
        ChartStep::Ascendant,
        lagna_position(moment, point),
        fallback_ascendant,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rashi::Rashi;

    #[test]
    fn noon_at_greenwich_equator() {
        // (12 + 0) * 15 = 180, minus 24 = 156
        let lon = ascendant_longitude(12.0, GeoPoint::new(0.0, 0.0), 24.0);
        assert!((lon - 156.0).abs() < 1e-12);
    }

    #[test]
    fn wraps_negative_values() {
        // 0h at 0 lon with a -60 latitude: 0 - 24 - 30 = -54 → 306
        let lon = ascendant_longitude(0.0, GeoPoint::new(-60.0, 0.0), 24.0);
        assert!((lon - 306.0).abs() < 1e-12);
    }

    #[test]
    fn east_longitude_adds_directly() {
        let a = ascendant_longitude(6.0, GeoPoint::new(10.0, 0.0), 23.9);
        let b = ascendant_longitude(6.0, GeoPoint::new(10.0, 30.0), 23.9);
        assert!((normalize_360(b - a) - 30.0).abs() < 1e-9);
    }

    #[test]
    fn fallback_is_leo() {
        let asc = fallback_ascendant();
        assert_eq!(asc.sign, Rashi::Simha);
        assert!((asc.degree - 15.0).abs() < 1e-12);
        assert_eq!(asc.house, Some(1));
    }

    #[test]
    fn infinite_longitude_falls_back() {
        let m = BirthMoment::from_ymd_hm(2000, 1, 1, 12, 0).unwrap();
        let d = ascendant(&m, GeoPoint::new(28.0, f64::INFINITY));
        assert!(d.is_fallback());
        assert_eq!(d.value().longitude, FALLBACK_ASCENDANT_DEG);
    }
}
