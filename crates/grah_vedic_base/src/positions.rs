//! Approximate sidereal longitudes of the nine grahas.
//!
//! These are intentionally simplified stand-ins for ephemeris data: the
//! Sun advances linearly through the year, the Moon at a fixed daily rate,
//! and the remaining bodies are fixed offsets from the Sun with small
//! periodic terms. The constants are part of the chart contract and must
//! not be tuned toward real astronomy.

use grah_geo::GeoPoint;
use grah_time::{BirthMoment, DAYS_PER_YEAR};
use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::ayanamsha::ayanamsa;
use crate::derived::{ChartStep, Derived};
use crate::error::{VedicError, finite};
use crate::graha::{ALL_GRAHAS, Graha};
use crate::position::PlanetPosition;
use crate::util::normalize_360;

/// Positions of all nine grahas, indexed by [`Graha`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GrahaPositions([PlanetPosition; 9]);

impl GrahaPositions {
    /// Build from raw longitudes in [`ALL_GRAHAS`] order.
    pub fn from_longitudes(longitudes: [f64; 9]) -> Self {
        Self(longitudes.map(PlanetPosition::from_longitude))
    }

    pub fn get(&self, graha: Graha) -> &PlanetPosition {
        &self.0[graha.index() as usize]
    }

    pub fn get_mut(&mut self, graha: Graha) -> &mut PlanetPosition {
        &mut self.0[graha.index() as usize]
    }

    /// Longitude of one graha.
    pub fn longitude(&self, graha: Graha) -> f64 {
        self.get(graha).longitude
    }

    /// House of one graha, if assigned.
    pub fn house(&self, graha: Graha) -> Option<u8> {
        self.get(graha).house
    }

    /// Iterate in [`ALL_GRAHAS`] order.
    pub fn iter(&self) -> impl Iterator<Item = (Graha, &PlanetPosition)> {
        ALL_GRAHAS.iter().copied().zip(self.0.iter())
    }

    pub fn positions_mut(&mut self) -> impl Iterator<Item = &mut PlanetPosition> {
        self.0.iter_mut()
    }
}

impl Serialize for GrahaPositions {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(9))?;
        for (graha, pos) in self.iter() {
            map.serialize_entry(graha.name(), pos)?;
        }
        map.end()
    }
}

/// Raw (un-normalized where non-negative) longitudes of the nine grahas.
///
/// `day_of_year` is 1-based; `latitude` only perturbs the Moon.
pub fn raw_longitudes(day_of_year: u32, ayanamsa_deg: f64, latitude: f64) -> [f64; 9] {
    let day = day_of_year as f64;
    let yf = day / DAYS_PER_YEAR;

    let sun = normalize_360(280.0 + yf * 360.0 - ayanamsa_deg);
    let moon = normalize_360(sun + day * 13.2 + latitude * 0.1);
    let mars = normalize_360(sun + 45.0 + yf * 180.0);
    let mercury = normalize_360(sun + 15.0 + (yf * 4.0).sin() * 20.0);
    let jupiter = normalize_360(sun + yf * 30.0 + 120.0);
    let venus = normalize_360(sun + (yf * 5.0).sin() * 25.0 + 200.0);
    let saturn = normalize_360(sun + yf * 12.0 + 300.0);
    let rahu = normalize_360(moon + 180.0 + (yf * 2.0).sin() * 10.0);
    let ketu = normalize_360(rahu + 180.0);

    [sun, moon, mars, mercury, jupiter, venus, saturn, rahu, ketu]
}

/// Compute all nine graha positions for a birth moment and place.
///
/// Houses are left unassigned.
pub fn planetary_positions(
    moment: &BirthMoment,
    point: GeoPoint,
) -> Result<GrahaPositions, VedicError> {
    let latitude = finite(point.latitude, "latitude")?;
    let aya = ayanamsa(moment).into_value();
    let longitudes = raw_longitudes(moment.day_of_year(), aya, latitude);
    for lon in longitudes {
        finite(lon, "graha longitude")?;
    }
    Ok(GrahaPositions::from_longitudes(longitudes))
}

/// Fixed longitudes used when positions cannot be computed, in
/// [`ALL_GRAHAS`] order.
const FALLBACK_LONGITUDES: [f64; 9] = [145.0, 100.0, 68.0, 140.0, 168.0, 95.0, 82.0, 42.0, 222.0];

/// Fixed houses reported with [`FALLBACK_LONGITUDES`]. They are part of the
/// fallback table and are not recomputed from the fallback ascendant.
const FALLBACK_HOUSES: [u8; 9] = [1, 12, 11, 1, 2, 12, 11, 10, 4];

/// The fixed fallback table of nine positions, houses included.
pub fn fallback_positions() -> GrahaPositions {
    let mut positions = GrahaPositions::from_longitudes(FALLBACK_LONGITUDES);
    for (pos, house) in positions.positions_mut().zip(FALLBACK_HOUSES) {
        pos.house = Some(house);
    }
    positions
}

/// Graha positions, or [`fallback_positions`] on failure.
pub fn graha_positions(moment: &BirthMoment, point: GeoPoint) -> Derived<GrahaPositions> {
    Derived::recover(
        ChartStep::Positions,
        planetary_positions(moment, point),
        fallback_positions,
    )
}
