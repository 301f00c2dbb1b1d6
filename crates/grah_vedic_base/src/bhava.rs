//! Equal-house (bhava) placement measured from the ascendant.
//!
//! House `n` spans `[asc + 30*(n-1), asc + 30*n)` on the ecliptic.

use crate::error::{VedicError, finite};
use crate::positions::GrahaPositions;

/// House number (1-12) of a longitude relative to the ascendant.
pub fn house_of(longitude: f64, ascendant_deg: f64) -> u8 {
    let diff = (longitude - ascendant_deg + 360.0) % 360.0;
    let diff = if diff < 0.0 { diff + 360.0 } else { diff };
    ((diff / 30.0).floor() as u8).min(11) + 1
}

/// Assign the house of every graha in place.
///
/// Idempotent for a given ascendant.
pub fn assign_houses(ascendant_deg: f64, planets: &mut GrahaPositions) -> Result<(), VedicError> {
    let asc = finite(ascendant_deg, "ascendant")?;
    for pos in planets.positions_mut() {
        pos.house = Some(house_of(pos.longitude, asc));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graha::Graha;

    #[test]
    fn ascendant_degree_is_first_house() {
        assert_eq!(house_of(135.0, 135.0), 1);
        assert_eq!(house_of(164.999, 135.0), 1);
        assert_eq!(house_of(165.0, 135.0), 2);
    }

    #[test]
    fn behind_ascendant_is_twelfth() {
        assert_eq!(house_of(134.0, 135.0), 12);
        assert_eq!(house_of(110.0, 135.0), 12);
        assert_eq!(house_of(105.0, 135.0), 12);
    }

    #[test]
    fn thirty_five_degrees_behind_is_eleventh() {
        // (100 - 135 + 360) = 325, floor(325 / 30) + 1 = 11
        assert_eq!(house_of(100.0, 135.0), 11);
        assert_eq!(house_of(104.999, 135.0), 11);
    }

    #[test]
    fn wraps_past_zero() {
        assert_eq!(house_of(10.0, 350.0), 1);
        assert_eq!(house_of(341.0, 350.0), 12);
    }

    #[test]
    fn assign_is_idempotent() {
        let mut p = GrahaPositions::from_longitudes([
            0.0, 30.0, 60.0, 90.0, 120.0, 150.0, 180.0, 210.0, 30.0,
        ]);
        assign_houses(15.0, &mut p).unwrap();
        let first = p;
        assign_houses(15.0, &mut p).unwrap();
        assert_eq!(first, p);
        assert_eq!(p.house(Graha::Surya), Some(12));
        assert_eq!(p.house(Graha::Chandra), Some(1));
        assert_eq!(p.house(Graha::Rahu), Some(7));
    }

    #[test]
    fn nan_ascendant_rejected() {
        let mut p = GrahaPositions::from_longitudes([0.0; 9]);
        assert!(assign_houses(f64::NAN, &mut p).is_err());
        assert_eq!(p.house(Graha::Surya), None);
    }
}
