//! Rashi (zodiac sign) and DMS (degrees-minutes-seconds) computation.
//!
//! The ecliptic is divided into 12 equal signs of 30 degrees each, starting
//! from Mesha (Aries) at 0 deg sidereal.

use serde::{Serialize, Serializer};

use crate::util::normalize_360;

/// Span of one rashi in degrees.
pub const RASHI_SPAN: f64 = 30.0;

/// The 12 rashis starting from Mesha (Aries).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rashi {
    Mesha,
    Vrishabha,
    Mithuna,
    Karka,
    Simha,
    Kanya,
    Tula,
    Vrischika,
    Dhanu,
    Makara,
    Kumbha,
    Meena,
}

/// All 12 rashis in order (0 = Mesha, 11 = Meena).
pub const ALL_RASHIS: [Rashi; 12] = [
    Rashi::Mesha,
    Rashi::Vrishabha,
    Rashi::Mithuna,
    Rashi::Karka,
    Rashi::Simha,
    Rashi::Kanya,
    Rashi::Tula,
    Rashi::Vrischika,
    Rashi::Dhanu,
    Rashi::Makara,
    Rashi::Kumbha,
    Rashi::Meena,
];

impl Rashi {
    /// Sanskrit name of the rashi.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Mesha => "Mesha",
            Self::Vrishabha => "Vrishabha",
            Self::Mithuna => "Mithuna",
            Self::Karka => "Karka",
            Self::Simha => "Simha",
            Self::Kanya => "Kanya",
            Self::Tula => "Tula",
            Self::Vrischika => "Vrischika",
            Self::Dhanu => "Dhanu",
            Self::Makara => "Makara",
            Self::Kumbha => "Kumbha",
            Self::Meena => "Meena",
        }
    }

    /// Western (English) sign name. This is the name charts report.
    pub const fn western_name(self) -> &'static str {
        match self {
            Self::Mesha => "Aries",
            Self::Vrishabha => "Taurus",
            Self::Mithuna => "Gemini",
            Self::Karka => "Cancer",
            Self::Simha => "Leo",
            Self::Kanya => "Virgo",
            Self::Tula => "Libra",
            Self::Vrischika => "Scorpio",
            Self::Dhanu => "Sagittarius",
            Self::Makara => "Capricorn",
            Self::Kumbha => "Aquarius",
            Self::Meena => "Pisces",
        }
    }

    /// 0-based index (Mesha=0 .. Meena=11).
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// All 12 rashis in order.
    pub const fn all() -> &'static [Rashi; 12] {
        &ALL_RASHIS
    }

    /// Rashi for a 0-based index, wrapping modulo 12.
    pub const fn from_index(index: u8) -> Rashi {
        ALL_RASHIS[(index % 12) as usize]
    }
}

impl Serialize for Rashi {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.western_name())
    }
}

impl std::fmt::Display for Rashi {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.western_name())
    }
}

/// Degrees-minutes-seconds representation of an angle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dms {
    /// Whole degrees (0..29 within a rashi, or 0..359 standalone).
    pub degrees: u16,
    /// Arc-minutes (0..59).
    pub minutes: u8,
    /// Arc-seconds (0.0..60.0), may include fractional part.
    pub seconds: f64,
}

impl std::fmt::Display for Dms {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}°{:02}'{:05.2}\"", self.degrees, self.minutes, self.seconds)
    }
}

/// Full rashi position result.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RashiInfo {
    pub rashi: Rashi,
    /// 0-based rashi index (0 = Mesha).
    pub rashi_index: u8,
    /// Position within the rashi as DMS.
    pub dms: Dms,
    /// Decimal degrees within the rashi [0.0, 30.0).
    pub degrees_in_rashi: f64,
}

/// Convert decimal degrees to degrees-minutes-seconds.
///
/// Handles negative input by taking absolute value.
pub fn deg_to_dms(deg: f64) -> Dms {
    let d = deg.abs();
    let total_degrees = d.floor() as u16;
    let remainder = (d - total_degrees as f64) * 60.0;
    let minutes = remainder.floor() as u8;
    let seconds = (remainder - minutes as f64) * 60.0;
    Dms {
        degrees: total_degrees,
        minutes,
        seconds,
    }
}

/// Determine rashi from sidereal ecliptic longitude.
///
/// Mesha = [0, 30), Vrishabha = [30, 60), and so on. Input outside
/// [0, 360) is wrapped first.
pub fn rashi_from_longitude(sidereal_lon_deg: f64) -> RashiInfo {
    let lon = normalize_360(sidereal_lon_deg);
    // Wrap in case of floating point edge (exactly 360.0)
    let rashi_idx = ((lon / RASHI_SPAN).floor() as u8) % 12;
    let degrees_in_rashi = lon % RASHI_SPAN;

    RashiInfo {
        rashi: Rashi::from_index(rashi_idx),
        rashi_index: rashi_idx,
        dms: deg_to_dms(degrees_in_rashi),
        degrees_in_rashi,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rashi_indices_sequential() {
        for (i, r) in ALL_RASHIS.iter().enumerate() {
            assert_eq!(r.index() as usize, i);
            assert_eq!(Rashi::from_index(i as u8), *r);
        }
    }

    #[test]
    fn from_index_wraps() {
        assert_eq!(Rashi::from_index(12), Rashi::Mesha);
        assert_eq!(Rashi::from_index(23), Rashi::Meena);
    }

    #[test]
    fn deg_to_dms_known() {
        // 23.853 deg = 23 deg 51' 10.8"
        let d = deg_to_dms(23.853);
        assert_eq!(d.degrees, 23);
        assert_eq!(d.minutes, 51);
        assert!((d.seconds - 10.8).abs() < 0.01);
    }

    #[test]
    fn rashi_all_boundaries() {
        for i in 0..12u8 {
            let lon = i as f64 * 30.0;
            let info = rashi_from_longitude(lon);
            assert_eq!(info.rashi_index, i, "boundary at {lon} deg");
            assert!(info.degrees_in_rashi.abs() < 1e-10);
        }
    }

    #[test]
    fn rashi_mid_sign() {
        let info = rashi_from_longitude(45.5);
        assert_eq!(info.rashi, Rashi::Vrishabha);
        assert!((info.degrees_in_rashi - 15.5).abs() < 1e-10);
        assert_eq!(info.dms.degrees, 15);
        assert_eq!(info.dms.minutes, 30);
    }

    #[test]
    fn rashi_negative() {
        let info = rashi_from_longitude(-10.0);
        assert_eq!(info.rashi, Rashi::Meena); // 350 deg
        assert!((info.degrees_in_rashi - 20.0).abs() < 1e-10);
    }

    #[test]
    fn leo_is_simha() {
        let info = rashi_from_longitude(135.0);
        assert_eq!(info.rashi.western_name(), "Leo");
        assert_eq!(info.rashi.name(), "Simha");
    }

    #[test]
    fn dms_display() {
        assert_eq!(deg_to_dms(10.5).to_string(), "10°30'00.00\"");
    }
}
