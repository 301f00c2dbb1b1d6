//! Running Vimshottari mahadasha.
//!
//! The Moon's nakshatra at birth selects the starting lord from the
//! 9-lord cycle (Ketu, Venus, Sun, Moon, Mars, Rahu, Jupiter, Saturn,
//! Mercury) repeated three times over the 27 nakshatras. The unelapsed
//! fraction of that nakshatra gives the balance of the lord's period at
//! birth, from which the native's age is subtracted.
//!
//! The model does not advance to the next lord once the birth period is
//! exhausted: the remaining time simply floors at a configured minimum.

use chrono::NaiveDateTime;
use grah_time::{BirthMoment, years_between};
use serde::Serialize;

use crate::derived::{ChartStep, Derived};
use crate::error::{VedicError, finite};
use crate::graha::Graha;
use crate::nakshatra::NAKSHATRA_SPAN_27;
use crate::util::normalize_360;

/// Vimshottari lord sequence.
pub const VIMSHOTTARI_SEQUENCE: [Graha; 9] = [
    Graha::Ketu,
    Graha::Shukra,
    Graha::Surya,
    Graha::Chandra,
    Graha::Mangal,
    Graha::Rahu,
    Graha::Guru,
    Graha::Shani,
    Graha::Buddh,
];

/// Total cycle length in years.
pub const VIMSHOTTARI_TOTAL_YEARS: f64 = 120.0;

/// Default floor on the remaining years of the running period.
pub const MIN_REMAINING_YEARS: f64 = 0.5;

/// Full mahadasha length in years for each lord.
pub const fn vimshottari_years(lord: Graha) -> f64 {
    match lord {
        Graha::Ketu => 7.0,
        Graha::Shukra => 20.0,
        Graha::Surya => 6.0,
        Graha::Chandra => 10.0,
        Graha::Mangal => 7.0,
        Graha::Rahu => 18.0,
        Graha::Guru => 16.0,
        Graha::Shani => 19.0,
        Graha::Buddh => 17.0,
    }
}

/// Starting lord for a 0-based nakshatra index.
pub const fn nakshatra_lord(nakshatra_index: u8) -> Graha {
    VIMSHOTTARI_SEQUENCE[(nakshatra_index % 9) as usize]
}

/// The running major period.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DashaState {
    pub ruling_planet: Graha,
    /// Years left in the running period, never below the configured floor.
    pub remaining_years: f64,
    /// 1-based nakshatra of the Moon at birth (1 = Ashwini).
    pub nakshatra_index: u8,
}

/// Moon nakshatra birth balance.
///
/// Returns `(nakshatra_index, balance_years)` with a 0-based index.
pub fn nakshatra_birth_balance(moon_sidereal_lon: f64) -> (u8, f64) {
    let lon = normalize_360(moon_sidereal_lon);
    let nak_idx = ((lon / NAKSHATRA_SPAN_27).floor() as u8) % 27;
    let position_in_nak = lon % NAKSHATRA_SPAN_27;
    let remaining_fraction = 1.0 - position_in_nak / NAKSHATRA_SPAN_27;
    let balance_years = remaining_fraction * vimshottari_years(nakshatra_lord(nak_idx));
    (nak_idx, balance_years)
}

/// Running mahadasha for a Moon longitude, birth moment and "now".
pub fn vimshottari_dasha(
    moon_longitude: f64,
    birth: &BirthMoment,
    now: NaiveDateTime,
    min_remaining_years: f64,
) -> Result<DashaState, VedicError> {
    let moon = finite(moon_longitude, "moon longitude")?;
    let (nak_idx, balance) = nakshatra_birth_balance(moon);
    let age_years = years_between(birth.datetime(), now);
    let remaining = finite(balance - age_years, "dasha balance")?.max(min_remaining_years);

    Ok(DashaState {
        ruling_planet: nakshatra_lord(nak_idx),
        remaining_years: remaining,
        nakshatra_index: nak_idx + 1,
    })
}

/// The fixed fallback dasha: Moon, 5 years, first nakshatra.
pub const FALLBACK_DASHA: DashaState = DashaState {
    ruling_planet: Graha::Chandra,
    remaining_years: 5.0,
    nakshatra_index: 1,
};

/// Running mahadasha, or [`FALLBACK_DASHA`] on failure.
pub fn current_dasha(
    moon_longitude: f64,
    birth: &BirthMoment,
    now: NaiveDateTime,
    min_remaining_years: f64,
) -> Derived<DashaState> {
    Derived::recover(
        ChartStep::Dasha,
        vimshottari_dasha(moon_longitude, birth, now, min_remaining_years),
        || FALLBACK_DASHA,
    )
}
