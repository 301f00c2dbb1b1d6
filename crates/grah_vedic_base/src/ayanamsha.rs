//! Approximate Lahiri ayanamsa.
//!
//! The precession offset is modelled as a quadratic in Julian centuries
//! from J2000.0 plus a linear per-year epoch adjustment. This is a
//! deliberately simple polynomial, not the IAU precession theory.

use grah_time::{BirthMoment, jd_to_centuries};
use tracing::debug;

use crate::derived::{ChartStep, Derived};
use crate::error::{VedicError, finite};

/// Value used when the ayanamsa cannot be computed.
pub const FALLBACK_AYANAMSA_DEG: f64 = 24.0;

/// Polynomial coefficients: `C0 + C1*t + C2*t^2` with t in Julian centuries.
const C0: f64 = 23.85;
const C1: f64 = 0.396;
const C2: f64 = -0.0000309;

/// Degrees added per calendar year away from 2000.
const EPOCH_RATE_PER_YEAR: f64 = 0.0139;

/// Ayanamsa in degrees from Julian centuries and calendar year.
pub fn ayanamsa_from_centuries(t: f64, year: i32) -> f64 {
    let polynomial = C0 + C1 * t + C2 * t * t;
    let epoch_adjustment = (year - 2000) as f64 * EPOCH_RATE_PER_YEAR;
    polynomial + epoch_adjustment
}

/// Lahiri-style ayanamsa for the calendar day of `moment`.
///
/// Only the date matters; the time of day is ignored.
pub fn lahiri_ayanamsa_deg(moment: &BirthMoment) -> Result<f64, VedicError> {
    let jd = moment.julian_day()?;
    let t = jd_to_centuries(jd);
    let aya = finite(ayanamsa_from_centuries(t, moment.year()), "ayanamsa")?;
    debug!(jd, aya, "ayanamsa");
    Ok(aya)
}

/// Ayanamsa with the fixed [`FALLBACK_AYANAMSA_DEG`] on failure.
pub fn ayanamsa(moment: &BirthMoment) -> Derived<f64> {
    Derived::recover(ChartStep::Ayanamsa, lahiri_ayanamsa_deg(moment), || {
        FALLBACK_AYANAMSA_DEG
    })
}
