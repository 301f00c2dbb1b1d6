//! Gregorian calendar → Julian Day conversion.
//!
//! Uses the classic Meeus algorithm on whole calendar days: January and
//! February are counted as months 13 and 14 of the previous year, and the
//! result refers to 0h of the given day (hence the trailing `- 1524.5`).

use crate::error::TimeError;

/// Julian Day of the J2000.0 epoch (2000-Jan-01 12:00 TT).
pub const J2000_JD: f64 = 2_451_545.0;

/// Days in a Julian century.
pub const DAYS_PER_JULIAN_CENTURY: f64 = 36_525.0;

/// Julian Day Number at 0h of a Gregorian calendar day.
///
/// `month` is 1-based. No range validation is applied to the fields; the
/// only failure is a non-finite result.
pub fn calendar_day_to_jd(year: i32, month: u32, day: u32) -> Result<f64, TimeError> {
    let (y, m) = if month <= 2 {
        (year as f64 - 1.0, month as f64 + 12.0)
    } else {
        (year as f64, month as f64)
    };

    let a = (y / 100.0).floor();
    let b = 2.0 - a + (a / 4.0).floor();
    let jd = (365.25 * (y + 4716.0)).floor() + (30.6001 * (m + 1.0)).floor() + day as f64 + b
        - 1524.5;

    if jd.is_finite() {
        Ok(jd)
    } else {
        Err(TimeError::NonFinite("julian day"))
    }
}

/// Julian centuries elapsed since J2000.0.
pub fn jd_to_centuries(jd: f64) -> f64 {
    (jd - J2000_JD) / DAYS_PER_JULIAN_CENTURY
}
