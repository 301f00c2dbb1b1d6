//! Civil birth moment: a local calendar date and wall-clock time.
//!
//! Birth data arrives as separate date and time strings. The moment is a
//! naive (zone-less) date-time; every chart quantity is derived from its
//! calendar fields, so no time-zone conversion is applied.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

use crate::error::TimeError;
use crate::julian::calendar_day_to_jd;

/// Days per year used for ages and dasha periods.
pub const DAYS_PER_YEAR: f64 = 365.25;

const MILLIS_PER_YEAR: f64 = 86_400_000.0 * DAYS_PER_YEAR;

/// Accepted wall-clock formats, tried in order.
const TIME_FORMATS: [&str; 5] = ["%H:%M:%S", "%H:%M", "%I:%M %p", "%I:%M%p", "%I:%M:%S %p"];

/// Local civil date/time of birth.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BirthMoment(NaiveDateTime);

impl BirthMoment {
    pub fn new(datetime: NaiveDateTime) -> Self {
        Self(datetime)
    }

    /// Build from calendar fields (month and day 1-based).
    pub fn from_ymd_hm(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
    ) -> Result<Self, TimeError> {
        let date = NaiveDate::from_ymd_opt(year, month, day).ok_or(TimeError::OutOfRange)?;
        let time = NaiveTime::from_hms_opt(hour, minute, 0).ok_or(TimeError::OutOfRange)?;
        Ok(Self(date.and_time(time)))
    }

    /// Parse a `YYYY-MM-DD` date and a wall-clock time string.
    ///
    /// The time accepts `HH:MM`, `HH:MM:SS` and 12-hour `hh:mm AM/PM`.
    /// An empty time means midnight.
    pub fn parse(date: &str, time: &str) -> Result<Self, TimeError> {
        let date_str = date.trim();
        let date = NaiveDate::parse_from_str(date_str, "%Y-%m-%d")
            .map_err(|_| TimeError::InvalidDate(date_str.to_string()))?;
        let time = parse_wall_time(time)?;
        Ok(Self(date.and_time(time)))
    }

    pub fn datetime(&self) -> NaiveDateTime {
        self.0
    }

    pub fn year(&self) -> i32 {
        self.0.year()
    }

    /// Calendar month, 1-12.
    pub fn month(&self) -> u32 {
        self.0.month()
    }

    /// Day of month, 1-31.
    pub fn day(&self) -> u32 {
        self.0.day()
    }

    pub fn hour(&self) -> u32 {
        self.0.hour()
    }

    pub fn minute(&self) -> u32 {
        self.0.minute()
    }

    /// 1-based ordinal day within the year (Jan 1 = 1, Dec 31 = 365/366).
    pub fn day_of_year(&self) -> u32 {
        self.0.ordinal()
    }

    /// Decimal hours since local midnight, ignoring seconds.
    pub fn hours_of_day(&self) -> f64 {
        self.hour() as f64 + self.minute() as f64 / 60.0
    }

    /// Julian Day Number at 0h of the birth date.
    pub fn julian_day(&self) -> Result<f64, TimeError> {
        calendar_day_to_jd(self.year(), self.month(), self.day())
    }
}

impl From<NaiveDateTime> for BirthMoment {
    fn from(datetime: NaiveDateTime) -> Self {
        Self(datetime)
    }
}

impl FromStr for BirthMoment {
    type Err = TimeError;

    /// Parses `YYYY-MM-DD HH:MM[:SS]` or `YYYY-MM-DDTHH:MM[:SS]`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        match s.split_once(['T', ' ']) {
            Some((date, time)) => Self::parse(date, time),
            None => Self::parse(s, ""),
        }
    }
}

impl Display for BirthMoment {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d %H:%M"))
    }
}

fn parse_wall_time(time: &str) -> Result<NaiveTime, TimeError> {
    let t = time.trim();
    if t.is_empty() {
        return NaiveTime::from_hms_opt(0, 0, 0).ok_or(TimeError::OutOfRange);
    }
    TIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveTime::parse_from_str(t, fmt).ok())
        .ok_or_else(|| TimeError::InvalidTime(t.to_string()))
}

/// Elapsed years (of 365.25 days) from `from` to `to`; negative when `to`
/// precedes `from`.
pub fn years_between(from: NaiveDateTime, to: NaiveDateTime) -> f64 {
    (to - from).num_milliseconds() as f64 / MILLIS_PER_YEAR
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_24h() {
        let m = BirthMoment::parse("2000-01-01", "12:00").unwrap();
        assert_eq!(m.year(), 2000);
        assert_eq!(m.month(), 1);
        assert_eq!(m.day(), 1);
        assert_eq!(m.hour(), 12);
        assert_eq!(m.minute(), 0);
    }

    #[test]
    fn parse_with_seconds() {
        let m = BirthMoment::parse("1985-07-14", "06:45:30").unwrap();
        assert_eq!(m.hour(), 6);
        assert_eq!(m.minute(), 45);
    }

    #[test]
    fn parse_12h() {
        let m = BirthMoment::parse("1985-07-14", "07:15 PM").unwrap();
        assert_eq!(m.hour(), 19);
        assert_eq!(m.minute(), 15);
    }

    #[test]
    fn empty_time_is_midnight() {
        let m = BirthMoment::parse("1985-07-14", "  ").unwrap();
        assert_eq!(m.hour(), 0);
        assert_eq!(m.minute(), 0);
    }

    #[test]
    fn reject_bad_date() {
        assert_eq!(
            BirthMoment::parse("2023-02-29", "10:00"),
            Err(TimeError::InvalidDate("2023-02-29".into()))
        );
    }

    #[test]
    fn reject_bad_time() {
        assert!(matches!(
            BirthMoment::parse("2023-02-28", "25:61"),
            Err(TimeError::InvalidTime(_))
        ));
    }

    #[test]
    fn from_str_with_t_separator() {
        let m: BirthMoment = "2024-02-29T23:59".parse().unwrap();
        assert_eq!(m.day_of_year(), 60);
        assert_eq!(m.hour(), 23);
    }

    #[test]
    fn day_of_year_bounds() {
        let jan1 = BirthMoment::from_ymd_hm(2021, 1, 1, 23, 59).unwrap();
        let dec31 = BirthMoment::from_ymd_hm(2020, 12, 31, 0, 0).unwrap();
        assert_eq!(jan1.day_of_year(), 1);
        assert_eq!(dec31.day_of_year(), 366);
    }

    #[test]
    fn hours_of_day_ignores_seconds() {
        let m = BirthMoment::parse("2000-01-01", "06:30:59").unwrap();
        assert!((m.hours_of_day() - 6.5).abs() < 1e-12);
    }

    #[test]
    fn years_between_one_julian_year() {
        let a = BirthMoment::from_ymd_hm(2000, 1, 1, 0, 0).unwrap().datetime();
        let b = a + chrono::Duration::hours(24 * 365 + 6);
        assert!((years_between(a, b) - 1.0).abs() < 1e-12);
        assert!((years_between(b, a) + 1.0).abs() < 1e-12);
    }

    #[test]
    fn display_format() {
        let m = BirthMoment::from_ymd_hm(1999, 3, 7, 4, 5).unwrap();
        assert_eq!(m.to_string(), "1999-03-07 04:05");
    }
}
