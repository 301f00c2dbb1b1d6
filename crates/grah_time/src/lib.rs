//! Calendar and clock helpers for the grah chart engine.
//!
//! This crate provides:
//! - Gregorian calendar → Julian Day conversion and Julian centuries
//! - `BirthMoment`, the civil birth date/time used by every chart step
//! - A `Clock` abstraction so "current age" calculations are testable

pub mod clock;
pub mod error;
pub mod julian;
pub mod moment;

pub use clock::{Clock, FixedClock, SystemClock};
pub use error::TimeError;
pub use julian::{DAYS_PER_JULIAN_CENTURY, J2000_JD, calendar_day_to_jd, jd_to_centuries};
pub use moment::{BirthMoment, DAYS_PER_YEAR, years_between};
