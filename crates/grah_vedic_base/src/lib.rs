//! Approximate Vedic birth-chart calculations.
//!
//! This crate provides:
//! - Lahiri-style ayanamsa from a simple polynomial
//! - Rashi, nakshatra and pada lookup from sidereal longitude
//! - Simplified longitudes for the nine grahas and the ascendant
//! - Whole-sign-from-ascendant house placement
//! - The running Vimshottari mahadasha
//! - Five named yoga rules
//! - [`ChartEngine`], which assembles a [`BirthChart`] and never fails
//! - English and Hindi text summaries
//!
//! The formulas are deliberately approximate. They produce self-consistent
//! charts for narrative use, not ephemeris-grade positions.

pub mod ayanamsha;
pub mod bhava;
pub mod chart;
pub mod config;
pub mod dasha;
pub mod derived;
pub mod error;
pub mod graha;
pub mod lagna;
pub mod nakshatra;
pub mod position;
pub mod positions;
pub mod rashi;
pub mod summary;
pub mod util;
pub mod yoga;

pub use ayanamsha::{
    FALLBACK_AYANAMSA_DEG, ayanamsa, ayanamsa_from_centuries, lahiri_ayanamsa_deg,
};
pub use bhava::{assign_houses, house_of};
pub use chart::{
    BirthChart, BirthInput, ChartEngine, FALLBACK_CHART_DASHA, FALLBACK_CHART_YOGAS,
    generate_birth_chart,
};
pub use config::ChartConfig;
pub use dasha::{
    DashaState, FALLBACK_DASHA, MIN_REMAINING_YEARS, VIMSHOTTARI_SEQUENCE, current_dasha,
    nakshatra_birth_balance, nakshatra_lord, vimshottari_dasha, vimshottari_years,
};
pub use derived::{ChartStep, Derived};
pub use error::VedicError;
pub use graha::{ALL_GRAHAS, Graha};
pub use lagna::{
    FALLBACK_ASCENDANT_DEG, ascendant, ascendant_longitude, fallback_ascendant, lagna_position,
};
pub use nakshatra::{
    ALL_NAKSHATRAS_27, NAKSHATRA_SPAN_27, Nakshatra, NakshatraInfo, PADA_SPAN,
    nakshatra_from_longitude,
};
pub use position::PlanetPosition;
pub use positions::{
    GrahaPositions, fallback_positions, graha_positions, planetary_positions, raw_longitudes,
};
pub use rashi::{ALL_RASHIS, Dms, RASHI_SPAN, Rashi, RashiInfo, deg_to_dms, rashi_from_longitude};
pub use summary::{ChartSummary, Language, render_summary};
pub use util::{angular_separation, normalize_360};
pub use yoga::{Yoga, identify_yogas};
