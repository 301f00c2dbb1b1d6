//! Convenience wrapper for the grah chart engine and palm classifier.
//!
//! Accepts the strings a user types (date, time, place name, optional
//! coordinates) and returns a finished [`BirthChart`], handling parsing,
//! place resolution and coordinate overrides.
//!
//! # Quick start
//!
//! ```rust
//! use grah_rs::*;
//!
//! let req = ChartRequest::new("1990-05-15", "2:30 PM", "Mumbai");
//! let chart = birth_chart(&req);
//! assert!(chart.yogas.len() <= 5);
//! println!("{}", render_summary(&chart, Some("Asha"), Language::English));
//! ```

pub mod convenience;
pub mod error;
pub mod request;

pub use convenience::{
    birth_chart, birth_chart_with, birth_input, chart_summary, palm_analysis, try_birth_chart,
    try_birth_chart_with, try_palm_analysis,
};
pub use error::GrahError;
pub use request::ChartRequest;

// Re-export the types callers need so they only depend on this crate.
pub use grah_geo::{GeoPoint, MatchKind, Resolution, resolve, resolve_place};
pub use grah_palm::{
    HandKeypoints, HandShape, PalmAnalysis, PalmClassifier, PalmInput, PalmLine, PalmLineKind,
    PalmSource, Point, Segment,
};
pub use grah_time::{BirthMoment, Clock, FixedClock, SystemClock};
pub use grah_vedic_base::{
    BirthChart, BirthInput, ChartConfig, ChartEngine, ChartStep, DashaState, Graha, Language,
    Nakshatra, PlanetPosition, Rashi, Yoga, render_summary,
};
