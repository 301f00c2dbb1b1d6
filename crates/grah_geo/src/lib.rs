//! Place-name → coordinate resolution for birth charts.
//!
//! This crate provides:
//! - [`GeoPoint`], the latitude/longitude pair consumed by the chart engine
//! - A static, read-only gazetteer of Indian cities and world capitals
//! - [`resolve`], which never fails and falls back to a fixed default point

pub mod gazetteer;
pub mod resolver;

use serde::{Deserialize, Serialize};

pub use gazetteer::{GAZETTEER, GazetteerEntry, lookup_exact};
pub use resolver::{DEFAULT_POINT, MatchKind, Resolution, resolve, resolve_place};

/// Geographic point in degrees. North and East are positive.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoPoint {
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Both coordinates are finite numbers.
    pub fn is_finite(&self) -> bool {
        self.latitude.is_finite() && self.longitude.is_finite()
    }

    /// Replace either coordinate with an explicit override.
    pub fn with_overrides(self, latitude: Option<f64>, longitude: Option<f64>) -> Self {
        Self {
            latitude: latitude.unwrap_or(self.latitude),
            longitude: longitude.unwrap_or(self.longitude),
        }
    }
}
