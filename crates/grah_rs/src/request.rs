use grah_geo::{GeoPoint, Resolution, resolve_place};
use serde::{Deserialize, Serialize};

/// A birth-chart request as entered by a user.
///
/// `latitude`/`longitude` override the coordinates resolved from `place`
/// independently of each other; an explicit `0.0` is honored.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ChartRequest {
    /// `YYYY-MM-DD`.
    pub date: String,
    /// `HH:MM`, `HH:MM:SS` or `hh:mm AM/PM`.
    pub time: String,
    pub place: String,
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
}

impl ChartRequest {
    pub fn new(date: impl Into<String>, time: impl Into<String>, place: impl Into<String>) -> Self {
        Self {
            date: date.into(),
            time: time.into(),
            place: place.into(),
            latitude: None,
            longitude: None,
        }
    }

    pub fn with_coordinates(mut self, latitude: Option<f64>, longitude: Option<f64>) -> Self {
        self.latitude = latitude;
        self.longitude = longitude;
        self
    }

    /// Gazetteer resolution of `place`, before overrides.
    pub fn resolution(&self) -> Resolution {
        resolve_place(&self.place)
    }

    /// The point used for the chart: resolved place with overrides applied.
    pub fn point(&self) -> GeoPoint {
        self.resolution()
            .point
            .with_overrides(self.latitude, self.longitude)
    }
}
