//! Birth-chart orchestration.
//!
//! [`ChartEngine::generate`] runs the steps in a fixed order (positions,
//! ascendant, houses, dasha, yogas, ayanamsa). Each step that fails is
//! replaced by its own fallback and recorded in
//! [`BirthChart::fallback_steps`]. If the assembled chart is still not
//! valid, the whole chart is replaced by [`BirthChart::fallback`].

use grah_geo::GeoPoint;
use grah_time::{BirthMoment, Clock, SystemClock};
use serde::{Serialize, Serializer};
use tracing::error;

use crate::ayanamsha::{FALLBACK_AYANAMSA_DEG, ayanamsa};
use crate::bhava::assign_houses;
use crate::config::ChartConfig;
use crate::dasha::{DashaState, current_dasha};
use crate::derived::{ChartStep, Derived};
use crate::error::VedicError;
use crate::graha::Graha;
use crate::lagna::{ascendant, fallback_ascendant};
use crate::position::PlanetPosition;
use crate::positions::{GrahaPositions, fallback_positions, graha_positions};
use crate::yoga::{self, Yoga};

/// Everything the engine needs to know about a birth.
#[derive(Debug, Clone, PartialEq)]
pub struct BirthInput {
    pub moment: BirthMoment,
    /// Birth time as the user entered it; informational.
    pub time_label: String,
    /// Birth place as the user entered it; informational.
    pub place_label: String,
    pub point: GeoPoint,
}

impl BirthInput {
    pub fn new(
        moment: BirthMoment,
        time_label: impl Into<String>,
        place_label: impl Into<String>,
        point: GeoPoint,
    ) -> Self {
        Self {
            moment,
            time_label: time_label.into(),
            place_label: place_label.into(),
            point,
        }
    }
}

/// Dasha reported by the whole-chart fallback.
pub const FALLBACK_CHART_DASHA: DashaState = DashaState {
    ruling_planet: Graha::Chandra,
    remaining_years: 6.5,
    nakshatra_index: 9,
};

/// Yogas reported by the whole-chart fallback.
pub const FALLBACK_CHART_YOGAS: [Yoga; 2] = [Yoga::BudhaAditya, Yoga::Raja];

/// A generated birth chart. Immutable once built.
#[derive(Debug, Clone, PartialEq)]
pub struct BirthChart {
    pub ascendant: PlanetPosition,
    pub planets: GrahaPositions,
    pub current_dasha: DashaState,
    /// Priority-ordered, at most [`ChartConfig::max_yogas`] entries.
    pub yogas: Vec<Yoga>,
    /// Lahiri ayanamsa in degrees.
    pub ayanamsa: f64,
    pub moment: BirthMoment,
    pub time_label: String,
    pub place_label: String,
    pub location: GeoPoint,
    /// Steps whose value is a fallback, in the order they ran.
    pub fallback_steps: Vec<ChartStep>,
}

impl BirthChart {
    /// The fixed chart returned when generation fails as a whole.
    pub fn fallback(input: &BirthInput) -> Self {
        Self {
            ascendant: fallback_ascendant(),
            planets: fallback_positions(),
            current_dasha: FALLBACK_CHART_DASHA,
            yogas: FALLBACK_CHART_YOGAS.to_vec(),
            ayanamsa: FALLBACK_AYANAMSA_DEG,
            moment: input.moment,
            time_label: input.time_label.clone(),
            place_label: input.place_label.clone(),
            location: input.point,
            fallback_steps: vec![ChartStep::Chart],
        }
    }

    /// True when this is the fixed whole-chart fallback.
    pub fn is_fallback(&self) -> bool {
        self.step_fell_back(ChartStep::Chart)
    }

    pub fn step_fell_back(&self, step: ChartStep) -> bool {
        self.fallback_steps.contains(&step)
    }

    /// True when no step fell back.
    pub fn is_fully_computed(&self) -> bool {
        self.fallback_steps.is_empty()
    }

    pub fn planet(&self, graha: Graha) -> &PlanetPosition {
        self.planets.get(graha)
    }

    /// Yoga labels as reported to readers. The whole-chart fallback uses
    /// the shorter fallback labels.
    pub fn yoga_labels(&self) -> Vec<&'static str> {
        let fallback = self.is_fallback();
        self.yogas
            .iter()
            .map(|y| if fallback { y.fallback_label() } else { y.label() })
            .collect()
    }

    /// Check the chart-level invariants.
    pub fn validate(&self, config: &ChartConfig) -> Result<(), VedicError> {
        if !self.ascendant.is_finite() || !self.ayanamsa.is_finite() {
            return Err(VedicError::InvalidChart("non-finite ascendant or ayanamsa"));
        }
        for (_, pos) in self.planets.iter() {
            if !pos.is_finite() {
                return Err(VedicError::InvalidChart("non-finite planet position"));
            }
            if !pos.house.is_some_and(|h| (1..=12).contains(&h)) {
                return Err(VedicError::InvalidChart("house outside 1..=12"));
            }
        }
        let remaining = self.current_dasha.remaining_years;
        if !remaining.is_finite() || remaining < config.min_dasha_remaining_years {
            return Err(VedicError::InvalidChart("dasha remaining below floor"));
        }
        if self.yogas.len() > config.max_yogas {
            return Err(VedicError::InvalidChart("too many yogas"));
        }
        Ok(())
    }
}

#[derive(Serialize)]
struct ChartRecord<'a> {
    ascendant: &'a PlanetPosition,
    planets: &'a GrahaPositions,
    current_dasha: &'a DashaState,
    yogas: Vec<&'static str>,
    ayanamsa: f64,
    moment: &'a BirthMoment,
    time_label: &'a str,
    place_label: &'a str,
    location: &'a GeoPoint,
    fallback_steps: &'a [ChartStep],
}

impl Serialize for BirthChart {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        ChartRecord {
            ascendant: &self.ascendant,
            planets: &self.planets,
            current_dasha: &self.current_dasha,
            yogas: self.yoga_labels(),
            ayanamsa: self.ayanamsa,
            moment: &self.moment,
            time_label: &self.time_label,
            place_label: &self.place_label,
            location: &self.location,
            fallback_steps: &self.fallback_steps,
        }
        .serialize(serializer)
    }
}

/// Collects step fallbacks while a chart is being assembled.
struct StepLog(Vec<ChartStep>);

impl StepLog {
    fn take<T>(&mut self, step: ChartStep, derived: Derived<T>) -> T {
        if derived.is_fallback() {
            self.0.push(step);
        }
        derived.into_value()
    }
}

/// Chart generator holding configuration and a clock.
#[derive(Debug, Clone)]
pub struct ChartEngine<C = SystemClock> {
    config: ChartConfig,
    clock: C,
}

impl ChartEngine<SystemClock> {
    pub fn new(config: ChartConfig) -> Self {
        Self::with_clock(config, SystemClock)
    }
}

impl Default for ChartEngine<SystemClock> {
    fn default() -> Self {
        Self::new(ChartConfig::default())
    }
}

impl<C: Clock> ChartEngine<C> {
    pub fn with_clock(config: ChartConfig, clock: C) -> Self {
        Self { config, clock }
    }

    pub fn config(&self) -> &ChartConfig {
        &self.config
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Generate a chart. Never fails; see [`BirthChart::fallback_steps`].
    pub fn generate(&self, input: &BirthInput) -> BirthChart {
        match self.try_generate(input) {
            Ok(chart) => chart,
            Err(e) => {
                error!(
                    error = %e,
                    place = %input.place_label,
                    "chart generation failed, using fallback chart"
                );
                BirthChart::fallback(input)
            }
        }
    }

    fn try_generate(&self, input: &BirthInput) -> Result<BirthChart, VedicError> {
        self.config.validate()?;
        let mut log = StepLog(Vec::new());

        let mut planets = log.take(
            ChartStep::Positions,
            graha_positions(&input.moment, input.point),
        );

        let asc = log.take(ChartStep::Ascendant, ascendant(&input.moment, input.point));

        let houses = assign_houses(asc.longitude, &mut planets);
        log.take(ChartStep::Houses, Derived::recover(ChartStep::Houses, houses, || ()));

        let dasha = log.take(
            ChartStep::Dasha,
            current_dasha(
                planets.longitude(Graha::Chandra),
                &input.moment,
                self.clock.now(),
                self.config.min_dasha_remaining_years,
            ),
        );

        let yogas = log.take(ChartStep::Yogas, yoga::yogas(&planets, &self.config));

        let aya = log.take(ChartStep::Ayanamsa, ayanamsa(&input.moment));

        let chart = BirthChart {
            ascendant: asc,
            planets,
            current_dasha: dasha,
            yogas,
            ayanamsa: aya,
            moment: input.moment,
            time_label: input.time_label.clone(),
            place_label: input.place_label.clone(),
            location: input.point,
            fallback_steps: log.0,
        };
        chart.validate(&self.config)?;
        Ok(chart)
    }
}

/// Generate a chart with the default configuration and the system clock.
pub fn generate_birth_chart(input: &BirthInput) -> BirthChart {
    ChartEngine::default().generate(input)
}

#[cfg(test)]
mod tests {
    use super::*;
    use grah_time::FixedClock;

    fn delhi_2000() -> BirthInput {
        BirthInput::new(
            BirthMoment::from_ymd_hm(2000, 1, 1, 12, 0).unwrap(),
            "12:00",
            "Delhi",
            GeoPoint::new(28.6139, 77.209),
        )
    }

    fn engine() -> ChartEngine<FixedClock> {
        let now = BirthMoment::from_ymd_hm(2024, 6, 1, 0, 0).unwrap().datetime();
        ChartEngine::with_clock(ChartConfig::default(), FixedClock(now))
    }

    #[test]
    fn computed_chart_has_no_fallbacks() {
        let chart = engine().generate(&delhi_2000());
        assert!(chart.is_fully_computed(), "{:?}", chart.fallback_steps);
        assert!(!chart.is_fallback());
        assert_eq!(chart.ascendant.house, Some(1));
        assert!(chart.validate(engine().config()).is_ok());
    }

    #[test]
    fn nan_latitude_falls_back_per_step() {
        let mut input = delhi_2000();
        input.point = GeoPoint::new(f64::NAN, 77.209);
        let chart = engine().generate(&input);
        assert!(!chart.is_fallback());
        assert!(chart.step_fell_back(ChartStep::Positions));
        assert!(chart.step_fell_back(ChartStep::Ascendant));
        assert!(!chart.step_fell_back(ChartStep::Ayanamsa));
        assert!(chart.validate(engine().config()).is_ok());
    }

    #[test]
    fn invalid_config_yields_fallback_chart() {
        let cfg = ChartConfig {
            max_yogas: 0,
            ..ChartConfig::default()
        };
        let e = ChartEngine::with_clock(cfg, *engine().clock());
        let chart = e.generate(&delhi_2000());
        assert!(chart.is_fallback());
        assert_eq!(chart.current_dasha, FALLBACK_CHART_DASHA);
        assert_eq!(chart.yogas, FALLBACK_CHART_YOGAS.to_vec());
        assert_eq!(chart.ascendant.longitude, 135.0);
        assert_eq!(chart.ayanamsa, 24.0);
        assert_eq!(chart.place_label, "Delhi");
        assert_eq!(
            chart.yoga_labels(),
            ["Budha-Aditya Yoga", "Raja Yoga combinations"]
        );
    }

    #[test]
    fn fallback_chart_json_uses_short_yoga_labels() {
        let chart = BirthChart::fallback(&delhi_2000());
        let json = serde_json::to_value(&chart).unwrap();
        assert_eq!(
            json["yogas"],
            serde_json::json!(["Budha-Aditya Yoga", "Raja Yoga combinations"])
        );
        assert_eq!(json["fallback_steps"][0], "chart");
        assert_eq!(json["place_label"], "Delhi");
    }

    #[test]
    fn computed_chart_uses_full_yoga_labels() {
        let chart = engine().generate(&delhi_2000());
        let labels = chart.yoga_labels();
        assert_eq!(labels.len(), chart.yogas.len());
        for (label, yoga) in labels.iter().zip(&chart.yogas) {
            assert_eq!(*label, yoga.label());
        }
    }
}
