//! Plain-text chart summaries in English and Hindi.
//!
//! The summary is the hand-off format for narrative renderers: birth data,
//! ayanamsa, ascendant, every graha's sign and house, the running dasha and
//! the yoga list.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::Serialize;

use crate::chart::BirthChart;
use crate::graha::{ALL_GRAHAS, Graha};
use crate::position::PlanetPosition;

/// Output language of a summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    English,
    Hindi,
}

impl Language {
    pub const fn name(self) -> &'static str {
        match self {
            Self::English => "english",
            Self::Hindi => "hindi",
        }
    }
}

impl Display for Language {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "english" | "en" => Ok(Self::English),
            "hindi" | "hi" => Ok(Self::Hindi),
            other => Err(format!("unknown language: {other}")),
        }
    }
}

/// Grahas whose nakshatra is shown next to their house.
const WITH_NAKSHATRA: [Graha; 2] = [Graha::Surya, Graha::Chandra];

/// Borrowing view that renders a chart as text.
#[derive(Debug, Clone, Copy)]
pub struct ChartSummary<'a> {
    chart: &'a BirthChart,
    name: Option<&'a str>,
    language: Language,
}

impl<'a> ChartSummary<'a> {
    pub fn new(chart: &'a BirthChart, name: Option<&'a str>, language: Language) -> Self {
        Self {
            chart,
            name,
            language,
        }
    }
}

fn english_ordinal(n: u8) -> String {
    let suffix = match n {
        1 => "st",
        2 => "nd",
        3 => "rd",
        _ => "th",
    };
    format!("{n}{suffix}")
}

fn hemisphere(value: f64, positive: char, negative: char) -> (f64, char) {
    if value < 0.0 {
        (-value, negative)
    } else {
        (value, positive)
    }
}

fn house_label(pos: &PlanetPosition) -> String {
    pos.house.map_or_else(|| "?".to_string(), |h| h.to_string())
}

impl ChartSummary<'_> {
    fn birth_line(&self) -> String {
        let c = self.chart;
        let time = if c.time_label.trim().is_empty() {
            c.moment.datetime().format("%H:%M").to_string()
        } else {
            c.time_label.clone()
        };
        format!(
            "{}, {}, {}",
            c.moment.datetime().format("%Y-%m-%d"),
            time,
            c.place_label
        )
    }

    fn coordinates(&self) -> String {
        let (lat, ns) = hemisphere(self.chart.location.latitude, 'N', 'S');
        let (lon, ew) = hemisphere(self.chart.location.longitude, 'E', 'W');
        format!("{lat:.4}°{ns}, {lon:.4}°{ew}")
    }

    fn yoga_list(&self) -> String {
        self.chart.yoga_labels().join(", ")
    }

    fn fmt_english(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let c = self.chart;
        match self.name {
            Some(name) => writeln!(f, "{name}'s Birth Chart Analysis:")?,
            None => writeln!(f, "Birth Chart Analysis:")?,
        }
        writeln!(f, "Born: {}", self.birth_line())?;
        writeln!(f, "Coordinates: {}", self.coordinates())?;
        writeln!(f, "Ayanamsa: {:.1}°", c.ayanamsa)?;
        writeln!(f)?;
        writeln!(
            f,
            "Ascendant: {} {:.1}° in {} Nakshatra",
            c.ascendant.sign_name(),
            c.ascendant.degree,
            c.ascendant.nakshatra
        )?;
        writeln!(f)?;
        writeln!(f, "Planetary Positions:")?;
        for g in ALL_GRAHAS {
            let p = c.planet(g);
            let house = p.house.map_or_else(|| "?".to_string(), english_ordinal);
            write!(f, "• {}: {} sign, {} house", g.name(), p.sign_name(), house)?;
            if WITH_NAKSHATRA.contains(&g) {
                write!(f, " ({})", p.nakshatra)?;
            }
            writeln!(f)?;
        }
        writeln!(f)?;
        writeln!(
            f,
            "Current Dasha: {} Mahadasha ({:.1} years remaining)",
            c.current_dasha.ruling_planet.name(),
            c.current_dasha.remaining_years
        )?;
        writeln!(f)?;
        write!(f, "Active Yogas: {}", self.yoga_list())
    }

    fn fmt_hindi(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let c = self.chart;
        match self.name {
            Some(name) => writeln!(f, "{name} की जन्म कुंडली:")?,
            None => writeln!(f, "जन्म कुंडली:")?,
        }
        writeln!(f, "जन्म: {}", self.birth_line())?;
        writeln!(f, "निर्देशांक: {}", self.coordinates())?;
        writeln!(f, "अयनांश: {:.1}°", c.ayanamsa)?;
        writeln!(f)?;
        writeln!(
            f,
            "लग्न: {} {:.1}° ({} नक्षत्र)",
            c.ascendant.sign_name(),
            c.ascendant.degree,
            c.ascendant.nakshatra
        )?;
        writeln!(f)?;
        writeln!(f, "मुख्य ग्रह स्थितियां:")?;
        for g in ALL_GRAHAS {
            let p = c.planet(g);
            write!(
                f,
                "• {}: {} राशि, {}वां भाव",
                g.hindi_name(),
                p.sign_name(),
                house_label(p)
            )?;
            if WITH_NAKSHATRA.contains(&g) {
                write!(f, " ({})", p.nakshatra)?;
            }
            writeln!(f)?;
        }
        writeln!(f)?;
        writeln!(
            f,
            "वर्तमान दशा: {} महादशा ({:.1} वर्ष शेष)",
            c.current_dasha.ruling_planet.hindi_name(),
            c.current_dasha.remaining_years
        )?;
        writeln!(f)?;
        write!(f, "मुख्य योग: {}", self.yoga_list())
    }
}

impl Display for ChartSummary<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self.language {
            Language::English => self.fmt_english(f),
            Language::Hindi => self.fmt_hindi(f),
        }
    }
}

/// Render a chart summary as a string.
pub fn render_summary(chart: &BirthChart, name: Option<&str>, language: Language) -> String {
    ChartSummary::new(chart, name, language).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::BirthInput;
    use grah_geo::GeoPoint;
    use grah_time::BirthMoment;

    fn fallback_chart() -> BirthChart {
        BirthChart::fallback(&BirthInput::new(
            BirthMoment::from_ymd_hm(1990, 5, 15, 14, 30).unwrap(),
            "14:30",
            "New York",
            GeoPoint::new(40.7128, -74.006),
        ))
    }

    #[test]
    fn ordinals() {
        assert_eq!(english_ordinal(1), "1st");
        assert_eq!(english_ordinal(2), "2nd");
        assert_eq!(english_ordinal(3), "3rd");
        assert_eq!(english_ordinal(11), "11th");
        assert_eq!(english_ordinal(12), "12th");
    }

    #[test]
    fn english_summary_lines() {
        let text = render_summary(&fallback_chart(), Some("Asha"), Language::English);
        assert!(text.starts_with("Asha's Birth Chart Analysis:\n"));
        assert!(text.contains("Born: 1990-05-15, 14:30, New York\n"));
        assert!(text.contains("Coordinates: 40.7128°N, 74.0060°W\n"));
        assert!(text.contains("Ayanamsa: 24.0°\n"));
        assert!(text.contains("Ascendant: Leo 15.0° in Purva Phalguni Nakshatra\n"));
        assert!(text.contains("• Sun: Leo sign, 1st house (Purva Phalguni)\n"));
        assert!(text.contains("• Moon: Cancer sign, 12th house (Pushya)\n"));
        assert!(text.contains("• Jupiter: Virgo sign, 2nd house\n"));
        assert!(text.contains("Current Dasha: Moon Mahadasha (6.5 years remaining)\n"));
        assert!(text.ends_with("Active Yogas: Budha-Aditya Yoga, Raja Yoga combinations"));
    }

    #[test]
    fn hindi_summary_lines() {
        let text = render_summary(&fallback_chart(), None, Language::Hindi);
        assert!(text.starts_with("जन्म कुंडली:\n"));
        assert!(text.contains("अयनांश: 24.0°\n"));
        assert!(text.contains("• सूर्य: Leo राशि, 1वां भाव (Purva Phalguni)\n"));
        assert!(text.contains("वर्तमान दशा: चंद्र महादशा (6.5 वर्ष शेष)\n"));
    }

    #[test]
    fn language_parsing() {
        assert_eq!("Hindi".parse::<Language>(), Ok(Language::Hindi));
        assert_eq!(" en ".parse::<Language>(), Ok(Language::English));
        assert!("tamil".parse::<Language>().is_err());
    }
}
