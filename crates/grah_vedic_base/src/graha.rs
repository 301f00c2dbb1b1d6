//! The nine Vedic grahas (planets) used by the chart engine.

use serde::{Serialize, Serializer};

/// The 9 Vedic grahas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Graha {
    Surya,
    Chandra,
    Mangal,
    Buddh,
    Guru,
    Shukra,
    Shani,
    Rahu,
    Ketu,
}

/// All 9 grahas in chart order: Sun, Moon, Mars, Mercury, Jupiter, Venus,
/// Saturn, Rahu, Ketu.
pub const ALL_GRAHAS: [Graha; 9] = [
    Graha::Surya,
    Graha::Chandra,
    Graha::Mangal,
    Graha::Buddh,
    Graha::Guru,
    Graha::Shukra,
    Graha::Shani,
    Graha::Rahu,
    Graha::Ketu,
];

impl Graha {
    /// English name, the key charts are reported under.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Surya => "Sun",
            Self::Chandra => "Moon",
            Self::Mangal => "Mars",
            Self::Buddh => "Mercury",
            Self::Guru => "Jupiter",
            Self::Shukra => "Venus",
            Self::Shani => "Saturn",
            Self::Rahu => "Rahu",
            Self::Ketu => "Ketu",
        }
    }

    /// Sanskrit name of the graha.
    pub const fn sanskrit_name(self) -> &'static str {
        match self {
            Self::Surya => "Surya",
            Self::Chandra => "Chandra",
            Self::Mangal => "Mangal",
            Self::Buddh => "Buddh",
            Self::Guru => "Guru",
            Self::Shukra => "Shukra",
            Self::Shani => "Shani",
            Self::Rahu => "Rahu",
            Self::Ketu => "Ketu",
        }
    }

    /// Hindi (Devanagari) name.
    pub const fn hindi_name(self) -> &'static str {
        match self {
            Self::Surya => "सूर्य",
            Self::Chandra => "चंद्र",
            Self::Mangal => "मंगल",
            Self::Buddh => "बुध",
            Self::Guru => "गुरु",
            Self::Shukra => "शुक्र",
            Self::Shani => "शनि",
            Self::Rahu => "राहु",
            Self::Ketu => "केतु",
        }
    }

    /// 0-based index into [`ALL_GRAHAS`].
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Case-insensitive lookup by English or Sanskrit name.
    pub fn from_name(name: &str) -> Option<Graha> {
        let name = name.trim();
        ALL_GRAHAS.iter().copied().find(|g| {
            g.name().eq_ignore_ascii_case(name) || g.sanskrit_name().eq_ignore_ascii_case(name)
        })
    }
}

impl Serialize for Graha {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

impl std::fmt::Display for Graha {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
