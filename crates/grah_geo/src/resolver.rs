//! Free-text place name → [`GeoPoint`].
//!
//! Resolution order:
//! 1. exact match on the trimmed, lowercased name
//! 2. first gazetteer entry (declaration order) whose key contains the
//!    name or is contained in it
//! 3. [`DEFAULT_POINT`], with a `tracing` warning
//!
//! Resolution never fails.

use serde::Serialize;
use tracing::{debug, warn};

use crate::GeoPoint;
use crate::gazetteer::{GAZETTEER, GazetteerEntry, lookup_exact};

/// Geographic centre of India, used when nothing matches.
pub const DEFAULT_POINT: GeoPoint = GeoPoint::new(20.5937, 78.9629);

/// How a place name was matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MatchKind {
    /// The normalized name is a gazetteer key.
    Exact,
    /// Substring match against the named key.
    Partial { key: &'static str },
    /// No match; [`DEFAULT_POINT`] was returned.
    Fallback,
}

/// Outcome of resolving a place name.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Resolution {
    pub point: GeoPoint,
    pub kind: MatchKind,
    /// Time-zone id of the matched entry, if any.
    pub timezone: Option<&'static str>,
}

impl Resolution {
    fn matched(entry: &'static GazetteerEntry, kind: MatchKind) -> Self {
        Self {
            point: entry.point(),
            kind,
            timezone: Some(entry.timezone),
        }
    }

    /// True when no gazetteer entry matched.
    pub fn is_fallback(&self) -> bool {
        self.kind == MatchKind::Fallback
    }
}

/// Resolve a place name, reporting how it matched.
///
/// Blank input is a substring of every key, so it takes the first entry.
pub fn resolve_place(place: &str) -> Resolution {
    let normalized = place.trim().to_lowercase();

    if let Some(entry) = lookup_exact(&normalized) {
        debug!(place, key = entry.key, "exact gazetteer match");
        return Resolution::matched(entry, MatchKind::Exact);
    }

    let partial = GAZETTEER
        .iter()
        .find(|e| e.key.contains(normalized.as_str()) || normalized.contains(e.key));
    if let Some(entry) = partial {
        debug!(place, key = entry.key, "partial gazetteer match");
        return Resolution::matched(entry, MatchKind::Partial { key: entry.key });
    }

    warn!(place, "place not found in gazetteer, using default coordinates");
    Resolution {
        point: DEFAULT_POINT,
        kind: MatchKind::Fallback,
        timezone: None,
    }
}

/// Resolve a place name to coordinates.
pub fn resolve(place: &str) -> GeoPoint {
    resolve_place(place).point
}
