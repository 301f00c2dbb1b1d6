//! Mount prominence and finger lengths.
//!
//! These are fixed estimates; keypoints are accepted so the signatures stay
//! stable if real measurements are added.

use serde::Serialize;

use crate::keypoints::HandKeypoints;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MountKind {
    Venus,
    Jupiter,
    Saturn,
    Apollo,
    Mercury,
}

impl MountKind {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Venus => "Mount of Venus",
            Self::Jupiter => "Mount of Jupiter",
            Self::Saturn => "Mount of Saturn",
            Self::Apollo => "Mount of Apollo",
            Self::Mercury => "Mount of Mercury",
        }
    }
}

impl Serialize for MountKind {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Mount {
    pub name: MountKind,
    /// 0-1.
    pub prominence: f64,
}

const fn mount(name: MountKind, prominence: f64) -> Mount {
    Mount { name, prominence }
}

pub const DEFAULT_MOUNTS: [Mount; 5] = [
    mount(MountKind::Venus, 0.7),
    mount(MountKind::Jupiter, 0.6),
    mount(MountKind::Saturn, 0.5),
    mount(MountKind::Apollo, 0.6),
    mount(MountKind::Mercury, 0.5),
];

/// Mounts reported by the full fallback analysis.
pub const FALLBACK_MOUNTS: [Mount; 2] = [
    mount(MountKind::Venus, 0.7),
    mount(MountKind::Jupiter, 0.6),
];

pub fn detect_mounts(_keypoints: &HandKeypoints) -> Vec<Mount> {
    DEFAULT_MOUNTS.to_vec()
}

/// Relative finger lengths, middle finger = 1.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FingerLengths {
    pub thumb: f64,
    pub index: f64,
    pub middle: f64,
    pub ring: f64,
    pub pinky: f64,
}

impl Default for FingerLengths {
    fn default() -> Self {
        Self {
            thumb: 0.8,
            index: 0.9,
            middle: 1.0,
            ring: 0.95,
            pinky: 0.7,
        }
    }
}

pub fn finger_lengths(_keypoints: &HandKeypoints) -> FingerLengths {
    FingerLengths::default()
}
