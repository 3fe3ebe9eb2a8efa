//! Point-to-point kinematics
//!
//! Straight-line distance, travel time by transport mode, and sphere overlap.
//! Distances are treated as kilometres when converted to travel time.

use glam::DVec3;
use serde::{Deserialize, Serialize};

/// How an agent travels between two points
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransportMode {
    /// 5 km/h
    #[default]
    Walking,
    /// 10 km/h
    Running,
    /// 50 km/h
    Driving,
    /// 800 km/h
    Flying,
}

impl TransportMode {
    /// Walking speed in km/h
    pub const WALKING_KMH: f64 = 5.0;
    /// Running speed in km/h
    pub const RUNNING_KMH: f64 = 10.0;
    /// Driving speed in km/h
    pub const DRIVING_KMH: f64 = 50.0;
    /// Flying speed in km/h
    pub const FLYING_KMH: f64 = 800.0;

    /// Parse a mode name. Unrecognised names fall back to walking.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "walking" => Self::Walking,
            "running" => Self::Running,
            "driving" => Self::Driving,
            "flying" => Self::Flying,
            other => {
                log::debug!("Unknown transport mode {other:?}, assuming walking");
                Self::Walking
            }
        }
    }

    /// Speed in km/h
    #[must_use]
    pub const fn speed_kmh(self) -> f64 {
        match self {
            Self::Walking => Self::WALKING_KMH,
            Self::Running => Self::RUNNING_KMH,
            Self::Driving => Self::DRIVING_KMH,
            Self::Flying => Self::FLYING_KMH,
        }
    }
}

/// Euclidean distance between two points
#[inline]
#[must_use]
pub fn distance(a: DVec3, b: DVec3) -> f64 {
    a.distance(b)
}

/// Estimated travel time in minutes
#[must_use]
pub fn estimate_travel_time(from: DVec3, to: DVec3, mode: TransportMode) -> f64 {
    distance(from, to) / mode.speed_kmh() * 60.0
}

/// Check whether two spheres touch or overlap
#[must_use]
pub fn check_collision(a: DVec3, radius_a: f64, b: DVec3, radius_b: f64) -> bool {
    distance(a, b) <= radius_a + radius_b
}
