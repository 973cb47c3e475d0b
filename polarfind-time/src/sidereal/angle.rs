use polarfind_core::constants::DEGREES_PER_HOUR;
use polarfind_core::math::wrap_hours;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An angle on the 24-hour sidereal circle, normalized to [0, 24) hours.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SiderealAngle {
    angle_hours: f64,
}

impl SiderealAngle {
    pub fn from_hours(hours: f64) -> Self {
        Self {
            angle_hours: wrap_hours(hours),
        }
    }

    pub fn from_degrees(degrees: f64) -> Self {
        Self::from_hours(degrees / DEGREES_PER_HOUR)
    }

    pub fn from_radians(radians: f64) -> Self {
        Self::from_hours(radians * 12.0 / std::f64::consts::PI)
    }

    pub fn hours(&self) -> f64 {
        self.angle_hours
    }

    pub fn degrees(&self) -> f64 {
        self.angle_hours * DEGREES_PER_HOUR
    }

    pub fn radians(&self) -> f64 {
        self.angle_hours * std::f64::consts::PI / 12.0
    }

    /// Signed hour angle to a target right ascension; not normalized.
    pub fn hour_angle_to_target(&self, target_ra_hours: f64) -> f64 {
        self.hours() - target_ra_hours
    }
}

impl fmt::Display for SiderealAngle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.6}h", self.angle_hours)
    }
}
