use super::angle::SiderealAngle;
use crate::JulianDate;
use polarfind_core::constants::{GMST_HOURS_PER_DAY, GMST_J2000_HOURS};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Greenwich Mean Sidereal Time.
///
/// Computed with the linear low-precision model
/// `gmst = 18.697374558 + 24.06570982441908 * d` where `d` is days since
/// J2000.0. Accurate to a few seconds over modern decades, which is far
/// below what a polar-alignment dial can display. Total for every input:
/// there is no error path.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GMST(SiderealAngle);

impl GMST {
    pub fn from_julian_date(jd: &JulianDate) -> Self {
        let d = jd.days_since_j2000();
        Self(SiderealAngle::from_hours(
            GMST_J2000_HOURS + GMST_HOURS_PER_DAY * d,
        ))
    }

    pub fn from_unix_millis(millis: i64) -> Self {
        Self::from_julian_date(&JulianDate::from_unix_millis(millis))
    }

    pub fn from_hours(hours: f64) -> Self {
        Self(SiderealAngle::from_hours(hours))
    }

    pub fn from_degrees(degrees: f64) -> Self {
        Self(SiderealAngle::from_degrees(degrees))
    }

    pub fn from_radians(radians: f64) -> Self {
        Self(SiderealAngle::from_radians(radians))
    }

    pub fn j2000() -> Self {
        Self::from_julian_date(&JulianDate::j2000())
    }

    pub fn angle(&self) -> SiderealAngle {
        self.0
    }

    pub fn hours(&self) -> f64 {
        self.0.hours()
    }

    pub fn degrees(&self) -> f64 {
        self.0.degrees()
    }

    pub fn radians(&self) -> f64 {
        self.0.radians()
    }

    pub fn hour_angle_to_target(&self, target_ra_hours: f64) -> f64 {
        self.0.hour_angle_to_target(target_ra_hours)
    }

    pub fn to_lst(&self, longitude_deg: f64) -> super::LST {
        super::LST::from_gmst(self, longitude_deg)
    }
}

impl std::fmt::Display for GMST {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "GMST {}", self.0)
    }
}
