//! Per-sample display bundle for the host.
//!
//! A [`Readout`] is everything the dial draws for one clock/location sample:
//! the sidereal values, the indicator angle, and the label strings. It holds
//! no state beyond its inputs and is meant to be rebuilt on every sample —
//! once a second for the clock, once a minute for the fix, whatever cadence
//! the host runs.
//!
//! A missing fix is `None`, the "no GPS" state: sidereal math falls back to
//! longitude 0 so the dial keeps turning, and the status label flips.

use crate::{dial, format, polaris, sidereal};
use polarfind_core::Location;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One frame's worth of alignment display values.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Readout {
    lst_hours: f64,
    hour_angle_hours: f64,
    fix: Option<Location>,
}

impl Readout {
    /// Builds the readout for a timestamp and an optional location fix.
    pub fn at(unix_millis: i64, fix: Option<Location>) -> Self {
        let longitude_deg = fix.map(|loc| loc.longitude_deg).unwrap_or(0.0);
        let lst_hours = sidereal::local_sidereal_time(unix_millis, longitude_deg);
        let hour_angle_hours = polaris::hour_angle(lst_hours);
        Self {
            lst_hours,
            hour_angle_hours,
            fix,
        }
    }

    pub fn lst_hours(&self) -> f64 {
        self.lst_hours
    }

    pub fn hour_angle_hours(&self) -> f64 {
        self.hour_angle_hours
    }

    pub fn fix(&self) -> Option<Location> {
        self.fix
    }

    /// Screen angle of the Polaris marker in degrees.
    pub fn indicator_angle_degrees(&self) -> f64 {
        dial::indicator_angle_degrees(self.hour_angle_hours)
    }

    /// `"LST HH:MM:SS"`.
    pub fn lst_label(&self) -> String {
        format!("LST {}", format::hms_string(self.lst_hours))
    }

    /// `"HA HH:MM:SS"`.
    pub fn hour_angle_label(&self) -> String {
        format!("HA {}", format::hms_string(self.hour_angle_hours))
    }

    /// `"GPS OK"` with a fix, `"NO GPS"` without.
    pub fn gps_status(&self) -> &'static str {
        if self.fix.is_some() {
            "GPS OK"
        } else {
            "NO GPS"
        }
    }

    /// Coordinate line like `"19.828°N  155.478°W"`, absent without a fix.
    pub fn coordinates(&self) -> Option<String> {
        let loc = self.fix?;
        let lat_dir = if loc.latitude_deg >= 0.0 { 'N' } else { 'S' };
        let lon_dir = if loc.longitude_deg >= 0.0 { 'E' } else { 'W' };
        Some(format!(
            "{:.3}°{}  {:.3}°{}",
            loc.latitude_deg.abs(),
            lat_dir,
            loc.longitude_deg.abs(),
            lon_dir
        ))
    }

    /// Elevation line like `"4145m Elev"`, suppressed at zero altitude.
    pub fn elevation(&self) -> Option<String> {
        let loc = self.fix?;
        if loc.height_m == 0.0 {
            None
        } else {
            Some(format!("{}m Elev", loc.height_m as i64))
        }
    }
}
