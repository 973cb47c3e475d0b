//! Hour angle of Polaris.
//!
//! Polaris is the reference the whole dial is built around: its hour angle
//! relative to the local meridian is what the host draws. The right
//! ascension is held at the fixed constant
//! [`POLARIS_RA_HOURS`](polarfind_core::constants::POLARIS_RA_HOURS).

use crate::sidereal::local_sidereal_time;
use polarfind_core::constants::POLARIS_RA_HOURS;
use polarfind_core::math::wrap_hours;

/// Hour angle of Polaris for a given local sidereal time.
///
/// Pure and total: any real input yields a value in [0, 24). Inputs outside
/// [0, 24) are accepted and folded onto the circle.
///
/// ```
/// use polarfind_time::polaris;
///
/// let ha = polaris::hour_angle(6.6645);
/// assert!((ha - 3.6845).abs() < 1e-12);
/// ```
pub fn hour_angle(lst_hours: f64) -> f64 {
    wrap_hours(lst_hours - POLARIS_RA_HOURS)
}

/// Hour angle of Polaris straight from a timestamp and longitude.
pub fn hour_angle_at(unix_millis: i64, longitude_deg: f64) -> f64 {
    hour_angle(local_sidereal_time(unix_millis, longitude_deg))
}
