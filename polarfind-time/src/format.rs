//! `HH:MM:SS` readout formatting.
//!
//! Sidereal readouts use colon-separated sexagesimal with whole seconds,
//! quantized by flooring the total second count. Recombining
//! `h + m/60 + s/3600` reproduces the input within one second of hour
//! (1/3600 h).

use polarfind_core::constants::SECONDS_PER_HOUR;
use polarfind_core::math::wrap_hours;

/// Splits an hour value into `(hours, minutes, seconds)` components.
///
/// The input is folded into [0, 24) first, so the hour component is in
/// [0, 24) and minutes/seconds are always in [0, 60).
pub fn split_hms(hours: f64) -> (u32, u32, u32) {
    let total_seconds = (wrap_hours(hours) * SECONDS_PER_HOUR).floor() as u32;
    let h = total_seconds / 3600;
    let m = (total_seconds % 3600) / 60;
    let s = total_seconds % 60;
    (h, m, s)
}

/// Formats an hour value as zero-padded `HH:MM:SS`.
///
/// ```
/// use polarfind_time::format::hms_string;
///
/// assert_eq!(hms_string(6.6645), "06:39:52");
/// assert_eq!(hms_string(0.0), "00:00:00");
/// ```
pub fn hms_string(hours: f64) -> String {
    let (h, m, s) = split_hms(hours);
    format!("{:02}:{:02}:{:02}", h, m, s)
}
