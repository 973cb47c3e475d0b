//! Mapping from Polaris hour angle to the on-screen indicator angle.
//!
//! The dial is drawn as a clock face in screen coordinates: 0° points right,
//! angles grow clockwise because the y axis points down. Hour angle 0 must
//! land at the dial's 12 o'clock after the through-the-scope 180° inversion,
//! which gives the fixed `-90 - ha*15 + 180` mapping. Display arithmetic
//! only — the calculator contract ends at the hour angle.

use polarfind_core::constants::DEGREES_PER_HOUR;

/// Screen angle in degrees of the Polaris marker for a given hour angle.
///
/// ```
/// use polarfind_time::dial;
///
/// // Polaris on the meridian sits at the inverted 12 o'clock
/// assert_eq!(dial::indicator_angle_degrees(0.0), 90.0);
/// ```
pub fn indicator_angle_degrees(ha_hours: f64) -> f64 {
    -90.0 - ha_hours * DEGREES_PER_HOUR + 180.0
}

/// [`indicator_angle_degrees`] in radians, ready for `sin`/`cos`.
pub fn indicator_angle_radians(ha_hours: f64) -> f64 {
    indicator_angle_degrees(ha_hours).to_radians()
}

/// Offset of the Polaris marker from the dial center, at the given radius.
///
/// Screen convention: x grows right, y grows down.
pub fn indicator_offset(ha_hours: f64, radius: f64) -> (f64, f64) {
    let angle = indicator_angle_radians(ha_hours);
    (radius * angle.cos(), radius * angle.sin())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indicator_angle_vectors() {
        assert_eq!(indicator_angle_degrees(0.0), 90.0);
        assert_eq!(indicator_angle_degrees(6.0), 0.0);
        assert_eq!(indicator_angle_degrees(12.0), -90.0);
        assert_eq!(indicator_angle_degrees(18.0), -180.0);
    }

    #[test]
    fn test_one_hour_is_fifteen_degrees_clockwise() {
        let at_zero = indicator_angle_degrees(0.0);
        let at_one = indicator_angle_degrees(1.0);
        assert_eq!(at_zero - at_one, 15.0);
    }

    #[test]
    fn test_radians_consistent() {
        let ha = 3.6845;
        let deg = indicator_angle_degrees(ha);
        assert!((indicator_angle_radians(ha) - deg.to_radians()).abs() < 1e-15);
    }

    #[test]
    fn test_offset_on_circle() {
        let (x, y) = indicator_offset(3.6845, 100.0);
        assert!(((x * x + y * y).sqrt() - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_offset_at_meridian_points_down() {
        // 90° in y-down screen coordinates is the bottom of the dial
        let (x, y) = indicator_offset(0.0, 50.0);
        assert!(x.abs() < 1e-9);
        assert!((y - 50.0).abs() < 1e-9);
    }
}
