use crate::constants::HOURS_PER_DAY;

#[inline]
pub fn fmod(x: f64, y: f64) -> f64 {
    libm::fmod(x, y)
}

/// Floored-modulo normalization of an hour value into [0, 24).
///
/// `fmod` truncates toward zero, so a second pass is needed to fold negative
/// remainders up. The double-`fmod` form also catches the case where adding
/// 24 to a tiny negative remainder rounds to exactly 24.0.
#[inline]
pub fn wrap_hours(hours: f64) -> f64 {
    fmod(fmod(hours, HOURS_PER_DAY) + HOURS_PER_DAY, HOURS_PER_DAY)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_positive() {
        assert_eq!(wrap_hours(0.0), 0.0);
        assert_eq!(wrap_hours(6.5), 6.5);
        assert_eq!(wrap_hours(23.999), 23.999);
    }

    #[test]
    fn test_wrap_overflow() {
        assert_eq!(wrap_hours(24.0), 0.0);
        assert_eq!(wrap_hours(25.5), 1.5);
        assert!((wrap_hours(72.25) - 0.25).abs() < 1e-12);
    }

    #[test]
    fn test_wrap_negative() {
        assert_eq!(wrap_hours(-1.5), 22.5);
        assert_eq!(wrap_hours(-24.0), 0.0);
        assert_eq!(wrap_hours(-25.0), 23.0);
    }

    #[test]
    fn test_wrap_tiny_negative_stays_below_24() {
        // fmod(-1e-20, 24) + 24 rounds to exactly 24.0; the outer fmod
        // must fold that back to 0.
        let wrapped = wrap_hours(-1e-20);
        assert!(wrapped < 24.0);
        assert!(wrapped >= 0.0);
    }

    #[test]
    fn test_wrap_large_magnitudes() {
        for &hours in &[1e9, -1e9, 123456789.123, -987654321.5] {
            let wrapped = wrap_hours(hours);
            assert!(
                (0.0..24.0).contains(&wrapped),
                "wrap_hours({}) out of range: {}",
                hours,
                wrapped
            );
        }
    }
}
