use super::angle::SiderealAngle;
use super::gmst::GMST;
use polarfind_core::constants::DEGREES_PER_HOUR;
use polarfind_core::math::wrap_hours;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Local sidereal time from a wall-clock timestamp and an observer longitude.
///
/// The raw entry point of the calculator: milliseconds since the Unix epoch
/// plus degrees east-positive in, hours in [0, 24) out. Pure and total —
/// the longitude is deliberately not range-validated (a host that wants
/// validation goes through [`polarfind_core::Location`]), and a non-finite
/// input simply propagates as NaN.
///
/// ```
/// use polarfind_time::local_sidereal_time;
///
/// let at_greenwich = local_sidereal_time(946_684_800_000, 0.0);
/// let one_hour_east = local_sidereal_time(946_684_800_000, 15.0);
/// assert!((one_hour_east - (at_greenwich + 1.0) % 24.0).abs() < 1e-12);
/// ```
pub fn local_sidereal_time(unix_millis: i64, longitude_deg: f64) -> f64 {
    let gmst = GMST::from_unix_millis(unix_millis);
    wrap_hours(gmst.hours() + longitude_deg / DEGREES_PER_HOUR)
}

/// Local Sidereal Time at a known longitude.
///
/// Pairs the sidereal angle with the longitude it was computed for, so a
/// value cannot silently be reused at a different meridian.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LST {
    angle: SiderealAngle,
    longitude_deg: f64,
}

impl LST {
    pub fn from_unix_millis(millis: i64, longitude_deg: f64) -> Self {
        Self {
            angle: SiderealAngle::from_hours(local_sidereal_time(millis, longitude_deg)),
            longitude_deg,
        }
    }

    pub fn from_gmst(gmst: &GMST, longitude_deg: f64) -> Self {
        Self {
            angle: SiderealAngle::from_hours(gmst.hours() + longitude_deg / DEGREES_PER_HOUR),
            longitude_deg,
        }
    }

    pub fn from_hours(hours: f64, longitude_deg: f64) -> Self {
        Self {
            angle: SiderealAngle::from_hours(hours),
            longitude_deg,
        }
    }

    pub fn angle(&self) -> SiderealAngle {
        self.angle
    }

    pub fn longitude_deg(&self) -> f64 {
        self.longitude_deg
    }

    pub fn hours(&self) -> f64 {
        self.angle.hours()
    }

    pub fn degrees(&self) -> f64 {
        self.angle.degrees()
    }

    pub fn radians(&self) -> f64 {
        self.angle.radians()
    }

    pub fn hour_angle_to_target(&self, target_ra_hours: f64) -> f64 {
        self.angle.hour_angle_to_target(target_ra_hours)
    }

    /// Hour angle of Polaris at this LST, on the [0, 24) circle.
    pub fn polaris_hour_angle(&self) -> SiderealAngle {
        SiderealAngle::from_hours(crate::polaris::hour_angle(self.hours()))
    }

    pub fn to_gmst(&self) -> GMST {
        GMST::from_hours(self.hours() - self.longitude_deg / DEGREES_PER_HOUR)
    }
}

impl std::fmt::Display for LST {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "LST {} at {:.4}°", self.angle, self.longitude_deg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use polarfind_core::constants::SIDEREAL_DAY_MILLIS;
    use proptest::prelude::*;

    const Y2K_MILLIS: i64 = 946_684_800_000;

    #[test]
    fn test_lst_at_greenwich_equals_gmst() {
        let gmst = GMST::from_unix_millis(Y2K_MILLIS);
        let lst = LST::from_unix_millis(Y2K_MILLIS, 0.0);
        assert!(
            (lst.hours() - gmst.hours()).abs() < 1e-14,
            "LST at Greenwich should equal GMST: LST={}, GMST={}",
            lst.hours(),
            gmst.hours()
        );
    }

    #[test]
    fn test_lst_longitude_correction() {
        // 1 degree = 4 minutes = 1/15 hour
        let greenwich = LST::from_unix_millis(Y2K_MILLIS, 0.0);
        let east = LST::from_unix_millis(Y2K_MILLIS, 15.0);
        let west = LST::from_unix_millis(Y2K_MILLIS, -15.0);

        let diff_east = wrap_hours(east.hours() - greenwich.hours());
        assert!(
            (diff_east - 1.0).abs() < 1e-12,
            "15°E should be +1 hour: {}",
            diff_east
        );

        let diff_west = wrap_hours(west.hours() - greenwich.hours());
        assert!(
            (diff_west - 23.0).abs() < 1e-12,
            "15°W should be -1 hour: {}",
            diff_west
        );
    }

    #[test]
    fn test_lst_y2k_vector() {
        // d = -0.5 from J2000, longitude 0
        let lst = LST::from_unix_millis(Y2K_MILLIS, 0.0);
        assert!((lst.hours() - 6.664519646).abs() < 1e-4);
    }

    #[test]
    fn test_longitude_periodicity() {
        let base = local_sidereal_time(Y2K_MILLIS, -155.4783);
        let wrapped = local_sidereal_time(Y2K_MILLIS, -155.4783 + 360.0);
        assert!(
            (base - wrapped).abs() < 1e-9,
            "longitude +360° changed LST: {} vs {}",
            base,
            wrapped
        );
    }

    #[test]
    fn test_sidereal_day_periodicity() {
        // Two sidereal days is a whole number of milliseconds
        let two_sidereal_days = (2.0 * SIDEREAL_DAY_MILLIS) as i64;
        let before = local_sidereal_time(Y2K_MILLIS, 0.0);
        let after = local_sidereal_time(Y2K_MILLIS + two_sidereal_days, 0.0);
        assert!(
            (before - after).abs() < 1e-5,
            "LST should repeat after two sidereal days: {} vs {}",
            before,
            after
        );
    }

    #[test]
    fn test_lst_to_gmst_roundtrip() {
        let longitude_deg = -155.4783;
        let original = GMST::from_hours(15.5);
        let lst = original.to_lst(longitude_deg);
        let recovered = lst.to_gmst();

        assert!(
            (recovered.hours() - original.hours()).abs() < 1e-12,
            "GMST->LST->GMST roundtrip failed: original={}, recovered={}",
            original.hours(),
            recovered.hours()
        );
    }

    #[test]
    fn test_extreme_longitudes() {
        let gmst = GMST::from_unix_millis(Y2K_MILLIS);
        let east = LST::from_unix_millis(Y2K_MILLIS, 180.0);
        let west = LST::from_unix_millis(Y2K_MILLIS, -180.0);

        // 180°E and 180°W are 12 hours from Greenwich and equal to each other
        let diff_east = wrap_hours(east.hours() - gmst.hours());
        assert!((diff_east - 12.0).abs() < 1e-12, "180°E should be +12 hours");
        assert!((east.hours() - west.hours()).abs() < 1e-12);
    }

    #[test]
    fn test_lst_constructors_and_accessors() {
        let lst = LST::from_hours(14.5, -70.4044);
        assert_eq!(lst.hours(), 14.5);
        assert_eq!(lst.degrees(), 14.5 * 15.0);
        assert_eq!(lst.longitude_deg(), -70.4044);
        assert_eq!(lst.angle().hours(), 14.5);
        assert_eq!(lst.hour_angle_to_target(6.0), 8.5);
    }

    #[test]
    fn test_lst_display() {
        let lst = LST::from_hours(12.5, -155.4783);
        let display = format!("{}", lst);
        assert!(display.contains("LST"));
        assert!(display.contains("-155.4783"));
    }

    proptest! {
        #[test]
        fn prop_lst_in_range(millis in -4_000_000_000_000_i64..4_000_000_000_000,
                             longitude in -1e6..1e6f64) {
            let lst = local_sidereal_time(millis, longitude);
            prop_assert!(lst >= 0.0);
            prop_assert!(lst < 24.0);
        }

        #[test]
        fn prop_longitude_periodicity(millis in 0_i64..4_000_000_000_000,
                                      longitude in -720.0..720.0f64) {
            let base = local_sidereal_time(millis, longitude);
            let shifted = local_sidereal_time(millis, longitude + 360.0);
            let diff = (base - shifted).abs();
            // Compare on the circle
            prop_assert!(diff < 1e-8 || (24.0 - diff) < 1e-8);
        }
    }
}
