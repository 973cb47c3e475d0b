//! Observer location on Earth in geodetic coordinates.
//!
//! Coordinates are stored in degrees — every downstream quantity in this
//! workspace is expressed in degrees or hours, so there is nothing to gain
//! from a radian-native representation.
//!
//! # Coordinate conventions
//!
//! - **Latitude**: North positive, degrees, range [-90, 90]
//! - **Longitude**: East positive, degrees, range [-180, 180]
//! - **Height**: Meters above the ellipsoid
//!
//! Validation applies to this typed path only. The raw sidereal functions in
//! `polarfind-time` accept any real longitude unvalidated; a host that wants
//! range checking goes through [`Location`].
//!
//! # Example
//!
//! ```
//! use polarfind_core::Location;
//!
//! // Mauna Kea summit
//! let obs = Location::new(19.8283, -155.4783, 4145.0)?;
//! assert!((obs.longitude_hours() + 10.36522).abs() < 1e-5);
//! # Ok::<(), polarfind_core::PolarError>(())
//! ```

use crate::constants::DEGREES_PER_HOUR;
use crate::errors::{MathErrorKind, PolarError, PolarResult};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A geographic observer location in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Location {
    /// Geodetic latitude in degrees. North is positive.
    pub latitude_deg: f64,
    /// Geodetic longitude in degrees. East is positive.
    pub longitude_deg: f64,
    /// Height above the ellipsoid in meters.
    pub height_m: f64,
}

impl Location {
    /// Creates a new location from coordinates in degrees.
    ///
    /// # Errors
    ///
    /// Returns an error if any coordinate is non-finite or outside its valid
    /// range. The height range covers the Mariana Trench floor to well above
    /// aircraft altitude.
    pub fn new(latitude_deg: f64, longitude_deg: f64, height_m: f64) -> PolarResult<Self> {
        if !latitude_deg.is_finite() {
            return Err(PolarError::math_error(
                "location_validation",
                MathErrorKind::NotFinite,
                "Latitude must be finite",
            ));
        }
        if !longitude_deg.is_finite() {
            return Err(PolarError::math_error(
                "location_validation",
                MathErrorKind::NotFinite,
                "Longitude must be finite",
            ));
        }
        if !height_m.is_finite() {
            return Err(PolarError::math_error(
                "location_validation",
                MathErrorKind::NotFinite,
                "Height must be finite",
            ));
        }

        if latitude_deg.abs() > 90.0 {
            return Err(PolarError::math_error(
                "location_validation",
                MathErrorKind::OutOfRange,
                "Latitude outside valid range [-90, 90] degrees",
            ));
        }
        if longitude_deg.abs() > 180.0 {
            return Err(PolarError::math_error(
                "location_validation",
                MathErrorKind::OutOfRange,
                "Longitude outside valid range [-180, 180] degrees",
            ));
        }
        if !(-12000.0..=100000.0).contains(&height_m) {
            return Err(PolarError::math_error(
                "location_validation",
                MathErrorKind::OutOfRange,
                "Height outside reasonable range [-12000, 100000] meters",
            ));
        }

        Ok(Self {
            latitude_deg,
            longitude_deg,
            height_m,
        })
    }

    /// Royal Observatory Greenwich.
    pub fn greenwich() -> Self {
        Self {
            latitude_deg: 51.4769,
            longitude_deg: 0.0,
            height_m: 46.0,
        }
    }

    /// Longitude expressed in hours, east positive (15° per hour).
    pub fn longitude_hours(&self) -> f64 {
        self.longitude_deg / DEGREES_PER_HOUR
    }
}

impl std::fmt::Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "({:.4}°, {:.4}°, {:.0}m)",
            self.latitude_deg, self.longitude_deg, self.height_m
        )
    }
}

/// Looks up a well-known observer site by name.
///
/// # Supported sites
/// * `"mauna_kea"` / `"keck"` - Mauna Kea summit, Hawaii
/// * `"greenwich"` - Royal Observatory Greenwich, UK
/// * `"palomar"` - Palomar Observatory, California
/// * `"vlt"` - Very Large Telescope, Chile
///
/// # Errors
///
/// Returns [`PolarError::UnknownSite`] for any other name.
pub fn named_site(name: &str) -> PolarResult<Location> {
    match name {
        "mauna_kea" | "keck" => Ok(Location::new(19.8283, -155.4783, 4145.0)
            .expect("Mauna Kea coordinates are valid")),
        "greenwich" => Ok(Location::greenwich()),
        "palomar" => {
            Ok(Location::new(33.3563, -116.8650, 1712.0).expect("Palomar coordinates are valid"))
        }
        "vlt" => Ok(Location::new(-24.6275, -70.4044, 2635.0).expect("VLT coordinates are valid")),
        _ => Err(PolarError::UnknownSite(name.to_string())),
    }
}
