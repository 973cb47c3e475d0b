//! Sidereal time and Polaris hour angle for a polar-alignment dial.
//!
//! The host samples a wall clock (epoch milliseconds) and a location source
//! (degrees, east positive) and calls in here; everything returned is a pure
//! function of those two inputs, recomputed per sample with no caching and
//! no error paths.
//!
//! ```
//! use polarfind_time::{local_sidereal_time, polaris};
//!
//! // 2000-01-01T00:00:00Z at Greenwich
//! let lst = local_sidereal_time(946_684_800_000, 0.0);
//! assert!((lst - 6.664519646).abs() < 1e-4);
//!
//! let ha = polaris::hour_angle(lst);
//! assert!((0.0..24.0).contains(&ha));
//! ```
//!
//! # Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`julian`] | Two-part Julian Date, epoch-millisecond conversion |
//! | [`sidereal`] | [`SiderealAngle`], [`GMST`], [`LST`] |
//! | [`polaris`] | Hour angle of Polaris from LST |
//! | [`dial`] | Hour angle to on-screen indicator angle |
//! | [`format`] | `HH:MM:SS` readout formatting |
//! | [`readout`] | Per-sample display bundle for the host |
//!
//! # Design Notes
//!
//! - **Low-precision on purpose**: GMST uses the linear approximation
//!   (see [`polarfind_core::constants::GMST_HOURS_PER_DAY`]), good to a few
//!   seconds over modern decades. Polaris sits within a degree of the pole;
//!   the dial cannot display the difference a full IAU model would make.
//! - **Hours internally**: sidereal values live in hours [0, 24); degrees
//!   and radians are derived views.
//! - **No implicit state**: every function takes the timestamp and longitude
//!   explicitly. Poll cadence is the host's policy.

pub mod dial;
pub mod format;
pub mod julian;
pub mod polaris;
pub mod readout;
pub mod sidereal;

pub use julian::JulianDate;
pub use readout::Readout;
pub use sidereal::{local_sidereal_time, SiderealAngle, GMST, LST};
