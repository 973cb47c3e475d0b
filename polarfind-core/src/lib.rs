//! Foundation types for the polarfind workspace.
//!
//! `polarfind-core` carries the pieces every consumer of the alignment math
//! needs: the astronomical constants of the low-precision sidereal model,
//! floored-modulo helpers, the unified error type, and the validated observer
//! [`Location`].
//!
//! # Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`constants`] | Epochs, unit conversions, sidereal model coefficients |
//! | [`math`] | `fmod` and hour-wrapping primitives |
//! | [`location`] | Observer geodetic coordinates, named sites |
//! | [`errors`] | [`PolarError`] and [`PolarResult`] |
//!
//! # Re-exports
//!
//! ```
//! use polarfind_core::{Location, PolarError, PolarResult, MathErrorKind};
//! ```

pub mod constants;
pub mod errors;
pub mod location;
pub mod math;

pub use errors::{MathErrorKind, PolarError, PolarResult};
pub use location::Location;
