pub const J2000_JD: f64 = 2451545.0;

pub const UNIX_EPOCH_JD: f64 = 2440587.5;

pub const MILLIS_PER_DAY_F64: f64 = 86_400_000.0;

pub const SECONDS_PER_DAY_F64: f64 = 86_400.0;

pub const SECONDS_PER_HOUR: f64 = 3600.0;

pub const HOURS_PER_DAY: f64 = 24.0;

pub const DEGREES_PER_HOUR: f64 = 15.0;

/// GMST at the J2000.0 epoch in hours, intercept of the linear model.
pub const GMST_J2000_HOURS: f64 = 18.697374558;

/// Sidereal hours elapsed per solar day, slope of the linear model.
///
/// Together with [`GMST_J2000_HOURS`] this is the standard low-precision
/// GMST approximation, accurate to a few seconds over modern decades. The
/// coefficients are fixed: downstream dial positions and readout strings are
/// verified against these exact values, so swapping in a nutation/precession
/// model is a behavior change, not a refinement.
#[allow(clippy::excessive_precision)]
pub const GMST_HOURS_PER_DAY: f64 = 24.06570982441908;

/// J2000 right ascension of Polaris in hours, held fixed.
///
/// Precession drifts this slowly, but a visual alignment aid needs
/// few-arcminute precision at most.
pub const POLARIS_RA_HOURS: f64 = 2.98;

/// Mean sidereal day in milliseconds.
pub const SIDEREAL_DAY_MILLIS: f64 = 86_164_090.5;
