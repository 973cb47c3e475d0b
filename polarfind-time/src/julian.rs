use polarfind_core::constants::{J2000_JD, MILLIS_PER_DAY_F64, SECONDS_PER_DAY_F64, UNIX_EPOCH_JD};
use std::fmt;

/// A two-part Julian Date.
///
/// Splitting the date as `jd1 + jd2` preserves precision: `jd1` holds the
/// large epoch offset and `jd2` the fraction. [`from_unix_millis`](Self::from_unix_millis)
/// puts the whole Unix offset into `jd1` so `jd2` keeps sub-millisecond
/// resolution for modern timestamps.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct JulianDate {
    pub jd1: f64,
    pub jd2: f64,
}

impl JulianDate {
    pub fn new(jd1: f64, jd2: f64) -> Self {
        Self { jd1, jd2 }
    }

    pub fn from_f64(jd: f64) -> Self {
        Self::new(jd, 0.0)
    }

    /// Converts milliseconds since the Unix epoch.
    ///
    /// Equivalent to `jd = millis / 86_400_000 + 2_440_587.5`, kept in two
    /// parts.
    pub fn from_unix_millis(millis: i64) -> Self {
        Self::new(UNIX_EPOCH_JD, millis as f64 / MILLIS_PER_DAY_F64)
    }

    pub fn j2000() -> Self {
        Self::new(J2000_JD, 0.0)
    }

    pub fn unix_epoch() -> Self {
        Self::new(UNIX_EPOCH_JD, 0.0)
    }

    pub fn jd1(&self) -> f64 {
        self.jd1
    }

    pub fn jd2(&self) -> f64 {
        self.jd2
    }

    pub fn to_f64(&self) -> f64 {
        self.jd1 + self.jd2
    }

    /// Days elapsed since the J2000.0 epoch, grouped to keep the small
    /// difference exact.
    pub fn days_since_j2000(&self) -> f64 {
        (self.jd1 - J2000_JD) + self.jd2
    }

    pub fn add_days(&self, days: f64) -> Self {
        Self::new(self.jd1, self.jd2 + days)
    }

    pub fn add_seconds(&self, seconds: f64) -> Self {
        self.add_days(seconds / SECONDS_PER_DAY_F64)
    }

    pub fn add_millis(&self, millis: f64) -> Self {
        self.add_days(millis / MILLIS_PER_DAY_F64)
    }
}

impl fmt::Display for JulianDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "JD {:.9}", self.to_f64())
    }
}

impl From<f64> for JulianDate {
    fn from(jd: f64) -> Self {
        Self::from_f64(jd)
    }
}
