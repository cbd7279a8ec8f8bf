//! Time module for the solar calculations
//!
//! All instants are UTC seconds since the Unix epoch. The astronomical
//! formulas work on Julian dates or on day offsets from the J2000 epoch, so
//! this module holds the conversions between those time bases and the
//! `chrono` interop used by host bindings.

use crate::constants::{DAY_S, J1970, J2000};
use chrono::{DateTime, TimeZone, Utc};
use serde::Serialize;
use std::fmt;
use std::ops::{Add, Sub};
use thiserror::Error;

/// Error type for time operations
#[derive(Debug, Error)]
pub enum TimeError {
    #[error("Time out of range: {0}")]
    OutOfRange(String),
}

/// Result type for time operations
pub type Result<T> = std::result::Result<T, TimeError>;

/// An integer count of seconds since the Unix epoch (UTC)
///
/// There is no timezone and no calendar state attached; calendar views are
/// produced on demand through `chrono`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Instant(i64);

impl Instant {
    /// Create an instant from Unix seconds
    pub const fn from_unix_seconds(seconds: i64) -> Self {
        Self(seconds)
    }

    /// Seconds since the Unix epoch
    pub const fn unix_seconds(&self) -> i64 {
        self.0
    }

    /// The current time, truncated to whole seconds
    pub fn now() -> Self {
        Self::from_datetime(Utc::now())
    }

    /// Create an instant from a UTC datetime, dropping sub-second precision
    pub fn from_datetime(dt: DateTime<Utc>) -> Self {
        Self(dt.timestamp())
    }

    /// Get the UTC datetime for this instant
    pub fn to_datetime(&self) -> Result<DateTime<Utc>> {
        Utc.timestamp_opt(self.0, 0)
            .single()
            .ok_or_else(|| TimeError::OutOfRange(format!("{} seconds since 1970", self.0)))
    }

    /// Julian date of this instant
    pub fn julian_date(&self) -> f64 {
        to_julian_date(*self)
    }

    /// Days (fractional) since the J2000 epoch
    pub fn j2000_days(&self) -> f64 {
        to_j2000_days(*self)
    }
}

impl fmt::Display for Instant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.to_datetime() {
            Ok(dt) => write!(f, "{}", dt.format("%Y-%m-%dT%H:%M:%SZ")),
            Err(_) => write!(f, "<Instant {}s>", self.0),
        }
    }
}

impl From<DateTime<Utc>> for Instant {
    fn from(dt: DateTime<Utc>) -> Self {
        Self::from_datetime(dt)
    }
}

impl From<i64> for Instant {
    fn from(seconds: i64) -> Self {
        Self(seconds)
    }
}

// Offsets in whole seconds, saturating at the ends of the i64 range

impl Add<i64> for Instant {
    type Output = Instant;

    fn add(self, seconds: i64) -> Self::Output {
        Instant(self.0.saturating_add(seconds))
    }
}

impl Sub<i64> for Instant {
    type Output = Instant;

    fn sub(self, seconds: i64) -> Self::Output {
        Instant(self.0.saturating_sub(seconds))
    }
}

impl Sub<Instant> for Instant {
    type Output = i64;

    fn sub(self, other: Instant) -> Self::Output {
        self.0.saturating_sub(other.0)
    }
}

/// Convert a Unix instant to a Julian date
pub fn to_julian_date(instant: Instant) -> f64 {
    instant.0 as f64 / DAY_S - 0.5 + J1970
}

/// Convert a Julian date back to a Unix instant, rounded to the nearest second
pub fn from_julian_date(jd: f64) -> Instant {
    Instant(((jd + 0.5 - J1970) * DAY_S).round() as i64)
}

/// Days since the J2000 epoch for a Unix instant
pub fn to_j2000_days(instant: Instant) -> f64 {
    to_julian_date(instant) - J2000
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rstest::rstest;

    #[test]
    fn test_unix_epoch_julian_date() {
        // 1970-01-01T00:00:00Z
        assert_relative_eq!(to_julian_date(Instant(0)), 2_440_587.5, epsilon = 1e-10);
    }

    #[test]
    fn test_j2000_epoch() {
        // 2000-01-01T12:00:00Z is JD 2451545.0
        let j2000 = Instant::from_unix_seconds(946_728_000);
        assert_relative_eq!(j2000.julian_date(), J2000, epsilon = 1e-10);
        assert_relative_eq!(j2000.j2000_days(), 0.0, epsilon = 1e-10);
    }

    #[rstest]
    #[case(0)]
    #[case(1)]
    #[case(-1)]
    #[case(946_728_000)]
    #[case(1_331_161_200)]
    #[case(1_362_441_600)]
    #[case(4_102_444_799)]
    #[case(-2_208_988_800)]
    fn test_julian_round_trip(#[case] seconds: i64) {
        let instant = Instant::from_unix_seconds(seconds);
        let back = from_julian_date(to_julian_date(instant));
        assert!(
            (back - instant).abs() <= 1,
            "round trip drifted: {} -> {}",
            seconds,
            back.unix_seconds()
        );
    }

    #[test]
    fn test_round_trip_sweep() {
        // One instant per ~11.6 days across roughly a century
        let mut seconds = -1_000_000_000_i64;
        while seconds < 3_000_000_000 {
            let instant = Instant::from_unix_seconds(seconds);
            assert_eq!(from_julian_date(instant.julian_date()), instant);
            seconds += 999_983;
        }
    }

    #[test]
    fn test_from_julian_date_rounds() {
        // Half a second past midnight of the Unix epoch rounds up
        let jd = 2_440_587.5 + 0.6 / DAY_S;
        assert_eq!(from_julian_date(jd).unix_seconds(), 1);
        let jd = 2_440_587.5 + 0.4 / DAY_S;
        assert_eq!(from_julian_date(jd).unix_seconds(), 0);
    }

    #[test]
    fn test_instant_arithmetic() {
        let t = Instant::from_unix_seconds(1_000);
        assert_eq!((t + 500).unix_seconds(), 1_500);
        assert_eq!((t - 500).unix_seconds(), 500);
        assert_eq!(t - Instant::from_unix_seconds(400), 600);
        assert!(t < t + 1);
    }

    #[test]
    fn test_arithmetic_saturates_at_range_ends() {
        let min = Instant::from_unix_seconds(i64::MIN);
        let max = Instant::from_unix_seconds(i64::MAX);
        assert_eq!(min - 43_200, min);
        assert_eq!(max + 43_200, max);
        assert_eq!(min - max, i64::MIN);
        assert_eq!(max - min, i64::MAX);
        assert_eq!((min + 1).unix_seconds(), i64::MIN + 1);
    }

    #[test]
    fn test_datetime_conversions() {
        let dt = Utc.with_ymd_and_hms(2013, 3, 5, 0, 0, 0).unwrap();
        let instant = Instant::from(dt);
        assert_eq!(instant.unix_seconds(), 1_362_441_600);
        assert_eq!(instant.to_datetime().unwrap(), dt);
        assert_eq!(instant.to_string(), "2013-03-05T00:00:00Z");
    }

    #[test]
    fn test_out_of_range_display() {
        let instant = Instant::from_unix_seconds(i64::MAX);
        assert!(instant.to_datetime().is_err());
        assert_eq!(instant.to_string(), format!("<Instant {}s>", i64::MAX));
    }
}
