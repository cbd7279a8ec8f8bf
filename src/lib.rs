//! Suncalc: Sun position and daily solar event times
//!
//! This crate computes the Sun's apparent azimuth and altitude for a moment
//! and place, and the table of daily solar events (solar noon, nadir,
//! sunrise, sunset, twilight phases, golden hour) using the low-precision
//! solar formulas from Jean Meeus' "Astronomical Algorithms".
//!
//! Every calculation is a pure function of its inputs: timestamps are UTC
//! seconds since the Unix epoch, angles are given in degrees at the API
//! boundary and handled in radians everywhere inside.
//!
//! ```rust
//! use suncalc::{Instant, Observer, SolarEvent};
//!
//! let observer = Observer::new(51.5074, -0.1278).with_height(35.0);
//! let instant = Instant::from_unix_seconds(1_331_161_200);
//!
//! let sun = observer.position(instant).unwrap();
//! assert!(sun.altitude < 0.0); // 23:00 UTC in London
//!
//! let times = observer.times(instant).unwrap();
//! assert!(times.instant(SolarEvent::Sunrise).is_some());
//! ```

use thiserror::Error;

pub mod almanac;
pub mod constants;
pub mod coordinates;
pub mod ephemeris;
pub mod horizon;
pub mod time;

// Re-export commonly used types
pub use almanac::{SolarEvent, SolarEventEntry, SolarEventTable};
pub use coordinates::{Equatorial, GeoPosition, Horizontal};
pub use time::Instant;

/// Main error type for the suncalc library
#[derive(Debug, Error)]
pub enum SuncalcError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Sun never reaches {altitude_deg:.3} degrees altitude on this date")]
    UnreachableThreshold { altitude_deg: f64 },

    #[error("Time error: {0}")]
    TimeError(#[from] time::TimeError),
}

/// Result type for suncalc operations
pub type Result<T> = std::result::Result<T, SuncalcError>;

/// An observer on the Earth's surface
///
/// Latitude and longitude are in degrees (north and east positive); the
/// height above sea level is in meters and lowers the effective horizon.
/// Values are validated when a calculation is requested.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Observer {
    latitude: f64,
    longitude: f64,
    height: f64,
}

impl Observer {
    /// Create an observer at sea level
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
            height: 0.0,
        }
    }

    /// Set the observer height above sea level in meters
    pub fn with_height(mut self, height: f64) -> Self {
        self.height = height;
        self
    }

    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    /// Validated location in radians
    pub fn geo_position(&self) -> Result<GeoPosition> {
        GeoPosition::new(self.latitude, self.longitude)
    }

    /// Sun azimuth and altitude seen by this observer at `instant`
    pub fn position(&self, instant: Instant) -> Result<Horizontal> {
        let position = self.geo_position()?;
        Ok(horizon::sun_position(instant, &position))
    }

    /// Solar event table for the solar day nearest to `instant`
    pub fn times(&self, instant: Instant) -> Result<SolarEventTable> {
        let position = self.geo_position()?;
        almanac::sun_times(instant, &position, self.height)
    }
}

/// Sun position for a Unix timestamp and a latitude/longitude in degrees
///
/// Returns azimuth (from south, clockwise) and altitude in radians.
pub fn get_position(timestamp: i64, latitude: f64, longitude: f64) -> Result<Horizontal> {
    Observer::new(latitude, longitude).position(Instant::from_unix_seconds(timestamp))
}

/// The fourteen daily solar events for a Unix timestamp and location
///
/// `height` is the observer height above sea level in meters and must not
/// be negative.
pub fn get_times(
    timestamp: i64,
    latitude: f64,
    longitude: f64,
    height: f64,
) -> Result<SolarEventTable> {
    Observer::new(latitude, longitude)
        .with_height(height)
        .times(Instant::from_unix_seconds(timestamp))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_get_position_matches_observer() {
        let direct = get_position(1_362_441_600, 50.5, 30.5).unwrap();
        let observer = Observer::new(50.5, 30.5)
            .position(Instant::from_unix_seconds(1_362_441_600))
            .unwrap();
        assert_eq!(direct, observer);
        assert_relative_eq!(direct.azimuth, -2.5003175907168385, epsilon = 1e-12);
    }

    #[test]
    fn test_get_times_rejects_negative_height() {
        let result = get_times(1_362_441_600, 50.5, 30.5, -0.5);
        match result {
            Err(SuncalcError::InvalidInput(msg)) => assert!(msg.contains("height")),
            other => panic!("expected invalid input, got {:?}", other),
        }
    }

    #[test]
    fn test_invalid_latitude() {
        assert!(matches!(
            get_position(0, 123.0, 0.0),
            Err(SuncalcError::InvalidInput(_))
        ));
        assert!(matches!(
            get_times(0, -95.0, 0.0, 0.0),
            Err(SuncalcError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_observer_builder() {
        let observer = Observer::new(10.0, 20.0).with_height(150.0);
        assert_eq!(observer.latitude(), 10.0);
        assert_eq!(observer.longitude(), 20.0);
        assert_eq!(observer.height(), 150.0);
        assert_eq!(Observer::new(10.0, 20.0).height(), 0.0);
    }

    #[test]
    fn test_calls_are_independent() {
        // Same inputs, same outputs, regardless of what ran in between
        let first = get_times(1_331_161_200, 51.5074, -0.1278, 0.0).unwrap();
        let _other = get_times(1_718_971_200, 78.0, 15.0, 10.0).unwrap();
        let second = get_times(1_331_161_200, 51.5074, -0.1278, 0.0).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_extreme_timestamps_do_not_overflow() {
        for timestamp in [i64::MIN, i64::MIN + 1, i64::MAX] {
            let table = get_times(timestamp, 10.0, 0.0, 0.0).unwrap();
            assert_eq!(table.len(), 14);
            let noon = table.instant(SolarEvent::SolarNoon).unwrap();
            let nadir = table.instant(SolarEvent::Nadir).unwrap();
            assert!(nadir <= noon);
        }
        assert!(get_position(i64::MIN, 10.0, 0.0).is_ok());
    }

    #[test]
    fn test_error_display() {
        let err = SuncalcError::UnreachableThreshold { altitude_deg: -18.0 };
        assert_eq!(
            err.to_string(),
            "Sun never reaches -18.000 degrees altitude on this date"
        );
    }
}
