//! Coordinate value types shared by the solar calculations
//!
//! Degrees only appear at the construction boundary (`GeoPosition::new`,
//! `Equatorial::from_degrees`); every stored angle is in radians.

use crate::constants::{DEG2RAD, RAD2DEG, TAU};
use crate::{Result, SuncalcError};
use serde::Serialize;
use std::f64::consts::PI;

/// Observer location on the Earth's surface
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoPosition {
    /// Geodetic latitude in radians, north positive
    pub phi: f64,
    /// Longitude in radians, measured west-positive (negated east longitude)
    pub lw: f64,
}

impl GeoPosition {
    /// Create a position from latitude and longitude in degrees (east positive)
    pub fn new(latitude_deg: f64, longitude_deg: f64) -> Result<Self> {
        if !latitude_deg.is_finite() || !(-90.0..=90.0).contains(&latitude_deg) {
            return Err(SuncalcError::InvalidInput(format!(
                "latitude must be within [-90, 90] degrees, got {}",
                latitude_deg
            )));
        }
        if !longitude_deg.is_finite() {
            return Err(SuncalcError::InvalidInput(format!(
                "longitude must be finite, got {}",
                longitude_deg
            )));
        }

        Ok(Self {
            phi: DEG2RAD * latitude_deg,
            lw: DEG2RAD * -longitude_deg,
        })
    }

    /// Latitude in degrees
    pub fn latitude_degrees(&self) -> f64 {
        self.phi * RAD2DEG
    }

    /// Longitude in degrees, east positive
    pub fn longitude_degrees(&self) -> f64 {
        -self.lw * RAD2DEG
    }
}

/// Geocentric equatorial coordinates of the Sun for one day offset
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Equatorial {
    /// Right ascension in radians
    pub ra: f64,
    /// Declination in radians
    pub dec: f64,
}

impl Equatorial {
    pub fn new(ra: f64, dec: f64) -> Self {
        Equatorial { ra, dec }
    }

    /// Create a new Equatorial coordinate with values in degrees
    pub fn from_degrees(ra_deg: f64, dec_deg: f64) -> Self {
        Self::new(ra_deg * DEG2RAD, dec_deg * DEG2RAD)
    }

    /// Get right ascension in degrees
    pub fn ra_degrees(&self) -> f64 {
        self.ra * RAD2DEG
    }

    /// Get declination in degrees
    pub fn dec_degrees(&self) -> f64 {
        self.dec * RAD2DEG
    }
}

/// Topocentric horizon coordinates of the Sun
///
/// Azimuth follows the astronomical convention used by the Meeus formulas:
/// zero points due south and the angle grows clockwise towards the west, so
/// morning positions have negative azimuth.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Horizontal {
    /// Azimuth in radians, measured from south towards west
    pub azimuth: f64,
    /// Altitude above the horizon in radians
    pub altitude: f64,
}

impl Horizontal {
    pub fn new(azimuth: f64, altitude: f64) -> Self {
        Horizontal { azimuth, altitude }
    }

    /// Compass bearing measured from north through east, in [0, 2π)
    pub fn azimuth_from_north(&self) -> f64 {
        (self.azimuth + PI).rem_euclid(TAU)
    }

    /// Altitude with the Meeus atmospheric refraction term added
    pub fn refracted_altitude(&self) -> f64 {
        self.altitude + crate::horizon::astro_refraction(self.altitude)
    }

    /// Get azimuth in degrees
    pub fn azimuth_degrees(&self) -> f64 {
        self.azimuth * RAD2DEG
    }

    /// Get altitude in degrees
    pub fn altitude_degrees(&self) -> f64 {
        self.altitude * RAD2DEG
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rstest::rstest;

    #[test]
    fn test_geo_position_radians() {
        let pos = GeoPosition::new(45.0, 90.0).unwrap();
        assert_relative_eq!(pos.phi, PI / 4.0, epsilon = 1e-15);
        // West-positive convention
        assert_relative_eq!(pos.lw, -PI / 2.0, epsilon = 1e-15);
        assert_relative_eq!(pos.latitude_degrees(), 45.0, epsilon = 1e-12);
        assert_relative_eq!(pos.longitude_degrees(), 90.0, epsilon = 1e-12);
    }

    #[rstest]
    #[case(90.5, 0.0)]
    #[case(-91.0, 0.0)]
    #[case(f64::NAN, 0.0)]
    #[case(0.0, f64::INFINITY)]
    #[case(0.0, f64::NAN)]
    fn test_geo_position_rejects(#[case] lat: f64, #[case] lng: f64) {
        let result = GeoPosition::new(lat, lng);
        assert!(matches!(result, Err(SuncalcError::InvalidInput(_))));
    }

    #[test]
    fn test_geo_position_accepts_poles() {
        assert!(GeoPosition::new(90.0, 0.0).is_ok());
        assert!(GeoPosition::new(-90.0, 360.0).is_ok());
    }

    #[test]
    fn test_equatorial_degrees() {
        let coord = Equatorial::from_degrees(90.0, -23.4397);
        assert_relative_eq!(coord.ra, PI / 2.0, epsilon = 1e-15);
        assert_relative_eq!(coord.ra_degrees(), 90.0, epsilon = 1e-12);
        assert_relative_eq!(coord.dec_degrees(), -23.4397, epsilon = 1e-12);
    }

    #[rstest]
    #[case(0.0, 180.0)]
    #[case(-PI / 2.0, 90.0)]
    #[case(PI / 2.0, 270.0)]
    #[case(PI, 0.0)]
    fn test_azimuth_from_north(#[case] azimuth: f64, #[case] expected_deg: f64) {
        let pos = Horizontal::new(azimuth, 0.3);
        assert_relative_eq!(pos.azimuth_from_north() * RAD2DEG, expected_deg, epsilon = 1e-9);
    }

    #[test]
    fn test_refracted_altitude_raises_sun() {
        let pos = Horizontal::new(0.0, 10.0 * DEG2RAD);
        assert!(pos.refracted_altitude() > pos.altitude);
        // Roughly 5 arcminutes at 10 degrees
        let lift_arcmin = (pos.refracted_altitude() - pos.altitude) * RAD2DEG * 60.0;
        assert_relative_eq!(lift_arcmin, 5.3, epsilon = 0.3);
    }
}
