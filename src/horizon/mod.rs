//! Horizon geometry: sidereal time, hour angles and azimuth/altitude
//!
//! Converts the Sun's equatorial coordinates into what an observer at a
//! given latitude and longitude sees, and inverts the altitude formula to
//! find the hour angle at which the Sun crosses a target altitude.

use crate::constants::{DEG2RAD, RAD2DEG};
use crate::coordinates::{GeoPosition, Horizontal};
use crate::ephemeris::sun_coordinates;
use crate::time::{to_j2000_days, Instant};
use crate::{Result, SuncalcError};
use log::trace;

/// Local sidereal time for a J2000 day offset and west-positive longitude
pub fn sidereal_time(d: f64, lw: f64) -> f64 {
    DEG2RAD * (280.16 + 360.9856235 * d) - lw
}

/// Hour angle at which a body of declination `dec` reaches altitude `h`
///
/// Returns `UnreachableThreshold` when no such hour angle exists at
/// latitude `phi` (polar day or night for that altitude), including the
/// degenerate case `cos(phi) * cos(dec) == 0`.
pub fn hour_angle(h: f64, phi: f64, dec: f64) -> Result<f64> {
    let cos_h = (h.sin() - phi.sin() * dec.sin()) / (phi.cos() * dec.cos());

    if !cos_h.is_finite() || !(-1.0..=1.0).contains(&cos_h) {
        return Err(SuncalcError::UnreachableThreshold {
            altitude_deg: h * RAD2DEG,
        });
    }

    Ok(cos_h.acos())
}

/// Azimuth (from south, clockwise) for hour angle `h`, latitude `phi` and declination `dec`
pub fn azimuth(h: f64, phi: f64, dec: f64) -> f64 {
    h.sin().atan2(h.cos() * phi.sin() - dec.tan() * phi.cos())
}

/// Altitude above the horizon for hour angle `h`, latitude `phi` and declination `dec`
pub fn altitude(h: f64, phi: f64, dec: f64) -> f64 {
    (phi.sin() * dec.sin() + phi.cos() * dec.cos() * h.cos()).asin()
}

/// Atmospheric refraction in radians for an apparent altitude `h` in radians
///
/// Meeus formula 16.4. Negative altitudes are clamped to zero; the formula
/// diverges below the horizon.
pub fn astro_refraction(h: f64) -> f64 {
    let h = h.max(0.0);
    0.0002967 / (h + 0.00312536 / (h + 0.08901179)).tan()
}

/// Horizon dip in degrees for an observer `height` meters above sea level
pub fn observer_angle(height: f64) -> Result<f64> {
    if !height.is_finite() || height < 0.0 {
        return Err(SuncalcError::InvalidInput(format!(
            "observer height must be a non-negative number of meters, got {}",
            height
        )));
    }

    Ok(-2.076 * height.sqrt() / 60.0)
}

/// Apparent position of the Sun for an observer at a given instant
pub fn sun_position(instant: Instant, position: &GeoPosition) -> Horizontal {
    let d = to_j2000_days(instant);
    let coords = sun_coordinates(d);
    let h = sidereal_time(d, position.lw) - coords.ra;

    trace!(
        "sun_position: d={:.6} ra={:.6} dec={:.6} H={:.6}",
        d,
        coords.ra,
        coords.dec,
        h
    );

    Horizontal::new(
        azimuth(h, position.phi, coords.dec),
        altitude(h, position.phi, coords.dec),
    )
}
