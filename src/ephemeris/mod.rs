//! Low-precision solar ephemeris
//!
//! Formulas from Jean Meeus, "Astronomical Algorithms", reduced to the terms
//! needed for arcminute-level Sun positions. Inputs and outputs are radians;
//! day offsets `d` are counted from the J2000 epoch.

use crate::constants::{DEG2RAD, J0, J2000, OBLIQUITY, PERIHELION, TAU};
use crate::coordinates::Equatorial;
use std::f64::consts::PI;

/// Mean anomaly of the Sun for a J2000 day offset
pub fn solar_mean_anomaly(d: f64) -> f64 {
    DEG2RAD * (357.5291 + 0.98560028 * d)
}

/// Equation of center for a mean anomaly
pub fn equation_of_center(m: f64) -> f64 {
    DEG2RAD * (1.9148 * m.sin() + 0.02 * (2.0 * m).sin() + 0.0003 * (3.0 * m).sin())
}

/// Ecliptic longitude of the Sun for a mean anomaly
pub fn ecliptic_longitude(m: f64) -> f64 {
    m + equation_of_center(m) + PERIHELION + PI
}

/// Declination for an ecliptic longitude `l` and ecliptic latitude `b`
///
/// The Sun's ecliptic latitude is always taken as zero.
pub fn declination(l: f64, b: f64) -> f64 {
    (b.sin() * OBLIQUITY.cos() + b.cos() * OBLIQUITY.sin() * l.sin()).asin()
}

/// Right ascension for an ecliptic longitude `l` and ecliptic latitude `b`
pub fn right_ascension(l: f64, b: f64) -> f64 {
    (l.sin() * OBLIQUITY.cos() - b.tan() * OBLIQUITY.sin()).atan2(l.cos())
}

/// Geocentric equatorial coordinates of the Sun for a J2000 day offset
pub fn sun_coordinates(d: f64) -> Equatorial {
    let m = solar_mean_anomaly(d);
    let l = ecliptic_longitude(m);

    Equatorial::new(right_ascension(l, 0.0), declination(l, 0.0))
}

/// Index of the solar day (Julian cycle) nearest to day offset `d`
///
/// `lw` is the observer longitude in radians, west positive.
pub fn julian_cycle(d: f64, lw: f64) -> f64 {
    (d - J0 - lw / TAU).round()
}

/// Approximate J2000 day offset at which the Sun reaches hour angle `ht`
pub fn approx_transit(ht: f64, lw: f64, n: f64) -> f64 {
    J0 + (ht + lw) / TAU + n
}

/// Julian date of the solar transit, corrected by the equation of time
pub fn solar_transit_j(ds: f64, m: f64, l: f64) -> f64 {
    J2000 + ds + 0.0053 * m.sin() - 0.0069 * (2.0 * l).sin()
}
