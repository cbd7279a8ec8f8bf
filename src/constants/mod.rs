//! Constants module for solar position calculations

use std::f64::consts::PI;

// Time constants
/// Seconds in a day
pub const DAY_S: f64 = 86_400.0;
/// Seconds in half a day, as an integer offset between transit and nadir
pub const HALF_DAY_S: i64 = 43_200;
/// Julian day number of 1970-01-01 (the Julian date at noon of the Unix epoch day)
pub const J1970: f64 = 2_440_588.0;
/// J2000.0 epoch as Julian date
pub const J2000: f64 = 2_451_545.0;
/// Small correction (days) applied when locating the Julian cycle of a transit
pub const J0: f64 = 0.0009;

// Angles
/// Degrees to radians conversion factor
pub const DEG2RAD: f64 = PI / 180.0;
/// Radians to degrees conversion factor
pub const RAD2DEG: f64 = 180.0 / PI;
/// Tau (2*PI) for full circle
pub const TAU: f64 = 2.0 * PI;

// Earth constants
/// Obliquity of the ecliptic in radians (23.4397 degrees, no precession)
pub const OBLIQUITY: f64 = DEG2RAD * 23.4397;
/// Longitude of the Earth's perihelion in radians
pub const PERIHELION: f64 = DEG2RAD * 102.9372;
