//! Daily solar events: transit, nadir, rise/set and twilight crossings
//!
//! The quantities that depend only on the date (Julian cycle, mean anomaly,
//! ecliptic longitude, declination, transit) are computed once into a
//! [`SolarDay`] and shared by every row of the table. Each horizon threshold
//! is solved for its setting time; the rising time is its reflection about
//! the transit.
//!
//! ## Example
//!
//! ```rust
//! use suncalc::almanac::{sun_times, SolarEvent};
//! use suncalc::coordinates::GeoPosition;
//! use suncalc::time::Instant;
//!
//! let kyiv = GeoPosition::new(50.5, 30.5).unwrap();
//! let table = sun_times(Instant::from_unix_seconds(1_362_441_600), &kyiv, 0.0).unwrap();
//! let sunrise = table.instant(SolarEvent::Sunrise).unwrap();
//! assert_eq!(sunrise.to_string(), "2013-03-05T04:34:56Z");
//! ```

use crate::constants::{DEG2RAD, HALF_DAY_S};
use crate::coordinates::GeoPosition;
use crate::ephemeris::{
    approx_transit, declination, ecliptic_longitude, julian_cycle, solar_mean_anomaly,
    solar_transit_j,
};
use crate::horizon::{hour_angle, observer_angle};
use crate::time::{from_julian_date, to_j2000_days, Instant};
use crate::Result;
use log::{debug, trace};
use serde::ser::{SerializeStruct, Serializer};
use serde::Serialize;
use std::fmt;

/// Named solar events reported by the event table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SolarEvent {
    SolarNoon,
    Nadir,
    Sunrise,
    Sunset,
    SunriseEnd,
    SunsetStart,
    Dawn,
    Dusk,
    NauticalDawn,
    NauticalDusk,
    NightEnd,
    Night,
    GoldenHourEnd,
    GoldenHour,
}

impl SolarEvent {
    /// Get the event's label as a string
    pub fn name(&self) -> &'static str {
        match self {
            SolarEvent::SolarNoon => "solar_noon",
            SolarEvent::Nadir => "nadir",
            SolarEvent::Sunrise => "sunrise",
            SolarEvent::Sunset => "sunset",
            SolarEvent::SunriseEnd => "sunrise_end",
            SolarEvent::SunsetStart => "sunset_start",
            SolarEvent::Dawn => "dawn",
            SolarEvent::Dusk => "dusk",
            SolarEvent::NauticalDawn => "nautical_dawn",
            SolarEvent::NauticalDusk => "nautical_dusk",
            SolarEvent::NightEnd => "night_end",
            SolarEvent::Night => "night",
            SolarEvent::GoldenHourEnd => "golden_hour_end",
            SolarEvent::GoldenHour => "golden_hour",
        }
    }
}

impl fmt::Display for SolarEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A target solar altitude and the pair of events that cross it
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HorizonThreshold {
    /// Altitude of the Sun's center in degrees
    pub altitude_deg: f64,
    /// Event when the Sun climbs through the altitude
    pub rising: SolarEvent,
    /// Event when the Sun sinks through the altitude
    pub setting: SolarEvent,
}

/// Thresholds solved for every table, in output order
pub const HORIZON_THRESHOLDS: [HorizonThreshold; 6] = [
    HorizonThreshold {
        altitude_deg: -0.833,
        rising: SolarEvent::Sunrise,
        setting: SolarEvent::Sunset,
    },
    HorizonThreshold {
        altitude_deg: -0.3,
        rising: SolarEvent::SunriseEnd,
        setting: SolarEvent::SunsetStart,
    },
    HorizonThreshold {
        altitude_deg: -6.0,
        rising: SolarEvent::Dawn,
        setting: SolarEvent::Dusk,
    },
    HorizonThreshold {
        altitude_deg: -12.0,
        rising: SolarEvent::NauticalDawn,
        setting: SolarEvent::NauticalDusk,
    },
    HorizonThreshold {
        altitude_deg: -18.0,
        rising: SolarEvent::NightEnd,
        setting: SolarEvent::Night,
    },
    HorizonThreshold {
        altitude_deg: 6.0,
        rising: SolarEvent::GoldenHourEnd,
        setting: SolarEvent::GoldenHour,
    },
];

/// Number of rows in a [`SolarEventTable`]: transit, nadir and a pair per threshold
pub const EVENT_COUNT: usize = 2 + 2 * HORIZON_THRESHOLDS.len();

/// One row of the event table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolarEventEntry {
    /// The Sun crosses the threshold at `instant`
    Crossing { event: SolarEvent, instant: Instant },
    /// The threshold is never reached on this date at this latitude
    Unreachable { event: SolarEvent },
}

impl SolarEventEntry {
    pub fn event(&self) -> SolarEvent {
        match self {
            SolarEventEntry::Crossing { event, .. } | SolarEventEntry::Unreachable { event } => {
                *event
            }
        }
    }

    pub fn instant(&self) -> Option<Instant> {
        match self {
            SolarEventEntry::Crossing { instant, .. } => Some(*instant),
            SolarEventEntry::Unreachable { .. } => None,
        }
    }

    pub fn is_reachable(&self) -> bool {
        matches!(self, SolarEventEntry::Crossing { .. })
    }
}

// Serialised as {"event": "...", "instant": <seconds> | null}
impl Serialize for SolarEventEntry {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("SolarEventEntry", 2)?;
        state.serialize_field("event", &self.event())?;
        state.serialize_field("instant", &self.instant())?;
        state.end()
    }
}

/// The fixed, ordered table of daily solar events
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct SolarEventTable {
    entries: [SolarEventEntry; EVENT_COUNT],
}

impl SolarEventTable {
    /// All rows, in table order
    pub fn entries(&self) -> &[SolarEventEntry] {
        &self.entries
    }

    pub fn iter(&self) -> impl Iterator<Item = &SolarEventEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Find the row for an event
    pub fn get(&self, event: SolarEvent) -> Option<&SolarEventEntry> {
        self.entries.iter().find(|entry| entry.event() == event)
    }

    /// Instant of an event, or `None` if the Sun never crosses its threshold
    pub fn instant(&self, event: SolarEvent) -> Option<Instant> {
        self.get(event).and_then(SolarEventEntry::instant)
    }
}

impl<'a> IntoIterator for &'a SolarEventTable {
    type Item = &'a SolarEventEntry;
    type IntoIter = std::slice::Iter<'a, SolarEventEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Per-date quantities shared by every threshold of one table
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolarDay {
    /// Observer latitude in radians
    pub phi: f64,
    /// Observer longitude in radians, west positive
    pub lw: f64,
    /// Julian cycle (solar day index from J2000)
    pub n: f64,
    /// Solar mean anomaly at the approximate transit
    pub m: f64,
    /// Ecliptic longitude at the approximate transit
    pub l: f64,
    /// Declination at the approximate transit
    pub dec: f64,
    /// Julian date of the solar transit
    pub j_noon: f64,
}

impl SolarDay {
    /// Precompute the solar day nearest to `instant` for an observer
    pub fn new(instant: Instant, position: &GeoPosition) -> Self {
        let lw = position.lw;
        let d = to_j2000_days(instant);
        let n = julian_cycle(d, lw);
        let ds = approx_transit(0.0, lw, n);
        let m = solar_mean_anomaly(ds);
        let l = ecliptic_longitude(m);
        let dec = declination(l, 0.0);
        let j_noon = solar_transit_j(ds, m, l);

        trace!(
            "solar day: d={:.6} n={} ds={:.6} dec={:.6} j_noon={:.6}",
            d,
            n,
            ds,
            dec,
            j_noon
        );

        Self {
            phi: position.phi,
            lw,
            n,
            m,
            l,
            dec,
            j_noon,
        }
    }

    /// Instant of the solar transit
    pub fn solar_noon(&self) -> Instant {
        from_julian_date(self.j_noon)
    }

    /// Julian date at which the Sun sinks through altitude `h0` (radians)
    pub fn set_j(&self, h0: f64) -> Result<f64> {
        let w = hour_angle(h0, self.phi, self.dec)?;
        let a = approx_transit(w, self.lw, self.n);
        Ok(solar_transit_j(a, self.m, self.l))
    }
}

/// Solve one threshold into its (rising, setting) rows
///
/// `dip_deg` is the observer's horizon dip in degrees. An unreachable
/// altitude yields `Unreachable` rows for both events.
pub fn threshold_crossings(
    day: SolarDay,
    threshold: &HorizonThreshold,
    dip_deg: f64,
) -> (SolarEventEntry, SolarEventEntry) {
    let h0 = (threshold.altitude_deg + dip_deg) * DEG2RAD;

    match day.set_j(h0) {
        Ok(j_set) => {
            let j_rise = day.j_noon - (j_set - day.j_noon);
            (
                SolarEventEntry::Crossing {
                    event: threshold.rising,
                    instant: from_julian_date(j_rise),
                },
                SolarEventEntry::Crossing {
                    event: threshold.setting,
                    instant: from_julian_date(j_set),
                },
            )
        }
        Err(err) => {
            debug!("{} / {}: {}", threshold.rising, threshold.setting, err);
            (
                SolarEventEntry::Unreachable {
                    event: threshold.rising,
                },
                SolarEventEntry::Unreachable {
                    event: threshold.setting,
                },
            )
        }
    }
}

/// Build the event table for the solar day nearest to `instant`
///
/// `height` is the observer's height above sea level in meters; a negative
/// or non-finite height is rejected before anything is computed.
pub fn sun_times(instant: Instant, position: &GeoPosition, height: f64) -> Result<SolarEventTable> {
    let dip_deg = observer_angle(height)?;
    let day = SolarDay::new(instant, position);

    let solar_noon = day.solar_noon();
    let mut entries = [SolarEventEntry::Crossing {
        event: SolarEvent::SolarNoon,
        instant: solar_noon,
    }; EVENT_COUNT];
    entries[1] = SolarEventEntry::Crossing {
        event: SolarEvent::Nadir,
        instant: solar_noon - HALF_DAY_S,
    };

    for (i, threshold) in HORIZON_THRESHOLDS.iter().enumerate() {
        let (rise, set) = threshold_crossings(day, threshold, dip_deg);
        entries[2 + 2 * i] = rise;
        entries[3 + 2 * i] = set;
    }

    Ok(SolarEventTable { entries })
}
