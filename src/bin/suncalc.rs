//! Sun Position and Times Tool
//!
//! Prints the Sun's azimuth/altitude or the table of daily solar events for
//! a location, as text or JSON.
//!
//! Usage:
//!   cargo run --bin suncalc -- position --lat 51.5074 --lng -0.1278
//!   cargo run --bin suncalc -- times --lat 51.5074 --lng -0.1278 --height 35 --json

use clap::{ArgAction, Parser, Subcommand};
use log::{debug, LevelFilter};
use serde::Serialize;
use suncalc::{Horizontal, Instant, Observer, SolarEventTable};

/// Type alias for the error type used throughout this module
type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;

/// Sun position and times tool
#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Computes the Sun's position and daily solar event times",
    long_about = None
)]
struct Args {
    /// Emit JSON instead of text
    #[arg(short, long, action = ArgAction::SetTrue, global = true)]
    json: bool,

    /// Display detailed debugging information
    #[arg(short, long, action = ArgAction::SetTrue, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Azimuth and altitude of the Sun at an instant
    Position {
        /// Latitude in degrees, north positive
        #[arg(long, allow_hyphen_values = true)]
        lat: f64,

        /// Longitude in degrees, east positive
        #[arg(long, allow_hyphen_values = true)]
        lng: f64,

        /// Unix timestamp in seconds (defaults to now)
        #[arg(short, long, allow_hyphen_values = true)]
        timestamp: Option<i64>,
    },
    /// Sunrise, sunset, twilight and related times for a day
    Times {
        /// Latitude in degrees, north positive
        #[arg(long, allow_hyphen_values = true)]
        lat: f64,

        /// Longitude in degrees, east positive
        #[arg(long, allow_hyphen_values = true)]
        lng: f64,

        /// Observer height above sea level in meters
        #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
        height: f64,

        /// Unix timestamp in seconds (defaults to now)
        #[arg(short, long, allow_hyphen_values = true)]
        timestamp: Option<i64>,
    },
}

/// JSON shape for a position result
#[derive(Serialize)]
struct PositionReport {
    timestamp: Instant,
    azimuth: f64,
    altitude: f64,
}

/// Prints a section header with a title and separator line
fn print_section_header(title: &str) {
    println!("\n{}:", title);
    println!("-------------------------------------------------------");
}

/// Helper to print named values in a formatted way
fn print_named_value(name: &str, value: impl std::fmt::Display) {
    println!("{:<16} {}", format!("{}:", name), value);
}

fn display_position(instant: Instant, sun: &Horizontal) {
    print_section_header(&format!("Sun position at {}", instant));
    print_named_value("Azimuth", format!("{:.6} rad", sun.azimuth));
    print_named_value("Altitude", format!("{:.6} rad", sun.altitude));
    print_named_value(
        "Bearing",
        format!("{:.2} deg from north", sun.azimuth_from_north().to_degrees()),
    );
    print_named_value(
        "Apparent alt.",
        format!("{:.2} deg (refracted)", sun.refracted_altitude().to_degrees()),
    );
}

fn display_times(table: &SolarEventTable) {
    print_section_header("Solar events");
    for entry in table {
        match entry.instant() {
            Some(instant) => print_named_value(entry.event().name(), instant),
            None => print_named_value(entry.event().name(), "-- (not reached)"),
        }
    }
}

fn run(args: Args) -> Result<()> {
    match args.command {
        Command::Position {
            lat,
            lng,
            timestamp,
        } => {
            let instant = timestamp.map(Instant::from).unwrap_or_else(Instant::now);
            debug!("position for lat={} lng={} at {}", lat, lng, instant);

            let sun = Observer::new(lat, lng).position(instant)?;
            if args.json {
                let report = PositionReport {
                    timestamp: instant,
                    azimuth: sun.azimuth,
                    altitude: sun.altitude,
                };
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                display_position(instant, &sun);
            }
        }
        Command::Times {
            lat,
            lng,
            height,
            timestamp,
        } => {
            let instant = timestamp.map(Instant::from).unwrap_or_else(Instant::now);
            debug!(
                "times for lat={} lng={} height={} at {}",
                lat, lng, height, instant
            );

            let table = Observer::new(lat, lng).with_height(height).times(instant)?;
            if args.json {
                println!("{}", serde_json::to_string_pretty(&table)?);
            } else {
                display_times(&table);
            }
        }
    }

    Ok(())
}

fn main() {
    let args = Args::parse();

    let level = if args.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();

    if let Err(e) = run(args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
