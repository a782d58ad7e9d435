use log::warn;

use crate::asm::{units, ChromatogramDataCube, CubeComponent, CubeData, CubeStructure};
use crate::backend::Signal;

use super::signal_unit;

/// Concept of the chromatogram time dimension
pub const RETENTION_TIME_CONCEPT: &str = "retention time";

/// Time axis unit of a signal
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TimeUnit {
    /// Seconds
    Seconds,
    /// Minutes
    Minutes,
    /// Hours
    Hours,
    /// Unrecognised token, kept as reported
    Other(String),
}

impl TimeUnit {
    /// Parse a unit token (case-insensitive)
    pub fn parse(token: &str) -> Self {
        match token.trim().to_ascii_lowercase().as_str() {
            "s" | "sec" | "second" | "seconds" => TimeUnit::Seconds,
            "min" | "minute" | "minutes" => TimeUnit::Minutes,
            "h" | "hr" | "hour" | "hours" => TimeUnit::Hours,
            _ => TimeUnit::Other(token.to_string()),
        }
    }

    /// Multiplier converting values in this unit to seconds.
    ///
    /// Unrecognised units are not converted.
    pub fn seconds_factor(&self) -> f64 {
        match self {
            TimeUnit::Seconds => 1.0,
            TimeUnit::Minutes => 60.0,
            TimeUnit::Hours => 3600.0,
            TimeUnit::Other(_) => 1.0,
        }
    }
}

/// Map the raw data points of `signal` to a chromatogram data cube.
///
/// The time axis is rescaled to seconds; the response axis is copied as is.
pub fn map_data_cube(signal: &Signal) -> ChromatogramDataCube {
    let unit = signal
        .metadata
        .time_unit
        .as_deref()
        .map(TimeUnit::parse)
        .unwrap_or(TimeUnit::Seconds);
    if let TimeUnit::Other(token) = &unit {
        warn!(
            "Unknown time unit '{}' on signal {}, times kept unscaled",
            token, signal.name
        );
    }
    let factor = unit.seconds_factor();

    let (times, responses): (Vec<f64>, Vec<f64>) = signal
        .data_points
        .iter()
        .map(|point| (point.x * factor, point.y))
        .unzip();

    ChromatogramDataCube {
        label: signal.name.clone(),
        cube_structure: CubeStructure {
            dimensions: vec![CubeComponent::double(
                Some(RETENTION_TIME_CONCEPT),
                units::SECONDS,
            )],
            measures: vec![CubeComponent::double(None, signal_unit(signal))],
        },
        data: CubeData {
            dimensions: vec![times],
            measures: vec![responses],
        },
    }
}
