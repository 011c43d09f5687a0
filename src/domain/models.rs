use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Upper bound on Collatz steps before generation gives up.
pub const DEFAULT_MAX_STEPS: usize = 100_000;

/// Starting value used when the binary is invoked without a subcommand.
pub const DEMO_START: u64 = 15;

#[derive(Serialize)]
pub struct JsonOut<T: Serialize> {
    pub ok: bool,
    pub data: T,
}

/// A Collatz trajectory: starts at the seed, ends at 1, never empty.
///
/// Only `services::sequence::generate` builds one, which is what keeps the
/// non-empty and terminal-one invariants true.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Trajectory(Vec<u64>);

impl Trajectory {
    pub(crate) fn from_values(values: Vec<u64>) -> Self {
        debug_assert!(!values.is_empty());
        Self(values)
    }

    pub fn start(&self) -> u64 {
        self.0[0]
    }

    pub fn values(&self) -> &[u64] {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FlightReport {
    pub start: u64,
    pub flight_time: usize,
    pub altitude_flight_time: usize,
    pub max_altitude: u64,
    /// Path of the rendered chart, if one was written.
    pub chart: Option<PathBuf>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    pub max_steps: usize,
    pub chart: ChartConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_steps: DEFAULT_MAX_STEPS,
            chart: ChartConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ChartConfig {
    pub width: u32,
    pub height: u32,
    pub marker_size: u32,
    /// Hand the written chart to the platform viewer.
    pub show: bool,
    pub output_dir: Option<PathBuf>,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            width: 1024,
            height: 768,
            marker_size: 3,
            show: true,
            output_dir: None,
        }
    }
}
