//! Flight statistics over a trajectory.
//!
//! All three functions take a plain slice and are total: an empty slice
//! yields 0 rather than an error, so they can be used on arbitrary data and
//! not only on generated trajectories.

use crate::domain::models::{FlightReport, Trajectory};

/// Number of transitions, `len - 1`.
pub fn flight_time(values: &[u64]) -> usize {
    values.len().saturating_sub(1)
}

/// Steps spent strictly above the starting value before the first drop below it.
///
/// The scan begins at the second element and stops at the first element that
/// is strictly less than `values[0]`. Elements equal to the start neither count
/// nor stop the scan.
///
/// # Examples
/// `[7, 22, 11, 34, 17, 52, 26, 13, 40, 20, 10, 5, ...]` counts the ten values
/// from 22 to 10 and stops at 5.
pub fn altitude_flight_time(values: &[u64]) -> usize {
    let Some((&start, rest)) = values.split_first() else {
        return 0;
    };
    rest.iter()
        .take_while(|&&u| u >= start)
        .filter(|&&u| u > start)
        .count()
}

/// Highest value reached; 0 for an empty slice.
pub fn max_altitude(values: &[u64]) -> u64 {
    values.iter().copied().max().unwrap_or(0)
}

impl FlightReport {
    pub fn from_trajectory(trajectory: &Trajectory) -> Self {
        let values = trajectory.values();
        Self {
            start: trajectory.start(),
            flight_time: flight_time(values),
            altitude_flight_time: altitude_flight_time(values),
            max_altitude: max_altitude(values),
            chart: None,
        }
    }
}
