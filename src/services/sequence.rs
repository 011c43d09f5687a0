//! Collatz trajectory generation.
//!
//! From `u`, the next element is `u / 2` when `u` is even and `3u + 1` when it
//! is odd. Generation stops as soon as the last element is 1.

use crate::domain::models::Trajectory;

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum SequenceError {
    #[error("starting value must be >= 1, got 0")]
    ZeroStart,
    #[error("3 * {value} + 1 overflows u64")]
    Overflow { value: u64 },
    #[error("trajectory from {start} did not reach 1 within {limit} steps")]
    StepLimit { start: u64, limit: usize },
}

/// Single Collatz step, `None` on overflow.
pub fn next(u: u64) -> Option<u64> {
    if u % 2 == 0 {
        Some(u / 2)
    } else {
        u.checked_mul(3)?.checked_add(1)
    }
}

/// Builds the trajectory from `start` down to 1.
///
/// `max_steps` bounds the number of transitions; hitting it is an error rather
/// than a truncated trajectory.
pub fn generate(start: u64, max_steps: usize) -> Result<Trajectory, SequenceError> {
    if start == 0 {
        return Err(SequenceError::ZeroStart);
    }
    let mut values = vec![start];
    let mut u = start;
    while u != 1 {
        if values.len() > max_steps {
            return Err(SequenceError::StepLimit {
                start,
                limit: max_steps,
            });
        }
        u = next(u).ok_or(SequenceError::Overflow { value: u })?;
        values.push(u);
    }
    tracing::debug!(start, steps = values.len() - 1, "generated trajectory");
    Ok(Trajectory::from_values(values))
}
