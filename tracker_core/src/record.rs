//! Field-level parsing shared by the training and daily step records.
//!
//! Records are comma-separated with no whitespace trimming. Both record
//! shapes share the same step count and duration rules:
//! - Field count must match exactly
//! - Step count is an integer of at least 1
//! - Duration uses the compound grammar in [`crate::duration`] and must be positive

use crate::{duration::parse_duration, Error, Result};
use chrono::Duration;

/// Split a record into exactly `expected` comma-separated fields
pub(crate) fn split_fields(data: &str, expected: usize) -> Result<Vec<&str>> {
    let fields: Vec<&str> = data.split(',').collect();
    if fields.len() != expected {
        return Err(Error::Format {
            expected,
            found: fields.len(),
        });
    }
    Ok(fields)
}

/// Parse a step count field, rejecting anything below one step
pub(crate) fn parse_steps(field: &str) -> Result<u64> {
    let steps: i64 = field
        .parse()
        .map_err(|e| Error::parse("step count", field, e))?;
    if steps < 1 {
        return Err(Error::Validation(format!(
            "step count must be at least 1, got {}",
            steps
        )));
    }
    Ok(steps as u64)
}

/// Parse a duration field, rejecting zero and negative spans
pub(crate) fn parse_positive_duration(field: &str) -> Result<Duration> {
    let duration = parse_duration(field)?;
    if duration <= Duration::zero() {
        return Err(Error::Validation(format!(
            "duration must be positive, got {:?}",
            field
        )));
    }
    Ok(duration)
}
