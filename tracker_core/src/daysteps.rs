//! Daily step reporter.
//!
//! A day record has the shape `steps,duration`, e.g. `6000,1h`. Distance uses
//! a fixed step length rather than the height-derived one in
//! [`crate::spentcalories`]; calories are delegated to the walking formula.
//!
//! The report is display-only: any failure is logged and the report is empty.

use crate::record::{parse_positive_duration, parse_steps, split_fields};
use crate::spentcalories::{walking_spent_calories, M_IN_KM};
use crate::{DaySummary, Result, StepRecord};

/// Length of one step in meters
pub const STEP_LENGTH: f64 = 0.65;

const DAY_FIELDS: usize = 2;

/// Parse a `steps,duration` record
pub fn parse_day(data: &str) -> Result<StepRecord> {
    let fields = split_fields(data, DAY_FIELDS)?;
    let steps = parse_steps(fields[0])?;
    let duration = parse_positive_duration(fields[1])?;
    Ok(StepRecord { steps, duration })
}

/// Build the structured day summary, surfacing any failure
pub fn day_summary(data: &str, weight_kg: f64, height_cm: f64) -> Result<DaySummary> {
    let record = parse_day(data)?;
    let distance_km = STEP_LENGTH * record.steps as f64 / M_IN_KM;
    let calories_kcal = walking_spent_calories(record.steps, weight_kg, height_cm, record.duration)?;

    Ok(DaySummary {
        steps: record.steps,
        distance_km,
        calories_kcal,
    })
}

/// Render the daily step report, or an empty string if the record or
/// biometrics are invalid
pub fn day_report(data: &str, weight_kg: f64, height_cm: f64) -> String {
    match day_summary(data, weight_kg, height_cm) {
        Ok(summary) => summary.to_string(),
        Err(e) => {
            tracing::warn!("Day record {:?} rejected: {}", data, e);
            String::new()
        }
    }
}
