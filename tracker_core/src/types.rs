//! Core domain types for activity tracking.
//!
//! This module defines the value types that flow through a single report call:
//! - Parsed records (full activity records and daily step records)
//! - Caller-supplied biometrics
//! - Derived metrics and the rendered summaries built from them
//!
//! None of these are persisted; each is created and dropped within one call.

use crate::duration::hours;
use crate::Error;
use chrono::Duration;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ============================================================================
// Activity Kinds
// ============================================================================

/// Kind of training activity
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ActivityKind {
    Running,
    Walking,
}

impl ActivityKind {
    /// Localized label used in records and rendered reports
    pub fn label(self) -> &'static str {
        match self {
            ActivityKind::Running => "Бег",
            ActivityKind::Walking => "Ходьба",
        }
    }
}

impl FromStr for ActivityKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Бег" => Ok(ActivityKind::Running),
            "Ходьба" => Ok(ActivityKind::Walking),
            other => Err(Error::UnknownActivity(other.to_string())),
        }
    }
}

impl fmt::Display for ActivityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ============================================================================
// Records
// ============================================================================

/// A parsed `steps,activity,duration` training record
///
/// The activity literal is kept raw; it is only resolved to an
/// [`ActivityKind`] when a report is built.
#[derive(Clone, Debug, PartialEq)]
pub struct ActivityRecord {
    pub steps: u64,
    pub activity: String,
    pub duration: Duration,
}

/// A parsed `steps,duration` daily step record
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StepRecord {
    pub steps: u64,
    pub duration: Duration,
}

/// User biometrics supplied with each report call
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq)]
pub struct BiometricProfile {
    /// Body weight in kilograms
    pub weight_kg: f64,
    /// Height in centimeters
    pub height_cm: f64,
}

// ============================================================================
// Derived Metrics and Summaries
// ============================================================================

/// Metrics derived from one training record
#[derive(Clone, Copy, Debug, Serialize, PartialEq)]
pub struct ComputedMetrics {
    pub distance_km: f64,
    pub mean_speed_kmh: f64,
    pub calories_kcal: f64,
}

/// Everything shown in a training report
#[derive(Clone, Copy, Debug, Serialize, PartialEq)]
pub struct TrainingInfo {
    pub activity: ActivityKind,
    pub duration_hours: f64,
    #[serde(flatten)]
    pub metrics: ComputedMetrics,
}

impl TrainingInfo {
    pub fn new(activity: ActivityKind, duration: Duration, metrics: ComputedMetrics) -> Self {
        Self {
            activity,
            duration_hours: hours(duration),
            metrics,
        }
    }
}

impl fmt::Display for TrainingInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Тип тренировки: {}\nДлительность: {:.2} ч.\nДистанция: {:.2} км.\nСкорость: {:.2} км/ч\nСожгли калорий: {:.2}\n",
            self.activity,
            self.duration_hours,
            self.metrics.distance_km,
            self.metrics.mean_speed_kmh,
            self.metrics.calories_kcal,
        )
    }
}

/// Everything shown in a daily step report
#[derive(Clone, Copy, Debug, Serialize, PartialEq)]
pub struct DaySummary {
    pub steps: u64,
    pub distance_km: f64,
    pub calories_kcal: f64,
}

impl fmt::Display for DaySummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Количество шагов: {}.\nДистанция составила {:.2} км.\nВы сожгли {:.2} ккал.\n",
            self.steps, self.distance_km, self.calories_kcal,
        )
    }
}
