//! Calorie engine for full training records.
//!
//! A training record has the shape `steps,activity,duration`, e.g.
//! `3456,Ходьба,3h00m00s`. Distance is derived from a height-based step
//! length, and calories from body weight, mean speed and duration:
//! - Running: `weight * speed * minutes / 60`
//! - Walking: the running figure scaled by [`WALKING_CALORIES_COEFFICIENT`]

use crate::duration::{hours, minutes};
use crate::record::{parse_positive_duration, parse_steps, split_fields};
use crate::{ActivityKind, ActivityRecord, ComputedMetrics, Error, Result, TrainingInfo};
use chrono::Duration;

/// Meters in a kilometer
pub const M_IN_KM: f64 = 1000.0;
/// Minutes in an hour
pub const MIN_IN_H: f64 = 60.0;
/// Step length as a fraction of height
pub const STEP_LENGTH_COEFFICIENT: f64 = 0.45;
/// Walking burns half the calories of running at the same speed
pub const WALKING_CALORIES_COEFFICIENT: f64 = 0.5;

const TRAINING_FIELDS: usize = 3;

/// Parse a `steps,activity,duration` record
///
/// The activity literal is not checked here.
pub fn parse_training(data: &str) -> Result<ActivityRecord> {
    let fields = split_fields(data, TRAINING_FIELDS)?;
    let steps = parse_steps(fields[0])?;
    let duration = parse_positive_duration(fields[2])?;

    Ok(ActivityRecord {
        steps,
        activity: fields[1].to_string(),
        duration,
    })
}

/// Distance in kilometers covered by `steps` at a height-derived step length
pub fn distance(steps: u64, height_cm: f64) -> f64 {
    steps as f64 * height_cm * STEP_LENGTH_COEFFICIENT / M_IN_KM
}

/// Mean speed in km/h; zero for a non-positive duration
pub fn mean_speed(steps: u64, height_cm: f64, duration: Duration) -> f64 {
    if duration <= Duration::zero() {
        return 0.0;
    }
    distance(steps, height_cm) / hours(duration)
}

/// Calories burned while running
pub fn running_spent_calories(
    steps: u64,
    weight_kg: f64,
    height_cm: f64,
    duration: Duration,
) -> Result<f64> {
    validate_inputs(steps, weight_kg, height_cm, duration)?;
    let speed = mean_speed(steps, height_cm, duration);
    Ok((weight_kg * speed * minutes(duration)) / MIN_IN_H)
}

/// Calories burned while walking
pub fn walking_spent_calories(
    steps: u64,
    weight_kg: f64,
    height_cm: f64,
    duration: Duration,
) -> Result<f64> {
    validate_inputs(steps, weight_kg, height_cm, duration)?;
    let speed = mean_speed(steps, height_cm, duration);
    Ok((weight_kg * speed * minutes(duration) * WALKING_CALORIES_COEFFICIENT) / MIN_IN_H)
}

/// Calories for the given activity kind
pub fn spent_calories(
    activity: ActivityKind,
    steps: u64,
    weight_kg: f64,
    height_cm: f64,
    duration: Duration,
) -> Result<f64> {
    match activity {
        ActivityKind::Running => running_spent_calories(steps, weight_kg, height_cm, duration),
        ActivityKind::Walking => walking_spent_calories(steps, weight_kg, height_cm, duration),
    }
}

fn validate_inputs(steps: u64, weight_kg: f64, height_cm: f64, duration: Duration) -> Result<()> {
    if steps < 1 {
        return Err(Error::Validation("step count must be at least 1".into()));
    }
    if !weight_kg.is_finite() || weight_kg <= 0.0 {
        return Err(Error::Validation(format!(
            "weight must be a positive finite number, got {}",
            weight_kg
        )));
    }
    if !height_cm.is_finite() || height_cm <= 0.0 {
        return Err(Error::Validation(format!(
            "height must be a positive finite number, got {}",
            height_cm
        )));
    }
    if duration <= Duration::zero() {
        return Err(Error::Validation("duration must be positive".into()));
    }
    Ok(())
}

/// Build the structured training summary for a record
///
/// Failures are logged and returned. Order of checks: record parsing,
/// then activity kind, then biometric validation.
pub fn training_info(data: &str, weight_kg: f64, height_cm: f64) -> Result<TrainingInfo> {
    let result = build_training_info(data, weight_kg, height_cm);
    if let Err(ref e) = result {
        tracing::warn!("Training record {:?} rejected: {}", data, e);
    }
    result
}

fn build_training_info(data: &str, weight_kg: f64, height_cm: f64) -> Result<TrainingInfo> {
    let record = parse_training(data)?;
    let activity: ActivityKind = record.activity.parse()?;

    let calories_kcal = spent_calories(
        activity,
        record.steps,
        weight_kg,
        height_cm,
        record.duration,
    )?;

    let metrics = ComputedMetrics {
        distance_km: distance(record.steps, height_cm),
        mean_speed_kmh: mean_speed(record.steps, height_cm, record.duration),
        calories_kcal,
    };

    tracing::debug!(
        "Computed {:?} training: {:.2} km, {:.2} kcal",
        activity,
        metrics.distance_km,
        metrics.calories_kcal
    );

    Ok(TrainingInfo::new(activity, record.duration, metrics))
}

/// Render the human-readable training report for a record
///
/// Every failure (format, parse, validation, unknown activity) is surfaced
/// to the caller.
pub fn training_report(data: &str, weight_kg: f64, height_cm: f64) -> Result<String> {
    training_info(data, weight_kg, height_cm).map(|info| info.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn test_parse_training() {
        let record = parse_training("3456,Ходьба,3h00m00s").unwrap();
        assert_eq!(record.steps, 3456);
        assert_eq!(record.activity, "Ходьба");
        assert_eq!(record.duration, Duration::hours(3));
    }

    #[test]
    fn test_parse_training_keeps_unknown_activity() {
        let record = parse_training("100,Плавание,1h").unwrap();
        assert_eq!(record.activity, "Плавание");
    }

    #[test]
    fn test_parse_training_failures() {
        assert!(matches!(parse_training("1000"), Err(Error::Format { .. })));
        assert!(matches!(
            parse_training("1000,Бег,3h,extra"),
            Err(Error::Format { expected: 3, found: 4 })
        ));
        assert!(matches!(parse_training("x,Бег,1h"), Err(Error::Parse { .. })));
        assert!(matches!(parse_training("1000,Бег,soon"), Err(Error::Parse { .. })));
        assert!(matches!(parse_training("0,Бег,1h"), Err(Error::Validation(_))));
        assert!(matches!(parse_training("1000,Бег,0s"), Err(Error::Validation(_))));
    }

    #[test]
    fn test_distance_and_speed() {
        assert!((distance(3456, 175.0) - 272.16).abs() < EPS);
        assert!((mean_speed(3456, 175.0, Duration::hours(3)) - 90.72).abs() < EPS);
        assert_eq!(mean_speed(3456, 175.0, Duration::zero()), 0.0);
        assert_eq!(mean_speed(3456, 175.0, Duration::hours(-1)), 0.0);
    }

    #[test]
    fn test_calorie_formulas() {
        let d = Duration::hours(3);
        let walking = walking_spent_calories(3456, 75.0, 175.0, d).unwrap();
        let running = running_spent_calories(3456, 75.0, 175.0, d).unwrap();

        assert!((walking - 10206.0).abs() < 1e-6);
        assert_eq!(running, 2.0 * walking);
    }

    #[test]
    fn test_calorie_validation() {
        let d = Duration::hours(1);
        for (steps, weight, height, duration) in [
            (0, 75.0, 175.0, d),
            (100, 0.0, 175.0, d),
            (100, -1.0, 175.0, d),
            (100, f64::NAN, 175.0, d),
            (100, f64::INFINITY, 175.0, d),
            (100, 75.0, f64::INFINITY, d),
            (100, 75.0, f64::NAN, d),
            (100, 75.0, 0.0, d),
            (100, 75.0, -175.0, d),
            (100, 75.0, 175.0, Duration::zero()),
        ] {
            assert!(matches!(
                running_spent_calories(steps, weight, height, duration),
                Err(Error::Validation(_))
            ));
            assert!(matches!(
                walking_spent_calories(steps, weight, height, duration),
                Err(Error::Validation(_))
            ));
        }
    }

    #[test]
    fn test_training_report_walking() {
        let report = training_report("3456,Ходьба,3h00m00s", 75.0, 175.0).unwrap();
        assert_eq!(
            report,
            "Тип тренировки: Ходьба\nДлительность: 3.00 ч.\nДистанция: 272.16 км.\nСкорость: 90.72 км/ч\nСожгли калорий: 10206.00\n"
        );
    }

    #[test]
    fn test_training_report_running() {
        let report = training_report("3456,Бег,3h00m00s", 75.0, 175.0).unwrap();
        assert_eq!(
            report,
            "Тип тренировки: Бег\nДлительность: 3.00 ч.\nДистанция: 272.16 км.\nСкорость: 90.72 км/ч\nСожгли калорий: 20412.00\n"
        );
    }

    #[test]
    fn test_running_doubles_walking() {
        let walking = training_info("5000,Ходьба,1h15m", 68.5, 181.0).unwrap();
        let running = training_info("5000,Бег,1h15m", 68.5, 181.0).unwrap();

        assert_eq!(walking.metrics.distance_km, running.metrics.distance_km);
        assert_eq!(walking.metrics.mean_speed_kmh, running.metrics.mean_speed_kmh);
        assert_eq!(running.metrics.calories_kcal, 2.0 * walking.metrics.calories_kcal);
    }

    #[test]
    fn test_training_report_unknown_activity() {
        crate::logging::init_test();
        let err = training_report("100,Плавание,1h", 75.0, 175.0).unwrap_err();
        assert!(matches!(err, Error::UnknownActivity(ref s) if s == "Плавание"));
    }

    #[test]
    fn test_unknown_activity_checked_before_biometrics() {
        let err = training_report("100,Плавание,1h", 0.0, 0.0).unwrap_err();
        assert!(matches!(err, Error::UnknownActivity(_)));
    }

    #[test]
    fn test_training_report_errors() {
        assert!(matches!(
            training_report("1000", 75.0, 175.0),
            Err(Error::Format { .. })
        ));
        assert!(matches!(
            training_report("0,Бег,1h", 75.0, 175.0),
            Err(Error::Validation(_))
        ));
        assert!(matches!(
            training_report("1000,Бег,0h", 75.0, 175.0),
            Err(Error::Validation(_))
        ));
        assert!(matches!(
            training_report("1000,Бег,1h", 0.0, 175.0),
            Err(Error::Validation(_))
        ));
        assert!(matches!(
            training_report("1000,Бег,1h", 75.0, -3.0),
            Err(Error::Validation(_))
        ));
        assert!(matches!(
            training_report("1000,Бег,1 h", 75.0, 175.0),
            Err(Error::Parse { .. })
        ));
        assert!(matches!(
            training_report("1000,Бег,1h", f64::INFINITY, 175.0),
            Err(Error::Validation(_))
        ));
    }

    #[test]
    fn test_three_fields_with_bad_duration_is_parse_error() {
        // Exactly three fields, so the field count passes and "extra" is
        // read as the duration.
        let err = training_report("1000,3h,extra", 75.0, 175.0).unwrap_err();
        assert!(matches!(
            err,
            Error::Parse { field: "duration", ref value, .. } if value == "extra"
        ));
    }

    #[test]
    fn test_nanosecond_duration_is_accepted() {
        let info = training_info("1000,Бег,1ns", 75.0, 175.0).unwrap();
        assert!(info.metrics.mean_speed_kmh > 1e12);
        assert!(info.metrics.calories_kcal >= 0.0);
    }

    #[test]
    fn test_report_is_deterministic() {
        let first = training_report("4200,Бег,47m13s", 80.0, 190.0).unwrap();
        let second = training_report("4200,Бег,47m13s", 80.0, 190.0).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_spent_calories_dispatch_from_crate_root() {
        let d = Duration::minutes(40);
        assert_eq!(
            crate::spent_calories(ActivityKind::Running, 5000, 70.0, 170.0, d).unwrap(),
            running_spent_calories(5000, 70.0, 170.0, d).unwrap()
        );
        assert_eq!(
            crate::spent_calories(ActivityKind::Walking, 5000, 70.0, 170.0, d).unwrap(),
            walking_spent_calories(5000, 70.0, 170.0, d).unwrap()
        );
    }

    #[test]
    fn test_reports_from_many_threads() {
        let expected = training_report("3456,Бег,3h00m00s", 75.0, 175.0).unwrap();

        std::thread::scope(|s| {
            let handles: Vec<_> = (0..8)
                .map(|_| s.spawn(|| training_report("3456,Бег,3h00m00s", 75.0, 175.0)))
                .collect();
            for handle in handles {
                assert_eq!(handle.join().unwrap().unwrap(), expected);
            }
        });
    }
}
