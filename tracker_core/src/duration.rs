//! Compound duration parsing.
//!
//! Durations are written as an optional sign followed by one or more
//! `<number><unit>` terms, e.g. `3h00m00s`, `1.5h`, `45m` or `250ms`.
//! Numbers may carry a fractional part. Recognized units are `ns`, `us`
//! (also `µs`/`μs`), `ms`, `s`, `m` and `h`.

use crate::{Error, Result};
use chrono::Duration;

const NANOS_PER_MICRO: u64 = 1_000;
const NANOS_PER_MILLI: u64 = 1_000_000;
const NANOS_PER_SECOND: u64 = 1_000_000_000;
const NANOS_PER_MINUTE: u64 = 60 * NANOS_PER_SECOND;
const NANOS_PER_HOUR: u64 = 60 * NANOS_PER_MINUTE;

/// Largest accumulated magnitude; only reachable as a negative duration
const MAX_MAGNITUDE: u64 = 1 << 63;

/// Parse a compound duration string into a signed nanosecond duration
///
/// The bare literal `"0"` is the only unitless value accepted. Sign handling
/// applies to the whole string, so `-1h30m` is minus ninety minutes.
pub fn parse_duration(input: &str) -> Result<Duration> {
    let fail = |reason: &str| Error::parse("duration", input, reason);

    let (negative, mut rest) = match input.as_bytes().first() {
        Some(b'-') => (true, &input[1..]),
        Some(b'+') => (false, &input[1..]),
        _ => (false, input),
    };

    if rest == "0" {
        return Ok(Duration::zero());
    }
    if rest.is_empty() {
        return Err(fail("empty duration"));
    }

    let mut total: u64 = 0;
    while !rest.is_empty() {
        if !rest.starts_with(|c: char| c == '.' || c.is_ascii_digit()) {
            return Err(fail("expected a number"));
        }

        let (whole, after_whole) = split_digits(rest);
        let mut value = leading_int(whole).ok_or_else(|| fail("value out of range"))?;
        rest = after_whole;

        let mut fraction = 0;
        let mut scale = 1.0;
        let mut has_fraction = false;
        if let Some(after_dot) = rest.strip_prefix('.') {
            let (digits, after_digits) = split_digits(after_dot);
            (fraction, scale) = leading_fraction(digits);
            has_fraction = !digits.is_empty();
            rest = after_digits;
        }
        if whole.is_empty() && !has_fraction {
            return Err(fail("expected a number"));
        }

        let unit_end = rest
            .find(|c: char| c == '.' || c.is_ascii_digit())
            .unwrap_or(rest.len());
        let (unit, after_unit) = rest.split_at(unit_end);
        if unit.is_empty() {
            return Err(fail("missing unit"));
        }
        let unit_nanos = unit_nanos(unit).ok_or_else(|| {
            Error::parse("duration", input, format!("unknown unit {:?}", unit))
        })?;
        rest = after_unit;

        if value > MAX_MAGNITUDE / unit_nanos {
            return Err(fail("value out of range"));
        }
        value *= unit_nanos;
        if fraction > 0 {
            value += (fraction as f64 * (unit_nanos as f64 / scale)) as u64;
            if value > MAX_MAGNITUDE {
                return Err(fail("value out of range"));
            }
        }

        total = total
            .checked_add(value)
            .filter(|t| *t <= MAX_MAGNITUDE)
            .ok_or_else(|| fail("value out of range"))?;
    }

    let signed = if negative {
        -(total as i128)
    } else {
        total as i128
    };
    let nanos = i64::try_from(signed).map_err(|_| fail("value out of range"))?;

    Ok(Duration::nanoseconds(nanos))
}

/// Duration as fractional hours
pub fn hours(duration: Duration) -> f64 {
    fractional_units(duration, NANOS_PER_HOUR)
}

/// Duration as fractional minutes
pub fn minutes(duration: Duration) -> f64 {
    fractional_units(duration, NANOS_PER_MINUTE)
}

fn fractional_units(duration: Duration, unit_nanos: u64) -> f64 {
    let nanos = duration.num_nanoseconds().unwrap_or(if duration < Duration::zero() {
        i64::MIN
    } else {
        i64::MAX
    });
    let unit = unit_nanos as i64;
    (nanos / unit) as f64 + (nanos % unit) as f64 / unit as f64
}

fn unit_nanos(unit: &str) -> Option<u64> {
    match unit {
        "ns" => Some(1),
        "us" | "\u{b5}s" | "\u{3bc}s" => Some(NANOS_PER_MICRO),
        "ms" => Some(NANOS_PER_MILLI),
        "s" => Some(NANOS_PER_SECOND),
        "m" => Some(NANOS_PER_MINUTE),
        "h" => Some(NANOS_PER_HOUR),
        _ => None,
    }
}

fn split_digits(s: &str) -> (&str, &str) {
    let end = s.find(|c: char| !c.is_ascii_digit()).unwrap_or(s.len());
    s.split_at(end)
}

/// Integer value of a digit run; `None` once it exceeds `MAX_MAGNITUDE`
fn leading_int(digits: &str) -> Option<u64> {
    digits.bytes().try_fold(0u64, |acc, b| {
        acc.checked_mul(10)
            .and_then(|acc| acc.checked_add(u64::from(b - b'0')))
            .filter(|acc| *acc <= MAX_MAGNITUDE)
    })
}

/// Fraction digits as `(numerator, scale)`; digits past the representable
/// precision are dropped rather than rejected.
fn leading_fraction(digits: &str) -> (u64, f64) {
    let mut value: u64 = 0;
    let mut scale = 1.0;
    for b in digits.bytes() {
        let next = value
            .checked_mul(10)
            .and_then(|v| v.checked_add(u64::from(b - b'0')))
            .filter(|v| *v <= MAX_MAGNITUDE);
        match next {
            Some(v) => {
                value = v;
                scale *= 10.0;
            }
            None => break,
        }
    }
    (value, scale)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compound_units() {
        assert_eq!(parse_duration("3h00m00s").unwrap(), Duration::hours(3));
        assert_eq!(parse_duration("1h30m").unwrap(), Duration::minutes(90));
        assert_eq!(parse_duration("45m").unwrap(), Duration::minutes(45));
        assert_eq!(
            parse_duration("2m3s250ms").unwrap(),
            Duration::milliseconds(123_250)
        );
    }

    #[test]
    fn test_sub_second_units() {
        assert_eq!(parse_duration("1ns").unwrap(), Duration::nanoseconds(1));
        assert_eq!(parse_duration("7us").unwrap(), Duration::microseconds(7));
        assert_eq!(parse_duration("7µs").unwrap(), Duration::microseconds(7));
        assert_eq!(parse_duration("7μs").unwrap(), Duration::microseconds(7));
        assert_eq!(parse_duration("15ms").unwrap(), Duration::milliseconds(15));
    }

    #[test]
    fn test_fractional_values() {
        assert_eq!(parse_duration("1.5h").unwrap(), Duration::minutes(90));
        assert_eq!(parse_duration(".5m").unwrap(), Duration::seconds(30));
        assert_eq!(parse_duration("1.h").unwrap(), Duration::hours(1));
        assert_eq!(parse_duration("0.25s").unwrap(), Duration::milliseconds(250));
    }

    #[test]
    fn test_signs_and_zero() {
        assert_eq!(parse_duration("0").unwrap(), Duration::zero());
        assert_eq!(parse_duration("-0").unwrap(), Duration::zero());
        assert_eq!(parse_duration("0h").unwrap(), Duration::zero());
        assert_eq!(parse_duration("+2s").unwrap(), Duration::seconds(2));
        assert_eq!(parse_duration("-1h30m").unwrap(), Duration::minutes(-90));
    }

    #[test]
    fn test_rejects_malformed_input() {
        for input in ["", "-", "+", "3", "h", ".h", "1x", "1h 30m", "1e3s", "abc", "1h-5m"] {
            let err = parse_duration(input).unwrap_err();
            assert!(
                matches!(err, Error::Parse { field: "duration", .. }),
                "{input:?} gave {err:?}"
            );
        }
    }

    #[test]
    fn test_range_limits() {
        assert_eq!(
            parse_duration("9223372036854775807ns").unwrap(),
            Duration::nanoseconds(i64::MAX)
        );
        assert_eq!(
            parse_duration("-9223372036854775808ns").unwrap(),
            Duration::nanoseconds(i64::MIN)
        );
        assert!(parse_duration("9223372036854775808ns").is_err());
        assert!(parse_duration("3000000h").is_err());
        assert!(parse_duration("99999999999999999999s").is_err());
    }

    #[test]
    fn test_fractional_hours_and_minutes() {
        let d = parse_duration("1h45m").unwrap();
        assert!((hours(d) - 1.75).abs() < 1e-12);
        assert!((minutes(d) - 105.0).abs() < 1e-12);

        let tiny = parse_duration("1ns").unwrap();
        assert!(hours(tiny) > 0.0);
        assert!(hours(tiny) < 1e-12);
    }
}
