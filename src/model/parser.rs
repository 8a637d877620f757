// File: ./src/model/parser.rs
use crate::model::schedule::{TimeInterval, Weekday};
use std::fmt;

/// Rejection of a human-entered schedule string. Carries the offending
/// input verbatim so editing flows can show the user what was wrong.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidTimeFormat {
    pub input: String,
}

impl InvalidTimeFormat {
    pub(crate) fn new(input: impl Into<String>) -> Self {
        Self {
            input: input.into(),
        }
    }
}

impl fmt::Display for InvalidTimeFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Invalid time string: {}", self.input)
    }
}

impl std::error::Error for InvalidTimeFormat {}

/// Parses a time of day shaped `H`, `HH`, `H:MM` or `HH:MM` (hour 0-23,
/// minute exactly two digits 00-59) into an HHMM offset.
fn parse_time(s: &str) -> Result<u16, InvalidTimeFormat> {
    let (hour_part, minute_part) = match s.split_once(':') {
        Some((h, m)) => (h, Some(m)),
        None => (s, None),
    };

    let is_digits = |p: &str| !p.is_empty() && p.bytes().all(|b| b.is_ascii_digit());

    if !is_digits(hour_part) || hour_part.len() > 2 {
        return Err(InvalidTimeFormat::new(s));
    }
    let hour: u16 = hour_part.parse().map_err(|_| InvalidTimeFormat::new(s))?;
    if hour > 23 {
        return Err(InvalidTimeFormat::new(s));
    }

    let minute = match minute_part {
        Some(m) => {
            if !is_digits(m) || m.len() != 2 {
                return Err(InvalidTimeFormat::new(s));
            }
            let minute: u16 = m.parse().map_err(|_| InvalidTimeFormat::new(s))?;
            if minute > 59 {
                return Err(InvalidTimeFormat::new(s));
            }
            minute
        }
        None => 0,
    };

    Ok(hour * 100 + minute)
}

/// "24", "24hr", "24 hours", "24 HRS"... (whitespace already stripped).
/// Trailing text after the unit is tolerated.
fn is_full_day_token(token: &str) -> bool {
    let t = token.to_ascii_lowercase();
    t == "24" || t.starts_with("24hr") || t.starts_with("24hour")
}

/// Parses one day's comma-separated list of open ranges into intervals,
/// preserving token order. Ranges never cross midnight: the close time
/// must be strictly after the open time, and a close time of `00:00` is
/// rejected rather than read as "end of day".
pub fn parse_day_spec(spec: &str) -> Result<Vec<TimeInterval>, InvalidTimeFormat> {
    let mut intervals = Vec::new();

    for token in spec.split(',') {
        let token: String = token.chars().filter(|c| !c.is_whitespace()).collect();

        if is_full_day_token(&token) {
            intervals.push(TimeInterval::FULL_DAY);
            continue;
        }

        let mut halves = token.split('-');
        let open = halves.next().unwrap_or_default();
        let close = match halves.next() {
            Some(close) if !close.is_empty() => close,
            _ => return Err(InvalidTimeFormat::new(spec)),
        };

        let start = parse_time(open)?;
        let end = parse_time(close)?;

        if start >= 2400 || end >= 2400 {
            return Err(InvalidTimeFormat::new(spec));
        }
        if start == end && start != 0 {
            return Err(InvalidTimeFormat::new(spec));
        }
        if start >= end && end != 0 {
            return Err(InvalidTimeFormat::new(spec));
        }
        if end == 0 {
            return Err(InvalidTimeFormat::new(spec));
        }

        intervals.push(TimeInterval::new(start, end));
    }

    Ok(intervals)
}

/// Parses a `"DayName,H:MM"` instant into a weekday and HHMM offset.
pub fn parse_instant(instant: &str) -> Result<(Weekday, u16), InvalidTimeFormat> {
    let (day_part, time_part) = instant
        .split_once(',')
        .ok_or_else(|| InvalidTimeFormat::new(instant))?;

    let day =
        Weekday::from_name(day_part).ok_or_else(|| InvalidTimeFormat::new(day_part.trim()))?;
    let offset = parse_time(time_part.trim())?;

    Ok((day, offset))
}
