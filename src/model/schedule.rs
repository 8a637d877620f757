// File: ./src/model/schedule.rs
use crate::model::merge::merge_intervals;
use crate::model::parser::{self, InvalidTimeFormat};
use chrono::{Datelike, Timelike};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use strum::EnumIter;

/// Weekdays in display order. The discriminant is the canonical index used
/// by the wire format (Sunday-based, matching `Date.getDay()` numbering in
/// upstream data sources).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, EnumIter,
)]
#[serde(try_from = "u8", into = "u8")]
pub enum Weekday {
    Sunday = 0,
    Monday = 1,
    Tuesday = 2,
    Wednesday = 3,
    Thursday = 4,
    Friday = 5,
    Saturday = 6,
}

impl Weekday {
    pub fn index(self) -> u8 {
        self as u8
    }

    pub fn from_index(index: u8) -> Option<Self> {
        match index {
            0 => Some(Self::Sunday),
            1 => Some(Self::Monday),
            2 => Some(Self::Tuesday),
            3 => Some(Self::Wednesday),
            4 => Some(Self::Thursday),
            5 => Some(Self::Friday),
            6 => Some(Self::Saturday),
            _ => None,
        }
    }

    pub fn short_name(self) -> &'static str {
        match self {
            Self::Sunday => "Sun",
            Self::Monday => "Mon",
            Self::Tuesday => "Tue",
            Self::Wednesday => "Wed",
            Self::Thursday => "Thu",
            Self::Friday => "Fri",
            Self::Saturday => "Sat",
        }
    }

    pub fn long_name(self) -> &'static str {
        match self {
            Self::Sunday => "Sunday",
            Self::Monday => "Monday",
            Self::Tuesday => "Tuesday",
            Self::Wednesday => "Wednesday",
            Self::Thursday => "Thursday",
            Self::Friday => "Friday",
            Self::Saturday => "Saturday",
        }
    }

    /// Parses a long or three-letter day name, case-insensitively.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "sunday" | "sun" => Some(Self::Sunday),
            "monday" | "mon" => Some(Self::Monday),
            "tuesday" | "tue" => Some(Self::Tuesday),
            "wednesday" | "wed" => Some(Self::Wednesday),
            "thursday" | "thu" => Some(Self::Thursday),
            "friday" | "fri" => Some(Self::Friday),
            "saturday" | "sat" => Some(Self::Saturday),
            _ => None,
        }
    }

    pub fn from_chrono(day: chrono::Weekday) -> Self {
        match day {
            chrono::Weekday::Sun => Self::Sunday,
            chrono::Weekday::Mon => Self::Monday,
            chrono::Weekday::Tue => Self::Tuesday,
            chrono::Weekday::Wed => Self::Wednesday,
            chrono::Weekday::Thu => Self::Thursday,
            chrono::Weekday::Fri => Self::Friday,
            chrono::Weekday::Sat => Self::Saturday,
        }
    }
}

impl From<Weekday> for u8 {
    fn from(day: Weekday) -> Self {
        day.index()
    }
}

impl TryFrom<u8> for Weekday {
    type Error = String;

    fn try_from(index: u8) -> Result<Self, Self::Error> {
        Self::from_index(index).ok_or_else(|| format!("Weekday index out of range: {}", index))
    }
}

/// One contiguous open period within a single day, as a pair of
/// HHMM-as-integer offsets (1700 for 5PM). Serialized as `[start, end]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "(u16, u16)", into = "(u16, u16)")]
pub struct TimeInterval {
    pub start: u16,
    pub end: u16,
}

impl TimeInterval {
    /// The "open 24 hours" sentinel.
    pub const FULL_DAY: Self = Self { start: 0, end: 2359 };

    pub fn new(start: u16, end: u16) -> Self {
        Self { start, end }
    }

    pub fn is_full_day(self) -> bool {
        self == Self::FULL_DAY
    }

    /// Membership is inclusive on both boundaries.
    pub fn contains(self, offset: u16) -> bool {
        self.start <= offset && offset <= self.end
    }
}

impl From<(u16, u16)> for TimeInterval {
    fn from((start, end): (u16, u16)) -> Self {
        Self { start, end }
    }
}

impl From<TimeInterval> for (u16, u16) {
    fn from(interval: TimeInterval) -> Self {
        (interval.start, interval.end)
    }
}

/// A week of opening hours keyed by weekday. A day absent from the map (or
/// mapped to an empty list) is closed all day.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WeekSchedule {
    days: BTreeMap<Weekday, Vec<TimeInterval>>,
}

impl WeekSchedule {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a schedule from human-entered `(day name, range string)`
    /// pairs. The first malformed entry fails the whole construction.
    pub fn from_raw<I, D, S>(entries: I) -> Result<Self, InvalidTimeFormat>
    where
        I: IntoIterator<Item = (D, S)>,
        D: AsRef<str>,
        S: AsRef<str>,
    {
        let mut schedule = Self::new();
        for (name, spec) in entries {
            let day = Weekday::from_name(name.as_ref())
                .ok_or_else(|| InvalidTimeFormat::new(name.as_ref()))?;
            schedule.add_day(day, spec.as_ref())?;
        }
        Ok(schedule)
    }

    /// Trusted constructor for already-canonical data. No validation.
    pub fn from_canonical(days: BTreeMap<Weekday, Vec<TimeInterval>>) -> Self {
        Self { days }
    }

    pub fn days(&self) -> &BTreeMap<Weekday, Vec<TimeInterval>> {
        &self.days
    }

    pub fn intervals(&self, day: Weekday) -> &[TimeInterval] {
        self.days.get(&day).map(Vec::as_slice).unwrap_or_default()
    }

    pub fn is_empty(&self) -> bool {
        self.days.values().all(Vec::is_empty)
    }

    /// Parses `spec` and replaces the given day's intervals. Atomic per
    /// call: on a parse error the schedule is left untouched.
    pub fn add_day(&mut self, day: Weekday, spec: &str) -> Result<(), InvalidTimeFormat> {
        let intervals = parser::parse_day_spec(spec)?;
        self.days.insert(day, intervals);
        Ok(())
    }

    /// Returns a new schedule with every day's intervals unioned into a
    /// disjoint, start-sorted cover. Days left with nothing open are
    /// dropped from the map.
    pub fn merge(&self) -> Self {
        let days = self
            .days
            .iter()
            .map(|(day, intervals)| (*day, merge_intervals(intervals)))
            .filter(|(_, intervals)| !intervals.is_empty())
            .collect();
        Self { days }
    }

    /// Unions any number of schedules day-wise, e.g. to aggregate the hours
    /// of every service offered at one facility.
    pub fn combine<'a, I>(schedules: I) -> Self
    where
        I: IntoIterator<Item = &'a WeekSchedule>,
    {
        let mut days: BTreeMap<Weekday, Vec<TimeInterval>> = BTreeMap::new();
        for schedule in schedules {
            for (day, intervals) in &schedule.days {
                days.entry(*day).or_default().extend(intervals.iter().copied());
            }
        }
        Self { days }.merge()
    }

    /// True iff some interval of `day` covers the HHMM `offset`. Correct on
    /// merged and unmerged data alike.
    pub fn within(&self, day: Weekday, offset: u16) -> bool {
        self.intervals(day).iter().any(|iv| iv.contains(offset))
    }

    /// String form of [`Self::within`], accepting `"DayName,H:MM"`.
    pub fn within_str(&self, instant: &str) -> Result<bool, InvalidTimeFormat> {
        let (day, offset) = parser::parse_instant(instant)?;
        Ok(self.within(day, offset))
    }

    /// Calendar form of [`Self::within`], for "open now" checks.
    pub fn within_at<T: Datelike + Timelike>(&self, instant: &T) -> bool {
        let day = Weekday::from_chrono(instant.weekday());
        let offset = (instant.hour() * 100 + instant.minute()) as u16;
        self.within(day, offset)
    }
}
