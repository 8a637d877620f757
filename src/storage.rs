// Canonical wire/persistence format for weekly hours, plus raw week files
// from the editing flow.
//
// The canonical payload is the only bit-exact contract with backing stores:
// a JSON object keyed by weekday index ("0" = Sunday .. "6" = Saturday)
// whose values are arrays of [start, end] HHMM pairs. An empty schedule
// serializes as `null`.
use crate::model::{TimeInterval, Weekday, WeekSchedule};
use anyhow::{Context, Result};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

pub fn to_canonical_json(schedule: &WeekSchedule) -> Result<String> {
    let payload = if schedule.is_empty() {
        None
    } else {
        Some(schedule)
    };
    serde_json::to_string(&payload).context("Failed to serialize hours")
}

pub fn from_canonical_json(raw: &str) -> Result<WeekSchedule> {
    let days: Option<BTreeMap<Weekday, Vec<TimeInterval>>> =
        serde_json::from_str(raw).context("Malformed canonical hours payload")?;
    Ok(WeekSchedule::from_canonical(days.unwrap_or_default()))
}

pub fn load(path: &Path) -> Result<WeekSchedule> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("Failed to read hours file {}", path.display()))?;
    let schedule = from_canonical_json(&raw)
        .with_context(|| format!("Failed to parse hours file {}", path.display()))?;
    log::debug!(
        "Loaded hours for {} day(s) from {}",
        schedule.days().len(),
        path.display()
    );
    Ok(schedule)
}

pub fn save(path: &Path, schedule: &WeekSchedule) -> Result<()> {
    let payload = to_canonical_json(schedule)?;
    fs::write(path, payload)
        .with_context(|| format!("Failed to write hours file {}", path.display()))
}

/// Parses a raw week as entered in editing flows: a TOML table of
/// `DayName = "range string"` lines, e.g.
///
///   Mon = "9:00-12:00, 14:00-17:00"
///   Sat = "24hr"
pub fn parse_raw_week(raw: &str) -> Result<WeekSchedule> {
    let entries: BTreeMap<String, String> = toml::from_str(raw).context("Malformed week file")?;
    let schedule = WeekSchedule::from_raw(&entries)?;
    Ok(schedule)
}

pub fn load_raw_week(path: &Path) -> Result<WeekSchedule> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("Failed to read week file {}", path.display()))?;
    parse_raw_week(&raw)
}
