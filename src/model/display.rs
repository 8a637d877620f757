// File: ./src/model/display.rs
use crate::model::schedule::{TimeInterval, Weekday, WeekSchedule};
use strum::IntoEnumIterator;

/// One templatable row of an opening-hours table. `hours` is `None` for a
/// day with nothing open.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayRow {
    pub day: String,
    pub hours: Option<String>,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct HumanizeOptions {
    pub short_day_names: bool,
}

pub trait ScheduleDisplay {
    /// One row per weekday, Sunday through Saturday.
    fn humanize(&self, options: &HumanizeOptions) -> Vec<DayRow>;

    /// Merges first, then groups consecutive open weekdays sharing the same
    /// intervals into a single row ("Mon - Fri: 09:00 - 17:00"). Closed
    /// days break runs and get no row; a run covering the whole week
    /// renders as "Every day".
    fn humanize_condensed(&self, options: &HumanizeOptions) -> Vec<DayRow>;
}

fn day_label(day: Weekday, options: &HumanizeOptions) -> &'static str {
    if options.short_day_names {
        day.short_name()
    } else {
        day.long_name()
    }
}

// 900 -> "09:00", 1730 -> "17:30"; the full-day sentinel gets its label.
fn humanize_interval(interval: TimeInterval) -> String {
    if interval.is_full_day() {
        return "24 Hours".to_string();
    }
    format!(
        "{:02}:{:02} - {:02}:{:02}",
        interval.start / 100,
        interval.start % 100,
        interval.end / 100,
        interval.end % 100
    )
}

fn humanize_intervals(intervals: &[TimeInterval]) -> String {
    intervals
        .iter()
        .map(|iv| humanize_interval(*iv))
        .collect::<Vec<_>>()
        .join(", ")
}

impl ScheduleDisplay for WeekSchedule {
    fn humanize(&self, options: &HumanizeOptions) -> Vec<DayRow> {
        Weekday::iter()
            .map(|day| {
                let intervals = self.intervals(day);
                DayRow {
                    day: day_label(day, options).to_string(),
                    hours: if intervals.is_empty() {
                        None
                    } else {
                        Some(humanize_intervals(intervals))
                    },
                }
            })
            .collect()
    }

    fn humanize_condensed(&self, options: &HumanizeOptions) -> Vec<DayRow> {
        struct Run<'a> {
            first: Weekday,
            last: Weekday,
            intervals: &'a [TimeInterval],
        }

        fn flush(run: Option<Run<'_>>, options: &HumanizeOptions, rows: &mut Vec<DayRow>) {
            let Some(run) = run else {
                return;
            };
            let day = if run.first == run.last {
                day_label(run.first, options).to_string()
            } else if run.first == Weekday::Sunday && run.last == Weekday::Saturday {
                "Every day".to_string()
            } else {
                format!(
                    "{} - {}",
                    day_label(run.first, options),
                    day_label(run.last, options)
                )
            };
            rows.push(DayRow {
                day,
                hours: Some(humanize_intervals(run.intervals)),
            });
        }

        let merged = self.merge();
        let mut rows = Vec::new();
        let mut current: Option<Run<'_>> = None;

        for day in Weekday::iter() {
            let intervals = merged.intervals(day);
            if intervals.is_empty() {
                flush(current.take(), options, &mut rows);
                continue;
            }
            match current.as_mut() {
                Some(run) if run.intervals == intervals => run.last = day,
                _ => {
                    flush(current.take(), options, &mut rows);
                    current = Some(Run {
                        first: day,
                        last: day,
                        intervals,
                    });
                }
            }
        }
        flush(current, options, &mut rows);

        rows
    }
}
