use openhours::model::{TimeInterval, Weekday, WeekSchedule};

fn iv(start: u16, end: u16) -> TimeInterval {
    TimeInterval::new(start, end)
}

fn full_week() -> WeekSchedule {
    WeekSchedule::from_raw([
        ("Sun", "9-18:00"),
        ("Mon", "9-12:00,14:00-17"),
        ("Tue", "9:00-18:00"),
        ("Wed", "9-18"),
        ("Thu", "00:00-23:59"),
        ("Fri", "9:00-18:00"),
        ("Sat", "9:00-11:00,14-17:30"),
    ])
    .expect("week should parse")
}

#[test]
fn test_converts_text_times_to_offsets() {
    let week = full_week();

    assert_eq!(week.intervals(Weekday::Sunday), [iv(900, 1800)]);
    assert_eq!(
        week.intervals(Weekday::Monday),
        [iv(900, 1200), iv(1400, 1700)]
    );
    assert_eq!(week.intervals(Weekday::Tuesday), [iv(900, 1800)]);
    assert_eq!(week.intervals(Weekday::Wednesday), [iv(900, 1800)]);
    assert_eq!(week.intervals(Weekday::Thursday), [iv(0, 2359)]);
    assert_eq!(week.intervals(Weekday::Friday), [iv(900, 1800)]);
    assert_eq!(
        week.intervals(Weekday::Saturday),
        [iv(900, 1100), iv(1400, 1730)]
    );
}

#[test]
fn test_rejects_garbage() {
    let mut week = full_week();

    for spec in ["", "4pm", "abcd", "9PM-10PMgarbage"] {
        let err = week
            .add_day(Weekday::Monday, spec)
            .expect_err("garbage should be rejected");
        assert!(
            err.to_string().starts_with("Invalid time string:"),
            "unexpected message: {}",
            err
        );
    }
}

#[test]
fn test_rejects_bad_intervals() {
    let mut week = full_week();

    for spec in ["9-9", "9:30-1:30", "12:00-00:00", "12:00-50", "12:00-50:00"] {
        assert!(
            week.add_day(Weekday::Monday, spec).is_err(),
            "{:?} should be rejected",
            spec
        );
    }

    for spec in ["4:30-12:00", "9:30-12:00", "12:00-23:59"] {
        assert!(
            week.add_day(Weekday::Monday, spec).is_ok(),
            "{:?} should be accepted",
            spec
        );
    }
}

#[test]
fn test_validation_error_carries_offending_string() {
    let mut week = WeekSchedule::new();

    let err = week.add_day(Weekday::Monday, "9-9").expect_err("degenerate range");
    assert_eq!(err.input, "9-9");

    // A malformed time half is attributed to that half.
    let err = week.add_day(Weekday::Monday, "12:00-50").expect_err("bad close time");
    assert_eq!(err.input, "50");
}

#[test]
fn test_allows_spaces() {
    let mut week = WeekSchedule::new();

    for spec in [
        "9-10, 11-12",
        "9 -10 , 11 -12 ",
        "9:00  - 12:00 , 14:00  - 17:00 ",
    ] {
        assert!(
            week.add_day(Weekday::Monday, spec).is_ok(),
            "{:?} should be accepted",
            spec
        );
    }

    week.add_day(Weekday::Monday, "9 -10 , 11 -12 ").unwrap();
    assert_eq!(
        week.intervals(Weekday::Monday),
        [iv(900, 1000), iv(1100, 1200)]
    );
}

#[test]
fn test_24_hour_variants() {
    let mut week = WeekSchedule::new();

    for spec in ["24hr", "24 hours", "24 HOURS", "24"] {
        week.add_day(Weekday::Monday, spec)
            .unwrap_or_else(|e| panic!("{:?} should be accepted: {}", spec, e));
        assert_eq!(week.intervals(Weekday::Monday), [TimeInterval::FULL_DAY]);
    }
}

#[test]
fn test_add_day_replaces_previous_intervals() {
    let mut week = WeekSchedule::new();

    week.add_day(Weekday::Sunday, "9:12-18").unwrap();
    week.add_day(Weekday::Wednesday, "9:34-18").unwrap();
    week.add_day(Weekday::Friday, "9-18:30").unwrap();
    assert_eq!(week.intervals(Weekday::Sunday), [iv(912, 1800)]);
    assert_eq!(week.intervals(Weekday::Wednesday), [iv(934, 1800)]);
    assert_eq!(week.intervals(Weekday::Friday), [iv(900, 1830)]);

    week.add_day(Weekday::Sunday, "10-11").unwrap();
    assert_eq!(week.intervals(Weekday::Sunday), [iv(1000, 1100)]);
}

#[test]
fn test_add_day_failure_leaves_day_untouched() {
    let mut week = WeekSchedule::new();
    week.add_day(Weekday::Monday, "9-12").unwrap();

    assert!(week.add_day(Weekday::Monday, "9-9").is_err());
    assert_eq!(week.intervals(Weekday::Monday), [iv(900, 1200)]);
}

#[test]
fn test_from_raw_fails_on_first_bad_entry() {
    let err = WeekSchedule::from_raw([("Mon", "9-17"), ("Tue", "nope")])
        .expect_err("bad entry should fail the whole construction");
    assert_eq!(err.input, "nope");
}

#[test]
fn test_from_raw_rejects_unknown_day_names() {
    let err = WeekSchedule::from_raw([("Funday", "9-17")]).expect_err("unknown day name");
    assert_eq!(err.input, "Funday");
}

#[test]
fn test_from_raw_accepts_long_and_mixed_case_day_names() {
    let week = WeekSchedule::from_raw([("Sunday", "9-17"), ("MON", "10-16")]).unwrap();
    assert_eq!(week.intervals(Weekday::Sunday), [iv(900, 1700)]);
    assert_eq!(week.intervals(Weekday::Monday), [iv(1000, 1600)]);
}
