use openhours::model::{InvalidTimeFormat, Weekday, WeekSchedule};
use openhours::storage;
use std::env;
use std::fs;

#[test]
fn test_canonical_json_shape() {
    let week = WeekSchedule::from_raw([("Sun", "9-18"), ("Mon", "9-12,14-17")]).unwrap();

    assert_eq!(
        storage::to_canonical_json(&week).unwrap(),
        r#"{"0":[[900,1800]],"1":[[900,1200],[1400,1700]]}"#
    );
}

#[test]
fn test_canonical_json_round_trip() {
    let week = WeekSchedule::from_raw([
        ("Sun", "9-18:00"),
        ("Mon", "9-12:00,14:00-17"),
        ("Thu", "24hr"),
    ])
    .unwrap();

    let json = storage::to_canonical_json(&week).unwrap();
    let restored = storage::from_canonical_json(&json).unwrap();
    assert_eq!(restored, week);
}

#[test]
fn test_empty_schedule_serializes_as_null() {
    assert_eq!(
        storage::to_canonical_json(&WeekSchedule::new()).unwrap(),
        "null"
    );

    let restored = storage::from_canonical_json("null").unwrap();
    assert!(restored.is_empty());
}

#[test]
fn test_canonical_json_rejects_garbage() {
    assert!(storage::from_canonical_json("not json").is_err());
    assert!(storage::from_canonical_json(r#"{"7":[[900,1800]]}"#).is_err());
}

#[test]
fn test_parse_raw_week() {
    let week = storage::parse_raw_week(
        r#"
Mon = "9:00-12:00, 14:00-17:00"
Sat = "24hr"
"#,
    )
    .unwrap();

    assert_eq!(week.intervals(Weekday::Monday).len(), 2);
    assert!(week.intervals(Weekday::Saturday)[0].is_full_day());
}

#[test]
fn test_raw_week_surfaces_offending_string() {
    let err = storage::parse_raw_week("Mon = \"nope\"\n").expect_err("bad range string");
    let inner = err
        .downcast_ref::<InvalidTimeFormat>()
        .expect("should carry the domain error");
    assert_eq!(inner.input, "nope");
}

#[test]
fn test_file_round_trip() {
    let week = WeekSchedule::from_raw([("Sun", "9-18"), ("Wed", "10-12,13-16")]).unwrap();
    let path = env::temp_dir().join(format!("openhours-roundtrip-{}.json", std::process::id()));

    storage::save(&path, &week).unwrap();
    let restored = storage::load(&path).unwrap();
    fs::remove_file(&path).ok();

    assert_eq!(restored, week);
}
