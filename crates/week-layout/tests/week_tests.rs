//! Tests for day grouping and the full week layout pass.

use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use week_layout::event::{parse_events_json, CalendarEvent};
use week_layout::time::{end_of_day, start_of_day};
use week_layout::{
    group_by_day, layout_days, layout_week, pack_day_column, split_all, LayoutConfig, LayoutError,
};

fn at(day: u32, hour: u32, min: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, day, hour, min, 0).unwrap()
}

fn date(day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, day).unwrap()
}

fn event(id: &str, start: DateTime<Utc>, end: DateTime<Utc>) -> CalendarEvent {
    CalendarEvent {
        id: id.to_string(),
        start,
        end,
        payload: (),
    }
}

#[test]
fn group_by_day_buckets_fragments_by_start_date() {
    let fragments = split_all(vec![
        event("a", at(1, 9, 0), at(1, 10, 0)),
        event("overnight", at(1, 22, 0), at(2, 2, 0)),
        event("b", at(2, 8, 0), at(2, 9, 0)),
    ]);

    let days = group_by_day(fragments);

    let ids = |d: u32| -> Vec<String> { days[&date(d)].iter().map(|e| e.id.clone()).collect() };
    assert_eq!(days.len(), 2);
    assert_eq!(ids(1), ["a", "overnight"]);
    assert_eq!(ids(2), ["overnight", "b"]);
}

#[test]
fn week_layout_always_has_seven_columns() {
    let columns = layout_week(
        vec![event("a", at(3, 9, 0), at(3, 10, 0))],
        date(1),
        &LayoutConfig::default(),
    );

    assert_eq!(columns.len(), 7);
    assert_eq!(columns[0].date, date(1));
    assert_eq!(columns[6].date, date(7));
    assert_eq!(columns[2].events.len(), 1);
    let empty = columns.iter().filter(|c| c.events.is_empty()).count();
    assert_eq!(empty, 6);
}

#[test]
fn overnight_event_appears_in_both_columns() {
    let config = LayoutConfig::with_pixels_per_hour(10.0).unwrap();
    let columns = layout_days(
        vec![event("night", at(1, 22, 0), at(2, 2, 0))],
        date(1),
        2,
        &config,
    );

    let first = &columns[0].events[0];
    let second = &columns[1].events[0];
    assert_eq!(first.id, "night");
    assert_eq!(second.id, "night");
    assert_eq!(first.top, 220.0);
    assert_eq!(second.top, 0.0);
    assert_eq!(second.height, 20.0);
}

#[test]
fn fragments_outside_the_range_are_dropped() {
    // Runs from the last day of the range into the next one.
    let columns = layout_days(
        vec![
            event("edge", at(3, 20, 0), at(4, 3, 0)),
            event("before", at(1, 9, 0), at(1, 10, 0)),
        ],
        date(2),
        2,
        &LayoutConfig::default(),
    );

    assert_eq!(columns.len(), 2);
    assert!(columns[0].events.is_empty());
    assert_eq!(columns[1].events.len(), 1);
    assert_eq!(columns[1].events[0].id, "edge");
}

#[test]
fn millennia_long_event_only_fills_visible_days() {
    let start = Utc.with_ymd_and_hms(1000, 1, 1, 0, 0, 0).unwrap();
    let end = Utc.with_ymd_and_hms(9000, 1, 1, 0, 0, 0).unwrap();
    let events = vec![CalendarEvent {
        id: "forever".to_string(),
        start,
        end,
        payload: "x".repeat(256),
    }];

    let columns = layout_week(events, date(1), &LayoutConfig::default());

    assert_eq!(columns.len(), 7);
    for column in &columns {
        assert_eq!(column.events.len(), 1);
        let fragment = &column.events[0].original_event;
        assert_eq!(fragment.start, start_of_day(column.date));
        assert_eq!(fragment.end, end_of_day(column.date));
        assert_eq!(column.events[0].top, 0.0);
    }
}

#[test]
fn clamping_matches_splitting_the_whole_event() {
    // Starts mid-December, ends mid-February; the visible range is 2024-01-01..07.
    let long = event(
        "term",
        Utc.with_ymd_and_hms(2023, 12, 14, 13, 30, 0).unwrap(),
        Utc.with_ymd_and_hms(2024, 2, 15, 8, 0, 0).unwrap(),
    );
    let short = event("class", at(3, 9, 0), at(3, 10, 0));
    let config = LayoutConfig::default();

    let columns = layout_week(vec![long.clone(), short.clone()], date(1), &config);

    let mut by_day = group_by_day(split_all(vec![long, short]));
    for column in &columns {
        let fragments = by_day.remove(&column.date).unwrap_or_default();
        assert_eq!(
            column.events,
            pack_day_column(&fragments, config.pixels_per_hour),
            "column {}",
            column.date
        );
    }
}

#[test]
fn zero_day_range_is_empty() {
    let columns = layout_days(
        vec![event("a", at(1, 9, 0), at(1, 10, 0))],
        date(1),
        0,
        &LayoutConfig::default(),
    );
    assert!(columns.is_empty());
}

#[test]
fn json_events_keep_extra_fields_through_layout() {
    let json = r##"[
        {"id":"math","startTime":"2024-01-01T09:00:00Z","endTime":"2024-01-01T10:00:00Z","name":"Algebra","color":"#ff0000"},
        {"id":"lab","startTime":"2024-01-01T09:30","endTime":"2024-01-01T10:30","location":"Room 4"}
    ]"##;
    let events = parse_events_json(json).unwrap();

    let columns = layout_week(events, date(1), &LayoutConfig::default());

    let math = columns[0].events.iter().find(|p| p.id == "math").unwrap();
    assert_eq!(math.original_event.payload["name"], "Algebra");
    assert_eq!(math.width, 50.0);

    let out = serde_json::to_value(&columns[0]).unwrap();
    let first = &out["events"][0];
    assert_eq!(first["zIndex"], 1);
    assert!(first["originalEvent"]["startTime"].is_string());
}

#[test]
fn parse_events_json_rejects_inverted_range() {
    let json = r#"[{"id":"x","startTime":"2024-01-01T10:00:00Z","endTime":"2024-01-01T09:00:00Z"}]"#;

    let err = parse_events_json(json).unwrap_err();

    assert!(matches!(err, LayoutError::InvertedRange { ref id } if id == "x"));
}

#[test]
fn parse_events_json_rejects_bad_instant() {
    let json = r#"[{"id":"x","startTime":"next tuesday","endTime":"2024-01-01T09:00:00Z"}]"#;

    let err = parse_events_json(json).unwrap_err();

    assert!(matches!(err, LayoutError::Json(_)));
    assert!(err.to_string().contains("next tuesday"));
}
