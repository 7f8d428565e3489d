// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use chrono::TimeZone;

fn day(d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2020, 8, d).unwrap()
}

#[test]
fn date_range_instant_bounds() {
    let range = DateRange::new(day(5), day(7));
    assert_eq!(range.begin(), Utc.with_ymd_and_hms(2020, 8, 5, 0, 0, 0).unwrap());
    assert_eq!(range.end_exclusive(), Utc.with_ymd_and_hms(2020, 8, 8, 0, 0, 0).unwrap());
}

#[test]
fn date_range_single_day_covers_whole_day() {
    let range = DateRange::new(day(5), day(5));
    assert!(!range.is_inverted());
    assert_eq!(range.end_exclusive() - range.begin(), chrono::Duration::days(1));
}

#[test]
fn inverted_range_is_flagged() {
    assert!(DateRange::new(day(7), day(5)).is_inverted());
    assert!(!DateRange::new(day(5), day(5)).is_inverted());
}

#[test]
fn date_range_display() {
    assert_eq!(DateRange::new(day(5), day(7)).to_string(), "[2020-08-05, 2020-08-07]");
}

#[test]
fn replay_status_wire_strings() {
    let cases = [
        (ReplayStatus::Accepted, "\"accepted\""),
        (ReplayStatus::Replayed, "\"replayed\""),
        (ReplayStatus::InProgress, "\"in-progress\""),
        (ReplayStatus::Succeeded, "\"succeeded\""),
        (ReplayStatus::Failed, "\"failed\""),
        (ReplayStatus::Invalid, "\"invalid\""),
    ];
    for (status, json) in cases {
        assert_eq!(serde_json::to_string(&status).unwrap(), json);
        let back: ReplayStatus = serde_json::from_str(json).unwrap();
        assert_eq!(back, status);
        assert_eq!(format!("\"{status}\""), json);
    }
}

#[test]
fn run_state_wire_strings() {
    let cases = [
        (RunState::Pending, "\"pending\""),
        (RunState::Running, "\"running\""),
        (RunState::Success, "\"success\""),
        (RunState::Failed, "\"failed\""),
        (RunState::Retry, "\"retry\""),
        (RunState::Skipped, "\"skipped\""),
    ];
    for (state, json) in cases {
        assert_eq!(serde_json::to_string(&state).unwrap(), json);
        let back: RunState = serde_json::from_str(json).unwrap();
        assert_eq!(back, state);
        assert_eq!(format!("\"{state}\""), json);
    }
}

#[test]
fn record_serde_roundtrip() {
    let record = ReplayRecord {
        id: uuid::Uuid::new_v4(),
        project_name: "proj".to_string(),
        root_job_name: "dag1".to_string(),
        start_date: day(5),
        end_date: day(7),
        status: ReplayStatus::Accepted,
        created_at: Utc.with_ymd_and_hms(2020, 8, 5, 12, 0, 0).unwrap(),
    };

    let json = serde_json::to_string(&record).unwrap();
    let back: ReplayRecord = serde_json::from_str(&json).unwrap();

    assert_eq!(back.id, record.id);
    assert_eq!(back.status, ReplayStatus::Accepted);
    assert_eq!(back.range(), DateRange::new(day(5), day(7)));
}

#[test]
fn request_carries_spec_hint() {
    let spec = JobSpec::new(
        "dag1",
        crate::job::JobSchedule {
            interval: crate::schedule::Schedule::parse("@daily").unwrap(),
            start_date: day(1),
        },
        crate::job::TaskWindow::from_days(1),
    );
    let request = ReplayRequest::new(ProjectSpec::new("proj"), "dag1", DateRange::new(day(5), day(7)))
        .job_specs(HashMap::from([(spec.name.clone(), spec)]));

    assert_eq!(request.job_name, "dag1");
    assert!(request.job_specs.contains_key("dag1"));
}
