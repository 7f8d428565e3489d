// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use crate::builder::build_tree;
use crate::error::ReplayError;
use crate::expander::expand;
use crate::test_support::{at, day, fixture_catalog, FakeScheduler};
use chrono::Utc;
use hc_core::{DateRange, JobRunStatus, ReplayStatus, RunState};
use uuid::Uuid;

fn planned_tree() -> ReplayTree {
    let mut tree = build_tree("dag1", &fixture_catalog()).unwrap();
    expand(&mut tree, &DateRange::new(day(5), day(7)));
    tree
}

fn replay() -> ReplayRecord {
    ReplayRecord {
        id: Uuid::new_v4(),
        project_name: "proj".to_string(),
        root_job_name: "dag1".to_string(),
        start_date: day(5),
        end_date: day(7),
        status: ReplayStatus::InProgress,
        created_at: Utc::now(),
    }
}

#[tokio::test]
async fn every_node_is_converted_to_status_form() {
    let mut tree = planned_tree();
    let scheduler = FakeScheduler::new()
        .with_statuses("dag1", vec![JobRunStatus::new(RunState::Success, at(5, 2))]);

    annotate(&mut tree, &scheduler, &replay(), &CancellationToken::new()).await.unwrap();

    for node in tree.nodes() {
        assert!(node.runs().as_statuses().is_some(), "{} kept planned runs", node.name());
    }
    assert_eq!(tree.root().runs().len(), 1);
    assert_eq!(scheduler.calls(), vec!["dag1", "dag2", "dag3"]);
}

#[tokio::test]
async fn first_failure_stops_the_walk() {
    let mut tree = planned_tree();
    let scheduler = FakeScheduler::new().failing_for("dag2", "scheduler is down");

    let err = annotate(&mut tree, &scheduler, &replay(), &CancellationToken::new())
        .await
        .unwrap_err();

    assert!(matches!(err, ReplayError::RunStatus(_)));
    assert_eq!(err.to_string(), "scheduler is down");
    assert_eq!(scheduler.calls(), vec!["dag1", "dag2"]);
}

#[tokio::test]
async fn cancelled_token_aborts_before_any_call() {
    let mut tree = planned_tree();
    let scheduler = FakeScheduler::new();
    let token = CancellationToken::new();
    token.cancel();

    let err = annotate(&mut tree, &scheduler, &replay(), &token).await.unwrap_err();

    assert!(matches!(err, ReplayError::Aborted));
    assert!(scheduler.calls().is_empty());
}
