// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use crate::job::{JobSchedule, TaskWindow};
use crate::replay::{JobRunStatus, RunState};
use crate::schedule::Schedule;
use chrono::{NaiveDate, TimeZone};

fn spec(name: &str) -> JobSpec {
    JobSpec::new(
        name,
        JobSchedule {
            interval: Schedule::parse("@daily").unwrap(),
            start_date: NaiveDate::from_ymd_opt(2020, 4, 5).unwrap(),
        },
        TaskWindow::from_days(1),
    )
}

fn at(d: u32, h: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2020, 8, d, h, 0, 0).unwrap()
}

#[test]
fn new_tree_holds_only_root() {
    let tree = ReplayTree::new(spec("root"));
    assert_eq!(tree.len(), 1);
    assert_eq!(tree.root().name(), "root");
    assert!(tree.contains("root"));
}

#[test]
fn insert_dedupes_by_name() {
    let mut tree = ReplayTree::new(spec("root"));
    let a = tree.insert(spec("a"));
    let again = tree.insert(spec("a"));

    assert_eq!(a, again);
    assert_eq!(tree.len(), 2);
}

#[test]
fn dependents_keep_link_order() {
    let mut tree = ReplayTree::new(spec("root"));
    let a = tree.insert(spec("a"));
    let b = tree.insert(spec("b"));
    tree.link(tree.root_id(), a);
    tree.link(tree.root_id(), b);

    let names: Vec<_> = tree.dependents(tree.root_id()).map(|n| n.name().to_string()).collect();
    assert_eq!(names, vec!["a", "b"]);
}

#[test]
fn relinking_same_edge_is_noop() {
    let mut tree = ReplayTree::new(spec("root"));
    let a = tree.insert(spec("a"));
    tree.link(tree.root_id(), a);
    tree.link(tree.root_id(), a);

    assert_eq!(tree.dependents(tree.root_id()).count(), 1);
}

#[test]
fn diamond_shares_one_node() {
    // root feeds a and b, both feed join
    let mut tree = ReplayTree::new(spec("root"));
    let a = tree.insert(spec("a"));
    let b = tree.insert(spec("b"));
    let join_via_a = tree.insert(spec("join"));
    let join_via_b = tree.insert(spec("join"));
    tree.link(tree.root_id(), a);
    tree.link(tree.root_id(), b);
    tree.link(a, join_via_a);
    tree.link(b, join_via_b);

    assert_eq!(join_via_a, join_via_b);
    assert_eq!(tree.len(), 4);
}

#[test]
fn add_run_accepts_duplicates() {
    let mut tree = ReplayTree::new(spec("root"));
    let root = tree.root_id();
    tree.node_mut(root).add_run(at(5, 2));
    tree.node_mut(root).add_run(at(5, 2));

    assert_eq!(tree.root().runs().len(), 2);
}

#[test]
fn set_statuses_switches_run_form() {
    let mut tree = ReplayTree::new(spec("root"));
    let root = tree.root_id();
    tree.node_mut(root).add_run(at(5, 2));

    let statuses = vec![
        JobRunStatus::new(RunState::Running, at(5, 2)),
        JobRunStatus::new(RunState::Success, at(6, 2)),
    ];
    tree.node_mut(root).set_statuses(statuses.clone());

    assert!(tree.root().runs().as_instants().is_none());
    assert_eq!(tree.root().runs().as_statuses().unwrap(), statuses.as_slice());
}

#[test]
fn nodes_iterate_in_build_order() {
    let mut tree = ReplayTree::new(spec("root"));
    tree.insert(spec("a"));
    tree.insert(spec("b"));

    let names: Vec<_> = tree.nodes().map(|n| n.name().to_string()).collect();
    assert_eq!(names, vec!["root", "a", "b"]);
}
