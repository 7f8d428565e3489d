// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use crate::test_support::{fixture_catalog, job};
use hc_core::DependencyKind;

fn names(tree: &ReplayTree) -> Vec<String> {
    tree.nodes().map(|n| n.name().to_string()).collect()
}

fn dependent_names(tree: &ReplayTree, name: &str) -> Vec<String> {
    let id = tree.find(name).unwrap();
    tree.dependents(id).map(|n| n.name().to_string()).collect()
}

#[test]
fn chain_builds_downstream_only() {
    let tree = build_tree("dag1", &fixture_catalog()).unwrap();

    assert_eq!(names(&tree), vec!["dag1", "dag2", "dag3"]);
    assert_eq!(dependent_names(&tree, "dag1"), vec!["dag2"]);
    assert_eq!(dependent_names(&tree, "dag2"), vec!["dag3"]);
    assert!(dependent_names(&tree, "dag3").is_empty());
    assert!(!tree.contains("dag4"));
}

#[test]
fn mid_chain_root_excludes_upstreams() {
    let tree = build_tree("dag2", &fixture_catalog()).unwrap();
    assert_eq!(names(&tree), vec!["dag2", "dag3"]);
}

#[test]
fn diamond_shares_a_single_node() {
    let tree = build_tree("dag4", &fixture_catalog()).unwrap();

    assert_eq!(names(&tree), vec!["dag4", "dag5", "dag6"]);
    // dag6 is a dependent of both dag4 and dag5, but appears once
    assert_eq!(dependent_names(&tree, "dag4"), vec!["dag5", "dag6"]);
    assert_eq!(dependent_names(&tree, "dag5"), vec!["dag6"]);
}

#[test]
fn unknown_root_is_rejected() {
    let err = build_tree("invalid-job", &fixture_catalog()).unwrap_err();
    assert_eq!(err.to_string(), "couldn't find any job with name invalid-job");
}

#[test]
fn two_job_cycle_is_detected() {
    let specs = vec![
        job("dag1-deps-on-dag2", "0 2 * * *", 1, &["dag2-deps-on-dag1"]),
        job("dag2-deps-on-dag1", "0 2 * * *", 1, &["dag1-deps-on-dag2"]),
    ];

    let err = build_tree("dag1-deps-on-dag2", &specs).unwrap_err();
    assert!(err.to_string().contains("a cycle dependency encountered in the tree"));
}

#[test]
fn cycle_below_the_root_is_detected() {
    let specs = vec![
        job("root", "@daily", 1, &[]),
        job("a", "@daily", 1, &["root", "b"]),
        job("b", "@daily", 1, &["a"]),
    ];

    let err = build_tree("root", &specs).unwrap_err();
    assert!(err.to_string().contains("a cycle dependency encountered in the tree"));
}

#[test]
fn upstream_outside_catalog_is_ignored() {
    let specs = vec![job("a", "@daily", 1, &["ghost"]), job("b", "@daily", 1, &["a"])];

    let tree = build_tree("a", &specs).unwrap();
    assert_eq!(names(&tree), vec!["a", "b"]);
}

#[test]
fn non_intra_edges_are_not_traversed() {
    let mut downstream = job("b", "@daily", 1, &[]);
    downstream
        .dependencies
        .insert("a".to_string(), hc_core::JobDependency { kind: DependencyKind::Inter });
    let specs = vec![job("a", "@daily", 1, &[]), downstream];

    let tree = build_tree("a", &specs).unwrap();
    assert_eq!(names(&tree), vec!["a"]);
}

#[test]
fn dependents_come_out_in_catalog_order() {
    let specs = vec![
        job("root", "@daily", 1, &[]),
        job("zeta", "@daily", 1, &["root"]),
        job("alpha", "@daily", 1, &["root"]),
    ];

    let tree = build_tree("root", &specs).unwrap();
    // catalog order, not name order
    assert_eq!(dependent_names(&tree, "root"), vec!["zeta", "alpha"]);
}
