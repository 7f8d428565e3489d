// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Run-instance expansion.
//!
//! Projects the replay interval on the root through the sub-DAG. The
//! root reruns every cron fire inside the interval. A dependent `D`
//! with task window `W` consumes upstream data covering `[d - W, d)`
//! for each of its fires `d`, so an upstream instant `u` being replayed
//! forces every `D`-fire in `[u, u + W)`. Upstreams outside the sub-DAG
//! are untouched by the replay and induce nothing.

use chrono::{DateTime, Utc};
use hc_core::{DateRange, ReplayTree};
use std::collections::{BTreeSet, HashMap};

/// Fill each node's planned run instants.
///
/// Visits nodes in the tree's build order, which places every in-tree
/// upstream before its dependents, so each node is expanded exactly once
/// from fully-expanded upstream sets. Per node, runs come out strictly
/// ascending with duplicates across upstream windows eliminated.
pub fn expand(tree: &mut ReplayTree, range: &DateRange) {
    let mut expanded: HashMap<String, BTreeSet<DateTime<Utc>>> = HashMap::with_capacity(tree.len());

    for (pos, node) in tree.nodes().enumerate() {
        let spec = node.spec();
        let schedule = &spec.schedule;
        let mut runs = BTreeSet::new();

        if pos == 0 {
            runs.extend(schedule.interval.fires_within(
                schedule.start_date,
                range.begin(),
                range.end_exclusive(),
            ));
        } else if !spec.window.is_zero() {
            let window = spec.window.as_chrono();
            for upstream in spec.intra_upstreams() {
                let Some(upstream_runs) = expanded.get(upstream) else {
                    continue;
                };
                for &u in upstream_runs {
                    let until = u.checked_add_signed(window).unwrap_or(DateTime::<Utc>::MAX_UTC);
                    runs.extend(schedule.interval.fires_within(schedule.start_date, u, until));
                }
            }
        }

        expanded.insert(spec.name.clone(), runs);
    }

    for id in tree.ids() {
        let Some(runs) = expanded.remove(tree.node(id).name()) else {
            continue;
        };
        let node = tree.node_mut(id);
        for at in runs {
            node.add_run(at);
        }
    }
}

#[cfg(test)]
#[path = "expander_tests.rs"]
mod tests;
