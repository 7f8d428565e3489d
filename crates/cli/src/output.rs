// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Terminal rendering of a replay tree.

use chrono::SecondsFormat;
use hc_core::{NodeId, ReplayTree, RunSet};
use std::collections::HashSet;
use std::fmt::Write;

/// Render the tree depth-first, runs under each job, dependents
/// indented one level. A diamond join is printed in full once and
/// referenced after that.
pub fn render_plan(tree: &ReplayTree) -> String {
    let mut out = String::new();
    let mut seen = HashSet::new();
    render_node(tree, tree.root_id(), 0, &mut seen, &mut out);
    out
}

fn render_node(
    tree: &ReplayTree,
    id: NodeId,
    depth: usize,
    seen: &mut HashSet<NodeId>,
    out: &mut String,
) {
    let node = tree.node(id);
    let pad = "  ".repeat(depth);
    if !seen.insert(id) {
        let _ = writeln!(out, "{pad}{} (shown above)", node.name());
        return;
    }

    let _ = writeln!(out, "{pad}{}: {} run(s)", node.name(), node.runs().len());
    match node.runs() {
        RunSet::Instants(instants) => {
            for at in instants {
                let _ = writeln!(out, "{pad}    {}", at.to_rfc3339_opts(SecondsFormat::Secs, true));
            }
        }
        RunSet::Statuses(statuses) => {
            for status in statuses {
                let _ = writeln!(
                    out,
                    "{pad}    {} {}",
                    status.scheduled_at.to_rfc3339_opts(SecondsFormat::Secs, true),
                    status.state
                );
            }
        }
    }

    for dep in tree.dependent_ids(id).collect::<Vec<_>>() {
        render_node(tree, dep, depth + 1, seen, out);
    }
}

#[cfg(test)]
#[path = "output_tests.rs"]
mod tests;
