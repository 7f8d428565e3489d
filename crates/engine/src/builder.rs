// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Replay tree construction.
//!
//! Specs declare "upstream of me"; the tree's edges run the other way.
//! A reverse index is built once per request by a catalog-order scan, so
//! a node's dependents always come out in catalog order. Cycle detection
//! happens on traversal, never at load time: the catalog storage itself
//! is name-keyed and cannot hold pointers across requests.

use crate::error::ReplayError;
use hc_core::{JobSpec, ReplayTree};
use std::collections::{HashMap, HashSet, VecDeque};

/// Build the replay tree rooted at `root_name` over the resolved catalog.
///
/// The tree contains the root and every job transitively dependent on
/// it, each exactly once (diamond joins share a node), laid out in
/// topological order. Runs are left empty; the expander fills them.
pub fn build_tree(root_name: &str, specs: &[JobSpec]) -> Result<ReplayTree, ReplayError> {
    let by_name: HashMap<&str, &JobSpec> =
        specs.iter().map(|spec| (spec.name.as_str(), spec)).collect();
    let root = by_name
        .get(root_name)
        .copied()
        .ok_or_else(|| ReplayError::JobNotFound(root_name.to_string()))?;

    let dependents = reverse_edges(specs, &by_name);
    check_acyclic(root_name, &dependents)?;
    let order = topo_order(root_name, &by_name, &dependents);

    let mut tree = ReplayTree::new(root.clone());
    let mut ids = HashMap::with_capacity(order.len());
    ids.insert(root_name, tree.root_id());
    for name in order.iter().skip(1) {
        if let Some(spec) = by_name.get(name) {
            ids.insert(*name, tree.insert((*spec).clone()));
        }
    }
    for name in &order {
        let (Some(&from), Some(downstream)) = (ids.get(name), dependents.get(name)) else {
            continue;
        };
        for dep in downstream {
            if let Some(&to) = ids.get(dep) {
                tree.link(from, to);
            }
        }
    }
    Ok(tree)
}

/// Reverse index: upstream name to its dependents, in catalog order.
/// Intra edges only; references to jobs outside the catalog are skipped.
fn reverse_edges<'a>(
    specs: &'a [JobSpec],
    by_name: &HashMap<&'a str, &'a JobSpec>,
) -> HashMap<&'a str, Vec<&'a str>> {
    let mut edges: HashMap<&str, Vec<&str>> = HashMap::new();
    for spec in specs {
        for upstream in spec.intra_upstreams() {
            if let Some(known) = by_name.get(upstream) {
                edges.entry(known.name.as_str()).or_default().push(spec.name.as_str());
            }
        }
    }
    edges
}

enum Mark {
    Active,
    Done,
}

/// Depth-first walk from the root; re-entering a node still on the
/// active path means the closure loops back on itself.
fn check_acyclic<'a>(
    root: &'a str,
    edges: &HashMap<&'a str, Vec<&'a str>>,
) -> Result<(), ReplayError> {
    fn visit<'a>(
        name: &'a str,
        edges: &HashMap<&'a str, Vec<&'a str>>,
        marks: &mut HashMap<&'a str, Mark>,
    ) -> Result<(), ReplayError> {
        match marks.get(name) {
            Some(Mark::Active) => {
                return Err(ReplayError::CyclicDependency { job: name.to_string() })
            }
            Some(Mark::Done) => return Ok(()),
            None => {}
        }
        marks.insert(name, Mark::Active);
        for &dep in edges.get(name).into_iter().flatten() {
            visit(dep, edges, marks)?;
        }
        marks.insert(name, Mark::Done);
        Ok(())
    }

    visit(root, edges, &mut HashMap::new())
}

/// Topological layout of the reachable sub-DAG (Kahn), root first.
/// Counts only in-sub-DAG upstream edges, so jobs whose other upstreams
/// sit outside the closure still get placed.
fn topo_order<'a>(
    root: &'a str,
    by_name: &HashMap<&'a str, &'a JobSpec>,
    edges: &HashMap<&'a str, Vec<&'a str>>,
) -> Vec<&'a str> {
    let mut reachable = HashSet::from([root]);
    let mut pending = VecDeque::from([root]);
    while let Some(name) = pending.pop_front() {
        for &dep in edges.get(name).into_iter().flatten() {
            if reachable.insert(dep) {
                pending.push_back(dep);
            }
        }
    }

    let mut indegree: HashMap<&str, usize> = HashMap::with_capacity(reachable.len());
    for &name in &reachable {
        let in_dag_upstreams = by_name
            .get(name)
            .map(|spec| spec.intra_upstreams().filter(|u| reachable.contains(u)).count())
            .unwrap_or(0);
        indegree.insert(name, in_dag_upstreams);
    }

    let mut queue = VecDeque::from([root]);
    let mut order = Vec::with_capacity(reachable.len());
    while let Some(name) = queue.pop_front() {
        order.push(name);
        for &dep in edges.get(name).into_iter().flatten() {
            if let Some(remaining) = indegree.get_mut(dep) {
                *remaining -= 1;
                if *remaining == 0 {
                    queue.push_back(dep);
                }
            }
        }
    }
    order
}

#[cfg(test)]
#[path = "builder_tests.rs"]
mod tests;
