// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The replay tree: one node per affected job, downstream edges only.
//!
//! Nodes live in an arena owned by the tree and are addressed by
//! [`NodeId`], so diamond joins share a single node instead of cloning
//! subtrees. The arena is filled in build order: root first, every node
//! after all of its in-tree upstreams, which makes plain iteration a
//! valid topological walk.

use crate::job::JobSpec;
use crate::replay::JobRunStatus;
use chrono::{DateTime, Utc};
use std::collections::HashMap;

/// Handle to a node within one [`ReplayTree`].
///
/// Only valid for the tree that issued it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

/// Planned instants or executed statuses.
///
/// A tree holds exactly one of the two forms: planning produces
/// `Instants`, the status overlay replaces them wholesale with
/// `Statuses`. The forms are never mixed within one tree.
#[derive(Debug, Clone, PartialEq)]
pub enum RunSet {
    Instants(Vec<DateTime<Utc>>),
    Statuses(Vec<JobRunStatus>),
}

impl RunSet {
    pub fn len(&self) -> usize {
        match self {
            RunSet::Instants(v) => v.len(),
            RunSet::Statuses(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn as_instants(&self) -> Option<&[DateTime<Utc>]> {
        match self {
            RunSet::Instants(v) => Some(v),
            RunSet::Statuses(_) => None,
        }
    }

    pub fn as_statuses(&self) -> Option<&[JobRunStatus]> {
        match self {
            RunSet::Statuses(v) => Some(v),
            RunSet::Instants(_) => None,
        }
    }
}

/// One job within a replay, with its planned or executed runs and the
/// downstream jobs it feeds.
#[derive(Debug, Clone)]
pub struct TreeNode {
    spec: JobSpec,
    runs: RunSet,
    dependents: Vec<NodeId>,
}

impl TreeNode {
    fn new(spec: JobSpec) -> Self {
        Self { spec, runs: RunSet::Instants(Vec::new()), dependents: Vec::new() }
    }

    /// Node identity within the tree.
    pub fn name(&self) -> &str {
        &self.spec.name
    }

    pub fn spec(&self) -> &JobSpec {
        &self.spec
    }

    pub fn runs(&self) -> &RunSet {
        &self.runs
    }

    /// Append a planned instant.
    ///
    /// Duplicates are accepted at this level; the expander deposits
    /// strictly ascending, deduplicated sets. Only meaningful on a
    /// planning-form node.
    pub fn add_run(&mut self, at: DateTime<Utc>) {
        debug_assert!(matches!(self.runs, RunSet::Instants(_)), "add_run on a status tree");
        if let RunSet::Instants(v) = &mut self.runs {
            v.push(at);
        }
    }

    /// Replace the node's runs with scheduler-reported statuses,
    /// in the order the scheduler returned them.
    pub fn set_statuses(&mut self, statuses: Vec<JobRunStatus>) {
        self.runs = RunSet::Statuses(statuses);
    }
}

/// Arena of [`TreeNode`]s rooted at the replay target.
#[derive(Debug, Clone)]
pub struct ReplayTree {
    nodes: Vec<TreeNode>,
    index: HashMap<String, NodeId>,
    root: NodeId,
}

impl ReplayTree {
    /// Create a tree containing only its root node.
    pub fn new(root_spec: JobSpec) -> Self {
        let root = NodeId(0);
        let mut index = HashMap::new();
        index.insert(root_spec.name.clone(), root);
        Self { nodes: vec![TreeNode::new(root_spec)], index, root }
    }

    /// Insert a node, or return the existing handle when the job is
    /// already present. Each name appears exactly once per tree.
    pub fn insert(&mut self, spec: JobSpec) -> NodeId {
        if let Some(&id) = self.index.get(&spec.name) {
            return id;
        }
        let id = NodeId(self.nodes.len());
        self.index.insert(spec.name.clone(), id);
        self.nodes.push(TreeNode::new(spec));
        id
    }

    /// Record `dependent` as a downstream edge of `upstream`.
    /// Re-linking the same pair is a no-op.
    pub fn link(&mut self, upstream: NodeId, dependent: NodeId) {
        let edges = &mut self.nodes[upstream.0].dependents;
        if !edges.contains(&dependent) {
            edges.push(dependent);
        }
    }

    pub fn root_id(&self) -> NodeId {
        self.root
    }

    pub fn root(&self) -> &TreeNode {
        &self.nodes[self.root.0]
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    pub fn find(&self, name: &str) -> Option<NodeId> {
        self.index.get(name).copied()
    }

    pub fn node(&self, id: NodeId) -> &TreeNode {
        &self.nodes[id.0]
    }

    pub fn node_mut(&mut self, id: NodeId) -> &mut TreeNode {
        &mut self.nodes[id.0]
    }

    /// Handles in build order (root first, upstreams before dependents).
    pub fn ids(&self) -> impl Iterator<Item = NodeId> {
        (0..self.nodes.len()).map(NodeId)
    }

    /// Nodes in build order; a valid topological walk visiting each
    /// node exactly once.
    pub fn nodes(&self) -> impl Iterator<Item = &TreeNode> {
        self.nodes.iter()
    }

    /// Downstream neighbors of `id`, in catalog order.
    pub fn dependents(&self, id: NodeId) -> impl Iterator<Item = &TreeNode> {
        self.nodes[id.0].dependents.iter().map(|d| &self.nodes[d.0])
    }

    /// Downstream edges of `id` as handles, in catalog order.
    pub fn dependent_ids(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        self.nodes[id.0].dependents.iter().copied()
    }
}

#[cfg(test)]
#[path = "tree_tests.rs"]
mod tests;
