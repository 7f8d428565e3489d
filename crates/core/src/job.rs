// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Job specification: schedule, task window, and declared dependencies.

use crate::schedule::Schedule;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::time::Duration;

/// How a job relates to one of its upstreams.
///
/// Only `Intra` edges (same project) participate in replay traversal.
/// The other kinds are preserved on the spec but never expanded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DependencyKind {
    #[default]
    Intra,
    Inter,
    Hook,
}

crate::simple_display! {
    DependencyKind {
        Intra => "intra",
        Inter => "inter",
        Hook => "hook",
    }
}

/// Dependency descriptor attached to an upstream job name.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobDependency {
    #[serde(default)]
    pub kind: DependencyKind,
}

impl JobDependency {
    pub fn intra() -> Self {
        Self { kind: DependencyKind::Intra }
    }
}

/// Cron schedule of a job, ticking from an absolute start date.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobSchedule {
    pub interval: Schedule,
    /// Date the cron began ticking. Fires before this are not real runs.
    pub start_date: NaiveDate,
}

/// Look-back duration `W`: a run scheduled at `t` consumes upstream
/// data covering `[t - W, t)`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskWindow(pub Duration);

impl TaskWindow {
    pub const fn from_hours(hours: u64) -> Self {
        Self(Duration::from_secs(hours * 3600))
    }

    pub const fn from_days(days: u64) -> Self {
        Self::from_hours(days * 24)
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// The window as a chrono duration for instant arithmetic.
    /// Out-of-range windows collapse to zero, which induces no runs.
    pub fn as_chrono(&self) -> chrono::Duration {
        chrono::Duration::from_std(self.0).unwrap_or_default()
    }
}

/// A scheduled pipeline in the catalog.
///
/// `dependencies` is keyed by upstream job name ("upstream of me");
/// the ordered map keeps edge iteration deterministic across requests.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobSpec {
    pub name: String,
    pub schedule: JobSchedule,
    pub window: TaskWindow,
    #[serde(default)]
    pub dependencies: BTreeMap<String, JobDependency>,
}

impl JobSpec {
    pub fn new(name: impl Into<String>, schedule: JobSchedule, window: TaskWindow) -> Self {
        Self { name: name.into(), schedule, window, dependencies: BTreeMap::new() }
    }

    /// Add a same-project dependency on `upstream`.
    pub fn depends_on(mut self, upstream: impl Into<String>) -> Self {
        self.dependencies.insert(upstream.into(), JobDependency::intra());
        self
    }

    /// Upstream names this job consumes within its own project,
    /// in deterministic (name) order.
    pub fn intra_upstreams(&self) -> impl Iterator<Item = &str> {
        self.dependencies
            .iter()
            .filter(|(_, dep)| dep.kind == DependencyKind::Intra)
            .map(|(name, _)| name.as_str())
    }
}

#[cfg(test)]
#[path = "job_tests.rs"]
mod tests;
