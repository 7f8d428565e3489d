// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Replay request, persisted record, and run status types.

use crate::job::JobSpec;
use crate::project::ProjectSpec;
use chrono::{DateTime, Days, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use uuid::Uuid;

/// Closed calendar interval at day resolution, UTC.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    pub fn is_inverted(&self) -> bool {
        self.start > self.end
    }

    /// First instant covered: `start` at midnight UTC.
    pub fn begin(&self) -> DateTime<Utc> {
        self.start.and_time(NaiveTime::MIN).and_utc()
    }

    /// First instant past the interval: the midnight after `end`.
    ///
    /// The closed upper bound `end 23:59:59.999...` is expressed as
    /// `instant < end_exclusive`, so a fire in the last second of the
    /// interval is still included.
    pub fn end_exclusive(&self) -> DateTime<Utc> {
        let next = self.end.checked_add_days(Days::new(1)).unwrap_or(NaiveDate::MAX);
        next.and_time(NaiveTime::MIN).and_utc()
    }
}

impl std::fmt::Display for DateRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {}]", self.start, self.end)
    }
}

/// Operator request to replay a root job and its dependents over a range.
#[derive(Debug, Clone)]
pub struct ReplayRequest {
    pub project: ProjectSpec,
    pub job_name: String,
    pub range: DateRange,
    /// Pre-fetched specs passed along as an optimization hint for
    /// gateways. Planning always trusts the freshly resolved catalog.
    pub job_specs: HashMap<String, JobSpec>,
}

impl ReplayRequest {
    pub fn new(project: ProjectSpec, job_name: impl Into<String>, range: DateRange) -> Self {
        Self { project, job_name: job_name.into(), range, job_specs: HashMap::new() }
    }

    crate::setters! {
        set {
            job_specs: HashMap<String, JobSpec>,
        }
    }
}

/// Lifecycle state of a persisted replay.
///
/// The engine writes only `Accepted` (on commit); the rest are driven by
/// out-of-band workers and read back on status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ReplayStatus {
    Accepted,
    Replayed,
    InProgress,
    Succeeded,
    Failed,
    Invalid,
}

crate::simple_display! {
    ReplayStatus {
        Accepted => "accepted",
        Replayed => "replayed",
        InProgress => "in-progress",
        Succeeded => "succeeded",
        Failed => "failed",
        Invalid => "invalid",
    }
}

/// Persisted record of an accepted replay. Owned by the replay store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReplayRecord {
    pub id: Uuid,
    pub project_name: String,
    pub root_job_name: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub status: ReplayStatus,
    pub created_at: DateTime<Utc>,
}

impl ReplayRecord {
    pub fn range(&self) -> DateRange {
        DateRange::new(self.start_date, self.end_date)
    }
}

/// Execution state of a single scheduled run, preserved bit-compatibly
/// across the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RunState {
    Pending,
    Running,
    Success,
    Failed,
    Retry,
    Skipped,
}

crate::simple_display! {
    RunState {
        Pending => "pending",
        Running => "running",
        Success => "success",
        Failed => "failed",
        Retry => "retry",
        Skipped => "skipped",
    }
}

/// Status of one run instance as reported by the scheduler.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobRunStatus {
    pub state: RunState,
    pub scheduled_at: DateTime<Utc>,
}

impl JobRunStatus {
    pub fn new(state: RunState, scheduled_at: DateTime<Utc>) -> Self {
        Self { state, scheduled_at }
    }
}

#[cfg(test)]
#[path = "replay_tests.rs"]
mod tests;
