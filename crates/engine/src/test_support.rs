// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Fake gateways and the shared fixture catalog.
//!
//! Gated behind `#[cfg(any(test, feature = "test-support"))]`.

use crate::gateways::{CatalogRepository, DependencyResolver, ReplayStore, SchedulerGateway};
use anyhow::{anyhow, Result};
use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use hc_core::{
    JobRunStatus, JobSchedule, JobSpec, ProjectSpec, ReplayRecord, ReplayRequest, ReplayStatus,
    ReplayTree, Schedule, TaskWindow,
};
use parking_lot::Mutex;
use std::collections::HashMap;
use uuid::Uuid;

// ── Fixture data ────────────────────────────────────────────────────────

pub fn day(d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2020, 8, d).expect("valid fixture date")
}

pub fn at(d: u32, h: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2020, 8, d, h, 0, 0)
        .single()
        .expect("valid fixture instant")
}

pub fn job(name: &str, cron: &str, window_days: u64, upstreams: &[&str]) -> JobSpec {
    let schedule = JobSchedule {
        interval: Schedule::parse(cron).expect("valid fixture cron"),
        start_date: NaiveDate::from_ymd_opt(2020, 4, 5).expect("valid fixture date"),
    };
    let mut spec = JobSpec::new(name, schedule, TaskWindow::from_days(window_days));
    for upstream in upstreams {
        spec = spec.depends_on(*upstream);
    }
    spec
}

/// The six-job fixture catalog: chain dag1 → dag2 → dag3, and chain
/// dag4 → dag5 → dag6 where dag6 also consumes dag4 directly.
pub fn fixture_catalog() -> Vec<JobSpec> {
    vec![
        job("dag1", "0 2 * * *", 1, &[]),
        job("dag2", "0 2 * * *", 3, &["dag1"]),
        job("dag3", "0 2 * * *", 3, &["dag2"]),
        job("dag4", "@hourly", 3, &[]),
        job("dag5", "@daily", 3, &["dag4"]),
        job("dag6", "@daily", 3, &["dag4", "dag5"]),
    ]
}

/// Planned instants per job, keyed by name.
pub fn runs_by_job(tree: &ReplayTree) -> HashMap<String, Vec<DateTime<Utc>>> {
    tree.nodes()
        .map(|n| (n.name().to_string(), n.runs().as_instants().unwrap_or_default().to_vec()))
        .collect()
}

/// Reported statuses per job, keyed by name.
pub fn statuses_by_job(tree: &ReplayTree) -> HashMap<String, Vec<JobRunStatus>> {
    tree.nodes()
        .map(|n| (n.name().to_string(), n.runs().as_statuses().unwrap_or_default().to_vec()))
        .collect()
}

// ── Fake gateways ───────────────────────────────────────────────────────

/// Catalog returning a scripted spec list or a scripted error.
pub struct FakeCatalog {
    specs: Result<Vec<JobSpec>, String>,
    calls: Mutex<usize>,
}

impl FakeCatalog {
    pub fn returning(specs: Vec<JobSpec>) -> Self {
        Self { specs: Ok(specs), calls: Mutex::new(0) }
    }

    pub fn failing(message: &str) -> Self {
        Self { specs: Err(message.to_string()), calls: Mutex::new(0) }
    }

    pub fn calls(&self) -> usize {
        *self.calls.lock()
    }
}

#[async_trait]
impl CatalogRepository for FakeCatalog {
    async fn all_specs(&self, _project: &ProjectSpec) -> Result<Vec<JobSpec>> {
        *self.calls.lock() += 1;
        match &self.specs {
            Ok(specs) => Ok(specs.clone()),
            Err(message) => Err(anyhow!("{message}")),
        }
    }
}

/// Resolver passing specs through, with scripted per-job failures.
#[derive(Default)]
pub struct FakeResolver {
    failures: HashMap<String, String>,
}

impl FakeResolver {
    pub fn passthrough() -> Self {
        Self::default()
    }

    pub fn failing_for(failures: &[(&str, &str)]) -> Self {
        Self {
            failures: failures
                .iter()
                .map(|(job, message)| (job.to_string(), message.to_string()))
                .collect(),
        }
    }
}

#[async_trait]
impl DependencyResolver for FakeResolver {
    async fn resolve(
        &self,
        _project: &ProjectSpec,
        _catalog: &dyn CatalogRepository,
        spec: &JobSpec,
    ) -> Result<JobSpec> {
        match self.failures.get(&spec.name) {
            Some(message) => Err(anyhow!("{message}")),
            None => Ok(spec.clone()),
        }
    }
}

/// In-memory replay store with scripted failure modes.
#[derive(Default)]
pub struct FakeReplayStore {
    records: Mutex<HashMap<Uuid, ReplayRecord>>,
    submitted: Mutex<Vec<ReplayRequest>>,
    submit_error: Option<String>,
    get_error: Option<String>,
}

impl FakeReplayStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_record(record: ReplayRecord) -> Self {
        let store = Self::default();
        store.records.lock().insert(record.id, record);
        store
    }

    pub fn failing_submit(message: &str) -> Self {
        Self { submit_error: Some(message.to_string()), ..Self::default() }
    }

    pub fn failing_get(message: &str) -> Self {
        Self { get_error: Some(message.to_string()), ..Self::default() }
    }

    pub fn submitted(&self) -> usize {
        self.submitted.lock().len()
    }

    pub fn record(&self, id: Uuid) -> Option<ReplayRecord> {
        self.records.lock().get(&id).cloned()
    }
}

#[async_trait]
impl ReplayStore for FakeReplayStore {
    async fn submit(&self, request: &ReplayRequest) -> Result<Uuid> {
        if let Some(message) = &self.submit_error {
            return Err(anyhow!("{message}"));
        }
        let record = ReplayRecord {
            id: Uuid::new_v4(),
            project_name: request.project.name.clone(),
            root_job_name: request.job_name.clone(),
            start_date: request.range.start,
            end_date: request.range.end,
            status: ReplayStatus::Accepted,
            created_at: Utc::now(),
        };
        let id = record.id;
        self.records.lock().insert(id, record);
        self.submitted.lock().push(request.clone());
        Ok(id)
    }

    async fn get(&self, id: Uuid) -> Result<ReplayRecord> {
        if let Some(message) = &self.get_error {
            return Err(anyhow!("{message}"));
        }
        self.records.lock().get(&id).cloned().ok_or_else(|| anyhow!("replay not found: {id}"))
    }
}

/// Scheduler gateway with scripted statuses and failures per job,
/// recording call order.
#[derive(Default)]
pub struct FakeScheduler {
    statuses: HashMap<String, Vec<JobRunStatus>>,
    failures: HashMap<String, String>,
    calls: Mutex<Vec<String>>,
}

impl FakeScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_statuses(mut self, job: &str, statuses: Vec<JobRunStatus>) -> Self {
        self.statuses.insert(job.to_string(), statuses);
        self
    }

    pub fn failing_for(mut self, job: &str, message: &str) -> Self {
        self.failures.insert(job.to_string(), message.to_string());
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().clone()
    }
}

#[async_trait]
impl SchedulerGateway for FakeScheduler {
    async fn run_status(
        &self,
        _replay: &ReplayRecord,
        job_name: &str,
    ) -> Result<Vec<JobRunStatus>> {
        self.calls.lock().push(job_name.to_string());
        if let Some(message) = self.failures.get(job_name) {
            return Err(anyhow!("{message}"));
        }
        Ok(self.statuses.get(job_name).cloned().unwrap_or_default())
    }
}
