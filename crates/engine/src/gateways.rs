// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Injected collaborators.
//!
//! The engine owns none of the platform's storage or scheduling. Each
//! trait here is a thread-safe black box provided at construction; every
//! call is a suspension point the façade races against the request's
//! cancellation token.

use anyhow::Result;
use async_trait::async_trait;
use hc_core::{JobRunStatus, JobSpec, ProjectSpec, ReplayRecord, ReplayRequest};
use uuid::Uuid;

/// Read access to a project's job catalog.
#[async_trait]
pub trait CatalogRepository: Send + Sync {
    /// Every job spec in the project, in stable catalog order.
    async fn all_specs(&self, project: &ProjectSpec) -> Result<Vec<JobSpec>>;
}

/// Hydrates one spec's `dependencies` with materialized upstream
/// references.
#[async_trait]
pub trait DependencyResolver: Send + Sync {
    async fn resolve(
        &self,
        project: &ProjectSpec,
        catalog: &dyn CatalogRepository,
        spec: &JobSpec,
    ) -> Result<JobSpec>;
}

/// Persistence and hand-off for accepted replays.
#[async_trait]
pub trait ReplayStore: Send + Sync {
    /// Atomically persist a new record in `accepted` state and enqueue
    /// it on the downstream scheduler. Idempotency is the store's
    /// responsibility; the engine never dedupes.
    async fn submit(&self, request: &ReplayRequest) -> Result<Uuid>;

    async fn get(&self, id: Uuid) -> Result<ReplayRecord>;
}

/// Run-level visibility into the workflow scheduler.
#[async_trait]
pub trait SchedulerGateway: Send + Sync {
    /// Execution statuses for `job_name` within the replay's interval.
    async fn run_status(&self, replay: &ReplayRecord, job_name: &str)
        -> Result<Vec<JobRunStatus>>;
}
