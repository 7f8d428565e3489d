// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Local gateway implementations for offline planning.
//!
//! The catalog and resolver are backed by the parsed catalog file; the
//! replay store and scheduler are deliberately absent. Committing and
//! tracking replays belongs to the platform server, so the planning CLI
//! wires stubs that refuse those paths.

use anyhow::{bail, Result};
use async_trait::async_trait;
use hc_core::{JobRunStatus, JobSpec, ProjectSpec, ReplayRecord, ReplayRequest};
use hc_engine::{CatalogRepository, DependencyResolver, ReplayStore, SchedulerGateway};
use std::collections::HashSet;
use uuid::Uuid;

/// Catalog repository over the jobs parsed from the catalog file.
pub struct FileCatalog {
    jobs: Vec<JobSpec>,
}

impl FileCatalog {
    pub fn new(jobs: Vec<JobSpec>) -> Self {
        Self { jobs }
    }
}

#[async_trait]
impl CatalogRepository for FileCatalog {
    async fn all_specs(&self, _project: &ProjectSpec) -> Result<Vec<JobSpec>> {
        Ok(self.jobs.clone())
    }
}

/// Resolver that hydrates nothing but verifies every intra reference
/// points at a job the catalog actually contains.
pub struct FileResolver;

#[async_trait]
impl DependencyResolver for FileResolver {
    async fn resolve(
        &self,
        project: &ProjectSpec,
        catalog: &dyn CatalogRepository,
        spec: &JobSpec,
    ) -> Result<JobSpec> {
        let known: HashSet<String> =
            catalog.all_specs(project).await?.into_iter().map(|s| s.name).collect();
        for upstream in spec.intra_upstreams() {
            if !known.contains(upstream) {
                bail!("unknown upstream job {upstream:?}");
            }
        }
        Ok(spec.clone())
    }
}

/// Stub for the store and scheduler gateways.
pub struct Unsupported;

#[async_trait]
impl ReplayStore for Unsupported {
    async fn submit(&self, _request: &ReplayRequest) -> Result<Uuid> {
        bail!("committing a replay requires the platform server");
    }

    async fn get(&self, _id: Uuid) -> Result<ReplayRecord> {
        bail!("looking up a replay requires the platform server");
    }
}

#[async_trait]
impl SchedulerGateway for Unsupported {
    async fn run_status(
        &self,
        _replay: &ReplayRecord,
        _job_name: &str,
    ) -> Result<Vec<JobRunStatus>> {
        bail!("run statuses require the platform server");
    }
}

#[cfg(test)]
#[path = "local_tests.rs"]
mod tests;
