// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The replay lifecycle façade.
//!
//! Three operations, all stateless per request:
//! - dry run: plan only, the replay store is never touched
//! - commit: plan, then one atomic store submission
//! - status: reload a stored replay, replan it, overlay run statuses

use crate::builder::build_tree;
use crate::error::ReplayError;
use crate::expander::expand;
use crate::gateways::{CatalogRepository, DependencyResolver, ReplayStore, SchedulerGateway};
use crate::resolver::resolve_catalog;
use crate::status::annotate;
use hc_core::{DateRange, ProjectSpec, ReplayRequest, ReplayTree};
use std::future::Future;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};
use uuid::Uuid;

/// Await a gateway call, aborting as soon as the request is cancelled.
/// Safe at every call site: the only write path is a single atomic
/// store submission, so cancellation never leaves partial state behind.
pub(crate) async fn cancellable<T>(
    token: &CancellationToken,
    call: impl Future<Output = T>,
) -> Result<T, ReplayError> {
    tokio::select! {
        // Checked first, so an already-cancelled request never dispatches.
        biased;
        _ = token.cancelled() => Err(ReplayError::Aborted),
        out = call => Ok(out),
    }
}

/// Brokers replay requests between the catalog, the dependency
/// resolver, the replay store, and the scheduler gateway.
pub struct ReplayService {
    catalog: Arc<dyn CatalogRepository>,
    resolver: Arc<dyn DependencyResolver>,
    store: Arc<dyn ReplayStore>,
    scheduler: Arc<dyn SchedulerGateway>,
}

impl ReplayService {
    pub fn new(
        catalog: Arc<dyn CatalogRepository>,
        resolver: Arc<dyn DependencyResolver>,
        store: Arc<dyn ReplayStore>,
        scheduler: Arc<dyn SchedulerGateway>,
    ) -> Self {
        Self { catalog, resolver, store, scheduler }
    }

    /// Plan the replay and return the tree without committing anything.
    pub async fn dry_run(
        &self,
        token: &CancellationToken,
        request: &ReplayRequest,
    ) -> Result<ReplayTree, ReplayError> {
        let range = validated(&request.range)?;
        self.plan(token, &request.project, &request.job_name, &range).await
    }

    /// Validate and plan exactly as a dry run, then hand the request to
    /// the replay store. The store persists the `accepted` record and
    /// enqueues it in one atomic step; its errors surface verbatim.
    pub async fn commit(
        &self,
        token: &CancellationToken,
        request: &ReplayRequest,
    ) -> Result<Uuid, ReplayError> {
        let range = validated(&request.range)?;
        self.plan(token, &request.project, &request.job_name, &range).await?;

        let id = cancellable(token, self.store.submit(request))
            .await?
            .map_err(ReplayError::Store)?;
        info!(replay = %id, job = %request.job_name, range = %request.range, "replay accepted");
        Ok(id)
    }

    /// Rebuild the tree of a stored replay and overlay per-run statuses.
    ///
    /// The stored root and interval govern the rebuild; the catalog is
    /// fetched fresh, so a root job that has since left the catalog is
    /// reported as not found.
    pub async fn status(
        &self,
        token: &CancellationToken,
        replay_id: Uuid,
    ) -> Result<ReplayTree, ReplayError> {
        let replay = cancellable(token, self.store.get(replay_id))
            .await?
            .map_err(ReplayError::Store)?;
        debug!(replay = %replay.id, status = %replay.status, "loaded replay record");

        let project = ProjectSpec::new(replay.project_name.clone());
        let mut tree =
            self.plan(token, &project, &replay.root_job_name, &replay.range()).await?;
        annotate(&mut tree, self.scheduler.as_ref(), &replay, token).await?;
        Ok(tree)
    }

    /// Shared planning path: fetch catalog, resolve the closure, build
    /// and expand the tree. Any non-empty resolution composite is fatal.
    async fn plan(
        &self,
        token: &CancellationToken,
        project: &ProjectSpec,
        root_job: &str,
        range: &DateRange,
    ) -> Result<ReplayTree, ReplayError> {
        debug!(project = %project.name, job = root_job, range = %range, "planning replay");

        let specs = cancellable(token, self.catalog.all_specs(project))
            .await?
            .map_err(|source| ReplayError::CatalogFetch {
                project: project.name.clone(),
                source,
            })?;

        let (resolved, errors) = cancellable(
            token,
            resolve_catalog(self.resolver.as_ref(), self.catalog.as_ref(), project, &specs),
        )
        .await?;
        if !errors.is_empty() {
            return Err(errors.into());
        }

        let mut tree = build_tree(root_job, &resolved)?;
        expand(&mut tree, range);
        debug!(nodes = tree.len(), root_runs = tree.root().runs().len(), "replay plan ready");
        Ok(tree)
    }
}

fn validated(range: &DateRange) -> Result<DateRange, ReplayError> {
    if range.is_inverted() {
        return Err(ReplayError::InvalidInterval { start: range.start, end: range.end });
    }
    Ok(*range)
}

#[cfg(test)]
#[path = "service_tests.rs"]
mod tests;
