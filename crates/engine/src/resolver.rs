// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Dependency-closure resolution over a whole catalog.
//!
//! Every catalog entry is resolved, not just the replay root: the root's
//! downstream closure is only known after resolution. Failures are
//! accumulated so operators see the full picture of a broken catalog in
//! one pass.

use crate::error::{ResolutionErrors, ResolutionFailure};
use crate::gateways::{CatalogRepository, DependencyResolver};
use futures_util::stream::{self, StreamExt};
use hc_core::{JobSpec, ProjectSpec};
use tracing::debug;

/// Upper bound on concurrent per-spec resolutions.
const RESOLVE_FAN_OUT: usize = 8;

/// Resolve every spec in the catalog through the injected resolver.
///
/// Resolutions run with bounded fan-out; `buffered` yields results in
/// input order, so both the resolved subset and the composite error
/// keep catalog order regardless of completion order.
pub async fn resolve_catalog(
    resolver: &dyn DependencyResolver,
    catalog: &dyn CatalogRepository,
    project: &ProjectSpec,
    specs: &[JobSpec],
) -> (Vec<JobSpec>, ResolutionErrors) {
    let results: Vec<Result<JobSpec, ResolutionFailure>> =
        stream::iter(specs.iter().map(|spec| async move {
            resolver
                .resolve(project, catalog, spec)
                .await
                .map_err(|source| ResolutionFailure { job: spec.name.clone(), source })
        }))
        .buffered(RESOLVE_FAN_OUT)
        .collect()
        .await;

    let mut resolved = Vec::with_capacity(results.len());
    let mut errors = ResolutionErrors::default();
    for result in results {
        match result {
            Ok(spec) => resolved.push(spec),
            Err(failure) => errors.push(failure),
        }
    }
    if !errors.is_empty() {
        debug!(project = %project.name, failed = errors.len(), "catalog resolution incomplete");
    }
    (resolved, errors)
}

#[cfg(test)]
#[path = "resolver_tests.rs"]
mod tests;
