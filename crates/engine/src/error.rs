// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for replay operations.
//!
//! Gateway failures from the replay store and the scheduler stay
//! transparent so operators see the backend's own message; resolution
//! failures are accumulated into a composite instead of aborting on the
//! first broken job.

use chrono::NaiveDate;
use std::fmt;
use thiserror::Error;

/// Errors surfaced by the replay façade.
#[derive(Debug, Error)]
pub enum ReplayError {
    #[error("failed to fetch job specs for project {project}: {source}")]
    CatalogFetch { project: String, source: anyhow::Error },

    #[error(transparent)]
    Resolution(#[from] ResolutionErrors),

    // Message text is load-bearing: existing operator tooling matches on it.
    #[error("a cycle dependency encountered in the tree: {job}")]
    CyclicDependency { job: String },

    #[error("replay start date {start} is after end date {end}")]
    InvalidInterval { start: NaiveDate, end: NaiveDate },

    #[error("couldn't find any job with name {0}")]
    JobNotFound(String),

    #[error(transparent)]
    Store(anyhow::Error),

    #[error(transparent)]
    RunStatus(anyhow::Error),

    #[error("replay operation aborted")]
    Aborted,
}

/// One failed per-job resolution.
#[derive(Debug)]
pub struct ResolutionFailure {
    pub job: String,
    pub source: anyhow::Error,
}

/// Composite of every per-job resolution failure, in catalog order.
#[derive(Debug, Default)]
pub struct ResolutionErrors {
    failures: Vec<ResolutionFailure>,
}

impl ResolutionErrors {
    pub fn push(&mut self, failure: ResolutionFailure) {
        self.failures.push(failure);
    }

    pub fn len(&self) -> usize {
        self.failures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.failures.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ResolutionFailure> {
        self.failures.iter()
    }
}

impl fmt::Display for ResolutionErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "failed to resolve dependencies for {} job(s):", self.failures.len())?;
        for failure in &self.failures {
            write!(f, "\n  {}: {}", failure.job, failure.source)?;
        }
        Ok(())
    }
}

impl std::error::Error for ResolutionErrors {}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
