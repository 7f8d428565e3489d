// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Catalog file loading.
//!
//! ```toml
//! [project]
//! name = "analytics"
//!
//! [[job]]
//! name = "daily-rollup"
//! cron = "0 2 * * *"
//! start_date = "2020-04-05"
//! window = "24h"
//! depends_on = ["ingest"]
//! ```

use anyhow::{bail, Context, Result};
use chrono::NaiveDate;
use hc_core::{JobSchedule, JobSpec, ProjectSpec, Schedule, TaskWindow};
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;

#[derive(Debug, Deserialize)]
struct CatalogFile {
    project: ProjectEntry,
    #[serde(default, rename = "job")]
    jobs: Vec<JobEntry>,
}

#[derive(Debug, Deserialize)]
struct ProjectEntry {
    name: String,
}

#[derive(Debug, Deserialize)]
struct JobEntry {
    name: String,
    cron: String,
    start_date: NaiveDate,
    window: String,
    #[serde(default)]
    depends_on: Vec<String>,
}

/// A parsed catalog: the project and its job specs in file order.
#[derive(Debug)]
pub struct Catalog {
    pub project: ProjectSpec,
    pub jobs: Vec<JobSpec>,
}

pub fn load(path: &Path) -> Result<Catalog> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading catalog file {}", path.display()))?;
    parse(&text).with_context(|| format!("in catalog file {}", path.display()))
}

pub fn parse(text: &str) -> Result<Catalog> {
    let file: CatalogFile = toml::from_str(text)?;
    let mut jobs = Vec::with_capacity(file.jobs.len());
    for entry in file.jobs {
        let interval =
            Schedule::parse(&entry.cron).with_context(|| format!("job {:?}", entry.name))?;
        let window = TaskWindow(
            parse_window(&entry.window).with_context(|| format!("job {:?}", entry.name))?,
        );
        let schedule = JobSchedule { interval, start_date: entry.start_date };
        let mut spec = JobSpec::new(entry.name, schedule, window);
        for upstream in entry.depends_on {
            spec = spec.depends_on(upstream);
        }
        jobs.push(spec);
    }
    Ok(Catalog { project: ProjectSpec::new(file.project.name), jobs })
}

/// Task window shorthand: `"3d"`, `"24h"`, `"90m"`, or `"0"`.
fn parse_window(text: &str) -> Result<Duration> {
    let text = text.trim();
    if text == "0" {
        return Ok(Duration::ZERO);
    }
    let Some(unit) = text.chars().last() else {
        bail!("empty task window");
    };
    let value = &text[..text.len() - unit.len_utf8()];
    let n: u64 = value.parse().with_context(|| format!("bad task window {text:?}"))?;
    let secs = match unit {
        'd' => n * 24 * 3600,
        'h' => n * 3600,
        'm' => n * 60,
        _ => bail!("bad task window {text:?}: expected a d, h, or m suffix"),
    };
    Ok(Duration::from_secs(secs))
}

#[cfg(test)]
#[path = "catalog_tests.rs"]
mod tests;
