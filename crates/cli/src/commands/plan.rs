// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `hindcast plan`: dry-run a replay against a catalog file.

use crate::catalog;
use crate::cli::PlanArgs;
use crate::local::{FileCatalog, FileResolver, Unsupported};
use crate::output::render_plan;
use anyhow::Result;
use hc_core::{DateRange, ReplayRequest};
use hc_engine::ReplayService;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::debug;

pub async fn plan(args: PlanArgs) -> Result<()> {
    let catalog = catalog::load(&args.catalog)?;
    debug!(project = %catalog.project, jobs = catalog.jobs.len(), "catalog loaded");
    let request = ReplayRequest::new(
        catalog.project.clone(),
        &args.job,
        DateRange::new(args.start, args.end),
    );

    let service = ReplayService::new(
        Arc::new(FileCatalog::new(catalog.jobs)),
        Arc::new(FileResolver),
        Arc::new(Unsupported),
        Arc::new(Unsupported),
    );
    let tree = service.dry_run(&CancellationToken::new(), &request).await?;

    let total: usize = tree.nodes().map(|n| n.runs().len()).sum();
    println!(
        "replay plan for {} over {}: {} job(s), {} run(s)",
        args.job,
        request.range,
        tree.len(),
        total
    );
    println!();
    print!("{}", render_plan(&tree));
    Ok(())
}
