// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `hindcast fires`: list one job's cron fires inside an interval.

use crate::catalog;
use crate::cli::FiresArgs;
use anyhow::{bail, Result};
use chrono::SecondsFormat;
use hc_core::DateRange;

pub async fn fires(args: FiresArgs) -> Result<()> {
    let catalog = catalog::load(&args.catalog)?;
    let Some(spec) = catalog.jobs.iter().find(|j| j.name == args.job) else {
        bail!("couldn't find any job with name {}", args.job);
    };

    let range = DateRange::new(args.start, args.end);
    if range.is_inverted() {
        bail!("start date {} is after end date {}", range.start, range.end);
    }

    let fires = spec.schedule.interval.fires_within(
        spec.schedule.start_date,
        range.begin(),
        range.end_exclusive(),
    );
    if fires.is_empty() {
        println!("no fires of {} within {}", args.job, range);
        return Ok(());
    }
    for at in fires {
        println!("{}", at.to_rfc3339_opts(SecondsFormat::Secs, true));
    }
    Ok(())
}
