// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Command-line definition.

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "hindcast", version, about = "Replay planning for scheduled job catalogs")]
pub struct Cli {
    /// Increase log verbosity (repeatable)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Preview which runs a replay would dispatch, without committing it
    Plan(PlanArgs),
    /// List the cron fires of one job inside an interval
    Fires(FiresArgs),
}

#[derive(Args)]
pub struct PlanArgs {
    /// Root job to replay
    pub job: String,

    /// Path to the catalog file
    #[arg(long, default_value = "catalog.toml")]
    pub catalog: PathBuf,

    /// First day of the replay interval (YYYY-MM-DD, inclusive)
    #[arg(long)]
    pub start: NaiveDate,

    /// Last day of the replay interval (YYYY-MM-DD, inclusive)
    #[arg(long)]
    pub end: NaiveDate,
}

#[derive(Args)]
pub struct FiresArgs {
    /// Job whose schedule to inspect
    pub job: String,

    /// Path to the catalog file
    #[arg(long, default_value = "catalog.toml")]
    pub catalog: PathBuf,

    /// First day of the interval (YYYY-MM-DD, inclusive)
    #[arg(long)]
    pub start: NaiveDate,

    /// Last day of the interval (YYYY-MM-DD, inclusive)
    #[arg(long)]
    pub end: NaiveDate,
}
