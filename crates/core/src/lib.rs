// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! hc-core: domain model for the Hindcast replay engine

pub mod macros;

pub mod job;
pub mod project;
pub mod replay;
pub mod schedule;
pub mod tree;

pub use job::{DependencyKind, JobDependency, JobSchedule, JobSpec, TaskWindow};
pub use project::ProjectSpec;
pub use replay::{DateRange, JobRunStatus, ReplayRecord, ReplayRequest, ReplayStatus, RunState};
pub use schedule::{Schedule, ScheduleParseError};
pub use tree::{NodeId, ReplayTree, RunSet, TreeNode};
