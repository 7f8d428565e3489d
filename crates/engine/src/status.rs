// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Status overlay for a planned replay tree.

use crate::error::ReplayError;
use crate::gateways::SchedulerGateway;
use crate::service::cancellable;
use hc_core::{ReplayRecord, ReplayTree};
use tokio_util::sync::CancellationToken;

/// Replace each node's planned instants with the scheduler's view of
/// its runs inside the replay interval.
///
/// One call per node, serially and in tree order; the first failure
/// aborts the walk and surfaces the gateway's error untouched.
pub async fn annotate(
    tree: &mut ReplayTree,
    scheduler: &dyn SchedulerGateway,
    replay: &ReplayRecord,
    token: &CancellationToken,
) -> Result<(), ReplayError> {
    let ids: Vec<_> = tree.ids().collect();
    for id in ids {
        let statuses = cancellable(token, scheduler.run_status(replay, tree.node(id).name()))
            .await?
            .map_err(ReplayError::RunStatus)?;
        tree.node_mut(id).set_statuses(statuses);
    }
    Ok(())
}

#[cfg(test)]
#[path = "status_tests.rs"]
mod tests;
