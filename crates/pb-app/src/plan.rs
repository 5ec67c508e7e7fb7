// ABOUTME: One read-compute-write balancing pass.
// ABOUTME: Resolves and balances both axes, then submits the merged commands.

use anyhow::{Context, Result};
use pb_core::{Axis, ResizeCommand, Snapshot};
use pb_layout::{balance, resolve_joined};
use pb_tmux::{submit, Multiplexer};

/// Resize commands for both axes, horizontal first
pub fn plan(snapshot: &Snapshot) -> Vec<ResizeCommand> {
    if snapshot.active().is_none() {
        tracing::debug!(panes = snapshot.panes().len(), "no active pane");
    }

    let mut commands = Vec::new();
    for axis in Axis::ALL {
        let group = resolve_joined(snapshot, axis);
        tracing::debug!(
            %axis,
            joined = ?group.iter().map(|pane| pane.index).collect::<Vec<_>>(),
            "resolved joined panes"
        );
        commands.extend(balance(&group, axis));
    }
    commands
}

/// Read the layout once, balance it, and write it back in one batch
pub fn run(mux: &dyn Multiplexer) -> Result<()> {
    let snapshot = mux.list_panes().context("Failed to read tmux panes")?;
    let commands = plan(&snapshot);
    submit(mux, commands).context("Failed to resize tmux panes")?;
    Ok(())
}
