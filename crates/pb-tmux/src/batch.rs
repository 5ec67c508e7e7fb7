// ABOUTME: Turns resize commands into one chained tmux invocation.
// ABOUTME: Commands are ordered by pane index and joined with `;` so tmux lays out once.

use pb_core::ResizeCommand;

use crate::{Multiplexer, MuxError};

/// Arguments for a single tmux call applying every command in order.
///
/// `;` is passed as its own argument, which tmux treats as a command separator.
pub fn resize_args(commands: &[ResizeCommand]) -> Vec<String> {
    let mut args = Vec::with_capacity(commands.len() * 6);
    for (i, command) in commands.iter().enumerate() {
        if i > 0 {
            args.push(";".to_string());
        }
        let flag = match command {
            ResizeCommand::Width { .. } => "-x",
            ResizeCommand::Height { .. } => "-y",
        };
        args.extend([
            "resize-pane".to_string(),
            "-t".to_string(),
            command.id().to_string(),
            flag.to_string(),
            command.size().to_string(),
        ]);
    }
    args
}

/// Sort `commands` by pane index and hand them to `mux` as one batch.
/// Nothing is sent when there are no commands.
pub fn submit(mux: &dyn Multiplexer, mut commands: Vec<ResizeCommand>) -> Result<(), MuxError> {
    if commands.is_empty() {
        tracing::debug!("layout already balanced, no resize issued");
        return Ok(());
    }
    // stable: a pane's width command stays ahead of its height command
    commands.sort_by_key(ResizeCommand::index);
    tracing::debug!(commands = commands.len(), "submitting resize batch");
    mux.resize_panes(&commands)
}
