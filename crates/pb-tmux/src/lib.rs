// ABOUTME: tmux integration for tmux-pane-balance.
// ABOUTME: Reads pane geometry from tmux and submits batched resize commands.

pub mod batch;
pub mod error;
pub mod listing;
pub mod tmux;

pub use batch::{resize_args, submit};
pub use error::MuxError;
pub use listing::{parse_snapshot, PANE_FORMAT};
pub use tmux::Tmux;

use pb_core::{ResizeCommand, Snapshot};

/// The terminal multiplexer as seen by the balancer: one read, one write.
pub trait Multiplexer {
    /// Every pane of the current window
    fn list_panes(&self) -> Result<Snapshot, MuxError>;

    /// Apply all commands in a single request, in the given order.
    /// Callers go through [`submit`], which never passes an empty slice.
    fn resize_panes(&self, commands: &[ResizeCommand]) -> Result<(), MuxError>;
}
