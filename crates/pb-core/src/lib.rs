// ABOUTME: Shared types for tmux-pane-balance.
// ABOUTME: Defines panes, snapshots, axes, and resize commands.

pub mod axis;
pub mod command;
pub mod pane;

pub use axis::Axis;
pub use command::ResizeCommand;
pub use pane::{Pane, Snapshot};
