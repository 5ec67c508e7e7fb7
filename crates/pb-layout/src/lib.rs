// ABOUTME: Pane geometry reasoning for tmux-pane-balance.
// ABOUTME: Finds the panes joined with the active one and computes balanced sizes.

mod balance;
mod joined;

pub use balance::{balance, balanced_size};
pub use joined::{leading_run, resolve_joined};
