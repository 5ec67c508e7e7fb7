// ABOUTME: Equal-share sizing for a group of joined panes.
// ABOUTME: Produces one resize command per pane, all carrying the rounded average.

use pb_core::{Axis, Pane, ResizeCommand};

/// Average extent of `group` along `axis`, rounded half up.
/// Returns None for an empty group.
pub fn balanced_size(group: &[&Pane], axis: Axis) -> Option<u32> {
    if group.is_empty() {
        return None;
    }
    let count = group.len() as u64;
    let total: u64 = group.iter().map(|pane| u64::from(axis.extent(pane))).sum();
    // the average never exceeds the largest member, so it fits back into u32
    Some(((2 * total + count) / (2 * count)) as u32)
}

/// Resize commands that give every pane in `group` the same extent along `axis`.
/// Groups of zero or one pane need no balancing.
pub fn balance(group: &[&Pane], axis: Axis) -> Vec<ResizeCommand> {
    let size = match balanced_size(group, axis) {
        Some(size) if group.len() > 1 => size,
        _ => {
            tracing::debug!(%axis, panes = group.len(), "nothing to balance");
            return Vec::new();
        }
    };
    tracing::debug!(%axis, panes = group.len(), size, "balancing group");

    group
        .iter()
        .map(|pane| ResizeCommand::for_axis(pane, axis, size))
        .collect()
}
