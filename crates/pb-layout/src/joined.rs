// ABOUTME: Resolves the contiguous run of panes aligned with the active pane.
// ABOUTME: Walks outward from the active pane in both index directions until alignment breaks.

use pb_core::{Axis, Pane, Snapshot};

/// Longest prefix of `items` whose elements all satisfy `predicate`
pub fn leading_run<T, F>(items: &[T], mut predicate: F) -> &[T]
where
    F: FnMut(&T) -> bool,
{
    let end = items
        .iter()
        .position(|item| !predicate(item))
        .unwrap_or(items.len());
    &items[..end]
}

/// Panes joined with the active pane along `axis`, in ascending index order.
///
/// The result is the maximal run of index-consecutive panes sharing the
/// active pane's row (horizontal) or column (vertical). Empty when no pane is
/// active.
pub fn resolve_joined(snapshot: &Snapshot, axis: Axis) -> Vec<&Pane> {
    let Some(active) = snapshot.active() else {
        return Vec::new();
    };

    let ascending = snapshot.sorted_by_index();
    let Some(position) = ascending.iter().position(|pane| std::ptr::eq(*pane, active)) else {
        return Vec::new();
    };
    let forward = leading_run(&ascending[position..], |pane| axis.is_aligned(pane, active));

    let mut descending = ascending.clone();
    descending.reverse();
    let position = descending.len() - 1 - position;
    let backward = leading_run(&descending[position..], |pane| axis.is_aligned(pane, active));

    let mut joined: Vec<&Pane> = Vec::with_capacity(forward.len() + backward.len() - 1);
    joined.extend(backward.iter().skip(1).rev());
    joined.push(active);
    joined.extend(forward.iter().skip(1));
    joined
}
