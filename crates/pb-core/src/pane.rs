// ABOUTME: Pane geometry as reported by tmux.
// ABOUTME: A Snapshot is the immutable list of panes of one window at one point in time.

/// One rectangular tmux pane, sizes and offsets in character cells
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pane {
    /// Stable tmux pane id, e.g. `%3`
    pub id: String,
    /// Position of the pane within its window
    pub index: u32,
    pub width: u32,
    pub height: u32,
    /// Left offset
    pub x: u32,
    /// Top offset
    pub y: u32,
    pub active: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Snapshot {
    panes: Vec<Pane>,
}

impl Snapshot {
    pub fn new(panes: Vec<Pane>) -> Self {
        Self { panes }
    }

    pub fn panes(&self) -> &[Pane] {
        &self.panes
    }

    /// The focused pane. When tmux reports several, the first one listed wins.
    pub fn active(&self) -> Option<&Pane> {
        self.panes.iter().find(|pane| pane.active)
    }

    /// Panes ordered by ascending index
    pub fn sorted_by_index(&self) -> Vec<&Pane> {
        let mut sorted: Vec<&Pane> = self.panes.iter().collect();
        sorted.sort_by_key(|pane| pane.index);
        sorted
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pane(id: &str, index: u32, active: bool) -> Pane {
        Pane {
            id: id.to_string(),
            index,
            width: 80,
            height: 24,
            x: 0,
            y: 0,
            active,
        }
    }

    #[test]
    fn active_finds_focused_pane() {
        let snapshot = Snapshot::new(vec![pane("%0", 0, false), pane("%1", 1, true)]);
        assert_eq!(snapshot.active().map(|p| p.id.as_str()), Some("%1"));
    }

    #[test]
    fn active_is_none_without_focus() {
        let snapshot = Snapshot::new(vec![pane("%0", 0, false)]);
        assert!(snapshot.active().is_none());
        assert!(Snapshot::default().active().is_none());
    }

    #[test]
    fn first_active_pane_wins() {
        let snapshot = Snapshot::new(vec![pane("%4", 0, true), pane("%5", 1, true)]);
        assert_eq!(snapshot.active().map(|p| p.id.as_str()), Some("%4"));
    }

    #[test]
    fn sorted_by_index_ignores_listing_order() {
        let snapshot = Snapshot::new(vec![
            pane("%2", 2, false),
            pane("%0", 0, false),
            pane("%1", 1, true),
        ]);
        let indices: Vec<u32> = snapshot.sorted_by_index().iter().map(|p| p.index).collect();
        assert_eq!(indices, vec![0, 1, 2]);
        // listing order is left untouched
        assert_eq!(snapshot.panes()[0].index, 2);
    }
}
