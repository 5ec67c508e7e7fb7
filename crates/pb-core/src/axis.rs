// ABOUTME: Balancing axis shared by the resolver and the balancer.
// ABOUTME: Horizontal balances widths of a row, vertical balances heights of a column.

use std::fmt;

use crate::Pane;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Panes sharing a row (same `y`), balanced by width
    Horizontal,
    /// Panes sharing a column (same `x`), balanced by height
    Vertical,
}

impl Axis {
    pub const ALL: [Axis; 2] = [Axis::Horizontal, Axis::Vertical];

    /// Coordinate that must match for two panes to be aligned on this axis
    pub fn alignment(self, pane: &Pane) -> u32 {
        match self {
            Axis::Horizontal => pane.y,
            Axis::Vertical => pane.x,
        }
    }

    /// Dimension that gets balanced along this axis
    pub fn extent(self, pane: &Pane) -> u32 {
        match self {
            Axis::Horizontal => pane.width,
            Axis::Vertical => pane.height,
        }
    }

    pub fn is_aligned(self, a: &Pane, b: &Pane) -> bool {
        self.alignment(a) == self.alignment(b)
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::Horizontal => f.write_str("horizontal"),
            Axis::Vertical => f.write_str("vertical"),
        }
    }
}
