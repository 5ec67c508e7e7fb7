// ABOUTME: Resize directives produced by the balancer.
// ABOUTME: Each command sets exactly one dimension of one pane.

use crate::{Axis, Pane};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResizeCommand {
    Width { id: String, index: u32, width: u32 },
    Height { id: String, index: u32, height: u32 },
}

impl ResizeCommand {
    /// Command setting `pane`'s dimension along `axis` to `size`
    pub fn for_axis(pane: &Pane, axis: Axis, size: u32) -> Self {
        let id = pane.id.clone();
        let index = pane.index;
        match axis {
            Axis::Horizontal => ResizeCommand::Width {
                id,
                index,
                width: size,
            },
            Axis::Vertical => ResizeCommand::Height {
                id,
                index,
                height: size,
            },
        }
    }

    pub fn id(&self) -> &str {
        match self {
            ResizeCommand::Width { id, .. } | ResizeCommand::Height { id, .. } => id,
        }
    }

    pub fn index(&self) -> u32 {
        match self {
            ResizeCommand::Width { index, .. } | ResizeCommand::Height { index, .. } => *index,
        }
    }

    pub fn axis(&self) -> Axis {
        match self {
            ResizeCommand::Width { .. } => Axis::Horizontal,
            ResizeCommand::Height { .. } => Axis::Vertical,
        }
    }

    /// Target size in cells
    pub fn size(&self) -> u32 {
        match self {
            ResizeCommand::Width { width, .. } => *width,
            ResizeCommand::Height { height, .. } => *height,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pane() -> Pane {
        Pane {
            id: "%7".to_string(),
            index: 3,
            width: 50,
            height: 20,
            x: 0,
            y: 0,
            active: true,
        }
    }

    #[test]
    fn horizontal_produces_width_command() {
        let cmd = ResizeCommand::for_axis(&pane(), Axis::Horizontal, 42);
        assert_eq!(
            cmd,
            ResizeCommand::Width {
                id: "%7".to_string(),
                index: 3,
                width: 42
            }
        );
        assert_eq!(cmd.axis(), Axis::Horizontal);
    }

    #[test]
    fn vertical_produces_height_command() {
        let cmd = ResizeCommand::for_axis(&pane(), Axis::Vertical, 11);
        assert_eq!(cmd.id(), "%7");
        assert_eq!(cmd.index(), 3);
        assert_eq!(cmd.size(), 11);
        assert_eq!(cmd.axis(), Axis::Vertical);
    }
}
