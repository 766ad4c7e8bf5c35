//! Arrangement of map panels within a figure.

use serde::{Deserialize, Serialize};

/// A rows x columns panel grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PanelLayout {
    pub rows: usize,
    pub cols: usize,
}

impl PanelLayout {
    /// Layout for a given number of panels: one row, except four panels
    /// which are drawn 2x2.
    pub fn for_panel_count(panel_count: usize) -> Option<Self> {
        let (rows, cols) = match panel_count {
            1 => (1, 1),
            2 => (1, 2),
            3 => (1, 3),
            4 => (2, 2),
            5 => (1, 5),
            _ => return None,
        };
        Some(Self { rows, cols })
    }

    pub fn cells(&self) -> usize {
        self.rows * self.cols
    }

    /// (row, col) of the panel at `position`, filling rows left to right.
    pub fn cell(&self, position: usize) -> Option<(usize, usize)> {
        (position < self.cells()).then(|| (position / self.cols, position % self.cols))
    }
}
