//! Interactive path-drawing state machine.
//!
//! Presentation translates pointer events into cell coordinates and forwards
//! them here; the drawer maintains the in-progress path and commits it into
//! the caller's [`PathMap`] only when it completes its node pair. Invalid
//! moves are silently ignored.

use pixel_arcade_core::GridPos;

use crate::level::{build_node_map, PathMap, PuzzleLevel, WireColor};
use crate::validation::is_path_complete;

/// In-progress drawing over one level's path map.
#[derive(Clone, Debug, Default)]
pub struct PathDrawer {
    active: Vec<GridPos>,
    color: Option<WireColor>,
}

impl PathDrawer {
    /// Creates an idle drawer with no active path.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Cells of the in-progress path, in draw order.
    #[must_use]
    pub fn active_path(&self) -> &[GridPos] {
        &self.active
    }

    /// Color of the in-progress path, if drawing.
    #[must_use]
    pub const fn active_color(&self) -> Option<WireColor> {
        self.color
    }

    /// Handles pointer-down on a cell.
    ///
    /// Pressing a cell of a committed path clears that color's path so it can
    /// be redrawn. Pressing a node cell additionally displaces any committed
    /// path of the node's own color and seeds a new active path there.
    /// Pressing anywhere else just cancels the active path.
    pub fn pointer_down(&mut self, level: &PuzzleLevel, paths: &mut PathMap, cell: GridPos) {
        let occupant = paths
            .iter()
            .find_map(|(&color, path)| path.contains(&cell).then_some(color));
        if let Some(color) = occupant {
            let _ = paths.remove(&color);
        }

        let node_map = build_node_map(level);
        if let Some(node) = node_map.get(&cell) {
            let _ = paths.remove(&node.color);
            self.active = vec![cell];
            self.color = Some(node.color);
            return;
        }

        self.active.clear();
        self.color = None;
    }

    /// Handles pointer-move onto a cell.
    ///
    /// Moving back onto the second-to-last cell pops the tail
    /// (undo-by-retrace); otherwise the path extends only onto an adjacent,
    /// in-bounds, unblocked cell that is neither a foreign node, occupied by
    /// a foreign committed path, nor already part of the active path.
    pub fn pointer_move(&mut self, level: &PuzzleLevel, paths: &PathMap, cell: GridPos) {
        let Some(color) = self.color else {
            return;
        };
        let Some(&last) = self.active.last() else {
            return;
        };
        if last == cell {
            return;
        }

        if self.active.len() >= 2 && self.active[self.active.len() - 2] == cell {
            let _ = self.active.pop();
            return;
        }

        if !last.is_adjacent_to(cell) {
            return;
        }
        if !level.contains(cell) || level.is_blocked(cell) {
            return;
        }

        let node_map = build_node_map(level);
        if let Some(node) = node_map.get(&cell) {
            if node.color != color {
                return;
            }
        }
        if paths
            .iter()
            .any(|(&other, path)| other != color && path.contains(&cell))
        {
            return;
        }
        if self.active.contains(&cell) {
            return;
        }

        self.active.push(cell);
    }

    /// Handles pointer-up.
    ///
    /// The active path commits into the map only if it completes its node
    /// pair; otherwise it is discarded. Either way drawing ends.
    pub fn pointer_up(&mut self, level: &PuzzleLevel, paths: &mut PathMap) {
        if let Some(color) = self.color {
            if !self.active.is_empty() && is_path_complete(&self.active, level, color) {
                let _ = paths.insert(color, std::mem::take(&mut self.active));
            }
        }
        self.active.clear();
        self.color = None;
    }
}
