//! Puzzle level data: node pairs, blocked cells, and the drawn path map.

use std::collections::{BTreeMap, BTreeSet, HashMap};

use pixel_arcade_core::GridPos;
use serde::{Deserialize, Serialize};

/// Closed set of wire colors a puzzle may declare.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub enum WireColor {
    /// Red wire.
    Red,
    /// Blue wire.
    Blue,
    /// Yellow wire.
    Yellow,
    /// Green wire.
    Green,
}

impl WireColor {
    /// Stable lowercase name used in adapter surfaces.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Red => "red",
            Self::Blue => "blue",
            Self::Yellow => "yellow",
            Self::Green => "green",
        }
    }
}

/// Declared source/target cell pair sharing a color, to be connected by a
/// drawn path.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodePair {
    color: WireColor,
    source: GridPos,
    target: GridPos,
}

impl NodePair {
    /// Creates a new node pair.
    #[must_use]
    pub const fn new(color: WireColor, source: GridPos, target: GridPos) -> Self {
        Self {
            color,
            source,
            target,
        }
    }

    /// Color shared by both endpoints.
    #[must_use]
    pub const fn color(&self) -> WireColor {
        self.color
    }

    /// Cell holding the pair's source node.
    #[must_use]
    pub const fn source(&self) -> GridPos {
        self.source
    }

    /// Cell holding the pair's target node.
    #[must_use]
    pub const fn target(&self) -> GridPos {
        self.target
    }
}

/// Immutable puzzle description: a square grid, declared node pairs, blocked
/// cells, and an optional fill-every-open-cell requirement.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PuzzleLevel {
    grid_size: u32,
    nodes: Vec<NodePair>,
    blocked_cells: BTreeSet<GridPos>,
    requires_full_coverage: bool,
}

impl PuzzleLevel {
    /// Creates a plain connect-the-pairs level with no blocked cells.
    #[must_use]
    pub fn new(grid_size: u32, nodes: Vec<NodePair>) -> Self {
        Self {
            grid_size,
            nodes,
            blocked_cells: BTreeSet::new(),
            requires_full_coverage: false,
        }
    }

    /// Creates a level with blocked cells and an explicit coverage policy.
    #[must_use]
    pub fn with_constraints(
        grid_size: u32,
        nodes: Vec<NodePair>,
        blocked_cells: BTreeSet<GridPos>,
        requires_full_coverage: bool,
    ) -> Self {
        Self {
            grid_size,
            nodes,
            blocked_cells,
            requires_full_coverage,
        }
    }

    /// Side length of the square grid in cells.
    #[must_use]
    pub const fn grid_size(&self) -> u32 {
        self.grid_size
    }

    /// Node pairs in declaration order.
    #[must_use]
    pub fn nodes(&self) -> &[NodePair] {
        &self.nodes
    }

    /// Cells no path may enter.
    #[must_use]
    pub const fn blocked_cells(&self) -> &BTreeSet<GridPos> {
        &self.blocked_cells
    }

    /// Whether a solution must visit every non-blocked cell.
    #[must_use]
    pub const fn requires_full_coverage(&self) -> bool {
        self.requires_full_coverage
    }

    /// Reports whether the cell is in the blocked set.
    #[must_use]
    pub fn is_blocked(&self, cell: GridPos) -> bool {
        self.blocked_cells.contains(&cell)
    }

    /// Reports whether the cell lies on the grid.
    #[must_use]
    pub const fn contains(&self, cell: GridPos) -> bool {
        cell.in_bounds(self.grid_size, self.grid_size)
    }
}

/// Mapping from wire color to its drawn path, built incrementally by the
/// player. Ordered so iteration stays deterministic.
pub type PathMap = BTreeMap<WireColor, Vec<GridPos>>;

/// Role a node cell plays within its pair.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NodeRole {
    /// The pair's declared source cell.
    Source,
    /// The pair's declared target cell.
    Target,
}

/// Color and role of a declared node cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeRef {
    /// Color of the owning pair.
    pub color: WireColor,
    /// Which endpoint of the pair the cell is.
    pub role: NodeRole,
}

/// Indexes every declared node cell of the level by its grid position.
#[must_use]
pub fn build_node_map(level: &PuzzleLevel) -> HashMap<GridPos, NodeRef> {
    let mut map = HashMap::new();
    for pair in level.nodes() {
        let _ = map.insert(
            pair.source(),
            NodeRef {
                color: pair.color(),
                role: NodeRole::Source,
            },
        );
        let _ = map.insert(
            pair.target(),
            NodeRef {
                color: pair.color(),
                role: NodeRole::Target,
            },
        );
    }
    map
}

#[cfg(test)]
mod tests {
    use super::{build_node_map, NodePair, NodeRole, PuzzleLevel, WireColor};
    use pixel_arcade_core::GridPos;

    #[test]
    fn node_map_indexes_both_endpoints() {
        let level = PuzzleLevel::new(
            5,
            vec![NodePair::new(
                WireColor::Red,
                GridPos::new(0, 0),
                GridPos::new(0, 4),
            )],
        );

        let map = build_node_map(&level);
        assert_eq!(map.len(), 2);
        assert_eq!(map[&GridPos::new(0, 0)].role, NodeRole::Source);
        assert_eq!(map[&GridPos::new(0, 4)].role, NodeRole::Target);
        assert_eq!(map[&GridPos::new(0, 4)].color, WireColor::Red);
    }

    #[test]
    fn blocked_and_bounds_checks() {
        let mut blocked = std::collections::BTreeSet::new();
        let _ = blocked.insert(GridPos::new(1, 1));
        let level = PuzzleLevel::with_constraints(3, Vec::new(), blocked, false);

        assert!(level.is_blocked(GridPos::new(1, 1)));
        assert!(!level.is_blocked(GridPos::new(0, 0)));
        assert!(level.contains(GridPos::new(2, 2)));
        assert!(!level.contains(GridPos::new(3, 0)));
    }
}
