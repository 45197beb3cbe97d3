//! Theme-scoped circuit puzzle bundles.
//!
//! Every theme reskins the same base level set; the puzzles themselves are
//! theme-independent.

use std::collections::BTreeSet;

use pixel_arcade_core::{GridPos, ThemeId};
use serde::{Deserialize, Serialize};

use crate::level::{NodePair, PuzzleLevel, WireColor};

/// Immutable circuit content bundle for one theme.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CircuitContent {
    theme: ThemeId,
    title: String,
    levels: Vec<PuzzleLevel>,
}

impl CircuitContent {
    /// Theme the bundle belongs to.
    #[must_use]
    pub const fn theme(&self) -> ThemeId {
        self.theme
    }

    /// Display title of the game under this theme.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Puzzle levels in play order.
    #[must_use]
    pub fn levels(&self) -> &[PuzzleLevel] {
        &self.levels
    }
}

/// Returns the circuit content bundle for the provided theme.
#[must_use]
pub fn content(theme: ThemeId) -> CircuitContent {
    let title = match theme {
        ThemeId::Retro => "Chip Fix",
        ThemeId::Futuristic => "Grid Relink",
        ThemeId::Organic => "Root Weaver",
    };
    CircuitContent {
        theme,
        title: title.to_owned(),
        levels: base_levels(),
    }
}

// Blocks every cell of the grid that the predicate does not keep open.
fn blocked_outside(grid_size: u32, open: impl Fn(GridPos) -> bool) -> BTreeSet<GridPos> {
    let mut blocked = BTreeSet::new();
    for row in 0..grid_size {
        for column in 0..grid_size {
            let cell = GridPos::new(row, column);
            if !open(cell) {
                let _ = blocked.insert(cell);
            }
        }
    }
    blocked
}

fn base_levels() -> Vec<PuzzleLevel> {
    vec![
        PuzzleLevel::new(
            5,
            vec![
                NodePair::new(WireColor::Red, GridPos::new(0, 0), GridPos::new(0, 4)),
                NodePair::new(WireColor::Blue, GridPos::new(4, 0), GridPos::new(4, 4)),
            ],
        ),
        PuzzleLevel::new(
            6,
            vec![
                NodePair::new(WireColor::Red, GridPos::new(0, 1), GridPos::new(0, 4)),
                NodePair::new(WireColor::Blue, GridPos::new(5, 1), GridPos::new(5, 4)),
                NodePair::new(WireColor::Yellow, GridPos::new(2, 0), GridPos::new(3, 0)),
            ],
        ),
        PuzzleLevel::new(
            7,
            vec![
                NodePair::new(WireColor::Red, GridPos::new(0, 0), GridPos::new(0, 6)),
                NodePair::new(WireColor::Yellow, GridPos::new(3, 0), GridPos::new(3, 6)),
                NodePair::new(WireColor::Blue, GridPos::new(6, 0), GridPos::new(6, 6)),
            ],
        ),
        // Two sealed corridors that must each be filled end to end.
        PuzzleLevel::with_constraints(
            8,
            vec![
                NodePair::new(WireColor::Red, GridPos::new(1, 0), GridPos::new(1, 7)),
                NodePair::new(WireColor::Blue, GridPos::new(6, 0), GridPos::new(6, 7)),
            ],
            blocked_outside(8, |cell| cell.row() == 1 || cell.row() == 6),
            true,
        ),
        PuzzleLevel::with_constraints(
            9,
            vec![
                NodePair::new(WireColor::Red, GridPos::new(0, 2), GridPos::new(8, 2)),
                NodePair::new(WireColor::Blue, GridPos::new(0, 6), GridPos::new(8, 6)),
            ],
            blocked_outside(9, |cell| cell.column() == 2 || cell.column() == 6),
            true,
        ),
    ]
}
