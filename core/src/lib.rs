#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Shared contracts for the Pixel Arcade game engines.
//!
//! Every mini-game engine in the workspace consumes a theme-scoped content
//! bundle and exposes a small operation set to its presentation layer. This
//! crate holds the pieces those engines share: the closed set of theme
//! identifiers that select content bundles, discrete grid coordinates used by
//! the puzzle and builder games, and the axis-aligned rectangle math used by
//! the continuous platformer simulation.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Closed set of visual/content variants shipped with the arcade.
///
/// Content selection is an exhaustiveness concern: every engine maps each
/// variant to exactly one static bundle, so a missing bundle fails to compile
/// rather than surfacing as a runtime lookup miss.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ThemeId {
    /// Pixel-era presentation and content.
    Retro,
    /// Neon sci-fi presentation and content.
    Futuristic,
    /// Overgrown nature presentation and content.
    Organic,
}

impl ThemeId {
    /// Every theme shipped with the arcade, in canonical order.
    pub const ALL: [ThemeId; 3] = [ThemeId::Retro, ThemeId::Futuristic, ThemeId::Organic];

    /// Stable lowercase identifier used in adapter surfaces.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Retro => "retro",
            Self::Futuristic => "futuristic",
            Self::Organic => "organic",
        }
    }
}

impl fmt::Display for ThemeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error produced when parsing an unknown theme identifier.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("unknown theme `{0}`, expected one of: retro, futuristic, organic")]
pub struct ThemeParseError(String);

impl FromStr for ThemeId {
    type Err = ThemeParseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        ThemeId::ALL
            .into_iter()
            .find(|theme| theme.as_str() == value)
            .ok_or_else(|| ThemeParseError(value.to_owned()))
    }
}

/// Location of a single grid cell expressed as row and column indices.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct GridPos {
    row: u32,
    column: u32,
}

impl GridPos {
    /// Creates a new grid cell coordinate.
    #[must_use]
    pub const fn new(row: u32, column: u32) -> Self {
        Self { row, column }
    }

    /// Zero-based row index of the cell.
    #[must_use]
    pub const fn row(&self) -> u32 {
        self.row
    }

    /// Zero-based column index of the cell.
    #[must_use]
    pub const fn column(&self) -> u32 {
        self.column
    }

    /// Computes the Manhattan distance between two cell coordinates.
    #[must_use]
    pub fn manhattan_distance(self, other: GridPos) -> u32 {
        self.row.abs_diff(other.row) + self.column.abs_diff(other.column)
    }

    /// Reports whether two cells are 4-directionally adjacent.
    #[must_use]
    pub fn is_adjacent_to(self, other: GridPos) -> bool {
        self.manhattan_distance(other) == 1
    }

    /// Reports whether the cell lies inside a grid of the given dimensions.
    #[must_use]
    pub const fn in_bounds(self, rows: u32, columns: u32) -> bool {
        self.row < rows && self.column < columns
    }

    /// Iterator over the in-bounds orthogonal neighbors of the cell.
    ///
    /// Neighbors are yielded north, west, east, south; cells that would fall
    /// outside a `rows` x `columns` grid are skipped.
    #[must_use]
    pub fn orthogonal_neighbors(self, rows: u32, columns: u32) -> NeighborIter {
        let mut neighbors = NeighborIter::default();

        if self.row > 0 {
            neighbors.push(GridPos::new(self.row - 1, self.column));
        }
        if self.column > 0 {
            neighbors.push(GridPos::new(self.row, self.column - 1));
        }
        if self.column + 1 < columns {
            neighbors.push(GridPos::new(self.row, self.column + 1));
        }
        if self.row + 1 < rows {
            neighbors.push(GridPos::new(self.row + 1, self.column));
        }

        neighbors
    }
}

/// Fixed-capacity iterator over the orthogonal neighbors of a cell.
#[derive(Clone, Debug, Default)]
pub struct NeighborIter {
    buffer: [Option<GridPos>; 4],
    len: usize,
    cursor: usize,
}

impl NeighborIter {
    fn push(&mut self, cell: GridPos) {
        if self.len < self.buffer.len() {
            self.buffer[self.len] = Some(cell);
            self.len += 1;
        }
    }
}

impl Iterator for NeighborIter {
    type Item = GridPos;

    fn next(&mut self) -> Option<Self::Item> {
        if self.cursor >= self.len {
            return None;
        }

        let value = self.buffer[self.cursor];
        self.cursor += 1;
        value
    }
}

/// Axis-aligned rectangle expressed in continuous world units.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    x: f32,
    y: f32,
    width: f32,
    height: f32,
}

impl Rect {
    /// Creates a rectangle from its top-left corner and dimensions.
    #[must_use]
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Horizontal position of the left edge.
    #[must_use]
    pub const fn x(&self) -> f32 {
        self.x
    }

    /// Vertical position of the top edge.
    #[must_use]
    pub const fn y(&self) -> f32 {
        self.y
    }

    /// Width of the rectangle in world units.
    #[must_use]
    pub const fn width(&self) -> f32 {
        self.width
    }

    /// Height of the rectangle in world units.
    #[must_use]
    pub const fn height(&self) -> f32 {
        self.height
    }

    /// Horizontal position of the right edge.
    #[must_use]
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    /// Vertical position of the bottom edge.
    #[must_use]
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// Reports whether two rectangles overlap.
    ///
    /// Edges are exclusive: rectangles that merely touch do not overlap.
    #[must_use]
    pub fn overlaps(&self, other: &Rect) -> bool {
        !(self.right() <= other.x
            || self.x >= other.right()
            || self.bottom() <= other.y
            || self.y >= other.bottom())
    }
}
