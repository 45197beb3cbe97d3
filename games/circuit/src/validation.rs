//! Path legality and level completion rules.

use std::collections::{HashMap, HashSet};

use pixel_arcade_core::GridPos;

use crate::level::{build_node_map, PathMap, PuzzleLevel, WireColor};

/// Reports whether every consecutive pair of cells is 4-directionally
/// adjacent. Necessary but not sufficient for global validity.
#[must_use]
pub fn is_path_contiguous(path: &[GridPos]) -> bool {
    if path.is_empty() {
        return false;
    }
    path.windows(2).all(|pair| pair[0].is_adjacent_to(pair[1]))
}

/// Reports whether the path connects its color's declared node pair.
///
/// The connection is undirected: the path may run source-to-target or
/// target-to-source.
#[must_use]
pub fn is_path_complete(path: &[GridPos], level: &PuzzleLevel, color: WireColor) -> bool {
    let Some(pair) = level.nodes().iter().find(|node| node.color() == color) else {
        return false;
    };
    if path.len() < 2 {
        return false;
    }

    let start = path[0];
    let end = path[path.len() - 1];
    (start == pair.source() && end == pair.target())
        || (start == pair.target() && end == pair.source())
}

/// Validates the whole path map against the level: pass/fail, no partial
/// results.
///
/// Every color's path must be contiguous, and every cell must be in-bounds,
/// unblocked, not a foreign-colored node cell, and not claimed by a different
/// color. A color revisiting its own cell is not separately rejected here;
/// only cross-color collisions are.
#[must_use]
pub fn validate_paths(level: &PuzzleLevel, paths: &PathMap) -> bool {
    let node_map = build_node_map(level);
    let mut occupied: HashMap<GridPos, WireColor> = HashMap::new();

    for (&color, path) in paths {
        if !is_path_contiguous(path) {
            return false;
        }

        for &cell in path {
            if !level.contains(cell) {
                return false;
            }
            if level.is_blocked(cell) {
                return false;
            }
            if let Some(node) = node_map.get(&cell) {
                if node.color != color {
                    return false;
                }
            }
            if let Some(existing) = occupied.insert(cell, color) {
                if existing != color {
                    return false;
                }
            }
        }
    }

    true
}

/// Reports whether the path map solves the level.
///
/// The map must validate, every declared pair must have a complete path, and
/// full-coverage levels additionally require the union of visited cells to
/// equal exactly every non-blocked cell.
#[must_use]
pub fn is_level_complete(level: &PuzzleLevel, paths: &PathMap) -> bool {
    if !validate_paths(level, paths) {
        return false;
    }

    for pair in level.nodes() {
        let Some(path) = paths.get(&pair.color()) else {
            return false;
        };
        if !is_path_complete(path, level, pair.color()) {
            return false;
        }
    }

    if level.requires_full_coverage() {
        let open_cells =
            (level.grid_size() as usize).pow(2) - level.blocked_cells().len();
        let mut visited: HashSet<GridPos> = HashSet::new();
        for path in paths.values() {
            for &cell in path {
                let _ = visited.insert(cell);
            }
        }
        if visited.len() != open_cells {
            return false;
        }
    }

    true
}

#[cfg(test)]
mod tests {
    use super::{is_level_complete, is_path_complete, is_path_contiguous, validate_paths};
    use crate::level::{NodePair, PathMap, PuzzleLevel, WireColor};
    use pixel_arcade_core::GridPos;

    fn cross_level() -> PuzzleLevel {
        PuzzleLevel::new(
            3,
            vec![
                NodePair::new(WireColor::Red, GridPos::new(0, 1), GridPos::new(2, 1)),
                NodePair::new(WireColor::Blue, GridPos::new(1, 0), GridPos::new(1, 2)),
            ],
        )
    }

    fn path(cells: &[(u32, u32)]) -> Vec<GridPos> {
        cells.iter().map(|&(r, c)| GridPos::new(r, c)).collect()
    }

    #[test]
    fn contiguity_requires_adjacent_steps() {
        assert!(is_path_contiguous(&path(&[(0, 0), (0, 1), (1, 1)])));
        assert!(!is_path_contiguous(&path(&[(0, 0), (1, 1)])));
        assert!(!is_path_contiguous(&[]));
        assert!(is_path_contiguous(&path(&[(2, 2)])), "a lone cell is contiguous");
    }

    #[test]
    fn completion_accepts_either_direction() {
        let level = cross_level();
        let forward = path(&[(0, 1), (1, 1), (2, 1)]);
        let backward = path(&[(2, 1), (1, 1), (0, 1)]);

        assert!(is_path_complete(&forward, &level, WireColor::Red));
        assert!(is_path_complete(&backward, &level, WireColor::Red));
        assert!(!is_path_complete(&forward, &level, WireColor::Blue));
        assert!(!is_path_complete(&path(&[(0, 1)]), &level, WireColor::Red));
    }

    #[test]
    fn completion_rejects_undeclared_colors() {
        let level = cross_level();
        let any = path(&[(0, 1), (1, 1), (2, 1)]);
        assert!(!is_path_complete(&any, &level, WireColor::Green));
    }

    #[test]
    fn crossing_paths_are_rejected() {
        let level = cross_level();
        let mut paths = PathMap::new();
        let _ = paths.insert(WireColor::Red, path(&[(0, 1), (1, 1), (2, 1)]));
        let _ = paths.insert(WireColor::Blue, path(&[(1, 0), (1, 1), (1, 2)]));

        assert!(!validate_paths(&level, &paths));
    }

    #[test]
    fn foreign_node_cells_are_impassable() {
        let level = cross_level();
        let mut paths = PathMap::new();
        // Red detours through blue's source cell at (1,0).
        let _ = paths.insert(
            WireColor::Red,
            path(&[(0, 1), (0, 0), (1, 0), (2, 0), (2, 1)]),
        );

        assert!(!validate_paths(&level, &paths));
    }

    #[test]
    fn out_of_bounds_and_blocked_cells_are_rejected() {
        let mut blocked = std::collections::BTreeSet::new();
        let _ = blocked.insert(GridPos::new(1, 1));
        let level = PuzzleLevel::with_constraints(
            3,
            vec![NodePair::new(
                WireColor::Red,
                GridPos::new(0, 0),
                GridPos::new(2, 2),
            )],
            blocked,
            false,
        );

        let mut through_block = PathMap::new();
        let _ = through_block.insert(
            WireColor::Red,
            path(&[(0, 0), (0, 1), (1, 1), (2, 1), (2, 2)]),
        );
        assert!(!validate_paths(&level, &through_block));

        let mut escaping = PathMap::new();
        let _ = escaping.insert(WireColor::Red, path(&[(0, 0), (0, 1), (0, 2), (0, 3)]));
        assert!(!validate_paths(&level, &escaping));
    }

    #[test]
    fn completion_requires_every_declared_pair() {
        let level = cross_level();
        let mut paths = PathMap::new();
        let _ = paths.insert(WireColor::Red, path(&[(0, 1), (0, 0), (1, 0)]));

        // Red's path is legal on its own but ends on blue's node; the map
        // neither validates nor completes.
        assert!(!is_level_complete(&level, &paths));
    }

    #[test]
    fn full_coverage_counts_every_open_cell() {
        let level = PuzzleLevel::with_constraints(
            2,
            vec![NodePair::new(
                WireColor::Red,
                GridPos::new(0, 0),
                GridPos::new(0, 1),
            )],
            std::collections::BTreeSet::new(),
            true,
        );

        let mut direct = PathMap::new();
        let _ = direct.insert(WireColor::Red, path(&[(0, 0), (0, 1)]));
        assert!(
            !is_level_complete(&level, &direct),
            "a two-cell path cannot cover a four-cell grid",
        );

        let mut tour = PathMap::new();
        let _ = tour.insert(WireColor::Red, path(&[(0, 0), (1, 0), (1, 1), (0, 1)]));
        assert!(is_level_complete(&level, &tour));
    }
}
