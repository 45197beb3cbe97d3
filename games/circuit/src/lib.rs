#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Grid path-drawing puzzle validator.
//!
//! A puzzle declares colored node pairs on a square grid; the player draws
//! one path per color connecting its pair. Validation is checked on demand
//! over the whole path map: paths must stay contiguous, in-bounds,
//! unblocked, off foreign nodes, and mutually exclusive in space, and
//! full-coverage levels additionally require every open cell to be visited.
//! A breadth-first reference solver routes pairs in declaration order for
//! tests and auto-complete checks.

mod content;
mod drawing;
mod level;
mod solver;
mod validation;

pub use content::{content, CircuitContent};
pub use drawing::PathDrawer;
pub use level::{build_node_map, NodePair, NodeRef, NodeRole, PathMap, PuzzleLevel, WireColor};
pub use solver::solve_level;
pub use validation::{is_level_complete, is_path_complete, is_path_contiguous, validate_paths};
