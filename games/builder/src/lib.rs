#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Grid placement builder with budget accounting and adjacency scoring.
//!
//! Placement and removal are atomic, budget-conserving operations: the
//! remaining budget plus the cost of everything placed always equals the
//! starting budget, and an operation that would overdraw rejects without
//! touching anything. Scoring decomposes into a base sum and directed
//! adjacency bonuses with a per-rule breakdown for the UI.

mod content;
mod grid;
mod scoring;

pub use content::{content, AdjacencyRule, BuilderContent, BuilderItem};
pub use grid::{
    items_by_id, place_item, remove_item, BuilderGrid, BuilderState, GridOutcome, ItemsById,
    Tool, GRID_SIZE, STARTING_BUDGET,
};
pub use scoring::{calculate_score, RuleBreakdown, ScoreBreakdown};
