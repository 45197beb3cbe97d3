#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Branching-narrative state machine.
//!
//! Scenes form a directed, possibly cyclic graph keyed by id; choices are
//! labeled edges that may be gated on a held item and may grant one. Run
//! status is never stored independently of the graph: it mirrors the ending
//! tag of the current scene. All operations are pure and return new states;
//! only a scene id missing from content fails hard, since that is a bug in
//! the static bundle rather than a bad interaction.

mod content;
mod engine;
mod types;

pub use content::content;
pub use engine::{
    create_initial_state, current_scene, is_choice_available, make_choice, scene_by_id,
    ContentError, FictionState, FictionStatus, MAX_INVENTORY,
};
pub use types::{Choice, Ending, FictionContent, Scene};
