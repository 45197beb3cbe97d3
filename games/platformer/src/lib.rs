#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Tile-grid platformer physics engine.
//!
//! A theme-scoped content bundle supplies ASCII-authored levels; the engine
//! simulates one run per [`PlatformerState`], mutated in place by
//! [`PlatformerState::update`] each host-driven tick. Collision resolves
//! against static tiles first and moving platforms second, horizontally
//! before vertically, and tile interactions (collectibles, hazards, the goal)
//! are scanned from the player's final overlap each tick.

mod content;
mod engine;
mod level;

pub use content::{content, PlatformerContent};
pub use engine::{
    GameStatus, InputState, Player, PlatformerState, PLAYER_HEIGHT, PLAYER_WIDTH,
};
pub use level::{
    level_from_ascii, LevelDefinition, LevelState, MovingPlatform, MovingPlatformDef,
    PlatformAxis, PlatformId, TileCode, TILE_SIZE,
};
