#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Geography distance-scoring engine.
//!
//! Guesses and answers live in a normalized [0,1] x [0,1] map space; a guess
//! scores by Euclidean distance through fixed inclusive bands, and a
//! session's cumulative total maps onto a rating tier. Content bundles supply
//! the per-theme locations; round sequencing and result history belong to
//! the presentation layer.

mod content;
mod scoring;

pub use content::{content, GeoContent, GeoLocation};
pub use scoring::{distance, rating, score_guess, Band, Rating, ScoreResult};
