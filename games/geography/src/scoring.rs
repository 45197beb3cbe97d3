//! Distance-to-score banding and the session rating tiers.

use glam::Vec2;
use serde::{Deserialize, Serialize};

const PERFECT_RADIUS: f32 = 0.03;
const CLOSE_RADIUS: f32 = 0.10;
const NEAR_RADIUS: f32 = 0.20;

const EXPLORER_CEILING: u32 = 300;
const NAVIGATOR_CEILING: u32 = 700;

/// Qualitative accuracy tier for one guess.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Band {
    /// Within the perfect radius.
    Perfect,
    /// Within the close radius.
    Close,
    /// Within the near radius.
    Near,
    /// Beyond every scoring radius.
    Miss,
}

impl Band {
    /// Stable lowercase name used in adapter surfaces.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Perfect => "perfect",
            Self::Close => "close",
            Self::Near => "near",
            Self::Miss => "miss",
        }
    }
}

/// Cumulative session rating tier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Rating {
    /// Up to and including 300 points.
    Explorer,
    /// Up to and including 700 points.
    Navigator,
    /// Everything above.
    Master,
}

impl Rating {
    /// Display name of the tier.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Explorer => "Explorer",
            Self::Navigator => "Navigator",
            Self::Master => "Master",
        }
    }
}

/// Points, raw distance, and band for one scored guess.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScoreResult {
    /// Points awarded for the guess.
    pub points: u32,
    /// Euclidean distance between guess and answer in normalized space.
    pub distance: f32,
    /// Qualitative band the distance fell into.
    pub band: Band,
}

/// Euclidean distance between two points in the normalized map space.
///
/// The map is addressed in [0,1] on both axes; aspect-ratio distortion is an
/// accepted approximation and deliberately not corrected.
#[must_use]
pub fn distance(a: Vec2, b: Vec2) -> f32 {
    a.distance(b)
}

/// Scores a guess against the answer location.
///
/// Band thresholds are fixed and inclusive of the lower band: distances of
/// exactly 0.03, 0.10, and 0.20 land in perfect, close, and near
/// respectively.
#[must_use]
pub fn score_guess(guess: Vec2, answer: Vec2) -> ScoreResult {
    let distance = distance(guess, answer);
    let (points, band) = if distance <= PERFECT_RADIUS {
        (100, Band::Perfect)
    } else if distance <= CLOSE_RADIUS {
        (50, Band::Close)
    } else if distance <= NEAR_RADIUS {
        (25, Band::Near)
    } else {
        (0, Band::Miss)
    };

    ScoreResult {
        points,
        distance,
        band,
    }
}

/// Rates a session's cumulative score; tier ceilings are inclusive.
#[must_use]
pub const fn rating(total_score: u32) -> Rating {
    if total_score <= EXPLORER_CEILING {
        Rating::Explorer
    } else if total_score <= NAVIGATOR_CEILING {
        Rating::Navigator
    } else {
        Rating::Master
    }
}
