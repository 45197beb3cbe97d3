//! Theme-scoped level bundles for the platformer.

use pixel_arcade_core::ThemeId;
use serde::{Deserialize, Serialize};

use crate::level::{level_from_ascii, LevelDefinition, MovingPlatformDef, PlatformAxis};

/// Immutable platformer content bundle for one theme.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlatformerContent {
    theme: ThemeId,
    levels: Vec<LevelDefinition>,
}

impl PlatformerContent {
    /// Creates a bundle from explicit levels.
    ///
    /// Bundles must hold at least one level; the shipped themes do, and
    /// harness-built bundles are expected to as well.
    #[must_use]
    pub fn new(theme: ThemeId, levels: Vec<LevelDefinition>) -> Self {
        Self { theme, levels }
    }

    /// Theme the bundle belongs to.
    #[must_use]
    pub const fn theme(&self) -> ThemeId {
        self.theme
    }

    /// Levels in play order.
    #[must_use]
    pub fn levels(&self) -> &[LevelDefinition] {
        &self.levels
    }
}

/// Returns the platformer content bundle for the provided theme.
#[must_use]
pub fn content(theme: ThemeId) -> PlatformerContent {
    match theme {
        ThemeId::Retro => retro(),
        ThemeId::Futuristic => futuristic(),
        ThemeId::Organic => organic(),
    }
}

fn retro() -> PlatformerContent {
    PlatformerContent::new(
        ThemeId::Retro,
        vec![
            level_from_ascii(
                "cartridge-caves",
                &[
                    "................",
                    "................",
                    "......C.........",
                    "....#####.......",
                    "..............C.",
                    "............####",
                    "...C............",
                    ".S#....H......G.",
                    "################",
                ],
                Vec::new(),
            ),
            level_from_ascii(
                "slime-crossing",
                &[
                    "................",
                    "................",
                    "..C.........C...",
                    ".###.......###..",
                    "................",
                    "................",
                    "................",
                    ".S...........G..",
                    "###HHHHHHHH#####",
                ],
                vec![MovingPlatformDef {
                    x: 3.0,
                    y: 6.0,
                    width: 3.0,
                    height: 0.5,
                    axis: PlatformAxis::Horizontal,
                    min: 3.0,
                    max: 9.0,
                    speed: 1.5,
                }],
            ),
        ],
    )
}

fn futuristic() -> PlatformerContent {
    PlatformerContent::new(
        ThemeId::Futuristic,
        vec![
            level_from_ascii(
                "neon-catwalks",
                &[
                    "................",
                    "................",
                    "....C......C....",
                    "...###....###...",
                    "................",
                    "........C.......",
                    ".......###......",
                    ".S....H......G..",
                    "################",
                ],
                Vec::new(),
            ),
            level_from_ascii(
                "reactor-shaft",
                &[
                    "................",
                    ".............C..",
                    "............###.",
                    "................",
                    "..C.............",
                    ".###............",
                    "................",
                    ".S..........G...",
                    "#####HHHHH######",
                ],
                vec![MovingPlatformDef {
                    x: 7.0,
                    y: 6.0,
                    width: 2.0,
                    height: 0.5,
                    axis: PlatformAxis::Vertical,
                    min: 3.0,
                    max: 6.5,
                    speed: 1.2,
                }],
            ),
        ],
    )
}

fn organic() -> PlatformerContent {
    PlatformerContent::new(
        ThemeId::Organic,
        vec![
            level_from_ascii(
                "mossy-hollow",
                &[
                    "................",
                    "................",
                    "..C......C......",
                    ".###....###.....",
                    "................",
                    "...........C....",
                    "..........###...",
                    ".S...H.......G..",
                    "################",
                ],
                Vec::new(),
            ),
            level_from_ascii(
                "thorn-gulch",
                &[
                    "................",
                    "................",
                    ".C..........C...",
                    "###........###..",
                    "................",
                    "................",
                    "................",
                    ".S..........G...",
                    "##HHHHHHHHH#####",
                ],
                vec![MovingPlatformDef {
                    x: 2.0,
                    y: 6.0,
                    width: 3.0,
                    height: 0.5,
                    axis: PlatformAxis::Horizontal,
                    min: 2.0,
                    max: 8.0,
                    speed: 2.0,
                }],
            ),
        ],
    )
}
