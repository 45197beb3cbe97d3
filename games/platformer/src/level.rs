//! Static level data and the mutable per-run level state built from it.

use pixel_arcade_core::GridPos;
use serde::{Deserialize, Serialize};

/// Side length of a square tile expressed in world units.
pub const TILE_SIZE: f32 = 32.0;

/// Enumerated cell classification in a level's tile grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TileCode {
    /// Empty space the player passes through.
    Air,
    /// Solid terrain.
    Ground,
    /// One-time pickup worth points; consumed to [`TileCode::Air`].
    Collectible,
    /// Damaging cell that costs a life on contact.
    Hazard,
    /// Level exit; contact completes the level.
    Goal,
    /// Solid decorative terrain distinct from ground.
    Platform,
}

impl TileCode {
    /// Reports whether the tile blocks player movement.
    #[must_use]
    pub const fn is_solid(self) -> bool {
        matches!(self, Self::Ground | Self::Platform)
    }
}

/// Axis a moving platform oscillates along.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlatformAxis {
    /// Oscillation along the x axis.
    Horizontal,
    /// Oscillation along the y axis.
    Vertical,
}

/// Unique identifier assigned to a moving platform within a level.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PlatformId(u32);

impl PlatformId {
    /// Creates a new platform identifier with the provided numeric value.
    #[must_use]
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Retrieves the numeric representation of the identifier.
    #[must_use]
    pub const fn get(&self) -> u32 {
        self.0
    }
}

/// Authored description of a moving platform, measured in tile units.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct MovingPlatformDef {
    /// Initial horizontal position in tiles.
    pub x: f32,
    /// Initial vertical position in tiles.
    pub y: f32,
    /// Platform width in tiles.
    pub width: f32,
    /// Platform height in tiles.
    pub height: f32,
    /// Axis the platform oscillates along.
    pub axis: PlatformAxis,
    /// Lower oscillation bound along the axis, in tiles.
    pub min: f32,
    /// Upper oscillation bound along the axis, in tiles.
    pub max: f32,
    /// Oscillation speed in tiles per second.
    pub speed: f32,
}

/// Moving platform instantiated into world units for simulation.
#[derive(Clone, Debug)]
pub struct MovingPlatform {
    id: PlatformId,
    pub(crate) x: f32,
    pub(crate) y: f32,
    width: f32,
    height: f32,
    axis: PlatformAxis,
    min: f32,
    max: f32,
    pub(crate) vx: f32,
    pub(crate) vy: f32,
    pub(crate) dx: f32,
    pub(crate) dy: f32,
}

impl MovingPlatform {
    fn from_def(index: u32, def: &MovingPlatformDef) -> Self {
        let speed = def.speed * TILE_SIZE;
        Self {
            id: PlatformId::new(index),
            x: def.x * TILE_SIZE,
            y: def.y * TILE_SIZE,
            width: def.width * TILE_SIZE,
            height: def.height * TILE_SIZE,
            axis: def.axis,
            min: def.min * TILE_SIZE,
            max: def.max * TILE_SIZE,
            vx: match def.axis {
                PlatformAxis::Horizontal => speed,
                PlatformAxis::Vertical => 0.0,
            },
            vy: match def.axis {
                PlatformAxis::Horizontal => 0.0,
                PlatformAxis::Vertical => speed,
            },
            dx: 0.0,
            dy: 0.0,
        }
    }

    /// Identifier assigned to the platform within its level.
    #[must_use]
    pub const fn id(&self) -> PlatformId {
        self.id
    }

    /// Current horizontal position in world units.
    #[must_use]
    pub const fn x(&self) -> f32 {
        self.x
    }

    /// Current vertical position in world units.
    #[must_use]
    pub const fn y(&self) -> f32 {
        self.y
    }

    /// Platform width in world units.
    #[must_use]
    pub const fn width(&self) -> f32 {
        self.width
    }

    /// Platform height in world units.
    #[must_use]
    pub const fn height(&self) -> f32 {
        self.height
    }

    /// Displacement applied during the most recent tick.
    #[must_use]
    pub const fn displacement(&self) -> (f32, f32) {
        (self.dx, self.dy)
    }

    /// Advances the oscillation by `dt` seconds, recording the displacement.
    ///
    /// Overshooting either bound clamps the position and inverts the velocity
    /// sign, producing an elastic bounce at the endpoints.
    pub(crate) fn advance(&mut self, dt: f32) {
        let prev_x = self.x;
        let prev_y = self.y;

        match self.axis {
            PlatformAxis::Horizontal => {
                self.x += self.vx * dt;
                if self.x < self.min || self.x > self.max {
                    self.vx = -self.vx;
                    self.x = self.x.clamp(self.min, self.max);
                }
            }
            PlatformAxis::Vertical => {
                self.y += self.vy * dt;
                if self.y < self.min || self.y > self.max {
                    self.vy = -self.vy;
                    self.y = self.y.clamp(self.min, self.max);
                }
            }
        }

        self.dx = self.x - prev_x;
        self.dy = self.y - prev_y;
    }
}

/// Authored level description, immutable per theme bundle.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LevelDefinition {
    id: String,
    tiles: Vec<Vec<TileCode>>,
    spawn: GridPos,
    platforms: Vec<MovingPlatformDef>,
}

impl LevelDefinition {
    /// Stable identifier of the level within its bundle.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Tile rows composing the level, top to bottom.
    #[must_use]
    pub fn tiles(&self) -> &[Vec<TileCode>] {
        &self.tiles
    }

    /// Tile cell the player spawns in.
    #[must_use]
    pub const fn spawn(&self) -> GridPos {
        self.spawn
    }

    /// Moving platform definitions authored for the level.
    #[must_use]
    pub fn platforms(&self) -> &[MovingPlatformDef] {
        &self.platforms
    }
}

/// Parses an ASCII sketch into a level definition.
///
/// Symbols: `.` air, `#` ground, `C` collectible, `H` hazard, `G` goal,
/// `P` platform terrain. `S` marks the spawn cell and reads as air. Short
/// rows are right-padded with air; unknown symbols read as air. Levels
/// without an `S` spawn at row 1, column 1.
#[must_use]
pub fn level_from_ascii(id: &str, lines: &[&str], platforms: Vec<MovingPlatformDef>) -> LevelDefinition {
    let columns = lines.iter().map(|line| line.chars().count()).max().unwrap_or(0);
    let mut tiles = Vec::with_capacity(lines.len());
    let mut spawn = None;

    for (row, line) in lines.iter().enumerate() {
        let mut cells = Vec::with_capacity(columns);
        for (column, symbol) in line.chars().enumerate() {
            if symbol == 'S' {
                spawn = Some(GridPos::new(row as u32, column as u32));
            }
            cells.push(match symbol {
                '#' => TileCode::Ground,
                'C' => TileCode::Collectible,
                'H' => TileCode::Hazard,
                'G' => TileCode::Goal,
                'P' => TileCode::Platform,
                _ => TileCode::Air,
            });
        }
        cells.resize(columns, TileCode::Air);
        tiles.push(cells);
    }

    LevelDefinition {
        id: id.to_owned(),
        tiles,
        spawn: spawn.unwrap_or(GridPos::new(1, 1)),
        platforms,
    }
}

/// Per-run level state: tiles plus instantiated moving platforms.
///
/// Tiles are mutable only in one direction, a consumed [`TileCode::Collectible`]
/// becomes [`TileCode::Air`].
#[derive(Clone, Debug)]
pub struct LevelState {
    tiles: Vec<Vec<TileCode>>,
    columns: u32,
    rows: u32,
    spawn: GridPos,
    platforms: Vec<MovingPlatform>,
}

impl LevelState {
    /// Instantiates a fresh run of the provided level definition.
    #[must_use]
    pub fn build(def: &LevelDefinition) -> Self {
        let tiles = def.tiles.clone();
        let columns = tiles.first().map_or(0, Vec::len) as u32;
        let rows = tiles.len() as u32;
        let platforms = def
            .platforms
            .iter()
            .enumerate()
            .map(|(index, platform)| MovingPlatform::from_def(index as u32, platform))
            .collect();

        Self {
            tiles,
            columns,
            rows,
            spawn: def.spawn,
            platforms,
        }
    }

    /// Number of tile columns in the level.
    #[must_use]
    pub const fn columns(&self) -> u32 {
        self.columns
    }

    /// Number of tile rows in the level.
    #[must_use]
    pub const fn rows(&self) -> u32 {
        self.rows
    }

    /// Tile cell the player spawns in.
    #[must_use]
    pub const fn spawn(&self) -> GridPos {
        self.spawn
    }

    /// Moving platforms instantiated for the level.
    #[must_use]
    pub fn platforms(&self) -> &[MovingPlatform] {
        &self.platforms
    }

    pub(crate) fn platforms_mut(&mut self) -> &mut [MovingPlatform] {
        &mut self.platforms
    }

    pub(crate) fn platform(&self, id: PlatformId) -> Option<&MovingPlatform> {
        self.platforms.iter().find(|platform| platform.id() == id)
    }

    /// Tile at the provided signed tile coordinates.
    ///
    /// Columns outside the level and rows above it read as ground so the
    /// level edges behave as walls; rows below the level read as air so the
    /// player can fall out and trigger fall damage.
    #[must_use]
    pub fn tile_at(&self, column: i32, row: i32) -> TileCode {
        if column < 0 || column >= self.columns as i32 || row < 0 {
            return TileCode::Ground;
        }
        if row >= self.rows as i32 {
            return TileCode::Air;
        }
        self.tiles[row as usize][column as usize]
    }

    pub(crate) fn consume_collectible(&mut self, column: usize, row: usize) {
        self.tiles[row][column] = TileCode::Air;
    }
}

#[cfg(test)]
mod tests {
    use super::{level_from_ascii, LevelState, MovingPlatformDef, PlatformAxis, TileCode, TILE_SIZE};
    use pixel_arcade_core::GridPos;

    #[test]
    fn ascii_symbols_map_to_tile_codes() {
        let def = level_from_ascii("map", &["#CHGP", ".S"], Vec::new());
        let level = LevelState::build(&def);

        assert_eq!(level.tile_at(0, 0), TileCode::Ground);
        assert_eq!(level.tile_at(1, 0), TileCode::Collectible);
        assert_eq!(level.tile_at(2, 0), TileCode::Hazard);
        assert_eq!(level.tile_at(3, 0), TileCode::Goal);
        assert_eq!(level.tile_at(4, 0), TileCode::Platform);
        assert_eq!(level.tile_at(1, 1), TileCode::Air, "spawn cell reads as air");
        assert_eq!(def.spawn(), GridPos::new(1, 1));
    }

    #[test]
    fn short_rows_pad_with_air() {
        let def = level_from_ascii("map", &["##", "#"], Vec::new());
        let level = LevelState::build(&def);
        assert_eq!(level.columns(), 2);
        assert_eq!(level.tile_at(1, 1), TileCode::Air);
    }

    #[test]
    fn missing_spawn_defaults_to_one_one() {
        let def = level_from_ascii("map", &["...", "...", "..."], Vec::new());
        assert_eq!(def.spawn(), GridPos::new(1, 1));
    }

    #[test]
    fn out_of_bounds_reads_walls_and_fall_through() {
        let def = level_from_ascii("map", &["...", "..."], Vec::new());
        let level = LevelState::build(&def);

        assert_eq!(level.tile_at(-1, 0), TileCode::Ground);
        assert_eq!(level.tile_at(3, 0), TileCode::Ground);
        assert_eq!(level.tile_at(0, -1), TileCode::Ground);
        assert_eq!(level.tile_at(0, 2), TileCode::Air, "below the level is open");
    }

    #[test]
    fn platform_oscillation_bounces_at_bounds() {
        let def = MovingPlatformDef {
            x: 2.0,
            y: 4.0,
            width: 2.0,
            height: 0.5,
            axis: PlatformAxis::Horizontal,
            min: 2.0,
            max: 3.0,
            speed: 1.0,
        };
        let level_def = level_from_ascii("map", &["....", "...."], vec![def]);
        let mut level = LevelState::build(&level_def);

        let min = 2.0 * TILE_SIZE;
        let max = 3.0 * TILE_SIZE;
        let mut reversed = false;
        let mut previous = level.platforms()[0].x();

        for _ in 0..120 {
            level.platforms_mut()[0].advance(0.05);
            let platform = &level.platforms()[0];
            assert!(platform.x() >= min && platform.x() <= max, "platform stays within bounds");
            if platform.x() < previous {
                reversed = true;
            }
            previous = platform.x();
        }

        assert!(reversed, "platform must bounce back from its upper bound");
    }

    #[test]
    fn platform_records_per_tick_displacement() {
        let def = MovingPlatformDef {
            x: 0.0,
            y: 0.0,
            width: 1.0,
            height: 0.5,
            axis: PlatformAxis::Vertical,
            min: 0.0,
            max: 4.0,
            speed: 2.0,
        };
        let level_def = level_from_ascii("map", &["..", ".."], vec![def]);
        let mut level = LevelState::build(&level_def);

        level.platforms_mut()[0].advance(0.1);
        let (dx, dy) = level.platforms()[0].displacement();
        assert!(dx.abs() < f32::EPSILON);
        assert!((dy - 2.0 * TILE_SIZE * 0.1).abs() < 1e-3);
    }
}
