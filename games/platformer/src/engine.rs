//! Deterministic per-tick simulation for the platformer.
//!
//! The engine mutates a single caller-owned [`PlatformerState`] in place each
//! tick. The host owns the frame loop, normalizes raw key state into
//! [`InputState`], and clamps `dt` (at most 0.05 s) before calling
//! [`PlatformerState::update`] so large frame hitches cannot tunnel the
//! player through tiles.

use glam::Vec2;
use pixel_arcade_core::{GridPos, Rect};

use crate::content::PlatformerContent;
use crate::level::{LevelState, MovingPlatform, PlatformId, TileCode, TILE_SIZE};

const GRAVITY: f32 = 2000.0;
const MOVE_SPEED: f32 = 240.0;
const JUMP_VELOCITY: f32 = 680.0;
const STATUS_DELAY: f32 = 1.0;
const COLLECTIBLE_VALUE: u32 = 10;
const STARTING_LIVES: u32 = 3;

/// Player collision box width in world units.
pub const PLAYER_WIDTH: f32 = 22.0;
/// Player collision box height in world units.
pub const PLAYER_HEIGHT: f32 = 28.0;

// Gap left between the player and a surface after resolving a collision so
// the next sweep does not re-detect the same contact.
const EDGE_GAP: f32 = 0.01;

/// Normalized frame input consumed by the simulation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct InputState {
    /// Move left is held.
    pub left: bool,
    /// Move right is held.
    pub right: bool,
    /// Jump is held.
    pub jump: bool,
}

impl InputState {
    /// Frame with no buttons held.
    pub const NONE: InputState = InputState {
        left: false,
        right: false,
        jump: false,
    };

    /// Creates a new input descriptor with explicit field values.
    #[must_use]
    pub const fn new(left: bool, right: bool, jump: bool) -> Self {
        Self { left, right, jump }
    }
}

/// Simulation status of a platformer run.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GameStatus {
    /// Physics runs and input is honored.
    Playing,
    /// The goal was reached; the next level loads after the status delay.
    LevelComplete,
    /// All lives were spent; the run restarts after the status delay.
    GameOver,
}

/// The single mutable subject of the simulation.
#[derive(Clone, Debug)]
pub struct Player {
    position: Vec2,
    velocity: Vec2,
    on_ground: bool,
    riding: Option<PlatformId>,
}

impl Player {
    fn spawned_at(spawn: GridPos) -> Self {
        let x = spawn.column() as f32 * TILE_SIZE + (TILE_SIZE - PLAYER_WIDTH) / 2.0;
        let y = spawn.row() as f32 * TILE_SIZE + (TILE_SIZE - PLAYER_HEIGHT);
        Self {
            position: Vec2::new(x, y),
            velocity: Vec2::ZERO,
            on_ground: false,
            riding: None,
        }
    }

    /// Top-left corner of the player's collision box in world units.
    #[must_use]
    pub const fn position(&self) -> Vec2 {
        self.position
    }

    /// Current velocity in world units per second.
    #[must_use]
    pub const fn velocity(&self) -> Vec2 {
        self.velocity
    }

    /// Reports whether the player is standing on a solid surface.
    #[must_use]
    pub const fn on_ground(&self) -> bool {
        self.on_ground
    }

    /// Platform the player is riding, re-resolved by id every tick.
    ///
    /// This is a lookup key rather than an owning reference: the platform
    /// vanishes on level change without leaving anything dangling.
    #[must_use]
    pub const fn riding(&self) -> Option<PlatformId> {
        self.riding
    }

    /// The player's axis-aligned collision box.
    #[must_use]
    pub fn bounds(&self) -> Rect {
        Rect::new(self.position.x, self.position.y, PLAYER_WIDTH, PLAYER_HEIGHT)
    }
}

/// Complete platformer run state owned by the presentation layer.
#[derive(Clone, Debug)]
pub struct PlatformerState {
    content: PlatformerContent,
    level_index: usize,
    level: LevelState,
    player: Player,
    score: u32,
    lives: u32,
    time: f32,
    status: GameStatus,
    status_timer: f32,
}

impl PlatformerState {
    /// Creates a fresh run of the provided content starting at `level_index`.
    ///
    /// An out-of-range index is clamped to the last level of the bundle.
    #[must_use]
    pub fn new(content: PlatformerContent, level_index: usize) -> Self {
        let level_index = level_index.min(content.levels().len().saturating_sub(1));
        let def = content
            .levels()
            .get(level_index)
            .expect("content bundles ship at least one level");
        let level = LevelState::build(def);
        let player = Player::spawned_at(level.spawn());
        Self {
            content,
            level_index,
            level,
            player,
            score: 0,
            lives: STARTING_LIVES,
            time: 0.0,
            status: GameStatus::Playing,
            status_timer: 0.0,
        }
    }

    /// Index of the level currently loaded.
    #[must_use]
    pub const fn level_index(&self) -> usize {
        self.level_index
    }

    /// The level currently being played.
    #[must_use]
    pub const fn level(&self) -> &LevelState {
        &self.level
    }

    /// The simulated player.
    #[must_use]
    pub const fn player(&self) -> &Player {
        &self.player
    }

    /// Points accumulated across the run.
    #[must_use]
    pub const fn score(&self) -> u32 {
        self.score
    }

    /// Lives remaining in the current level attempt.
    #[must_use]
    pub const fn lives(&self) -> u32 {
        self.lives
    }

    /// Seconds of simulated play time in the current level.
    #[must_use]
    pub const fn time(&self) -> f32 {
        self.time
    }

    /// Current simulation status.
    #[must_use]
    pub const fn status(&self) -> GameStatus {
        self.status
    }

    /// Repositions the player. Diagnostic hook for harnesses and tests.
    pub fn set_player_position(&mut self, x: f32, y: f32) {
        self.player.position = Vec2::new(x, y);
    }

    /// Overrides the player velocity. Diagnostic hook for harnesses and tests.
    pub fn set_player_velocity(&mut self, vx: f32, vy: f32) {
        self.player.velocity = Vec2::new(vx, vy);
    }

    /// Overrides the grounded flag. Diagnostic hook for harnesses and tests.
    pub fn set_player_grounded(&mut self, on_ground: bool) {
        self.player.on_ground = on_ground;
    }

    /// Advances the simulation by `dt` seconds of the provided input.
    ///
    /// While the status is not [`GameStatus::Playing`] physics is frozen and
    /// only the status timer accumulates; once it reaches the fixed status
    /// delay the run either advances to the next level (keeping the score) or
    /// restarts from the first level with the score reset.
    pub fn update(&mut self, input: InputState, dt: f32) {
        if self.status != GameStatus::Playing {
            self.status_timer += dt;
            if self.status_timer >= STATUS_DELAY {
                match self.status {
                    GameStatus::LevelComplete => self.advance_level(),
                    _ => self.reset_level(0, true),
                }
            }
            return;
        }

        self.time += dt;
        for platform in self.level.platforms_mut() {
            platform.advance(dt);
        }

        if let Some(id) = self.player.riding {
            if let Some(platform) = self.level.platform(id) {
                let (dx, dy) = platform.displacement();
                self.player.position.x += dx;
                self.player.position.y += dy;
            }
        }

        self.apply_input(input);
        self.player.velocity.y += GRAVITY * dt;
        self.move_player(dt);
        self.clamp_to_level();
        self.handle_tile_interactions();
    }

    fn apply_input(&mut self, input: InputState) {
        if input.left == input.right {
            self.player.velocity.x = 0.0;
        } else if input.left {
            self.player.velocity.x = -MOVE_SPEED;
        } else {
            self.player.velocity.x = MOVE_SPEED;
        }

        if input.jump && self.player.on_ground {
            self.player.velocity.y = -JUMP_VELOCITY;
            self.player.on_ground = false;
            self.player.riding = None;
        }
    }

    // Horizontal resolution runs strictly before vertical within a tick so a
    // diagonal approach lands on top of a corner instead of snagging its side.
    fn move_player(&mut self, dt: f32) {
        let prev_x = self.player.position.x;
        let prev_y = self.player.position.y;

        let mut new_x = self.player.position.x + self.player.velocity.x * dt;
        new_x = self.resolve_horizontal_tiles(new_x);
        new_x = self.resolve_horizontal_platforms(new_x, prev_x);
        self.player.position.x = new_x;

        let mut new_y = self.player.position.y + self.player.velocity.y * dt;
        self.player.on_ground = false;
        self.player.riding = None;
        new_y = self.resolve_vertical_tiles(new_y);
        self.resolve_vertical_platforms(new_y, prev_y);
    }

    fn resolve_horizontal_tiles(&mut self, new_x: f32) -> f32 {
        if self.player.velocity.x == 0.0 {
            return new_x;
        }

        let y_top = tile_index(self.player.position.y);
        let y_bottom = tile_index(self.player.position.y + PLAYER_HEIGHT - 1.0);

        if self.player.velocity.x > 0.0 {
            let column = tile_index(new_x + PLAYER_WIDTH);
            for row in y_top..=y_bottom {
                if self.level.tile_at(column, row).is_solid() {
                    self.player.velocity.x = 0.0;
                    return column as f32 * TILE_SIZE - PLAYER_WIDTH - EDGE_GAP;
                }
            }
        } else {
            let column = tile_index(new_x);
            for row in y_top..=y_bottom {
                if self.level.tile_at(column, row).is_solid() {
                    self.player.velocity.x = 0.0;
                    return (column + 1) as f32 * TILE_SIZE + EDGE_GAP;
                }
            }
        }

        new_x
    }

    // A moving platform only blocks sideways movement when the player was
    // fully clear of it before the move; otherwise an interpenetrating
    // platform would trap the player inside itself.
    fn resolve_horizontal_platforms(&mut self, new_x: f32, prev_x: f32) -> f32 {
        if self.player.velocity.x == 0.0 {
            return new_x;
        }

        let moved = Rect::new(new_x, self.player.position.y, PLAYER_WIDTH, PLAYER_HEIGHT);
        for platform in self.level.platforms() {
            if !moved.overlaps(&platform_rect(platform)) {
                continue;
            }

            if self.player.velocity.x > 0.0 && prev_x + PLAYER_WIDTH <= platform.x() {
                self.player.velocity.x = 0.0;
                return platform.x() - PLAYER_WIDTH - EDGE_GAP;
            }
            if self.player.velocity.x < 0.0 && prev_x >= platform.x() + platform.width() - EDGE_GAP {
                self.player.velocity.x = 0.0;
                return platform.x() + platform.width() + EDGE_GAP;
            }
        }

        new_x
    }

    fn resolve_vertical_tiles(&mut self, new_y: f32) -> f32 {
        if self.player.velocity.y == 0.0 {
            return new_y;
        }

        let x_left = tile_index(self.player.position.x);
        let x_right = tile_index(self.player.position.x + PLAYER_WIDTH - 1.0);

        if self.player.velocity.y > 0.0 {
            let row = tile_index(new_y + PLAYER_HEIGHT);
            for column in x_left..=x_right {
                if self.level.tile_at(column, row).is_solid() {
                    self.player.velocity.y = 0.0;
                    self.player.on_ground = true;
                    return row as f32 * TILE_SIZE - PLAYER_HEIGHT - EDGE_GAP;
                }
            }
        } else {
            let row = tile_index(new_y);
            for column in x_left..=x_right {
                if self.level.tile_at(column, row).is_solid() {
                    self.player.velocity.y = 0.0;
                    return (row + 1) as f32 * TILE_SIZE + EDGE_GAP;
                }
            }
        }

        new_y
    }

    fn resolve_vertical_platforms(&mut self, new_y: f32, prev_y: f32) {
        let mut resolved_y = new_y;
        let mut on_ground = self.player.on_ground;
        let mut riding = self.player.riding;

        for platform in self.level.platforms() {
            let moved = Rect::new(self.player.position.x, resolved_y, PLAYER_WIDTH, PLAYER_HEIGHT);
            if !moved.overlaps(&platform_rect(platform)) {
                continue;
            }

            if self.player.velocity.y > 0.0 && prev_y + PLAYER_HEIGHT <= platform.y() {
                self.player.velocity.y = 0.0;
                resolved_y = platform.y() - PLAYER_HEIGHT - EDGE_GAP;
                on_ground = true;
                riding = Some(platform.id());
            } else if self.player.velocity.y < 0.0 && prev_y >= platform.y() + platform.height() {
                self.player.velocity.y = 0.0;
                resolved_y = platform.y() + platform.height() + EDGE_GAP;
            }
        }

        self.player.position.y = resolved_y;
        self.player.on_ground = on_ground;
        self.player.riding = riding;
    }

    fn clamp_to_level(&mut self) {
        let level_width = self.level.columns() as f32 * TILE_SIZE;
        let level_height = self.level.rows() as f32 * TILE_SIZE;
        self.player.position.x = self.player.position.x.clamp(0.0, level_width - PLAYER_WIDTH);
        // No upper clamp: the cap sits one tile below the level so fall
        // damage can trigger before the position runs away.
        self.player.position.y = self.player.position.y.min(level_height + TILE_SIZE);
    }

    fn handle_tile_interactions(&mut self) {
        let x_left = tile_index(self.player.position.x);
        let x_right = tile_index(self.player.position.x + PLAYER_WIDTH - 1.0);
        let y_top = tile_index(self.player.position.y);
        let y_bottom = tile_index(self.player.position.y + PLAYER_HEIGHT - 1.0);

        for row in y_top..=y_bottom {
            for column in x_left..=x_right {
                match self.level.tile_at(column, row) {
                    TileCode::Collectible => {
                        self.level.consume_collectible(column as usize, row as usize);
                        self.score += COLLECTIBLE_VALUE;
                    }
                    TileCode::Hazard => {
                        self.apply_damage();
                        return;
                    }
                    TileCode::Goal => {
                        self.status = GameStatus::LevelComplete;
                        self.status_timer = 0.0;
                        return;
                    }
                    _ => {}
                }
            }
        }

        let level_height = self.level.rows() as f32 * TILE_SIZE;
        if self.player.position.y > level_height + TILE_SIZE / 2.0 {
            self.apply_damage();
        }
    }

    fn apply_damage(&mut self) {
        self.lives = self.lives.saturating_sub(1);
        if self.lives == 0 {
            self.status = GameStatus::GameOver;
            self.status_timer = 0.0;
            return;
        }
        self.player = Player::spawned_at(self.level.spawn());
    }

    fn advance_level(&mut self) {
        let next = self.level_index + 1;
        if next >= self.content.levels().len() {
            self.reset_level(0, true);
        } else {
            self.reset_level(next, false);
        }
    }

    fn reset_level(&mut self, level_index: usize, reset_score: bool) {
        let def = &self.content.levels()[level_index];
        self.level = LevelState::build(def);
        self.level_index = level_index;
        self.player = Player::spawned_at(self.level.spawn());
        self.lives = STARTING_LIVES;
        self.time = 0.0;
        if reset_score {
            self.score = 0;
        }
        self.status = GameStatus::Playing;
        self.status_timer = 0.0;
    }
}

fn platform_rect(platform: &MovingPlatform) -> Rect {
    Rect::new(platform.x(), platform.y(), platform.width(), platform.height())
}

fn tile_index(value: f32) -> i32 {
    (value / TILE_SIZE).floor() as i32
}
