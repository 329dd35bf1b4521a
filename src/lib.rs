//! Star Shooter - A single-screen arcade shooter
//!
//! Core modules:
//! - `sim`: Deterministic simulation (movement, collisions, formation, game state)
//! - `renderer`: Canvas 2D drawing over a `Surface` abstraction
//! - `input`: Keyboard event to tick input translation
//! - `hud`: Score display and game over presentation
//! - `starfield`: Decorative star field shown on game over
//! - `game`: Frame driver tying update, render and HUD together
//! - `settings`: Data-driven configuration, persisted in LocalStorage

pub mod game;
pub mod hud;
pub mod input;
pub mod renderer;
pub mod settings;
pub mod sim;
pub mod starfield;

pub use game::Game;
pub use settings::{FormationMode, Settings};

/// Game configuration constants
pub mod consts {
    /// Arena dimensions
    pub const ARENA_WIDTH: f32 = 800.0;
    pub const ARENA_HEIGHT: f32 = 600.0;

    /// Player defaults
    pub const PLAYER_WIDTH: f32 = 50.0;
    pub const PLAYER_HEIGHT: f32 = 30.0;
    pub const PLAYER_SPEED: f32 = 7.0;
    /// Distance from the bottom of the arena to the player's top edge
    pub const PLAYER_BOTTOM_OFFSET: f32 = 50.0;

    /// Bullet defaults
    pub const BULLET_WIDTH: f32 = 5.0;
    pub const BULLET_HEIGHT: f32 = 15.0;
    pub const BULLET_SPEED: f32 = 10.0;

    /// Enemy grid defaults
    pub const ENEMY_ROWS: u32 = 3;
    pub const ENEMY_COLUMNS: u32 = 8;
    pub const ENEMY_WIDTH: f32 = 40.0;
    pub const ENEMY_HEIGHT: f32 = 30.0;
    pub const ENEMY_PADDING: f32 = 20.0;
    pub const ENEMY_ORIGIN_X: f32 = 50.0;
    pub const ENEMY_ORIGIN_Y: f32 = 50.0;
    /// Initial formation velocity (pixels per frame, positive = rightward)
    pub const ENEMY_SPEED: f32 = 2.0;
    /// Vertical drop applied on a wall bounce
    pub const ENEMY_DROP: f32 = 10.0;
    /// Score awarded per enemy destroyed
    pub const ENEMY_POINTS: u64 = 100;

    /// Alpha of the per-frame overwrite that produces the trail effect
    pub const TRAIL_ALPHA: f32 = 0.1;
    /// Stars spawned by the game over presentation
    pub const STAR_COUNT: usize = 100;
    /// Upper bound accepted for a configured star count
    pub const MAX_STAR_COUNT: usize = 1000;
    /// Upper bound accepted for configured enemy rows and columns
    pub const MAX_GRID_DIM: u32 = 100;
}
