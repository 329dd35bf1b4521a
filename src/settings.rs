//! Game settings and preferences
//!
//! Gameplay configuration and visual preferences, persisted together in
//! LocalStorage. Every field has a default so partial JSON blobs merge over
//! the reference configuration.

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// How the enemy formation reacts when it reaches a side wall
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum FormationMode {
    /// Whole grid moves, bounces and drops as one rigid body
    #[default]
    Rigid,
    /// Each enemy is moved and wall-checked in turn; a bounce flips the shared
    /// velocity for enemies later in the same pass and drops only the enemy
    /// that touched the wall
    Cascade,
}

impl FormationMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            FormationMode::Rigid => "Rigid",
            FormationMode::Cascade => "Cascade",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "rigid" => Some(FormationMode::Rigid),
            "cascade" => Some(FormationMode::Cascade),
            _ => None,
        }
    }
}

/// Playfield size in pixels
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArenaConfig {
    pub width: f32,
    pub height: f32,
}

impl Default for ArenaConfig {
    fn default() -> Self {
        Self {
            width: ARENA_WIDTH,
            height: ARENA_HEIGHT,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerConfig {
    pub width: f32,
    pub height: f32,
    /// Horizontal pixels per frame
    pub speed: f32,
    /// Distance from the arena bottom to the ship's top edge
    pub bottom_offset: f32,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            width: PLAYER_WIDTH,
            height: PLAYER_HEIGHT,
            speed: PLAYER_SPEED,
            bottom_offset: PLAYER_BOTTOM_OFFSET,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BulletConfig {
    pub width: f32,
    pub height: f32,
    /// Upward pixels per frame
    pub speed: f32,
}

impl Default for BulletConfig {
    fn default() -> Self {
        Self {
            width: BULLET_WIDTH,
            height: BULLET_HEIGHT,
            speed: BULLET_SPEED,
        }
    }
}

/// Enemy grid layout and formation motion
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnemyConfig {
    pub rows: u32,
    pub columns: u32,
    pub width: f32,
    pub height: f32,
    pub padding: f32,
    pub origin_x: f32,
    pub origin_y: f32,
    /// Initial signed horizontal velocity of the formation
    pub speed: f32,
    /// Vertical drop per wall bounce
    pub drop: f32,
    pub points: u64,
}

impl Default for EnemyConfig {
    fn default() -> Self {
        Self {
            rows: ENEMY_ROWS,
            columns: ENEMY_COLUMNS,
            width: ENEMY_WIDTH,
            height: ENEMY_HEIGHT,
            padding: ENEMY_PADDING,
            origin_x: ENEMY_ORIGIN_X,
            origin_y: ENEMY_ORIGIN_Y,
            speed: ENEMY_SPEED,
            drop: ENEMY_DROP,
            points: ENEMY_POINTS,
        }
    }
}

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Gameplay ===
    pub arena: ArenaConfig,
    pub player: PlayerConfig,
    pub bullet: BulletConfig,
    pub enemy: EnemyConfig,
    pub formation_mode: FormationMode,

    // === Visual Effects ===
    /// Translucent overwrite instead of a full clear each frame
    pub trails: bool,
    /// Alpha of the trail overwrite (0.0 - 1.0)
    pub trail_alpha: f32,
    /// Star field on game over
    pub starfield: bool,
    pub star_count: usize,

    // === Accessibility ===
    /// Reduced motion (no trails, no star field)
    pub reduced_motion: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            arena: ArenaConfig::default(),
            player: PlayerConfig::default(),
            bullet: BulletConfig::default(),
            enemy: EnemyConfig::default(),
            formation_mode: FormationMode::default(),

            trails: true,
            trail_alpha: TRAIL_ALPHA,
            starfield: true,
            star_count: STAR_COUNT,

            reduced_motion: false,
        }
    }
}

/// True for a finite, strictly positive size
fn positive(v: f32) -> bool {
    v.is_finite() && v > 0.0
}

impl Settings {
    /// Parse settings from JSON, filling missing fields with defaults
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json).map(Self::validated)
    }

    /// Replace any section holding unusable numbers with its defaults
    pub fn validated(mut self) -> Self {
        if !positive(self.arena.width) || !positive(self.arena.height) {
            log::warn!("Invalid arena size {:?}, using defaults", self.arena);
            self.arena = ArenaConfig::default();
        }
        let p = &self.player;
        if !positive(p.width)
            || !positive(p.height)
            || !p.speed.is_finite()
            || !p.bottom_offset.is_finite()
        {
            log::warn!("Invalid player config {:?}, using defaults", self.player);
            self.player = PlayerConfig::default();
        }
        let b = &self.bullet;
        if !positive(b.width) || !positive(b.height) || !b.speed.is_finite() {
            log::warn!("Invalid bullet config {:?}, using defaults", self.bullet);
            self.bullet = BulletConfig::default();
        }
        let e = &self.enemy;
        let finite = [e.padding, e.origin_x, e.origin_y, e.speed, e.drop]
            .iter()
            .all(|v| v.is_finite());
        if !positive(e.width) || !positive(e.height) || !finite {
            log::warn!("Invalid enemy config {:?}, using defaults", self.enemy);
            self.enemy = EnemyConfig::default();
        }
        if self.enemy.rows > MAX_GRID_DIM || self.enemy.columns > MAX_GRID_DIM {
            log::warn!(
                "Enemy grid {}x{} too large, capping at {}",
                self.enemy.rows,
                self.enemy.columns,
                MAX_GRID_DIM
            );
            self.enemy.rows = self.enemy.rows.min(MAX_GRID_DIM);
            self.enemy.columns = self.enemy.columns.min(MAX_GRID_DIM);
        }
        if self.star_count > MAX_STAR_COUNT {
            log::warn!(
                "Star count {} too large, capping at {}",
                self.star_count,
                MAX_STAR_COUNT
            );
            self.star_count = MAX_STAR_COUNT;
        }
        if !self.trail_alpha.is_finite() {
            self.trail_alpha = TRAIL_ALPHA;
        }
        self.trail_alpha = self.trail_alpha.clamp(0.0, 1.0);
        self
    }

    /// Effective trail effect (respects reduced_motion)
    pub fn effective_trails(&self) -> bool {
        self.trails && !self.reduced_motion
    }

    /// Effective star count (0 when the star field is off)
    pub fn effective_star_count(&self) -> usize {
        if !self.starfield || self.reduced_motion {
            0
        } else {
            self.star_count
        }
    }

    /// LocalStorage key
    #[allow(dead_code)]
    const STORAGE_KEY: &'static str = "star_shooter_settings";

    /// Load settings from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                match Self::from_json(&json) {
                    Ok(settings) => {
                        log::info!("Loaded settings from LocalStorage");
                        return settings;
                    }
                    Err(e) => log::warn!("Ignoring stored settings: {}", e),
                }
            }
        }

        log::info!("Using default settings");
        Self::default()
    }

    /// Save settings to LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn save(&self) {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(json) = serde_json::to_string(self) {
                let _ = storage.set_item(Self::STORAGE_KEY, &json);
                log::info!("Settings saved");
            }
        }
    }

    /// Native stubs
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn save(&self) {
        // No-op for native
    }
}
