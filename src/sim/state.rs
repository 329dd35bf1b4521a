//! Game state and core simulation types

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::Rect;
use crate::settings::{BulletConfig, EnemyConfig, FormationMode, Settings};

/// Current phase of the session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay
    Playing,
    /// An enemy reached the player's line; terminal
    GameOver,
}

/// Something that happened during a tick, for the HUD and logging
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// An enemy was shot down; `score` is the new total
    EnemyDestroyed { id: u32, score: u64 },
    /// The formation touched a side wall and reversed
    FormationBounced,
    /// The session ended with the given score
    GameOver { score: u64 },
}

/// The player's ship
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub pos: Vec2,
    pub size: Vec2,
    /// Horizontal pixels per frame
    pub speed: f32,
    pub moving_left: bool,
    pub moving_right: bool,
}

impl Player {
    pub fn new(settings: &Settings) -> Self {
        let cfg = &settings.player;
        Self {
            pos: Vec2::new(
                settings.arena.width / 2.0,
                settings.arena.height - cfg.bottom_offset,
            ),
            size: Vec2::new(cfg.width, cfg.height),
            speed: cfg.speed,
            moving_left: false,
            moving_right: false,
        }
    }

    pub fn rect(&self) -> Rect {
        Rect {
            pos: self.pos,
            size: self.size,
        }
    }

    /// Apply movement intents, clamping to [0, arena_width - width]
    pub fn advance(&mut self, arena_width: f32) {
        if self.moving_left {
            self.pos.x = (self.pos.x - self.speed).max(0.0);
        }
        if self.moving_right {
            self.pos.x = (self.pos.x + self.speed).min(arena_width - self.size.x);
        }
    }
}

/// A projectile fired by the player
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Bullet {
    pub pos: Vec2,
    pub size: Vec2,
    /// Upward pixels per frame
    pub speed: f32,
}

impl Bullet {
    /// Spawn a bullet centred on the top edge of the player
    pub fn from_player(player: &Player, cfg: &BulletConfig) -> Self {
        Self {
            pos: Vec2::new(
                player.pos.x + player.size.x / 2.0 - cfg.width / 2.0,
                player.pos.y,
            ),
            size: Vec2::new(cfg.width, cfg.height),
            speed: cfg.speed,
        }
    }

    pub fn rect(&self) -> Rect {
        Rect {
            pos: self.pos,
            size: self.size,
        }
    }

    /// Move up one frame
    pub fn advance(&mut self) {
        self.pos.y -= self.speed;
    }

    /// True while any part of the bullet is below the top of the arena
    pub fn on_screen(&self) -> bool {
        self.pos.y + self.size.y > 0.0
    }
}

/// A single enemy in the formation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Enemy {
    pub id: u32,
    pub pos: Vec2,
    pub size: Vec2,
    pub alive: bool,
}

impl Enemy {
    pub fn rect(&self) -> Rect {
        Rect {
            pos: self.pos,
            size: self.size,
        }
    }
}

/// The enemy grid plus its shared horizontal velocity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Formation {
    /// All enemies, alive or dead, in row-major order (sorted by id)
    pub enemies: Vec<Enemy>,
    /// Signed horizontal velocity shared by every enemy
    pub velocity: f32,
    /// Vertical drop applied on a wall bounce
    pub drop: f32,
    pub mode: FormationMode,
}

impl Formation {
    /// Lay out a rows x columns grid. An empty grid is valid.
    pub fn new(cfg: &EnemyConfig, mode: FormationMode) -> Self {
        let capacity = (cfg.rows as usize).saturating_mul(cfg.columns as usize);
        let mut enemies = Vec::with_capacity(capacity);
        let mut id = 0;
        for row in 0..cfg.rows {
            for col in 0..cfg.columns {
                enemies.push(Enemy {
                    id,
                    pos: Vec2::new(
                        col as f32 * (cfg.width + cfg.padding) + cfg.origin_x,
                        row as f32 * (cfg.height + cfg.padding) + cfg.origin_y,
                    ),
                    size: Vec2::new(cfg.width, cfg.height),
                    alive: true,
                });
                id += 1;
            }
        }

        Self {
            enemies,
            velocity: cfg.speed,
            drop: cfg.drop,
            mode,
        }
    }

    pub fn alive(&self) -> impl Iterator<Item = &Enemy> {
        self.enemies.iter().filter(|e| e.alive)
    }

    pub fn alive_count(&self) -> usize {
        self.alive().count()
    }

    /// Advance one frame. Returns true if the formation bounced off a wall.
    pub fn advance(&mut self, arena_width: f32) -> bool {
        match self.mode {
            FormationMode::Rigid => self.advance_rigid(arena_width),
            FormationMode::Cascade => self.advance_cascade(arena_width),
        }
    }

    fn advance_rigid(&mut self, arena_width: f32) -> bool {
        let velocity = self.velocity;
        let mut hit_wall = false;
        for enemy in self.enemies.iter_mut().filter(|e| e.alive) {
            enemy.pos.x += velocity;
            hit_wall |= enemy.rect().crosses_side_walls(arena_width);
        }

        if hit_wall {
            self.velocity = -self.velocity;
            let drop = self.drop;
            for enemy in self.enemies.iter_mut().filter(|e| e.alive) {
                enemy.pos.y += drop;
            }
        }
        hit_wall
    }

    fn advance_cascade(&mut self, arena_width: f32) -> bool {
        let mut bounced = false;
        for enemy in self.enemies.iter_mut().filter(|e| e.alive) {
            enemy.pos.x += self.velocity;
            if enemy.rect().crosses_side_walls(arena_width) {
                // Later enemies in this pass see the flipped velocity
                self.velocity = -self.velocity;
                enemy.pos.y += self.drop;
                bounced = true;
            }
        }
        bounced
    }
}

/// Complete game state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Arena width in pixels
    pub width: f32,
    /// Arena height in pixels
    pub height: f32,
    pub player: Player,
    /// Live bullets (order does not matter)
    pub bullets: Vec<Bullet>,
    pub bullet_config: BulletConfig,
    pub formation: Formation,
    /// Points awarded per enemy destroyed
    pub points_per_enemy: u64,
    /// Score, only ever increases
    pub score: u64,
    pub phase: GamePhase,
    /// Number of updates processed while playing
    pub time_ticks: u64,
}

impl GameState {
    /// Create a new session from settings
    pub fn new(settings: &Settings) -> Self {
        Self {
            width: settings.arena.width,
            height: settings.arena.height,
            player: Player::new(settings),
            bullets: Vec::new(),
            bullet_config: settings.bullet,
            formation: Formation::new(&settings.enemy, settings.formation_mode),
            points_per_enemy: settings.enemy.points,
            score: 0,
            phase: GamePhase::Playing,
            time_ticks: 0,
        }
    }

    pub fn is_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    /// Spawn a bullet from the player's current position
    pub fn fire(&mut self) {
        let bullet = Bullet::from_player(&self.player, &self.bullet_config);
        self.bullets.push(bullet);
    }
}
