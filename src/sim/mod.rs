//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One update per animation frame, fixed per-frame speeds
//! - Stable iteration order (enemies in row-major grid order)
//! - No rendering or platform dependencies

pub mod collision;
pub mod state;
pub mod tick;

pub use collision::Rect;
pub use state::{Bullet, Enemy, Formation, GameEvent, GamePhase, GameState, Player};
pub use tick::{TickInput, tick};
