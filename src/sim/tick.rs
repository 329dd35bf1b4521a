//! Per-frame simulation tick
//!
//! Core game loop that advances the simulation by exactly one animation frame.

use super::state::{GameEvent, GamePhase, GameState};

/// Input commands for a single tick (deterministic)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    /// Left arrow held
    pub move_left: bool,
    /// Right arrow held
    pub move_right: bool,
    /// Fire requested since the last tick (presses coalesce)
    pub fire: bool,
}

/// Advance the game state by one frame, returning what happened
pub fn tick(state: &mut GameState, input: &TickInput) -> Vec<GameEvent> {
    let mut events = Vec::new();

    // Nothing moves once the session is over
    if state.phase == GamePhase::GameOver {
        return events;
    }

    state.time_ticks += 1;

    // Bullets spawn from where the ship was when the key went down
    if input.fire {
        state.fire();
    }

    // Player movement
    state.player.moving_left = input.move_left;
    state.player.moving_right = input.move_right;
    state.player.advance(state.width);

    // Bullets
    state.bullets.retain_mut(|bullet| {
        bullet.advance();
        bullet.on_screen()
    });

    // Formation
    if state.formation.advance(state.width) {
        log::debug!(
            "Formation bounced, velocity now {}",
            state.formation.velocity
        );
        events.push(GameEvent::FormationBounced);
    }

    // Bullet vs enemy. Bullets are not consumed, so one bullet can take out
    // several overlapping enemies in the same frame.
    for enemy in state.formation.enemies.iter_mut().filter(|e| e.alive) {
        let rect = enemy.rect();
        if state.bullets.iter().any(|b| b.rect().overlaps(&rect)) {
            enemy.alive = false;
            state.score += state.points_per_enemy;
            log::debug!("Enemy {} destroyed, score {}", enemy.id, state.score);
            events.push(GameEvent::EnemyDestroyed {
                id: enemy.id,
                score: state.score,
            });
        }
    }

    // Loss: any surviving enemy's bottom edge past the player's line
    let player_y = state.player.pos.y;
    if state
        .formation
        .alive()
        .any(|e| e.rect().max().y > player_y)
    {
        state.phase = GamePhase::GameOver;
        log::info!(
            "Game over after {} ticks, final score {}",
            state.time_ticks,
            state.score
        );
        events.push(GameEvent::GameOver { score: state.score });
    }

    events
}
