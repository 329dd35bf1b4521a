//! Scene drawing over an immediate-mode rectangle surface

use crate::settings::Settings;
use crate::sim::{GameState, Rect};

/// Minimal immediate-mode drawing target
pub trait Surface {
    /// Fill a rectangle with a solid CSS color
    fn fill_rect(&mut self, rect: Rect, color: &str);

    /// Overwrite the whole surface with the background at the given alpha
    fn fade(&mut self, alpha: f32);
}

/// Fill colors for each entity kind
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub player: &'static str,
    pub bullet: &'static str,
    pub enemy: &'static str,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            player: "#00ff9d",
            bullet: "#00ff9d",
            enemy: "#ff0000",
        }
    }
}

/// Draw the current state. Reads only; never mutates the simulation.
pub fn render(
    state: &GameState,
    surface: &mut dyn Surface,
    palette: &Palette,
    settings: &Settings,
) {
    let alpha = if settings.effective_trails() {
        settings.trail_alpha
    } else {
        1.0
    };
    surface.fade(alpha);

    surface.fill_rect(state.player.rect(), palette.player);

    for bullet in &state.bullets {
        surface.fill_rect(bullet.rect(), palette.bullet);
    }

    for enemy in state.formation.alive() {
        surface.fill_rect(enemy.rect(), palette.enemy);
    }
}
