//! Frame driver
//!
//! Owns the session and everything it talks to. The host calls `frame()` once
//! per animation callback; update and render always run in that order.

use crate::hud::Hud;
use crate::input::InputState;
use crate::renderer::{Palette, Surface, render};
use crate::settings::Settings;
use crate::sim::{GameEvent, GameState, tick};
use crate::starfield;

/// Game instance holding all state
pub struct Game<S: Surface, H: Hud> {
    pub state: GameState,
    pub input: InputState,
    pub settings: Settings,
    palette: Palette,
    surface: S,
    hud: H,
    /// Seed for the game over star field
    seed: u64,
}

impl<S: Surface, H: Hud> Game<S, H> {
    pub fn new(settings: Settings, surface: S, hud: H, seed: u64) -> Self {
        let state = GameState::new(&settings);
        log::info!(
            "New session: arena {}x{}, {} enemies ({}), seed {}",
            state.width,
            state.height,
            state.formation.enemies.len(),
            settings.formation_mode.as_str(),
            seed
        );
        Self {
            state,
            input: InputState::new(),
            settings,
            palette: Palette::default(),
            surface,
            hud,
            seed,
        }
    }

    pub fn key_down(&mut self, key: &str) -> bool {
        self.input.key_down(key)
    }

    pub fn key_up(&mut self, key: &str) -> bool {
        self.input.key_up(key)
    }

    /// One animation frame: update, render, then notify the HUD
    pub fn frame(&mut self) -> Vec<GameEvent> {
        let input = self.input.take_tick_input();
        let events = tick(&mut self.state, &input);

        render(&self.state, &mut self.surface, &self.palette, &self.settings);

        for event in &events {
            match *event {
                GameEvent::EnemyDestroyed { score, .. } => self.hud.set_score(score),
                GameEvent::GameOver { .. } => {
                    let stars =
                        starfield::generate(self.settings.effective_star_count(), self.seed);
                    self.hud.show_game_over(&stars);
                }
                GameEvent::FormationBounced => {}
            }
        }

        events
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn hud(&self) -> &H {
        &self.hud
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::{Bullet, GamePhase, Rect};
    use crate::starfield::Star;
    use glam::Vec2;

    #[derive(Default)]
    struct CountingSurface {
        frames: usize,
        fills: usize,
    }

    impl Surface for CountingSurface {
        fn fill_rect(&mut self, _rect: Rect, _color: &str) {
            self.fills += 1;
        }

        fn fade(&mut self, _alpha: f32) {
            self.frames += 1;
        }
    }

    #[derive(Default)]
    struct RecordingHud {
        scores: Vec<u64>,
        game_overs: Vec<usize>,
    }

    impl Hud for RecordingHud {
        fn set_score(&mut self, score: u64) {
            self.scores.push(score);
        }

        fn show_game_over(&mut self, stars: &[Star]) {
            self.game_overs.push(stars.len());
        }
    }

    fn new_game(settings: Settings) -> Game<CountingSurface, RecordingHud> {
        Game::new(
            settings,
            CountingSurface::default(),
            RecordingHud::default(),
            1234,
        )
    }

    #[test]
    fn test_frame_renders_every_time() {
        let mut game = new_game(Settings::default());
        for _ in 0..5 {
            game.frame();
        }
        assert_eq!(game.surface().frames, 5);
        assert_eq!(game.state.time_ticks, 5);
    }

    #[test]
    fn test_keys_drive_player() {
        let mut game = new_game(Settings::default());
        let start = game.state.player.pos.x;
        assert!(game.key_down("ArrowRight"));
        game.frame();
        game.frame();
        assert!(game.key_up("ArrowRight"));
        game.frame();
        assert_eq!(game.state.player.pos.x, start + 14.0);
    }

    #[test]
    fn test_fire_key_spawns_one_bullet() {
        let mut game = new_game(Settings::default());
        game.key_down(" ");
        game.frame();
        game.frame();
        assert_eq!(game.state.bullets.len(), 1);
    }

    #[test]
    fn test_kill_updates_score_display() {
        let mut settings = Settings::default();
        settings.enemy.rows = 1;
        settings.enemy.columns = 1;
        settings.enemy.speed = 0.0;
        settings.enemy.origin_x = 100.0;
        settings.enemy.origin_y = 100.0;
        let mut game = new_game(settings);

        let mut bullet = Bullet::from_player(&game.state.player, &game.state.bullet_config);
        bullet.pos = Vec2::new(110.0, 115.0);
        game.state.bullets.push(bullet);
        game.frame();

        assert_eq!(game.hud().scores, vec![100]);
        assert!(game.hud().game_overs.is_empty());
    }

    #[test]
    fn test_game_over_presented_once() {
        let mut settings = Settings::default();
        settings.enemy.rows = 1;
        settings.enemy.columns = 1;
        settings.enemy.origin_y = 530.0;
        let mut game = new_game(settings);

        for _ in 0..10 {
            game.frame();
        }
        assert_eq!(game.state.phase, GamePhase::GameOver);
        assert_eq!(game.hud().game_overs, vec![100]);
        // Rendering continues after the game ends
        assert_eq!(game.surface().frames, 10);
    }

    #[test]
    fn test_oversized_star_count_from_storage_is_capped() {
        let json = r#"{"star_count":18446744073709551615,"enemy":{"origin_y":530}}"#;
        let settings = Settings::from_json(json).expect("valid json");
        let mut game = new_game(settings);
        game.frame();
        assert_eq!(game.state.phase, GamePhase::GameOver);
        assert_eq!(game.hud().game_overs, vec![crate::consts::MAX_STAR_COUNT]);
    }

    #[test]
    fn test_reduced_motion_skips_stars() {
        let mut settings = Settings::default();
        settings.enemy.origin_y = 530.0;
        settings.reduced_motion = true;
        let mut game = new_game(settings);
        game.frame();
        assert_eq!(game.hud().game_overs, vec![0]);
    }
}
