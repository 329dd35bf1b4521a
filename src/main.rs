//! Star Shooter entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{HtmlCanvasElement, KeyboardEvent};

    use star_shooter::Game;
    use star_shooter::Settings;
    use star_shooter::hud::DomHud;
    use star_shooter::renderer::Canvas2dSurface;

    type WebGame = Game<Canvas2dSurface, DomHud>;

    pub fn run() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        if let Err(e) = console_log::init_with_level(log::Level::Info) {
            web_sys::console::warn_1(&format!("Logger init failed: {}", e).into());
        }

        log::info!("Star Shooter starting...");

        let window = web_sys::window().ok_or("no window")?;
        let document = window.document().ok_or("no document")?;

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("gameCanvas")
            .ok_or("no #gameCanvas element")?
            .dyn_into()?;

        let surface = Canvas2dSurface::new(&canvas)?;

        // The canvas decides the arena size
        let mut settings = Settings::load();
        let (width, height) = surface.size();
        settings.arena.width = width;
        settings.arena.height = height;
        let settings = settings.validated();
        settings.save();

        let seed = js_sys::Date::now() as u64;
        let hud = DomHud::new(document);
        let game = Rc::new(RefCell::new(Game::new(settings, surface, hud, seed)));

        setup_input_handlers(&window, game.clone())?;

        // Start game loop
        request_animation_frame(game);

        log::info!("Star Shooter running!");
        Ok(())
    }

    fn setup_input_handlers(
        window: &web_sys::Window,
        game: Rc<RefCell<WebGame>>,
    ) -> Result<(), JsValue> {
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                if game.borrow_mut().key_down(&event.key()) {
                    event.prevent_default();
                }
            });
            window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        {
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                game.borrow_mut().key_up(&event.key());
            });
            window.add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        Ok(())
    }

    fn request_animation_frame(game: Rc<RefCell<WebGame>>) {
        let Some(window) = web_sys::window() else {
            log::error!("No window, stopping game loop");
            return;
        };
        let closure = Closure::once(move |_time: f64| {
            game_loop(game);
        });
        if let Err(e) = window.request_animation_frame(closure.as_ref().unchecked_ref()) {
            log::error!("requestAnimationFrame failed: {:?}", e);
        }
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<WebGame>>) {
        game.borrow_mut().frame();
        request_animation_frame(game);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    if let Err(e) = wasm_game::run() {
        log::error!("Failed to start: {:?}", e);
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use star_shooter::hud::NullHud;
    use star_shooter::renderer::Surface;
    use star_shooter::sim::{GameEvent, Rect};
    use star_shooter::{FormationMode, Game, Settings};

    /// Surface that only counts draw calls
    #[derive(Default)]
    struct Headless {
        fills: u64,
    }

    impl Surface for Headless {
        fn fill_rect(&mut self, _rect: Rect, _color: &str) {
            self.fills += 1;
        }

        fn fade(&mut self, _alpha: f32) {}
    }

    env_logger::init();
    log::info!("Star Shooter (native) starting...");
    log::info!("Native mode runs a headless demo - build for wasm32 for the playable version");

    let mut settings = Settings::load();
    if let Some(mode) = std::env::args().nth(1).and_then(|a| FormationMode::from_str(&a)) {
        settings.formation_mode = mode;
    }
    settings.save();

    let mut game = Game::new(settings, Headless::default(), NullHud, 0);

    // Autopilot: sweep back and forth, firing every few frames
    let mut frames = 0u64;
    let mut kills = 0u32;
    while !game.state.is_over() && frames < 20_000 {
        let x = game.state.player.pos.x;
        let max_x = game.state.width - game.state.player.size.x;
        if x <= 0.0 {
            game.key_up("ArrowLeft");
            game.key_down("ArrowRight");
        } else if x >= max_x {
            game.key_up("ArrowRight");
            game.key_down("ArrowLeft");
        } else if frames == 0 {
            game.key_down("ArrowRight");
        }
        if frames % 8 == 0 {
            game.key_down(" ");
        }

        for event in game.frame() {
            if let GameEvent::EnemyDestroyed { .. } = event {
                kills += 1;
            }
        }
        frames += 1;

        if game.state.formation.alive_count() == 0 {
            log::info!("Formation cleared");
            break;
        }
    }

    println!(
        "\nDemo finished after {} frames: {} kills, score {}, {} rectangles drawn",
        frames,
        kills,
        game.state.score,
        game.surface().fills
    );
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
