//! Heads-up display: score readout and game over presentation

use crate::starfield::Star;

/// Output side of the game: everything outside the canvas
pub trait Hud {
    /// Called with the new total after every kill
    fn set_score(&mut self, score: u64);

    /// Called once when the session ends
    fn show_game_over(&mut self, stars: &[Star]);
}

/// Hud that ignores everything (native runs and tests)
#[derive(Debug, Default, Clone, Copy)]
pub struct NullHud;

impl Hud for NullHud {
    fn set_score(&mut self, _score: u64) {}

    fn show_game_over(&mut self, _stars: &[Star]) {}
}

#[cfg(target_arch = "wasm32")]
pub use dom::DomHud;

#[cfg(target_arch = "wasm32")]
mod dom {
    use wasm_bindgen::{JsCast, JsValue};
    use web_sys::{Document, Element, HtmlElement};

    use super::Hud;
    use crate::starfield::Star;

    /// Hud backed by the page's `#score` and `#gameOver` elements
    pub struct DomHud {
        document: Document,
        score: Option<Element>,
        game_over: Option<HtmlElement>,
    }

    impl DomHud {
        pub fn new(document: Document) -> Self {
            let score = document.get_element_by_id("score");
            if score.is_none() {
                log::warn!("#score element missing, score will not be shown");
            }
            let game_over = document
                .get_element_by_id("gameOver")
                .and_then(|el| el.dyn_into::<HtmlElement>().ok());
            if game_over.is_none() {
                log::warn!("#gameOver element missing");
            }
            Self {
                document,
                score,
                game_over,
            }
        }

        fn spawn_stars(&self, stars: &[Star]) -> Result<(), JsValue> {
            let container = self.document.create_element("div")?;
            container.set_class_name("stars");

            for star in stars {
                let el = self
                    .document
                    .create_element("div")?
                    .dyn_into::<HtmlElement>()?;
                el.set_class_name("star");
                let style = el.style();
                style.set_property("left", &format!("{}%", star.left))?;
                style.set_property("top", &format!("{}%", star.top))?;
                style.set_property("--duration", &format!("{}s", star.duration))?;
                container.append_child(&el)?;
            }

            let body = self
                .document
                .body()
                .ok_or_else(|| JsValue::from_str("no body"))?;
            body.append_child(&container)?;
            Ok(())
        }
    }

    impl Hud for DomHud {
        fn set_score(&mut self, score: u64) {
            if let Some(el) = &self.score {
                el.set_text_content(Some(&score.to_string()));
            }
        }

        fn show_game_over(&mut self, stars: &[Star]) {
            if let Some(el) = &self.game_over {
                let _ = el.style().set_property("display", "block");
            }
            if let Err(e) = self.spawn_stars(stars) {
                log::warn!("Failed to create star field: {:?}", e);
            }
        }
    }
}
