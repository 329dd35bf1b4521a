//! Canvas 2D rendering module
//!
//! The scene is drawn as solid rectangles over a `Surface`. Instead of clearing,
//! each frame starts by washing the whole surface with translucent black, which
//! leaves fading trails behind moving objects.

pub mod scene;
#[cfg(target_arch = "wasm32")]
pub mod canvas;

pub use scene::{Palette, Surface, render};
#[cfg(target_arch = "wasm32")]
pub use canvas::Canvas2dSurface;
