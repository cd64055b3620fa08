//! Browser client for single-player Pong
//!
//! Canvas 2D rendering, keyboard input and the animation-frame loop around
//! the `game_core` simulation. The DOM-facing parts only build for wasm32;
//! input, HUD text and drawing logic are plain Rust and tested natively.

pub mod hud;
pub mod input;
pub mod renderer;

#[cfg(target_arch = "wasm32")]
mod app;
#[cfg(target_arch = "wasm32")]
mod logger;

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

/// Entry point, run when the module is instantiated
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start_game() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    logger::init();

    app::start().inspect_err(|err| log::error!("failed to start: {:?}", err))
}
