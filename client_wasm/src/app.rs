//! Browser wiring: keyboard listeners and the animation-frame loop

use std::cell::RefCell;
use std::rc::Rc;

use game_core::{Config, Game, GameRng};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{KeyboardEvent, Window};

use crate::hud::Hud;
use crate::input::{InputTracker, KeyOutcome};
use crate::renderer::{canvas::CanvasSurface, draw_frame};

const CANVAS_ID: &str = "pongCanvas";

/// Everything the page callbacks share
struct App {
    game: Game,
    input: InputTracker,
    surface: CanvasSurface,
    hud: Hud,
    last_timestamp: Option<f64>,
}

impl App {
    fn restart(&mut self) {
        self.game.restart();
        self.hud.update(&self.game);
    }

    /// One animation frame: simulate elapsed time, then paint
    fn frame(&mut self, timestamp_ms: f64) -> Result<(), JsValue> {
        let dt = self
            .last_timestamp
            .map(|prev| ((timestamp_ms - prev) / 1000.0) as f32)
            .unwrap_or(0.0);
        self.last_timestamp = Some(timestamp_ms);

        self.game.step(&self.input.input(), dt);
        if self.game.events.scored() {
            self.hud.update(&self.game);
        }

        draw_frame(&mut self.surface, &self.game.snapshot())
    }
}

fn window() -> Result<Window, JsValue> {
    web_sys::window().ok_or_else(|| JsValue::from_str("No global window"))
}

fn request_animation_frame(window: &Window, f: &Closure<dyn FnMut(f64)>) -> Result<i32, JsValue> {
    window.request_animation_frame(f.as_ref().unchecked_ref())
}

/// Build the match from the page and start the loop
pub fn start() -> Result<(), JsValue> {
    let window = window()?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("No document"))?;

    let surface = CanvasSurface::from_element_id(&document, CANVAS_ID)?;
    let hud = Hud::from_document(&document)?;
    let size = surface.size();

    let game = Game::new(Config::with_field(size.x, size.y), GameRng::from_entropy());
    hud.update(&game);

    let app = Rc::new(RefCell::new(App {
        game,
        input: InputTracker::new(),
        surface,
        hud,
        last_timestamp: None,
    }));

    // First paint before the loop starts
    {
        let mut app = app.borrow_mut();
        let snapshot = app.game.snapshot();
        draw_frame(&mut app.surface, &snapshot)?;
    }

    {
        let app = app.clone();
        let on_key_down = Closure::<dyn FnMut(KeyboardEvent)>::new(move |event: KeyboardEvent| {
            let mut app = app.borrow_mut();
            match app.input.key_down(&event.key()) {
                KeyOutcome::Restart => app.restart(),
                KeyOutcome::Handled => event.prevent_default(),
                KeyOutcome::Ignored => {}
            }
        });
        document
            .add_event_listener_with_callback("keydown", on_key_down.as_ref().unchecked_ref())?;
        on_key_down.forget();
    }

    {
        let app = app.clone();
        let on_key_up = Closure::<dyn FnMut(KeyboardEvent)>::new(move |event: KeyboardEvent| {
            if app.borrow_mut().input.key_up(&event.key()) == KeyOutcome::Handled {
                event.prevent_default();
            }
        });
        document.add_event_listener_with_callback("keyup", on_key_up.as_ref().unchecked_ref())?;
        on_key_up.forget();
    }

    // The frame closure re-schedules itself through this slot
    let slot: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>> = Rc::new(RefCell::new(None));
    let next = slot.clone();
    let loop_window = window.clone();

    *slot.borrow_mut() = Some(Closure::new(move |timestamp: f64| {
        if let Err(err) = app.borrow_mut().frame(timestamp) {
            log::error!("frame failed: {:?}", err);
        }

        if let Some(callback) = next.borrow().as_ref() {
            if let Err(err) = request_animation_frame(&loop_window, callback) {
                log::error!("could not schedule next frame: {:?}", err);
            }
        }
    }));

    if let Some(callback) = slot.borrow().as_ref() {
        request_animation_frame(&window, callback)?;
    }

    log::info!("pong running on a {}x{} canvas", size.x, size.y);
    Ok(())
}
