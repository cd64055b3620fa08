//! Score and message text next to the canvas

use game_core::Score;

/// Scoreboard line, e.g. `Player: 3    AI: 5`
pub fn score_text(score: &Score) -> String {
    format!("Player: {}    AI: {}", score.player, score.opponent)
}

#[cfg(target_arch = "wasm32")]
pub use dom::Hud;

#[cfg(target_arch = "wasm32")]
mod dom {
    use game_core::Game;
    use wasm_bindgen::JsValue;
    use web_sys::{Document, Element};

    /// The scoreboard and message elements
    pub struct Hud {
        scoreboard: Element,
        message: Element,
    }

    impl Hud {
        pub fn from_document(document: &Document) -> Result<Self, JsValue> {
            let find = |id: &str| {
                document
                    .get_element_by_id(id)
                    .ok_or_else(|| JsValue::from_str(&format!("No element with id '{id}'")))
            };

            Ok(Self {
                scoreboard: find("scoreboard")?,
                message: find("message")?,
            })
        }

        /// Show the current score and outcome (empty while playing)
        pub fn update(&self, game: &Game) {
            self.scoreboard
                .set_text_content(Some(&super::score_text(&game.score)));
            self.message.set_text_content(Some(game.message()));
        }
    }
}
