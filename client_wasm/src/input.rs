//! Keyboard input handling

use game_core::TickInput;

/// What the caller should do with a key event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyOutcome {
    /// Rebuild the match
    Restart,
    /// Movement key; suppress the browser default (page scrolling)
    Handled,
    /// Not ours
    Ignored,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Binding {
    Up,
    Down,
    Restart,
}

fn binding(key: &str) -> Option<Binding> {
    match key {
        "ArrowUp" | "w" | "W" => Some(Binding::Up),
        "ArrowDown" | "s" | "S" => Some(Binding::Down),
        "r" | "R" => Some(Binding::Restart),
        _ => None,
    }
}

/// Tracks which movement keys are currently held
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputTracker {
    up: bool,
    down: bool,
}

impl InputTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle key down event
    pub fn key_down(&mut self, key: &str) -> KeyOutcome {
        match binding(key) {
            Some(Binding::Up) => {
                self.up = true;
                KeyOutcome::Handled
            }
            Some(Binding::Down) => {
                self.down = true;
                KeyOutcome::Handled
            }
            Some(Binding::Restart) => KeyOutcome::Restart,
            None => KeyOutcome::Ignored,
        }
    }

    /// Handle key up event
    pub fn key_up(&mut self, key: &str) -> KeyOutcome {
        match binding(key) {
            Some(Binding::Up) => {
                self.up = false;
                KeyOutcome::Handled
            }
            Some(Binding::Down) => {
                self.down = false;
                KeyOutcome::Handled
            }
            _ => KeyOutcome::Ignored,
        }
    }

    /// Held keys as simulation input
    pub fn input(&self) -> TickInput {
        TickInput::new(self.up, self.down)
    }
}
