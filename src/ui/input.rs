/// Input state tracker.
///
/// Drains all pending terminal key events once per frame. The game is
/// turn-based per tick, so only discrete presses matter; key-repeat
/// events count as presses, release events are ignored.

use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers, poll};

pub struct InputState {
    /// Key presses collected during the most recent drain, in arrival order.
    pressed: Vec<KeyCode>,
    ctrl_c: bool,
}

impl InputState {
    pub fn new() -> Self {
        InputState {
            pressed: Vec::with_capacity(8),
            ctrl_c: false,
        }
    }

    /// Drain all pending terminal events. Call once per frame, before
    /// feeding commands to the session.
    pub fn drain_events(&mut self) {
        self.pressed.clear();
        self.ctrl_c = false;

        while poll(Duration::ZERO).unwrap_or(false) {
            if let Ok(Event::Key(key)) = event::read() {
                if key.kind == KeyEventKind::Release {
                    continue;
                }
                if key.code == KeyCode::Char('c')
                    && key.modifiers.contains(KeyModifiers::CONTROL)
                {
                    self.ctrl_c = true;
                    continue;
                }
                self.pressed.push(key.code);
            }
        }
    }

    pub fn pressed(&self) -> &[KeyCode] {
        &self.pressed
    }

    pub fn any_pressed(&self, keys: &[KeyCode]) -> bool {
        self.pressed.iter().any(|code| keys.contains(code))
    }

    pub fn ctrl_c_pressed(&self) -> bool {
        self.ctrl_c
    }
}
