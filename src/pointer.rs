//! Pointer input state, filled in by the host's event handlers.

use crate::float::Float;
use crate::vec::Vec2;

/// Pointer buttons the cloth reacts to.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Button {
    /// Drags the cloth.
    Primary,
    /// Middle button. Ignored.
    Auxiliary,
    /// Cuts the cloth.
    Secondary,
}

impl Button {
    /// Map a DOM `MouseEvent.button` code.
    pub fn from_code(code: u16) -> Option<Self> {
        match code {
            0 => Some(Button::Primary),
            1 => Some(Button::Auxiliary),
            2 => Some(Button::Secondary),
            _ => None,
        }
    }
}

/// Latest raw pointer sample. Position is `None` until the first move.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Pointer<F: Float> {
    pub position: Option<Vec2<F>>,
    pub last_position: Option<Vec2<F>>,
    pub primary: bool,
    pub secondary: bool,
}

impl<F: Float> Pointer<F> {
    pub fn new() -> Self {
        Pointer { position: None, last_position: None, primary: false, secondary: false }
    }

    /// Record a move, shifting the current position into `last_position`.
    pub fn move_to(&mut self, pos: Vec2<F>) {
        self.last_position = self.position;
        self.position = Some(pos);
    }

    pub fn press(&mut self, button: Button) {
        self.set(button, true);
    }

    pub fn release(&mut self, button: Button) {
        self.set(button, false);
    }

    fn set(&mut self, button: Button, down: bool) {
        match button {
            Button::Primary => self.primary = down,
            Button::Secondary => self.secondary = down,
            Button::Auxiliary => {}
        }
    }

    /// Pointer left the surface: release both buttons but keep the position.
    pub fn leave(&mut self) {
        self.primary = false;
        self.secondary = false;
    }

    pub fn has_position(&self) -> bool {
        self.position.is_some()
    }

    /// Forget everything, e.g. when the window loses focus.
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}
