//! Canonical input events.
//!
//! The windowing layer converts toolkit events into these, with positions
//! already mapped from screen to world space (see [`crate::viewport`]).

use crate::model::Point;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
}

/// Bitmask of buttons held down while an event was generated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Buttons(u8);

impl Buttons {
    pub const NONE: Buttons = Buttons(0);
    pub const LEFT: Buttons = Buttons(1);
    pub const RIGHT: Buttons = Buttons(1 << 1);
    pub const MIDDLE: Buttons = Buttons(1 << 2);

    pub fn contains(self, button: MouseButton) -> bool {
        self.0 & Self::from(button).0 != 0
    }

    pub fn with(self, button: MouseButton) -> Self {
        Buttons(self.0 | Self::from(button).0)
    }

    pub fn bits(self) -> u8 {
        self.0
    }
}

impl From<MouseButton> for Buttons {
    fn from(button: MouseButton) -> Self {
        match button {
            MouseButton::Left => Buttons::LEFT,
            MouseButton::Right => Buttons::RIGHT,
            MouseButton::Middle => Buttons::MIDDLE,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
    pub meta: bool,
}

impl Modifiers {
    pub const NONE: Modifiers = Modifiers {
        shift: false,
        ctrl: false,
        alt: false,
        meta: false,
    };

    pub const SHIFT: Modifiers = Modifiers {
        shift: true,
        ..Modifiers::NONE
    };

    pub const CTRL: Modifiers = Modifiers {
        ctrl: true,
        ..Modifiers::NONE
    };
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    /// World coordinates.
    pub position: Point,
    /// Button that changed state; `None` for plain motion.
    pub button: Option<MouseButton>,
    pub buttons: Buttons,
    pub modifiers: Modifiers,
}

impl PointerEvent {
    /// Left-button press at `position`.
    pub fn press(position: Point, modifiers: Modifiers) -> Self {
        Self {
            position,
            button: Some(MouseButton::Left),
            buttons: Buttons::LEFT,
            modifiers,
        }
    }

    /// Motion with the left button held.
    pub fn drag(position: Point, modifiers: Modifiers) -> Self {
        Self {
            position,
            button: None,
            buttons: Buttons::LEFT,
            modifiers,
        }
    }

    /// Motion with no button held.
    pub fn hover(position: Point) -> Self {
        Self {
            position,
            button: None,
            buttons: Buttons::NONE,
            modifiers: Modifiers::NONE,
        }
    }

    /// Left-button release at `position`.
    pub fn release(position: Point, modifiers: Modifiers) -> Self {
        Self {
            position,
            button: Some(MouseButton::Left),
            buttons: Buttons::NONE,
            modifiers,
        }
    }

    pub fn is_left(&self) -> bool {
        self.button == Some(MouseButton::Left)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Delete,
    Backspace,
    Escape,
    Char(char),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyEvent {
    pub key: Key,
    pub modifiers: Modifiers,
}

impl KeyEvent {
    pub fn new(key: Key, modifiers: Modifiers) -> Self {
        Self { key, modifiers }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    PointerDown(PointerEvent),
    PointerMove(PointerEvent),
    PointerUp(PointerEvent),
    Key(KeyEvent),
}
