//! Platform-agnostic input event types.
//!
//! Every front-end maps its native keyboard and mouse input to these enums.
//! The terminal session never sees raw platform input.

use serde::{Deserialize, Serialize};

/// A platform-agnostic input event.
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// A named key pressed.
    KeyPress(Key),
    /// Character typed into the command line.
    TextInput(char),
    /// Backspace / delete-left.
    Backspace,
    /// Primary pointer button pressed at absolute position.
    PointerDown { x: i32, y: i32 },
    /// Pointer moved to absolute position.
    PointerMove { x: i32, y: i32 },
    /// Primary pointer button released.
    PointerUp { x: i32, y: i32 },
    /// User requested quit.
    Quit,
}

/// Named keys the terminal session reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Key {
    Enter,
    Tab,
    Up,
    Down,
}

/// Direction for command-line history navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    /// Towards older commands.
    Up,
    /// Towards newer commands.
    Down,
}

impl InputEvent {
    /// Whether this event is a Tab press. Every other keystroke resets an
    /// in-progress autocomplete cycle.
    pub fn is_tab(&self) -> bool {
        matches!(self, InputEvent::KeyPress(Key::Tab))
    }

    /// Whether this event comes from the keyboard (as opposed to the pointer).
    pub fn is_keyboard(&self) -> bool {
        matches!(
            self,
            InputEvent::KeyPress(_) | InputEvent::TextInput(_) | InputEvent::Backspace
        )
    }
}
