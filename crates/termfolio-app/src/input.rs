//! Crossterm event translation.

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

use termfolio_types::input::{InputEvent, Key};

/// What the preview loop should do with one terminal event.
#[derive(Debug, Clone, PartialEq)]
pub enum AppEvent {
    /// Feed to the session.
    Input(InputEvent),
    /// The screen changed size.
    Resize { width: u16, height: u16 },
}

/// Map a crossterm event to an app event. Events the session has no use
/// for (key releases, focus changes, paste, other buttons) map to `None`.
pub fn translate(event: Event) -> Option<AppEvent> {
    match event {
        Event::Key(key) => translate_key(key).map(AppEvent::Input),
        Event::Mouse(mouse) => translate_mouse(mouse).map(AppEvent::Input),
        Event::Resize(width, height) => Some(AppEvent::Resize { width, height }),
        _ => None,
    }
}

fn translate_key(key: KeyEvent) -> Option<InputEvent> {
    if key.kind != KeyEventKind::Press {
        return None;
    }
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Esc => Some(InputEvent::Quit),
        KeyCode::Char('c') if ctrl => Some(InputEvent::Quit),
        KeyCode::Char(_) if ctrl => None,
        KeyCode::Char(ch) => Some(InputEvent::TextInput(ch)),
        KeyCode::Enter => Some(InputEvent::KeyPress(Key::Enter)),
        KeyCode::Tab => Some(InputEvent::KeyPress(Key::Tab)),
        KeyCode::Up => Some(InputEvent::KeyPress(Key::Up)),
        KeyCode::Down => Some(InputEvent::KeyPress(Key::Down)),
        KeyCode::Backspace => Some(InputEvent::Backspace),
        _ => None,
    }
}

fn translate_mouse(mouse: MouseEvent) -> Option<InputEvent> {
    let x = i32::from(mouse.column);
    let y = i32::from(mouse.row);
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => Some(InputEvent::PointerDown { x, y }),
        MouseEventKind::Drag(MouseButton::Left) | MouseEventKind::Moved => {
            Some(InputEvent::PointerMove { x, y })
        },
        MouseEventKind::Up(MouseButton::Left) => Some(InputEvent::PointerUp { x, y }),
        _ => None,
    }
}
