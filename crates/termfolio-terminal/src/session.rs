//! Interactive terminal session.
//!
//! All state lives in `TerminalSession`; every transition is a method call
//! that runs to completion before the next event is handled. Side effects
//! the session cannot perform itself (starting an export) are reported back
//! through `SubmitOutcome`.

use termfolio_profile::Profile;
use termfolio_types::input::{Direction, InputEvent, Key};

use crate::command::Command;
use crate::formatter::{self, EXPORT_NOTICE};
use crate::window::{Point, WindowState};

/// One interaction turn. An empty `command` marks an output-only entry
/// such as the welcome banner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryEntry {
    pub command: String,
    pub output: String,
}

impl HistoryEntry {
    fn output_only(output: String) -> Self {
        Self {
            command: String::new(),
            output,
        }
    }

    /// Whether the output should be styled as an error.
    pub fn is_error(&self) -> bool {
        formatter::is_error_output(&self.output)
    }
}

/// What a submission did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Blank input or a non-submitting event; nothing changed in history.
    Ignored,
    /// A command entry was appended.
    Appended,
    /// History was reset to the welcome banner.
    Cleared,
    /// The export notice was appended; the caller should start an export.
    ExportRequested,
}

/// The command line being edited.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputLine {
    text: String,
    selected: bool,
}

impl InputLine {
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Whether the whole text is selected (recalled or completed).
    pub fn is_selected(&self) -> bool {
        self.selected
    }

    /// Replace the text and select all of it.
    pub fn set_selected(&mut self, text: &str) {
        self.text = text.to_string();
        self.selected = true;
    }

    /// Type a character; a selection is replaced.
    pub fn insert(&mut self, ch: char) {
        if self.selected {
            self.text.clear();
            self.selected = false;
        }
        self.text.push(ch);
    }

    /// Delete the last character, or the whole selection.
    pub fn backspace(&mut self) {
        if self.selected {
            self.text.clear();
            self.selected = false;
        } else {
            self.text.pop();
        }
    }

    pub fn clear(&mut self) {
        self.text.clear();
        self.selected = false;
    }
}

/// Scroll offset (in rows) for `content_rows` of history shown in
/// `viewport_rows`: pinned to the newest row on overflow, top otherwise.
pub fn scroll_offset(content_rows: usize, viewport_rows: usize) -> usize {
    content_rows.saturating_sub(viewport_rows)
}

/// Session state: output history, recall buffer, completion cycle, input
/// line, and window geometry.
#[derive(Debug, Clone)]
pub struct TerminalSession {
    history: Vec<HistoryEntry>,
    command_buffer: Vec<String>,
    /// Index into `command_buffer`; `command_buffer.len()` means a fresh line.
    history_cursor: usize,
    autocomplete_matches: Vec<Command>,
    autocomplete_cursor: Option<usize>,
    input: InputLine,
    window: WindowState,
}

impl TerminalSession {
    /// Start a session seeded with the welcome banner.
    pub fn new(profile: &Profile, window: WindowState) -> Self {
        Self {
            history: vec![HistoryEntry::output_only(formatter::welcome_banner(profile))],
            command_buffer: Vec::new(),
            history_cursor: 0,
            autocomplete_matches: Vec::new(),
            autocomplete_cursor: None,
            input: InputLine::default(),
            window,
        }
    }

    pub fn history(&self) -> &[HistoryEntry] {
        &self.history
    }

    /// Submitted lines, oldest first.
    pub fn command_buffer(&self) -> &[String] {
        &self.command_buffer
    }

    pub fn history_cursor(&self) -> usize {
        self.history_cursor
    }

    pub fn autocomplete_matches(&self) -> &[Command] {
        &self.autocomplete_matches
    }

    pub fn input(&self) -> &InputLine {
        &self.input
    }

    pub fn window(&self) -> &WindowState {
        &self.window
    }

    pub fn window_mut(&mut self) -> &mut WindowState {
        &mut self.window
    }

    /// Submit whatever is on the command line.
    pub fn submit_input(&mut self, profile: &Profile) -> SubmitOutcome {
        let text = self.input.text().to_string();
        self.submit(&text, profile)
    }

    /// Run one command line against `profile`.
    pub fn submit(&mut self, text: &str, profile: &Profile) -> SubmitOutcome {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return SubmitOutcome::Ignored;
        }
        self.command_buffer.push(trimmed.to_string());
        self.history_cursor = self.command_buffer.len();
        self.input.clear();

        let command = trimmed.to_lowercase();
        log::debug!("Submitted command: {command}");
        match Command::parse(&command) {
            Some(Command::Clear) => {
                self.history = vec![HistoryEntry::output_only(formatter::welcome_banner(
                    profile,
                ))];
                SubmitOutcome::Cleared
            },
            Some(Command::Export) => {
                self.push(trimmed, EXPORT_NOTICE.to_string());
                SubmitOutcome::ExportRequested
            },
            _ => {
                let output = formatter::format(&command, profile);
                self.push(trimmed, output);
                SubmitOutcome::Appended
            },
        }
    }

    /// Append an output-only entry (e.g. the result of a finished export).
    pub fn push_notice(&mut self, text: impl Into<String>) {
        self.history.push(HistoryEntry::output_only(text.into()));
    }

    fn push(&mut self, command: &str, output: String) {
        self.history.push(HistoryEntry {
            command: command.to_string(),
            output,
        });
    }

    /// Recall an older (`Up`) or newer (`Down`) submitted line, selecting it.
    pub fn navigate_history(&mut self, direction: Direction) {
        let len = self.command_buffer.len();
        if len == 0 {
            return;
        }
        self.history_cursor = match direction {
            Direction::Up => self.history_cursor.saturating_sub(1),
            Direction::Down => (self.history_cursor + 1).min(len - 1),
        };
        self.input
            .set_selected(&self.command_buffer[self.history_cursor]);
    }

    /// Complete the command line, cycling through matches on repeated calls.
    pub fn autocomplete(&mut self) {
        let value = self.input.text().to_string();
        let stale = self.autocomplete_matches.is_empty()
            || value.is_empty()
            || !self
                .autocomplete_matches
                .iter()
                .any(|c| c.as_str().starts_with(&value));
        if stale {
            self.autocomplete_matches = Command::completions(&value);
            self.autocomplete_cursor = None;
        }
        let count = self.autocomplete_matches.len();
        if count == 0 {
            return;
        }
        let next = self.autocomplete_cursor.map_or(0, |i| (i + 1) % count);
        self.autocomplete_cursor = Some(next);
        self.input.set_selected(self.autocomplete_matches[next].as_str());
    }

    /// Forget the current completion cycle.
    pub fn reset_autocomplete(&mut self) {
        self.autocomplete_matches.clear();
        self.autocomplete_cursor = None;
    }

    /// Dispatch one input event.
    pub fn handle_input(&mut self, event: &InputEvent, profile: &Profile) -> SubmitOutcome {
        if event.is_keyboard() && !event.is_tab() {
            self.reset_autocomplete();
        }
        match event {
            InputEvent::KeyPress(Key::Enter) => return self.submit_input(profile),
            InputEvent::KeyPress(Key::Tab) => self.autocomplete(),
            InputEvent::KeyPress(Key::Up) => self.navigate_history(Direction::Up),
            InputEvent::KeyPress(Key::Down) => self.navigate_history(Direction::Down),
            InputEvent::TextInput(ch) => self.input.insert(*ch),
            InputEvent::Backspace => self.input.backspace(),
            InputEvent::PointerDown { x, y } => {
                let p = Point::new(*x, *y);
                if self.window.title_bar_contains(p) {
                    self.window.start_drag(p);
                }
            },
            InputEvent::PointerMove { x, y } => {
                self.window.drag(Point::new(*x, *y));
            },
            InputEvent::PointerUp { .. } => self.window.stop_drag(),
            InputEvent::Quit => {},
        }
        SubmitOutcome::Ignored
    }
}
