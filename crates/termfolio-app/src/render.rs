//! Terminal preview drawing.
//!
//! The session window is rendered at full size into an off-screen buffer,
//! then the part inside the frame is copied to the screen, so a window
//! dragged past any edge shows exactly the cells that remain on screen.
//! Output rows wrap to the window width, and history scrolls to the newest
//! row only once the wrapped rows overflow the visible body.

use ratatui::Frame;
use ratatui::buffer::Buffer;
use ratatui::layout::{Position, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph, Widget};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use termfolio_terminal::{HistoryEntry, InputLine, TerminalSession, WindowState, scroll_offset};

use crate::app_state::AppState;

const PROMPT: &str = "$ ";

fn prompt_style() -> Style {
    Style::default().fg(Color::Green)
}

/// The part of `window` visible inside `area`, if any.
pub fn visible_rect(window: &WindowState, area: Rect) -> Option<Rect> {
    let left = window.position.x.max(i32::from(area.x));
    let top = window.position.y.max(i32::from(area.y));
    let right = (window.position.x + i32::from(window.width)).min(i32::from(area.right()));
    let bottom = (window.position.y + i32::from(window.height)).min(i32::from(area.bottom()));
    if left >= right || top >= bottom {
        return None;
    }
    Some(Rect::new(
        u16::try_from(left).ok()?,
        u16::try_from(top).ok()?,
        u16::try_from(right - left).ok()?,
        u16::try_from(bottom - top).ok()?,
    ))
}

/// Split one output row into pieces at most `width` columns wide, breaking
/// at spaces where possible and inside a word only when it alone is too
/// wide.
pub fn wrap_row(row: &str, width: usize) -> Vec<String> {
    if width == 0 || row.width() <= width {
        return vec![row.to_string()];
    }
    let mut rows = Vec::new();
    let mut line = String::new();
    let mut line_width = 0;
    let mut started = false;
    for word in row.split(' ') {
        let word_width = word.width();
        if started && line_width + 1 + word_width <= width {
            line.push(' ');
            line.push_str(word);
            line_width += 1 + word_width;
            continue;
        }
        if started {
            rows.push(std::mem::take(&mut line));
            line_width = 0;
        }
        started = true;
        for ch in word.chars() {
            let ch_width = ch.width().unwrap_or(0);
            if line_width > 0 && line_width + ch_width > width {
                rows.push(std::mem::take(&mut line));
                line_width = 0;
            }
            line.push(ch);
            line_width += ch_width;
        }
    }
    rows.push(line);
    rows
}

/// Display rows for the history, oldest first, wrapped to `width` columns.
pub fn history_lines(history: &[HistoryEntry], width: usize) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    for entry in history {
        if !entry.command.is_empty() {
            for (i, row) in wrap_row(&format!("{PROMPT}{}", entry.command), width)
                .into_iter()
                .enumerate()
            {
                let line = match row.strip_prefix(PROMPT) {
                    Some(command) if i == 0 => Line::from(vec![
                        Span::styled(PROMPT, prompt_style()),
                        Span::raw(command.to_string()),
                    ]),
                    _ => Line::raw(row),
                };
                lines.push(line);
            }
        }
        let style = if entry.is_error() {
            Style::default().fg(Color::Red)
        } else {
            Style::default()
        };
        for row in entry.output.lines() {
            lines.extend(
                wrap_row(row, width)
                    .into_iter()
                    .map(|piece| Line::styled(piece, style)),
            );
        }
        if entry.output.is_empty() {
            lines.push(Line::default());
        }
    }
    lines
}

/// The tail of `text` that fits in `room` columns.
fn tail_fitting(text: &str, room: usize) -> &str {
    let mut width = text.width();
    let mut start = 0;
    for (i, ch) in text.char_indices() {
        if width <= room {
            break;
        }
        width -= ch.width().unwrap_or(0);
        start = i + ch.len_utf8();
    }
    &text[start..]
}

/// The prompt row, scrolled so the end of the input and the cursor cell
/// stay visible.
fn input_line(input: &InputLine, width: usize) -> (Line<'static>, usize) {
    let text_style = if input.is_selected() {
        Style::default().add_modifier(Modifier::REVERSED)
    } else {
        Style::default()
    };
    let room = width.saturating_sub(PROMPT.width() + 1);
    let shown = tail_fitting(input.text(), room);
    let line = Line::from(vec![
        Span::styled(PROMPT, prompt_style()),
        Span::styled(shown.to_string(), text_style),
    ]);
    (line, PROMPT.width().saturating_add(shown.width()))
}

/// Cursor cell after `column` columns of the prompt row, if it is inside it.
fn cursor_position(prompt: Rect, column: usize) -> Option<Position> {
    let x = prompt.x.saturating_add(u16::try_from(column).ok()?);
    (x < prompt.right()).then_some(Position::new(x, prompt.y))
}

/// Render the whole window into a buffer whose origin is the window's
/// top-left corner. Returns the buffer and the window-local cursor cell.
pub fn render_window(session: &TerminalSession, title: &str) -> (Buffer, Option<Position>) {
    let window = session.window();
    let full = Rect::new(0, 0, window.width, window.height);
    let mut buf = Buffer::empty(full);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .title(format!(" {title} "));
    let inner = block.inner(full);
    block.render(full, &mut buf);
    if inner.height == 0 || inner.width == 0 {
        return (buf, None);
    }

    let body = Rect::new(inner.x, inner.y, inner.width, inner.height - 1);
    let prompt = Rect::new(inner.x, inner.bottom() - 1, inner.width, 1);

    let lines = history_lines(session.history(), usize::from(body.width));
    let offset = scroll_offset(lines.len(), usize::from(body.height));
    let visible: Vec<Line> = lines.into_iter().skip(offset).collect();
    Paragraph::new(visible).render(body, &mut buf);

    let (line, column) = input_line(session.input(), usize::from(prompt.width));
    Paragraph::new(line).render(prompt, &mut buf);
    (buf, cursor_position(prompt, column))
}

/// Draw the whole preview.
pub fn draw(frame: &mut Frame, state: &AppState) {
    draw_session(frame, &state.session, &state.title);
}

fn draw_session(frame: &mut Frame, session: &TerminalSession, title: &str) {
    let window = session.window();
    let Some(visible) = visible_rect(window, frame.area()) else {
        return;
    };
    let (canvas, cursor) = render_window(session, title);

    let to_local = |x: u16, y: u16| -> Option<Position> {
        let lx = u16::try_from(i32::from(x) - window.position.x).ok()?;
        let ly = u16::try_from(i32::from(y) - window.position.y).ok()?;
        Some(Position::new(lx, ly))
    };
    let screen = frame.buffer_mut();
    for y in visible.top()..visible.bottom() {
        for x in visible.left()..visible.right() {
            if let Some(local) = to_local(x, y) {
                screen[(x, y)] = canvas[local].clone();
            }
        }
    }

    if let Some(cursor) = cursor {
        let x = window.position.x + i32::from(cursor.x);
        let y = window.position.y + i32::from(cursor.y);
        if let (Ok(x), Ok(y)) = (u16::try_from(x), u16::try_from(y))
            && visible.contains(Position::new(x, y))
        {
            frame.set_cursor_position((x, y));
        }
    }
}

#[cfg(test)]
mod tests {
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;
    use termfolio_profile::{Profile, ProfileStore};
    use termfolio_storage::MemoryStorage;
    use termfolio_terminal::Point;
    use termfolio_types::config::TermfolioConfig;

    use super::*;
    use crate::app_state::AppStore;

    fn screen_rows(terminal: &Terminal<TestBackend>) -> Vec<String> {
        let buffer = terminal.backend().buffer();
        (0..buffer.area.height)
            .map(|y| {
                (0..buffer.area.width)
                    .map(|x| buffer[(x, y)].symbol())
                    .collect::<String>()
            })
            .collect()
    }

    fn screen_text(terminal: &Terminal<TestBackend>) -> String {
        screen_rows(terminal).join("\n")
    }

    fn drawn(state: &AppState) -> Terminal<TestBackend> {
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        terminal.draw(|f| draw(f, state)).unwrap();
        terminal
    }

    fn state() -> AppState {
        let mut store: AppStore = ProfileStore::new(Box::new(MemoryStorage::new()));
        store
            .set(Profile {
                name: Some("Ada".into()),
                ..Profile::default()
            })
            .unwrap();
        AppState::new(TermfolioConfig::default(), store, 80, 24)
    }

    #[test]
    fn visible_rect_clips_to_area() {
        let area = Rect::new(0, 0, 80, 24);
        let w = WindowState::new(Point::new(-10, 20), 30, 10);
        assert_eq!(visible_rect(&w, area), Some(Rect::new(0, 20, 20, 4)));
    }

    #[test]
    fn window_fully_off_screen_is_hidden() {
        let area = Rect::new(0, 0, 80, 24);
        let w = WindowState::new(Point::new(100, 5), 30, 10);
        assert_eq!(visible_rect(&w, area), None);
        let w = WindowState::new(Point::new(-30, 5), 30, 10);
        assert_eq!(visible_rect(&w, area), None);
    }

    #[test]
    fn history_lines_prefix_commands_and_split_output() {
        let history = vec![
            HistoryEntry {
                command: String::new(),
                output: "Welcome".into(),
            },
            HistoryEntry {
                command: "contact".into(),
                output: "Email: a@x.com\nPhone: 555".into(),
            },
            HistoryEntry {
                command: "education".into(),
                output: String::new(),
            },
        ];
        let lines = history_lines(&history, 70);
        assert_eq!(lines.len(), 6);
        assert_eq!(lines[1].to_string(), "$ contact");
        assert_eq!(lines[3].to_string(), "Phone: 555");
    }

    #[test]
    fn error_output_is_red() {
        let history = vec![HistoryEntry {
            command: "ls".into(),
            output: "Command not found: ls".into(),
        }];
        let lines = history_lines(&history, 70);
        assert_eq!(lines[1].style.fg, Some(Color::Red));
    }

    #[test]
    fn draws_title_banner_and_prompt() {
        let state = state();
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        terminal.draw(|f| draw(f, &state)).unwrap();
        let text = screen_text(&terminal);
        assert!(text.contains(" Ada "));
        assert!(text.contains("Welcome to your Terminal Portfolio!"));
        assert!(text.contains("$ "));
    }

    #[test]
    fn newest_entry_stays_visible_on_overflow() {
        let mut state = state();
        for _ in 0..40 {
            state.session.submit("name", &Profile::default());
        }
        state.session.push_notice("LAST LINE");
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        terminal.draw(|f| draw(f, &state)).unwrap();
        assert!(screen_text(&terminal).contains("LAST LINE"));
    }

    #[test]
    fn wrap_row_breaks_at_spaces() {
        let rows = wrap_row("alpha beta gamma", 11);
        assert_eq!(rows, vec!["alpha beta", "gamma"]);
        assert_eq!(wrap_row("short", 11), vec!["short"]);
        assert_eq!(wrap_row("", 11), vec![""]);
    }

    #[test]
    fn wrap_row_splits_overlong_words() {
        assert_eq!(wrap_row("abcdefgh", 3), vec!["abc", "def", "gh"]);
        assert_eq!(wrap_row("ab 一二三", 4), vec!["ab", "一二", "三"]);
    }

    #[test]
    fn wrap_row_keeps_indentation() {
        let rows = wrap_row("  Mark I and more", 8);
        assert_eq!(rows[0], "  Mark I");
    }

    #[test]
    fn long_output_wraps_into_window_width() {
        let text = "word ".repeat(40);
        let history = vec![HistoryEntry {
            command: "about".into(),
            output: text.trim_end().to_string(),
        }];
        let lines = history_lines(&history, 20);
        assert!(lines.len() > 5);
        assert!(lines.iter().all(|l| l.width() <= 20));
    }

    #[test]
    fn whole_banner_is_on_screen() {
        let state = state();
        let banner = state.session.history()[0].output.clone();
        assert!(banner.ends_with("or \"help\"."));

        let rows = screen_rows(&drawn(&state));
        let body: Vec<String> = rows
            .iter()
            .filter_map(|row| {
                let inner = row.trim().strip_prefix('│')?.strip_suffix('│')?;
                Some(inner.trim_end().to_string())
            })
            .filter(|row| !row.is_empty() && !row.starts_with('$'))
            .collect();
        assert!(body.len() >= 2);
        assert_eq!(body.join(" "), banner);
        assert!(screen_text(&drawn(&state)).contains("\"help\"."));
    }

    #[test]
    fn left_clipped_window_shows_its_inner_columns() {
        let mut state = state();
        state.session.window_mut().position = Point::new(-1, 0);
        let rows = screen_rows(&drawn(&state));
        assert!(rows[1].starts_with("Welcome to your Terminal Portfolio!"));
        assert!(rows[0].starts_with(" Ada ─"));
    }

    #[test]
    fn top_clipped_window_hides_title_row_only() {
        let mut state = state();
        state.session.window_mut().position = Point::new(0, -1);
        let rows = screen_rows(&drawn(&state));
        assert!(rows[0].starts_with("│Welcome to your Terminal Portfolio!"));
        assert!(!screen_text(&drawn(&state)).contains(" Ada "));
    }

    #[test]
    fn overlong_input_keeps_cursor_on_prompt_row() {
        let mut state = state();
        for _ in 0..70_000 {
            state.session.handle_input(
                &termfolio_types::input::InputEvent::TextInput('x'),
                &Profile::default(),
            );
        }
        state.session.handle_input(
            &termfolio_types::input::InputEvent::TextInput('Z'),
            &Profile::default(),
        );
        let mut terminal = drawn(&state);
        let rows = screen_rows(&terminal);
        let prompt_row = rows.iter().find(|r| r.contains("$ x")).unwrap();
        assert!(prompt_row.contains("xZ"));
        let cursor = terminal.get_cursor_position().unwrap();
        let window = state.session.window();
        assert_eq!(i32::from(cursor.y), window.position.y + i32::from(window.height) - 2);
        assert!(i32::from(cursor.x) < window.position.x + i32::from(window.width) - 1);
    }

    #[test]
    fn cursor_position_saturates_instead_of_wrapping() {
        let prompt = Rect::new(u16::MAX - 5, 0, 5, 1);
        assert_eq!(cursor_position(prompt, usize::from(u16::MAX) + 10), None);
        assert_eq!(cursor_position(Rect::new(0, 0, 10, 1), 3), Some(Position::new(3, 0)));
    }
}
