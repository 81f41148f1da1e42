//! Command formatter and terminal session.
//!
//! The formatter is a pure mapping from a command token and a profile to the
//! text shown for it. The session layers the interactive model on top:
//! output history, a recall buffer for submitted lines, Tab completion over
//! the fixed command set, and a draggable window. Front-ends translate their
//! native events into `InputEvent`s and feed them to the session.

mod command;
mod formatter;
mod session;
mod window;

/// The fixed set of portfolio commands.
pub use command::Command;
/// Render one command against a profile.
pub use formatter::format;
/// Commands advertised by a profile (its keys that are commands).
pub use formatter::available_commands;
/// Whether an output string is the unknown-command error.
pub use formatter::is_error_output;
/// The banner shown at session start and after `clear`.
pub use formatter::welcome_banner;
/// Fixed notice pushed when an export starts.
pub use formatter::{EXPORT_NOTICE, NOT_FOUND_PREFIX};
/// One (command, output) turn of the session.
pub use session::HistoryEntry;
/// The editable command line.
pub use session::InputLine;
/// What a submission did, so the caller can run side effects.
pub use session::SubmitOutcome;
/// The interactive session state machine.
pub use session::TerminalSession;
/// Scroll position keeping the newest entry visible only on overflow.
pub use session::scroll_offset;
/// Window position and drag state.
pub use window::{Point, WindowState};
