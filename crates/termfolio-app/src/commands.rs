use termfolio_export::spawn_export;
use termfolio_terminal::SubmitOutcome;
use termfolio_types::input::{InputEvent, Key};

use crate::app_state::{AppState, window_title};
use crate::input::AppEvent;

/// Result of handling a single app event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    Continue,
    Quit,
}

/// Route one app event into the session and run any side effect it asks for.
///
/// The stored profile is reloaded only when a line is submitted; pointer
/// and editing events reuse the held copy.
pub fn handle_event(event: &AppEvent, state: &mut AppState) -> EventResult {
    match event {
        AppEvent::Input(InputEvent::Quit) => return EventResult::Quit,
        AppEvent::Input(input) => {
            let profile = if *input == InputEvent::KeyPress(Key::Enter) {
                state.store.get()
            } else {
                state.store.current()
            };
            let outcome = state.session.handle_input(input, profile);
            state.title = window_title(profile.name_text());
            process_outcome(outcome, state);
        },
        AppEvent::Resize { width, height } => {
            state.session.window_mut().recenter(*width, *height);
        },
    }
    EventResult::Continue
}

/// Act on what a submission did. Only `export` needs the app's help.
pub fn process_outcome(outcome: SubmitOutcome, state: &mut AppState) {
    if outcome == SubmitOutcome::ExportRequested {
        let profile = state.store.current().clone();
        let job = spawn_export(state.exporter(), profile);
        state.export_jobs.push(job);
        log::info!("Export started ({} running)", state.export_jobs.len());
    }
}

/// Collect finished exports and report each one in the session.
pub fn poll_export_jobs(state: &mut AppState) {
    let mut finished = Vec::new();
    state.export_jobs.retain(|job| match job.try_poll() {
        Some(result) => {
            finished.push(result);
            false
        },
        None => true,
    });
    for result in finished {
        match result {
            Ok(path) => state
                .session
                .push_notice(format!("Exported to {}", path.display())),
            Err(e) => state.session.push_notice(format!("Export failed: {e}")),
        }
    }
}
