//! termfolio entry point.
//!
//! `termfolio submit` stores a profile, `termfolio show` prints one command,
//! `termfolio export` writes the standalone bundle, and `termfolio` alone
//! opens the interactive terminal preview. In the preview, Tab completes,
//! Up/Down recall earlier lines, the title bar drags with the mouse, and
//! Escape quits.

mod app_state;
mod cli;
mod commands;
mod input;
mod render;

use std::fs::OpenOptions;
use std::io::stdout;
use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::ExecutableCommand;
use crossterm::event::{self, DisableMouseCapture, EnableMouseCapture};
use ratatui::DefaultTerminal;

use app_state::{AppState, AppStore};
use cli::{Cli, Commands};
use commands::EventResult;
use termfolio_profile::ProfileStore;
use termfolio_storage::FileStorage;
use termfolio_types::config::TermfolioConfig;

/// How long the preview waits for input before polling exports again.
const TICK: Duration = Duration::from_millis(100);

fn main() -> Result<()> {
    let command = Cli::parse().into_command();
    let config = TermfolioConfig::resolve()?;
    init_logging(&command, &config.log_file)?;

    let storage = FileStorage::open(&config.storage_dir)
        .with_context(|| format!("opening {}", config.storage_dir.display()))?;
    let mut store: AppStore = ProfileStore::new(Box::new(storage));

    match command {
        Commands::Run => run_preview(config, store)?,
        Commands::Submit { file } => {
            cli::submit(&mut store, &file)?;
            println!("Stored profile from {}", file.display());
        },
        Commands::Show { command } => println!("{}", cli::show(&mut store, &command)),
        Commands::Export => {
            let profile = store.get().clone();
            let path = app_state::exporter_for(&config).export(&profile)?;
            println!("Exported to {}", path.display());
        },
        Commands::Clear => {
            store.clear()?;
            println!("Cleared stored profile");
        },
    }
    Ok(())
}

/// Log to stderr, except while the preview owns the screen: then logs go
/// to the configured file.
fn init_logging(command: &Commands, log_file: &Path) -> Result<()> {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"));
    if *command == Commands::Run {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(log_file)
            .with_context(|| format!("opening log file {}", log_file.display()))?;
        builder.target(env_logger::Target::Pipe(Box::new(file)));
    }
    builder.init();
    Ok(())
}

fn run_preview(config: TermfolioConfig, store: AppStore) -> Result<()> {
    log::info!("Starting terminal preview");
    let terminal = ratatui::init();
    if let Err(e) = stdout().execute(EnableMouseCapture) {
        log::warn!("Failed to enable mouse capture: {e}");
    }
    let result = preview(terminal, config, store);
    let _ = stdout().execute(DisableMouseCapture);
    ratatui::restore();
    log::info!("Terminal preview closed");
    result
}

fn preview(terminal: DefaultTerminal, config: TermfolioConfig, store: AppStore) -> Result<()> {
    let size = terminal.size()?;
    let state = AppState::new(config, store, size.width, size.height);
    event_loop(terminal, state)
}

fn event_loop(mut terminal: DefaultTerminal, mut state: AppState) -> Result<()> {
    loop {
        commands::poll_export_jobs(&mut state);
        terminal.draw(|frame| render::draw(frame, &state))?;

        if !event::poll(TICK)? {
            continue;
        }
        let Some(app_event) = input::translate(event::read()?) else {
            continue;
        };
        if commands::handle_event(&app_event, &mut state) == EventResult::Quit {
            break;
        }
    }
    if !state.export_jobs.is_empty() {
        log::info!(
            "Waiting for {} export(s) to finish",
            state.export_jobs.len()
        );
        for job in state.export_jobs {
            if let Err(e) = job.wait() {
                log::warn!("Export failed: {e}");
            }
        }
    }
    Ok(())
}
