//! Command-line surface: argument parsing and the one-shot subcommands.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};

use termfolio_profile::{Profile, tidy_tag_fields};
use termfolio_types::error::TermfolioError;

use crate::app_state::AppStore;

#[derive(Debug, Parser)]
#[command(name = "termfolio", version)]
#[command(about = "Terminal-style portfolio: store a profile, preview it, export it", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Commands {
    /// Open the interactive terminal preview (the default)
    Run,
    /// Validate a JSON or TOML profile and store it
    Submit {
        /// Profile file; `.toml` is read as TOML, anything else as JSON
        file: PathBuf,
    },
    /// Print one command's output against the stored profile
    Show {
        /// Command token, e.g. `skills`
        command: String,
    },
    /// Write terminal.zip to the export directory
    Export,
    /// Remove the stored profile
    Clear,
}

impl Cli {
    /// The subcommand to run; no subcommand means `run`.
    pub fn into_command(self) -> Commands {
        self.command.unwrap_or(Commands::Run)
    }
}

/// Read a profile file; `.toml` files are TOML, everything else JSON.
pub fn read_profile(path: &Path) -> Result<Profile> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading {}", path.display()))?;
    let is_toml = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("toml"));
    let profile = if is_toml {
        Profile::from_toml(&text)
    } else {
        Profile::from_json(&text)
    };
    profile.with_context(|| format!("parsing {}", path.display()))
}

/// Validate and store the profile in `path`.
pub fn submit(store: &mut AppStore, path: &Path) -> Result<()> {
    let mut profile = read_profile(path)?;
    tidy_tag_fields(&mut profile);
    match store.submit(profile) {
        Ok(()) => Ok(()),
        Err(TermfolioError::Validation(missing)) => {
            bail!("profile is incomplete, missing: {}", missing.join(", "))
        },
        Err(e) => Err(e.into()),
    }
}

/// Output of one command against the stored profile.
pub fn show(store: &mut AppStore, command: &str) -> String {
    termfolio_terminal::format(&command.trim().to_lowercase(), store.get())
}
