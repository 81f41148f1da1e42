//! Runtime configuration loaded from `termfolio.toml`.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Result, TermfolioError};

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV: &str = "TERMFOLIO_CONFIG";

/// Config file picked up from the working directory when present.
pub const DEFAULT_CONFIG_FILE: &str = "termfolio.toml";

/// Top-level termfolio configuration. Every field is optional in the file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TermfolioConfig {
    /// Directory holding the persisted profile blob.
    pub storage_dir: PathBuf,
    /// Directory `terminal.zip` is written to.
    pub export_dir: PathBuf,
    /// Optional directory overriding the built-in export templates.
    pub assets_dir: Option<PathBuf>,
    /// Terminal window width in cells.
    pub window_width: u16,
    /// Terminal window height in cells.
    pub window_height: u16,
    /// Log destination while the preview owns the screen.
    pub log_file: PathBuf,
}

impl Default for TermfolioConfig {
    fn default() -> Self {
        Self {
            storage_dir: PathBuf::from(".termfolio"),
            export_dir: PathBuf::from("."),
            assets_dir: None,
            window_width: 72,
            window_height: 22,
            log_file: PathBuf::from("termfolio.log"),
        }
    }
}

impl TermfolioConfig {
    /// Parse a config from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a config file from disk.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&text)?;
        log::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Resolve the active config: `$TERMFOLIO_CONFIG`, then
    /// `./termfolio.toml`, then built-in defaults.
    pub fn resolve() -> Result<Self> {
        if let Ok(path) = std::env::var(CONFIG_ENV) {
            return Self::load(Path::new(&path));
        }
        let local = Path::new(DEFAULT_CONFIG_FILE);
        if local.exists() {
            return Self::load(local);
        }
        Ok(Self::default())
    }

    fn validate(&self) -> Result<()> {
        if self.window_width < 20 || self.window_height < 6 {
            return Err(TermfolioError::Config(format!(
                "window too small: {}x{} (minimum 20x6)",
                self.window_width, self.window_height
            )));
        }
        Ok(())
    }
}
