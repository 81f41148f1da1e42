//! Bundle templates.
//!
//! The three templates are either compiled into the binary or read from a
//! directory that overrides them (useful while iterating on the page).

use std::path::{Path, PathBuf};

use termfolio_types::error::{Result, TermfolioError};

/// File name of the page template inside the bundle.
pub const INDEX_HTML: &str = "index.html";
/// File name of the stylesheet template inside the bundle.
pub const STYLES_CSS: &str = "styles.css";
/// File name of the script template inside the bundle.
pub const APP_JS: &str = "app.js";

/// The raw text of the three templates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateSet {
    pub html: String,
    pub css: String,
    pub script: String,
}

/// Somewhere templates can be loaded from.
pub trait AssetSource: Send {
    fn load(&self) -> Result<TemplateSet>;
}

/// Templates compiled into the binary.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedAssets;

impl AssetSource for EmbeddedAssets {
    fn load(&self) -> Result<TemplateSet> {
        Ok(TemplateSet {
            html: include_str!("../assets/terminal/index.html").to_string(),
            css: include_str!("../assets/terminal/styles.css").to_string(),
            script: include_str!("../assets/terminal/app.js").to_string(),
        })
    }
}

/// Templates read from a directory holding `index.html`, `styles.css` and
/// `app.js`.
#[derive(Debug, Clone)]
pub struct DirAssets {
    root: PathBuf,
}

impl DirAssets {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn read(&self, name: &str) -> Result<String> {
        let path = self.root.join(name);
        std::fs::read_to_string(&path)
            .map_err(|e| TermfolioError::Template(format!("{}: {e}", path.display())))
    }
}

impl AssetSource for DirAssets {
    fn load(&self) -> Result<TemplateSet> {
        log::debug!("Loading templates from {}", self.root.display());
        Ok(TemplateSet {
            html: self.read(INDEX_HTML)?,
            css: self.read(STYLES_CSS)?,
            script: self.read(APP_JS)?,
        })
    }
}

/// Pick the template source: a directory override when configured, the
/// built-in templates otherwise.
pub fn asset_source(dir: Option<&Path>) -> Box<dyn AssetSource> {
    match dir {
        Some(dir) => Box::new(DirAssets::new(dir)),
        None => Box::new(EmbeddedAssets),
    }
}
