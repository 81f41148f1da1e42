//! Snapshot injection and archive packaging.

use std::io::{Cursor, Write};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};

use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

use termfolio_profile::Profile;
use termfolio_types::error::{Result, TermfolioError};

use crate::assets::{APP_JS, AssetSource, INDEX_HTML, STYLES_CSS, TemplateSet};

/// Token in the script template replaced by the profile snapshot.
pub const PLACEHOLDER: &str = "__USER_COMMANDS__";

/// File name of the exported archive.
pub const ARCHIVE_NAME: &str = "terminal.zip";

/// Pretty JSON of the profile's export snapshot.
pub fn snapshot_json(profile: &Profile) -> Result<String> {
    Ok(serde_json::to_string_pretty(&profile.snapshot())?)
}

/// Replace the single placeholder in `script` with `json`.
pub fn inject(script: &str, json: &str) -> Result<String> {
    match script.matches(PLACEHOLDER).count() {
        1 => Ok(script.replacen(PLACEHOLDER, json, 1)),
        0 => Err(TermfolioError::Template(format!(
            "{APP_JS} has no {PLACEHOLDER} placeholder"
        ))),
        n => Err(TermfolioError::Template(format!(
            "{APP_JS} has {n} {PLACEHOLDER} placeholders, expected one"
        ))),
    }
}

/// Zip the three bundle files into an in-memory archive.
pub fn build_archive(html: &str, css: &str, script: &str) -> Result<Vec<u8>> {
    let mut zip = ZipWriter::new(Cursor::new(Vec::new()));
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);
    for (name, body) in [(INDEX_HTML, html), (STYLES_CSS, css), (APP_JS, script)] {
        zip.start_file(name, options)
            .map_err(|e| TermfolioError::Export(format!("{name}: {e}")))?;
        zip.write_all(body.as_bytes())?;
    }
    let cursor = zip
        .finish()
        .map_err(|e| TermfolioError::Export(format!("finalize archive: {e}")))?;
    Ok(cursor.into_inner())
}

/// Writes `terminal.zip` bundles for a profile.
pub struct Exporter {
    assets: Box<dyn AssetSource>,
    out_dir: PathBuf,
}

impl Exporter {
    pub fn new(assets: Box<dyn AssetSource>, out_dir: impl Into<PathBuf>) -> Self {
        Self {
            assets,
            out_dir: out_dir.into(),
        }
    }

    /// Where the archive will be written.
    pub fn archive_path(&self) -> PathBuf {
        self.out_dir.join(ARCHIVE_NAME)
    }

    /// Build the bundle bytes without touching the filesystem.
    pub fn bundle(&self, profile: &Profile) -> Result<Vec<u8>> {
        let TemplateSet { html, css, script } = self.assets.load()?;
        let script = inject(&script, &snapshot_json(profile)?)?;
        build_archive(&html, &css, &script)
    }

    /// Export `profile`, replacing any previous archive. Returns the path
    /// written.
    pub fn export(&self, profile: &Profile) -> Result<PathBuf> {
        let bytes = self.bundle(profile)?;
        std::fs::create_dir_all(&self.out_dir)?;
        let path = self.archive_path();
        write_replacing(&path, &bytes)?;
        log::info!("Exported {} ({} bytes)", path.display(), bytes.len());
        Ok(path)
    }
}

/// Write through a uniquely named temp file so concurrent exports never
/// share one.
fn write_replacing(path: &Path, bytes: &[u8]) -> Result<()> {
    static NEXT: AtomicU64 = AtomicU64::new(0);
    let n = NEXT.fetch_add(1, Ordering::Relaxed);
    let tmp = path.with_extension(format!("zip.{}-{n}.tmp", std::process::id()));
    std::fs::write(&tmp, bytes)?;
    std::fs::rename(&tmp, path)?;
    Ok(())
}
