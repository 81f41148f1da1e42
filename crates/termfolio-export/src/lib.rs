//! Standalone bundle export.
//!
//! An export freezes the profile into a snapshot, injects it as JSON into the
//! script template, and zips `index.html`, `styles.css` and `app.js` into
//! `terminal.zip`. The bundled script replays the terminal session in a
//! browser against the embedded snapshot.

pub mod assets;
pub mod bundle;
pub mod job;

pub use assets::{AssetSource, DirAssets, EmbeddedAssets, TemplateSet, asset_source};
pub use bundle::{ARCHIVE_NAME, Exporter, PLACEHOLDER, build_archive, inject, snapshot_json};
pub use job::{ExportJob, spawn_export};
