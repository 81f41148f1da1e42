//! Directory-backed storage.
//!
//! Each key maps to `<root>/<key>.json`. Writes go to a uniquely named
//! sibling temp file first and are renamed into place, so a crash never
//! leaves a torn blob and concurrent writers never share a temp file.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};

use termfolio_types::error::Result;

use crate::{Storage, check_key};

/// Blob store rooted at a directory on disk.
#[derive(Debug, Clone)]
pub struct FileStorage {
    root: PathBuf,
}

impl FileStorage {
    /// Open (and create if needed) a storage directory.
    pub fn open(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();
        fs::create_dir_all(&root)?;
        log::debug!("Opened file storage at {}", root.display());
        Ok(Self { root })
    }

    /// The directory blobs are stored in.
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn path_for(&self, key: &str) -> Result<PathBuf> {
        check_key(key)?;
        Ok(self.root.join(format!("{key}.json")))
    }
}

/// A temp name next to `path`, unique per process and per write.
fn temp_path(path: &Path) -> PathBuf {
    static NEXT: AtomicU64 = AtomicU64::new(0);
    let n = NEXT.fetch_add(1, Ordering::Relaxed);
    path.with_extension(format!("json.{}-{n}.tmp", std::process::id()))
}

impl Storage for FileStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        let path = self.path_for(key)?;
        match fs::read_to_string(&path) {
            Ok(text) => Ok(Some(text)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<()> {
        let path = self.path_for(key)?;
        let tmp = temp_path(&path);
        fs::write(&tmp, value)?;
        if let Err(e) = fs::rename(&tmp, &path) {
            let _ = fs::remove_file(&tmp);
            return Err(e.into());
        }
        Ok(())
    }

    fn remove_item(&mut self, key: &str) -> Result<()> {
        let path = self.path_for(key)?;
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_creates_directory() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().join("nested/state");
        let store = FileStorage::open(&root).unwrap();
        assert!(root.is_dir());
        assert_eq!(store.root(), root.as_path());
    }

    #[test]
    fn missing_key_reads_none() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStorage::open(dir.path()).unwrap();
        assert_eq!(store.get_item("portfolio_commands").unwrap(), None);
    }

    #[test]
    fn set_then_get_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();
        {
            let mut store = FileStorage::open(dir.path()).unwrap();
            store.set_item("portfolio_commands", "{\"name\":\"Ada\"}").unwrap();
        }
        let store = FileStorage::open(dir.path()).unwrap();
        assert_eq!(
            store.get_item("portfolio_commands").unwrap().as_deref(),
            Some("{\"name\":\"Ada\"}")
        );
        assert!(dir.path().join("portfolio_commands.json").is_file());
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 1);
    }

    #[test]
    fn remove_deletes_file() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileStorage::open(dir.path()).unwrap();
        store.set_item("k", "v").unwrap();
        store.remove_item("k").unwrap();
        assert_eq!(store.get_item("k").unwrap(), None);
        assert!(store.remove_item("k").is_ok());
    }

    #[test]
    fn concurrent_writers_leave_one_whole_blob() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStorage::open(dir.path()).unwrap();
        let writers: Vec<_> = (0..8)
            .map(|i| {
                let mut store = store.clone();
                std::thread::spawn(move || {
                    let value = format!("{{\"writer\":{i}}}");
                    for _ in 0..25 {
                        store.set_item("portfolio_commands", &value).unwrap();
                    }
                    value
                })
            })
            .collect();
        let written: Vec<String> = writers.into_iter().map(|h| h.join().unwrap()).collect();

        let stored = store.get_item("portfolio_commands").unwrap().unwrap();
        assert!(written.contains(&stored));
        let files = fs::read_dir(dir.path()).unwrap().count();
        assert_eq!(files, 1);
    }

    #[test]
    fn temp_names_differ_per_write() {
        let path = Path::new("/tmp/portfolio_commands.json");
        assert_ne!(temp_path(path), temp_path(path));
    }

    #[test]
    fn traversal_key_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileStorage::open(dir.path()).unwrap();
        assert!(store.set_item("../escape", "x").is_err());
    }
}
