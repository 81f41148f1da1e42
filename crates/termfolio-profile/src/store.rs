//! Persisted profile store.
//!
//! Writes go straight through to storage on every `set`. Reads reload the
//! persisted blob first so several processes (the submit CLI and a running
//! preview) observe the latest submission. A blob that fails to parse is
//! treated as no data at all.

use termfolio_storage::Storage;
use termfolio_types::error::Result;

use crate::model::Profile;
use crate::validate::validate;

/// Storage key of the profile blob.
pub const STORAGE_KEY: &str = "portfolio_commands";

/// Holds the current profile and keeps it in sync with storage.
pub struct ProfileStore<S: Storage> {
    storage: S,
    profile: Profile,
}

impl<S: Storage> ProfileStore<S> {
    /// Create a store over `storage`. Nothing is read until `get`.
    pub fn new(storage: S) -> Self {
        Self {
            storage,
            profile: Profile::default(),
        }
    }

    /// Replace the whole profile and persist it.
    pub fn set(&mut self, profile: Profile) -> Result<()> {
        let mut profile = profile.normalized();
        profile.export = None;
        self.storage.set_item(STORAGE_KEY, &profile.to_json()?)?;
        log::info!("Stored profile ({} sections)", profile.keys().len());
        profile.export = Some(String::new());
        self.profile = profile;
        Ok(())
    }

    /// Validate and store a complete form submission. Nothing is persisted
    /// when validation fails.
    pub fn submit(&mut self, profile: Profile) -> Result<()> {
        validate(&profile)?;
        self.set(profile)
    }

    /// The current profile, reloaded from storage when a blob is present.
    /// The returned record always carries the `export` marker.
    pub fn get(&mut self) -> &Profile {
        match self.storage.get_item(STORAGE_KEY) {
            Ok(Some(text)) => match Profile::from_json(&text) {
                Ok(profile) => self.profile = profile,
                Err(e) => {
                    log::warn!("Discarding unreadable stored profile: {e}");
                    self.profile = Profile::default();
                },
            },
            Ok(None) => {},
            Err(e) => log::warn!("Profile storage unavailable, using held copy: {e}"),
        }
        self.profile.export.get_or_insert_with(String::new);
        &self.profile
    }

    /// The profile as of the last `get` or `set`, without touching storage.
    pub fn current(&self) -> &Profile {
        &self.profile
    }

    /// Drop the profile from memory and storage.
    pub fn clear(&mut self) -> Result<()> {
        self.profile = Profile::default();
        self.storage.remove_item(STORAGE_KEY)?;
        log::info!("Cleared stored profile");
        Ok(())
    }

    /// Borrow the underlying storage.
    pub fn storage(&self) -> &S {
        &self.storage
    }
}

#[cfg(test)]
mod tests {
    use termfolio_storage::{FileStorage, MemoryStorage};
    use termfolio_types::error::TermfolioError;

    use super::*;

    fn ada() -> Profile {
        Profile::from_json(
            r#"{
                "name": "Ada",
                "about": "Engineer",
                "contact": {"email": "a@x.com", "phone": "555"},
                "education": [],
                "experience": [],
                "projects": [],
                "skills": {"languages": "TS,Go"}
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn empty_store_yields_marker_only() {
        let mut store = ProfileStore::new(MemoryStorage::new());
        assert_eq!(store.get().keys(), vec!["export"]);
    }

    #[test]
    fn set_writes_through_without_marker() {
        let mut store = ProfileStore::new(MemoryStorage::new());
        store.set(ada()).unwrap();
        let blob = store.storage().get_item(STORAGE_KEY).unwrap().unwrap();
        assert!(blob.contains("\"name\":\"Ada\""));
        assert!(!blob.contains("export"));
    }

    #[test]
    fn get_returns_stored_profile_with_marker() {
        let mut store = ProfileStore::new(MemoryStorage::new());
        store.set(ada()).unwrap();
        let p = store.get();
        assert_eq!(p.name_text(), "Ada");
        assert_eq!(p.keys().last(), Some(&"export"));
    }

    #[test]
    fn set_replaces_rather_than_merges() {
        let mut store = ProfileStore::new(MemoryStorage::new());
        store.set(ada()).unwrap();
        store
            .set(Profile {
                name: Some("Grace".into()),
                ..Profile::default()
            })
            .unwrap();
        let p = store.get();
        assert_eq!(p.name_text(), "Grace");
        assert!(p.about.is_none());
    }

    #[test]
    fn get_flattens_legacy_blob() {
        let mut storage = MemoryStorage::new();
        storage
            .set_item(
                STORAGE_KEY,
                r#"{"education": {"degree": "BSc", "college": "MIT", "year": "2020"}}"#,
            )
            .unwrap();
        let mut store = ProfileStore::new(storage);
        assert_eq!(store.get().education_entries().len(), 1);
    }

    #[test]
    fn corrupt_blob_resets_to_empty_profile() {
        let mut storage = MemoryStorage::new();
        storage.set_item(STORAGE_KEY, "{not json").unwrap();
        let mut store = ProfileStore::new(storage);
        let p = store.get();
        assert_eq!(p.keys(), vec!["export"]);
        assert_eq!(p.name_text(), "");
    }

    #[test]
    fn null_fields_keep_the_rest_of_the_profile() {
        let mut storage = MemoryStorage::new();
        storage
            .set_item(
                STORAGE_KEY,
                r#"{
                    "name": "Ada",
                    "about": "Engineer",
                    "education": [{"degree": null, "college": "MIT", "year": "2020"}],
                    "skills": {"languages": "Rust", "tools": null}
                }"#,
            )
            .unwrap();
        let mut store = ProfileStore::new(storage);
        let p = store.get();
        assert_eq!(p.name_text(), "Ada");
        assert_eq!(p.about_text(), "Engineer");
        assert_eq!(p.education_entries()[0].college, "MIT");
        assert!(p.skills.is_some());
    }

    #[test]
    fn submit_rejects_incomplete_profile_and_stores_nothing() {
        let mut store = ProfileStore::new(MemoryStorage::new());
        let err = store.submit(Profile::default()).unwrap_err();
        assert!(matches!(err, TermfolioError::Validation(_)));
        assert!(store.storage().get_item(STORAGE_KEY).unwrap().is_none());
    }

    #[test]
    fn submit_accepts_complete_profile() {
        let mut store = ProfileStore::new(MemoryStorage::new());
        store.submit(ada()).unwrap();
        assert_eq!(store.get().name_text(), "Ada");
    }

    #[test]
    fn clear_removes_blob() {
        let mut store = ProfileStore::new(MemoryStorage::new());
        store.set(ada()).unwrap();
        store.clear().unwrap();
        assert!(store.storage().get_item(STORAGE_KEY).unwrap().is_none());
        assert_eq!(store.get().keys(), vec!["export"]);
    }

    #[test]
    fn current_does_not_reload() {
        let dir = tempfile::tempdir().unwrap();
        let mut reader = ProfileStore::new(FileStorage::open(dir.path()).unwrap());
        reader.get();

        let mut writer = ProfileStore::new(FileStorage::open(dir.path()).unwrap());
        writer.set(ada()).unwrap();

        assert_eq!(reader.current().name_text(), "");
        assert_eq!(reader.get().name_text(), "Ada");
        assert_eq!(reader.current().name_text(), "Ada");
    }

    #[test]
    fn file_backed_store_sees_other_writers() {
        let dir = tempfile::tempdir().unwrap();
        let mut reader = ProfileStore::new(FileStorage::open(dir.path()).unwrap());
        assert_eq!(reader.get().name_text(), "");

        let mut writer = ProfileStore::new(FileStorage::open(dir.path()).unwrap());
        writer.set(ada()).unwrap();

        assert_eq!(reader.get().name_text(), "Ada");
    }
}
