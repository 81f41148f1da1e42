//! String-keyed persistence.
//!
//! Profiles are persisted as a single JSON blob under a well-known key, the
//! same way a browser keeps data in local storage. `Storage` abstracts over
//! where the blobs live: `MemoryStorage` for tests and ephemeral sessions,
//! `FileStorage` for a directory on disk.

mod file;
mod memory;

pub use file::FileStorage;
pub use memory::MemoryStorage;

use termfolio_types::error::{Result, TermfolioError};

/// A string-keyed blob store.
pub trait Storage {
    /// Read the value stored under `key`, or `None` when absent.
    fn get_item(&self, key: &str) -> Result<Option<String>>;

    /// Store `value` under `key`, replacing any previous value.
    fn set_item(&mut self, key: &str, value: &str) -> Result<()>;

    /// Remove `key`. Removing an absent key is not an error.
    fn remove_item(&mut self, key: &str) -> Result<()>;

    /// Whether a value exists under `key`.
    fn contains(&self, key: &str) -> Result<bool> {
        Ok(self.get_item(key)?.is_some())
    }
}

impl<S: Storage + ?Sized> Storage for Box<S> {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        (**self).get_item(key)
    }
    fn set_item(&mut self, key: &str, value: &str) -> Result<()> {
        (**self).set_item(key, value)
    }
    fn remove_item(&mut self, key: &str) -> Result<()> {
        (**self).remove_item(key)
    }
}

/// Reject keys that could escape a storage directory or collide after
/// filesystem normalization.
pub(crate) fn check_key(key: &str) -> Result<()> {
    let valid = !key.is_empty()
        && key != "."
        && key != ".."
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.'));
    if valid {
        Ok(())
    } else {
        Err(TermfolioError::Storage(format!("invalid key: {key:?}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_keys_are_accepted() {
        assert!(check_key("portfolio_commands").is_ok());
        assert!(check_key("a.b-c_1").is_ok());
    }

    #[test]
    fn path_like_keys_are_rejected() {
        assert!(check_key("").is_err());
        assert!(check_key("..").is_err());
        assert!(check_key("../etc/passwd").is_err());
        assert!(check_key("dir/key").is_err());
        assert!(check_key("with space").is_err());
    }

    #[test]
    fn boxed_storage_delegates() {
        let mut store: Box<dyn Storage> = Box::new(MemoryStorage::new());
        store.set_item("k", "v").unwrap();
        assert!(store.contains("k").unwrap());
        store.remove_item("k").unwrap();
        assert!(!store.contains("k").unwrap());
    }
}
