//! In-memory storage.
//!
//! Useful for unit tests and throwaway sessions. Values live in a
//! `BTreeMap<String, String>` and disappear with the process.

use std::collections::BTreeMap;

use termfolio_types::error::Result;

use crate::{Storage, check_key};

/// A fully in-memory blob store.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    items: BTreeMap<String, String>,
}

impl MemoryStorage {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored keys.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the store holds no keys.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl Storage for MemoryStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        check_key(key)?;
        Ok(self.items.get(key).cloned())
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<()> {
        check_key(key)?;
        self.items.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&mut self, key: &str) -> Result<()> {
        check_key(key)?;
        self.items.remove(key);
        Ok(())
    }
}
