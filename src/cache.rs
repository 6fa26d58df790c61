//! Name-keyed cache shared by providers.
//!
//! Constructed explicitly and handed to whoever needs it; there is no
//! process-wide instance. Entries never expire.

use std::collections::HashMap;
use std::sync::RwLock;

#[derive(Debug)]
pub struct Cache<V> {
    entries: RwLock<HashMap<String, V>>,
}

impl<V: Clone> Cache<V> {
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
        }
    }

    /// Keys are compared case-insensitively.
    pub fn get(&self, key: &str) -> Option<V> {
        self.entries
            .read()
            .ok()
            .and_then(|entries| entries.get(&key.to_lowercase()).cloned())
    }

    pub fn set(&self, key: &str, value: V) {
        match self.entries.write() {
            Ok(mut entries) => {
                entries.insert(key.to_lowercase(), value);
            }
            Err(_) => tracing::warn!("cache lock poisoned, dropping entry '{}'", key),
        }
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries
            .read()
            .map(|entries| entries.contains_key(&key.to_lowercase()))
            .unwrap_or(false)
    }

    pub fn len(&self) -> usize {
        self.entries.read().map(|entries| entries.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&self) {
        if let Ok(mut entries) = self.entries.write() {
            entries.clear();
        }
    }
}

impl<V: Clone> Default for Cache<V> {
    fn default() -> Self {
        Self::new()
    }
}
