//! Current artist index and its session-storage mirror

use std::collections::HashMap;

use tracing::{debug, warn};

use crate::NavigationError;

/// Session storage key holding the 1-based artist index
pub const PERSISTED_INDEX_KEY: &str = "@artistId";

/// Tab-scoped string key/value storage.
pub trait SessionStore {
    fn get_item(&self, key: &str) -> Option<String>;

    fn set_item(&mut self, key: &str, value: &str);
}

/// In-memory [`SessionStore`], used natively and in tests.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MemoryStore {
    items: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-populated with a persisted index value.
    pub fn with_index(value: &str) -> Self {
        let mut store = Self::new();
        store.set_item(PERSISTED_INDEX_KEY, value);
        store
    }
}

impl SessionStore for MemoryStore {
    fn get_item(&self, key: &str) -> Option<String> {
        self.items.get(key).cloned()
    }

    fn set_item(&mut self, key: &str, value: &str) {
        self.items.insert(key.to_string(), value.to_string());
    }
}

/// Source of truth for which artist is on screen.
///
/// `set_index` is the only mutation path and always writes the new value to
/// session storage before returning. It never touches the carousel.
pub struct IndexStore<S> {
    index: Option<u32>,
    total: u32,
    storage: S,
}

impl<S: SessionStore> IndexStore<S> {
    /// Build the store for `total` artists from whatever the tab remembers.
    ///
    /// Missing, unparsable or out-of-range values fall back to the first
    /// artist. With no artists the index stays uninitialized.
    pub fn restore(mut storage: S, total: u32) -> Self {
        if total == 0 {
            return Self {
                index: None,
                total,
                storage,
            };
        }

        let persisted = storage
            .get_item(PERSISTED_INDEX_KEY)
            .and_then(|raw| raw.trim().parse::<u32>().ok());

        let index = match persisted {
            Some(n) if (1..=total).contains(&n) => n,
            Some(n) => {
                warn!("Persisted artist index {n} outside 1..={total}, starting from 1");
                1
            }
            None => 1,
        };

        storage.set_item(PERSISTED_INDEX_KEY, &index.to_string());
        debug!("Restored artist index {index} of {total}");

        Self {
            index: Some(index),
            total,
            storage,
        }
    }

    /// Current 1-based index, `None` while there is nothing to show.
    pub fn index(&self) -> Option<u32> {
        self.index
    }

    pub fn total(&self) -> u32 {
        self.total
    }

    pub fn set_index(&mut self, n: u32) -> Result<(), NavigationError> {
        if self.total == 0 {
            return Err(NavigationError::Uninitialized);
        }
        if !(1..=self.total).contains(&n) {
            return Err(NavigationError::OutOfRange {
                index: n,
                total: self.total,
            });
        }

        self.index = Some(n);
        self.storage.set_item(PERSISTED_INDEX_KEY, &n.to_string());
        Ok(())
    }

    /// Value currently mirrored in session storage.
    pub fn persisted(&self) -> Option<String> {
        self.storage.get_item(PERSISTED_INDEX_KEY)
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }
}
