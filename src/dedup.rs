//! Session-scoped duplicate suppression
//!
//! Every distinct (type, payload) pair gets a 1-based ordinal the first time
//! it is seen. The registry only grows; it lives as long as the session.

use std::collections::HashMap;

use crate::models::{SeenKey, SymbolType};

/// Outcome of registering one decoded code
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Registration {
    /// True on the first sighting of this key
    pub is_new: bool,
    /// Ordinal assigned on first sighting
    pub ordinal: usize,
}

/// Set of codes already seen in this session plus the scan counter
#[derive(Debug, Default)]
pub struct DedupRegistry {
    seen: HashMap<SeenKey, usize>,
}

impl DedupRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a sighting. Idempotent for keys already present.
    pub fn register(&mut self, symbol: &SymbolType, payload: &[u8]) -> Registration {
        let key = SeenKey::new(symbol.clone(), payload);
        self.register_key(key)
    }

    /// Register a sighting by key
    pub fn register_key(&mut self, key: SeenKey) -> Registration {
        let next = self.seen.len() + 1;
        let mut is_new = false;
        let ordinal = *self.seen.entry(key).or_insert_with(|| {
            is_new = true;
            next
        });
        Registration { is_new, ordinal }
    }

    /// Ordinal previously assigned to a key
    pub fn ordinal_of(&self, key: &SeenKey) -> Option<usize> {
        self.seen.get(key).copied()
    }

    /// Check if a key has been seen
    pub fn contains(&self, key: &SeenKey) -> bool {
        self.seen.contains_key(key)
    }

    /// Number of distinct keys ever registered
    pub fn len(&self) -> usize {
        self.seen.len()
    }

    /// Check if nothing has been registered yet
    pub fn is_empty(&self) -> bool {
        self.seen.is_empty()
    }
}
