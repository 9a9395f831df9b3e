//! Registry of game modules keyed by game id.
//!
//! One registry is created at startup and shared by `Arc` between the linker
//! (which registers) and the orchestrator (which resolves). Entries are never
//! removed; registering an id again replaces the previous entry.

use std::collections::HashMap;

use parking_lot::RwLock;
use tracing::debug;

use crate::module::Registration;
use crate::types::GameId;

#[derive(Debug, Default)]
pub struct Registry {
    entries: RwLock<HashMap<GameId, Registration>>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `registration` under `id`, returning the entry it replaced.
    pub fn register(&self, id: GameId, registration: Registration) -> Option<Registration> {
        debug!(%id, ?registration, "module registered");
        self.entries.write().insert(id, registration)
    }

    pub fn resolve(&self, id: &GameId) -> Option<Registration> {
        self.entries.read().get(id).cloned()
    }

    pub fn contains(&self, id: &GameId) -> bool {
        self.entries.read().contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }
}
