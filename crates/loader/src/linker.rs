//! Linking a fetched script asset into the registry.
//!
//! A game's script asset is a small JSON manifest:
//!
//! ```json
//! { "register": "memory", "entry": "memory" }
//! ```
//!
//! `entry` names a compiled-in plugin, `register` the id it is registered
//! under. The orchestrator checks afterwards that the descriptor's own id is
//! present in the registry, so a manifest that registers the wrong id fails
//! the tab instead of silently loading something else.

use std::collections::HashMap;

use serde::Deserialize;
use tracing::debug;

use crate::error::LinkError;
use crate::module::Registration;
use crate::registry::Registry;
use crate::types::{GameDescriptor, GameId};

/// Performs the registration step for one fetched script asset.
pub trait ModuleLinker: Send + Sync {
    fn link(
        &self,
        descriptor: &GameDescriptor,
        script: &str,
        registry: &Registry,
    ) -> Result<(), LinkError>;
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ModuleManifest {
    pub register: GameId,
    pub entry: String,
}

impl ModuleManifest {
    pub fn parse(script: &str) -> Result<Self, LinkError> {
        serde_json::from_str(script).map_err(|e| LinkError::Malformed(e.to_string()))
    }
}

/// Linker over a table of compiled-in plugins keyed by entry name.
#[derive(Debug, Default, Clone)]
pub struct PluginLinker {
    plugins: HashMap<String, Registration>,
}

impl PluginLinker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_plugin(mut self, entry: impl Into<String>, registration: Registration) -> Self {
        self.add_plugin(entry, registration);
        self
    }

    pub fn add_plugin(&mut self, entry: impl Into<String>, registration: Registration) {
        self.plugins.insert(entry.into(), registration);
    }

    pub fn entries(&self) -> impl Iterator<Item = &str> {
        self.plugins.keys().map(String::as_str)
    }
}

impl ModuleLinker for PluginLinker {
    fn link(
        &self,
        descriptor: &GameDescriptor,
        script: &str,
        registry: &Registry,
    ) -> Result<(), LinkError> {
        let manifest = ModuleManifest::parse(script)?;
        let registration = self
            .plugins
            .get(&manifest.entry)
            .cloned()
            .ok_or_else(|| LinkError::UnknownEntry(manifest.entry.clone()))?;

        debug!(
            tab = descriptor.id,
            register = %manifest.register,
            entry = %manifest.entry,
            "linking module"
        );
        registry.register(manifest.register, registration);
        Ok(())
    }
}
