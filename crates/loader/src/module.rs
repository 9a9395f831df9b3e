//! Game module contract.
//!
//! A module is resolved from a [`Registration`], initialized once per process
//! with the tab's [`Panel`] and the shared [`Context`], and hands back a
//! [`Controller`] that the orchestrator calls on deactivation.

use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;

use crate::error::ModuleError;
use crate::panel::Panel;
use crate::types::Context;

/// Handle returned by [`GameModule::init`].
#[async_trait]
pub trait Controller: Send + Sync {
    /// Called when the tab is deactivated. Never called on activation.
    async fn reset(&self);
}

/// Controller that does nothing; cached for tabs that failed to load.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopController;

#[async_trait]
impl Controller for NoopController {
    async fn reset(&self) {}
}

#[async_trait]
pub trait GameModule: Send + Sync {
    /// Render into `panel` and return the tab's controller.
    async fn init(&self, panel: Panel, ctx: Context) -> Result<Arc<dyn Controller>, ModuleError>;
}

/// Factory signature for modules that need the context to be built.
pub type ModuleFactory =
    dyn Fn(&Context) -> Result<Arc<dyn GameModule>, ModuleError> + Send + Sync;

/// What gets stored in the registry under a game id.
#[derive(Clone)]
pub enum Registration {
    /// A ready module used as-is.
    Module(Arc<dyn GameModule>),
    /// Invoked with the context to produce the module.
    Factory(Arc<ModuleFactory>),
}

impl Registration {
    pub fn module(module: impl GameModule + 'static) -> Self {
        Self::Module(Arc::new(module))
    }

    pub fn factory<F>(factory: F) -> Self
    where
        F: Fn(&Context) -> Result<Arc<dyn GameModule>, ModuleError> + Send + Sync + 'static,
    {
        Self::Factory(Arc::new(factory))
    }

    /// Produce the module for `ctx`.
    pub fn resolve(&self, ctx: &Context) -> Result<Arc<dyn GameModule>, ModuleError> {
        match self {
            Self::Module(module) => Ok(module.clone()),
            Self::Factory(factory) => factory(ctx),
        }
    }
}

impl fmt::Debug for Registration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Module(_) => f.write_str("Registration::Module"),
            Self::Factory(_) => f.write_str("Registration::Factory"),
        }
    }
}
