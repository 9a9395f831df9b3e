//! Tab orchestrator: one active game at a time, modules loaded lazily.
//!
//! # Lifecycle
//!
//! Per tab: `NotLoaded → Loading → Ready | Failed`, independent of whether
//! the tab is the active one.
//!
//! 1. **Activation** goes through a single async lock, so tab switches are
//!    processed one after another and never interleave.
//! 2. **Deactivation** of the previous tab awaits its controller's `reset()`
//!    and then hides its panel, before the next tab does anything.
//! 3. **First activation** shows the panel with a loading placeholder, fetches
//!    the style asset, then the script asset, links the script into the
//!    registry, resolves the registration and runs `init` in its own task.
//!    Any error or panic on that path leaves the fixed error message in the
//!    panel and caches a no-op controller.
//! 4. **Later activations** only show the panel. Assets are not fetched again
//!    and `init` is not called again, whether the first load worked or not.
//!
//! Each tab's load result lives in a once-cell, so even two activations of
//! the same tab racing each other load and initialize it once.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use parking_lot::Mutex;
use tokio::sync::{Mutex as AsyncMutex, OnceCell};
use tracing::{debug, info, warn};

use crate::assets::AssetLoader;
use crate::error::{LoadError, OrchestratorError};
use crate::linker::ModuleLinker;
use crate::module::{Controller, GameModule, NoopController};
use crate::panel::Panel;
use crate::registry::Registry;
use crate::types::{Context, GameDescriptor, GameId};

/// Load phase of one tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TabPhase {
    NotLoaded,
    Loading,
    Ready,
    Failed,
}

/// Read-only snapshot of one tab for the view layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabView {
    pub id: GameId,
    pub title: &'static str,
    pub phase: TabPhase,
    pub active: bool,
}

struct Loaded {
    controller: Arc<dyn Controller>,
    error: Option<LoadError>,
}

struct Tab {
    descriptor: GameDescriptor,
    id: GameId,
    panel: Panel,
    loaded: OnceCell<Loaded>,
    loading: AtomicBool,
}

impl Tab {
    fn new(descriptor: GameDescriptor) -> Self {
        Self {
            id: descriptor.game_id(),
            descriptor,
            panel: Panel::new(),
            loaded: OnceCell::new(),
            loading: AtomicBool::new(false),
        }
    }

    fn phase(&self) -> TabPhase {
        match self.loaded.get() {
            Some(loaded) if loaded.error.is_some() => TabPhase::Failed,
            Some(_) => TabPhase::Ready,
            None if self.loading.load(Ordering::Acquire) => TabPhase::Loading,
            None => TabPhase::NotLoaded,
        }
    }
}

struct Inner {
    ctx: Context,
    tabs: Vec<Tab>,
    registry: Arc<Registry>,
    assets: Arc<AssetLoader>,
    linker: Arc<dyn ModuleLinker>,
    /// Serializes activations.
    switching: AsyncMutex<()>,
    /// Index of the active tab, readable without awaiting.
    active: Mutex<Option<usize>>,
}

/// Cloneable handle to the shelf's tab state.
#[derive(Clone)]
pub struct Orchestrator {
    inner: Arc<Inner>,
}

impl Orchestrator {
    pub fn new(
        ctx: Context,
        descriptors: impl IntoIterator<Item = GameDescriptor>,
        registry: Arc<Registry>,
        assets: Arc<AssetLoader>,
        linker: Arc<dyn ModuleLinker>,
    ) -> Self {
        let tabs = descriptors.into_iter().map(Tab::new).collect();
        Self {
            inner: Arc::new(Inner {
                ctx,
                tabs,
                registry,
                assets,
                linker,
                switching: AsyncMutex::new(()),
                active: Mutex::new(None),
            }),
        }
    }

    pub fn context(&self) -> &Context {
        &self.inner.ctx
    }

    pub fn registry(&self) -> &Arc<Registry> {
        &self.inner.registry
    }

    pub fn len(&self) -> usize {
        self.inner.tabs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.tabs.is_empty()
    }

    /// Tab ids in display order.
    pub fn ids(&self) -> Vec<GameId> {
        self.inner.tabs.iter().map(|t| t.id.clone()).collect()
    }

    pub fn tabs(&self) -> Vec<TabView> {
        let active = *self.inner.active.lock();
        self.inner
            .tabs
            .iter()
            .enumerate()
            .map(|(i, tab)| TabView {
                id: tab.id.clone(),
                title: tab.descriptor.title,
                phase: tab.phase(),
                active: active == Some(i),
            })
            .collect()
    }

    pub fn active_id(&self) -> Option<GameId> {
        let active = *self.inner.active.lock();
        active.map(|i| self.inner.tabs[i].id.clone())
    }

    pub fn active_index(&self) -> Option<usize> {
        *self.inner.active.lock()
    }

    pub fn phase(&self, id: &GameId) -> Option<TabPhase> {
        self.index_of(id).map(|i| self.inner.tabs[i].phase())
    }

    pub fn panel(&self, id: &GameId) -> Option<Panel> {
        self.index_of(id).map(|i| self.inner.tabs[i].panel.clone())
    }

    /// Why a tab failed to load, if it did.
    pub fn load_error(&self, id: &GameId) -> Option<LoadError> {
        let i = self.index_of(id)?;
        self.inner.tabs[i].loaded.get()?.error.clone()
    }

    /// Make `id` the active tab.
    ///
    /// Activating the tab that is already active only completes its first
    /// load if an earlier activation was dropped before finishing it.
    pub async fn activate(&self, id: &GameId) -> Result<(), OrchestratorError> {
        let index = self
            .index_of(id)
            .ok_or_else(|| OrchestratorError::UnknownTab(id.clone()))?;

        let _guard = self.inner.switching.lock().await;

        let tab = &self.inner.tabs[index];
        let previous = *self.inner.active.lock();
        if previous == Some(index) {
            // Finishes a first load whose activation was dropped midway.
            self.ensure_loaded(tab).await;
            return Ok(());
        }
        if let Some(prev) = previous {
            self.deactivate_tab(prev).await;
        }

        tab.panel.show();
        *self.inner.active.lock() = Some(index);
        self.ensure_loaded(tab).await;
        Ok(())
    }

    /// Activate the tab at a display position.
    pub async fn activate_index(&self, index: usize) -> Result<(), OrchestratorError> {
        let id = self
            .inner
            .tabs
            .get(index)
            .map(|t| t.id.clone())
            .ok_or(OrchestratorError::NoTabAt(index))?;
        self.activate(&id).await
    }

    /// Deactivate the active tab, leaving none active.
    pub async fn deactivate(&self) {
        let _guard = self.inner.switching.lock().await;
        let previous = *self.inner.active.lock();
        if let Some(prev) = previous {
            self.deactivate_tab(prev).await;
        }
    }

    async fn deactivate_tab(&self, index: usize) {
        let tab = &self.inner.tabs[index];
        if let Some(loaded) = tab.loaded.get() {
            debug!(tab = %tab.id, "resetting controller");
            if let Err(e) = run_reset(loaded.controller.clone()).await {
                warn!(tab = %tab.id, error = %e, "controller reset failed");
            }
        }
        tab.panel.hide();
        *self.inner.active.lock() = None;
    }

    async fn ensure_loaded(&self, tab: &Tab) {
        tab.loaded
            .get_or_init(|| async {
                let _loading = LoadingFlag::raise(&tab.loading);
                tab.panel.show_loading();

                let loaded = match self.load_tab(tab).await {
                    Ok(controller) => {
                        info!(tab = %tab.id, "game ready");
                        Loaded {
                            controller,
                            error: None,
                        }
                    }
                    Err(e) => {
                        warn!(tab = %tab.id, error = %e, "game failed to load");
                        tab.panel.show_load_error();
                        Loaded {
                            controller: Arc::new(NoopController),
                            error: Some(e),
                        }
                    }
                };

                loaded
            })
            .await;
    }

    async fn load_tab(&self, tab: &Tab) -> Result<Arc<dyn Controller>, LoadError> {
        let inner = &self.inner;
        let descriptor = &tab.descriptor;

        let (style_url, _) = inner.assets.load(descriptor.style_asset).await?;
        tab.panel.attach_style(style_url);

        let (_, script) = inner.assets.load(descriptor.script_asset).await?;
        inner.linker.link(descriptor, &script, &inner.registry)?;

        let registration = inner
            .registry
            .resolve(&tab.id)
            .ok_or_else(|| LoadError::MissingRegistration(tab.id.clone()))?;
        let module = registration.resolve(&inner.ctx)?;

        run_init(module, tab.panel.clone(), inner.ctx.clone()).await
    }

    fn index_of(&self, id: &GameId) -> Option<usize> {
        self.inner.tabs.iter().position(|t| &t.id == id)
    }
}

/// Set while a first load is in flight; cleared on drop so a cancelled load
/// does not leave the tab reported as loading.
struct LoadingFlag<'a>(&'a AtomicBool);

impl<'a> LoadingFlag<'a> {
    fn raise(flag: &'a AtomicBool) -> Self {
        flag.store(true, Ordering::Release);
        Self(flag)
    }
}

impl Drop for LoadingFlag<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

/// Run `reset` in its own task so a panic cannot escape a tab switch.
async fn run_reset(controller: Arc<dyn Controller>) -> Result<(), LoadError> {
    let handle = tokio::spawn(async move { controller.reset().await });
    match handle.await {
        Ok(()) => Ok(()),
        Err(join) if join.is_panic() => Err(LoadError::Panicked),
        Err(_) => Err(LoadError::Aborted),
    }
}

/// Run `init` in its own task so a panic is caught as a load failure.
async fn run_init(
    module: Arc<dyn GameModule>,
    panel: Panel,
    ctx: Context,
) -> Result<Arc<dyn Controller>, LoadError> {
    let handle = tokio::spawn(async move { module.init(panel, ctx).await });
    match handle.await {
        Ok(result) => result.map_err(LoadError::from),
        Err(join) if join.is_panic() => Err(LoadError::Panicked),
        Err(_) => Err(LoadError::Aborted),
    }
}
