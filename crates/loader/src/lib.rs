//! Loader module - game registry, lazy asset loading and tab orchestration
//!
//! This crate turns a content label into a tab strip of games and loads each
//! game the first time its tab is activated.
//!
//! # Boot
//!
//! 1. **Label**: no content label (or no API base) means no shelf
//! 2. **Enablement**: `GET {api}?parasha={label}` returns a row of per-game flags
//! 3. **Tabs**: one inert tab per enabled catalog entry; nothing else is fetched
//!
//! # Activation
//!
//! - The previous tab's controller is reset (awaited) and its panel hidden
//! - The new panel is shown
//! - On first activation only: style asset, then script asset, then the
//!   linker registers the module, the registry resolves it and `init` runs
//! - Any failure on that path shows [`LOAD_ERROR_MESSAGE`](crate::types::LOAD_ERROR_MESSAGE)
//!   for the rest of the process; loading is never retried
//!
//! # Assets
//!
//! Asset URLs are `{asset_base}/{path}?v={version}`, where the version comes
//! from a marker file fetched once. Each final URL is fetched at most once.
//!
//! # Environment Variables
//!
//! See [`config`] for the full table. The essentials:
//!
//! - `PARASHA_GAMES_API_BASE`: data API endpoint
//! - `PARASHA_GAMES_LABEL`: content label of the current reading
//! - `PARASHA_GAMES_DISABLED`: set to "1" or "true" to disable the shelf
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use parasha_games_loader::{boot, PluginLinker, ReqwestClient, ShelfConfig};
//! use parasha_games_loader::types::{GameId, GAME_CATALOG};
//!
//! # async fn run() {
//! let config = ShelfConfig::from_env();
//! let http = Arc::new(ReqwestClient::new());
//! let linker = Arc::new(PluginLinker::new());
//!
//! if let Some(shelf) = boot(&config, http, linker, &GAME_CATALOG).await {
//!     shelf.activate(&GameId::from("memory")).await.ok();
//! }
//! # }
//! ```

pub mod api;
pub mod assets;
pub mod config;
pub mod error;
pub mod http;
pub mod linker;
pub mod logging;
pub mod module;
pub mod orchestrator;
pub mod panel;
pub mod registry;
pub mod shelf;
#[cfg(any(test, feature = "test-support"))]
pub mod testing;

pub use parasha_games_types as types;

pub use api::{ContentApi, EnabledGames};
pub use assets::AssetLoader;
pub use config::ShelfConfig;
pub use error::{ApiError, FetchError, LinkError, LoadError, ModuleError, OrchestratorError};
pub use http::{HttpClient, ReqwestClient};
pub use linker::{ModuleLinker, ModuleManifest, PluginLinker};
pub use module::{Controller, GameModule, ModuleFactory, NoopController, Registration};
pub use orchestrator::{Orchestrator, TabPhase, TabView};
pub use panel::{Panel, PanelBody};
pub use registry::Registry;
pub use shelf::boot;
