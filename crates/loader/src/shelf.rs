//! Boot: decide which games this content context shows and build the tabs.
//!
//! Every failure here is silent toward the user: no label, no API base, a
//! failed enablement lookup, or nothing enabled all mean "no shelf". Nothing
//! is fetched beyond the enablement row in those cases.

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::api::ContentApi;
use crate::assets::AssetLoader;
use crate::config::ShelfConfig;
use crate::http::HttpClient;
use crate::linker::ModuleLinker;
use crate::orchestrator::Orchestrator;
use crate::registry::Registry;
use crate::types::{Context, GameDescriptor};

/// Build the orchestrator for the configured content label, or `None`.
pub async fn boot(
    config: &ShelfConfig,
    http: Arc<dyn HttpClient>,
    linker: Arc<dyn ModuleLinker>,
    catalog: &[GameDescriptor],
) -> Option<Orchestrator> {
    let Some(label) = config.content_label.as_deref() else {
        debug!("no content label, shelf not shown");
        return None;
    };
    let Some(api_base) = config.api_base.as_deref() else {
        debug!("no API base configured, shelf not shown");
        return None;
    };

    let api = ContentApi::new(http.clone(), api_base);
    let enabled = match api.enabled_games(label).await {
        Ok(enabled) => enabled,
        Err(e) => {
            warn!(label, error = %e, "enablement lookup failed");
            return None;
        }
    };

    let games: Vec<GameDescriptor> = catalog
        .iter()
        .filter(|d| enabled.is_enabled(d.id))
        .copied()
        .collect();
    if games.is_empty() {
        debug!(label, "no games enabled");
        return None;
    }

    info!(label, count = games.len(), "building game shelf");
    let asset_base = config.asset_base().unwrap_or(api_base);
    let assets = Arc::new(AssetLoader::new(
        http,
        asset_base,
        config.version_path.clone(),
    ));

    Some(Orchestrator::new(
        Context::new(api_base, label),
        games,
        Arc::new(Registry::new()),
        assets,
        linker,
    ))
}
