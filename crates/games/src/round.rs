//! Shared plumbing for games that render from a single data row.
//!
//! [`RowModule`] fetches the row on `init`, parses it with [`Game::from_row`]
//! and hands the panel to a [`RoundController`], which re-renders with a fresh
//! round seed on every reset.

use std::marker::PhantomData;
use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::Mutex;
use tracing::{debug, warn};

use crate::core::RoundSeed;
use crate::loader::{
    ContentApi, Controller, GameModule, HttpClient, ModuleError, NoopController, Panel,
};
use crate::types::{Context, Row, NO_DATA_MESSAGE};

/// One game's row parsing and rendering.
pub trait Game: Send + Sync + Sized + 'static {
    /// Mode name on the data API, also the tab id.
    const ID: &'static str;

    /// Parse the game's columns. `None` means the row has nothing playable.
    fn from_row(row: &Row) -> Option<Self>;

    /// Lines for one round.
    fn render(&self, seed: &str) -> Vec<String>;
}

/// [`GameModule`] for any [`Game`].
pub struct RowModule<G> {
    http: Arc<dyn HttpClient>,
    _game: PhantomData<fn() -> G>,
}

impl<G: Game> RowModule<G> {
    pub fn new(http: Arc<dyn HttpClient>) -> Self {
        Self {
            http,
            _game: PhantomData,
        }
    }
}

#[async_trait]
impl<G: Game> GameModule for RowModule<G> {
    async fn init(&self, panel: Panel, ctx: Context) -> Result<Arc<dyn Controller>, ModuleError> {
        let api = ContentApi::new(self.http.clone(), ctx.api_base.clone());

        let row = match api.fetch_row(G::ID, &ctx.content_label).await {
            Ok(row) => row,
            Err(e) => {
                warn!(game = G::ID, error = %e, "data fetch failed");
                None
            }
        };

        let Some(game) = row.as_ref().and_then(G::from_row) else {
            debug!(game = G::ID, label = %ctx.content_label, "no playable data");
            panel.show_message(NO_DATA_MESSAGE);
            return Ok(Arc::new(NoopController));
        };

        let seed = RoundSeed::new(format!("{}:{}", ctx.content_label, G::ID));
        Ok(Arc::new(RoundController::start(panel, game, seed)))
    }
}

/// Controller that re-deals the game on every reset.
pub struct RoundController<G> {
    panel: Panel,
    game: G,
    seed: Mutex<RoundSeed>,
}

impl<G: Game> RoundController<G> {
    /// Render round 0 and return the controller.
    pub fn start(panel: Panel, game: G, seed: RoundSeed) -> Self {
        panel.render(game.render(&seed.current()));
        Self {
            panel,
            game,
            seed: Mutex::new(seed),
        }
    }

    pub fn round(&self) -> u32 {
        self.seed.lock().round()
    }
}

#[async_trait]
impl<G: Game> Controller for RoundController<G> {
    async fn reset(&self) {
        let seed = self.seed.lock().advance();
        debug!(game = G::ID, %seed, "new round");
        self.panel.render(self.game.render(&seed));
    }
}
