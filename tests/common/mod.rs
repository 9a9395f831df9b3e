//! Shared fixtures: a fake asset server, recording game modules and an
//! orchestrator wired to both.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use serde_json::json;

use parasha_games::loader::assets::DEFAULT_FETCH_TIMEOUT;
use parasha_games::loader::testing::FakeHttp;
use parasha_games::loader::{
    AssetLoader, Controller, GameModule, ModuleError, Orchestrator, Panel, PluginLinker,
    Registration, Registry,
};
use parasha_games::types::{find_descriptor, Context, GameDescriptor, GameId};

pub const API: &str = "https://sheets.example/exec";
pub const ASSETS: &str = "https://cdn.example/shelf";
pub const VERSION: &str = "42";
pub const LABEL: &str = "bereshit";

pub fn asset_url(path: &str) -> String {
    format!("{ASSETS}/{path}?v={VERSION}")
}

pub fn version_url() -> String {
    format!("{ASSETS}/version.txt")
}

pub fn id(s: &str) -> GameId {
    GameId::from(s)
}

pub fn descriptor(game: &str) -> GameDescriptor {
    *find_descriptor(&id(game)).expect("catalog id")
}

/// Serve both assets of `d`, with a manifest registering `register`.
pub fn serve_game(http: &FakeHttp, d: &GameDescriptor, register: &str) {
    http.route(asset_url(d.style_asset), ".tile { color: gold; }");
    http.route_json(
        asset_url(d.script_asset),
        &json!({"register": register, "entry": d.id}),
    );
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Behavior {
    Ready,
    Fail,
    Panic,
    /// Loads fine, panics in `reset`.
    PanicOnReset,
}

/// Ordered record of module calls, plus the panels to report on.
#[derive(Default)]
pub struct EventLog {
    events: Mutex<Vec<String>>,
    panels: Mutex<Vec<(GameId, Panel)>>,
}

impl EventLog {
    pub fn push(&self, event: impl Into<String>) {
        self.events.lock().unwrap().push(event.into());
    }

    pub fn events(&self) -> Vec<String> {
        self.events.lock().unwrap().clone()
    }

    pub fn count_prefix(&self, prefix: &str) -> usize {
        self.events
            .lock()
            .unwrap()
            .iter()
            .filter(|e| e.starts_with(prefix))
            .count()
    }

    pub fn watch(&self, id: GameId, panel: Panel) {
        self.panels.lock().unwrap().push((id, panel));
    }

    fn visible(&self) -> String {
        self.panels
            .lock()
            .unwrap()
            .iter()
            .filter(|(_, p)| p.is_visible())
            .map(|(id, _)| id.to_string())
            .collect::<Vec<_>>()
            .join(",")
    }
}

pub struct RecordingModule {
    pub id: GameId,
    pub behavior: Behavior,
    pub log: Arc<EventLog>,
}

#[async_trait]
impl GameModule for RecordingModule {
    async fn init(&self, panel: Panel, _ctx: Context) -> Result<Arc<dyn Controller>, ModuleError> {
        self.log.push(format!("init:{}", self.id));
        match self.behavior {
            Behavior::Fail => Err(ModuleError::Init("boom".to_string())),
            Behavior::Panic => panic!("init blew up"),
            Behavior::Ready | Behavior::PanicOnReset => {
                panel.render([format!("{} ready", self.id)]);
                Ok(Arc::new(RecordingController {
                    id: self.id.clone(),
                    log: self.log.clone(),
                    panic_on_reset: self.behavior == Behavior::PanicOnReset,
                }))
            }
        }
    }
}

struct RecordingController {
    id: GameId,
    log: Arc<EventLog>,
    panic_on_reset: bool,
}

#[async_trait]
impl Controller for RecordingController {
    async fn reset(&self) {
        // Give a racing activation a chance to run if reset were not awaited.
        tokio::time::sleep(Duration::from_millis(10)).await;
        self.log
            .push(format!("reset:{} visible=[{}]", self.id, self.log.visible()));
        if self.panic_on_reset {
            panic!("reset blew up");
        }
    }
}

pub struct Harness {
    pub http: Arc<FakeHttp>,
    pub log: Arc<EventLog>,
    pub registry: Arc<Registry>,
    pub orchestrator: Orchestrator,
}

impl Harness {
    /// Tabs for `games`, each served and linked to a recording module.
    pub fn new(games: &[(&str, Behavior)]) -> Self {
        Self::with_asset_timeout(games, DEFAULT_FETCH_TIMEOUT)
    }

    /// Like [`Harness::new`] with a custom bound on each asset fetch.
    pub fn with_asset_timeout(games: &[(&str, Behavior)], timeout: Duration) -> Self {
        let http = Arc::new(FakeHttp::new());
        http.route(version_url(), format!("{VERSION}\n"));
        let log = Arc::new(EventLog::default());

        let mut linker = PluginLinker::new();
        let mut descriptors = Vec::new();
        for &(game, behavior) in games {
            let d = descriptor(game);
            serve_game(&http, &d, game);
            linker.add_plugin(
                game,
                Registration::module(RecordingModule {
                    id: id(game),
                    behavior,
                    log: log.clone(),
                }),
            );
            descriptors.push(d);
        }

        let registry = Arc::new(Registry::new());
        let assets =
            Arc::new(AssetLoader::new(http.clone(), ASSETS, "version.txt").with_timeout(timeout));
        let orchestrator = Orchestrator::new(
            Context::new(API, LABEL),
            descriptors,
            registry.clone(),
            assets,
            Arc::new(linker),
        );
        for tab in orchestrator.ids() {
            if let Some(panel) = orchestrator.panel(&tab) {
                log.watch(tab, panel);
            }
        }

        Self {
            http,
            log,
            registry,
            orchestrator,
        }
    }

    pub fn panel(&self, game: &str) -> Panel {
        self.orchestrator.panel(&id(game)).expect("tab exists")
    }

    /// Requests for anything under `games/`.
    pub fn asset_requests(&self) -> usize {
        self.http.count_matching("/games/")
    }
}
