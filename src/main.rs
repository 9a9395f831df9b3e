//! Game shelf runner (default binary).
//!
//! Reads the shelf configuration from the environment, boots the orchestrator
//! for the configured content label and drives it from the keyboard. When the
//! shelf is disabled or boot finds nothing to show, it exits quietly.

use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event};
use tokio::runtime::Runtime;
use tracing::warn;

use parasha_games::games::builtin_linker;
use parasha_games::input::{handle_key_event, ShelfAction};
use parasha_games::loader::{self, boot, HttpClient, Orchestrator, ReqwestClient, ShelfConfig};
use parasha_games::term::{FrameBuffer, ShelfView, TerminalRenderer};
use parasha_games::types::GAME_CATALOG;

const POLL: Duration = Duration::from_millis(50);
const SHUTDOWN_GRACE: Duration = Duration::from_secs(2);

fn main() -> Result<()> {
    if ShelfConfig::is_disabled() {
        return Ok(());
    }
    let config = ShelfConfig::from_env();
    loader::logging::init(config.log_path.as_deref())?;

    let rt = Runtime::new()?;
    let http: Arc<dyn HttpClient> = Arc::new(ReqwestClient::new());
    let linker = Arc::new(builtin_linker(http.clone()));
    let Some(orchestrator) = rt.block_on(boot(&config, http, linker, &GAME_CATALOG)) else {
        return Ok(());
    };

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&rt, &orchestrator, &mut term);

    // Always try to restore terminal state.
    let _ = term.exit();
    let shutdown = rt.block_on(async {
        tokio::time::timeout(SHUTDOWN_GRACE, orchestrator.deactivate()).await
    });
    if shutdown.is_err() {
        warn!("active game did not reset before shutdown");
    }
    result
}

fn run(rt: &Runtime, orchestrator: &Orchestrator, term: &mut TerminalRenderer) -> Result<()> {
    let view = ShelfView::new();
    let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
    let mut fb = FrameBuffer::new(w, h);

    loop {
        let body = orchestrator
            .active_id()
            .and_then(|id| orchestrator.panel(&id))
            .map(|panel| panel.lines())
            .unwrap_or_default();
        view.render_into(&orchestrator.tabs(), &body, &mut fb);
        term.draw(&fb)?;

        if !event::poll(POLL)? {
            continue;
        }
        match event::read()? {
            Event::Resize(w, h) => {
                fb.resize(w, h);
                term.invalidate();
            }
            Event::Key(key) => match handle_key_event(key) {
                Some(ShelfAction::Quit) => return Ok(()),
                Some(ShelfAction::Deactivate) => {
                    let orchestrator = orchestrator.clone();
                    rt.spawn(async move { orchestrator.deactivate().await });
                }
                Some(action) => {
                    if let Some(index) = target_index(action, orchestrator) {
                        let orchestrator = orchestrator.clone();
                        // Loading runs in the background so the panel can show
                        // its loading state meanwhile.
                        rt.spawn(async move {
                            if let Err(e) = orchestrator.activate_index(index).await {
                                warn!(index, error = %e, "activation failed");
                            }
                        });
                    }
                }
                None => {}
            },
            _ => {}
        }
    }
}

fn target_index(action: ShelfAction, orchestrator: &Orchestrator) -> Option<usize> {
    let len = orchestrator.len();
    if len == 0 {
        return None;
    }
    let active = orchestrator.active_index();
    match action {
        ShelfAction::Activate(index) => (index < len).then_some(index),
        ShelfAction::Next => Some(active.map_or(0, |i| (i + 1) % len)),
        ShelfAction::Prev => Some(active.map_or(len - 1, |i| (i + len - 1) % len)),
        ShelfAction::Deactivate | ShelfAction::Quit => None,
    }
}
