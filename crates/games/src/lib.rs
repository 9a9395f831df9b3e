//! Built-in games - the plugins the shelf can link
//!
//! Each game reads its own spreadsheet row (`mode={id}`), renders into the
//! panel it was given, and re-deals on every reset using a round seed derived
//! from the content label, so a given reading always opens with the same
//! layout.
//!
//! # Games
//!
//! - [`memory`]: `pair1..pairN` columns of `"front|back"`
//! - [`puzzle`]: `image` and `size` (2-6)
//! - [`words`]: `letters` and a comma list of `words`
//! - [`drawers`]: `drawers` and `item:drawer` pairs in `items`
//! - [`board`]: `squares`, `ladders` and `snakes` (`from>to` lists)
//!
//! A game whose row is missing shows
//! [`NO_DATA_MESSAGE`](crate::types::NO_DATA_MESSAGE) in its own panel; the
//! rest of the shelf is unaffected.
//!
//! # Linking
//!
//! [`builtin_linker`] builds a [`PluginLinker`] whose entry names match the
//! game ids, so a script manifest `{"register":"memory","entry":"memory"}`
//! links the memory game.

use std::sync::Arc;

pub mod board;
pub mod drawers;
pub mod memory;
pub mod puzzle;
pub mod round;
pub mod words;

pub use parasha_games_core as core;
pub use parasha_games_loader as loader;
pub use parasha_games_types as types;

pub use board::Board;
pub use drawers::Drawers;
pub use memory::Memory;
pub use puzzle::Puzzle;
pub use round::{Game, RoundController, RowModule};
pub use words::Words;

use crate::loader::{GameModule, HttpClient, ModuleError, PluginLinker, Registration};

/// Registration that builds a [`RowModule`] for `G` from the context.
pub fn registration<G: Game>(http: Arc<dyn HttpClient>) -> Registration {
    Registration::factory(move |ctx| {
        if ctx.api_base.trim().is_empty() {
            return Err(ModuleError::Malformed(format!(
                "{} needs an API base",
                G::ID
            )));
        }
        Ok(Arc::new(RowModule::<G>::new(http.clone())) as Arc<dyn GameModule>)
    })
}

/// Linker over every built-in game.
pub fn builtin_linker(http: Arc<dyn HttpClient>) -> PluginLinker {
    PluginLinker::new()
        .with_plugin(Memory::ID, registration::<Memory>(http.clone()))
        .with_plugin(Puzzle::ID, registration::<Puzzle>(http.clone()))
        .with_plugin(Words::ID, registration::<Words>(http.clone()))
        .with_plugin(Drawers::ID, registration::<Drawers>(http.clone()))
        .with_plugin(Board::ID, registration::<Board>(http))
}
