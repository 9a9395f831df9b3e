//! Parasha games (workspace facade crate).
//!
//! Re-exports the workspace crates under one name so the binary, benches and
//! integration tests share a single path: `parasha_games::{core, games, input,
//! loader, term, types}`.

pub use parasha_games_core as core;
pub use parasha_games_games as games;
pub use parasha_games_input as input;
pub use parasha_games_loader as loader;
pub use parasha_games_term as term;
pub use parasha_games_types as types;
