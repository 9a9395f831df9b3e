//! Shared types module - ids, descriptors, context and constants
//!
//! Everything here is plain data shared by the loader, the built-in games and
//! the terminal front-end. Nothing in this crate performs I/O.
//!
//! # Game catalog
//!
//! | Id | Title | Script asset | Style asset |
//! |----|-------|--------------|-------------|
//! | `memory` | Memory | `games/memory.json` | `games/memory.css` |
//! | `puzzle` | Puzzle | `games/puzzle.json` | `games/puzzle.css` |
//! | `words` | Word Builder | `games/words.json` | `games/words.css` |
//! | `drawers` | Drawers | `games/drawers.json` | `games/drawers.css` |
//! | `board` | Board Game | `games/board.json` | `games/board.css` |
//!
//! The catalog order is the tab order.
//!
//! # Examples
//!
//! ```
//! use parasha_games_types::{find_descriptor, GameId, GAME_CATALOG};
//!
//! let memory = find_descriptor(&GameId::from("memory")).unwrap();
//! assert_eq!(memory.title, "Memory");
//! assert_eq!(GAME_CATALOG.len(), 5);
//! ```

use std::borrow::Borrow;
use std::fmt;

use serde::{Deserialize, Serialize};

pub mod payload;

pub use payload::{parse_flag, Row, RowExt, RowResponse, RowsResponse};

/// Fixed message shown in a panel whose module could not be loaded.
pub const LOAD_ERROR_MESSAGE: &str = "This game could not be loaded.";

/// Message a game shows when the API has no row for the current context.
pub const NO_DATA_MESSAGE: &str = "No game content is available for this reading yet.";

/// Placeholder shown while a tab's assets are being fetched.
pub const LOADING_MESSAGE: &str = "Loading…";

/// Query parameter carrying the game id on data requests.
pub const MODE_PARAM: &str = "mode";

/// Query parameter carrying the content label on every API request.
pub const CONTENT_PARAM: &str = "parasha";

/// Query parameter appended to every asset URL for cache busting.
pub const VERSION_PARAM: &str = "v";

/// Identifier of a game (`memory`, `puzzle`, ...).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GameId(String);

impl GameId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for GameId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for GameId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl Borrow<str> for GameId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for GameId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Static description of one game tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameDescriptor {
    pub id: &'static str,
    pub title: &'static str,
    pub script_asset: &'static str,
    pub style_asset: &'static str,
}

impl GameDescriptor {
    pub fn game_id(&self) -> GameId {
        GameId::from(self.id)
    }
}

/// Every game the shelf knows about, in tab order.
pub static GAME_CATALOG: [GameDescriptor; 5] = [
    GameDescriptor {
        id: "memory",
        title: "Memory",
        script_asset: "games/memory.json",
        style_asset: "games/memory.css",
    },
    GameDescriptor {
        id: "puzzle",
        title: "Puzzle",
        script_asset: "games/puzzle.json",
        style_asset: "games/puzzle.css",
    },
    GameDescriptor {
        id: "words",
        title: "Word Builder",
        script_asset: "games/words.json",
        style_asset: "games/words.css",
    },
    GameDescriptor {
        id: "drawers",
        title: "Drawers",
        script_asset: "games/drawers.json",
        style_asset: "games/drawers.css",
    },
    GameDescriptor {
        id: "board",
        title: "Board Game",
        script_asset: "games/board.json",
        style_asset: "games/board.css",
    },
];

/// Look up a catalog entry by id.
pub fn find_descriptor(id: &GameId) -> Option<&'static GameDescriptor> {
    GAME_CATALOG.iter().find(|d| d.id == id.as_str())
}

/// Read-only values handed to every game module on `init`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Context {
    pub api_base: String,
    pub content_label: String,
}

impl Context {
    pub fn new(api_base: impl Into<String>, content_label: impl Into<String>) -> Self {
        Self {
            api_base: api_base.into(),
            content_label: content_label.into(),
        }
    }
}
