//! Terminal front-end for the game shelf.
//!
//! Renders the orchestrator's tab strip and the active panel into a simple
//! framebuffer, then flushes only the changed rows to the terminal.

pub mod fb;
pub mod renderer;
pub mod shelf_view;

pub use parasha_games_loader as loader;
pub use parasha_games_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use renderer::{changed_rows, encode_rows_into, TerminalRenderer};
pub use shelf_view::{tab_label, ShelfView, FOOTER};
