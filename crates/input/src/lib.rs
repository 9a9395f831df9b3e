//! Terminal input for the game shelf.
//!
//! Maps `crossterm` key events to [`ShelfAction`]s. The mapping is pure so it
//! can be tested without a terminal.

pub mod map;

pub use map::{handle_key_event, should_quit, ShelfAction};
