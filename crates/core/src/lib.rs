//! Core module - deterministic ordering and gameplay randomness
//!
//! This crate has **no I/O** and no knowledge of tabs or HTTP. It holds the
//! one piece of the shelf with a numeric contract:
//!
//! - **Deterministic**: [`seeded_shuffle`] reorders a slice from a string seed,
//!   identically on every platform (wrapping 32-bit arithmetic throughout)
//! - **Round-aware**: [`RoundSeed`] derives `"{base}:{round}"` seeds so a reset
//!   produces a new but reproducible order
//! - **Gameplay randomness**: [`random_int`] for dice and bonus picks, with no
//!   reproducibility guarantee
//!
//! # Module Structure
//!
//! - [`shuffle`]: FNV-1a seed hash, mulberry32 stream, Fisher-Yates
//! - [`random`]: OS-entropy backed integer helper
//!
//! # Example
//!
//! ```
//! use parasha_games_core::{seeded_shuffle, RoundSeed};
//!
//! let mut seed = RoundSeed::new("bereshit:memory");
//! let first = seeded_shuffle(&["a", "b", "c", "d"], &seed.current());
//! let again = seeded_shuffle(&["a", "b", "c", "d"], &seed.current());
//! assert_eq!(first, again);
//!
//! seed.advance();
//! assert_eq!(seed.current(), "bereshit:memory:1");
//! ```

pub mod random;
pub mod shuffle;

pub use random::{random_choice, random_int};
pub use shuffle::{hash_seed, seeded_shuffle, Mulberry32, RoundSeed};
