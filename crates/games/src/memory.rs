//! Memory matching: pairs of cards dealt face down in a seeded order.
//!
//! Columns `pair1`, `pair2`, ... hold `"front|back"`; both halves of a pair
//! become cards. Columns are read in numeric order of their suffix.

use tracing::warn;

use crate::core::seeded_shuffle;
use crate::round::Game;
use crate::types::{Row, RowExt};

/// Cards per rendered row.
pub const GRID_COLUMNS: usize = 4;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    pub pair: usize,
    pub face: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Memory {
    pairs: Vec<(String, String)>,
}

impl Memory {
    pub fn pairs(&self) -> &[(String, String)] {
        &self.pairs
    }

    /// All cards in dealing order for `seed`.
    pub fn deal(&self, seed: &str) -> Vec<Card> {
        let cards: Vec<Card> = self
            .pairs
            .iter()
            .enumerate()
            .flat_map(|(pair, (front, back))| {
                [
                    Card {
                        pair,
                        face: front.clone(),
                    },
                    Card {
                        pair,
                        face: back.clone(),
                    },
                ]
            })
            .collect();
        seeded_shuffle(&cards, seed)
    }
}

fn pair_index(key: &str) -> Option<u32> {
    key.strip_prefix("pair")?.parse().ok()
}

impl Game for Memory {
    const ID: &'static str = "memory";

    fn from_row(row: &Row) -> Option<Self> {
        let mut keyed: Vec<(u32, &String)> = row
            .keys()
            .filter_map(|key| pair_index(key).map(|i| (i, key)))
            .collect();
        keyed.sort_unstable();

        let pairs: Vec<(String, String)> = keyed
            .into_iter()
            .filter_map(|(_, key)| {
                let cell = row.text(key)?;
                match cell.split_once('|') {
                    Some((front, back)) if !front.trim().is_empty() && !back.trim().is_empty() => {
                        Some((front.trim().to_string(), back.trim().to_string()))
                    }
                    _ => {
                        warn!(column = %key, "memory pair is not \"front|back\"");
                        None
                    }
                }
            })
            .collect();

        if pairs.is_empty() {
            None
        } else {
            Some(Self { pairs })
        }
    }

    fn render(&self, seed: &str) -> Vec<String> {
        let cards = self.deal(seed);
        let mut lines = vec![format!("Find the {} pairs", self.pairs.len()), String::new()];
        for (row, chunk) in cards.chunks(GRID_COLUMNS).enumerate() {
            let cells: Vec<String> = chunk
                .iter()
                .enumerate()
                .map(|(col, card)| format!("{:>2}. {}", row * GRID_COLUMNS + col + 1, card.face))
                .collect();
            lines.push(cells.join("   "));
        }
        lines
    }
}
