//! Jigsaw puzzle: an image cut into a square grid of shuffled tiles.

use crate::core::seeded_shuffle;
use crate::round::Game;
use crate::types::{Row, RowExt};

pub const DEFAULT_SIZE: usize = 3;
pub const MIN_SIZE: usize = 2;
pub const MAX_SIZE: usize = 6;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Puzzle {
    image: String,
    size: usize,
}

impl Puzzle {
    pub fn size(&self) -> usize {
        self.size
    }

    pub fn image(&self) -> &str {
        &self.image
    }

    /// Tile order for `seed`; `tiles[slot]` is the tile placed in `slot`.
    ///
    /// A deal that comes out already solved is rotated by one slot.
    pub fn tiles(&self, seed: &str) -> Vec<usize> {
        let solved: Vec<usize> = (0..self.size * self.size).collect();
        let mut tiles = seeded_shuffle(&solved, seed);
        if is_solved(&tiles) {
            tiles.rotate_left(1);
        }
        tiles
    }
}

pub fn is_solved(tiles: &[usize]) -> bool {
    tiles.iter().enumerate().all(|(slot, &tile)| slot == tile)
}

impl Game for Puzzle {
    const ID: &'static str = "puzzle";

    fn from_row(row: &Row) -> Option<Self> {
        let image = row.text("image")?;
        let size = row
            .int("size")
            .map(|n| n.clamp(MIN_SIZE as i64, MAX_SIZE as i64) as usize)
            .unwrap_or(DEFAULT_SIZE);
        Some(Self { image, size })
    }

    fn render(&self, seed: &str) -> Vec<String> {
        let tiles = self.tiles(seed);
        let mut lines = vec![
            format!("Puzzle {}x{}: {}", self.size, self.size, self.image),
            String::new(),
        ];
        for row in tiles.chunks(self.size) {
            let cells: Vec<String> = row.iter().map(|t| format!("{:>3}", t + 1)).collect();
            lines.push(cells.join(""));
        }
        lines
    }
}
