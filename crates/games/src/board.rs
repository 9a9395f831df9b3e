//! Board game: a serpentine track with ladders and snakes.
//!
//! Square 1 is bottom-left; odd rows (counted from the bottom) run right to
//! left. Each round opens with a die roll for the first move.

use tracing::warn;

use crate::core::random_int;
use crate::round::Game;
use crate::types::{Row, RowExt};

pub const DEFAULT_SQUARES: u32 = 30;
pub const MIN_SQUARES: u32 = 10;
pub const MAX_SQUARES: u32 = 100;
pub const DIE_FACES: i64 = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JumpKind {
    Ladder,
    Snake,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Jump {
    pub from: u32,
    pub to: u32,
    pub kind: JumpKind,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    squares: u32,
    jumps: Vec<Jump>,
}

impl Board {
    pub fn new(squares: u32) -> Self {
        Self {
            squares: squares.clamp(MIN_SQUARES, MAX_SQUARES),
            jumps: Vec::new(),
        }
    }

    pub fn squares(&self) -> u32 {
        self.squares
    }

    pub fn jumps(&self) -> &[Jump] {
        &self.jumps
    }

    pub fn columns(&self) -> u32 {
        if self.squares > 50 {
            10
        } else {
            6
        }
    }

    pub fn rows(&self) -> u32 {
        self.squares.div_ceil(self.columns())
    }

    /// `(row, col)` of a square, rows counted from the top of the grid.
    pub fn cell_of(&self, square: u32) -> Option<(u32, u32)> {
        if square == 0 || square > self.squares {
            return None;
        }
        let cols = self.columns();
        let idx = square - 1;
        let from_bottom = idx / cols;
        let offset = idx % cols;
        let col = if from_bottom % 2 == 0 {
            offset
        } else {
            cols - 1 - offset
        };
        Some((self.rows() - 1 - from_bottom, col))
    }

    /// Square at a grid cell, the inverse of [`cell_of`](Self::cell_of).
    pub fn square_at(&self, row: u32, col: u32) -> Option<u32> {
        let cols = self.columns();
        if row >= self.rows() || col >= cols {
            return None;
        }
        let from_bottom = self.rows() - 1 - row;
        let offset = if from_bottom % 2 == 0 {
            col
        } else {
            cols - 1 - col
        };
        let square = from_bottom * cols + offset + 1;
        (square <= self.squares).then_some(square)
    }

    /// Where a piece ends up after landing on `square`.
    pub fn land(&self, square: u32) -> u32 {
        let square = square.min(self.squares);
        self.jumps
            .iter()
            .find(|j| j.from == square)
            .map_or(square, |j| j.to)
    }

    fn add_jump(&mut self, spec: &str, kind: JumpKind) {
        let parsed = spec.split_once('>').and_then(|(a, b)| {
            Some((a.trim().parse::<u32>().ok()?, b.trim().parse::<u32>().ok()?))
        });
        let valid = parsed.filter(|&(from, to)| {
            let in_range = |s: u32| (1..=self.squares).contains(&s);
            let direction = match kind {
                JumpKind::Ladder => from < to,
                JumpKind::Snake => from > to,
            };
            in_range(from)
                && in_range(to)
                && direction
                && from != self.squares
                && self.jumps.iter().all(|j| j.from != from)
        });
        match valid {
            Some((from, to)) => self.jumps.push(Jump { from, to, kind }),
            None => warn!(spec, ?kind, "ignoring jump"),
        }
    }

    fn marker(&self, square: u32) -> char {
        match self.jumps.iter().find(|j| j.from == square).map(|j| j.kind) {
            Some(JumpKind::Ladder) => '^',
            Some(JumpKind::Snake) => 'v',
            None => ' ',
        }
    }
}

impl Game for Board {
    const ID: &'static str = "board";

    fn from_row(row: &Row) -> Option<Self> {
        let squares = row
            .int("squares")
            .map(|n| n.clamp(i64::from(MIN_SQUARES), i64::from(MAX_SQUARES)) as u32)
            .unwrap_or(DEFAULT_SQUARES);
        let mut board = Self::new(squares);
        for spec in row.list("ladders") {
            board.add_jump(&spec, JumpKind::Ladder);
        }
        for spec in row.list("snakes") {
            board.add_jump(&spec, JumpKind::Snake);
        }
        Some(board)
    }

    fn render(&self, _seed: &str) -> Vec<String> {
        let mut lines = Vec::with_capacity(self.rows() as usize + 3);
        for row in 0..self.rows() {
            let cells: Vec<String> = (0..self.columns())
                .map(|col| match self.square_at(row, col) {
                    Some(square) => format!("{:>3}{}", square, self.marker(square)),
                    None => "    ".to_string(),
                })
                .collect();
            lines.push(cells.join(""));
        }

        let roll = random_int(1, DIE_FACES) as u32;
        lines.push(String::new());
        lines.push(format!(
            "First roll: {roll}, move to square {}",
            self.land(roll)
        ));
        lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn board(value: serde_json::Value) -> Board {
        Board::from_row(value.as_object().unwrap()).unwrap()
    }

    #[test]
    fn defaults_and_clamping() {
        assert_eq!(board(json!({})).squares(), DEFAULT_SQUARES);
        assert_eq!(board(json!({"squares": 500})).squares(), MAX_SQUARES);
        assert_eq!(board(json!({"squares": "3"})).squares(), MIN_SQUARES);
    }

    #[test]
    fn serpentine_layout() {
        let b = Board::new(30); // 6 columns, 5 rows
        assert_eq!(b.rows(), 5);
        assert_eq!(b.cell_of(1), Some((4, 0)));
        assert_eq!(b.cell_of(6), Some((4, 5)));
        assert_eq!(b.cell_of(7), Some((3, 5)));
        assert_eq!(b.cell_of(12), Some((3, 0)));
        assert_eq!(b.cell_of(25), Some((0, 0)));
        assert_eq!(b.cell_of(30), Some((0, 5)));
        assert_eq!(b.cell_of(0), None);
        assert_eq!(b.cell_of(31), None);
    }

    #[test]
    fn square_at_inverts_cell_of() {
        let b = Board::new(64);
        for square in 1..=64 {
            let (row, col) = b.cell_of(square).unwrap();
            assert_eq!(b.square_at(row, col), Some(square));
        }
        // 64 squares on a 10-wide grid leave the top row partly empty.
        assert_eq!(b.square_at(0, 9), None);
    }

    #[test]
    fn jumps_are_validated() {
        let b = board(json!({
            "squares": 30,
            "ladders": "3>12, 12>3, 5>40, 3>20",
            "snakes": "25>5, 8>9, 30>1",
        }));
        assert_eq!(
            b.jumps(),
            &[
                Jump { from: 3, to: 12, kind: JumpKind::Ladder },
                Jump { from: 25, to: 5, kind: JumpKind::Snake },
            ]
        );
        assert_eq!(b.land(3), 12);
        assert_eq!(b.land(25), 5);
        assert_eq!(b.land(4), 4);
        assert_eq!(b.land(99), 30);
    }

    #[test]
    fn render_lists_rows_and_roll() {
        let b = board(json!({"squares": 12, "ladders": "2>11"}));
        let lines = b.render("ignored");
        assert_eq!(lines.len(), b.rows() as usize + 2);
        assert!(lines[b.rows() as usize - 1].contains("  2^"));
        assert!(lines.last().unwrap().starts_with("First roll: "));
    }
}
