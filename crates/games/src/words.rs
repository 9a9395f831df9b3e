//! Word building from a fixed set of letters.

use tracing::warn;

use crate::core::{random_choice, seeded_shuffle};
use crate::round::Game;
use crate::types::{Row, RowExt};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Words {
    letters: Vec<char>,
    words: Vec<String>,
}

impl Words {
    pub fn letters(&self) -> &[char] {
        &self.letters
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// True if `word` can be spelled, each letter used at most as often as
    /// it appears in the letter set.
    pub fn can_build(&self, word: &str) -> bool {
        let mut pool = self.letters.clone();
        word.chars().filter(|c| !c.is_whitespace()).all(|c| {
            match pool.iter().position(|&l| l == c) {
                Some(i) => {
                    pool.swap_remove(i);
                    true
                }
                None => false,
            }
        })
    }
}

impl Game for Words {
    const ID: &'static str = "words";

    fn from_row(row: &Row) -> Option<Self> {
        let letters: Vec<char> = row
            .text("letters")?
            .chars()
            .filter(|c| !c.is_whitespace() && *c != ',')
            .collect();
        if letters.is_empty() {
            return None;
        }

        let mut game = Self {
            letters,
            words: Vec::new(),
        };
        for word in row.list("words") {
            if game.can_build(&word) {
                game.words.push(word);
            } else {
                warn!(%word, "word cannot be built from the letters");
            }
        }
        Some(game)
    }

    fn render(&self, seed: &str) -> Vec<String> {
        let letters: Vec<String> = seeded_shuffle(&self.letters, seed)
            .into_iter()
            .map(String::from)
            .collect();
        let mut lines = vec![
            format!("Build words from: {}", letters.join(" ")),
            format!("Words to find: {}", self.words.len()),
        ];
        if let Some(bonus) = random_choice(&self.letters) {
            lines.push(format!("Bonus letter: {bonus}"));
        }
        lines
    }
}
