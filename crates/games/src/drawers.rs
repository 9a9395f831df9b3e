//! Classification drawers: sort a tray of items into named drawers.

use tracing::warn;

use crate::core::seeded_shuffle;
use crate::round::Game;
use crate::types::{Row, RowExt};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Drawers {
    drawers: Vec<String>,
    /// `(item, drawer index)`
    items: Vec<(String, usize)>,
}

impl Drawers {
    pub fn drawers(&self) -> &[String] {
        &self.drawers
    }

    /// Name of the drawer `item` belongs in.
    pub fn drawer_for(&self, item: &str) -> Option<&str> {
        self.items
            .iter()
            .find(|(name, _)| name == item)
            .map(|(_, d)| self.drawers[*d].as_str())
    }

    /// Item names in tray order for `seed`.
    pub fn tray(&self, seed: &str) -> Vec<&str> {
        let names: Vec<&str> = self.items.iter().map(|(name, _)| name.as_str()).collect();
        seeded_shuffle(&names, seed)
    }
}

impl Game for Drawers {
    const ID: &'static str = "drawers";

    fn from_row(row: &Row) -> Option<Self> {
        let drawers = row.list("drawers");
        if drawers.is_empty() {
            return None;
        }

        let items: Vec<(String, usize)> = row
            .list("items")
            .into_iter()
            .filter_map(|entry| {
                let (item, drawer) = entry.split_once(':')?;
                let (item, drawer) = (item.trim(), drawer.trim());
                match drawers.iter().position(|d| d == drawer) {
                    Some(index) if !item.is_empty() => Some((item.to_string(), index)),
                    _ => {
                        warn!(%entry, "item names no known drawer");
                        None
                    }
                }
            })
            .collect();
        if items.is_empty() {
            return None;
        }

        Some(Self { drawers, items })
    }

    fn render(&self, seed: &str) -> Vec<String> {
        let mut lines = vec![
            format!("Drawers: {}", self.drawers.join(" | ")),
            String::new(),
            "Sort these items:".to_string(),
        ];
        lines.extend(self.tray(seed).into_iter().map(|item| format!("  - {item}")));
        lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn drawers(value: serde_json::Value) -> Option<Drawers> {
        Drawers::from_row(value.as_object().unwrap())
    }

    #[test]
    fn items_map_to_drawers() {
        let game = drawers(json!({
            "drawers": "land, sea",
            "items": "camel: land, whale:sea, griffin: sky, :sea",
        }))
        .unwrap();
        assert_eq!(game.drawers(), &["land".to_string(), "sea".to_string()]);
        assert_eq!(game.drawer_for("camel"), Some("land"));
        assert_eq!(game.drawer_for("whale"), Some("sea"));
        assert_eq!(game.drawer_for("griffin"), None);
    }

    #[test]
    fn missing_parts_mean_no_game() {
        assert!(drawers(json!({"items": "a:b"})).is_none());
        assert!(drawers(json!({"drawers": "a", "items": "x:z"})).is_none());
    }

    #[test]
    fn tray_is_a_seeded_permutation() {
        let game = drawers(json!({
            "drawers": "clean, unclean",
            "items": "cow:clean, sheep:clean, pig:unclean, camel:unclean, goat:clean",
        }))
        .unwrap();
        let tray = game.tray("tzav:drawers:0");
        assert_eq!(tray, game.tray("tzav:drawers:0"));
        let mut sorted = tray.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, vec!["camel", "cow", "goat", "pig", "sheep"]);

        let lines = game.render("tzav:drawers:0");
        assert_eq!(lines[0], "Drawers: clean | unclean");
        assert_eq!(lines.len(), 3 + 5);
    }
}
