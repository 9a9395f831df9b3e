//! ShelfView: lays out the tab strip and the active panel in a framebuffer.
//!
//! Pure (no I/O), so layouts are unit-tested directly.

use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::loader::{TabPhase, TabView};

pub const FOOTER: &str = "1-9 pick  Tab/Right next  Shift-Tab/Left prev  Esc close  q quit";

const ACCENT: Rgb = Rgb::new(40, 90, 160);

/// Label for the tab at `index`: its shortcut digit, title and load marker.
pub fn tab_label(index: usize, tab: &TabView) -> String {
    let marker = match tab.phase {
        TabPhase::Loading => " …",
        TabPhase::Failed => " !",
        TabPhase::NotLoaded | TabPhase::Ready => "",
    };
    format!(" {} {}{} ", index + 1, tab.title, marker)
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ShelfView;

impl ShelfView {
    pub fn new() -> Self {
        Self
    }

    /// Render `tabs` and the active panel's `body` into `fb`.
    ///
    /// Row 0 holds the tab strip, row 1 a rule, the last row key help; the
    /// body fills what is left and is clipped to it.
    pub fn render_into(&self, tabs: &[TabView], body: &[String], fb: &mut FrameBuffer) {
        fb.clear();
        if fb.height() == 0 {
            return;
        }

        let mut x = 0;
        for (index, tab) in tabs.iter().enumerate() {
            let style = if tab.active {
                CellStyle::plain().bold().on(ACCENT)
            } else {
                CellStyle::plain()
            };
            x = fb.put_str(x, 0, &tab_label(index, tab), style);
            x = fb.put_str(x, 0, "│", CellStyle::plain().dim());
        }

        if fb.height() < 3 {
            return;
        }
        fb.fill_row(1, '─', CellStyle::plain().dim());
        let footer = fb.height() - 1;
        fb.put_str(0, footer, FOOTER, CellStyle::plain().dim());

        let body_rows = footer - 2;
        if tabs.iter().any(|t| t.active) {
            for (y, line) in (2..2 + body_rows).zip(body) {
                fb.put_str(1, y, line, CellStyle::plain());
            }
        } else if body_rows > 0 {
            let hint = format!("Pick a game with 1-{}", tabs.len().min(9));
            fb.put_str(1, 2, &hint, CellStyle::plain().dim());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::GameId;

    fn tab(id: &str, title: &'static str, phase: TabPhase, active: bool) -> TabView {
        TabView {
            id: GameId::from(id),
            title,
            phase,
            active,
        }
    }

    #[test]
    fn labels_carry_phase_markers() {
        assert_eq!(
            tab_label(0, &tab("memory", "Memory", TabPhase::Ready, false)),
            " 1 Memory "
        );
        assert_eq!(
            tab_label(1, &tab("puzzle", "Puzzle", TabPhase::Loading, true)),
            " 2 Puzzle … "
        );
        assert_eq!(
            tab_label(2, &tab("board", "Board Game", TabPhase::Failed, false)),
            " 3 Board Game ! "
        );
    }

    #[test]
    fn active_tab_shows_body() {
        let tabs = vec![
            tab("memory", "Memory", TabPhase::NotLoaded, false),
            tab("puzzle", "Puzzle", TabPhase::Ready, true),
        ];
        let body = vec!["Puzzle 3x3: ark.png".to_string()];
        let mut fb = FrameBuffer::new(80, 6);
        ShelfView::new().render_into(&tabs, &body, &mut fb);

        assert!(fb.row_text(0).starts_with(" 1 Memory │ 2 Puzzle │"));
        assert!(fb.get(12, 0).is_some_and(|c| c.style.bold));
        assert!(fb.row_text(1).starts_with("──"));
        assert!(fb.row_text(2).starts_with(" Puzzle 3x3: ark.png"));
        assert!(fb.row_text(5).starts_with("1-9 pick"));
    }

    #[test]
    fn idle_shelf_shows_hint() {
        let tabs = vec![tab("memory", "Memory", TabPhase::NotLoaded, false)];
        let mut fb = FrameBuffer::new(40, 5);
        ShelfView::new().render_into(&tabs, &["stale".to_string()], &mut fb);
        assert!(fb.row_text(2).starts_with(" Pick a game with 1-1"));
    }

    #[test]
    fn body_is_clipped_to_available_rows() {
        let tabs = vec![tab("board", "Board Game", TabPhase::Ready, true)];
        let body: Vec<String> = (0..10).map(|i| format!("line {i}")).collect();
        let mut fb = FrameBuffer::new(30, 5);
        ShelfView::new().render_into(&tabs, &body, &mut fb);
        assert!(fb.row_text(2).starts_with(" line 0"));
        assert!(fb.row_text(3).starts_with(" line 1"));
        assert!(fb.row_text(4).starts_with("1-9 pick"));
    }
}
