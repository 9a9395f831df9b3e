//! Panel: the container a game renders into.
//!
//! A panel is a cheap cloneable handle. The orchestrator controls visibility
//! and the loading/error states; the game owns the body once `init` runs.

use std::sync::Arc;

use parking_lot::Mutex;

use crate::types::{LOADING_MESSAGE, LOAD_ERROR_MESSAGE};

/// What the panel currently shows.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum PanelBody {
    #[default]
    Empty,
    Loading,
    /// A single status message (no data, load error).
    Message(String),
    /// Game output, one entry per line.
    Lines(Vec<String>),
}

#[derive(Debug, Default)]
struct PanelState {
    visible: bool,
    styles: Vec<String>,
    body: PanelBody,
    /// Bumped on every body change so views can skip redundant redraws.
    revision: u64,
}

#[derive(Debug, Clone, Default)]
pub struct Panel {
    inner: Arc<Mutex<PanelState>>,
}

impl Panel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_visible(&self) -> bool {
        self.inner.lock().visible
    }

    pub(crate) fn show(&self) {
        self.inner.lock().visible = true;
    }

    pub(crate) fn hide(&self) {
        self.inner.lock().visible = false;
    }

    pub(crate) fn attach_style(&self, url: impl Into<String>) {
        self.inner.lock().styles.push(url.into());
    }

    pub(crate) fn show_loading(&self) {
        self.set_body(PanelBody::Loading);
    }

    pub(crate) fn show_load_error(&self) {
        self.show_message(LOAD_ERROR_MESSAGE);
    }

    /// Stylesheet URLs applied to this panel.
    pub fn styles(&self) -> Vec<String> {
        self.inner.lock().styles.clone()
    }

    /// Replace the body with game output.
    pub fn render<I, S>(&self, lines: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.set_body(PanelBody::Lines(lines.into_iter().map(Into::into).collect()));
    }

    /// Replace the body with a single message.
    pub fn show_message(&self, message: impl Into<String>) {
        self.set_body(PanelBody::Message(message.into()));
    }

    pub fn body(&self) -> PanelBody {
        self.inner.lock().body.clone()
    }

    pub fn revision(&self) -> u64 {
        self.inner.lock().revision
    }

    /// The body flattened to display lines.
    pub fn lines(&self) -> Vec<String> {
        match &self.inner.lock().body {
            PanelBody::Empty => Vec::new(),
            PanelBody::Loading => vec![LOADING_MESSAGE.to_string()],
            PanelBody::Message(m) => vec![m.clone()],
            PanelBody::Lines(lines) => lines.clone(),
        }
    }

    fn set_body(&self, body: PanelBody) {
        let mut state = self.inner.lock();
        state.body = body;
        state.revision += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clones_share_state() {
        let panel = Panel::new();
        let handle = panel.clone();
        handle.render(["a", "b"]);
        panel.show();
        assert!(handle.is_visible());
        assert_eq!(panel.lines(), vec!["a", "b"]);
    }

    #[test]
    fn body_changes_bump_revision() {
        let panel = Panel::new();
        assert_eq!(panel.revision(), 0);
        panel.show_loading();
        panel.show_message("hi");
        assert_eq!(panel.revision(), 2);
        assert_eq!(panel.body(), PanelBody::Message("hi".into()));
    }

    #[test]
    fn loading_and_error_have_fixed_text() {
        let panel = Panel::new();
        panel.show_loading();
        assert_eq!(panel.lines(), vec![LOADING_MESSAGE]);
        panel.show_load_error();
        assert_eq!(panel.lines(), vec![LOAD_ERROR_MESSAGE]);
    }
}
