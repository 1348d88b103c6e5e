//! # TitleBar Component
//!
//! Top status bar: app name, version, and the shuffle seed when one is
//! fixed, so a practice run can be replayed.
//!
//! 1. **Seeded**: `"Hilo v0.1.0 | seed 42"`
//! 2. **Default**: `"Hilo v0.1.0"`

use crate::tui::component::Component;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::Span;

pub struct TitleBar {
    pub version: String,
    pub seed: Option<u64>,
}

impl TitleBar {
    pub fn new(version: impl Into<String>, seed: Option<u64>) -> Self {
        Self {
            version: version.into(),
            seed,
        }
    }

    fn text(&self) -> String {
        match self.seed {
            Some(seed) => format!("Hilo v{} | seed {}", self.version, seed),
            None => format!("Hilo v{}", self.version),
        }
    }
}

impl Component for TitleBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let span = Span::styled(self.text(), Style::default().add_modifier(Modifier::DIM));
        frame.render_widget(span, area);
    }
}
