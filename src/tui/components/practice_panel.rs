//! # PracticePanel Component
//!
//! Paints the text produced by `core::view::render` inside a bordered block.
//! The panel never looks at the session; it only knows the string.

use crate::tui::component::Component;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::Text;
use ratatui::widgets::{Block, Paragraph, Wrap};

pub struct PracticePanel {
    pub text: String,
}

impl PracticePanel {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    fn paragraph(&self) -> Paragraph<'_> {
        Paragraph::new(self.text.as_str())
            .block(
                Block::bordered()
                    .border_style(Style::default().fg(Color::Green))
                    .title(" hi-lo "),
            )
            .wrap(Wrap { trim: false })
    }

    /// Columns needed to show the longest line unwrapped, borders included.
    pub fn preferred_width(&self) -> u16 {
        let width = Text::raw(self.text.as_str()).width() + 2;
        u16::try_from(width).unwrap_or(u16::MAX)
    }

    /// Rows needed at `width` columns (borders included) once long lines wrap.
    pub fn required_height(&self, width: u16) -> u16 {
        let inner_width = width.saturating_sub(2);
        let rows = self.paragraph().line_count(inner_width);
        u16::try_from(rows).unwrap_or(u16::MAX)
    }
}

impl Component for PracticePanel {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        frame.render_widget(self.paragraph(), area);
    }
}
