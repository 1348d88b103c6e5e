use crate::core::state::Session;
use crate::core::view::{Controls, render};
use crate::tui::component::Component;
use crate::tui::components::{PracticePanel, TitleBar};

use ratatui::Frame;
use ratatui::layout::{Constraint, Flex, Layout};

/// Minimum panel width in columns; grows to fit the longest line, clamped to the terminal width.
const PANEL_WIDTH: u16 = 44;

pub fn draw_ui(frame: &mut Frame, session: &Session, controls: &Controls, seed: Option<u64>) {
    use Constraint::{Length, Min};
    let [title_area, main_area] = Layout::vertical([Length(1), Min(0)]).areas(frame.area());

    TitleBar::new(env!("CARGO_PKG_VERSION"), seed).render(frame, title_area);

    let mut panel = PracticePanel::new(render(session, controls));
    let width = panel.preferred_width().max(PANEL_WIDTH).min(main_area.width);
    let [column] = Layout::horizontal([Length(width)])
        .flex(Flex::Center)
        .areas(main_area);
    let [panel_area] = Layout::vertical([Length(panel.required_height(width).min(column.height))])
        .flex(Flex::Center)
        .areas(column);
    panel.render(frame, panel_area);
}
