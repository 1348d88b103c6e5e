//! # View
//!
//! Turns a `Session` into the text block the player sees. Pure: reads the
//! session, never mutates it. The TUI decides how the text gets painted.

use std::fmt::Write;

use crate::core::state::Session;

pub const HEADER: &str = "🃏 Card Counting Practice";

/// Key labels shown in the control legend.
///
/// Built by whoever owns the key bindings, so the legend always matches
/// what the keys actually do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Controls {
    pub next: String,
    pub reveal: String,
    pub quit: String,
}

impl Default for Controls {
    fn default() -> Self {
        Self {
            next: "TAB".to_string(),
            reveal: "SPACE".to_string(),
            quit: "q".to_string(),
        }
    }
}

pub fn render(session: &Session, controls: &Controls) -> String {
    let mut s = format!("{HEADER}\n\n");

    match &session.current_card {
        Some(card) => {
            let _ = writeln!(s, "Current card: [{}]", card.rank);
        }
        None => {
            let _ = writeln!(s, "Press {} to deal a card", controls.next);
        }
    }

    if session.reveal {
        let _ = writeln!(s, "\nRunning count: {}", session.running_count);
    }

    let width = [&controls.next, &controls.reveal, &controls.quit]
        .iter()
        .map(|label| label.chars().count())
        .max()
        .unwrap_or(0);

    s.push_str("\nControls:\n");
    let _ = writeln!(s, "  {:<width$} → next card", controls.next);
    let _ = writeln!(s, "  {:<width$} → reveal count", controls.reveal);
    let _ = writeln!(s, "  {:<width$} → quit", controls.quit);

    s
}
