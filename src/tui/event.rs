use crossterm::event::{self, Event, KeyEvent, KeyEventKind};

/// TUI-specific input events
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TuiEvent {
    /// A key press (repeats included, releases filtered out)
    Key(KeyEvent),
    /// Terminal size changed; only needs a redraw
    Resize,
}

/// Block until the next event the loop cares about.
///
/// Read failures are returned as-is so the loop can end the session.
pub fn next_event() -> std::io::Result<TuiEvent> {
    loop {
        if let Some(event) = translate(event::read()?) {
            return Ok(event);
        }
    }
}

fn translate(event: Event) -> Option<TuiEvent> {
    match event {
        Event::Key(key_event) => {
            log::debug!("Key event: {:?} with modifiers {:?}", key_event.code, key_event.modifiers);
            // Windows and kitty-protocol terminals also report releases
            match key_event.kind {
                KeyEventKind::Press | KeyEventKind::Repeat => Some(TuiEvent::Key(key_event)),
                KeyEventKind::Release => None,
            }
        }
        Event::Resize(_, _) => Some(TuiEvent::Resize),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEventState, KeyModifiers};

    #[test]
    fn test_press_is_forwarded() {
        let key = KeyEvent::new(KeyCode::Tab, KeyModifiers::NONE);
        assert_eq!(translate(Event::Key(key)), Some(TuiEvent::Key(key)));
    }

    #[test]
    fn test_release_is_dropped() {
        let key = KeyEvent {
            code: KeyCode::Tab,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        };
        assert_eq!(translate(Event::Key(key)), None);
    }

    #[test]
    fn test_resize_and_focus() {
        assert_eq!(translate(Event::Resize(80, 24)), Some(TuiEvent::Resize));
        assert_eq!(translate(Event::FocusGained), None);
    }
}
