//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, paints the view, and
//! translates key presses into `core::Action` values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Loop
//!
//! Strictly synchronous: draw, block on the next terminal event, dispatch it,
//! draw again. There are no timers or background tasks, so the screen only
//! changes in response to a key press or a resize. Quit is only ever seen
//! between events.

mod component;
mod components;
pub mod event;
pub mod keymap;
mod ui;

use log::{debug, info};
use std::io;

use ratatui::DefaultTerminal;

use crate::core::config::ResolvedConfig;
use crate::core::state::Session;
use crate::core::{Effect, update};
use crate::tui::event::{TuiEvent, next_event};
use crate::tui::keymap::Keymap;

/// Route one terminal event through the keymap into the core reducer.
///
/// Unbound keys and resizes leave the session alone.
pub fn dispatch(session: &mut Session, keymap: &Keymap, event: &TuiEvent) -> Effect {
    match event {
        TuiEvent::Key(key) => match keymap.classify(key) {
            Some(action) => {
                debug!("Key {:?} → {:?}", key.code, action);
                update(session, action)
            }
            None => Effect::None,
        },
        TuiEvent::Resize => Effect::None,
    }
}

/// Run a practice session until quit or a terminal error.
///
/// Key bindings are checked before the terminal switches to raw mode, so a
/// bad binding is reported on a normal screen. A terminal that cannot be set
/// up comes back as the underlying `io::Error`.
pub fn run(config: &ResolvedConfig) -> io::Result<()> {
    let keymap = Keymap::from_names(&config.keys)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, format!("key bindings: {e}")))?;
    let mut session = Session::with_seed(config.seed);
    info!(
        "Starting practice session (seed: {})",
        config
            .seed
            .map(|s| s.to_string())
            .unwrap_or_else(|| "entropy".to_string())
    );

    // Undo a half-finished setup (raw mode on, alternate screen failed).
    let mut terminal = ratatui::try_init().inspect_err(|_| ratatui::restore())?;
    let result = event_loop(&mut terminal, &mut session, &keymap, config.seed);
    ratatui::restore();
    result
}

fn event_loop(
    terminal: &mut DefaultTerminal,
    session: &mut Session,
    keymap: &Keymap,
    seed: Option<u64>,
) -> io::Result<()> {
    let controls = keymap.controls();
    loop {
        terminal.draw(|f| ui::draw_ui(f, &*session, &controls, seed))?;

        let event = next_event()?;
        if dispatch(session, keymap, &event) == Effect::Quit {
            return Ok(());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::{HiloConfig, resolve};
    use crate::core::deck::DECK_SIZE;
    use crate::test_support::test_session;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    fn press(code: KeyCode) -> TuiEvent {
        TuiEvent::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn test_tab_deals_and_space_reveals() {
        let mut session = test_session();
        let keymap = Keymap::default();

        assert_eq!(dispatch(&mut session, &keymap, &press(KeyCode::Tab)), Effect::None);
        assert!(session.current_card.is_some());
        assert_eq!(session.deck.len(), DECK_SIZE - 1);

        dispatch(&mut session, &keymap, &press(KeyCode::Char(' ')));
        assert!(session.reveal);
    }

    #[test]
    fn test_unbound_key_and_resize_are_noops() {
        let mut session = test_session();
        let keymap = Keymap::default();
        let deck = session.deck.clone();

        assert_eq!(dispatch(&mut session, &keymap, &press(KeyCode::Char('z'))), Effect::None);
        assert_eq!(dispatch(&mut session, &keymap, &TuiEvent::Resize), Effect::None);

        assert_eq!(session.deck, deck);
        assert!(session.current_card.is_none());
        assert!(!session.reveal);
    }

    /// True when some terminal is reachable, in which case `run` would
    /// really take over the screen.
    fn terminal_attached() -> bool {
        use std::io::IsTerminal;
        io::stdin().is_terminal()
            || io::stdout().is_terminal()
            || std::fs::File::open("/dev/tty").is_ok()
    }

    #[test]
    fn test_run_without_terminal_returns_error() {
        if terminal_attached() {
            return;
        }
        let config = resolve(&HiloConfig::default(), Some(1));
        assert!(run(&config).is_err());
    }

    #[test]
    fn test_run_rejects_bad_key_binding_before_terminal_setup() {
        let mut config = resolve(&HiloConfig::default(), Some(1));
        config.keys.next = vec!["nope".to_string()];
        let err = run(&config).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidInput);
    }

    #[test]
    fn test_quit_keys() {
        let mut session = test_session();
        let keymap = Keymap::default();
        assert_eq!(dispatch(&mut session, &keymap, &press(KeyCode::Char('q'))), Effect::Quit);
        let ctrl_c = TuiEvent::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert_eq!(dispatch(&mut session, &keymap, &ctrl_c), Effect::Quit);
    }
}
