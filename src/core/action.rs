//! # Actions
//!
//! Everything the player can do becomes an `Action`.
//! Tab pressed? That's `Action::NextCard`. Space? `Action::Reveal`.
//! Keys with no binding never become an action at all; the TUI drops them.
//!
//! The `update()` function takes the current session and an action,
//! mutates the session, and returns an `Effect` telling the loop what to do next.
//! No I/O happens here.
//!
//! ```text
//! Session + Action  →  update()  →  Session' + Effect
//! ```

use log::{debug, info};

use crate::core::state::Session;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Deal the next card, reshuffling first if the deck is spent.
    NextCard,
    /// Show the running count until the next deal.
    Reveal,
    /// End the session.
    Quit,
}

/// What the event loop should do after an update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    Quit,
}

pub fn update(session: &mut Session, action: Action) -> Effect {
    match action {
        Action::NextCard => {
            if session.deck.is_empty() {
                session.reshuffle();
                info!(
                    "Deck exhausted, reshuffled (deck #{}, {} cards dealt so far)",
                    session.decks_shuffled, session.cards_dealt
                );
            }
            // A reshuffled deck always holds 13 cards, so this only skips on a broken deck.
            if let Some(card) = session.deck.deal() {
                session.current_card = Some(card);
                session.running_count += card.count_value;
                session.cards_dealt += 1;
                session.reveal = false;
                debug!(
                    "Dealt {} ({:+}), running count {}, {} left in deck",
                    card.rank,
                    card.count_value,
                    session.running_count,
                    session.deck.len()
                );
            }
            Effect::None
        }
        Action::Reveal => {
            session.reveal = true;
            debug!("Revealed running count {}", session.running_count);
            Effect::None
        }
        Action::Quit => {
            info!(
                "Quit after {} cards, final running count {}",
                session.cards_dealt, session.running_count
            );
            Effect::Quit
        }
    }
}
