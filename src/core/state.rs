//! # Session State
//!
//! Everything the practice loop tracks lives in one `Session`:
//!
//! ```text
//! Session
//! ├── deck: Deck                   // undealt remainder of the current cycle
//! ├── current_card: Option<Card>   // last dealt card, None before the first deal
//! ├── running_count: i32           // sum of dealt Hi-Lo values, never reset
//! ├── reveal: bool                 // show the running count?
//! ├── rng: Box<dyn RngCore>        // shuffle source for every new deck
//! ├── cards_dealt: u64             // lifetime deal counter (logging)
//! └── decks_shuffled: u64          // lifetime shuffle counter (logging)
//! ```
//!
//! State changes only happen through `update(session, action)` in action.rs.

use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::core::deck::{Card, Deck};

pub struct Session {
    pub deck: Deck,
    pub current_card: Option<Card>,
    pub running_count: i32,
    pub reveal: bool,
    rng: Box<dyn RngCore>,
    pub cards_dealt: u64,
    pub decks_shuffled: u64,
}

impl Session {
    /// Start a session with a freshly shuffled deck drawn from `rng`.
    pub fn new(mut rng: Box<dyn RngCore>) -> Self {
        let deck = Deck::shuffled(rng.as_mut());
        Self {
            deck,
            current_card: None,
            running_count: 0,
            reveal: false,
            rng,
            cards_dealt: 0,
            decks_shuffled: 1,
        }
    }

    /// Session whose shuffles are reproducible from `seed`.
    pub fn seeded(seed: u64) -> Self {
        Self::new(Box::new(ChaCha8Rng::seed_from_u64(seed)))
    }

    /// Session seeded from OS entropy.
    pub fn from_entropy() -> Self {
        Self::new(Box::new(ChaCha8Rng::from_entropy()))
    }

    /// `Some(seed)` → [`Session::seeded`], `None` → [`Session::from_entropy`].
    pub fn with_seed(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::seeded(seed),
            None => Self::from_entropy(),
        }
    }

    /// Swap in a new shuffled deck, discarding whatever remains.
    pub(crate) fn reshuffle(&mut self) {
        self.deck = Deck::shuffled(self.rng.as_mut());
        self.decks_shuffled += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::deck::DECK_SIZE;
    use crate::test_support::test_session;

    #[test]
    fn test_session_new_defaults() {
        let session = test_session();
        assert_eq!(session.deck.len(), DECK_SIZE);
        assert!(session.current_card.is_none());
        assert_eq!(session.running_count, 0);
        assert!(!session.reveal);
        assert_eq!(session.cards_dealt, 0);
        assert_eq!(session.decks_shuffled, 1);
    }

    #[test]
    fn test_seeded_sessions_share_deck_order() {
        let a = Session::seeded(2024);
        let b = Session::seeded(2024);
        assert_eq!(a.deck, b.deck);
    }

    #[test]
    fn test_reshuffle_restores_full_deck() {
        let mut session = test_session();
        session.deck.deal();
        session.deck.deal();
        session.reshuffle();
        assert_eq!(session.deck.len(), DECK_SIZE);
        assert_eq!(session.decks_shuffled, 2);
    }

    #[test]
    fn test_entropy_session_has_full_deck() {
        let session = Session::with_seed(None);
        assert_eq!(session.deck.len(), DECK_SIZE);
    }
}
