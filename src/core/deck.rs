//! # Deck Engine
//!
//! A practice deck is one card per rank: 13 cards, suits ignored. Hi-Lo only
//! cares about rank, so a full cycle through the deck always nets a count of 0.
//!
//! ```text
//! Rank    A  2  3  4  5  6  7  8  9  10 J  Q  K
//! Value  -1 +1 +1 +1 +1 +1  0  0  0 -1 -1 -1 -1
//! ```
//!
//! The deck never picks its own randomness. Callers hand in an `RngCore`,
//! so a seeded `ChaCha8Rng` gives a reproducible deal order.

use std::collections::VecDeque;
use std::fmt;

use rand::RngCore;
use rand::seq::SliceRandom;

/// Number of cards in one practice deck.
pub const DECK_SIZE: usize = 13;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rank {
    Ace,
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
}

impl Rank {
    /// Fixed construction order, before shuffling.
    pub const ALL: [Rank; DECK_SIZE] = [
        Rank::Ace,
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Rank::Ace => "A",
            Rank::Two => "2",
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "J",
            Rank::Queen => "Q",
            Rank::King => "K",
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Hi-Lo weight of a rank: low cards +1, neutral 0, tens and aces -1.
pub fn hi_lo_value(rank: Rank) -> i32 {
    match rank {
        Rank::Two | Rank::Three | Rank::Four | Rank::Five | Rank::Six => 1,
        Rank::Seven | Rank::Eight | Rank::Nine => 0,
        Rank::Ten | Rank::Jack | Rank::Queen | Rank::King | Rank::Ace => -1,
    }
}

/// A dealt card. `count_value` is always `hi_lo_value(rank)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Card {
    pub rank: Rank,
    pub count_value: i32,
}

impl From<Rank> for Card {
    fn from(rank: Rank) -> Self {
        Self {
            rank,
            count_value: hi_lo_value(rank),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    cards: VecDeque<Card>,
}

impl Deck {
    /// Deck in construction order (A through K), unshuffled.
    #[cfg(test)]
    pub(crate) fn ordered() -> Self {
        Self {
            cards: Rank::ALL.into_iter().map(Card::from).collect(),
        }
    }

    /// Fresh 13-card deck in a uniformly random order drawn from `rng`.
    pub fn shuffled(rng: &mut dyn RngCore) -> Self {
        let mut cards: Vec<Card> = Rank::ALL.into_iter().map(Card::from).collect();
        cards.shuffle(rng);
        Self {
            cards: cards.into(),
        }
    }

    /// Remove and return the top card. Remaining order is preserved.
    pub fn deal(&mut self) -> Option<Card> {
        self.cards.pop_front()
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn cards(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }

    /// Sum of the Hi-Lo values still in the deck.
    #[cfg(test)]
    pub(crate) fn remaining_count(&self) -> i32 {
        self.cards.iter().map(|c| c.count_value).sum()
    }
}
