use hilo::core::deck::{DECK_SIZE, Deck, Rank, hi_lo_value};
use hilo::core::view::{Controls, render};
use hilo::core::{Action, Effect, Session, update};
use hilo::tui::dispatch;
use hilo::tui::event::TuiEvent;
use hilo::tui::keymap::Keymap;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

// ============================================================================
// Helper Functions
// ============================================================================

fn press(code: KeyCode) -> TuiEvent {
    TuiEvent::Key(KeyEvent::new(code, KeyModifiers::NONE))
}

/// Deal `n` cards and return their ranks in deal order.
fn deal_ranks(session: &mut Session, n: usize) -> Vec<Rank> {
    (0..n)
        .map(|_| {
            update(session, Action::NextCard);
            session.current_card.expect("card dealt").rank
        })
        .collect()
}

// ============================================================================
// Deck Engine
// ============================================================================

#[test]
fn test_hi_lo_values_sum_to_zero_over_ranks() {
    let total: i32 = Rank::ALL.into_iter().map(hi_lo_value).sum();
    assert_eq!(total, 0);
    assert!(Rank::ALL.into_iter().all(|r| (-1..=1).contains(&hi_lo_value(r))));
}

#[test]
fn test_injected_rng_drives_the_shuffle() {
    let mut rng = ChaCha8Rng::seed_from_u64(31337);
    let deck = Deck::shuffled(&mut rng);

    let mut session = Session::new(Box::new(ChaCha8Rng::seed_from_u64(31337)));
    let dealt = deal_ranks(&mut session, DECK_SIZE);

    let expected: Vec<Rank> = deck.cards().map(|c| c.rank).collect();
    assert_eq!(dealt, expected);
}

// ============================================================================
// Session State Machine
// ============================================================================

#[test]
fn test_each_cycle_deals_every_rank_once() {
    let mut session = Session::seeded(8);
    for _ in 0..3 {
        let mut ranks = deal_ranks(&mut session, DECK_SIZE);
        ranks.sort_by_key(|r| Rank::ALL.iter().position(|x| x == r));
        assert_eq!(ranks, Rank::ALL.to_vec());
        assert_eq!(session.running_count, 0);
    }
}

#[test]
fn test_count_tracks_dealt_cards_mid_cycle() {
    let mut session = Session::seeded(77);
    let mut expected = 0;
    for _ in 0..30 {
        update(&mut session, Action::NextCard);
        expected += session.current_card.unwrap().count_value;
        assert_eq!(session.running_count, expected);
    }
}

#[test]
fn test_same_seed_same_session() {
    let a = deal_ranks(&mut Session::seeded(5), 40);
    let b = deal_ranks(&mut Session::seeded(5), 40);
    assert_eq!(a, b);
}

#[test]
fn test_exhausted_deck_is_replenished() {
    let mut session = Session::seeded(1);
    deal_ranks(&mut session, DECK_SIZE);
    assert!(session.deck.is_empty());
    let before = session.running_count;

    update(&mut session, Action::NextCard);

    assert_eq!(session.deck.len(), DECK_SIZE - 1);
    let card = session.current_card.unwrap();
    assert_eq!(session.running_count, before + card.count_value);
}

// ============================================================================
// Keys → Session → View
// ============================================================================

#[test]
fn test_keyboard_practice_round() {
    let mut session = Session::seeded(2);
    let keymap = Keymap::default();
    let controls = keymap.controls();

    let view = render(&session, &controls);
    assert!(view.contains("Press TAB to deal a card"));
    assert!(!view.contains("Running count"));

    for _ in 0..4 {
        assert_eq!(dispatch(&mut session, &keymap, &press(KeyCode::Tab)), Effect::None);
    }
    let view = render(&session, &controls);
    let rank = session.current_card.unwrap().rank;
    assert!(view.contains(&format!("Current card: [{}]", rank)));
    assert!(!view.contains("Running count"));

    dispatch(&mut session, &keymap, &press(KeyCode::Char(' ')));
    dispatch(&mut session, &keymap, &press(KeyCode::Char(' ')));
    let view = render(&session, &controls);
    assert!(view.contains(&format!("Running count: {}", session.running_count)));

    let before = render(&session, &controls);
    assert_eq!(dispatch(&mut session, &keymap, &press(KeyCode::Char('q'))), Effect::Quit);
    assert_eq!(render(&session, &controls), before);
}

#[test]
fn test_custom_controls_show_in_legend() {
    let session = Session::seeded(0);
    let controls = Controls {
        next: "n".to_string(),
        reveal: "r".to_string(),
        quit: "x".to_string(),
    };
    let view = render(&session, &controls);
    assert!(view.contains("Press n to deal a card"));
    assert!(view.contains("  r → reveal count"));
}
