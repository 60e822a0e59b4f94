//! Deck, shuffle, scoring, and ledger tests.

use std::collections::HashSet;

use bjtable::ledger::{CHIP_SLOT, parse_balance};
use bjtable::shuffle::{LEGACY_SHUFFLE_PASSES, legacy_shuffle, shuffle};
use bjtable::{
    Card, ChipLedger, DECK_SIZE, Deck, FileLedger, HandScore, LedgerError, MemoryLedger, Pip,
    ShuffleMode, Suit, effective_value, is_blackjack, is_bust, score_hand,
};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

const fn card(suit: Suit, pip: Pip) -> Card {
    Card::new(suit, pip)
}

fn permutations(cards: &mut Vec<Card>, k: usize, out: &mut Vec<Vec<Card>>) {
    if k <= 1 {
        out.push(cards.clone());
        return;
    }
    permutations(cards, k - 1, out);
    for i in 0..k - 1 {
        if k % 2 == 0 {
            cards.swap(i, k - 1);
        } else {
            cards.swap(0, k - 1);
        }
        permutations(cards, k - 1, out);
    }
}

fn sorted_key(cards: &[Card]) -> Vec<(usize, usize)> {
    let mut keys: Vec<(usize, usize)> = cards
        .iter()
        .map(|c| {
            let suit = Suit::ALL.iter().position(|s| *s == c.suit).unwrap();
            let pip = Pip::ALL.iter().position(|p| *p == c.pip).unwrap();
            (suit, pip)
        })
        .collect();
    keys.sort_unstable();
    keys
}

#[test]
fn ordered_deck_has_every_card_once() {
    let deck = Deck::ordered();
    assert_eq!(deck.len(), DECK_SIZE);

    let unique: HashSet<Card> = deck.iter().copied().collect();
    assert_eq!(unique.len(), DECK_SIZE);

    for suit in Suit::ALL {
        assert_eq!(deck.iter().filter(|c| c.suit == suit).count(), 13);
    }
    for pip in Pip::ALL {
        assert_eq!(deck.iter().filter(|c| c.pip == pip).count(), 4);
    }
}

#[test]
fn deck_draws_from_the_front() {
    let mut deck = Deck::ordered();
    assert_eq!(deck.draw(), Some(card(Suit::Clubs, Pip::Ace)));
    assert_eq!(deck.draw(), Some(card(Suit::Clubs, Pip::Two)));
    assert_eq!(deck.len(), DECK_SIZE - 2);

    let mut short = Deck::from_cards(vec![card(Suit::Hearts, Pip::King)]);
    assert_eq!(short.draw(), Some(card(Suit::Hearts, Pip::King)));
    assert_eq!(short.draw(), None);
    assert!(short.is_empty());
}

#[test]
fn shuffled_deck_is_a_permutation() {
    let ordered: Vec<Card> = Deck::ordered().iter().copied().collect();

    for mode in [ShuffleMode::Legacy, ShuffleMode::Uniform] {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let deck = Deck::build(true, mode, &mut rng);
        let shuffled: Vec<Card> = deck.iter().copied().collect();

        assert_eq!(shuffled.len(), DECK_SIZE);
        assert_eq!(sorted_key(&shuffled), sorted_key(&ordered));
        assert_ne!(shuffled, ordered, "{mode:?} left the deck in order");
    }
}

#[test]
fn build_without_shuffle_is_ordered() {
    let mut rng = ChaCha8Rng::seed_from_u64(7);
    assert_eq!(Deck::build(false, ShuffleMode::Legacy, &mut rng), Deck::ordered());
}

#[test]
fn shuffle_is_reproducible_for_a_seed() {
    let mut first = ChaCha8Rng::seed_from_u64(99);
    let mut second = ChaCha8Rng::seed_from_u64(99);
    assert_eq!(
        Deck::build(true, ShuffleMode::Legacy, &mut first),
        Deck::build(true, ShuffleMode::Legacy, &mut second)
    );
}

#[test]
fn tiny_decks_are_left_alone() {
    let mut rng = ChaCha8Rng::seed_from_u64(1);

    let mut empty: Vec<Card> = Vec::new();
    shuffle(&mut empty, ShuffleMode::Legacy, &mut rng);
    assert!(empty.is_empty());

    let mut single = vec![card(Suit::Spades, Pip::Queen)];
    shuffle(&mut single, ShuffleMode::Legacy, &mut rng);
    assert_eq!(single, vec![card(Suit::Spades, Pip::Queen)]);
}

#[test]
fn legacy_shuffle_on_two_cards_swaps_once_per_pass() {
    // The only legal target is index 0, so each pass swaps the pair once.
    assert_eq!(LEGACY_SHUFFLE_PASSES % 2, 0);

    let mut rng = ChaCha8Rng::seed_from_u64(3);
    let original = vec![card(Suit::Clubs, Pip::Two), card(Suit::Hearts, Pip::Three)];
    let mut pair = original.clone();
    legacy_shuffle(&mut pair, &mut rng);
    assert_eq!(pair, original);
}

#[test]
fn empty_hand_scores_zero() {
    assert_eq!(score_hand(&[]), HandScore::default());
    assert_eq!(
        score_hand(&[]),
        HandScore {
            score: 0,
            secondary_score: 0
        }
    );
}

#[test]
fn ace_king_is_blackjack() {
    let hand = [card(Suit::Spades, Pip::Ace), card(Suit::Hearts, Pip::King)];
    let score = score_hand(&hand);
    assert_eq!(
        score,
        HandScore {
            score: 11,
            secondary_score: 21
        }
    );
    assert_eq!(effective_value(score), 21);
    assert!(is_blackjack(&hand));
    assert!(!is_bust(score));
}

#[test]
fn only_one_ace_is_upgraded() {
    let hand = [
        card(Suit::Spades, Pip::Ace),
        card(Suit::Hearts, Pip::Ace),
        card(Suit::Clubs, Pip::Nine),
    ];
    let score = score_hand(&hand);
    assert_eq!(
        score,
        HandScore {
            score: 11,
            secondary_score: 0
        }
    );
    assert_eq!(effective_value(score), 11);

    let two_aces = [card(Suit::Spades, Pip::Ace), card(Suit::Hearts, Pip::Ace)];
    assert_eq!(
        score_hand(&two_aces),
        HandScore {
            score: 2,
            secondary_score: 12
        }
    );
}

#[test]
fn hard_twenty_five_is_bust() {
    let hand = [
        card(Suit::Spades, Pip::Ten),
        card(Suit::Hearts, Pip::Ten),
        card(Suit::Clubs, Pip::Five),
    ];
    let score = score_hand(&hand);
    assert_eq!(
        score,
        HandScore {
            score: 25,
            secondary_score: 0
        }
    );
    assert!(is_bust(score));
}

#[test]
fn face_cards_count_ten() {
    let hand = [
        card(Suit::Spades, Pip::Jack),
        card(Suit::Hearts, Pip::Queen),
    ];
    assert_eq!(score_hand(&hand).score, 20);
    assert!(!is_blackjack(&hand));
}

#[test]
fn three_card_twenty_one_is_not_blackjack() {
    let hand = [
        card(Suit::Spades, Pip::Seven),
        card(Suit::Hearts, Pip::Seven),
        card(Suit::Clubs, Pip::Seven),
    ];
    assert_eq!(score_hand(&hand).score, 21);
    assert!(!is_blackjack(&hand));
}

#[test]
fn scoring_ignores_card_order() {
    let hands = [
        vec![
            card(Suit::Spades, Pip::Ace),
            card(Suit::Hearts, Pip::Five),
            card(Suit::Clubs, Pip::Ace),
            card(Suit::Diamonds, Pip::Three),
        ],
        vec![
            card(Suit::Spades, Pip::King),
            card(Suit::Hearts, Pip::Two),
            card(Suit::Clubs, Pip::Ace),
        ],
        vec![
            card(Suit::Spades, Pip::Nine),
            card(Suit::Hearts, Pip::Eight),
            card(Suit::Clubs, Pip::Seven),
        ],
    ];

    for hand in hands {
        let expected = score_hand(&hand);
        let mut cards = hand.clone();
        let mut all = Vec::new();
        let len = cards.len();
        permutations(&mut cards, len, &mut all);
        assert_eq!(all.len(), (1..=len).product::<usize>());

        for permutation in all {
            assert_eq!(score_hand(&permutation), expected);
        }
    }
}

#[test]
fn secondary_score_is_always_score_plus_ten() {
    let deck: Vec<Card> = Deck::ordered().iter().copied().collect();
    for first in &deck {
        for second in &deck {
            for third in [None, Some(card(Suit::Clubs, Pip::Ace))] {
                let mut hand = vec![*first, *second];
                hand.extend(third);
                let score = score_hand(&hand);
                if score.secondary_score != 0 {
                    assert_eq!(score.secondary_score, score.score + 10);
                    assert!(score.secondary_score <= 21);
                }
            }
        }
    }
}

#[test]
fn cards_display_pip_then_suit() {
    assert_eq!(card(Suit::Spades, Pip::Ace).to_string(), "A\u{2660}");
    assert_eq!(card(Suit::Hearts, Pip::Ten).to_string(), "10\u{2665}");
    assert!(Suit::Diamonds.is_red());
    assert!(!Suit::Clubs.is_red());
}

#[test]
fn parse_balance_accepts_integers_and_truncates_fractions() {
    assert_eq!(parse_balance("500"), Ok(500));
    assert_eq!(parse_balance(" 42\n"), Ok(42));
    assert_eq!(parse_balance("12.5"), Ok(12));
    assert_eq!(parse_balance("7."), Ok(7));
}

#[test]
fn parse_balance_rejects_garbage() {
    for text in ["", "abc", "-3", "1.x", ".5", "NaN"] {
        assert_eq!(parse_balance(text), Err(LedgerError::Corrupt), "{text:?}");
    }
}

#[test]
fn memory_ledger_round_trips_through_text() {
    let mut ledger = MemoryLedger::new();
    assert_eq!(ledger.load(), Ok(None));

    ledger.save(275).unwrap();
    assert_eq!(ledger.slot(), Some("275"));
    assert_eq!(ledger.load(), Ok(Some(275)));
    assert_eq!(ledger.writes(), 1);

    let mut corrupt = MemoryLedger::with_slot("lots");
    assert_eq!(corrupt.load(), Err(LedgerError::Corrupt));
}

#[test]
fn file_ledger_treats_missing_file_as_first_run() {
    let path = std::env::temp_dir().join(format!(
        "bjtable-{CHIP_SLOT}-{}-{:?}.txt",
        std::process::id(),
        std::thread::current().id()
    ));
    let _ = std::fs::remove_file(&path);

    let mut ledger = FileLedger::new(&path);
    assert_eq!(ledger.load(), Ok(None));

    ledger.save(640).unwrap();
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "640");
    assert_eq!(ledger.load(), Ok(Some(640)));

    std::fs::remove_file(&path).unwrap();
}
