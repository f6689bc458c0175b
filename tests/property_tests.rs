//! Property tests for the shuffle and the replay guarantee.

use proptest::prelude::*;
use tarot_draw::core::{shuffle, DrawRng};
use tarot_draw::{draw, normalize_seed, Deck, SpreadCatalog};

proptest! {
    #[test]
    fn shuffle_is_permutation(len in 0usize..200, signature in ".*") {
        let deck: Vec<usize> = (0..len).collect();
        let mut rng = DrawRng::from_signature(&signature);

        let mut shuffled = shuffle(&deck, &mut rng);

        prop_assert_eq!(rng.draws(), len.saturating_sub(1) as u64);
        shuffled.sort_unstable();
        prop_assert_eq!(shuffled, deck);
    }

    #[test]
    fn generator_is_deterministic(signature in ".*", n in 1usize..64) {
        let mut a = DrawRng::from_signature(&signature);
        let mut b = DrawRng::from_signature(&signature);
        for _ in 0..n {
            let v = a.next_f64();
            prop_assert!((0.0..1.0).contains(&v));
            prop_assert_eq!(v, b.next_f64());
        }
    }

    #[test]
    fn normalize_is_idempotent(input in ".*") {
        let once = normalize_seed(Some(input.as_str()));
        let twice = normalize_seed(Some(once.as_str()));
        prop_assert!(!once.as_str().is_empty());
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn draw_replays(seed in "[a-zA-Z0-9 ]{1,24}", spread_index in 0usize..4) {
        let deck = Deck::marseille();
        let spreads = SpreadCatalog::builtin();
        let spread = spreads.iter().nth(spread_index).unwrap();
        let seed = normalize_seed(Some(seed.as_str()));

        let a = draw(spread, &deck, &seed).unwrap();
        let b = draw(spread, &deck, &seed).unwrap();

        prop_assert!(a.same_draw(&b));
        prop_assert_eq!(a.len(), spread.size());
    }
}

#[test]
fn shuffle_moves_cards_for_most_seeds() {
    let deck: Vec<u32> = (0..78).collect();
    let unchanged = (0..500)
        .filter(|i| {
            let mut rng = DrawRng::from_signature(&format!("seed-{i}"));
            shuffle(&deck, &mut rng) == deck
        })
        .count();

    assert_eq!(unchanged, 0);
}
