//! Fisher–Yates shuffle driven by a [`DrawRng`].
//!
//! The loop order and the index formula are part of the replay contract:
//! `i` runs from `len - 1` down to `1`, `j = floor(next() * (i + 1))`.
//! A deck of length `L` consumes exactly `L - 1` generator values
//! (none for `L <= 1`).

use tracing::trace;

use super::rng::DrawRng;

/// Shuffle a slice in place.
pub fn shuffle_in_place<T>(items: &mut [T], rng: &mut DrawRng) {
    for i in (1..items.len()).rev() {
        let r = rng.next_f64();
        // r < 1.0, so j <= i
        let j = (r * (i + 1) as f64).floor() as usize;
        items.swap(i, j);
    }
}

/// Return a shuffled copy of `deck`, leaving the source untouched.
#[must_use]
pub fn shuffle<T: Clone>(deck: &[T], rng: &mut DrawRng) -> Vec<T> {
    let before = rng.draws();
    let mut shuffled = deck.to_vec();
    shuffle_in_place(&mut shuffled, rng);
    trace!(len = deck.len(), consumed = rng.draws() - before, "shuffled deck");
    shuffled
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shuffle_is_permutation() {
        let mut rng = DrawRng::from_signature("perm");
        let data: Vec<u32> = (1..=10).collect();

        let mut shuffled = shuffle(&data, &mut rng);

        // Same elements, different order (very likely)
        assert_eq!(shuffled.len(), data.len());
        assert_ne!(shuffled, data);

        shuffled.sort_unstable();
        assert_eq!(shuffled, data);
    }

    #[test]
    fn test_input_untouched() {
        let mut rng = DrawRng::from_signature("copy");
        let data = vec!["a", "b", "c", "d"];
        let snapshot = data.clone();

        let _ = shuffle(&data, &mut rng);

        assert_eq!(data, snapshot);
    }

    #[test]
    fn test_consumes_len_minus_one_values() {
        for len in [0usize, 1, 2, 5, 78] {
            let mut rng = DrawRng::from_signature("consume");
            let data: Vec<usize> = (0..len).collect();
            let _ = shuffle(&data, &mut rng);
            assert_eq!(rng.draws(), len.saturating_sub(1) as u64, "len {len}");
        }
    }

    #[test]
    fn test_cursor_after_shuffle_is_reproducible() {
        let data: Vec<u32> = (0..78).collect();

        let mut rng1 = DrawRng::from_signature("cursor");
        let mut rng2 = DrawRng::from_signature("cursor");
        let a = shuffle(&data, &mut rng1);
        let b = shuffle(&data, &mut rng2);

        assert_eq!(a, b);
        assert_eq!(rng1.next_f64(), rng2.next_f64());
    }

    #[test]
    fn test_matches_manual_fisher_yates() {
        let data: Vec<u32> = (0..6).collect();
        let mut expected = data.clone();
        let mut manual = DrawRng::from_signature("manual");
        for i in (1..expected.len()).rev() {
            let j = (manual.next_f64() * (i + 1) as f64).floor() as usize;
            expected.swap(i, j);
        }

        let mut rng = DrawRng::from_signature("manual");
        assert_eq!(shuffle(&data, &mut rng), expected);
    }

    #[test]
    fn test_single_and_empty() {
        let mut rng = DrawRng::from_signature("tiny");
        assert_eq!(shuffle(&[7], &mut rng), vec![7]);
        assert!(shuffle::<u8>(&[], &mut rng).is_empty());
        assert_eq!(rng.draws(), 0);
    }
}
