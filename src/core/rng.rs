//! Deterministic generator for replayable draws.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same signature produces an identical sequence
//! - **Portable**: Fixed-width `u32` wrapping arithmetic only, so every
//!   platform (and a JavaScript client using `Math.imul`) agrees bit-for-bit
//! - **Serializable**: O(1) state capture and restore
//!
//! ## Algorithm (frozen)
//!
//! The signature is hashed with **xmur3** over its UTF-16 code units, and the
//! resulting 32-bit word seeds a **mulberry32** stream. Both are published,
//! well-known constructions. Changing either one makes every historical seed
//! unreplayable, so the pair is versioned as [`DrawRng::ALGORITHM`] and pinned
//! by golden vectors in the tests.
//!
//! ```
//! use tarot_draw::core::DrawRng;
//!
//! let mut a = DrawRng::from_signature("alpha::single");
//! let mut b = DrawRng::from_signature("alpha::single");
//!
//! for _ in 0..10 {
//!     assert_eq!(a.next_f64(), b.next_f64());
//! }
//! ```

use rand::RngCore;
use serde::{Deserialize, Serialize};

/// 2^32 as a float, the divisor mapping a `u32` onto `[0, 1)`.
const U32_RANGE: f64 = 4_294_967_296.0;

/// Hash a signature into a 32-bit generator state (xmur3).
///
/// Operates on UTF-16 code units so that non-ASCII seeds hash the same way
/// a browser's `charCodeAt` loop does.
#[must_use]
pub fn hash_signature(signature: &str) -> u32 {
    let len = signature.encode_utf16().count() as u32;
    let mut h: u32 = 1_779_033_703 ^ len;

    for unit in signature.encode_utf16() {
        h = (h ^ u32::from(unit)).wrapping_mul(3_432_918_353);
        h = h.rotate_left(13);
    }

    h = (h ^ (h >> 16)).wrapping_mul(2_246_822_507);
    h = (h ^ (h >> 13)).wrapping_mul(3_266_489_909);
    h ^ (h >> 16)
}

/// Seeded pseudo-random stream keyed by a draw signature.
///
/// Not safe to share between draws: the cursor is sequential state and every
/// draw must derive its own instance from a fresh signature.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DrawRng {
    state: u32,
    draws: u64,
}

impl DrawRng {
    /// Identifier of the frozen hash + mix pair.
    pub const ALGORITHM: &'static str = "xmur3+mulberry32/v1";

    /// Derive a generator from a signature string.
    #[must_use]
    pub fn from_signature(signature: &str) -> Self {
        Self::from_raw(hash_signature(signature))
    }

    /// Create a generator from a raw 32-bit state.
    #[must_use]
    pub const fn from_raw(state: u32) -> Self {
        Self { state, draws: 0 }
    }

    /// Advance the stream and return the raw 32-bit output (mulberry32).
    pub fn next_raw(&mut self) -> u32 {
        self.state = self.state.wrapping_add(0x6D2B_79F5);
        self.draws += 1;

        let mut t = self.state;
        t = (t ^ (t >> 15)).wrapping_mul(t | 1);
        t ^= t.wrapping_add((t ^ (t >> 7)).wrapping_mul(t | 61));
        t ^ (t >> 14)
    }

    /// Advance the stream and return a uniform value in `[0, 1)`.
    pub fn next_f64(&mut self) -> f64 {
        f64::from(self.next_raw()) / U32_RANGE
    }

    /// Number of values drawn since the generator was derived.
    #[must_use]
    pub fn draws(&self) -> u64 {
        self.draws
    }

    /// Get the current state for checkpointing.
    #[must_use]
    pub fn state(&self) -> DrawRngState {
        DrawRngState {
            state: self.state,
            draws: self.draws,
        }
    }

    /// Restore from a saved state.
    #[must_use]
    pub fn from_state(state: &DrawRngState) -> Self {
        Self {
            state: state.state,
            draws: state.draws,
        }
    }
}

impl RngCore for DrawRng {
    fn next_u32(&mut self) -> u32 {
        self.next_raw()
    }

    fn next_u64(&mut self) -> u64 {
        let lo = u64::from(self.next_raw());
        let hi = u64::from(self.next_raw());
        (hi << 32) | lo
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        for chunk in dest.chunks_mut(4) {
            let bytes = self.next_raw().to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

/// Serializable generator state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrawRngState {
    /// Current mulberry32 state word
    pub state: u32,
    /// Values drawn so far
    pub draws: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_golden_values() {
        assert_eq!(hash_signature("abc"), 1_792_905_582);
        assert_eq!(hash_signature(""), 167_010_153);
        assert_eq!(hash_signature("alpha::single"), 1_697_927_443);
    }

    #[test]
    fn test_mulberry32_reference_stream() {
        // Reference outputs of mulberry32 seeded with 0.
        let mut rng = DrawRng::from_raw(0);
        assert_eq!(rng.next_raw(), 1_144_304_738);
        assert_eq!(rng.next_raw(), 1_416_247);
        assert_eq!(rng.next_raw(), 958_946_056);
    }

    #[test]
    fn test_signature_stream_golden_values() {
        let mut rng = DrawRng::from_signature("abc");
        let raw: Vec<u32> = (0..4).map(|_| rng.next_raw()).collect();
        assert_eq!(raw, vec![3_807_890_421, 2_150_340_831, 579_508_299, 2_184_239_532]);

        let mut rng = DrawRng::from_signature("abc");
        assert_eq!(rng.next_f64(), 0.886_593_577_684_834_6);
        assert_eq!(rng.next_f64(), 0.500_665_239_756_926_9);
        assert_eq!(rng.next_f64(), 0.134_927_290_258_929_13);
    }

    #[test]
    fn test_determinism() {
        let mut rng1 = DrawRng::from_signature("seed::cross");
        let mut rng2 = DrawRng::from_signature("seed::cross");

        for _ in 0..100 {
            assert_eq!(rng1.next_f64(), rng2.next_f64());
        }
    }

    #[test]
    fn test_fresh_generator_repeats_first_value() {
        let first = DrawRng::from_signature("abc").next_f64();
        for _ in 0..5 {
            assert_eq!(DrawRng::from_signature("abc").next_f64(), first);
        }
    }

    #[test]
    fn test_close_signatures_diverge() {
        let mut rng1 = DrawRng::from_signature("abc");
        let mut rng2 = DrawRng::from_signature("abd");

        let seq1: Vec<_> = (0..5).map(|_| rng1.next_f64()).collect();
        let seq2: Vec<_> = (0..5).map(|_| rng2.next_f64()).collect();

        assert_ne!(seq1, seq2);
    }

    #[test]
    fn test_values_in_unit_interval() {
        let mut rng = DrawRng::from_signature("range");
        for _ in 0..10_000 {
            let v = rng.next_f64();
            assert!((0.0..1.0).contains(&v));
        }
    }

    #[test]
    fn test_non_ascii_hashes_by_utf16_units() {
        // 'é' is one UTF-16 unit but two UTF-8 bytes.
        assert_ne!(hash_signature("é"), hash_signature("e"));
        assert_eq!(hash_signature("épée"), hash_signature("épée"));
    }

    #[test]
    fn test_draw_counter() {
        let mut rng = DrawRng::from_signature("count");
        assert_eq!(rng.draws(), 0);
        for _ in 0..7 {
            rng.next_f64();
        }
        assert_eq!(rng.draws(), 7);
    }

    #[test]
    fn test_state_restore() {
        let mut rng = DrawRng::from_signature("checkpoint");
        for _ in 0..50 {
            rng.next_raw();
        }

        let state = rng.state();
        let expected: Vec<_> = (0..10).map(|_| rng.next_raw()).collect();

        let mut restored = DrawRng::from_state(&state);
        let actual: Vec<_> = (0..10).map(|_| restored.next_raw()).collect();

        assert_eq!(expected, actual);
        assert_eq!(restored.draws(), 60);
    }

    #[test]
    fn test_state_serde() {
        let state = DrawRngState { state: 42, draws: 77 };

        let json = serde_json::to_string(&state).unwrap();
        let deserialized: DrawRngState = serde_json::from_str(&json).unwrap();

        assert_eq!(state, deserialized);
    }

    #[test]
    fn test_rng_core_uses_same_stream() {
        let mut direct = DrawRng::from_signature("core");
        let mut via_trait = DrawRng::from_signature("core");

        assert_eq!(direct.next_raw(), RngCore::next_u32(&mut via_trait));

        let mut bytes = [0u8; 6];
        via_trait.fill_bytes(&mut bytes);
        let a = direct.next_raw().to_le_bytes();
        let b = direct.next_raw().to_le_bytes();
        assert_eq!(&bytes[..4], &a);
        assert_eq!(&bytes[4..], &b[..2]);
    }
}
