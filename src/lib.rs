//! # tarot-draw
//!
//! Reproducible Tarot de Marseille spreads from shareable text seeds.
//!
//! ## Design Principles
//!
//! 1. **Replay Forever**: Same seed + same spread produces the same cards,
//!    order and orientation, on every platform and in every version.
//!
//! 2. **Pure Draws**: Every step of a draw is a function of its inputs.
//!    The only randomness from the environment is seed generation.
//!
//! 3. **Catalogs Are Data**: The deck and the spreads are read-only lookup
//!    tables handed to the engine, never mutated by it.
//!
//! ## Pipeline
//!
//! ```text
//! seed text ─▶ normalize ─▶ "{seed}::{spread}" ─▶ DrawRng ─▶ shuffle ─▶ compose
//! ```
//!
//! - The generator is xmur3 (signature hash) + mulberry32 (stream), both in
//!   fixed-width `u32` arithmetic. See [`core::rng`].
//! - The shuffle is a classic Fisher–Yates consuming `deck.len() - 1` values.
//! - Composition takes the first N shuffled cards for an N-position spread and
//!   draws one more value per card for orientation.
//!
//! ## Modules
//!
//! - `core`: Seeds, generator, shuffle, configuration
//! - `cards`: Card templates and the Marseille deck
//! - `spreads`: Spread layouts and the built-in catalog
//! - `draw`: Draw composition and the reveal lifecycle
//! - `error`: Error type

pub mod cards;
pub mod core;
pub mod draw;
pub mod error;
pub mod spreads;

#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used types
pub use crate::core::{
    generate_seed, hash_signature, normalize_seed, shuffle, DrawRng, DrawRngState, EngineConfig,
    Seed, SeedConfig, SeedSource,
};

pub use crate::cards::{Arcana, CardTemplate, Deck, Palette, Suit};

pub use crate::spreads::{Emphasis, SpreadCatalog, SpreadDefinition, SpreadPosition};

pub use crate::draw::{draw, Draw, DrawSignature, DrawnCard, Reading, ReadingSummary};

pub use crate::error::{Result, TarotError};
