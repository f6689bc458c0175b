//! Seeds: normalization of user input and generation of fresh tokens.
//!
//! A [`Seed`] is the only artifact a user needs to keep (together with the
//! spread id) to replay a draw. Normalization trims surrounding whitespace
//! and nothing else; empty or whitespace-only input is treated as absent
//! and replaced by a generated seed.
//!
//! Generation is the one non-deterministic step of the engine. It draws from
//! a [`SeedSource`], never from the draw generator.

use std::cell::RefCell;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::config::{EngineConfig, SeedConfig};
use crate::error::TarotError;

/// Canonical, non-empty seed text.
///
/// Only obtainable through normalization, generation or [`Seed::parse`], so
/// it is never empty and never carries surrounding whitespace. Deserialization
/// goes through [`Seed::parse`] as well.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Seed(String);

impl Seed {
    /// Parse already-canonical text. Returns `None` when normalization
    /// would have to change or replace it.
    #[must_use]
    pub fn parse(text: &str) -> Option<Self> {
        let trimmed = text.trim();
        if trimmed.is_empty() || trimmed.len() != text.len() {
            return None;
        }
        Some(Self(text.to_string()))
    }

    /// Get the seed text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume into the owned text.
    #[must_use]
    pub fn into_string(self) -> String {
        self.0
    }
}

impl std::fmt::Display for Seed {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for Seed {
    type Error = TarotError;

    fn try_from(text: String) -> Result<Self, Self::Error> {
        Self::parse(&text).ok_or(TarotError::InvalidSeed(text))
    }
}

impl From<Seed> for String {
    fn from(seed: Seed) -> Self {
        seed.0
    }
}

impl AsRef<str> for Seed {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Entropy source for generated seeds.
///
/// Wraps ChaCha8 so tests can pin generation with [`SeedSource::from_u64`];
/// production code uses [`SeedSource::from_entropy`].
#[derive(Clone, Debug)]
pub struct SeedSource {
    inner: ChaCha8Rng,
    alphabet: Vec<char>,
    length: usize,
}

impl SeedSource {
    /// Source seeded from the operating system.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::with_rng(ChaCha8Rng::from_entropy(), &SeedConfig::default())
    }

    /// Source with a fixed entropy value.
    #[must_use]
    pub fn from_u64(entropy: u64) -> Self {
        Self::with_rng(ChaCha8Rng::seed_from_u64(entropy), &SeedConfig::default())
    }

    /// Source built from a config, optionally pinned to `entropy`.
    #[must_use]
    pub fn from_config(config: &SeedConfig, entropy: Option<u64>) -> Self {
        let inner = match entropy {
            Some(value) => ChaCha8Rng::seed_from_u64(value),
            None => ChaCha8Rng::from_entropy(),
        };
        Self::with_rng(inner, config)
    }

    /// Source built from the engine configuration.
    #[must_use]
    pub fn from_engine(config: &EngineConfig) -> Self {
        Self::from_config(&config.seed, config.entropy)
    }

    fn with_rng(inner: ChaCha8Rng, config: &SeedConfig) -> Self {
        // SeedConfig guarantees a non-empty, whitespace-free alphabet and a
        // non-zero length, so every generated seed is already normalized.
        Self {
            inner,
            alphabet: config.alphabet().chars().collect(),
            length: config.length(),
        }
    }

    /// Produce a fresh seed.
    pub fn generate(&mut self) -> Seed {
        let text: String = (0..self.length)
            .map(|_| self.alphabet[self.inner.gen_range(0..self.alphabet.len())])
            .collect();
        debug!(seed = %text, "generated seed");
        Seed(text)
    }

    /// Normalize user input, generating a seed when it is absent or blank.
    pub fn normalize(&mut self, input: Option<&str>) -> Seed {
        match input.map(str::trim) {
            Some(trimmed) if !trimmed.is_empty() => Seed(trimmed.to_string()),
            _ => self.generate(),
        }
    }
}

thread_local! {
    static THREAD_SOURCE: RefCell<SeedSource> = RefCell::new(SeedSource::from_entropy());
}

/// Normalize user input using the thread's entropy source for blank input.
#[must_use]
pub fn normalize_seed(input: Option<&str>) -> Seed {
    match input.map(str::trim) {
        Some(trimmed) if !trimmed.is_empty() => Seed(trimmed.to_string()),
        _ => generate_seed(),
    }
}

/// Generate a seed from the thread's entropy source.
#[must_use]
pub fn generate_seed() -> Seed {
    THREAD_SOURCE.with(|source| source.borrow_mut().generate())
}
