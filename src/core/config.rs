//! Engine configuration.
//!
//! Only the non-deterministic path is configurable. Nothing here can change
//! the outcome of a draw for a given seed.

use serde::{Deserialize, Serialize};

use crate::error::{Result, TarotError};

/// Lowercase letters and digits, the default generated-seed alphabet.
pub const DEFAULT_SEED_ALPHABET: &str = "abcdefghijklmnopqrstuvwxyz0123456789";

/// Settings for generated seeds.
///
/// Fields are private so every instance has passed [`SeedConfig::validate`]:
/// a non-zero length and a non-empty alphabet without whitespace. That keeps
/// generated seeds already normalized. Deserialization is validated too.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "SeedConfigFields")]
pub struct SeedConfig {
    length: usize,
    alphabet: String,
}

/// Unvalidated wire form of [`SeedConfig`].
#[derive(Deserialize)]
struct SeedConfigFields {
    length: usize,
    alphabet: String,
}

impl TryFrom<SeedConfigFields> for SeedConfig {
    type Error = TarotError;

    fn try_from(fields: SeedConfigFields) -> Result<Self> {
        Self::validate(fields.length, &fields.alphabet)?;
        Ok(Self {
            length: fields.length,
            alphabet: fields.alphabet,
        })
    }
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            length: 12,
            alphabet: DEFAULT_SEED_ALPHABET.to_string(),
        }
    }
}

impl SeedConfig {
    /// Build a config, checking both settings.
    pub fn new(length: usize, alphabet: impl Into<String>) -> Result<Self> {
        let alphabet = alphabet.into();
        Self::validate(length, &alphabet)?;
        Ok(Self { length, alphabet })
    }

    /// Check a length and alphabet pair.
    pub fn validate(length: usize, alphabet: &str) -> Result<()> {
        if length == 0 {
            return Err(TarotError::InvalidSeedConfig("length must be at least 1"));
        }
        if alphabet.is_empty() {
            return Err(TarotError::InvalidSeedConfig("alphabet must not be empty"));
        }
        if alphabet.chars().any(char::is_whitespace) {
            return Err(TarotError::InvalidSeedConfig(
                "alphabet must not contain whitespace",
            ));
        }
        Ok(())
    }

    /// Number of characters in a generated seed.
    #[must_use]
    pub fn length(&self) -> usize {
        self.length
    }

    /// Characters a generated seed is drawn from.
    #[must_use]
    pub fn alphabet(&self) -> &str {
        &self.alphabet
    }

    /// Set the generated seed length.
    ///
    /// # Panics
    ///
    /// Panics on zero: an empty seed is never valid.
    #[must_use]
    pub fn with_length(mut self, length: usize) -> Self {
        if let Err(err) = Self::validate(length, &self.alphabet) {
            panic!("{err}");
        }
        self.length = length;
        self
    }

    /// Set the alphabet generated seeds are drawn from.
    ///
    /// # Panics
    ///
    /// Panics if the alphabet is empty or contains whitespace.
    #[must_use]
    pub fn with_alphabet(mut self, alphabet: impl Into<String>) -> Self {
        let alphabet = alphabet.into();
        if let Err(err) = Self::validate(self.length, &alphabet) {
            panic!("{err}");
        }
        self.alphabet = alphabet;
        self
    }
}

/// Top-level engine configuration.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Generated seed settings.
    pub seed: SeedConfig,

    /// Fixed entropy for seed generation (tests, demos).
    /// `None` seeds from the operating system.
    pub entropy: Option<u64>,
}

impl EngineConfig {
    /// Set the generated seed settings.
    #[must_use]
    pub fn with_seed_config(mut self, seed: SeedConfig) -> Self {
        self.seed = seed;
        self
    }

    /// Pin seed generation to a fixed entropy value.
    #[must_use]
    pub fn with_entropy(mut self, entropy: u64) -> Self {
        self.entropy = Some(entropy);
        self
    }
}
