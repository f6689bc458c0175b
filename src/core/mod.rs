//! Deterministic core: seeds, generator, shuffle, configuration.
//!
//! Everything here except seed generation is a pure function of its inputs.

pub mod config;
pub mod rng;
pub mod seed;
pub mod shuffle;

pub use config::{EngineConfig, SeedConfig, DEFAULT_SEED_ALPHABET};
pub use rng::{hash_signature, DrawRng, DrawRngState};
pub use seed::{generate_seed, normalize_seed, Seed, SeedSource};
pub use shuffle::{shuffle, shuffle_in_place};
