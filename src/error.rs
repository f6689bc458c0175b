use thiserror::Error;

#[derive(Error, Debug)]
pub enum TarotError {
    #[error("Spread needs {required} cards but the deck only has {available}")]
    InsufficientDeckSize { required: usize, available: usize },

    #[error("Unknown spread: {0}")]
    UnknownSpread(String),

    #[error("Draw belongs to spread {draw:?}, not {spread:?}")]
    SpreadMismatch { draw: String, spread: String },

    #[error("Invalid seed: {0:?}")]
    InvalidSeed(String),

    #[error("Invalid seed config: {0}")]
    InvalidSeedConfig(&'static str),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, TarotError>;
