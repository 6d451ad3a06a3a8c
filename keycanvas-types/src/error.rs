use thiserror::Error;

/// Errors produced by the KeyCanvas core crates.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KeyCanvasError {
    #[error("address must not be empty")]
    EmptyAddress,

    #[error("shared address too short: {length} chars, expected at least {minimum}")]
    InvalidSharedAddress { length: usize, minimum: usize },

    #[error("qr encoding failed: {0}")]
    Qr(String),
}

/// Result alias used across the core crates.
pub type Result<T> = std::result::Result<T, KeyCanvasError>;
