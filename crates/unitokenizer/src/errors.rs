//! # Error Types

use crate::types::TokenId;

/// Errors produced by the tokenizer.
#[derive(Debug, thiserror::Error)]
pub enum UTError {
    /// The token is neither a special token marker nor a single Unicode scalar value.
    #[error("invalid token {token:?}: expected a special token marker or a single character")]
    InvalidToken {
        /// The offending token.
        token: String,
    },

    /// The id is out of range, or lands on a surrogate code point.
    #[error("invalid token id {id:#x}: not a Unicode scalar value")]
    InvalidId {
        /// The offending id.
        id: TokenId,
    },

    /// The requested operation is missing configuration, or has malformed configuration.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// Tokenizer options could not be (de)serialized.
    #[error("options serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for tokenizer operations.
pub type UTResult<T> = Result<T, UTError>;
