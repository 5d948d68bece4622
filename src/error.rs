//! Error types for margin filtering.
//!
//! Almost everything the filters reject is a silent non-match. The variants
//! here cover the few conditions that must stop processing of a document.

/// Result type alias for filter operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while filtering a document.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A token scheduled for removal does not exist in its owning block.
    ///
    /// The candidate was paired with the wrong block or the block changed
    /// between detection and removal. The document must not be shipped.
    #[error("Token not found in block {block} at slot {token}")]
    TokenNotFound {
        /// Index of the block in the document
        block: usize,
        /// Index of the token within the block
        token: usize,
    },

    /// A configuration value is out of range
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON (de)serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
