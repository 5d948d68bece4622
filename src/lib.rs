//! # Margin Oxide
//!
//! Detect running line numbers printed in a document margin and strip them
//! from a layout-tokenized document, so numeric noise does not corrupt
//! downstream text structure analysis.
//!
//! ## Input
//!
//! A [`Document`] is an ordered list of [`Block`]s; each block owns
//! [`PositionedToken`]s (text plus bounding box), knows its [`Page`], and
//! records the slice it occupies in the document-wide token array.
//!
//! ## Pipeline
//!
//! ```text
//! blocks
//!     ↓
//! [candidates]  line-start, digit-only tokens
//!     ↓
//! [column]      median x ± median width margin band
//!     ↓
//! [sequence]    monotonic run by (page, value), density check
//!     ↓
//! [removal]     tokens (and trailing blanks) dropped from blocks
//!     ↓
//! [retokenize]  flat token array and block offsets rebuilt
//! ```
//!
//! ## Quick Start
//!
//! ```
//! use margin_oxide::{Block, Document, FilterPipeline, LineNumberFilter, PositionedToken};
//!
//! let tokens = (1..=10)
//!     .map(|n| PositionedToken::new(n.to_string(), 10.0, 12.0 * n as f32, 8.0, 10.0))
//!     .collect();
//! let mut document = Document::new(vec![Block::from_tokens(tokens)]);
//!
//! // read-only judgment
//! assert_eq!(LineNumberFilter::new().detect(&document.blocks).len(), 10);
//!
//! // remove and retokenize
//! FilterPipeline::new().process(&mut document)?;
//! assert!(document.tokenization.is_empty());
//! # Ok::<(), margin_oxide::Error>(())
//! ```

#![warn(missing_docs)]

// Error handling
pub mod error;

// Configuration
pub mod config;

// Layout model
pub mod geometry;
pub mod layout;

// Filters
pub mod filters;

// Re-exports
pub use config::{FilterConfig, LineNumberConfig, TokenLengthConfig};
pub use error::{Error, Result};
pub use filters::{
    BlockFilter, FilterOutcome, FilterPipeline, LineNumberFilter, LineNumberToken,
    TokenLengthRatioFilter, TokenSlot,
};
pub use layout::{retokenize, Block, Document, Page, PositionedToken};

// Internal utilities
pub(crate) mod utils {
    //! Internal utility functions for the library.

    use std::cmp::Ordering;

    /// Compare two floats, treating NaN as equal to itself and greater than
    /// every number, so sorting never panics.
    #[inline]
    pub fn safe_float_cmp(a: f32, b: f32) -> Ordering {
        match (a.is_nan(), b.is_nan()) {
            (true, true) => Ordering::Equal,
            (true, false) => Ordering::Greater,
            (false, true) => Ordering::Less,
            (false, false) => a.partial_cmp(&b).unwrap_or(Ordering::Equal),
        }
    }

}

// Version info
/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
