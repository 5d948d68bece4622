//! Document filters that strip layout noise from tokenized blocks.
//!
//! Filters mutate blocks in place and leave block offsets stale. The
//! pipeline runs every configured filter first and rebuilds the
//! document-wide token array once at the end:
//!
//! ```text
//! Document.blocks
//!     ↓
//! [LineNumberFilter]        (margin line numbers removed)
//!     ↓
//! [TokenLengthRatioFilter]  (optional: scattered-character documents cleared)
//!     ↓
//! retokenize                (flat token array + block offsets rebuilt)
//! ```

pub mod line_numbers;
pub mod token_length;

pub use line_numbers::{LineNumberFilter, LineNumberToken, TokenSlot};
pub use token_length::TokenLengthRatioFilter;

use crate::config::FilterConfig;
use crate::error::Result;
use crate::layout::{Block, Document};

/// What a filter did to a block list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FilterOutcome {
    /// Tokens removed individually.
    pub removed_tokens: usize,
    /// Blocks whose whole token sequence was dropped.
    pub cleared_blocks: usize,
}

impl FilterOutcome {
    /// Whether the filter left the blocks untouched.
    pub fn is_noop(&self) -> bool {
        self.removed_tokens == 0 && self.cleared_blocks == 0
    }
}

/// A pass over a document's blocks.
///
/// Implementations may mutate block tokens and display text but must not
/// rely on block offsets being current; the caller retokenizes afterwards.
pub trait BlockFilter: Send + Sync {
    /// Apply the filter to the blocks of one document.
    fn apply(&self, blocks: &mut [Block]) -> Result<FilterOutcome>;

    /// Return the name of this filter for logging.
    fn name(&self) -> &'static str;
}

/// Runs a sequence of filters over a document, then retokenizes once.
pub struct FilterPipeline {
    filters: Vec<Box<dyn BlockFilter>>,
}

impl FilterPipeline {
    /// Create a pipeline with default configuration.
    pub fn new() -> Self {
        Self {
            filters: vec![Box::new(LineNumberFilter::new())],
        }
    }

    /// Create a pipeline from configuration.
    ///
    /// The line number filter always runs first; the token length filter
    /// follows when configured. Every section is validated.
    pub fn with_config(config: FilterConfig) -> Result<Self> {
        let mut filters: Vec<Box<dyn BlockFilter>> =
            vec![Box::new(LineNumberFilter::with_config(config.line_numbers)?)];
        if let Some(token_length) = config.token_length {
            filters.push(Box::new(TokenLengthRatioFilter::with_config(token_length)?));
        }
        Ok(Self { filters })
    }

    /// Create a pipeline from an explicit filter list.
    pub fn from_filters(filters: Vec<Box<dyn BlockFilter>>) -> Self {
        Self { filters }
    }

    /// Names of the filters in run order.
    pub fn filter_names(&self) -> Vec<&'static str> {
        self.filters.iter().map(|f| f.name()).collect()
    }

    /// Run every filter over the document's blocks, then rebuild the token
    /// array and block offsets.
    ///
    /// A filter error aborts processing of the document; the token array is
    /// not rebuilt in that case.
    pub fn process(&self, document: &mut Document) -> Result<Vec<(&'static str, FilterOutcome)>> {
        let mut outcomes = Vec::with_capacity(self.filters.len());
        for filter in &self.filters {
            let outcome = filter.apply(&mut document.blocks)?;
            log::debug!("{}: {:?}", filter.name(), outcome);
            outcomes.push((filter.name(), outcome));
        }
        document.retokenize();
        Ok(outcomes)
    }
}

impl Default for FilterPipeline {
    fn default() -> Self {
        Self::new()
    }
}
