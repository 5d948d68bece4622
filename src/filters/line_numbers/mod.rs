//! Detection and removal of running line numbers printed in a page margin.
//!
//! Manuscripts and legal or scientific drafts often number every line in the
//! left margin. Left in the token stream, those numbers corrupt downstream
//! text structure analysis. Detection runs in three stages:
//!
//! 1. [`candidates`]: digit-only tokens that start a visual line.
//! 2. [`column`]: keep the candidates sharing the dominant margin column
//!    (median x ± median width) and count every token in that band.
//! 3. [`sequence`]: keep a monotonic run ordered by (page, value), allowing
//!    numbering to restart on a new page, and accept the run only when it is
//!    long enough and dense enough within the band.
//!
//! Acceptance is all-or-nothing: a document either loses its whole line
//! number column or nothing at all. [`removal`] then deletes the accepted
//! tokens from their blocks.

pub mod candidates;
pub mod column;
pub mod removal;
pub mod sequence;

use crate::config::LineNumberConfig;
use crate::error::Result;
use crate::filters::{BlockFilter, FilterOutcome};
use crate::layout::{Block, PositionedToken};

use column::MarginColumn;

/// Location of a token inside a document: block index and slot within the
/// block's token sequence.
///
/// Tokens are identified by slot, never by text or coordinates, so two
/// identical tokens are never confused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TokenSlot {
    /// Index of the owning block
    pub block: usize,
    /// Index of the token in the block's sequence
    pub token: usize,
}

/// A line-start numeric token considered as a line number.
///
/// Borrowed from the blocks it was found in; candidates live only for the
/// duration of one detection.
#[derive(Debug, Clone, Copy)]
pub struct LineNumberToken<'a> {
    /// Where the token lives
    pub slot: TokenSlot,
    /// The owning block
    pub block: &'a Block,
    /// The token itself
    pub token: &'a PositionedToken,
    /// Scan order among candidates, starting at 1
    pub document_position: usize,
    /// Parsed value of the token text
    pub line_number: i32,
}

impl LineNumberToken<'_> {
    /// Page number of the owning block (0 when it has none).
    pub fn page_number(&self) -> u32 {
        self.block.page_number()
    }
}

impl std::fmt::Display for LineNumberToken<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "LineNumberToken({:?}, document_position={}, x={}, y={})",
            self.token.text,
            self.document_position,
            self.token.x(),
            self.token.y()
        )
    }
}

/// Finds and strips margin line numbers.
#[derive(Debug, Clone, Default)]
pub struct LineNumberFilter {
    config: LineNumberConfig,
}

impl LineNumberFilter {
    /// Create a filter with default thresholds.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a filter with explicit thresholds.
    ///
    /// Fails with [`Error::InvalidConfig`](crate::Error::InvalidConfig) when
    /// the ratio is not a fraction in `[0, 1]`.
    pub fn with_config(config: LineNumberConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Current thresholds.
    pub fn config(&self) -> &LineNumberConfig {
        &self.config
    }

    /// Override the minimum number of line numbers.
    pub fn set_min_line_numbers(&mut self, min_line_numbers: usize) {
        self.config.min_line_numbers = min_line_numbers;
    }

    /// Accepted line number candidates, ordered by page then value.
    ///
    /// Empty when the document shows no convincing line numbering.
    pub fn detect_line_numbers<'a>(&self, blocks: &'a [Block]) -> Vec<LineNumberToken<'a>> {
        let min_line_numbers = self.config.min_line_numbers;
        let candidates = candidates::extract_candidates(blocks);
        log::debug!(
            "line number candidates: {:?}",
            candidates.iter().map(|c| c.line_number).collect::<Vec<_>>()
        );
        if candidates.len() < min_line_numbers {
            return Vec::new();
        }
        let Some(column) = MarginColumn::from_candidates(&candidates) else {
            return Vec::new();
        };
        let candidates = column.retain_candidates(candidates);
        let tokens_in_band = column.count_tokens(blocks);
        log::debug!(
            "median x={}, width={}, remaining tokens={}, total tokens with similar x={}",
            column.median_x,
            column.median_width,
            candidates.len(),
            tokens_in_band
        );

        let line_numbers = sequence::select_monotonic_run(candidates);
        let ratio = line_numbers.len() as f64 / tokens_in_band as f64;
        log::debug!(
            "potential line numbers: {}, line number ratio: {}",
            line_numbers.len(),
            ratio
        );
        if line_numbers.len() < min_line_numbers
            || ratio < self.config.min_line_number_ratio_similar_x
        {
            return Vec::new();
        }
        line_numbers
    }

    /// Accepted line number tokens, without mutating anything.
    pub fn detect<'a>(&self, blocks: &'a [Block]) -> Vec<&'a PositionedToken> {
        self.detect_line_numbers(blocks)
            .into_iter()
            .map(|line_number| line_number.token)
            .collect()
    }

    /// Remove the tokens at `slots` from their blocks.
    ///
    /// See [`removal::remove_line_number_tokens`].
    pub fn remove_line_number_tokens(
        &self,
        blocks: &mut [Block],
        slots: &[TokenSlot],
    ) -> Result<usize> {
        removal::remove_line_number_tokens(blocks, slots)
    }

    /// Detect line numbers and remove them from their blocks.
    ///
    /// Returns the removed line number values. Block offsets are left stale;
    /// retokenize once all filters have run.
    pub fn detect_and_remove(&self, blocks: &mut [Block]) -> Result<Vec<i32>> {
        let (slots, values): (Vec<TokenSlot>, Vec<i32>) = self
            .detect_line_numbers(blocks)
            .into_iter()
            .map(|line_number| (line_number.slot, line_number.line_number))
            .unzip();
        self.remove_line_number_tokens(blocks, &slots)?;
        log::info!("removed line numbers: {:?}", values);
        Ok(values)
    }
}

impl BlockFilter for LineNumberFilter {
    fn apply(&self, blocks: &mut [Block]) -> Result<FilterOutcome> {
        let removed = self.detect_and_remove(blocks)?;
        Ok(FilterOutcome {
            removed_tokens: removed.len(),
            cleared_blocks: 0,
        })
    }

    fn name(&self) -> &'static str {
        "LineNumberFilter"
    }
}
