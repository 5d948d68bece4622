//! Average token length check.
//!
//! Some extractions scatter text into one token per character. Such a
//! document is useless for downstream structure analysis; the filter measures
//! the average length of non-blank tokens and clears every block when it
//! falls below the configured threshold.

use crate::config::TokenLengthConfig;
use crate::error::Result;
use crate::filters::{BlockFilter, FilterOutcome};
use crate::layout::{Block, PositionedToken};

/// Clears documents whose tokens are implausibly short.
#[derive(Debug, Clone, Default)]
pub struct TokenLengthRatioFilter {
    config: TokenLengthConfig,
}

impl TokenLengthRatioFilter {
    /// Create a filter with the default threshold.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a filter with an explicit threshold.
    ///
    /// Fails when the threshold is negative or NaN.
    pub fn with_config(config: TokenLengthConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Every non-blank token of every block, in order.
    pub fn flat_non_blank_tokens<'a>(&self, blocks: &'a [Block]) -> Vec<&'a PositionedToken> {
        blocks
            .iter()
            .flat_map(|block| block.tokens())
            .filter(|token| !token.is_blank())
            .collect()
    }

    /// Total characters divided by token count; NaN for no tokens.
    pub fn token_length_ratio(&self, tokens: &[&PositionedToken]) -> f64 {
        let total_chars: usize = tokens.iter().map(|token| token.text.chars().count()).sum();
        let ratio = total_chars as f64 / tokens.len() as f64;
        log::info!(
            "total token characters: {}, number of tokens: {}, ratio: {}",
            total_chars,
            tokens.len(),
            ratio
        );
        ratio
    }

    /// Average length of the non-blank tokens in `blocks`.
    pub fn non_blank_token_length_ratio(&self, blocks: &[Block]) -> f64 {
        self.token_length_ratio(&self.flat_non_blank_tokens(blocks))
    }

    /// Drop a block's token sequence.
    pub fn clear_block(&self, block: &mut Block) {
        block.reset_tokens();
        block.refresh_text();
    }

    /// Drop every block's token sequence; returns how many blocks had one.
    pub fn clear_blocks(&self, blocks: &mut [Block]) -> usize {
        let mut cleared = 0;
        for block in blocks.iter_mut() {
            if block.has_tokens() {
                cleared += 1;
            }
            self.clear_block(block);
        }
        cleared
    }
}

impl BlockFilter for TokenLengthRatioFilter {
    fn apply(&self, blocks: &mut [Block]) -> Result<FilterOutcome> {
        let ratio = self.non_blank_token_length_ratio(blocks);
        // NaN (no tokens) never compares below the threshold
        if ratio < self.config.min_token_length_ratio {
            let cleared_blocks = self.clear_blocks(blocks);
            log::warn!(
                "average token length {:.2} below {}, cleared {} blocks",
                ratio,
                self.config.min_token_length_ratio,
                cleared_blocks
            );
            return Ok(FilterOutcome {
                removed_tokens: 0,
                cleared_blocks,
            });
        }
        Ok(FilterOutcome::default())
    }

    fn name(&self) -> &'static str {
        "TokenLengthRatioFilter"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn block(texts: &[&str]) -> Block {
        Block::from_tokens(texts.iter().map(|t| PositionedToken::unpositioned(*t)).collect())
    }

    #[test]
    fn test_ratio_for_empty_input_is_nan() {
        let filter = TokenLengthRatioFilter::new();
        let ratio = filter.non_blank_token_length_ratio(&[]);
        assert!(ratio.is_nan());
        assert!(!(ratio < 2.0));
    }

    #[test]
    fn test_ratio_single_block() {
        let filter = TokenLengthRatioFilter::new();
        assert_eq!(filter.non_blank_token_length_ratio(&[block(&["12345678", "1234"])]), 6.0);
        assert_eq!(filter.non_blank_token_length_ratio(&[block(&["1234567", "1234"])]), 5.5);
    }

    #[test]
    fn test_blank_tokens_ignored() {
        let filter = TokenLengthRatioFilter::new();
        let blocks = vec![block(&["abcd", " ", "ab"]), Block::new()];
        assert_eq!(filter.flat_non_blank_tokens(&blocks).len(), 2);
        assert_eq!(filter.non_blank_token_length_ratio(&blocks), 3.0);
    }

    #[test]
    fn test_ratio_counts_characters() {
        let filter = TokenLengthRatioFilter::new();
        assert_eq!(filter.non_blank_token_length_ratio(&[block(&["éé"])]), 2.0);
    }

    #[test]
    fn test_clear_blocks() {
        let filter = TokenLengthRatioFilter::new();
        let mut blocks = vec![block(&["a"]), Block::new(), block(&["b", "c"])];
        assert_eq!(filter.clear_blocks(&mut blocks), 2);
        assert!(blocks.iter().all(|b| !b.has_tokens() && b.text.is_empty()));
        assert_eq!(filter.clear_blocks(&mut []), 0);
    }

    #[test]
    fn test_apply_clears_scattered_document() {
        let filter = TokenLengthRatioFilter::new();
        let mut blocks = vec![block(&["H", "e", "l", "l", "o"])];
        let outcome = filter.apply(&mut blocks).unwrap();
        assert_eq!(outcome.cleared_blocks, 1);
        assert!(!blocks[0].has_tokens());
    }

    #[test]
    fn test_apply_keeps_normal_document() {
        let filter = TokenLengthRatioFilter::new();
        let mut blocks = vec![block(&["Hello", " ", "world"])];
        assert!(filter.apply(&mut blocks).unwrap().is_noop());
        assert_eq!(blocks[0].text, "Hello world");
    }

    #[test]
    fn test_threshold_validated_on_construction() {
        let strict = TokenLengthRatioFilter::with_config(TokenLengthConfig {
            min_token_length_ratio: 6.0,
        })
        .unwrap();
        let mut blocks = vec![block(&["Hello", " ", "world"])];
        assert_eq!(strict.apply(&mut blocks).unwrap().cleared_blocks, 1);

        for ratio in [f64::NAN, -1.0] {
            let config = TokenLengthConfig {
                min_token_length_ratio: ratio,
            };
            assert!(TokenLengthRatioFilter::with_config(config).is_err());
        }
    }

    #[test]
    fn test_apply_on_empty_document_is_noop() {
        let filter = TokenLengthRatioFilter::new();
        assert!(filter.apply(&mut []).unwrap().is_noop());
    }
}
