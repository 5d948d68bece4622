//! Blocks and pages.

use serde::{Deserialize, Serialize};

use crate::layout::PositionedToken;

/// A page of the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page {
    /// Ordinal page number, starting at 1.
    pub number: u32,
}

impl Page {
    /// Create a page with the given ordinal number.
    pub fn new(number: u32) -> Self {
        Self { number }
    }
}

/// An ordered group of tokens belonging to one region of a page.
///
/// `start_token..end_token` is the slice this block occupies in the
/// document-wide token array. It is only trustworthy right after
/// [`retokenize`](crate::layout::retokenize).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Block {
    /// Token sequence; `None` when the block carries no tokens at all.
    pub tokens: Option<Vec<PositionedToken>>,
    /// Page the block was laid out on.
    pub page: Option<Page>,
    /// Offset of the first token in the document-wide token array.
    pub start_token: usize,
    /// Offset one past the last token in the document-wide token array.
    pub end_token: usize,
    /// Cached display text.
    pub text: String,
}

impl Block {
    /// Create an empty block with no token sequence.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a block owning `tokens`, with display text derived from them.
    pub fn from_tokens(tokens: Vec<PositionedToken>) -> Self {
        let mut block = Self {
            tokens: Some(tokens),
            ..Self::default()
        };
        block.refresh_text();
        block
    }

    /// Attach the block to a page.
    pub fn with_page(mut self, page: Page) -> Self {
        self.page = Some(page);
        self
    }

    /// The block's tokens; empty when it has no token sequence.
    pub fn tokens(&self) -> &[PositionedToken] {
        self.tokens.as_deref().unwrap_or(&[])
    }

    /// Whether the block has a token sequence (possibly empty).
    pub fn has_tokens(&self) -> bool {
        self.tokens.is_some()
    }

    /// Append a token, creating the sequence if needed.
    ///
    /// The display text is left untouched.
    pub fn add_token(&mut self, token: PositionedToken) {
        self.tokens.get_or_insert_with(Vec::new).push(token);
    }

    /// Drop the token sequence and return it.
    pub fn reset_tokens(&mut self) -> Option<Vec<PositionedToken>> {
        self.tokens.take()
    }

    /// Page number, or 0 when the block has no page.
    pub fn page_number(&self) -> u32 {
        self.page.map_or(0, |page| page.number)
    }

    /// Regenerate the display text from the current tokens.
    pub fn refresh_text(&mut self) {
        self.text = self.tokens().iter().map(|t| t.text.as_str()).collect();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn token(text: &str, x: f32) -> PositionedToken {
        PositionedToken::new(text, x, 10.0, 10.0, 10.0)
    }

    #[test]
    fn test_from_tokens_builds_text() {
        let block = Block::from_tokens(vec![token("1", 10.0), token(" ", 20.0), token("a", 30.0)]);
        assert_eq!(block.text, "1 a");
        assert_eq!(block.tokens().len(), 3);
    }

    #[test]
    fn test_page_number_defaults_to_zero() {
        let block = Block::new();
        assert_eq!(block.page_number(), 0);
        assert_eq!(block.with_page(Page::new(4)).page_number(), 4);
    }

    #[test]
    fn test_add_and_reset_tokens() {
        let mut block = Block::new();
        assert!(!block.has_tokens());
        assert!(block.tokens().is_empty());

        block.add_token(token("x", 0.0));
        assert!(block.has_tokens());
        assert_eq!(block.tokens().len(), 1);
        assert_eq!(block.text, "");

        let dropped = block.reset_tokens().unwrap();
        assert_eq!(dropped.len(), 1);
        assert!(!block.has_tokens());
    }

    #[test]
    fn test_block_json_defaults() {
        let block: Block = serde_json::from_str(r#"{"tokens": []}"#).unwrap();
        assert!(block.has_tokens());
        assert_eq!(block.page, None);
        assert_eq!(block.start_token, 0);
    }
}
