//! Documents and the document-wide token array.

use serde::{Deserialize, Serialize};

use crate::layout::{Block, PositionedToken};

/// Rebuild the document-wide token array from the blocks' current tokens.
///
/// Blocks are concatenated in order and each block's `start_token` and
/// `end_token` are rewritten to the slice it occupies. Blocks without a token
/// sequence contribute nothing and keep their stale offsets.
///
/// Call once after all block mutation is done: the offsets of later blocks
/// depend on the length consumed by earlier ones.
pub fn retokenize(blocks: &mut [Block]) -> Vec<PositionedToken> {
    let mut tokenization = Vec::new();
    for block in blocks.iter_mut() {
        let Some(tokens) = &block.tokens else {
            continue;
        };
        block.start_token = tokenization.len();
        block.end_token = tokenization.len() + tokens.len();
        tokenization.extend(tokens.iter().cloned());
    }
    log::debug!(
        "retokenized {} blocks into {} tokens",
        blocks.len(),
        tokenization.len()
    );
    tokenization
}

/// A tokenized document: blocks plus the flat token array derived from them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Document {
    /// Blocks in reading order.
    pub blocks: Vec<Block>,
    /// Flat token array; derived, so it is never serialized.
    #[serde(skip)]
    pub tokenization: Vec<PositionedToken>,
}

impl Document {
    /// Create a document from blocks and build its token array.
    pub fn new(blocks: Vec<Block>) -> Self {
        let mut document = Self {
            blocks,
            tokenization: Vec::new(),
        };
        document.retokenize();
        document
    }

    /// Recompute the flat token array and every block's offsets.
    pub fn retokenize(&mut self) -> &[PositionedToken] {
        self.tokenization = retokenize(&mut self.blocks);
        &self.tokenization
    }

    /// Tokens occupying the given block's recorded slice.
    ///
    /// `None` for an unknown block or one without a token sequence: such
    /// blocks occupy no range and their offsets are stale.
    pub fn block_slice(&self, index: usize) -> Option<&[PositionedToken]> {
        let block = self.blocks.get(index).filter(|block| block.has_tokens())?;
        self.tokenization.get(block.start_token..block.end_token)
    }

    /// Parse a document from JSON and build its token array.
    pub fn from_json_str(json: &str) -> crate::Result<Self> {
        let mut document: Self = serde_json::from_str(json)?;
        document.retokenize();
        Ok(document)
    }
}
