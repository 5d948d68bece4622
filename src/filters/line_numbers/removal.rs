//! Removal of accepted line number tokens from their blocks.

use std::collections::{BTreeMap, BTreeSet};

use crate::error::{Error, Result};
use crate::filters::line_numbers::TokenSlot;
use crate::layout::Block;

/// Remove the tokens at `slots` from their blocks.
///
/// Every slot is checked before any block is touched: a slot that does not
/// resolve to a token (unknown block, index past the end, block without
/// tokens, or the same slot listed twice) fails the whole call with
/// [`Error::TokenNotFound`] and leaves the blocks unchanged.
///
/// Returns the number of tokens removed, not counting blank separators
/// dropped along with them.
pub fn remove_line_number_tokens(blocks: &mut [Block], slots: &[TokenSlot]) -> Result<usize> {
    let mut by_block: BTreeMap<usize, BTreeSet<usize>> = BTreeMap::new();
    for slot in slots {
        let token_count = blocks
            .get(slot.block)
            .and_then(|block| block.tokens.as_ref())
            .map(Vec::len);
        let in_range = token_count.is_some_and(|count| slot.token < count);
        let first_seen = by_block.entry(slot.block).or_default().insert(slot.token);
        if !in_range || !first_seen {
            return Err(Error::TokenNotFound {
                block: slot.block,
                token: slot.token,
            });
        }
    }

    let mut removed = 0;
    for (block_index, token_indices) in by_block {
        removed += remove_tokens_from_block(&mut blocks[block_index], &token_indices);
    }
    Ok(removed)
}

/// Rebuild `block` without the tokens at `token_indices`.
///
/// Blank tokens directly following a removed token go with it, so no orphaned
/// separator is left at the start of the line. The start offset moves forward
/// by one per removed token and the display text is regenerated.
fn remove_tokens_from_block(block: &mut Block, token_indices: &BTreeSet<usize>) -> usize {
    let Some(tokens) = block.reset_tokens() else {
        return 0;
    };
    let mut removed = 0;
    let mut skip_blank = false;
    for (index, token) in tokens.into_iter().enumerate() {
        if token_indices.contains(&index) {
            log::debug!("removing line number token {:?} at slot {}", token.text, index);
            removed += 1;
            skip_blank = true;
            block.start_token += 1;
            continue;
        }
        if skip_blank && token.is_blank() {
            continue;
        }
        block.add_token(token);
        skip_blank = false;
    }
    block.refresh_text();
    removed
}
