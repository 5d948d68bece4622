//! Candidate extraction: digit-only tokens that start a visual line.
//!
//! A token starts a line when it is the first positioned token examined in
//! its block, or when its x does not exceed the previous line-start token's
//! x (the horizontal position wrapped around).

use lazy_static::lazy_static;
use regex::Regex;

use crate::filters::line_numbers::{LineNumberToken, TokenSlot};
use crate::layout::{Block, PositionedToken};

lazy_static! {
    /// Entire token made of ASCII digits.
    static ref LINE_NUMBER_PATTERN: Regex = Regex::new(r"^[0-9]+$").unwrap();
}

/// Scan all blocks in order and collect line number candidates.
///
/// Candidates receive consecutive document positions starting at 1.
pub fn extract_candidates(blocks: &[Block]) -> Vec<LineNumberToken<'_>> {
    let mut candidates = Vec::new();
    let mut next_position = 1;
    for (block_index, block) in blocks.iter().enumerate() {
        next_position =
            extract_block_candidates(block_index, block, next_position, &mut candidates);
    }
    candidates
}

/// Collect the candidates of one block, numbering them from `next_position`.
///
/// Returns the position to hand to the next block.
fn extract_block_candidates<'a>(
    block_index: usize,
    block: &'a Block,
    mut next_position: usize,
    candidates: &mut Vec<LineNumberToken<'a>>,
) -> usize {
    let mut previous: Option<&PositionedToken> = None;
    for (token_index, token) in block.tokens().iter().enumerate() {
        if !token.has_position() {
            continue;
        }
        let new_line = previous.map_or(true, |prev| prev.x() >= token.x());
        if !new_line {
            continue;
        }
        if LINE_NUMBER_PATTERN.is_match(&token.text) {
            // too large for a line number; not a candidate and not a line start
            let Ok(line_number) = token.text.parse::<i32>() else {
                continue;
            };
            let candidate = LineNumberToken {
                slot: TokenSlot {
                    block: block_index,
                    token: token_index,
                },
                block,
                token,
                document_position: next_position,
                line_number,
            };
            next_position += 1;
            log::debug!("adding line number candidate: {}", candidate);
            candidates.push(candidate);
        }
        previous = Some(token);
    }
    next_position
}
