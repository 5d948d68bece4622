//! Property tests for document-wide retokenization.

use margin_oxide::{retokenize, Block, LineNumberFilter, PositionedToken};
use proptest::prelude::*;

fn arb_token() -> impl Strategy<Value = PositionedToken> {
    ("[a-z0-9 ]{0,4}", -5.0f32..200.0, -5.0f32..200.0, 1.0f32..20.0)
        .prop_map(|(text, x, y, width)| PositionedToken::new(text, x, y, width, 10.0))
}

fn arb_block() -> impl Strategy<Value = Block> {
    prop::option::of(prop::collection::vec(arb_token(), 0..12)).prop_map(|tokens| match tokens {
        Some(tokens) => Block::from_tokens(tokens),
        None => Block::new(),
    })
}

proptest! {
    #[test]
    fn prop_block_slices_match_tokens(mut blocks in prop::collection::vec(arb_block(), 0..8)) {
        let flat = retokenize(&mut blocks);

        let expected: usize = blocks.iter().map(|b| b.tokens().len()).sum();
        prop_assert_eq!(flat.len(), expected);
        for block in blocks.iter().filter(|b| b.has_tokens()) {
            prop_assert!(block.start_token <= block.end_token);
            prop_assert_eq!(&flat[block.start_token..block.end_token], block.tokens());
        }
    }

    #[test]
    fn prop_retokenize_is_idempotent(mut blocks in prop::collection::vec(arb_block(), 0..8)) {
        let first = retokenize(&mut blocks);
        let snapshot = blocks.clone();
        let second = retokenize(&mut blocks);
        prop_assert_eq!(first, second);
        prop_assert_eq!(blocks, snapshot);
    }

    #[test]
    fn prop_detection_is_all_or_nothing(blocks in prop::collection::vec(arb_block(), 0..8)) {
        let filter = LineNumberFilter::new();
        let detected = filter.detect_line_numbers(&blocks);

        prop_assert!(detected.is_empty() || detected.len() >= filter.config().min_line_numbers);
        for line_number in &detected {
            prop_assert!(line_number.token.text.bytes().all(|b| b.is_ascii_digit()));
            prop_assert!(line_number.token.has_position());
            let owner = &blocks[line_number.slot.block];
            prop_assert_eq!(&owner.tokens()[line_number.slot.token], line_number.token);
        }
    }
}
