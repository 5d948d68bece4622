//! Sequence validation: keep the forward-progressing line number run.

use crate::filters::line_numbers::LineNumberToken;

/// Order candidates by (page, value) and keep a monotonic run.
///
/// The first candidate is always kept. Each following candidate is kept when
/// it is on a later page or carries a larger value than the last kept one,
/// and also comes later in scan order. A page change alone licenses the
/// numbering to restart.
pub fn select_monotonic_run(mut candidates: Vec<LineNumberToken<'_>>) -> Vec<LineNumberToken<'_>> {
    candidates.sort_by_key(|c| (c.page_number(), c.line_number));

    let mut kept: Vec<LineNumberToken<'_>> = Vec::with_capacity(candidates.len());
    for current in candidates {
        let keep = match kept.last() {
            None => true,
            Some(previous) => {
                (previous.page_number() < current.page_number()
                    || previous.line_number < current.line_number)
                    && previous.document_position < current.document_position
            },
        };
        if keep {
            log::debug!(
                "adding line number token: {}, previous: {:?}",
                current,
                kept.last().map(|p| p.to_string())
            );
            kept.push(current);
        }
    }
    kept
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filters::line_numbers::candidates::extract_candidates;
    use crate::layout::{Block, Page, PositionedToken};

    fn column_block(texts: &[&str]) -> Block {
        Block::from_tokens(
            texts
                .iter()
                .enumerate()
                .map(|(i, text)| PositionedToken::new(*text, 10.0, 10.0 * i as f32, 10.0, 10.0))
                .collect(),
        )
    }

    fn run_values(blocks: &[Block]) -> Vec<i32> {
        select_monotonic_run(extract_candidates(blocks))
            .iter()
            .map(|c| c.line_number)
            .collect()
    }

    #[test]
    fn test_increasing_run_kept() {
        let blocks = vec![column_block(&["1", "2", "3", "4"])];
        assert_eq!(run_values(&blocks), vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_reverse_order_keeps_only_first() {
        let blocks = vec![column_block(&["4", "3", "2", "1"])];
        // sorted by value: 1 has the highest scan position, nothing follows it
        assert_eq!(run_values(&blocks), vec![1]);
    }

    #[test]
    fn test_duplicate_values_dropped() {
        let blocks = vec![column_block(&["1", "2", "2", "3"])];
        assert_eq!(run_values(&blocks), vec![1, 2, 3]);
    }

    #[test]
    fn test_out_of_place_value_skipped() {
        let blocks = vec![column_block(&["1", "2", "7", "3", "4"])];
        // 7 sorts last but was scanned before 3 and 4
        assert_eq!(run_values(&blocks), vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_page_reset_allowed() {
        let blocks = vec![
            column_block(&["1", "2", "3"]).with_page(Page::new(1)),
            column_block(&["1", "2", "3"]).with_page(Page::new(2)),
        ];
        assert_eq!(run_values(&blocks), vec![1, 2, 3, 1, 2, 3]);
    }

    #[test]
    fn test_page_order_wins_over_scan_order() {
        // page 2 block scanned first: after sorting, page 1 tokens precede it
        // but carry later scan positions, so the page 2 run is rejected
        let blocks = vec![
            column_block(&["1", "2"]).with_page(Page::new(2)),
            column_block(&["3", "4"]).with_page(Page::new(1)),
        ];
        assert_eq!(run_values(&blocks), vec![3, 4]);
    }

    #[test]
    fn test_empty() {
        assert!(select_monotonic_run(Vec::new()).is_empty());
    }
}
