//! Column clustering: narrow candidates to the dominant margin column.

use crate::filters::line_numbers::LineNumberToken;
use crate::geometry::XBand;
use crate::layout::Block;
use crate::utils::safe_float_cmp;

/// Median of `values`, or `None` when there are none.
///
/// For an even count the elements at sorted indices `n/2` and `n/2 + 1` are
/// averaged. This is one slot above the textbook pair and is kept so that
/// margin bands stay reproducible across versions. When `n/2 + 1` falls off
/// the end (two values) the upper element stands in for it.
pub fn median(values: impl IntoIterator<Item = f32>) -> Option<f32> {
    let mut sorted: Vec<f32> = values.into_iter().collect();
    if sorted.is_empty() {
        return None;
    }
    sorted.sort_by(|a, b| safe_float_cmp(*a, *b));

    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        let upper = sorted.get(mid + 1).copied().unwrap_or(sorted[mid]);
        return Some((sorted[mid] + upper) / 2.0);
    }
    Some(sorted[mid])
}

/// The horizontal band presumed to hold the line numbers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MarginColumn {
    /// Median x of the candidates
    pub median_x: f32,
    /// Median width of the candidates
    pub median_width: f32,
    /// `median_x ± median_width`, inclusive
    pub band: XBand,
}

impl MarginColumn {
    /// Derive the column from candidate positions; `None` without candidates.
    pub fn from_candidates(candidates: &[LineNumberToken<'_>]) -> Option<Self> {
        let median_x = median(candidates.iter().map(|c| c.token.x()))?;
        let median_width = median(candidates.iter().map(|c| c.token.width()))?;
        Some(Self {
            median_x,
            median_width,
            band: XBand::around(median_x, median_width),
        })
    }

    /// Keep the candidates whose x falls inside the band.
    pub fn retain_candidates<'a>(
        &self,
        mut candidates: Vec<LineNumberToken<'a>>,
    ) -> Vec<LineNumberToken<'a>> {
        candidates.retain(|c| self.band.contains(c.token.x()));
        candidates
    }

    /// Count every token of every block whose x falls inside the band.
    ///
    /// This is the population the accepted line numbers are measured against.
    pub fn count_tokens(&self, blocks: &[Block]) -> usize {
        blocks
            .iter()
            .flat_map(|block| block.tokens())
            .filter(|token| self.band.contains(token.x()))
            .count()
    }
}
