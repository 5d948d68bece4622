//! Benchmarks for margin line number detection and removal.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use margin_oxide::{Block, Document, FilterPipeline, LineNumberFilter, Page, PositionedToken};

/// A numbered manuscript: every line starts with its number in the margin,
/// followed by a few words of body text.
fn numbered_document(pages: u32, lines_per_page: u32) -> Document {
    let blocks = (1..=pages)
        .map(|page| {
            let mut tokens = Vec::new();
            for line in 1..=lines_per_page {
                let y = 12.0 * line as f32;
                tokens.push(PositionedToken::new(line.to_string(), 20.0, y, 8.0, 10.0));
                tokens.push(PositionedToken::new(" ", 32.0, y, 4.0, 10.0));
                for word in 0..8 {
                    let x = 60.0 + 40.0 * word as f32;
                    tokens.push(PositionedToken::new("lorem", x, y, 30.0, 10.0));
                    tokens.push(PositionedToken::new(" ", x + 30.0, y, 4.0, 10.0));
                }
            }
            Block::from_tokens(tokens).with_page(Page::new(page))
        })
        .collect();
    Document::new(blocks)
}

fn bench_detect(c: &mut Criterion) {
    let mut group = c.benchmark_group("detect");
    for pages in [1u32, 10, 50] {
        let document = numbered_document(pages, 50);
        let filter = LineNumberFilter::new();
        group.bench_with_input(BenchmarkId::from_parameter(pages), &document, |b, doc| {
            b.iter(|| filter.detect(black_box(&doc.blocks)).len())
        });
    }
    group.finish();
}

fn bench_pipeline(c: &mut Criterion) {
    let document = numbered_document(10, 50);
    let pipeline = FilterPipeline::new();
    c.bench_function("pipeline_10_pages", |b| {
        b.iter(|| {
            let mut doc = document.clone();
            pipeline.process(&mut doc).map(|outcomes| outcomes.len())
        })
    });
}

criterion_group!(benches, bench_detect, bench_pipeline);
criterion_main!(benches);
