//! Benchmarks for reading-order reconstruction.
//!
//! Run with: cargo bench
//!
//! These benchmarks order synthetic multi-column pages.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use doclint::{
    reading_order, AnalysisConfig, BoxError, MemorySource, PageLayout, ParseOptions,
    PrecedenceGraph, Primitive, Rect,
};

/// Creates a page of `columns` columns with `rows` blocks each, listed
/// column-major from the last column so extraction order is scrambled.
fn create_test_page(number: u32, columns: usize, rows: usize) -> PageLayout {
    let width = 540.0 / columns as f64;
    let mut page = PageLayout::new(number);

    for column in (0..columns).rev() {
        for row in 0..rows {
            let left = 36.0 + column as f64 * width;
            let top = 36.0 + row as f64 * 24.0;
            let bbox = match Rect::new(left, top, left + width - 12.0, top + 18.0) {
                Ok(rect) => rect,
                Err(_) => continue,
            };
            if row % 7 == 3 {
                page.push(Primitive::image(bbox, vec![0; 64], "image/png"));
            } else {
                page.push(Primitive::text(bbox, format!("column {} row {}", column, row)));
            }
        }
    }

    page
}

/// Benchmark precedence graph construction at various sizes.
fn bench_graph_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("graph_build");

    for rows in [5, 20, 50].iter() {
        let page = create_test_page(1, 2, *rows);

        group.bench_function(format!("{}_items", page.len()), |b| {
            b.iter(|| PrecedenceGraph::build(black_box(&page.primitives), 5.0));
        });
    }

    group.finish();
}

/// Benchmark the full ordering of a page.
fn bench_reading_order(c: &mut Criterion) {
    let mut group = c.benchmark_group("reading_order");

    for rows in [5, 20, 50].iter() {
        let page = create_test_page(1, 3, *rows);

        group.bench_function(format!("{}_items", page.len()), |b| {
            b.iter(|| reading_order(black_box(&page.primitives), 5.0).count());
        });
    }

    group.finish();
}

/// Benchmark whole-document extraction, parallel against sequential ordering.
fn bench_document(c: &mut Criterion) {
    let pages: Vec<PageLayout> = (1..=20).map(|n| create_test_page(n, 2, 30)).collect();
    let source = MemorySource::from_pages(pages);
    let describe = |image: &[u8], _: &str, _: &AnalysisConfig| -> Result<String, BoxError> {
        Ok(format!("{} bytes", image.len()))
    };

    c.bench_function("document_parallel", |b| {
        b.iter(|| {
            doclint::extract_with_options(
                black_box(&source),
                &describe,
                AnalysisConfig::default(),
                ParseOptions::new(),
            )
        });
    });

    c.bench_function("document_sequential", |b| {
        b.iter(|| {
            doclint::extract_with_options(
                black_box(&source),
                &describe,
                AnalysisConfig::default(),
                ParseOptions::new().sequential(),
            )
        });
    });
}

criterion_group!(
    benches,
    bench_graph_build,
    bench_reading_order,
    bench_document,
);
criterion_main!(benches);
