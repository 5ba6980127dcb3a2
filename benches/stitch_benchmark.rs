//! Benchmarks for pagestitch reconstruction performance.
//!
//! Run with: cargo bench
//!
//! These benchmarks use synthetic page layouts with ruled tables.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use pagestitch::parser::{merge_pages, partition, PORTRAIT_AREA};
use pagestitch::{
    ContentElement, DocumentExtractor, ExtractOptions, LayoutDocument, LayoutPage, Rect,
};

/// Creates a layout with the given number of pages, each holding a
/// paragraph, a ruled table and a closing paragraph.
fn create_test_layout(page_count: usize) -> LayoutDocument {
    let pages = (0..page_count)
        .map(|i| {
            let mut page = LayoutPage::letter();
            page.add_word(format!("Page{}", i), 72.0, 60.0, 120.0, 70.0);
            page.add_word("intro", 124.0, 60.0, 160.0, 70.0);

            let xs = [72.0, 200.0, 330.0, 460.0, 540.0];
            let ys: Vec<f32> = (0..=10).map(|r| 200.0 + r as f32 * 20.0).collect();
            page.add_grid(&xs, &ys);
            for (r, y) in ys.iter().take(10).enumerate() {
                for (c, x) in xs.iter().take(4).enumerate() {
                    page.add_word(format!("r{}c{}", r, c), x + 5.0, y + 5.0, x + 40.0, y + 15.0);
                }
            }

            page.add_word("closing", 72.0, 700.0, 120.0, 710.0);
            page
        })
        .collect();
    LayoutDocument::new(pages)
}

fn bench_extract(c: &mut Criterion) {
    let mut group = c.benchmark_group("extract");

    for &pages in &[1usize, 10, 50] {
        let layout = create_test_layout(pages);

        group.bench_with_input(BenchmarkId::new("parallel", pages), &layout, |b, layout| {
            b.iter(|| {
                DocumentExtractor::new(black_box(layout))
                    .extract_all()
                    .unwrap()
            })
        });

        group.bench_with_input(BenchmarkId::new("sequential", pages), &layout, |b, layout| {
            b.iter(|| {
                let options = ExtractOptions::default().sequential();
                DocumentExtractor::with_options(black_box(layout), options)
                    .extract_all()
                    .unwrap()
            })
        });
    }

    group.finish();
}

fn bench_partition(c: &mut Criterion) {
    let tables: Vec<Rect> = (0..20)
        .map(|i| PORTRAIT_AREA.with_vertical(i as f32 * 38.0, i as f32 * 38.0 + 20.0))
        .collect();

    c.bench_function("partition_20_tables", |b| {
        b.iter(|| partition(black_box(&PORTRAIT_AREA), black_box(&tables)))
    });
}

fn bench_merge(c: &mut Criterion) {
    let pages: Vec<Vec<ContentElement>> = (0..200)
        .map(|i| {
            vec![
                ContentElement::text(format!("page {} text", i)),
                ContentElement::table([["a", "b"], ["c", "d"]]),
                ContentElement::text("trailing"),
            ]
        })
        .collect();

    c.bench_function("merge_200_pages", |b| {
        b.iter(|| merge_pages(black_box(pages.clone())))
    });
}

criterion_group!(benches, bench_extract, bench_partition, bench_merge);
criterion_main!(benches);
