//! Listing Extraction Benchmarks
//!
//! Performance benchmarks for record reconstruction, listing comparison,
//! and text-layer reads.
//!
//! Run with: `cargo bench --bench extraction`

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use std::time::Duration;

use estoque_server::compare::diff;
use estoque_server::listing::{
    extract_grouped_records, GroupedRecords, PageText, ProductRecord, TextFragment,
    DEFAULT_ROW_TOLERANCE,
};
use estoque_server::pdf::{read_document_pages, render_transfer_document, TransferItem};

/// Synthetic listing pages. Every product row is split into three fragments
/// with a sub-tolerance vertical jitter, matching how listings come out of
/// the text layer in practice.
fn synthetic_pages(categories: usize, rows_per_category: usize) -> Vec<PageText> {
    const ROWS_PER_PAGE: usize = 45;
    const ROW_PITCH: f32 = 16.0;
    const TOP_Y: f32 = 780.0;

    let mut rows: Vec<Vec<(f32, String)>> = Vec::new();
    let mut code = 100_000u32;
    for c in 0..categories {
        rows.push(vec![(
            40.0,
            format!("GRUPO: {:02} - CATEGORIA {:02}", c + 10, c + 10),
        )]);
        for i in 0..rows_per_category {
            rows.push(vec![
                (40.0, format!("{}", code)),
                (120.0, format!("PRODUTO SINTETICO LINHA {}", i)),
                (430.0, format!("{},50", (i % 40) + 1)),
            ]);
            code += 1;
        }
    }

    rows.chunks(ROWS_PER_PAGE)
        .map(|page_rows| {
            let mut fragments = Vec::new();
            for (r, row) in page_rows.iter().enumerate() {
                let y = TOP_Y - r as f32 * ROW_PITCH;
                for (f, (x, text)) in row.iter().enumerate() {
                    let jitter = if f % 2 == 0 { 0.0 } else { 0.4 };
                    fragments.push(TextFragment::new(*x, y + jitter, text.clone()));
                }
            }
            PageText { fragments }
        })
        .collect()
}

/// Two grouped aggregates with half their codes overlapping, as produced by
/// extraction on both sides of a transfer.
fn diff_fixtures(categories: usize, rows_per_category: usize) -> (GroupedRecords, GroupedRecords) {
    let mut source = GroupedRecords::new();
    let mut dest = GroupedRecords::new();
    for c in 0..categories {
        let category = format!("{:02} - CATEGORIA {:02}", c + 10, c + 10);
        let make = |offset: usize| -> Vec<ProductRecord> {
            (0..rows_per_category)
                .map(|i| ProductRecord {
                    code: format!("{}", 100_000 + c * rows_per_category + i + offset),
                    description: format!("PRODUTO SINTETICO LINHA {}", i),
                    quantity: (i % 40) as i64 + 1,
                    category: category.clone(),
                })
                .collect()
        };
        source.insert(category.clone(), make(0));
        dest.insert(category.clone(), make(rows_per_category / 2));
    }
    (source, dest)
}

/// Benchmark the full fragment-to-records pipeline
fn bench_record_extraction(c: &mut Criterion) {
    let pages = synthetic_pages(8, 60);
    let total_rows: u64 = 8 * 60;

    let mut group = c.benchmark_group("record_extraction");
    group.throughput(Throughput::Elements(total_rows));
    group.measurement_time(Duration::from_secs(10));

    group.bench_with_input(
        BenchmarkId::new("grouped_records", total_rows),
        &pages,
        |b, pages| {
            b.iter(|| {
                let groups = extract_grouped_records(black_box(pages), DEFAULT_ROW_TOLERANCE);
                black_box(groups)
            })
        },
    );

    group.finish();
}

/// Benchmark the per-category comparison
fn bench_comparison(c: &mut Criterion) {
    let (source, dest) = diff_fixtures(8, 60);
    let total_rows: u64 = 2 * 8 * 60;

    let mut group = c.benchmark_group("comparison");
    group.throughput(Throughput::Elements(total_rows));

    group.bench_function("diff_half_overlap", |b| {
        b.iter(|| {
            let result = diff(black_box(source.clone()), black_box(dest.clone()));
            black_box(result)
        })
    });

    group.finish();
}

/// Benchmark text-layer reads over a rendered transfer document
fn bench_pdf_text_extraction(c: &mut Criterion) {
    let items: Vec<TransferItem> = (0..100i64)
        .map(|i| TransferItem {
            code: format!("{}", 100_000 + i),
            description: format!("PRODUTO SINTETICO LINHA {}", i),
            quantity: (i % 40) + 1,
        })
        .collect();
    let data = render_transfer_document("Listagem Sintetica", &items)
        .expect("Failed to render fixture document");
    let size = data.len();

    let mut group = c.benchmark_group("pdf_text");
    group.throughput(Throughput::Bytes(size as u64));
    group.measurement_time(Duration::from_secs(10));

    group.bench_with_input(
        BenchmarkId::new("read_document_pages", size),
        &data,
        |b, data| {
            b.iter(|| {
                let pages = read_document_pages(black_box(data.as_slice()))
                    .expect("Failed to read text layer");
                black_box(pages)
            })
        },
    );

    group.finish();
}

criterion_group!(
    benches,
    bench_record_extraction,
    bench_comparison,
    bench_pdf_text_extraction
);
criterion_main!(benches);
