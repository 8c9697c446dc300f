use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use ev_dashboard::app::services::aggregator::summarize;
use ev_dashboard::app::services::filter_engine::{FilterCriteria, apply_filters};
use ev_dashboard::app::services::record_parser::RecordParser;
use ev_dashboard::app::services::record_table::{TableState, table_page};
use ev_dashboard::constants::FALLBACK_DATASET_CSV;
use std::hint::black_box;

/// Synthetic dataset: the bundled sample rows repeated `copies` times
fn synthetic_dataset(copies: usize) -> String {
    let mut lines = FALLBACK_DATASET_CSV.lines();
    let header = lines.next().unwrap_or_default();
    let rows: Vec<&str> = lines.filter(|line| !line.trim().is_empty()).collect();

    let mut text = String::with_capacity(FALLBACK_DATASET_CSV.len() * copies);
    text.push_str(header);
    text.push('\n');
    for _ in 0..copies {
        for row in &rows {
            text.push_str(row);
            text.push('\n');
        }
    }
    text
}

fn pipeline(c: &mut Criterion) {
    let text = synthetic_dataset(4_000); // 100k rows
    let parser = RecordParser::new();
    let records = parser.parse_text(&text).records;
    let criteria = FilterCriteria::new().with_year("2022").with_ev_type("BEV");

    let mut group = c.benchmark_group("Pipeline");
    group.sample_size(10);
    group.throughput(Throughput::Elements(records.len() as u64));

    group.bench_function("parse_text", |b| {
        b.iter(|| parser.parse_text(black_box(&text)))
    });

    group.bench_function("summarize", |b| b.iter(|| summarize(black_box(&records))));

    group.bench_function("filter + summarize", |b| {
        b.iter(|| {
            let filtered = apply_filters(black_box(&records), &criteria);
            summarize(&filtered)
        })
    });

    group.bench_function("sort + first page", |b| {
        b.iter(|| table_page(black_box(&records), &TableState::default(), 1, 15))
    });

    group.finish();
}

criterion_group!(benches, pipeline);
criterion_main!(benches);
