//! Benchmarks for filtering and chart building
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use launch_dash::charts::{pie_chart, scatter_chart};
use launch_dash::dataset::{LaunchRecord, LaunchTable, PayloadRange, SiteSelector, KNOWN_SITES};
use launch_dash::filter::{filter_by_payload, filter_by_site, FilterCriteria};

fn create_test_table(count: usize) -> LaunchTable {
    let categories = ["v1.0", "v1.1", "FT", "B4", "B5"];
    let records = (0..count)
        .map(|i| {
            LaunchRecord::new(
                KNOWN_SITES[i % KNOWN_SITES.len()],
                (i * 37 % 10_000) as f64,
                (i % 3 != 0) as u8,
                categories[i % categories.len()],
            )
            .flight_number(i as u32 + 1)
        })
        .collect();
    LaunchTable::new(records)
}

fn bench_filters(c: &mut Criterion) {
    let mut group = c.benchmark_group("filter");

    for size in [56, 1000, 10000] {
        let table = create_test_table(size);
        let site = SiteSelector::parse("KSC LC-39A");

        group.throughput(Throughput::Elements(size as u64));

        group.bench_function(format!("payload_{}", size), |b| {
            b.iter(|| filter_by_payload(black_box(&table), 2000.0, 8000.0))
        });

        group.bench_function(format!("site_{}", size), |b| {
            b.iter(|| filter_by_site(black_box(&table), black_box(&site)))
        });
    }

    group.finish();
}

fn bench_charts(c: &mut Criterion) {
    let mut group = c.benchmark_group("charts");

    for size in [56, 10000] {
        let table = create_test_table(size);
        let criteria = FilterCriteria::new(
            SiteSelector::All,
            PayloadRange::new(0.0, 10000.0).unwrap(),
        );

        group.throughput(Throughput::Elements(size as u64));

        group.bench_function(format!("pie_all_{}", size), |b| {
            b.iter(|| pie_chart(black_box(&table), &SiteSelector::All))
        });

        group.bench_function(format!("scatter_plotly_{}", size), |b| {
            b.iter(|| scatter_chart(black_box(&table), &criteria).to_plotly())
        });
    }

    group.finish();
}

criterion_group!(benches, bench_filters, bench_charts);
criterion_main!(benches);
