//! Computation benchmarks: single scenario, destination comparison, large tables.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use landed_cost::{
    compare_destinations, compute, default_cost_items, Behavior, Category, CostItem,
    DestinationQuote, Scenario, SellPriceTable,
};

fn scenario(destination: &str) -> Scenario {
    Scenario {
        sell_price_per_mt: Some(520.0),
        shrinkage_pct: 0.3,
        storage_months: 1.0,
        dpo_buy_days: 7,
        dso_sell_days: 10,
        annual_finance_rate_pct: 12.0,
        ..Scenario::new(destination, 1_000.0, 380.0)
    }
}

/// A seed table padded with `extra` per-container lines spread over three scopes.
fn padded_table(extra: usize) -> Vec<CostItem> {
    let scopes = ["LUB*", "KIN*", "KOL*"];
    let mut items = default_cost_items();
    items.extend((0..extra).map(|i| CostItem {
        code: format!("EXTRA_{i:05}"),
        name: format!("Extra line {i}"),
        behavior: Behavior::PerContainer,
        unit_amount_usd: 10.0 + i as f64,
        unit: "container".into(),
        qty_source: "Containers".into(),
        dest_scope: scopes[i % scopes.len()].into(),
        category: Category::Logistics,
    }));
    items
}

/// Benchmark: one computation per destination against the seed table.
fn bench_seed_table(c: &mut Criterion) {
    let mut group = c.benchmark_group("compute/seed_table");
    let items = default_cost_items();

    for dest in ["LUB", "KIN", "KOL"] {
        let s = scenario(dest);
        group.bench_with_input(BenchmarkId::from_parameter(dest), &s, |b, s| {
            b.iter(|| black_box(compute(black_box(s), &items)));
        });
    }

    group.finish();
}

/// Benchmark: scaling with cost-table size.
fn bench_table_size(c: &mut Criterion) {
    let mut group = c.benchmark_group("compute/table_size");
    let s = scenario("LUB");

    for extra in [0usize, 100, 1_000, 10_000] {
        let items = padded_table(extra);
        group.bench_with_input(BenchmarkId::from_parameter(items.len()), &items, |b, items| {
            b.iter(|| black_box(compute(&s, items)));
        });
    }

    group.finish();
}

/// Benchmark: three-destination comparison with listed prices.
fn bench_compare(c: &mut Criterion) {
    let items = default_cost_items();
    let prices = SellPriceTable::seeded();
    let quotes = ["LUB", "KIN", "KOL"].map(DestinationQuote::listed);
    let base = scenario("LUB");

    c.bench_function("compare/three_destinations", |b| {
        b.iter(|| black_box(compare_destinations(&base, &quotes, &items, &prices)));
    });
}

/// Benchmark: parallel sweep over volumes
#[cfg(feature = "parallel")]
fn bench_sweep(c: &mut Criterion) {
    use landed_cost::compare::sweep;

    let mut group = c.benchmark_group("compare/sweep");
    let items = default_cost_items();

    for n in [100usize, 1_000] {
        let scenarios: Vec<Scenario> = (0..n)
            .map(|i| Scenario {
                volume_mt: 50.0 + i as f64,
                ..scenario(["LUB", "KIN", "KOL"][i % 3])
            })
            .collect();
        group.bench_with_input(BenchmarkId::from_parameter(n), &scenarios, |b, scenarios| {
            b.iter(|| black_box(sweep(scenarios, &items)));
        });
    }

    group.finish();
}

#[cfg(feature = "parallel")]
criterion_group!(
    benches,
    bench_seed_table,
    bench_table_size,
    bench_compare,
    bench_sweep,
);

#[cfg(not(feature = "parallel"))]
criterion_group!(benches, bench_seed_table, bench_table_size, bench_compare);

criterion_main!(benches);
