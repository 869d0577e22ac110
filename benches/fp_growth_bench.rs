use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::Rng;

use fpgrowth::mine_frequent_itemsets;

/// Generate synthetic transaction data
///
/// Parameters:
/// - num_transactions: Number of transactions
/// - num_items: Total number of possible items
/// - avg_transaction_size: Average items per transaction
fn generate_transactions(
    num_transactions: usize,
    num_items: usize,
    avg_transaction_size: usize,
) -> Vec<Vec<String>> {
    let mut rng = rand::thread_rng();
    let labels: Vec<String> = (0..num_items).map(|i| format!("item{i}")).collect();

    (0..num_transactions)
        .map(|_| {
            let random_factor: f64 = rng.r#gen();
            let size = ((avg_transaction_size as f64 * (0.5 + random_factor)).round() as usize)
                .clamp(1, num_items);

            let mut transaction: Vec<String> = (0..size)
                .map(|_| labels[rng.gen_range(0..num_items)].clone())
                .collect();
            transaction.sort();
            transaction.dedup();
            transaction
        })
        .collect()
}

/// Benchmark FP-Growth with different dataset sizes
fn bench_fp_growth_scaling(c: &mut Criterion) {
    let mut group = c.benchmark_group("fp_growth_scaling");

    let configs = vec![
        ("small_100tx", 100, 20, 5),
        ("medium_500tx", 500, 50, 10),
        ("large_1000tx", 1000, 100, 15),
        ("xlarge_5000tx", 5000, 100, 20),
    ];

    for (name, num_tx, num_items, avg_size) in configs {
        let transactions = generate_transactions(num_tx, num_items, avg_size);
        let threshold = (num_tx / 10).max(1) as u64;

        group.bench_with_input(
            BenchmarkId::from_parameter(name),
            &transactions,
            |b, transactions| {
                b.iter(|| {
                    mine_frequent_itemsets(black_box(transactions), black_box(threshold)).unwrap()
                });
            },
        );
    }

    group.finish();
}

/// Benchmark FP-Growth with different min_support thresholds
fn bench_fp_growth_min_support(c: &mut Criterion) {
    let mut group = c.benchmark_group("fp_growth_min_support");

    let transactions = generate_transactions(1000, 50, 10);
    let thresholds = vec![50u64, 100, 200, 300, 500];

    for &threshold in &thresholds {
        group.bench_with_input(
            BenchmarkId::from_parameter(threshold),
            &threshold,
            |b, &threshold| {
                b.iter(|| {
                    mine_frequent_itemsets(black_box(&transactions), black_box(threshold)).unwrap()
                });
            },
        );
    }

    group.finish();
}

/// Benchmark with different item-universe sizes at fixed volume
fn bench_fp_growth_universe(c: &mut Criterion) {
    let mut group = c.benchmark_group("fp_growth_universe");

    let universes = vec![("narrow_20", 20), ("medium_50", 50), ("wide_200", 200)];

    for (name, num_items) in universes {
        let transactions = generate_transactions(1000, num_items, 10);

        group.bench_with_input(
            BenchmarkId::from_parameter(name),
            &transactions,
            |b, transactions| {
                b.iter(|| {
                    mine_frequent_itemsets(black_box(transactions), black_box(100)).unwrap()
                });
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_fp_growth_scaling,
    bench_fp_growth_min_support,
    bench_fp_growth_universe
);
criterion_main!(benches);
