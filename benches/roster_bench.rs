//! Roster throughput benchmarks.
//!
//! Measures the wholesale-replace, sort, and remove paths at various fleet
//! sizes.
//!
//! # Groups
//!
//! | Group | What it measures |
//! |-------|-----------------|
//! | `replace` | `replace_all` throughput at 100 / 1k / 10k records |
//! | `sort` | `sort_by` on each column for a 10k-record roster |
//! | `remove` | Removing every record of a 1k roster one id at a time |
//!
//! # Viewing results
//!
//! ```sh
//! cargo bench --bench roster_bench
//! open target/criterion/report/index.html
//! ```

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion, Throughput};
use hangar_core::{roster::NewShip, FieldKey, Roster};
use std::hint::black_box;

/// Synthetic fleet cycling over a few manufacturers, names shuffled enough
/// to keep the sort honest.
fn fleet(n: usize) -> Vec<NewShip> {
    const MAKERS: &[&str] = &[
        "Incom Corporation",
        "Kuat Drive Yards",
        "Sienar Fleet Systems",
        "Corellian Engineering Corporation",
    ];
    (0..n)
        .map(|i| NewShip {
            name: format!("ship-{:04}", (i * 7919) % n.max(1)),
            model: format!("model mk{}", i % 17),
            manufacturer: MAKERS[i % MAKERS.len()].to_string(),
            passengers: ((i * 31) % 900).to_string(),
            max_speed: ((i * 13) % 1200).to_string(),
        })
        .collect()
}

fn filled_roster(n: usize) -> Roster {
    let mut roster = Roster::new();
    roster.replace_all(fleet(n));
    roster
}

// ---------------------------------------------------------------------------
// Replace throughput
// ---------------------------------------------------------------------------

fn replace_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("replace");

    for count in [100usize, 1_000, 10_000] {
        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(BenchmarkId::new("replace_all", count), &count, |b, &n| {
            let items = fleet(n);
            b.iter_batched(
                || items.clone(),
                |items| {
                    let mut roster = Roster::new();
                    roster.replace_all(items);
                    black_box(roster.len())
                },
                BatchSize::SmallInput,
            )
        });
    }

    group.finish();
}

// ---------------------------------------------------------------------------
// Sort throughput
// ---------------------------------------------------------------------------

fn sort_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("sort");

    for key in FieldKey::ALL {
        group.bench_with_input(BenchmarkId::new("by_field_10k", key), &key, |b, &key| {
            b.iter_batched(
                || filled_roster(10_000),
                |mut roster| {
                    roster.sort_by(key);
                    black_box(roster.ships().first().map(|s| s.id))
                },
                BatchSize::SmallInput,
            )
        });
    }

    // Re-sorting an already sorted roster — the idempotent fast path.
    group.bench_function("resort_sorted_10k", |b| {
        b.iter_batched(
            || {
                let mut roster = filled_roster(10_000);
                roster.sort_by(FieldKey::Name);
                roster
            },
            |mut roster| {
                roster.sort_by(FieldKey::Name);
                black_box(roster.len())
            },
            BatchSize::SmallInput,
        )
    });

    group.finish();
}

// ---------------------------------------------------------------------------
// Remove throughput
// ---------------------------------------------------------------------------

fn remove_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("remove");
    group.throughput(Throughput::Elements(1_000));

    group.bench_function("drain_1k_by_id", |b| {
        b.iter_batched(
            || filled_roster(1_000),
            |mut roster| {
                for id in 1..=1_000u64 {
                    roster.remove(id);
                }
                black_box(roster.is_empty())
            },
            BatchSize::SmallInput,
        )
    });

    group.finish();
}

// ---------------------------------------------------------------------------
// Criterion registration
// ---------------------------------------------------------------------------

criterion_group!(roster_benches, replace_bench, sort_bench, remove_bench);
criterion_main!(roster_benches);
