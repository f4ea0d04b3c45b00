use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use skipset::SkipList;
use std::collections::BTreeSet;

const N: usize = 10_000;
const SEED: u64 = 0x5EED;

// ─── Helper functions to generate key sequences ─────────────────────────────

fn ordered_keys(n: usize) -> Vec<i64> {
    (0..n as i64).collect()
}

fn random_keys(n: usize) -> Vec<i64> {
    // Use a simple LCG for deterministic pseudo-random sequence
    let mut keys = Vec::with_capacity(n);
    let mut x: u64 = 12345;
    for _ in 0..n {
        x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
        keys.push((x >> 33) as i64);
    }
    keys
}

fn skiplist_from(keys: &[i64]) -> SkipList<i64> {
    let mut list = SkipList::with_seed(SEED);
    list.extend(keys);
    list
}

// ─── Insert ─────────────────────────────────────────────────────────────────

fn bench_insert(c: &mut Criterion) {
    for (name, keys) in [("ordered", ordered_keys(N)), ("random", random_keys(N))] {
        let mut group = c.benchmark_group(format!("insert_{name}"));

        group.bench_function(BenchmarkId::new("SkipList", N), |b| {
            b.iter(|| skiplist_from(&keys));
        });

        group.bench_function(BenchmarkId::new("BTreeSet", N), |b| {
            b.iter(|| keys.iter().copied().collect::<BTreeSet<_>>());
        });

        group.finish();
    }
}

// ─── Lookup ─────────────────────────────────────────────────────────────────

fn bench_contains(c: &mut Criterion) {
    let keys = random_keys(N);
    let list = skiplist_from(&keys);
    let set: BTreeSet<_> = keys.iter().copied().collect();
    let mut group = c.benchmark_group("contains_random");

    group.bench_function(BenchmarkId::new("SkipList", N), |b| {
        b.iter(|| keys.iter().filter(|k| list.contains(*k)).count());
    });

    group.bench_function(BenchmarkId::new("BTreeSet", N), |b| {
        b.iter(|| keys.iter().filter(|k| set.contains(*k)).count());
    });

    group.finish();
}

fn bench_floor_ceiling(c: &mut Criterion) {
    // Even keys only, probed with odd keys so every lookup misses.
    let keys: Vec<i64> = (0..N as i64).map(|k| k * 2).collect();
    let list = skiplist_from(&keys);
    let set: BTreeSet<_> = keys.iter().copied().collect();
    let mut group = c.benchmark_group("floor_ceiling");

    group.bench_function(BenchmarkId::new("SkipList", N), |b| {
        b.iter(|| {
            let mut hits = 0;
            for k in 0..N as i64 {
                let probe = k * 2 + 1;
                hits += usize::from(list.floor(&probe).is_some());
                hits += usize::from(list.ceiling(&probe).is_some());
            }
            hits
        });
    });

    group.bench_function(BenchmarkId::new("BTreeSet", N), |b| {
        b.iter(|| {
            let mut hits = 0;
            for k in 0..N as i64 {
                let probe = k * 2 + 1;
                hits += usize::from(set.range(..=probe).next_back().is_some());
                hits += usize::from(set.range(probe..).next().is_some());
            }
            hits
        });
    });

    group.finish();
}

// ─── Remove ─────────────────────────────────────────────────────────────────

fn bench_remove(c: &mut Criterion) {
    let keys = random_keys(N);
    let mut group = c.benchmark_group("remove_random");

    group.bench_function(BenchmarkId::new("SkipList", N), |b| {
        b.iter_batched(
            || skiplist_from(&keys),
            |mut list| {
                for k in &keys {
                    list.remove(k);
                }
                list
            },
            criterion::BatchSize::LargeInput,
        );
    });

    group.bench_function(BenchmarkId::new("BTreeSet", N), |b| {
        b.iter_batched(
            || keys.iter().copied().collect::<BTreeSet<_>>(),
            |mut set| {
                for k in &keys {
                    set.remove(k);
                }
                set
            },
            criterion::BatchSize::LargeInput,
        );
    });

    group.finish();
}

// ─── Iteration and rank ─────────────────────────────────────────────────────

fn bench_iter(c: &mut Criterion) {
    let keys = random_keys(N);
    let list = skiplist_from(&keys);
    let set: BTreeSet<_> = keys.iter().copied().collect();
    let mut group = c.benchmark_group("iter");

    group.bench_function(BenchmarkId::new("SkipList", N), |b| {
        b.iter(|| list.iter().sum::<i64>());
    });

    group.bench_function(BenchmarkId::new("BTreeSet", N), |b| {
        b.iter(|| set.iter().sum::<i64>());
    });

    group.finish();
}

fn bench_get_by_rank(c: &mut Criterion) {
    // Rank access walks the bottom level, so keep the list small.
    const SMALL: usize = 1_000;
    let list = skiplist_from(&ordered_keys(SMALL));
    let mut group = c.benchmark_group("get_by_rank");

    group.bench_function(BenchmarkId::new("SkipList", SMALL), |b| {
        b.iter(|| (0..SMALL).filter_map(|rank| list.get(rank).ok()).sum::<i64>());
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_insert,
    bench_contains,
    bench_floor_ceiling,
    bench_remove,
    bench_iter,
    bench_get_by_rank
);
criterion_main!(benches);
