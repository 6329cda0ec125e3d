use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use rand::{rngs::StdRng, Rng, SeedableRng};
use seq_trie::Trie;

fn random_keys(count: usize) -> Vec<Vec<u8>> {
    let mut rng = StdRng::seed_from_u64(0x7121e);
    (0..count)
        .map(|_| {
            let len = rng.gen_range(1..12);
            (0..len).map(|_| rng.gen_range(b'a'..=b'h')).collect()
        })
        .collect()
}

fn build(keys: &[Vec<u8>]) -> Trie<u8, usize> {
    keys.iter()
        .enumerate()
        .map(|(index, key)| (key.iter().copied(), index))
        .collect()
}

fn insert(c: &mut Criterion) {
    let keys = random_keys(10_000);
    c.bench_function("insert 10k", |b| b.iter(|| build(black_box(&keys))));
}

fn lookup(c: &mut Criterion) {
    let keys = random_keys(10_000);
    let trie = build(&keys);
    c.bench_function("get 10k", |b| {
        b.iter(|| {
            keys.iter()
                .filter(|key| trie.get(black_box(key.iter())).is_some())
                .count()
        })
    });
}

fn erase(c: &mut Criterion) {
    let keys = random_keys(10_000);
    let trie = build(&keys);
    c.bench_function("erase 10k", |b| {
        b.iter_batched(
            || trie.clone(),
            |mut trie| {
                for key in &keys {
                    trie.erase(key);
                }
                trie
            },
            BatchSize::LargeInput,
        )
    });
}

fn iterate(c: &mut Criterion) {
    let trie = build(&random_keys(10_000));
    c.bench_function("iter 10k", |b| b.iter(|| trie.iter().count()));
}

criterion_group!(benches, insert, lookup, erase, iterate);
criterion_main!(benches);
