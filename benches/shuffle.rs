use criterion::{black_box, criterion_group, criterion_main, Criterion};
use parasha_games::core::{hash_seed, seeded_shuffle, Mulberry32};

fn bench_hash(c: &mut Criterion) {
    c.bench_function("hash_seed_label", |b| {
        b.iter(|| hash_seed(black_box("bereshit:memory:12")))
    });
}

fn bench_shuffle_cards(c: &mut Criterion) {
    // 12 pairs, a full memory board.
    let cards: Vec<String> = (0..24).map(|i| format!("card-{i}")).collect();

    c.bench_function("shuffle_24_cards", |b| {
        b.iter(|| seeded_shuffle(black_box(&cards), black_box("bereshit:memory:0")))
    });
}

fn bench_shuffle_tiles(c: &mut Criterion) {
    let tiles: Vec<usize> = (0..36).collect();
    let mut round = 0u32;

    c.bench_function("shuffle_36_tiles_new_seed", |b| {
        b.iter(|| {
            round = round.wrapping_add(1);
            seeded_shuffle(&tiles, &format!("noach:puzzle:{round}"))
        })
    });
}

fn bench_generator(c: &mut Criterion) {
    let mut rng = Mulberry32::new(12345);

    c.bench_function("mulberry32_next_f64", |b| b.iter(|| rng.next_f64()));
}

criterion_group!(
    benches,
    bench_hash,
    bench_shuffle_cards,
    bench_shuffle_tiles,
    bench_generator
);
criterion_main!(benches);
