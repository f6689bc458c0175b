use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tarot_draw::core::{shuffle, DrawRng};
use tarot_draw::{draw, Deck, Seed, SpreadCatalog};

fn bench_draw(c: &mut Criterion) {
    let deck = Deck::marseille();
    let spreads = SpreadCatalog::builtin();
    let seed = Seed::parse("benchmark").unwrap();

    for id in ["single", "mandala"] {
        let spread = spreads.get(id).unwrap();
        c.bench_function(&format!("draw_{id}"), |b| {
            b.iter(|| draw(black_box(spread), black_box(&deck), black_box(&seed)).unwrap())
        });
    }
}

fn bench_shuffle(c: &mut Criterion) {
    let deck = Deck::marseille();
    c.bench_function("shuffle_78", |b| {
        b.iter(|| {
            let mut rng = DrawRng::from_signature(black_box("benchmark::mandala"));
            shuffle(deck.as_slice(), &mut rng)
        })
    });
}

criterion_group!(benches, bench_draw, bench_shuffle);
criterion_main!(benches);
