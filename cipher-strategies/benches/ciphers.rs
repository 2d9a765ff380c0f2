use std::hint::black_box;

use cipher_strategies::{CipherStrategy, CodePointCipher, ShiftCipher};
use criterion::{criterion_group, criterion_main, Criterion};

fn bench_ciphers(c: &mut Criterion) {
    let text = "The quick brown fox jumps over the lazy dog. ".repeat(64);

    c.bench_function("shift_encrypt", |b| {
        b.iter(|| ShiftCipher.encrypt(black_box(&text), black_box(7)))
    });

    c.bench_function("code_point_encrypt", |b| {
        b.iter(|| CodePointCipher.encrypt(black_box(&text), black_box(7)))
    });
}

criterion_group!(benches, bench_ciphers);
criterion_main!(benches);
