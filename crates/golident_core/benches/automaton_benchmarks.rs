use criterion::{black_box, criterion_group, criterion_main, Criterion};
use golident_core::automaton::{run, step, step_sequential};
use golident_core::board::init_board;
use golident_core::compress::compress;
use golident_core::seed::derive;
use golident_core::{Identicon, IdenticonConfig};

fn bench_step(c: &mut Criterion) {
    let (_, mut rng) = derive("bench");
    let board = init_board(&mut rng, 128).unwrap();

    c.bench_function("step_128", |b| b.iter(|| black_box(step(&board))));
    c.bench_function("step_128_sequential", |b| {
        b.iter(|| black_box(step_sequential(&board)))
    });
}

fn bench_run_and_compress(c: &mut Criterion) {
    let (_, mut rng) = derive("bench");
    let board = init_board(&mut rng, 64).unwrap();

    c.bench_function("run_64x320", |b| {
        b.iter(|| black_box(run(&board, 320).unwrap()))
    });

    let history = run(&board, 320).unwrap();
    c.bench_function("compress_64x320", |b| {
        b.iter(|| black_box(compress(&history)))
    });
}

fn bench_full_build(c: &mut Criterion) {
    let config = IdenticonConfig::default();

    c.bench_function("identicon_default", |b| {
        b.iter(|| black_box(Identicon::build("bench", &config).unwrap()))
    });
}

criterion_group!(benches, bench_step, bench_run_and_compress, bench_full_build);
criterion_main!(benches);
