use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tetris_reserve::core::{Session, SessionSnapshot};
use tetris_reserve::types::Command;

fn full_session() -> Session {
    let mut session = Session::new(12345);
    session.start();
    for _ in 0..3 {
        session.reserve().unwrap();
    }
    session
}

fn bench_play(c: &mut Criterion) {
    let mut session = Session::new(12345);
    session.start();

    c.bench_function("play", |b| {
        b.iter(|| {
            black_box(session.apply(Command::Play)).ok();
        })
    });
}

fn bench_reserve_and_use(c: &mut Criterion) {
    let mut session = Session::new(12345);
    session.start();

    c.bench_function("reserve_then_use", |b| {
        b.iter(|| {
            black_box(session.apply(Command::Reserve)).ok();
            black_box(session.apply(Command::UseReserved)).ok();
        })
    });
}

fn bench_swap_front_top(c: &mut Criterion) {
    let mut session = full_session();

    c.bench_function("swap_front_top", |b| {
        b.iter(|| {
            black_box(session.swap_front_top()).ok();
        })
    });
}

fn bench_block_exchange(c: &mut Criterion) {
    let mut session = full_session();

    c.bench_function("block_exchange", |b| {
        b.iter(|| {
            black_box(session.swap_three()).ok();
        })
    });
}

fn bench_snapshot_into(c: &mut Criterion) {
    let session = full_session();
    let mut snap = SessionSnapshot::default();

    c.bench_function("snapshot_into", |b| {
        b.iter(|| {
            session.snapshot_into(black_box(&mut snap));
        })
    });
}

criterion_group!(
    benches,
    bench_play,
    bench_reserve_and_use,
    bench_swap_front_top,
    bench_block_exchange,
    bench_snapshot_into
);
criterion_main!(benches);
