use std::time::Duration;

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tetris_sim::core::{fall_interval_secs, Bag, Board, GameSession};
use tetris_sim::types::{Direction, ShapeKind};

fn bench_tick(c: &mut Criterion) {
    let mut session = GameSession::with_seed(12345);
    session.start();

    c.bench_function("session_tick_16ms", |b| {
        b.iter(|| {
            session.tick(black_box(Duration::from_millis(16)));
            if session.is_game_over() {
                session.restart();
            }
        })
    });
}

fn bench_line_clear(c: &mut Criterion) {
    c.bench_function("clear_4_rows", |b| {
        b.iter(|| {
            let mut board = Board::new();
            for row in 16..20 {
                for col in 0..10 {
                    board.set(row, col, Some(ShapeKind::I));
                }
            }
            black_box(board.clear_full_rows());
        })
    });
}

fn bench_bag(c: &mut Criterion) {
    let mut bag = Bag::new(12345);

    c.bench_function("bag_next", |b| b.iter(|| black_box(bag.next())));
}

fn bench_spawn(c: &mut Criterion) {
    let mut session = GameSession::with_seed(12345);
    session.start();

    c.bench_function("spawn_next", |b| {
        b.iter(|| {
            black_box(session.spawn_next());
        })
    });
}

fn bench_attempt_move(c: &mut Criterion) {
    let mut session = GameSession::with_seed(12345);
    session.start();

    c.bench_function("attempt_move", |b| {
        b.iter(|| {
            session.attempt_move(Direction::Right);
            session.attempt_move(Direction::Left);
        })
    });
}

fn bench_attempt_rotate(c: &mut Criterion) {
    let mut session = GameSession::with_seed(12345);
    session.start();

    c.bench_function("attempt_rotate", |b| {
        b.iter(|| {
            session.attempt_rotate();
        })
    });
}

fn bench_fall_interval(c: &mut Criterion) {
    c.bench_function("fall_interval_secs", |b| {
        b.iter(|| {
            for level in 1..=30 {
                black_box(fall_interval_secs(black_box(level)));
            }
        })
    });
}

criterion_group!(
    benches,
    bench_tick,
    bench_line_clear,
    bench_bag,
    bench_spawn,
    bench_attempt_move,
    bench_attempt_rotate,
    bench_fall_interval
);
criterion_main!(benches);
