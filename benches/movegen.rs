use criterion::{black_box, criterion_group, criterion_main, Criterion};

use nine_square::rules::moves_by_piece;
use nine_square::{jump_moves, legal_moves, simple_moves, Board, GameEngine, Player, Position};

fn bench_movegen(c: &mut Criterion) {
    let board = Board::initial();
    let piece = Position::new(1, 1);

    c.bench_function("simple_moves", |b| {
        b.iter(|| simple_moves(black_box(&board), black_box(piece)))
    });
    c.bench_function("jump_moves", |b| {
        b.iter(|| jump_moves(black_box(&board), black_box(piece)))
    });
    c.bench_function("legal_moves", |b| {
        b.iter(|| legal_moves(black_box(&board), black_box(Player::One)))
    });
    c.bench_function("moves_by_piece", |b| {
        b.iter(|| moves_by_piece(black_box(&board), black_box(Player::Two)))
    });
}

fn bench_engine(c: &mut Criterion) {
    c.bench_function("opening_sequence", |b| {
        b.iter(|| {
            let mut game = GameEngine::new();
            for (from, to) in [((2, 2), (3, 2)), ((5, 5), (4, 5)), ((1, 1), (1, 3))] {
                let from = Position::new(from.0, from.1);
                let to = Position::new(to.0, to.1);
                game.attempt_move(from, to);
            }
            black_box(game)
        })
    });
}

criterion_group!(benches, bench_movegen, bench_engine);
criterion_main!(benches);
