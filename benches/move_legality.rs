use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tui_pegs::core::{builtin, Board, BoardSnapshot};

fn bench_tick(c: &mut Criterion) {
    // German board: the most pegs of the built-ins.
    let mut board = Board::new(builtin(1).unwrap());

    c.bench_function("board_tick", |b| {
        b.iter(|| {
            board.tick();
        })
    });
}

fn bench_legal_destinations(c: &mut Criterion) {
    let board = Board::new(builtin(1).unwrap());

    c.bench_function("legal_destinations_full_board", |b| {
        b.iter(|| {
            for peg in board.pegs() {
                black_box(board.legal_destinations_from(peg.home_cell()));
            }
        })
    });
}

fn bench_snapshot(c: &mut Criterion) {
    let board = Board::new(builtin(1).unwrap());
    let mut snap = BoardSnapshot::default();

    c.bench_function("snapshot_into", |b| {
        b.iter(|| {
            board.snapshot_into(black_box(true), &mut snap);
        })
    });
}

criterion_group!(benches, bench_tick, bench_legal_destinations, bench_snapshot);
criterion_main!(benches);
