use criterion::{black_box, criterion_group, criterion_main, Criterion};

use duo_gtp::adapter::codec::{decode, encode};
use duo_gtp::core::{Board, MoveBuffer};
use duo_gtp::types::Move;

fn midgame_board(plies: usize) -> Board {
    let mut board = Board::new();
    let mut buf = MoveBuffer::new();
    for _ in 0..plies {
        board.enumerate_legal_moves(&mut buf, true);
        let mv = buf.iter().next().unwrap_or(Move::PASS);
        board.apply_move(mv);
    }
    board
}

fn bench_enumeration(c: &mut Criterion) {
    let fresh = Board::new();
    let midgame = midgame_board(8);
    let mut buf = MoveBuffer::new();

    c.bench_function("enumerate_strict_opening", |b| {
        b.iter(|| black_box(fresh.enumerate_legal_moves(&mut buf, true)))
    });
    c.bench_function("enumerate_relaxed_opening", |b| {
        b.iter(|| black_box(fresh.enumerate_legal_moves(&mut buf, false)))
    });
    c.bench_function("enumerate_strict_midgame", |b| {
        b.iter(|| black_box(midgame.enumerate_legal_moves(&mut buf, true)))
    });
}

fn bench_apply(c: &mut Criterion) {
    let board = Board::new();
    let mut buf = MoveBuffer::new();
    board.enumerate_legal_moves(&mut buf, true);
    let mv = buf.iter().next().unwrap();

    c.bench_function("apply_move_on_clone", |b| {
        b.iter(|| {
            let mut copy = board.clone();
            copy.apply_move(black_box(mv));
            black_box(copy)
        })
    });
}

fn bench_codec(c: &mut Criterion) {
    let board = Board::new();
    let mut strict = MoveBuffer::new();
    board.enumerate_legal_moves(&mut strict, true);
    let mv = strict.iter().last().unwrap();
    let text = encode(mv);
    let mut scratch = MoveBuffer::new();

    c.bench_function("encode_move", |b| b.iter(|| black_box(encode(black_box(mv)))));
    c.bench_function("decode_move", |b| {
        b.iter(|| black_box(decode(&board, &mut scratch, black_box(&text)).unwrap()))
    });
}

criterion_group!(benches, bench_enumeration, bench_apply, bench_codec);
criterion_main!(benches);
