//! Exact endgame solver
//!
//! Unbounded negamax with alpha-beta over the exact final score
//! differential. The game ends when neither side can place; a stuck side
//! passes and the search continues for the opponent. No evaluation is
//! involved: every leaf is a finished game.
//!
//! Cost scales with the number of placements still possible, which is why
//! the dispatcher only routes positions past the late-game threshold here.

use duo_core::{Board, MoveBuffer};
use duo_types::Move;

use crate::SearchOutcome;

/// Above any reachable differential (the board holds 196 cells)
const INF: i32 = 1 << 9;

struct Ctx {
    buffers: Vec<MoveBuffer>,
}

impl Ctx {
    fn buffer(&mut self, ply: usize) -> &mut MoveBuffer {
        while self.buffers.len() <= ply {
            self.buffers.push(MoveBuffer::new());
        }
        &mut self.buffers[ply]
    }
}

/// Solve `board` exactly for its current mover.
///
/// Returns the game-theoretically optimal move together with the final
/// score differential under best play by both sides. Returns a pass only
/// when the mover has no legal placement.
pub fn solve_exact(board: &Board) -> SearchOutcome {
    let mut ctx = Ctx { buffers: Vec::new() };

    let moves: Vec<Move> = {
        let buf = ctx.buffer(0);
        board.enumerate_legal_moves(buf, true);
        buf.iter().collect()
    };

    if moves.is_empty() {
        let mut passed = board.clone();
        passed.apply_pass();
        let score = if passed.has_legal_move() {
            -negamax(&passed, 1, -INF, INF, &mut ctx)
        } else {
            let me = board.current_mover();
            board.score(me) as i32 - board.score(me.other()) as i32
        };
        return SearchOutcome {
            mv: Move::PASS,
            score,
        };
    }

    let mut best = SearchOutcome {
        mv: moves[0],
        score: -INF,
    };
    let mut alpha = -INF;
    for mv in moves {
        let mut child = board.clone();
        child.apply_move(mv);
        let score = -negamax(&child, 1, -INF, -alpha, &mut ctx);
        if score > best.score {
            best = SearchOutcome { mv, score };
        }
        alpha = alpha.max(score);
    }
    best
}

fn negamax(board: &Board, ply: usize, alpha: i32, beta: i32, ctx: &mut Ctx) -> i32 {
    let moves: Vec<Move> = {
        let buf = ctx.buffer(ply);
        board.enumerate_legal_moves(buf, true);
        buf.iter().collect()
    };

    if moves.is_empty() {
        let mut passed = board.clone();
        passed.apply_pass();
        if !passed.has_legal_move() {
            let me = board.current_mover();
            return board.score(me) as i32 - board.score(me.other()) as i32;
        }
        return -negamax(&passed, ply + 1, -beta, -alpha, ctx);
    }

    let mut alpha = alpha;
    let mut best = -INF;
    for mv in moves {
        let mut child = board.clone();
        child.apply_move(mv);
        let score = -negamax(&child, ply + 1, -beta, -alpha, ctx);
        best = best.max(score);
        alpha = alpha.max(score);
        if alpha >= beta {
            break;
        }
    }
    best
}
