//! Heuristic search stage - iterative-deepening alpha-beta
//!
//! Deepens one ply at a time until the depth cap or the soft time budget is
//! reached. The hard budget aborts an iteration in flight; the move of the
//! last *completed* iteration is returned, so a timeout can never yield a
//! half-searched move.
//!
//! Move ordering is by piece size, largest first: in this game placing big
//! pieces early is almost always right, and the ordering alone gives
//! alpha-beta most of its cutoffs.
//!
//! Per-ply [`MoveBuffer`]s are kept in a small pool indexed by ply, so the
//! search allocates only when it first reaches a new depth.

use std::time::{Duration, Instant};

use duo_core::{catalog, Board, MoveBuffer};
use duo_types::Move;

use crate::eval::evaluate;
use crate::SearchOutcome;

/// Score bound; above any reachable evaluation
const INF: i32 = 1 << 20;

/// Multiplier lifting decided-game differentials above every heuristic score
const TERMINAL_WEIGHT: i32 = 1 << 10;

/// How many nodes between deadline checks
const TIME_CHECK_INTERVAL: u64 = 1024;

/// Tuning knobs for one [`search`] call
#[derive(Debug, Clone, Copy)]
pub struct SearchOptions {
    pub max_depth: u8,
    /// Stop starting new iterations once this much time has passed
    pub soft_time: Duration,
    /// Abort the iteration in flight once this much time has passed
    pub hard_time: Duration,
    /// Emit per-iteration progress lines on stderr
    pub log: bool,
}

struct Ctx {
    deadline: Instant,
    nodes: u64,
    aborted: bool,
    buffers: Vec<MoveBuffer>,
}

impl Ctx {
    fn out_of_time(&mut self) -> bool {
        if self.aborted {
            return true;
        }
        if self.nodes % TIME_CHECK_INTERVAL == 0 && Instant::now() >= self.deadline {
            self.aborted = true;
        }
        self.aborted
    }

    fn buffer(&mut self, ply: usize) -> &mut MoveBuffer {
        while self.buffers.len() <= ply {
            self.buffers.push(MoveBuffer::new());
        }
        &mut self.buffers[ply]
    }
}

/// Run the heuristic stage on `board` for its current mover.
///
/// Always returns a move: the best placement found, or pass when the mover
/// has no legal placement at all.
pub fn search(board: &Board, opts: SearchOptions) -> SearchOutcome {
    let start = Instant::now();
    let mut ctx = Ctx {
        deadline: start + opts.hard_time,
        nodes: 0,
        aborted: false,
        buffers: Vec::new(),
    };

    let mut root_moves: Vec<Move> = {
        let buf = ctx.buffer(0);
        board.enumerate_legal_moves(buf, true);
        buf.iter().collect()
    };
    if root_moves.is_empty() {
        return SearchOutcome {
            mv: Move::PASS,
            score: evaluate(board),
        };
    }
    order_moves(&mut root_moves);

    let mut best = SearchOutcome {
        mv: root_moves[0],
        score: -INF,
    };

    for depth in 1..=opts.max_depth {
        let mut iter_best = SearchOutcome {
            mv: root_moves[0],
            score: -INF,
        };
        let mut alpha = -INF;

        for &mv in &root_moves {
            let mut child = board.clone();
            child.apply_move(mv);
            let score = -negamax(&child, depth - 1, 1, -INF, -alpha, &mut ctx);
            if ctx.aborted {
                break;
            }
            if score > iter_best.score {
                iter_best = SearchOutcome { mv, score };
            }
            alpha = alpha.max(score);
        }

        if ctx.aborted {
            break;
        }
        best = iter_best;
        if opts.log {
            eprintln!(
                "search: depth {} score {} nodes {} in {:?}",
                depth,
                best.score,
                ctx.nodes,
                start.elapsed()
            );
        }

        // Put the best move first for the next iteration.
        if let Some(pos) = root_moves.iter().position(|&m| m == best.mv) {
            root_moves[..=pos].rotate_right(1);
        }

        if start.elapsed() >= opts.soft_time {
            break;
        }
    }

    best
}

fn negamax(board: &Board, depth: u8, ply: usize, alpha: i32, beta: i32, ctx: &mut Ctx) -> i32 {
    ctx.nodes += 1;
    if ctx.out_of_time() {
        return 0;
    }
    if depth == 0 {
        return evaluate(board);
    }

    let mut moves: Vec<Move> = {
        let buf = ctx.buffer(ply);
        board.enumerate_legal_moves(buf, true);
        buf.iter().collect()
    };

    if moves.is_empty() {
        let mut passed = board.clone();
        passed.apply_pass();
        if !passed.has_legal_move() {
            // Neither side can move: the game is over, score it exactly.
            let me = board.current_mover();
            let diff = board.score(me) as i32 - board.score(me.other()) as i32;
            return diff * TERMINAL_WEIGHT;
        }
        return -negamax(&passed, depth - 1, ply + 1, -beta, -alpha, ctx);
    }

    order_moves(&mut moves);

    let mut alpha = alpha;
    let mut best = -INF;
    for mv in moves {
        let mut child = board.clone();
        child.apply_move(mv);
        let score = -negamax(&child, depth - 1, ply + 1, -beta, -alpha, ctx);
        if ctx.aborted {
            return 0;
        }
        best = best.max(score);
        alpha = alpha.max(score);
        if alpha >= beta {
            break;
        }
    }
    best
}

/// Largest pieces first; stable within a size class (enumeration order)
fn order_moves(moves: &mut [Move]) {
    let cat = catalog();
    moves.sort_by_key(|m| std::cmp::Reverse(cat.piece(m.piece()).size));
}
