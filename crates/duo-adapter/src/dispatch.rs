//! Phase dispatcher - picks the engine stage for a genmove
//!
//! Stage selection is a pure function of the turn number and whether the
//! opening book hit, so it is trivially testable and the thresholds live in
//! one place:
//!
//! - any turn: a book hit wins outright
//! - before turn 25: the time-bounded heuristic search
//! - turns 25 and 26: the budgeted win/loss/draw solver
//! - turn 27 on: the unbounded exact solver
//!
//! The win/loss/draw stage keeps the margin-blind solve affordable a couple
//! of turns before the exact solver can take over; its chosen move is played
//! regardless of the reported outcome class (resigning is the controller's
//! call, not ours).

use duo_core::Board;
use duo_engine::{book, search, solve_exact, solve_wld, SearchOptions};
use duo_types::{Move, EARLY_TURN_LIMIT, MID_TURN_LIMIT, WLD_NODE_BUDGET};

use crate::AdapterConfig;

/// The engine stage a genmove is routed to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Book,
    Heuristic,
    WinLossDraw,
    Exact,
}

/// Select the stage for a position at `turn`, given whether the opening
/// book produced a move.
pub fn select_stage(turn: u32, book_hit: bool) -> Stage {
    if book_hit {
        Stage::Book
    } else if turn < EARLY_TURN_LIMIT {
        Stage::Heuristic
    } else if turn < MID_TURN_LIMIT {
        Stage::WinLossDraw
    } else {
        Stage::Exact
    }
}

/// Generate a move for the current mover, apply it and return it.
///
/// Never fails: a mover with no legal placement passes.
pub fn generate(board: &mut Board, config: &AdapterConfig) -> Move {
    let book_mv = book::lookup(board);
    let mv = match select_stage(board.turn_count(), book_mv.is_some()) {
        Stage::Book => book_mv.unwrap_or(Move::PASS),
        Stage::Heuristic => {
            let opts = SearchOptions {
                max_depth: config.max_depth,
                soft_time: config.time_budget / 2,
                hard_time: config.time_budget,
                log: config.log_search,
            };
            search(board, opts).mv
        }
        Stage::WinLossDraw => solve_wld(board, WLD_NODE_BUDGET).0,
        Stage::Exact => solve_exact(board).mv,
    };
    board.apply_move(mv);
    mv
}
