//! Win/loss/draw solver
//!
//! Exact negamax over the three-valued outcome {-1, 0, +1} with alpha-beta
//! on the narrow window. Margin-blind: a one-cell win and a twenty-cell win
//! are the same value, which prunes far more than the exact solver and lets
//! this stage run a couple of turns earlier.
//!
//! The node budget is a safety valve. When it runs out the solver stops
//! expanding, keeps the best fully solved root move found so far and falls
//! back to the first legal move if none was completed. The dispatcher only
//! calls this stage on positions small enough that the budget normally
//! suffices.

use duo_core::{Board, MoveBuffer};
use duo_types::Move;

use crate::Wld;

struct Ctx {
    nodes: u64,
    budget: u64,
    exhausted: bool,
    buffers: Vec<MoveBuffer>,
}

impl Ctx {
    fn tick(&mut self) -> bool {
        self.nodes += 1;
        if self.nodes > self.budget {
            self.exhausted = true;
        }
        self.exhausted
    }

    fn buffer(&mut self, ply: usize) -> &mut MoveBuffer {
        while self.buffers.len() <= ply {
            self.buffers.push(MoveBuffer::new());
        }
        &mut self.buffers[ply]
    }
}

/// Solve `board` for its current mover under win/loss/draw semantics.
///
/// `budget` bounds the number of search nodes visited.
pub fn solve_wld(board: &Board, budget: u64) -> (Move, Wld) {
    let mut ctx = Ctx {
        nodes: 0,
        budget,
        exhausted: false,
        buffers: Vec::new(),
    };

    let moves: Vec<Move> = {
        let buf = ctx.buffer(0);
        board.enumerate_legal_moves(buf, true);
        buf.iter().collect()
    };

    if moves.is_empty() {
        let mut passed = board.clone();
        passed.apply_pass();
        let value = if passed.has_legal_move() {
            -negamax(&passed, 1, -1, 1, &mut ctx)
        } else {
            terminal_value(board)
        };
        return (Move::PASS, Wld::from_sign(value));
    }

    let mut best_mv = moves[0];
    let mut best_value = -2; // below every outcome
    for mv in moves {
        let mut child = board.clone();
        child.apply_move(mv);
        let value = -negamax(&child, 1, -1, -best_value.max(-1), &mut ctx);
        if ctx.exhausted {
            break;
        }
        if value > best_value {
            best_value = value;
            best_mv = mv;
        }
        if best_value >= 1 {
            // A forced win cannot be improved on.
            break;
        }
    }

    (best_mv, Wld::from_sign(best_value.max(-1)))
}

fn terminal_value(board: &Board) -> i32 {
    let me = board.current_mover();
    (board.score(me) as i32 - board.score(me.other()) as i32).signum()
}

fn negamax(board: &Board, ply: usize, alpha: i32, beta: i32, ctx: &mut Ctx) -> i32 {
    if ctx.tick() {
        return 0;
    }

    let moves: Vec<Move> = {
        let buf = ctx.buffer(ply);
        board.enumerate_legal_moves(buf, true);
        buf.iter().collect()
    };

    if moves.is_empty() {
        let mut passed = board.clone();
        passed.apply_pass();
        if !passed.has_legal_move() {
            return terminal_value(board);
        }
        return -negamax(&passed, ply + 1, -beta, -alpha, ctx);
    }

    let mut alpha = alpha;
    let mut best = -1;
    for mv in moves {
        let mut child = board.clone();
        child.apply_move(mv);
        let value = -negamax(&child, ply + 1, -beta, -alpha, ctx);
        if ctx.exhausted {
            break;
        }
        best = best.max(value);
        alpha = alpha.max(value);
        if alpha >= beta {
            break;
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use duo_types::{Color, PIECE_COUNT, WLD_NODE_BUDGET};

    fn restrict(board: &mut Board, keep_first: &[u8], keep_second: &[u8]) {
        for piece in 0..PIECE_COUNT as u8 {
            if !keep_first.contains(&piece) {
                board.mark_used(Color::First, piece);
            }
            if !keep_second.contains(&piece) {
                board.mark_used(Color::Second, piece);
            }
        }
    }

    #[test]
    fn balanced_endgame_is_a_draw() {
        let mut board = Board::new();
        restrict(&mut board, &[0], &[0]);
        let (mv, outcome) = solve_wld(&board, WLD_NODE_BUDGET);
        assert!(mv.is_placement());
        assert_eq!(outcome, Wld::Draw);
    }

    #[test]
    fn material_edge_is_a_win() {
        let mut board = Board::new();
        restrict(&mut board, &[0, 1], &[0]);
        let (mv, outcome) = solve_wld(&board, WLD_NODE_BUDGET);
        assert!(board.is_legal(mv));
        assert_eq!(outcome, Wld::Win);
    }

    #[test]
    fn material_deficit_is_a_loss() {
        let mut board = Board::new();
        restrict(&mut board, &[0], &[0, 1]);
        let (_, outcome) = solve_wld(&board, WLD_NODE_BUDGET);
        assert_eq!(outcome, Wld::Loss);
    }

    #[test]
    fn stuck_mover_reports_pass() {
        let mut board = Board::new();
        restrict(&mut board, &[], &[0]);
        let (mv, outcome) = solve_wld(&board, WLD_NODE_BUDGET);
        assert!(mv.is_pass());
        assert_eq!(outcome, Wld::Loss);
    }

    #[test]
    fn exhausted_budget_still_returns_a_legal_move() {
        let mut board = Board::new();
        restrict(&mut board, &[0, 1, 2, 3], &[0, 1, 2, 3]);
        let (mv, _) = solve_wld(&board, 1);
        assert!(board.is_legal(mv));
    }
}
