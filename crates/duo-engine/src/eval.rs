//! Heuristic position evaluation
//!
//! Scores a position from the current mover's perspective. Two terms:
//!
//! - **material**: cells placed by the mover minus cells placed by the
//!   opponent, weighted heaviest - placing big pieces is the whole game
//! - **frontier**: open corner-contact cells for each side; more open
//!   corners means more future placements
//!
//! The evaluation is intentionally cheap: it runs at every leaf of the
//! heuristic search and only has to rank sibling moves, not predict the
//! exact final margin.

use duo_core::Board;

/// Weight of one placed cell
const MATERIAL_WEIGHT: i32 = 8;

/// Weight of one open corner-contact cell
const FRONTIER_WEIGHT: i32 = 1;

/// Evaluate `board` from the current mover's perspective
pub fn evaluate(board: &Board) -> i32 {
    let me = board.current_mover();
    let opp = me.other();
    let material = board.score(me) as i32 - board.score(opp) as i32;
    let frontier = board.frontier(me) as i32 - board.frontier(opp) as i32;
    material * MATERIAL_WEIGHT + frontier * FRONTIER_WEIGHT
}
