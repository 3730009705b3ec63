//! Opening book
//!
//! A small embedded table of early placements, keyed by turn number and
//! stored as absolute cell lists (`book.json`, parsed once per process).
//! Lookup resolves an entry against the position's actual legal-move set,
//! so an entry that no longer applies - the opponent played into its cells,
//! or the data is stale - simply misses and the caller falls through to the
//! search stages.
//!
//! The shipped table covers the first two plies with W-pentomino staircases
//! from each seed toward the center.

use std::sync::OnceLock;

use serde::Deserialize;

use duo_core::{Board, MoveBuffer};
use duo_types::{Coord, Move};

#[derive(Debug, Deserialize)]
struct BookEntry {
    turn: u32,
    cells: Vec<(i8, i8)>,
}

fn entries() -> &'static [BookEntry] {
    static BOOK: OnceLock<Vec<BookEntry>> = OnceLock::new();
    BOOK.get_or_init(|| {
        // Embedded data; a parse failure is a build defect, not a runtime
        // condition, so an empty book is the sane fallback.
        serde_json::from_str(include_str!("book.json")).unwrap_or_default()
    })
}

/// Look up a book move for the current position.
///
/// Returns `None` when no entry matches the turn or when the entry's cell
/// set is not realizable as a legal move here.
pub fn lookup(board: &Board) -> Option<Move> {
    let turn = board.turn_count();
    let entry = entries().iter().find(|e| e.turn == turn)?;

    let mut wanted: Vec<Coord> = entry
        .cells
        .iter()
        .map(|&(x, y)| Coord::new(x, y))
        .collect();
    wanted.sort();
    wanted.dedup();

    let mut buf = MoveBuffer::new();
    board.enumerate_legal_moves(&mut buf, true);
    let found = buf.iter().find(|&mv| {
        let mut cells: Vec<Coord> = board.move_cells(mv).into_iter().collect();
        if cells.len() != wanted.len() {
            return false;
        }
        cells.sort();
        cells == wanted
    });
    found
}

#[cfg(test)]
mod tests {
    use super::*;
    use duo_types::FIRST_SEED;

    #[test]
    fn fresh_board_has_a_book_move() {
        let board = Board::new();
        let mv = lookup(&board).expect("opening entry must apply");
        assert!(board.is_legal(mv));
        let cells = board.move_cells(mv);
        assert!(cells.contains(&Coord::new(FIRST_SEED.0, FIRST_SEED.1)));
        assert_eq!(cells.len(), 5);
    }

    #[test]
    fn reply_entry_applies_after_the_book_opening() {
        let mut board = Board::new();
        let first = lookup(&board).unwrap();
        board.apply_move(first);
        let reply = lookup(&board).expect("reply entry must apply");
        assert!(board.is_legal(reply));
        board.apply_move(reply);
        // Past the shipped table: the book goes quiet.
        assert_eq!(lookup(&board), None);
    }

    #[test]
    fn blocked_entry_misses_instead_of_returning_illegal() {
        let mut board = Board::new();
        // First ignores the book and takes the monomino on its seed; the
        // turn-1 entry area is untouched, so the reply still applies.
        board.apply_move(Move::place(0, FIRST_SEED.0, FIRST_SEED.1, 0));
        let reply = lookup(&board);
        if let Some(mv) = reply {
            assert!(board.is_legal(mv));
        }
    }
}
