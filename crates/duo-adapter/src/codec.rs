//! Move codec - protocol text to packed moves and back
//!
//! The wire form of a placement is its covered cells as `<column><row>`
//! pairs joined by commas (`e10,e11,f11,f12,g12`), columns `a`-`n` left to
//! right and rows counted from the bottom, so row 14 is the grid's top. The
//! packed form stores the anchor in grid coordinates with row 0 at the top;
//! the codec owns the `y = 14 - row` flip in both directions.
//!
//! Decoding never constructs a move from the text directly. It parses the
//! cell set, then searches the mover's legal placements for one covering
//! exactly those cells. A cheap size pre-filter skips most candidates
//! before the set comparison. A matched move is still re-checked with
//! [`Board::is_legal`] before it is accepted; since the pool is already
//! strictly legal that path should be unreachable, and it reports
//! [`CommandError::IllegalMove`] if it ever fires. No match at all is
//! [`CommandError::InvalidMove`].

use duo_core::{catalog, Board, MoveBuffer};
use duo_types::{Coord, Move, BOARD_SIZE};

use crate::error::CommandError;

/// Parse a single `<column><row>` cell token into grid coordinates.
fn parse_cell(token: &str) -> Result<Coord, CommandError> {
    let mut chars = token.chars();
    let col = chars
        .next()
        .ok_or_else(|| CommandError::invalid_move("empty cell token"))?
        .to_ascii_lowercase();
    if !col.is_ascii_lowercase() || (col as u8 - b'a') as i8 >= BOARD_SIZE {
        return Err(CommandError::invalid_move(format!(
            "bad column in cell '{}'",
            token
        )));
    }
    let row: i8 = chars.as_str().parse().map_err(|_| {
        CommandError::invalid_move(format!("bad row in cell '{}'", token))
    })?;
    let y = BOARD_SIZE - row;
    if !(0..BOARD_SIZE).contains(&y) {
        return Err(CommandError::invalid_move(format!(
            "row out of range in cell '{}'",
            token
        )));
    }
    Ok(Coord::new((col as u8 - b'a') as i8, y))
}

/// Parse a comma-separated cell list into a sorted, deduplicated set.
pub fn parse_cells(text: &str) -> Result<Vec<Coord>, CommandError> {
    let mut cells = text
        .split(',')
        .map(parse_cell)
        .collect::<Result<Vec<_>, _>>()?;
    cells.sort();
    cells.dedup();
    Ok(cells)
}

/// Decode a move string against the current position.
///
/// The text must spell out the exact cell set of a placement that is legal
/// for the current mover; the first candidate covering that set wins.
pub fn decode(board: &Board, buffer: &mut MoveBuffer, text: &str) -> Result<Move, CommandError> {
    let wanted = parse_cells(text)?;

    board.enumerate_legal_moves(buffer, true);
    for mv in buffer.iter() {
        let cells = board.move_cells(mv);
        if cells.len() != wanted.len() {
            continue;
        }
        if !cells.iter().all(|c| wanted.binary_search(c).is_ok()) {
            continue;
        }
        if !board.is_legal(mv) {
            return Err(CommandError::IllegalMove(format!(
                "'{}' violates the placement rules",
                text
            )));
        }
        return Ok(mv);
    }
    Err(CommandError::invalid_move(format!(
        "no legal placement matches '{}'",
        text
    )))
}

/// Encode a move as protocol text.
pub fn encode(mv: Move) -> String {
    if mv.is_pass() {
        return "pass".to_string();
    }
    let cells = catalog().absolute_cells(mv);
    let mut out = String::new();
    for (i, c) in cells.iter().enumerate() {
        if i > 0 {
            out.push(',');
        }
        out.push((b'a' + c.x as u8) as char);
        out.push_str(&(BOARD_SIZE - c.y).to_string());
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use duo_types::FIRST_SEED;

    fn fresh() -> (Board, MoveBuffer) {
        (Board::new(), MoveBuffer::new())
    }

    #[test]
    fn cell_parsing_flips_the_row_axis() {
        assert_eq!(parse_cell("a14").unwrap(), Coord::new(0, 0));
        assert_eq!(parse_cell("a1").unwrap(), Coord::new(0, 13));
        assert_eq!(parse_cell("n14").unwrap(), Coord::new(13, 0));
        assert_eq!(parse_cell("e10").unwrap(), Coord::new(4, 4));
        // Column letters are case-insensitive.
        assert_eq!(parse_cell("E10").unwrap(), Coord::new(4, 4));
    }

    #[test]
    fn malformed_cells_are_rejected() {
        for bad in ["", "5", "e", "e0", "e15", "o3", "!4", "e1x", "e 4"] {
            assert!(parse_cell(bad).is_err(), "accepted '{}'", bad);
        }
    }

    #[test]
    fn duplicate_cells_collapse() {
        let cells = parse_cells("e10,e10,f10").unwrap();
        assert_eq!(cells, vec![Coord::new(4, 4), Coord::new(5, 4)]);
    }

    #[test]
    fn seed_monomino_round_trips() {
        let (board, mut buf) = fresh();
        let mv = decode(&board, &mut buf, "e10").unwrap();
        assert_eq!(mv.piece(), 0);
        assert_eq!(mv.anchor(), Coord::new(FIRST_SEED.0, FIRST_SEED.1));
        assert_eq!(encode(mv), "e10");
    }

    #[test]
    fn pass_encodes_but_is_no_move_spec() {
        let (board, mut buf) = fresh();
        assert_eq!(encode(Move::PASS), "pass");
        // A play argument is cells only; "pass" has no column p.
        let err = decode(&board, &mut buf, "pass").unwrap_err();
        assert!(matches!(err, CommandError::InvalidMove(_)));
    }

    #[test]
    fn every_legal_opening_round_trips() {
        let (board, mut buf) = fresh();
        let mut strict = MoveBuffer::new();
        board.enumerate_legal_moves(&mut strict, true);
        let all: Vec<Move> = strict.iter().collect();
        assert!(!all.is_empty());
        for mv in all {
            let text = encode(mv);
            let back = decode(&board, &mut buf, &text).unwrap();
            // The decoded move covers the same cells; symmetric pieces may
            // pack a different orientation id for the identical pattern.
            let mut a: Vec<Coord> = board.move_cells(mv).into_iter().collect();
            let mut b: Vec<Coord> = board.move_cells(back).into_iter().collect();
            a.sort();
            b.sort();
            assert_eq!(a, b, "round trip changed '{}'", text);
        }
    }

    #[test]
    fn unmatched_cell_sets_are_invalid() {
        let (board, mut buf) = fresh();
        // No seed contact.
        let err = decode(&board, &mut buf, "a1").unwrap_err();
        assert!(matches!(err, CommandError::InvalidMove(_)));
        // Disconnected cells match no piece shape.
        let err = decode(&board, &mut buf, "e10,g10").unwrap_err();
        assert!(matches!(err, CommandError::InvalidMove(_)));
        // Six cells exceed every piece.
        let err = decode(&board, &mut buf, "e10,e11,e12,e13,e14,f14").unwrap_err();
        assert!(matches!(err, CommandError::InvalidMove(_)));
    }

    #[test]
    fn missing_corner_contact_is_invalid_not_illegal() {
        let (board, mut buf) = fresh();
        // Well-formed piece shapes, but nowhere near the seed: no legal
        // placement covers these cells, so the error is InvalidMove and
        // the defensive IllegalMove path stays unreachable.
        for text in ["a1", "a1,a2,b1,b2", "a14,b14,c14,d14,e14"] {
            let err = decode(&board, &mut buf, text).unwrap_err();
            assert!(
                matches!(err, CommandError::InvalidMove(_)),
                "'{}' gave {:?}",
                text,
                err
            );
        }
    }

    #[test]
    fn used_piece_no_longer_decodes() {
        let (mut board, mut buf) = fresh();
        let opening = decode(&board, &mut buf, "e10").unwrap();
        board.apply_move(opening);
        board.apply_move(decode(&board, &mut buf, "j5").unwrap());
        // The monomino is spent; a diagonal follow-up with it cannot match.
        let err = decode(&board, &mut buf, "f9").unwrap_err();
        assert!(matches!(err, CommandError::InvalidMove(_)));
    }
}
