//! Response formatting - board diagrams and score strings

use duo_core::Board;
use duo_types::{Color, Coord, BOARD_SIZE, FIRST_SEED, SECOND_SEED};

/// Render the position as a text diagram.
///
/// Rows are printed top first with their bottom-up labels, so the top row
/// is labelled 14. `X` marks the first player, `O` the second, `+` an
/// uncovered seed cell. The leading newline keeps the diagram aligned
/// under the response marker.
pub fn showboard(board: &Board) -> String {
    let mut out = String::new();
    out.push('\n');
    for y in 0..BOARD_SIZE {
        out.push_str(&format!("{:2} ", BOARD_SIZE - y));
        for x in 0..BOARD_SIZE {
            let marker = match board.cell(Coord::new(x, y)) {
                Some(Color::First) => 'X',
                Some(Color::Second) => 'O',
                None if (x, y) == FIRST_SEED || (x, y) == SECOND_SEED => '+',
                None => '.',
            };
            out.push(marker);
            out.push(' ');
        }
        out.push('\n');
    }
    out.push_str("   ");
    for x in 0..BOARD_SIZE {
        out.push((b'A' + x as u8) as char);
        out.push(' ');
    }
    out
}

/// Format the final score: winner letter and margin, or `0` for a draw.
pub fn final_score(board: &Board) -> String {
    let first = board.score(Color::First) as i32;
    let second = board.score(Color::Second) as i32;
    if first > second {
        format!("{}+{}", Color::First.letter(), first - second)
    } else if second > first {
        format!("{}+{}", Color::Second.letter(), second - first)
    } else {
        "0".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use duo_types::Move;

    #[test]
    fn fresh_board_shows_both_seeds() {
        let board = Board::new();
        let text = showboard(&board);
        let lines: Vec<&str> = text.lines().collect();
        // Leading blank line, 14 rows, footer.
        assert_eq!(lines.len(), 16);
        assert_eq!(lines[0], "");
        assert!(lines[1].starts_with("14 "));
        assert!(lines[14].starts_with(" 1 "));
        assert!(lines[15].starts_with("   A B C"));
        // Seed (4,4) sits in the row labelled 10, column e.
        let row10 = lines[5];
        assert!(row10.starts_with("10 "));
        assert_eq!(row10.chars().nth(3 + 2 * 4), Some('+'));
        // Seed (9,9) in the row labelled 5, column j.
        let row5 = lines[10];
        assert!(row5.starts_with(" 5 "));
        assert_eq!(row5.chars().nth(3 + 2 * 9), Some('+'));
    }

    #[test]
    fn placements_replace_the_seed_markers() {
        let mut board = Board::new();
        board.apply_move(Move::place(0, FIRST_SEED.0, FIRST_SEED.1, 0));
        board.apply_move(Move::place(0, SECOND_SEED.0, SECOND_SEED.1, 0));
        let text = showboard(&board);
        assert!(text.contains('X'));
        assert!(text.contains('O'));
        assert!(!text.contains('+'));
    }

    #[test]
    fn score_strings() {
        let mut board = Board::new();
        assert_eq!(final_score(&board), "0");

        // First covers one cell, second none.
        board.apply_move(Move::place(0, FIRST_SEED.0, FIRST_SEED.1, 0));
        assert_eq!(final_score(&board), "B+1");

        // Second replies with a domino for a one-cell lead.
        board.apply_move(Move::place(0, SECOND_SEED.0, SECOND_SEED.1, 1));
        assert_eq!(final_score(&board), "W+1");
    }
}
