//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making
//! them usable in any context (board engine, search, protocol adapter).
//!
//! # Board Dimensions
//!
//! Blokus Duo is played on a fixed 14x14 grid with 21 pieces per side:
//!
//! - **Width/Height**: 14 columns x 14 rows (indexed 0-13)
//! - **Seed cells**: (4,4) for the first player, (9,9) for the second;
//!   each side's opening placement must cover its seed
//! - **Piece inventory**: 1 monomino, 1 domino, 2 triominoes, 5 tetrominoes
//!   and 12 pentominoes, 89 cells in total per side
//!
//! # Move Encoding
//!
//! A [`Move`] packs a full placement into 16 bits:
//!
//! | Bits  | Field |
//! |-------|-------|
//! | 0-3   | anchor row (y) |
//! | 4-7   | anchor column (x) |
//! | 8-10  | orientation (mirror bit + quarter turns) |
//! | 11-15 | piece id (0-20) |
//!
//! The two reserved values `0xffff` (pass) and `0xfffe` (invalid) sit outside
//! the 14x14 anchor range and can never collide with a real placement.
//!
//! # Phase Thresholds
//!
//! Move generation escalates through fixed, empirically chosen turn-count
//! thresholds (see the adapter's dispatcher):
//!
//! | Constant | Value | Stage |
//! |----------|-------|-------|
//! | `EARLY_TURN_LIMIT` | 25 | heuristic search below this turn |
//! | `MID_TURN_LIMIT` | 27 | win/loss/draw solver below this turn |
//! | — | — | exact solver from `MID_TURN_LIMIT` on |
//!
//! # Examples
//!
//! ```
//! use duo_types::{Color, Move, BOARD_SIZE};
//!
//! let color = Color::from_str("B").unwrap();
//! assert_eq!(color, Color::First);
//! assert_eq!(color.other(), Color::Second);
//!
//! let mv = Move::place(3, 5, 6, 18);
//! assert_eq!(mv.x(), 5);
//! assert_eq!(mv.y(), 6);
//! assert_eq!(mv.orientation(), 3);
//! assert_eq!(mv.piece(), 18);
//! assert!(!mv.is_pass());
//!
//! assert_eq!(BOARD_SIZE, 14);
//! ```

/// Board width and height in cells (the Duo board is square)
pub const BOARD_SIZE: i8 = 14;

/// Number of pieces in each side's inventory
pub const PIECE_COUNT: usize = 21;

/// Orientation slots per piece (4 quarter turns x optional mirror)
pub const ORIENTATIONS: usize = 8;

/// Largest piece size in cells (pentomino)
pub const MAX_PIECE_CELLS: usize = 5;

/// Total cells in one side's full inventory
pub const INVENTORY_CELLS: u32 = 89;

/// Upper bound on simultaneously legal moves.
///
/// 13729 is the total number of distinct piece placements on the Duo board
/// with the fixed 21-piece inventory, and therefore bounds how many moves a
/// single enumeration can ever produce.
pub const MAX_LEGAL_MOVES: usize = 13729;

/// Seed cell the first player's opening placement must cover
pub const FIRST_SEED: (i8, i8) = (4, 4);

/// Seed cell the second player's opening placement must cover
pub const SECOND_SEED: (i8, i8) = (9, 9);

/// Turn count below which genmove uses the heuristic search stage
pub const EARLY_TURN_LIMIT: u32 = 25;

/// Turn count below which genmove uses the win/loss/draw solver;
/// at or beyond it the exact solver runs unbounded
pub const MID_TURN_LIMIT: u32 = 27;

/// Node budget handed to the win/loss/draw solver
pub const WLD_NODE_BUDGET: u64 = 1000;

/// Maximum search depth for the heuristic stage
pub const GENMOVE_MAX_DEPTH: u8 = 10;

/// Hard time budget for the heuristic stage in milliseconds
/// (the soft budget is half of this)
pub const GENMOVE_TIME_MS: u64 = 10_000;

/// The two playing sides.
///
/// The protocol addresses them by single letters (`b` for first, `w` for
/// second, case-insensitive). Which side moves first is tracked by the
/// board's turn counter, not by the color itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    First,
    Second,
}

impl Color {
    /// Parse a color from its protocol letter (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use duo_types::Color;
    ///
    /// assert_eq!(Color::from_str("b"), Some(Color::First));
    /// assert_eq!(Color::from_str("W"), Some(Color::Second));
    /// assert_eq!(Color::from_str("x"), None);
    /// assert_eq!(Color::from_str(""), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "b" | "B" => Some(Color::First),
            "w" | "W" => Some(Color::Second),
            _ => None,
        }
    }

    /// Protocol letter for this color (lowercase)
    pub fn as_str(&self) -> &'static str {
        match self {
            Color::First => "b",
            Color::Second => "w",
        }
    }

    /// Uppercase letter used in the score string
    pub fn letter(&self) -> char {
        match self {
            Color::First => 'B',
            Color::Second => 'W',
        }
    }

    /// The opposing color
    pub fn other(&self) -> Self {
        match self {
            Color::First => Color::Second,
            Color::Second => Color::First,
        }
    }
}

/// A board coordinate: zero-based column `x` and internal row index `y`.
///
/// The protocol numbers rows 1-based from the opposite edge; the adapter's
/// codec owns that transform. Internally everything uses `Coord`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coord {
    pub x: i8,
    pub y: i8,
}

impl Coord {
    pub const fn new(x: i8, y: i8) -> Self {
        Self { x, y }
    }

    /// Whether this coordinate lies on the board
    pub fn in_bounds(&self) -> bool {
        self.x >= 0 && self.y >= 0 && self.x < BOARD_SIZE && self.y < BOARD_SIZE
    }
}

/// A move: a piece placement, a pass, or the invalid sentinel.
///
/// Placements are packed into 16 bits (see the module docs for the layout).
/// `Move` is `Copy` and comparison-cheap, which matters because move buffers
/// hold thousands of them during enumeration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move(pub u16);

impl Move {
    /// The pass move
    pub const PASS: Move = Move(0xffff);

    /// Sentinel for "no move" (book miss, failed lookup)
    pub const INVALID: Move = Move(0xfffe);

    /// Pack a placement from its components.
    ///
    /// `orientation` must be < 8 and `piece` < 21; anchor coordinates must
    /// fit in 4 bits each (the 14x14 board guarantees this).
    pub fn place(orientation: u8, x: i8, y: i8, piece: u8) -> Self {
        debug_assert!((orientation as usize) < ORIENTATIONS);
        debug_assert!((piece as usize) < PIECE_COUNT);
        debug_assert!(x >= 0 && x < 16 && y >= 0 && y < 16);
        Move((x as u16) << 4 | (y as u16) | (orientation as u16) << 8 | (piece as u16) << 11)
    }

    /// Anchor column
    pub fn x(&self) -> i8 {
        (self.0 >> 4 & 0xf) as i8
    }

    /// Anchor row (internal index)
    pub fn y(&self) -> i8 {
        (self.0 & 0xf) as i8
    }

    /// Anchor coordinate
    pub fn anchor(&self) -> Coord {
        Coord::new(self.x(), self.y())
    }

    /// Orientation id (0-7)
    pub fn orientation(&self) -> u8 {
        (self.0 >> 8 & 0x7) as u8
    }

    /// Piece id (0-20)
    pub fn piece(&self) -> u8 {
        (self.0 >> 11) as u8
    }

    pub fn is_pass(&self) -> bool {
        *self == Move::PASS
    }

    pub fn is_invalid(&self) -> bool {
        *self == Move::INVALID
    }

    /// Whether this move is an actual placement (not pass, not invalid)
    pub fn is_placement(&self) -> bool {
        !self.is_pass() && !self.is_invalid()
    }
}
