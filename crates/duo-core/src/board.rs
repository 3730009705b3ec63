//! Board module - the 14x14 grid, placement rules and enumeration
//!
//! Each cell holds a bitflag byte with three marks per side:
//!
//! - `BLOCK`: the cell is covered by one of that side's pieces
//! - `SIDE`: the cell is orthogonally adjacent to one of that side's pieces
//!   (that side may never place here)
//! - `EDGE`: the cell is diagonally adjacent to one of that side's pieces
//!   (a legal placement must cover at least one such cell)
//!
//! The two seed cells are pre-marked with their owner's `EDGE` bit when the
//! board is created, which forces each side's first placement to cover its
//! seed without any first-move special case.
//!
//! Flags are written eagerly by [`Board::apply_move`], so legality checking
//! is a handful of mask tests per cell.

use duo_types::{Color, Coord, Move, BOARD_SIZE, FIRST_SEED, MAX_LEGAL_MOVES, PIECE_COUNT, SECOND_SEED};

use crate::pieces::{catalog, CellOffsets};

const FIRST_EDGE: u8 = 0x01;
const FIRST_SIDE: u8 = 0x02;
const FIRST_BLOCK: u8 = 0x04;
const SECOND_EDGE: u8 = 0x10;
const SECOND_SIDE: u8 = 0x20;
const SECOND_BLOCK: u8 = 0x40;

/// Total number of cells on the board
const CELL_COUNT: usize = (BOARD_SIZE as usize) * (BOARD_SIZE as usize);

/// Reusable buffer for legal-move enumeration.
///
/// Preallocated to [`MAX_LEGAL_MOVES`], the maximum number of simultaneously
/// legal placements achievable with the fixed piece inventory on this board,
/// so enumeration never reallocates. The buffer is owned by the caller (the
/// adapter keeps one across commands) and its contents are valid only until
/// the next enumeration; the single-threaded command loop is the invariant
/// that makes this reuse safe.
#[derive(Debug)]
pub struct MoveBuffer {
    moves: Vec<Move>,
}

impl MoveBuffer {
    pub fn new() -> Self {
        Self {
            moves: Vec::with_capacity(MAX_LEGAL_MOVES),
        }
    }

    pub fn clear(&mut self) {
        self.moves.clear();
    }

    fn push(&mut self, mv: Move) {
        debug_assert!(self.moves.len() < MAX_LEGAL_MOVES);
        self.moves.push(mv);
    }

    pub fn len(&self) -> usize {
        self.moves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    pub fn as_slice(&self) -> &[Move] {
        &self.moves
    }

    pub fn iter(&self) -> impl Iterator<Item = Move> + '_ {
        self.moves.iter().copied()
    }
}

impl Default for MoveBuffer {
    fn default() -> Self {
        Self::new()
    }
}

/// The game board: grid flags, used-piece tracking and the turn counter.
///
/// The current mover is the turn counter's parity; passes advance the turn
/// like placements do. `Board` is `Clone` so the search stages can apply
/// moves to copies instead of undoing them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    /// Flat bitflag array, row-major (y * BOARD_SIZE + x)
    cells: [u8; CELL_COUNT],
    /// Used pieces: first player's 21 slots then the second player's
    used: [bool; PIECE_COUNT * 2],
    /// Combined move count across both sides, passes included
    turn: u32,
}

impl Board {
    /// Fresh initial position with both seed cells marked
    pub fn new() -> Self {
        let mut board = Self {
            cells: [0; CELL_COUNT],
            used: [false; PIECE_COUNT * 2],
            turn: 0,
        };
        board.cells[Self::index(FIRST_SEED.0, FIRST_SEED.1)] |= FIRST_EDGE;
        board.cells[Self::index(SECOND_SEED.0, SECOND_SEED.1)] |= SECOND_EDGE;
        board
    }

    #[inline(always)]
    fn index(x: i8, y: i8) -> usize {
        debug_assert!(x >= 0 && x < BOARD_SIZE && y >= 0 && y < BOARD_SIZE);
        (y as usize) * (BOARD_SIZE as usize) + (x as usize)
    }

    #[inline(always)]
    fn at(&self, x: i8, y: i8) -> u8 {
        self.cells[Self::index(x, y)]
    }

    /// The side to move
    pub fn current_mover(&self) -> Color {
        if self.turn % 2 == 0 {
            Color::First
        } else {
            Color::Second
        }
    }

    /// Combined move count across both sides
    pub fn turn_count(&self) -> u32 {
        self.turn
    }

    /// Owner of a cell, if covered
    pub fn cell(&self, c: Coord) -> Option<Color> {
        if !c.in_bounds() {
            return None;
        }
        let flags = self.at(c.x, c.y);
        if flags & FIRST_BLOCK != 0 {
            Some(Color::First)
        } else if flags & SECOND_BLOCK != 0 {
            Some(Color::Second)
        } else {
            None
        }
    }

    /// Cumulative score: cells covered by this color
    pub fn score(&self, color: Color) -> u32 {
        let block = match color {
            Color::First => FIRST_BLOCK,
            Color::Second => SECOND_BLOCK,
        };
        self.cells.iter().filter(|&&f| f & block != 0).count() as u32
    }

    /// Remove a piece from a side's inventory without placing it.
    ///
    /// Position-setup helper (endgame tests, handicap positions); regular
    /// play marks pieces through [`Board::apply_move`].
    pub fn mark_used(&mut self, color: Color, piece: u8) {
        let base = match color {
            Color::First => 0,
            Color::Second => PIECE_COUNT,
        };
        self.used[base + piece as usize] = true;
    }

    /// Whether this side has already placed the given piece
    pub fn is_used(&self, color: Color, piece: u8) -> bool {
        let base = match color {
            Color::First => 0,
            Color::Second => PIECE_COUNT,
        };
        self.used[base + piece as usize]
    }

    fn mover_masks(&self) -> (u8, u8) {
        // (cells the mover may not cover, mover's diagonal-contact bit)
        match self.current_mover() {
            Color::First => (FIRST_BLOCK | FIRST_SIDE | SECOND_BLOCK, FIRST_EDGE),
            Color::Second => (SECOND_BLOCK | SECOND_SIDE | FIRST_BLOCK, SECOND_EDGE),
        }
    }

    /// Full legality check for the current mover. Pass is always legal.
    pub fn is_legal(&self, mv: Move) -> bool {
        if mv.is_pass() {
            return true;
        }
        if mv.is_invalid() || self.is_used(self.current_mover(), mv.piece()) {
            return false;
        }
        let cells = catalog().absolute_cells(mv);
        if cells.iter().any(|c| !c.in_bounds()) {
            return false;
        }
        let (blocked, edge) = self.mover_masks();
        if cells.iter().any(|c| self.at(c.x, c.y) & blocked != 0) {
            return false;
        }
        cells.iter().any(|c| self.at(c.x, c.y) & edge != 0)
    }

    /// Advance the turn without placing anything
    pub fn apply_pass(&mut self) {
        self.turn += 1;
    }

    /// Place a move for the current mover and advance the turn.
    ///
    /// The move must be legal; callers validate first (the adapter via
    /// [`Board::is_legal`], the search stages by enumerating).
    pub fn apply_move(&mut self, mv: Move) {
        if mv.is_pass() {
            self.apply_pass();
            return;
        }
        debug_assert!(self.is_legal(mv));

        let (block, side, edge) = match self.current_mover() {
            Color::First => (FIRST_BLOCK, FIRST_SIDE, FIRST_EDGE),
            Color::Second => (SECOND_BLOCK, SECOND_SIDE, SECOND_EDGE),
        };

        let cells = catalog().absolute_cells(mv);
        for c in &cells {
            self.cells[Self::index(c.x, c.y)] |= block;
            for (dx, dy, bit) in [
                (-1, 0, side),
                (1, 0, side),
                (0, -1, side),
                (0, 1, side),
                (-1, -1, edge),
                (1, -1, edge),
                (-1, 1, edge),
                (1, 1, edge),
            ] {
                let n = Coord::new(c.x + dx, c.y + dy);
                if n.in_bounds() {
                    self.cells[Self::index(n.x, n.y)] |= bit;
                }
            }
        }

        let base = match self.current_mover() {
            Color::First => 0,
            Color::Second => PIECE_COUNT,
        };
        self.used[base + mv.piece() as usize] = true;
        self.turn += 1;
    }

    /// Fill `buf` with the current mover's placements and return the count.
    ///
    /// With `strict` set, every returned move is fully legal. Without it the
    /// diagonal-contact requirement is skipped - a cheaper superset for
    /// benchmarks and superset assertions.
    pub fn enumerate_legal_moves(&self, buf: &mut MoveBuffer, strict: bool) -> usize {
        buf.clear();
        let cat = catalog();
        let mover = self.current_mover();
        let (blocked, edge) = self.mover_masks();

        for piece in cat.pieces() {
            if self.is_used(mover, piece.id) {
                continue;
            }
            for o in piece.orientations() {
                for y in 0..=(BOARD_SIZE - o.height) {
                    'anchor: for x in 0..=(BOARD_SIZE - o.width) {
                        let mut contact = false;
                        for c in &o.cells {
                            let cx = x + o.correction.x + c.x;
                            let cy = y + o.correction.y + c.y;
                            let flags = self.at(cx, cy);
                            if flags & blocked != 0 {
                                continue 'anchor;
                            }
                            contact |= flags & edge != 0;
                        }
                        if contact || !strict {
                            buf.push(Move::place(o.dir, x, y, piece.id));
                        }
                    }
                }
            }
        }
        buf.len()
    }

    /// Whether the current mover has any legal placement
    pub fn has_legal_move(&self) -> bool {
        let cat = catalog();
        let mover = self.current_mover();
        let (blocked, edge) = self.mover_masks();

        for piece in cat.pieces() {
            if self.is_used(mover, piece.id) {
                continue;
            }
            for o in piece.orientations() {
                for y in 0..=(BOARD_SIZE - o.height) {
                    'anchor: for x in 0..=(BOARD_SIZE - o.width) {
                        let mut contact = false;
                        for c in &o.cells {
                            let cx = x + o.correction.x + c.x;
                            let cy = y + o.correction.y + c.y;
                            let flags = self.at(cx, cy);
                            if flags & blocked != 0 {
                                continue 'anchor;
                            }
                            contact |= flags & edge != 0;
                        }
                        if contact {
                            return true;
                        }
                    }
                }
            }
        }
        false
    }

    /// Count of this color's open corner-contact cells: marked with its
    /// diagonal-contact bit and still placeable by it. A cheap frontier
    /// measure used by the heuristic evaluation.
    pub fn frontier(&self, color: Color) -> u32 {
        let (blocked, edge) = match color {
            Color::First => (FIRST_BLOCK | FIRST_SIDE | SECOND_BLOCK, FIRST_EDGE),
            Color::Second => (SECOND_BLOCK | SECOND_SIDE | FIRST_BLOCK, SECOND_EDGE),
        };
        self.cells
            .iter()
            .filter(|&&f| f & edge != 0 && f & blocked == 0)
            .count() as u32
    }

    /// Absolute cells of a placement, in catalog offset order
    pub fn move_cells(&self, mv: Move) -> CellOffsets {
        catalog().absolute_cells(mv)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
