//! Core game logic module - pure, deterministic, and testable
//!
//! This module owns the Blokus Duo rules: the piece catalog, the board grid,
//! legality checking, move application, scoring and legal-move enumeration.
//! It has **zero dependencies** on I/O or the protocol layer, making it:
//!
//! - **Deterministic**: the same move sequence always produces the same board
//! - **Testable**: every rule has a direct unit test
//! - **Portable**: usable from the adapter, the search engine, or benchmarks
//!
//! # Module Structure
//!
//! - [`pieces`]: the 21-piece shape catalog with per-orientation offsets and
//!   anchor corrections, built once per process
//! - [`board`]: 14x14 bitflag grid with placement rules, turn order, scoring
//!   and enumeration into a reusable [`MoveBuffer`](board::MoveBuffer)
//!
//! # Placement Rules
//!
//! A placement by a side is legal when all of the following hold:
//!
//! - the piece has not been used by that side yet
//! - every cell is on the board and does not overlap any placed piece
//! - no cell is orthogonally adjacent to one of that side's own pieces
//! - at least one cell touches one of that side's pieces diagonally
//!
//! Each seed cell carries a pre-set diagonal-contact mark for its owner, so
//! the opening placement of each side must cover its seed - no special case
//! is needed for the first move.
//!
//! # Example
//!
//! ```
//! use duo_core::board::{Board, MoveBuffer};
//!
//! let board = Board::new();
//! let mut buf = MoveBuffer::new();
//! let n = board.enumerate_legal_moves(&mut buf, true);
//! assert!(n > 0);
//! // Every opening move covers the first player's seed cell.
//! ```

pub mod board;
pub mod pieces;

pub use duo_types as types;

// Re-export commonly used items for convenience
pub use board::{Board, MoveBuffer};
pub use pieces::{catalog, Catalog, Orientation, Piece};
