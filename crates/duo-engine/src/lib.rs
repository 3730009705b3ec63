//! Engine module - the move-producing stages behind genmove
//!
//! Four independent stages, escalating in exactness as the game shortens:
//!
//! - [`book`]: opening-book lookup, consulted first at any turn
//! - [`search`]: time-bounded iterative-deepening alpha-beta over the
//!   heuristic evaluation ([`eval`])
//! - [`wld`]: exact win/loss/draw solver under a node budget (margin-blind)
//! - [`exact`]: unbounded exact solver over the final score differential
//!
//! Which stage runs for a given position is the adapter's decision (its
//! phase dispatcher); this crate only provides the stages themselves. All
//! stages are synchronous blocking calls that never touch stdout - optional
//! progress logging goes to stderr and is gated by an explicit flag.
//!
//! Boards are small and `Clone`, so every stage searches by applying moves
//! to copies rather than undoing them.

pub mod book;
pub mod eval;
pub mod exact;
pub mod search;
pub mod wld;

pub use duo_core as core;
pub use duo_types as types;

use duo_types::Move;

/// Result of a heuristic or exact search stage
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchOutcome {
    pub mv: Move,
    /// Heuristic score or exact final differential, from the perspective of
    /// the side to move in the searched position
    pub score: i32,
}

/// Game-theoretic outcome classes reported by the win/loss/draw solver
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Wld {
    Loss,
    Draw,
    Win,
}

impl Wld {
    fn from_sign(v: i32) -> Self {
        match v.signum() {
            1 => Wld::Win,
            -1 => Wld::Loss,
            _ => Wld::Draw,
        }
    }
}

pub use exact::solve_exact;
pub use search::{search, SearchOptions};
pub use wld::solve_wld;
