//! Adapter module - the GTP front end over the Blokus Duo engine
//!
//! Everything protocol-shaped lives here, split along its seams:
//!
//! - [`codec`]: move text to packed moves and back, including the row flip
//! - [`dispatch`]: routes genmove to an engine stage by game phase
//! - [`render`]: board diagrams and score strings
//! - [`cputime`]: the `times(2)`-backed cputime command
//! - [`gtp`]: the command handlers and the stdio transport loop
//! - [`error`]: the per-command failure taxonomy
//!
//! The adapter is the only layer that reads or writes the wire. Engine
//! stages stay silent on stdout; their optional progress logging goes to
//! stderr, gated by [`AdapterConfig::log_search`].

pub mod codec;
pub mod cputime;
pub mod dispatch;
pub mod error;
pub mod gtp;
pub mod render;

use std::time::Duration;

use duo_types::{GENMOVE_MAX_DEPTH, GENMOVE_TIME_MS};

pub use dispatch::{select_stage, Stage};
pub use error::CommandError;
pub use gtp::{reconcile, GtpEngine, LineReply, COMMANDS};

/// Explicit adapter configuration, passed in at construction.
#[derive(Debug, Clone, Copy)]
pub struct AdapterConfig {
    /// Emit heuristic-search progress lines on stderr
    pub log_search: bool,
    /// Depth cap for the heuristic stage
    pub max_depth: u8,
    /// Hard time budget for the heuristic stage (soft budget is half)
    pub time_budget: Duration,
}

impl Default for AdapterConfig {
    fn default() -> Self {
        Self {
            log_search: false,
            max_depth: GENMOVE_MAX_DEPTH,
            time_budget: Duration::from_millis(GENMOVE_TIME_MS),
        }
    }
}

impl AdapterConfig {
    /// Stock configuration with search logging read from the
    /// `DUO_GTP_LOG_SEARCH` environment variable.
    pub fn from_env() -> Self {
        let log_search = std::env::var("DUO_GTP_LOG_SEARCH")
            .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
            .unwrap_or(false);
        Self {
            log_search,
            ..Self::default()
        }
    }

    /// Tight search budgets for tests and interactive tooling.
    pub fn quick() -> Self {
        Self {
            log_search: false,
            max_depth: 2,
            time_budget: Duration::from_millis(200),
        }
    }
}
