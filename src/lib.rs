//! Blokus Duo GTP engine (workspace facade crate).
//!
//! This package exposes the `duo_gtp::{adapter,core,engine,types}` public
//! API while the implementation lives in dedicated crates under `crates/`.

pub use duo_adapter as adapter;
pub use duo_core as core;
pub use duo_engine as engine;
pub use duo_types as types;

pub use duo_adapter::{AdapterConfig, CommandError, GtpEngine};
