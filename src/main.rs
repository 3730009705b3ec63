//! GTP runner (default binary).
//!
//! Speaks the protocol over stdio: a controller writes commands to stdin
//! and reads framed replies from stdout. Search progress logging, when
//! enabled via `DUO_GTP_LOG_SEARCH`, goes to stderr so it never corrupts
//! the reply stream.

use std::io;

use anyhow::Result;

use duo_gtp::{AdapterConfig, GtpEngine};

fn main() -> Result<()> {
    let config = AdapterConfig::from_env();
    let mut engine = GtpEngine::new(config);

    let stdin = io::stdin();
    let stdout = io::stdout();
    engine.run(stdin.lock(), stdout.lock())?;
    Ok(())
}
