//! # Wolflog Runner
//!
//! Command implementations behind the `wolflog` binary. Each command loads a
//! transcript, builds the requested view and returns the rendered text so the
//! binary only has to print it.

pub mod commands;
pub mod env;

pub use commands::*;
