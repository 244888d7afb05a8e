//! # Wolflog Library
//!
//! Turns Werewolf game transcripts into structured documents.
//!
//! - [`parsing`]: the line-oriented transcript scanner
//! - [`projection`]: latest visible action per player
//! - [`context`]: flattened payload for post-game analysis
//! - [`loader`]: reading transcripts from disk
//! - [`output`]: JSON / YAML rendering

pub mod context;
pub mod error;
pub mod loader;
pub mod output;
pub mod parsing;
pub mod projection;

pub use context::{AnalysisContext, PlayerDigest, TimelineEntry};
pub use error::{Result, WolfLogError};
pub use loader::{game_id_from_path, load_game_log};
pub use output::{render, OutputFormat};
pub use parsing::LogParser;
pub use projection::latest_actions;

pub use wolflog_types as types;
