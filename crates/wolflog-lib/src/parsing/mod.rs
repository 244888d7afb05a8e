//! Transcript parsing
//!
//! A single-pass, line-oriented scanner turning a free-form game transcript
//! into a [`GameLog`]. Parsing is best-effort and never fails on content:
//! - unrecognized lines are ignored
//! - structural lines with no open container are dropped
//! - death notices naming unknown players leave the roster untouched
//!
//! Transcripts are append-only and may be read while still being written, so
//! a truncated trailing line is treated like any other unrecognized line.

use tracing::info;
use wolflog_types::GameLog;

use crate::error::Result;

pub mod cursor;
pub mod rules;
pub mod state;

pub use cursor::LineCursor;
pub use state::ParserState;

/// Stateless transcript parser; every call builds a fresh document
pub struct LogParser;

impl LogParser {
    /// Parse a transcript
    pub fn parse(text: &str) -> GameLog {
        let mut state = ParserState::new();
        let mut cursor = LineCursor::new(text);
        while let Some(line) = cursor.next() {
            state.process_line(line.trim(), &mut cursor);
        }
        let log = state.finish();

        info!(
            "[LogParser] Parsed {} lines: {} players, {} rounds, {} actions",
            cursor.consumed(),
            log.players.len(),
            log.rounds.len(),
            log.player_actions().count()
        );
        log
    }

    /// Parse raw bytes, failing only when they are not valid UTF-8
    pub fn parse_bytes(bytes: &[u8]) -> Result<GameLog> {
        let text = std::str::from_utf8(bytes)?;
        Ok(Self::parse(text))
    }
}
