//! Reading transcripts from disk

use regex::Regex;
use std::fs;
use std::path::Path;
use std::sync::LazyLock;
use tracing::{debug, warn};
use wolflog_types::GameLog;

use crate::error::{Result, WolfLogError};
use crate::parsing::LogParser;

static FILE_GAME_ID_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"game_(\d{8}_\d{6})").expect("valid file game id pattern"));

/// Read and parse a transcript file
///
/// When the transcript never states a game id, one is derived from the file
/// name with [`game_id_from_path`].
pub fn load_game_log(path: &Path) -> Result<GameLog> {
    debug!("[Loader] Reading transcript {}", path.display());
    let bytes = fs::read(path).map_err(|e| WolfLogError::io(path, e))?;
    let mut log = LogParser::parse_bytes(&bytes)?;

    if log.game_id.is_empty() {
        log.game_id = game_id_from_path(path);
        warn!(
            "[Loader] No game id in {}, using '{}' from file name",
            path.display(),
            log.game_id
        );
    }
    Ok(log)
}

/// `YYYYMMDD_HHMMSS` from a `game_YYYYMMDD_HHMMSS*` file name, else the stem
pub fn game_id_from_path(path: &Path) -> String {
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy())
        .unwrap_or_default();
    if let Some(caps) = FILE_GAME_ID_RE.captures(&file_name) {
        return caps[1].to_string();
    }
    path.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default()
}
