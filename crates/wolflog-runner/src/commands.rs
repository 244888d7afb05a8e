use anyhow::{Context, Result};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};
use wolflog_lib::types::{GameLog, Player};
use wolflog_lib::{latest_actions, load_game_log, render, AnalysisContext, OutputFormat};

/// Resolve a transcript argument
///
/// An existing path is used as given; anything else is looked up inside
/// `log_dir`, so `wolflog parse game_x.log` finds `logs/game_x.log`.
pub fn resolve_log_path(arg: &Path, log_dir: &Path) -> PathBuf {
    if arg.exists() || arg.is_absolute() {
        return arg.to_path_buf();
    }
    let candidate = log_dir.join(arg);
    debug!(
        "[wolflog] {} not found, trying {}",
        arg.display(),
        candidate.display()
    );
    candidate
}

fn load(path: &Path) -> Result<GameLog> {
    let log = load_game_log(path)
        .with_context(|| format!("Failed to load transcript {}", path.display()))?;
    info!(
        "[wolflog] Loaded game '{}' from {}",
        log.game_id,
        path.display()
    );
    Ok(log)
}

/// Full parsed document
pub fn run_parse(path: &Path, format: OutputFormat, pretty: bool) -> Result<String> {
    let log = load(path)?;
    render(&log, format, pretty).context("Failed to render game log")
}

/// Latest visible action per player in the final phase
pub fn run_latest(path: &Path, format: OutputFormat, pretty: bool) -> Result<String> {
    let log = load(path)?;
    render(&latest_actions(&log), format, pretty).context("Failed to render latest actions")
}

/// Analysis context, optionally merged with per-player experience notes
pub fn run_context(
    path: &Path,
    experience: Option<&Path>,
    format: OutputFormat,
    pretty: bool,
) -> Result<String> {
    let log = load(path)?;
    let experience = experience.map(read_experience);
    let context = AnalysisContext::build(&log, experience.as_ref());
    render(&context, format, pretty).context("Failed to render analysis context")
}

/// Read a JSON object of player name to experience text
///
/// A missing or malformed file yields an empty map.
pub fn read_experience(path: &Path) -> HashMap<String, String> {
    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) => {
            warn!(
                "[wolflog] Failed to read experience file {}: {}",
                path.display(),
                e
            );
            return HashMap::new();
        }
    };
    serde_json::from_str(&text).unwrap_or_else(|e| {
        warn!(
            "[wolflog] Experience file {} is not a JSON object of strings: {}",
            path.display(),
            e
        );
        HashMap::new()
    })
}

/// Short plain-text overview of a transcript
pub fn run_summary(path: &Path) -> Result<String> {
    let log = load(path)?;
    Ok(summarize(&log))
}

pub fn summarize(log: &GameLog) -> String {
    let (alive, dead): (Vec<&Player>, Vec<&Player>) = log.players.iter().partition(|p| p.alive);
    let events: usize = log
        .rounds
        .iter()
        .flat_map(|r| r.phases.iter())
        .map(|p| p.events().count())
        .sum();

    let mut out = String::new();
    out.push_str(&format!("Game:     {}\n", or_dash(&log.game_id)));
    out.push_str(&format!("Started:  {}\n", or_dash(&log.start_time)));
    out.push_str(&format!("Ended:    {}\n", or_dash(&log.end_time)));
    out.push_str(&format!("Status:   {}\n", log.status));
    out.push_str(&format!(
        "Finished: {}\n",
        if log.is_finished() { "yes" } else { "no" }
    ));
    out.push_str(&format!("Players:  {}\n", log.players.len()));
    out.push_str(&format!("Alive:    {}\n", player_list(&alive)));
    out.push_str(&format!("Dead:     {}\n", player_list(&dead)));
    out.push_str(&format!("Rounds:   {}\n", log.rounds.len()));
    out.push_str(&format!(
        "Actions:  {}\n",
        log.player_actions().count()
    ));
    out.push_str(&format!("Events:   {events}"));
    out
}

fn or_dash(value: &str) -> &str {
    if value.is_empty() {
        "-"
    } else {
        value
    }
}

fn player_list(players: &[&Player]) -> String {
    if players.is_empty() {
        return "-".to_string();
    }
    players
        .iter()
        .map(|p| format!("{} ({})", p.name, p.role))
        .collect::<Vec<_>>()
        .join(", ")
}
