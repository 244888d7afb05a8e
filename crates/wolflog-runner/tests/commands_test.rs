//! # Runner Command Tests
//!
//! Exercises the command functions behind the `wolflog` binary against
//! transcripts written to a temporary log directory.

use rstest::rstest;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::{tempdir, TempDir};
use wolflog_lib::OutputFormat;
use wolflog_runner::{
    read_experience, resolve_log_path, run_context, run_latest, run_parse, run_summary,
};

const TRANSCRIPT: &str = "\
游戏ID: 20250105_200000
开始时间: 2025-01-05 20:00:00
- Player1: werewolf
- Player2: villager
- Player3: hunter

第 1 回合
【夜晚阶段】
[20:00:10] 狼人频道 | Player1
(心声) 刀 Player2

💀 夜晚死亡 Player2
【白天阶段】
[20:01:00] 公开发言 | Player3
(发言) 我是猎人
";

fn write_transcript(dir: &TempDir, name: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, TRANSCRIPT).expect("write transcript");
    path
}

#[test]
fn test_resolve_existing_path_is_kept() {
    let dir = tempdir().unwrap();
    let path = write_transcript(&dir, "game.log");
    assert_eq!(resolve_log_path(&path, Path::new("elsewhere")), path);
}

#[test]
fn test_resolve_bare_name_against_log_dir() {
    let dir = tempdir().unwrap();
    let resolved = resolve_log_path(Path::new("missing_game.log"), dir.path());
    assert_eq!(resolved, dir.path().join("missing_game.log"));
}

#[rstest]
#[case(OutputFormat::Json, true)]
#[case(OutputFormat::Json, false)]
#[case(OutputFormat::Yaml, true)]
fn test_parse_renders_document(#[case] format: OutputFormat, #[case] pretty: bool) {
    let dir = tempdir().unwrap();
    let path = write_transcript(&dir, "game.log");

    let output = run_parse(&path, format, pretty).unwrap();
    assert!(output.contains("20250105_200000"));
    assert!(output.contains("Player3"));
    assert_eq!(output.contains('\n'), pretty || format == OutputFormat::Yaml);
}

#[test]
fn test_latest_reports_final_phase_only() {
    let dir = tempdir().unwrap();
    let path = write_transcript(&dir, "game.log");

    let output = run_latest(&path, OutputFormat::Json, false).unwrap();
    let value: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(value, serde_json::json!({"Player3": {"speech": "我是猎人"}}));
}

#[test]
fn test_context_merges_experience_file() {
    let dir = tempdir().unwrap();
    let path = write_transcript(&dir, "game.log");
    let experience = dir.path().join("experience.json");
    fs::write(&experience, r#"{"Player1": "喜欢首夜自刀"}"#).unwrap();

    let output = run_context(&path, Some(&experience), OutputFormat::Json, true).unwrap();
    let value: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(value["gameId"], "20250105_200000");
    assert_eq!(value["perPlayer"]["Player1"]["experience"], "喜欢首夜自刀");
    assert_eq!(value["perPlayer"]["Player1"]["thought"], "刀 Player2");
    assert_eq!(value["timeline"].as_array().map(Vec::len), Some(2));
}

#[rstest]
#[case::not_a_map(Some("[1, 2, 3]"))]
#[case::not_json(Some("{oops"))]
#[case::missing(None)]
fn test_unusable_experience_file_yields_empty_map(#[case] contents: Option<&str>) {
    let dir = tempdir().unwrap();
    let experience = dir.path().join("experience.json");
    if let Some(contents) = contents {
        fs::write(&experience, contents).unwrap();
    }

    assert!(read_experience(&experience).is_empty());
}

#[test]
fn test_context_survives_missing_experience_file() {
    let dir = tempdir().unwrap();
    let path = write_transcript(&dir, "game.log");
    let experience = dir.path().join("absent.json");

    let output = run_context(&path, Some(&experience), OutputFormat::Json, false).unwrap();
    let value: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(value["perPlayer"]["Player1"]["experience"], "");
}

#[test]
fn test_summary_lists_alive_and_dead() {
    let dir = tempdir().unwrap();
    let path = write_transcript(&dir, "game.log");

    let summary = run_summary(&path).unwrap();
    assert!(summary.contains("Game:     20250105_200000"));
    assert!(summary.contains("Ended:    -"));
    assert!(summary.contains("Status:   进行中"));
    assert!(summary.contains("Finished: no"));
    assert!(summary.contains("Alive:    Player1 (werewolf), Player3 (hunter)"));
    assert!(summary.contains("Dead:     Player2 (villager)"));
    assert!(summary.contains("Actions:  2"));
    assert!(summary.contains("Events:   1"));
}

#[test]
fn test_missing_transcript_is_an_error() {
    let dir = tempdir().unwrap();
    let err = run_summary(&dir.path().join("nope.log")).unwrap_err();
    assert!(format!("{err:#}").contains("Failed to load transcript"));
}

#[test]
fn test_summary_marks_finished_game() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("done.log");
    let text = format!("{TRANSCRIPT}\n游戏结束: 狼人阵营胜利。\n游戏结束时间: 2025-01-05 20:10:00\n");
    fs::write(&path, text).unwrap();

    let summary = run_summary(&path).unwrap();
    assert!(summary.contains("Finished: yes"));
}
