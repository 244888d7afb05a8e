//! Line grammar of a game transcript
//!
//! Labels, markers and patterns recognized by the scanner, plus the predicates
//! that decide whether a line may continue an open text field.

use regex::Regex;
use std::sync::LazyLock;

pub const GAME_ID_LABEL: &str = "游戏ID:";
pub const START_TIME_LABEL: &str = "开始时间:";
pub const END_TIME_LABEL: &str = "游戏结束时间:";
pub const GAME_OVER_MARKER: &str = "游戏结束:";
/// Sentence terminator closing the end-of-game status
pub const STATUS_TERMINATOR: char = '。';

pub const ROSTER_PREFIX: &str = "- Player";
pub const NIGHT_MARKER: &str = "【夜晚阶段】";
pub const DAY_MARKER: &str = "【白天阶段】";

pub const THOUGHT_MARKER: &str = "(心声)";
pub const BEHAVIOR_MARKER: &str = "(表现)";
pub const SPEECH_MARKER: &str = "(发言)";
/// Vote, inspect and item-use phrases that turn a line into `details`
pub const DETAIL_KEYWORDS: [&str; 3] = ["投票给", "查验", "使用"];

pub const ANNOUNCEMENT_MARKER: &str = "📢 系统公告";
/// Separators accepted in a death list
pub const NAME_SEPARATORS: [char; 2] = [',', '，'];

/// Prefixes that can never continue an open field
const STRUCTURAL_PREFIXES: [&str; 5] = [
    "[",
    GAME_ID_LABEL,
    START_TIME_LABEL,
    "游戏结束",
    ROSTER_PREFIX,
];
/// Leading symbols of phase and event markers
const EVENT_SYMBOLS: [char; 4] = ['【', '📢', '💀', '📊'];

pub static ROSTER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"- (Player\d+): (\w+)").expect("valid roster pattern"));

pub static ROUND_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^第 (\d+) 回合$").expect("valid round pattern"));

pub static ACTION_TIME_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\[(\d{2}:\d{2}:\d{2})\]").expect("valid action time pattern")
});

pub static ACTION_BODY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\] (.+?) \| (.+)").expect("valid action body pattern"));

pub static VOTE_MARKER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"📊 .+投票结果").expect("valid vote marker pattern"));

pub static VOTE_RESULT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"📊 (.+投票结果 .+)").expect("valid vote result pattern"));

pub static DEATH_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"💀 (夜晚死亡|白天死亡) (.+)").expect("valid death pattern")
});

/// Text after `label`, trimmed, when the line starts with it
pub fn labeled_value<'a>(line: &'a str, label: &str) -> Option<&'a str> {
    line.strip_prefix(label).map(str::trim)
}

/// Whether `line` is a structural marker that must not be swallowed as
/// continuation text
pub fn is_structural(line: &str) -> bool {
    STRUCTURAL_PREFIXES.iter().any(|p| line.starts_with(p))
        || ROUND_RE.is_match(line)
        || line.starts_with(EVENT_SYMBOLS)
}

pub fn has_detail_keyword(line: &str) -> bool {
    DETAIL_KEYWORDS.iter().any(|k| line.contains(k))
}
