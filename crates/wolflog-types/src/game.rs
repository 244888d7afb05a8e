//! Root document, roster and round/phase structure

use serde::{Deserialize, Serialize};

use crate::action::{PhaseEntry, PhaseEvent, PlayerAction};

/// Status reported until an end-of-game line is seen.
pub const STATUS_IN_PROGRESS: &str = "进行中";

/// A fully parsed transcript
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameLog {
    /// Opaque game identifier, empty if the transcript never names one
    pub game_id: String,
    /// Raw start timestamp as written
    pub start_time: String,
    /// Raw end timestamp, empty while the game is ongoing
    pub end_time: String,
    /// Free-text end condition
    pub status: String,
    /// Roster in order of first declaration
    pub players: Vec<Player>,
    /// Rounds in textual order of their headers
    pub rounds: Vec<Round>,
}

impl Default for GameLog {
    fn default() -> Self {
        Self {
            game_id: String::new(),
            start_time: String::new(),
            end_time: String::new(),
            status: STATUS_IN_PROGRESS.to_string(),
            players: Vec::new(),
            rounds: Vec::new(),
        }
    }
}

impl GameLog {
    /// Look up a roster entry by name
    pub fn player(&self, name: &str) -> Option<&Player> {
        self.players.iter().find(|p| p.name == name)
    }

    pub fn player_mut(&mut self, name: &str) -> Option<&mut Player> {
        self.players.iter_mut().find(|p| p.name == name)
    }

    /// Last phase of the last round, if both exist
    pub fn last_phase(&self) -> Option<&Phase> {
        self.rounds.last().and_then(|round| round.phases.last())
    }

    pub fn is_finished(&self) -> bool {
        !self.end_time.is_empty() || self.status != STATUS_IN_PROGRESS
    }

    /// Every normal action in document order
    pub fn player_actions(&self) -> impl Iterator<Item = &PlayerAction> {
        self.rounds
            .iter()
            .flat_map(|round| round.phases.iter())
            .flat_map(|phase| phase.player_actions())
    }
}

/// A roster entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub name: String,
    pub role: String,
    pub alive: bool,
}

impl Player {
    pub fn new(name: impl Into<String>, role: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            role: role.into(),
            alive: true,
        }
    }
}

/// One numbered round; the number is taken verbatim from the header
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Round {
    pub number: u32,
    pub phases: Vec<Phase>,
}

impl Round {
    pub fn new(number: u32) -> Self {
        Self {
            number,
            phases: Vec::new(),
        }
    }
}

/// Night or day segment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PhaseKind {
    Night,
    Day,
}

impl PhaseKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            PhaseKind::Night => "night",
            PhaseKind::Day => "day",
        }
    }
}

impl std::fmt::Display for PhaseKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A phase and its ordered entries
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Phase {
    pub kind: PhaseKind,
    pub actions: Vec<PhaseEntry>,
}

impl Phase {
    pub fn new(kind: PhaseKind) -> Self {
        Self {
            kind,
            actions: Vec::new(),
        }
    }

    pub fn player_actions(&self) -> impl Iterator<Item = &PlayerAction> {
        self.actions.iter().filter_map(PhaseEntry::as_action)
    }

    pub fn events(&self) -> impl Iterator<Item = &PhaseEvent> {
        self.actions.iter().filter_map(PhaseEntry::as_event)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_game_log_is_in_progress() {
        let log = GameLog::default();
        assert_eq!(log.status, STATUS_IN_PROGRESS);
        assert!(log.game_id.is_empty());
        assert!(log.end_time.is_empty());
        assert!(!log.is_finished());
    }

    #[test]
    fn test_last_phase_requires_round_and_phase() {
        let mut log = GameLog::default();
        assert!(log.last_phase().is_none());

        log.rounds.push(Round::new(1));
        assert!(log.last_phase().is_none());

        log.rounds[0].phases.push(Phase::new(PhaseKind::Night));
        log.rounds[0].phases.push(Phase::new(PhaseKind::Day));
        assert_eq!(log.last_phase().map(|p| p.kind), Some(PhaseKind::Day));
    }

    #[test]
    fn test_game_log_serializes_camel_case() {
        let mut log = GameLog::default();
        log.game_id = "G1".to_string();
        log.players.push(Player::new("Player1", "werewolf"));

        let value = serde_json::to_value(&log).unwrap();
        assert_eq!(value["gameId"], "G1");
        assert_eq!(value["startTime"], "");
        assert_eq!(value["players"][0]["alive"], true);
    }
}
