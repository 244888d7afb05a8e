//! Analysis context
//!
//! Flattens a parsed transcript into the payload handed to a post-game
//! analysis step: the roster, a global timeline of player actions, and one
//! digest per roster player with their thoughts, speeches and reflections
//! gathered across the whole game.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use wolflog_types::{GameLog, PhaseKind, PlayerAction};

use crate::parsing::rules::{BEHAVIOR_MARKER, SPEECH_MARKER, THOUGHT_MARKER};

/// Channel fragment marking post-game reflection actions
pub const REFLECTION_CHANNEL: &str = "反思";

/// Complete analysis payload for one game
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisContext {
    pub game_id: String,
    /// Player name to role
    pub players: BTreeMap<String, String>,
    pub timeline: Vec<TimelineEntry>,
    pub per_player: BTreeMap<String, PlayerDigest>,
}

/// One player action placed in the global timeline
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelineEntry {
    pub round: u32,
    pub phase: PhaseKind,
    pub time: String,
    pub channel: String,
    pub player: String,
    pub body: String,
}

/// Everything one player thought and said during the game
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerDigest {
    pub role: String,
    pub experience: String,
    pub thought: String,
    pub speech: String,
    pub reflection: String,
    pub other: String,
}

#[derive(Default)]
struct Buckets {
    thought: Vec<String>,
    speech: Vec<String>,
    reflection: Vec<String>,
    other: Vec<String>,
}

impl AnalysisContext {
    /// Build the context from a parsed log
    ///
    /// `experience` maps player names to notes carried over from earlier
    /// games; players without an entry get an empty string.
    pub fn build(log: &GameLog, experience: Option<&HashMap<String, String>>) -> Self {
        let players: BTreeMap<String, String> = log
            .players
            .iter()
            .map(|p| (p.name.clone(), p.role.clone()))
            .collect();

        let mut timeline = Vec::new();
        let mut buckets: HashMap<&str, Buckets> = HashMap::new();

        for round in &log.rounds {
            for phase in &round.phases {
                for action in phase.player_actions() {
                    timeline.push(TimelineEntry {
                        round: round.number,
                        phase: phase.kind,
                        time: action.time.clone(),
                        channel: action.action_type.clone(),
                        player: action.player.clone(),
                        body: action_body(action),
                    });

                    if players.contains_key(&action.player) {
                        let bucket = buckets.entry(action.player.as_str()).or_default();
                        sort_into(bucket, action);
                    }
                }
            }
        }

        let per_player = players
            .iter()
            .map(|(name, role)| {
                let bucket = buckets.remove(name.as_str()).unwrap_or_default();
                let digest = PlayerDigest {
                    role: role.clone(),
                    experience: experience
                        .and_then(|e| e.get(name))
                        .cloned()
                        .unwrap_or_default(),
                    thought: bucket.thought.join("\n"),
                    speech: bucket.speech.join("\n"),
                    reflection: bucket.reflection.join("\n"),
                    other: bucket.other.join("\n"),
                };
                (name.clone(), digest)
            })
            .collect();

        Self {
            game_id: log.game_id.clone(),
            players,
            timeline,
            per_player,
        }
    }
}

/// Marker-prefixed, newline-joined text of an action
fn action_body(action: &PlayerAction) -> String {
    let parts = [
        (THOUGHT_MARKER, &action.thought),
        (BEHAVIOR_MARKER, &action.behavior),
        (SPEECH_MARKER, &action.speech),
        ("", &action.details),
    ];
    parts
        .iter()
        .filter(|(_, text)| !text.is_empty())
        .map(|(marker, text)| {
            if marker.is_empty() {
                text.to_string()
            } else {
                format!("{marker} {text}")
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn sort_into(bucket: &mut Buckets, action: &PlayerAction) {
    let non_empty = |text: &String| (!text.is_empty()).then(|| text.clone());

    if action.action_type.contains(REFLECTION_CHANNEL) {
        bucket.reflection.extend(
            [&action.thought, &action.behavior, &action.speech, &action.details]
                .into_iter()
                .filter_map(non_empty),
        );
        return;
    }

    bucket.thought.extend(non_empty(&action.thought));
    bucket.speech.extend(non_empty(&action.speech));
    bucket.other.extend(
        [&action.behavior, &action.details]
            .into_iter()
            .filter_map(non_empty),
    );
}
