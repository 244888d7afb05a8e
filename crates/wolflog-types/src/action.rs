//! Phase entries: player actions and phase-level events
//!
//! Both shapes share one ordered list inside a [`crate::Phase`]. Events carry a
//! `type` tag on the wire and player actions never do, which is how consumers
//! tell them apart.

use serde::{Deserialize, Serialize};

/// One entry in a phase
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PhaseEntry {
    /// Tried first when deserializing: requires a `type` tag
    Event(PhaseEvent),
    Action(PlayerAction),
}

impl PhaseEntry {
    pub fn as_action(&self) -> Option<&PlayerAction> {
        match self {
            PhaseEntry::Action(action) => Some(action),
            PhaseEntry::Event(_) => None,
        }
    }

    pub fn as_action_mut(&mut self) -> Option<&mut PlayerAction> {
        match self {
            PhaseEntry::Action(action) => Some(action),
            PhaseEntry::Event(_) => None,
        }
    }

    pub fn as_event(&self) -> Option<&PhaseEvent> {
        match self {
            PhaseEntry::Event(event) => Some(event),
            PhaseEntry::Action(_) => None,
        }
    }
}

impl From<PlayerAction> for PhaseEntry {
    fn from(action: PlayerAction) -> Self {
        PhaseEntry::Action(action)
    }
}

impl From<PhaseEvent> for PhaseEntry {
    fn from(event: PhaseEvent) -> Self {
        PhaseEntry::Event(event)
    }
}

/// A single player's recorded activity
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PlayerAction {
    /// `HH:MM:SS` as written in the header
    pub time: String,
    /// Free-text label such as "狼人频道" or "公开发言"
    pub action_type: String,
    /// Player name, not checked against the roster
    pub player: String,
    pub thought: String,
    pub behavior: String,
    pub speech: String,
    /// Side-effect line (vote, inspection, item use)
    pub details: String,
}

impl PlayerAction {
    pub fn new(
        time: impl Into<String>,
        action_type: impl Into<String>,
        player: impl Into<String>,
    ) -> Self {
        Self {
            time: time.into(),
            action_type: action_type.into(),
            player: player.into(),
            ..Default::default()
        }
    }

    /// True when any of thought, behavior or speech is non-empty
    pub fn has_content(&self) -> bool {
        !self.thought.is_empty() || !self.behavior.is_empty() || !self.speech.is_empty()
    }

    /// Mutable access to a multi-line text field
    pub fn field_mut(&mut self, field: ActionField) -> &mut String {
        match field {
            ActionField::Thought => &mut self.thought,
            ActionField::Behavior => &mut self.behavior,
            ActionField::Speech => &mut self.speech,
            ActionField::Details => &mut self.details,
        }
    }
}

/// Text fields of a [`PlayerAction`] that accept continuation lines
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActionField {
    Thought,
    Behavior,
    Speech,
    Details,
}

/// Phase-level occurrence not tied to a single actor
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PhaseEvent {
    VoteResult { details: String },
    Death { details: String },
    System { details: String },
}

impl PhaseEvent {
    pub fn details(&self) -> &str {
        match self {
            PhaseEvent::VoteResult { details }
            | PhaseEvent::Death { details }
            | PhaseEvent::System { details } => details,
        }
    }

    /// Wire tag of this event
    pub fn type_name(&self) -> &'static str {
        match self {
            PhaseEvent::VoteResult { .. } => "vote_result",
            PhaseEvent::Death { .. } => "death",
            PhaseEvent::System { .. } => "system",
        }
    }
}
