//! Latest-action view types

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::action::PlayerAction;

/// Most recent visible state of one player within a phase
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LatestAction {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thought: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub behavior: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub speech: Option<String>,
}

impl LatestAction {
    /// Builds the view from an action, or `None` if it has nothing to show
    pub fn from_action(action: &PlayerAction) -> Option<Self> {
        if !action.has_content() {
            return None;
        }
        let non_empty = |s: &str| (!s.is_empty()).then(|| s.to_string());
        Some(Self {
            thought: non_empty(&action.thought),
            behavior: non_empty(&action.behavior),
            speech: non_empty(&action.speech),
        })
    }
}

/// Player name to latest action
pub type LatestActions = BTreeMap<String, LatestAction>;
