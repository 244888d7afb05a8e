//! Latest-action projection
//!
//! Read-only view over a parsed transcript used by presentation layers to
//! show each player's current state.

use wolflog_types::{GameLog, LatestAction, LatestActions};

/// Latest visible action per player in the last phase of the last round
///
/// A later action by the same player replaces the earlier one entirely;
/// fields are never merged across actions. Events and actions without a
/// player or without any thought, behavior or speech are skipped.
pub fn latest_actions(log: &GameLog) -> LatestActions {
    let mut latest = LatestActions::new();
    let Some(phase) = log.last_phase() else {
        return latest;
    };

    for action in phase.player_actions() {
        if action.player.is_empty() {
            continue;
        }
        if let Some(view) = LatestAction::from_action(action) {
            latest.insert(action.player.clone(), view);
        }
    }
    latest
}

#[cfg(test)]
mod tests {
    use super::*;
    use wolflog_types::{Phase, PhaseKind, PlayerAction, Round};

    #[test]
    fn test_empty_log_has_no_latest_actions() {
        assert!(latest_actions(&GameLog::default()).is_empty());
    }

    #[test]
    fn test_only_last_phase_counts() {
        let mut night = Phase::new(PhaseKind::Night);
        let mut action = PlayerAction::new("21:00:00", "狼人频道", "Player1");
        action.thought = "夜里的想法".to_string();
        night.actions.push(action.into());

        let mut round = Round::new(1);
        round.phases.push(night);
        round.phases.push(Phase::new(PhaseKind::Day));

        let mut log = GameLog::default();
        log.rounds.push(round);

        assert!(latest_actions(&log).is_empty());
    }
}
