//! Scanner state and the ordered per-line rule table

use tracing::debug;
use wolflog_types::{
    ActionField, GameLog, Phase, PhaseEntry, PhaseEvent, PhaseKind, Player, PlayerAction, Round,
};

use super::cursor::{collect_announcement, LineCursor};
use super::rules::*;

/// A structural rule: returns `true` when it claims the line
type Rule = fn(&mut ParserState, &str, &mut LineCursor<'_>) -> bool;

/// Structural rules in priority order; the first one claiming a line wins.
/// Metadata is applied before this table and never claims a line.
const RULES: [(&str, Rule); 9] = [
    ("roster", ParserState::apply_roster),
    ("round_header", ParserState::apply_round_header),
    ("phase_marker", ParserState::apply_phase_marker),
    ("action_header", ParserState::apply_action_header),
    ("field_marker", ParserState::apply_field_marker),
    ("continuation", ParserState::apply_continuation),
    ("vote_result", ParserState::apply_vote_result),
    ("death", ParserState::apply_death),
    ("announcement", ParserState::apply_announcement),
];

/// Where the current action lives
#[derive(Debug)]
enum ActionSlot {
    /// Inside the document at `rounds[round].phases[phase].actions[index]`
    Attached {
        round: usize,
        phase: usize,
        index: usize,
    },
    /// Opened with no phase to hold it; edits go nowhere
    Detached(PlayerAction),
}

/// Mutable scan state for one parse call
///
/// Rounds are attached to the document as soon as their header is seen and
/// phases as soon as their marker is seen, so `current_round` and
/// `current_phase` are indices into the document under construction.
#[derive(Debug, Default)]
pub struct ParserState {
    log: GameLog,
    current_round: Option<usize>,
    current_phase: Option<usize>,
    current_action: Option<ActionSlot>,
    open_field: Option<ActionField>,
}

impl ParserState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Classify one trimmed line and apply its effect
    pub fn process_line(&mut self, line: &str, cursor: &mut LineCursor<'_>) {
        if line.is_empty() {
            self.open_field = None;
            return;
        }

        self.apply_metadata(line);

        for (name, rule) in RULES {
            if rule(self, line, cursor) {
                debug!("[LogParser] line {} matched {}", cursor.consumed(), name);
                return;
            }
        }
    }

    /// Hand over the finished document
    pub fn finish(self) -> GameLog {
        self.log
    }

    pub fn log(&self) -> &GameLog {
        &self.log
    }

    fn apply_metadata(&mut self, line: &str) {
        if let Some(value) = labeled_value(line, GAME_ID_LABEL) {
            self.log.game_id = value.split(':').next().unwrap_or_default().trim().to_string();
        }
        if let Some(value) = labeled_value(line, START_TIME_LABEL) {
            self.log.start_time = value.to_string();
        }
        if let Some(value) = labeled_value(line, END_TIME_LABEL) {
            self.log.end_time = value.to_string();
        }
        if let Some((_, rest)) = line.split_once(GAME_OVER_MARKER) {
            let status = rest.split(STATUS_TERMINATOR).next().unwrap_or_default();
            self.log.status = status.trim().to_string();
        }
    }

    fn apply_roster(&mut self, line: &str, _: &mut LineCursor<'_>) -> bool {
        if !line.starts_with(ROSTER_PREFIX) {
            return false;
        }
        let Some(caps) = ROSTER_RE.captures(line) else {
            debug!("[LogParser] malformed roster line dropped: {}", line);
            return false;
        };
        self.log.players.push(Player::new(&caps[1], &caps[2]));
        true
    }

    fn apply_round_header(&mut self, line: &str, _: &mut LineCursor<'_>) -> bool {
        let Some(number) = ROUND_RE
            .captures(line)
            .and_then(|caps| caps[1].parse::<u32>().ok())
        else {
            return false;
        };
        self.log.rounds.push(Round::new(number));
        self.current_round = Some(self.log.rounds.len() - 1);
        self.current_phase = None;
        self.open_field = None;
        true
    }

    fn apply_phase_marker(&mut self, line: &str, _: &mut LineCursor<'_>) -> bool {
        let kind = match line {
            NIGHT_MARKER => PhaseKind::Night,
            DAY_MARKER => PhaseKind::Day,
            _ => return false,
        };
        self.open_field = None;
        self.current_phase = match self.current_round {
            Some(round) => {
                let phases = &mut self.log.rounds[round].phases;
                phases.push(Phase::new(kind));
                Some(phases.len() - 1)
            }
            None => {
                debug!("[LogParser] {} phase marker without an open round dropped", kind);
                None
            }
        };
        true
    }

    fn apply_action_header(&mut self, line: &str, _: &mut LineCursor<'_>) -> bool {
        let Some(time) = ACTION_TIME_RE.captures(line) else {
            return false;
        };
        let Some(body) = ACTION_BODY_RE.captures(line) else {
            return false;
        };
        let action = PlayerAction::new(&time[1], &body[1], &body[2]);

        self.current_action = Some(match (self.current_round, self.current_phase) {
            (Some(round), Some(phase)) => {
                let actions = &mut self.log.rounds[round].phases[phase].actions;
                actions.push(PhaseEntry::Action(action));
                ActionSlot::Attached {
                    round,
                    phase,
                    index: actions.len() - 1,
                }
            }
            _ => {
                debug!("[LogParser] action header without an open phase dropped: {}", line);
                ActionSlot::Detached(action)
            }
        });
        self.open_field = None;
        true
    }

    fn apply_field_marker(&mut self, line: &str, _: &mut LineCursor<'_>) -> bool {
        let (field, value) = if let Some(rest) = line.strip_prefix(THOUGHT_MARKER) {
            (ActionField::Thought, rest.trim())
        } else if let Some(rest) = line.strip_prefix(BEHAVIOR_MARKER) {
            (ActionField::Behavior, rest.trim())
        } else if let Some(rest) = line.strip_prefix(SPEECH_MARKER) {
            (ActionField::Speech, rest.trim())
        } else if has_detail_keyword(line) {
            (ActionField::Details, line)
        } else {
            return false;
        };

        let Some(action) = self.current_action_mut() else {
            return false;
        };
        *action.field_mut(field) = value.to_string();
        self.open_field = Some(field);
        true
    }

    fn apply_continuation(&mut self, line: &str, _: &mut LineCursor<'_>) -> bool {
        let Some(field) = self.open_field else {
            return false;
        };
        if is_structural(line) {
            return false;
        }
        let Some(action) = self.current_action_mut() else {
            return false;
        };
        let text = action.field_mut(field);
        text.push('\n');
        text.push_str(line);
        true
    }

    fn apply_vote_result(&mut self, line: &str, _: &mut LineCursor<'_>) -> bool {
        if !VOTE_MARKER_RE.is_match(line) {
            return false;
        }
        let Some(caps) = VOTE_RESULT_RE.captures(line) else {
            return false;
        };
        self.push_event(PhaseEvent::VoteResult {
            details: caps[1].to_string(),
        });
        true
    }

    fn apply_death(&mut self, line: &str, _: &mut LineCursor<'_>) -> bool {
        let Some(caps) = DEATH_RE.captures(line) else {
            return false;
        };
        if self.current_phase_mut().is_none() {
            debug!("[LogParser] death notice without an open phase dropped");
            return true;
        }
        let names = &caps[2];
        for name in names.split(NAME_SEPARATORS).map(str::trim) {
            match self.log.player_mut(name) {
                Some(player) => player.alive = false,
                None => debug!("[LogParser] death of unknown player ignored: {}", name),
            }
        }
        self.push_event(PhaseEvent::Death {
            details: format!("{}: {}", &caps[1], names),
        });
        true
    }

    fn apply_announcement(&mut self, line: &str, cursor: &mut LineCursor<'_>) -> bool {
        if !line.contains(ANNOUNCEMENT_MARKER) {
            return false;
        }
        let details = collect_announcement(cursor);
        self.push_event(PhaseEvent::System { details });
        true
    }

    /// Append an event to the current phase; events never move the current
    /// action or the open field
    fn push_event(&mut self, event: PhaseEvent) {
        match self.current_phase_mut() {
            Some(phase) => phase.actions.push(PhaseEntry::Event(event)),
            None => debug!(
                "[LogParser] {} event without an open phase dropped",
                event.type_name()
            ),
        }
    }

    fn current_phase_mut(&mut self) -> Option<&mut Phase> {
        let round = self.current_round?;
        let phase = self.current_phase?;
        self.log.rounds.get_mut(round)?.phases.get_mut(phase)
    }

    fn current_action_mut(&mut self) -> Option<&mut PlayerAction> {
        match self.current_action.as_mut()? {
            ActionSlot::Attached {
                round,
                phase,
                index,
            } => self
                .log
                .rounds
                .get_mut(*round)?
                .phases
                .get_mut(*phase)?
                .actions
                .get_mut(*index)?
                .as_action_mut(),
            ActionSlot::Detached(action) => Some(action),
        }
    }
}
