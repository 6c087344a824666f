//! Helpers for deterministic regression tests.

use std::cell::RefCell;
use std::rc::Rc;

use battle_core::{Action, BattleConfig, BattleSession, DataType, FightOutcome, SessionListener};
use serde::Serialize;

pub const DEFAULT_SCRIPT: &str = "money+,money+,money+,power+,health-,fight";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Trace {
    pub steps: Vec<TraceStep>,
    pub outcome: Option<FightOutcome>,
}

/// Lines rendered by one button press.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TraceStep {
    pub action: String,
    pub lines: Vec<String>,
    /// The scene was frozen by an earlier fight.
    #[serde(skip_serializing_if = "is_false")]
    pub ignored: bool,
}

fn is_false(flag: &bool) -> bool {
    !*flag
}

#[derive(Clone, Default)]
struct Transcript(Rc<RefCell<Vec<String>>>);

impl Transcript {
    fn take(&self) -> Vec<String> {
        std::mem::take(&mut *self.0.borrow_mut())
    }
}

impl SessionListener for Transcript {
    fn stat_changed(&mut self, _kind: DataType, _value: i64, label: &str) {
        self.0.borrow_mut().push(label.to_owned());
    }

    fn enemy_power_changed(&mut self, _power: i64, label: &str) {
        self.0.borrow_mut().push(label.to_owned());
    }

    fn fight_resolved(&mut self, outcome: FightOutcome, player_power: i64, enemy_power: i64) {
        self.0
            .borrow_mut()
            .push(format!("{outcome}: player {player_power}, enemy {enemy_power}"));
    }
}

pub fn parse_script(script: &str) -> battle_core::Result<Vec<Action>> {
    script
        .split(',')
        .filter(|token| !token.trim().is_empty())
        .map(str::parse)
        .collect()
}

/// Replays `script` against a fresh session built from `config`.
pub fn replay(config: &BattleConfig, script: &str) -> battle_core::Result<Trace> {
    let actions = parse_script(script)?;
    let transcript = Transcript::default();
    let mut session = BattleSession::new(config);
    let mut steps = Vec::with_capacity(actions.len());
    {
        let mut active = session.bind(transcript.clone());
        for action in actions {
            let ignored = active.press(action).is_none();
            steps.push(TraceStep {
                action: action.to_string(),
                lines: transcript.take(),
                ignored,
            });
        }
    }
    Ok(Trace {
        steps,
        outcome: session.outcome(),
    })
}
