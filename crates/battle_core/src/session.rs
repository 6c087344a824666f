//! A single battle scene: player stats, one enemy, and the rendered labels.

use std::fmt;
use std::ops::Deref;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::config::BattleConfig;
use crate::display::DisplayBoard;
use crate::enemy::EnemyModel;
use crate::error::{BattleError, Result};
use crate::fight::{self, FightOutcome};
use crate::stats::{DataType, StatStore};

/// One button press.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    Increase(DataType),
    Decrease(DataType),
    Fight,
}

impl FromStr for Action {
    type Err = BattleError;

    /// Accepts `fight`, `<stat>+` and `<stat>-`.
    fn from_str(s: &str) -> Result<Self> {
        let token = s.trim();
        if token.eq_ignore_ascii_case("fight") {
            return Ok(Action::Fight);
        }
        if let Some(key) = token.strip_suffix('+') {
            return Ok(Action::Increase(key.parse()?));
        }
        if let Some(key) = token.strip_suffix('-') {
            return Ok(Action::Decrease(key.parse()?));
        }
        Err(BattleError::InvalidAction(token.to_owned()))
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Increase(kind) => write!(f, "{}+", kind.name().to_lowercase()),
            Action::Decrease(kind) => write!(f, "{}-", kind.name().to_lowercase()),
            Action::Fight => f.write_str("fight"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionResult {
    StatChanged { kind: DataType, value: i64 },
    Fought(FightOutcome),
}

/// Callbacks a presentation layer registers for the lifetime of a scene.
pub trait SessionListener {
    fn stat_changed(&mut self, _kind: DataType, _value: i64, _label: &str) {}

    fn enemy_power_changed(&mut self, _power: i64, _label: &str) {}

    fn fight_resolved(&mut self, _outcome: FightOutcome, _player_power: i64, _enemy_power: i64) {}
}

impl SessionListener for () {}

impl<L: SessionListener + ?Sized> SessionListener for &mut L {
    fn stat_changed(&mut self, kind: DataType, value: i64, label: &str) {
        (**self).stat_changed(kind, value, label);
    }

    fn enemy_power_changed(&mut self, power: i64, label: &str) {
        (**self).enemy_power_changed(power, label);
    }

    fn fight_resolved(&mut self, outcome: FightOutcome, player_power: i64, enemy_power: i64) {
        (**self).fight_resolved(outcome, player_power, enemy_power);
    }
}

#[derive(Debug)]
pub struct BattleSession {
    stats: StatStore,
    enemy: EnemyModel,
    board: DisplayBoard,
    outcome: Option<FightOutcome>,
    actions_applied: usize,
}

impl BattleSession {
    pub fn new(config: &BattleConfig) -> Self {
        Self::with_parts(config.build_store(), config.build_enemy())
    }

    /// Attaches every stat to `enemy`.
    pub fn with_parts(stats: StatStore, mut enemy: EnemyModel) -> Self {
        for stat in stats.iter() {
            enemy.attach(stat);
        }
        info!(target: "battle_core.session", enemy = enemy.name(), "session started");
        Self {
            stats,
            enemy,
            board: DisplayBoard::new(),
            outcome: None,
            actions_applied: 0,
        }
    }

    pub fn stats(&self) -> &StatStore {
        &self.stats
    }

    pub fn enemy(&self) -> &EnemyModel {
        &self.enemy
    }

    pub fn board(&self) -> &DisplayBoard {
        &self.board
    }

    pub fn enemy_power(&self) -> i64 {
        self.enemy.calc_power(&self.stats)
    }

    /// Outcome of the most recent fight.
    pub fn outcome(&self) -> Option<FightOutcome> {
        self.outcome
    }

    /// A fight has been resolved; the scene would stop its clock here.
    pub fn is_frozen(&self) -> bool {
        self.outcome.is_some()
    }

    pub fn actions_applied(&self) -> usize {
        self.actions_applied
    }

    pub fn increase(&mut self, kind: DataType) -> i64 {
        self.change(kind, true, &mut ())
    }

    pub fn decrease(&mut self, kind: DataType) -> i64 {
        self.change(kind, false, &mut ())
    }

    pub fn fight(&mut self) -> FightOutcome {
        self.resolve_fight(&mut ())
    }

    pub fn apply(&mut self, action: Action) -> ActionResult {
        self.dispatch(action, &mut ())
    }

    /// Registers `listener` until the returned guard is dropped. Dropping the
    /// guard also tears the session down.
    pub fn bind<'a>(&'a mut self, listener: impl SessionListener + 'a) -> ActiveSession<'a> {
        debug!(target: "battle_core.session", "listener bound");
        ActiveSession {
            session: self,
            listener: Box::new(listener),
        }
    }

    /// Detaches every stat from the enemy.
    pub fn teardown(&mut self) {
        for stat in self.stats.iter() {
            self.enemy.detach(stat);
        }
        info!(
            target: "battle_core.session",
            enemy = self.enemy.name(),
            actions = self.actions_applied,
            outcome = ?self.outcome,
            "session torn down"
        );
    }

    fn dispatch(&mut self, action: Action, listener: &mut dyn SessionListener) -> ActionResult {
        match action {
            Action::Increase(kind) => ActionResult::StatChanged {
                kind,
                value: self.change(kind, true, listener),
            },
            Action::Decrease(kind) => ActionResult::StatChanged {
                kind,
                value: self.change(kind, false, listener),
            },
            Action::Fight => ActionResult::Fought(self.resolve_fight(listener)),
        }
    }

    fn change(&mut self, kind: DataType, up: bool, listener: &mut dyn SessionListener) -> i64 {
        let value = if up {
            self.stats.increment(kind)
        } else {
            self.stats.decrement(kind)
        };
        self.actions_applied += 1;

        let label = self.stats.display_label(kind);
        listener.stat_changed(kind, value, &label);
        self.board.set_stat_line(kind, label);

        let power = self.enemy_power();
        let enemy_label = format!("Enemy Power {power}");
        listener.enemy_power_changed(power, &enemy_label);
        self.board.set_enemy_line(enemy_label);
        value
    }

    fn resolve_fight(&mut self, listener: &mut dyn SessionListener) -> FightOutcome {
        let player_power = self.stats.get(DataType::Power);
        let enemy_power = self.enemy_power();
        let outcome = fight::resolve(player_power, enemy_power);
        self.actions_applied += 1;
        self.outcome = Some(outcome);
        listener.fight_resolved(outcome, player_power, enemy_power);
        outcome
    }
}

/// A session with a listener attached. Mutations go through the guard so the
/// listener sees every change.
pub struct ActiveSession<'a> {
    session: &'a mut BattleSession,
    listener: Box<dyn SessionListener + 'a>,
}

impl ActiveSession<'_> {
    pub fn increase(&mut self, kind: DataType) -> i64 {
        self.session.change(kind, true, self.listener.as_mut())
    }

    pub fn decrease(&mut self, kind: DataType) -> i64 {
        self.session.change(kind, false, self.listener.as_mut())
    }

    pub fn fight(&mut self) -> FightOutcome {
        self.session.resolve_fight(self.listener.as_mut())
    }

    pub fn apply(&mut self, action: Action) -> ActionResult {
        self.session.dispatch(action, self.listener.as_mut())
    }

    /// Like [`apply`](Self::apply), but a frozen scene ignores the press and
    /// returns `None`.
    pub fn press(&mut self, action: Action) -> Option<ActionResult> {
        if self.session.is_frozen() {
            warn!(target: "battle_core.session", %action, "scene frozen after fight, ignoring");
            return None;
        }
        Some(self.apply(action))
    }
}

impl Deref for ActiveSession<'_> {
    type Target = BattleSession;

    fn deref(&self) -> &BattleSession {
        &*self.session
    }
}

impl Drop for ActiveSession<'_> {
    fn drop(&mut self) {
        debug!(target: "battle_core.session", "listener released");
        self.session.teardown();
    }
}
