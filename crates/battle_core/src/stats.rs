//! Player stat counters keyed by [`DataType`].

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{BattleError, Result};

const STEP: i64 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum DataType {
    Money,
    Health,
    Power,
    Armor,
}

impl DataType {
    pub const ALL: [DataType; 4] = [
        DataType::Money,
        DataType::Health,
        DataType::Power,
        DataType::Armor,
    ];

    pub fn index(self) -> usize {
        match self {
            DataType::Money => 0,
            DataType::Health => 1,
            DataType::Power => 2,
            DataType::Armor => 3,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            DataType::Money => "Money",
            DataType::Health => "Health",
            DataType::Power => "Power",
            DataType::Armor => "Armor",
        }
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for DataType {
    type Err = BattleError;

    fn from_str(s: &str) -> Result<Self> {
        let key = s.trim();
        DataType::ALL
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(key))
            .ok_or_else(|| BattleError::InvalidKey(key.to_owned()))
    }
}

impl TryFrom<usize> for DataType {
    type Error = BattleError;

    fn try_from(index: usize) -> Result<Self> {
        DataType::ALL
            .get(index)
            .copied()
            .ok_or_else(|| BattleError::InvalidKey(index.to_string()))
    }
}

/// A single named counter. Values are signed and never clamped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerStat {
    kind: DataType,
    value: i64,
}

impl PlayerStat {
    pub fn new(kind: DataType, value: i64) -> Self {
        Self { kind, value }
    }

    pub fn kind(&self) -> DataType {
        self.kind
    }

    pub fn value(&self) -> i64 {
        self.value
    }
}

/// Exactly one [`PlayerStat`] per [`DataType`], stored by ordinal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatStore {
    stats: [PlayerStat; 4],
}

impl Default for StatStore {
    fn default() -> Self {
        Self::with_values([0; 4])
    }
}

impl StatStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starting values in [`DataType::ALL`] order.
    pub fn with_values(values: [i64; 4]) -> Self {
        Self {
            stats: DataType::ALL.map(|kind| PlayerStat::new(kind, values[kind.index()])),
        }
    }

    pub fn increment(&mut self, kind: DataType) -> i64 {
        self.add(kind, STEP)
    }

    pub fn decrement(&mut self, kind: DataType) -> i64 {
        self.add(kind, -STEP)
    }

    pub fn get(&self, kind: DataType) -> i64 {
        self.stat(kind).value
    }

    pub fn stat(&self, kind: DataType) -> &PlayerStat {
        &self.stats[kind.index()]
    }

    pub fn display_label(&self, kind: DataType) -> String {
        format!("Player {kind} {}", self.get(kind))
    }

    /// Looks a stat up by its textual key, e.g. `"money"`.
    pub fn lookup(&self, key: &str) -> Result<&PlayerStat> {
        let kind: DataType = key.parse()?;
        Ok(self.stat(kind))
    }

    /// Looks a stat up by ordinal.
    pub fn lookup_index(&self, index: usize) -> Result<&PlayerStat> {
        let kind = DataType::try_from(index)?;
        Ok(self.stat(kind))
    }

    pub fn iter(&self) -> impl Iterator<Item = &PlayerStat> {
        self.stats.iter()
    }

    fn add(&mut self, kind: DataType, delta: i64) -> i64 {
        let stat = &mut self.stats[kind.index()];
        stat.value = stat.value.wrapping_add(delta);
        debug!(target: "battle_core.stats", kind = %kind, value = stat.value, delta, "stat updated");
        stat.value
    }
}
