use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::enemy::{EnemyModel, FixedPower};
use crate::error::Result;
use crate::stats::StatStore;

pub const DEFAULT_ENEMY_NAME: &str = "Enemy Flappy";
pub const DEFAULT_ENEMY_POWER: i64 = 10;
pub const DEFAULT_TRACE_FILTER: &str = "battle_core=info";

#[derive(Debug, Deserialize, Default, Clone, PartialEq)]
pub struct BattleConfig {
    #[serde(default)]
    pub player: PlayerConfig,
    #[serde(default)]
    pub enemy: EnemyConfig,
    #[serde(default)]
    pub telemetry: TelemetryConfig,
}

impl BattleConfig {
    pub fn from_path(path: &Path) -> Result<Self> {
        let data = fs::read_to_string(path)?;
        Self::from_toml_str(&data)
    }

    pub fn from_toml_str(data: &str) -> Result<Self> {
        let cfg: BattleConfig = toml::from_str(data)?;
        Ok(cfg)
    }

    pub fn build_store(&self) -> StatStore {
        StatStore::with_values(self.player.values())
    }

    pub fn build_enemy(&self) -> EnemyModel {
        EnemyModel::new(self.enemy.name(), FixedPower(self.enemy.power()))
    }
}

/// Starting values; missing entries start at zero.
#[derive(Debug, Deserialize, Default, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct PlayerConfig {
    #[serde(default)]
    pub money: i64,
    #[serde(default)]
    pub health: i64,
    #[serde(default)]
    pub power: i64,
    #[serde(default)]
    pub armor: i64,
}

impl PlayerConfig {
    pub fn values(&self) -> [i64; 4] {
        [self.money, self.health, self.power, self.armor]
    }
}

#[derive(Debug, Deserialize, Default, Clone, PartialEq, Eq)]
pub struct EnemyConfig {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub power: Option<i64>,
}

impl EnemyConfig {
    pub fn name(&self) -> &str {
        self.name.as_deref().unwrap_or(DEFAULT_ENEMY_NAME)
    }

    pub fn power(&self) -> i64 {
        self.power.unwrap_or(DEFAULT_ENEMY_POWER)
    }
}

#[derive(Debug, Deserialize, Default, Clone, PartialEq, Eq)]
pub struct TelemetryConfig {
    #[serde(default)]
    pub trace_filter: Option<String>,
}

impl TelemetryConfig {
    pub fn trace_filter(&self) -> &str {
        self.trace_filter.as_deref().unwrap_or(DEFAULT_TRACE_FILTER)
    }
}
