use std::fs;
use std::path::Path;

use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::fight::FightOutcome;
use crate::session::BattleSession;
use crate::stats::DataType;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BattleReport {
    pub id: String,
    pub timestamp: String,
    pub enemy: EnemySummary,
    pub stats: Vec<StatEntry>,
    pub actions_applied: usize,
    pub outcome: Option<FightOutcome>,
}

impl BattleReport {
    pub fn from_session(id: impl Into<String>, session: &BattleSession) -> Self {
        let stats = session
            .stats()
            .iter()
            .map(|stat| StatEntry {
                kind: stat.kind(),
                value: stat.value(),
                label: session.stats().display_label(stat.kind()),
            })
            .collect();
        Self {
            id: id.into(),
            timestamp: Utc::now().to_rfc3339(),
            enemy: EnemySummary {
                name: session.enemy().name().to_owned(),
                power: session.enemy_power(),
            },
            stats,
            actions_applied: session.actions_applied(),
            outcome: session.outcome(),
        }
    }

    pub fn read(path: &Path) -> Result<Self> {
        let data = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&data)?)
    }

    pub fn write(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, serde_json::to_string_pretty(self)?)?;
        Ok(())
    }

    pub fn stat(&self, kind: DataType) -> Option<&StatEntry> {
        self.stats.iter().find(|entry| entry.kind == kind)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct EnemySummary {
    pub name: String,
    pub power: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StatEntry {
    pub kind: DataType,
    pub value: i64,
    pub label: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::BattleConfig;

    #[test]
    fn summarizes_session() {
        let mut session = BattleSession::new(&BattleConfig::default());
        session.increase(DataType::Armor);
        session.fight();

        let report = BattleReport::from_session("run-1", &session);
        assert_eq!("run-1", report.id);
        assert_eq!("Enemy Flappy", report.enemy.name);
        assert_eq!(4, report.stats.len());
        assert_eq!(
            "Player Armor 1",
            report.stat(DataType::Armor).unwrap().label
        );
        assert_eq!(2, report.actions_applied);
        assert_eq!(Some(FightOutcome::Defeat), report.outcome);
    }

    #[test]
    fn survives_json() {
        let session = BattleSession::new(&BattleConfig::default());
        let report = BattleReport::from_session("run-2", &session);
        let json = serde_json::to_string(&report).unwrap();
        let back: BattleReport = serde_json::from_str(&json).unwrap();
        assert_eq!(report, back);
        assert!(json.contains("\"outcome\":null"));
    }
}
