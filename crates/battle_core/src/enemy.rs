//! Enemy power derived from the player's stats.

use std::collections::BTreeSet;
use std::fmt;

use tracing::{debug, trace};

use crate::stats::{DataType, PlayerStat, StatStore};

/// Read-only view over the stats an enemy currently observes.
pub struct AttachedStats<'a> {
    store: &'a StatStore,
    keys: &'a BTreeSet<DataType>,
}

impl<'a> AttachedStats<'a> {
    /// Value of `kind` if it is attached.
    pub fn get(&self, kind: DataType) -> Option<i64> {
        self.keys.contains(&kind).then(|| self.store.get(kind))
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a PlayerStat> + '_ {
        self.keys.iter().map(move |kind| self.store.stat(*kind))
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}

/// Formula producing the enemy's combat power.
pub trait PowerStrategy {
    fn calc_power(&self, stats: &AttachedStats<'_>) -> i64;
}

impl<F> PowerStrategy for F
where
    F: Fn(&AttachedStats<'_>) -> i64,
{
    fn calc_power(&self, stats: &AttachedStats<'_>) -> i64 {
        self(stats)
    }
}

/// Constant power, ignoring the attached stats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedPower(pub i64);

impl PowerStrategy for FixedPower {
    fn calc_power(&self, _stats: &AttachedStats<'_>) -> i64 {
        self.0
    }
}

pub struct EnemyModel {
    name: String,
    attached: BTreeSet<DataType>,
    strategy: Box<dyn PowerStrategy>,
}

impl EnemyModel {
    pub fn new(name: impl Into<String>, strategy: impl PowerStrategy + 'static) -> Self {
        Self {
            name: name.into(),
            attached: BTreeSet::new(),
            strategy: Box::new(strategy),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Registers a back-reference to `stat`. The stat stays owned by its store.
    pub fn attach(&mut self, stat: &PlayerStat) {
        if self.attached.insert(stat.kind()) {
            debug!(target: "battle_core.enemy", enemy = %self.name, kind = %stat.kind(), "stat attached");
        }
    }

    /// Drops the back-reference to `stat`; no-op if it was never attached.
    pub fn detach(&mut self, stat: &PlayerStat) {
        if self.attached.remove(&stat.kind()) {
            debug!(target: "battle_core.enemy", enemy = %self.name, kind = %stat.kind(), "stat detached");
        }
    }

    pub fn is_attached(&self, kind: DataType) -> bool {
        self.attached.contains(&kind)
    }

    pub fn attached(&self) -> impl Iterator<Item = DataType> + '_ {
        self.attached.iter().copied()
    }

    /// Recomputed on every call.
    pub fn calc_power(&self, store: &StatStore) -> i64 {
        let view = AttachedStats {
            store,
            keys: &self.attached,
        };
        let power = self.strategy.calc_power(&view);
        trace!(target: "battle_core.enemy", enemy = %self.name, power, attached = view.len(), "enemy power");
        power
    }

    pub fn power_label(&self, store: &StatStore) -> String {
        format!("Enemy Power {}", self.calc_power(store))
    }
}

impl fmt::Debug for EnemyModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EnemyModel")
            .field("name", &self.name)
            .field("attached", &self.attached)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_power_ignores_stats() {
        let mut store = StatStore::new();
        let enemy = EnemyModel::new("Enemy Flappy", FixedPower(7));
        assert_eq!(7, enemy.calc_power(&store));
        store.increment(DataType::Power);
        assert_eq!(7, enemy.calc_power(&store));
        assert_eq!("Enemy Power 7", enemy.power_label(&store));
    }

    #[test]
    fn attach_then_detach_keeps_power() {
        let store = StatStore::with_values([3, 1, 4, 1]);
        let mut enemy = EnemyModel::new("Enemy Flappy", FixedPower(10));
        let before = enemy.calc_power(&store);
        for stat in store.iter() {
            enemy.attach(stat);
        }
        for stat in store.iter() {
            enemy.detach(stat);
        }
        assert_eq!(before, enemy.calc_power(&store));
        assert_eq!(0, enemy.attached().count());
    }

    #[test]
    fn detach_is_idempotent() {
        let store = StatStore::new();
        let mut enemy = EnemyModel::new("Enemy Flappy", FixedPower(0));
        let armor = store.stat(DataType::Armor);
        enemy.detach(armor);
        enemy.attach(armor);
        enemy.attach(armor);
        enemy.detach(armor);
        enemy.detach(armor);
        assert!(!enemy.is_attached(DataType::Armor));
    }

    #[test]
    fn strategy_sees_only_attached_stats() {
        let mut store = StatStore::with_values([0, 5, 2, 3]);
        let mut enemy = EnemyModel::new("Brute", |stats: &AttachedStats<'_>| {
            stats.iter().map(PlayerStat::value).sum::<i64>()
        });
        enemy.attach(store.stat(DataType::Power));
        enemy.attach(store.stat(DataType::Armor));
        assert_eq!(5, enemy.calc_power(&store));

        store.increment(DataType::Power);
        assert_eq!(6, enemy.calc_power(&store));

        enemy.detach(store.stat(DataType::Armor));
        assert_eq!(3, enemy.calc_power(&store));
    }

    #[test]
    fn attached_view_hides_other_keys() {
        let store = StatStore::with_values([9, 0, 0, 0]);
        let mut enemy = EnemyModel::new("Scout", |stats: &AttachedStats<'_>| {
            stats.get(DataType::Money).unwrap_or(-1)
        });
        assert_eq!(-1, enemy.calc_power(&store));
        enemy.attach(store.stat(DataType::Money));
        assert_eq!(9, enemy.calc_power(&store));
    }
}
