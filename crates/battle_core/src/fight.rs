//! Fight resolution between player power and enemy power.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::info;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FightOutcome {
    Victory,
    Defeat,
}

impl FightOutcome {
    pub fn is_victory(self) -> bool {
        self == FightOutcome::Victory
    }
}

impl fmt::Display for FightOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FightOutcome::Victory => f.write_str("Victory"),
            FightOutcome::Defeat => f.write_str("Defeat"),
        }
    }
}

/// Ties go to the player.
pub fn resolve(player_power: i64, enemy_power: i64) -> FightOutcome {
    let outcome = if player_power >= enemy_power {
        FightOutcome::Victory
    } else {
        FightOutcome::Defeat
    };
    info!(target: "battle_core.fight", player_power, enemy_power, %outcome, "fight resolved");
    outcome
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn known_cases() {
        assert_eq!(FightOutcome::Victory, resolve(5, 5));
        assert_eq!(FightOutcome::Defeat, resolve(4, 5));
        assert_eq!(FightOutcome::Victory, resolve(-1, -2));
        assert_eq!(FightOutcome::Defeat, resolve(i64::MIN, i64::MAX));
    }

    proptest! {
        #[test]
        fn victory_iff_player_at_least_enemy(p in any::<i64>(), e in any::<i64>()) {
            prop_assert_eq!(p >= e, resolve(p, e).is_victory());
        }
    }
}
