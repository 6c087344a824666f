//! Engine-independent battle scene logic: player stats, enemy power, fight outcome.

pub mod config;
pub mod display;
pub mod enemy;
pub mod error;
pub mod fight;
pub mod report;
pub mod session;
pub mod stats;

pub use config::{BattleConfig, EnemyConfig, PlayerConfig, TelemetryConfig};
pub use display::DisplayBoard;
pub use enemy::{AttachedStats, EnemyModel, FixedPower, PowerStrategy};
pub use error::{BattleError, Result};
pub use fight::{resolve, FightOutcome};
pub use report::{BattleReport, EnemySummary, StatEntry};
pub use session::{Action, ActionResult, ActiveSession, BattleSession, SessionListener};
pub use stats::{DataType, PlayerStat, StatStore};
