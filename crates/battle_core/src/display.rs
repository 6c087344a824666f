//! Last rendered text per stat, plus the enemy power line.

use crate::error::Result;
use crate::stats::DataType;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DisplayBoard {
    stat_lines: [String; 4],
    enemy_line: String,
}

impl DisplayBoard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_stat_line(&mut self, kind: DataType, text: String) {
        self.stat_lines[kind.index()] = text;
    }

    pub fn set_enemy_line(&mut self, text: String) {
        self.enemy_line = text;
    }

    /// Empty until the stat changes for the first time.
    pub fn stat_line(&self, kind: DataType) -> &str {
        &self.stat_lines[kind.index()]
    }

    pub fn enemy_line(&self) -> &str {
        &self.enemy_line
    }

    pub fn line_for_key(&self, key: &str) -> Result<&str> {
        let kind: DataType = key.parse()?;
        Ok(self.stat_line(kind))
    }

    pub fn line_for_index(&self, index: usize) -> Result<&str> {
        let kind = DataType::try_from(index)?;
        Ok(self.stat_line(kind))
    }

    pub fn lines(&self) -> impl Iterator<Item = (DataType, &str)> {
        DataType::ALL
            .into_iter()
            .map(move |kind| (kind, self.stat_line(kind)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::BattleError;

    #[test]
    fn lines_start_empty() {
        let board = DisplayBoard::new();
        assert!(board.lines().all(|(_, line)| line.is_empty()));
        assert_eq!("", board.enemy_line());
    }

    #[test]
    fn lookup_by_key_and_index() {
        let mut board = DisplayBoard::new();
        board.set_stat_line(DataType::Power, "Player Power 2".into());
        assert_eq!("Player Power 2", board.line_for_key("power").unwrap());
        assert_eq!("Player Power 2", board.line_for_index(2).unwrap());
        assert_eq!("", board.line_for_key("Money").unwrap());
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let board = DisplayBoard::new();
        assert!(matches!(
            board.line_for_key("stamina"),
            Err(BattleError::InvalidKey(_))
        ));
        assert!(matches!(
            board.line_for_index(usize::MAX),
            Err(BattleError::InvalidKey(_))
        ));
    }
}
