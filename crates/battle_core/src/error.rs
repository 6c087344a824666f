use thiserror::Error;

#[derive(Debug, Error)]
pub enum BattleError {
    /// A raw key that does not name one of the four tracked stats.
    #[error("Wrong DataType: {0:?}")]
    InvalidKey(String),

    #[error("Unrecognized action: {0:?}")]
    InvalidAction(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config error: {0}")]
    Config(#[from] toml::de::Error),

    #[error("Report error: {0}")]
    Report(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, BattleError>;
