use crate::session::RuleId;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    IO(#[from] std::io::Error),
    #[error(transparent)]
    YAML(#[from] serde_yaml::Error),
    #[error("rule `{0}` is defined more than once")]
    DuplicateRule(RuleId),
}

pub type Result<T> = std::result::Result<T, Error>;
