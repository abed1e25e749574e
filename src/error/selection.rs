use thiserror::Error;

use super::ParseError;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CipherListError {
    #[error("invalid cipher rule: {0}")]
    Parse(#[from] ParseError),

    #[error("no cipher suites matched the rule")]
    EmptySelection,
}

impl CipherListError {
    pub fn is_parse_error(&self) -> bool {
        matches!(self, Self::Parse(_))
    }

    pub fn is_empty_selection(&self) -> bool {
        matches!(self, Self::EmptySelection)
    }
}
