use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("operator '{operator}' at offset {offset} is missing a selector")]
    MissingSelector { operator: char, offset: usize },

    #[error("unknown directive '@{directive}' at offset {offset}")]
    UnknownDirective { directive: String, offset: usize },

    #[error("invalid command character '{found}' at offset {offset}")]
    InvalidCommand { found: char, offset: usize },

    #[error("invalid character '{found}' in selector at offset {offset}")]
    InvalidCharacter { found: char, offset: usize },

    #[error("unbalanced bracket at offset {offset}")]
    UnbalancedBracket { offset: usize },

    #[error("nested bracket at offset {offset}")]
    NestedBracket { offset: usize },

    #[error("empty name in bracket group at offset {offset}")]
    EmptyGroup { offset: usize },

    #[error("operator '{operator}' not allowed inside bracket group at offset {offset}")]
    OperatorInGroup { operator: char, offset: usize },

    #[error("special operators cannot be combined with bracket groups")]
    GroupWithOperators,
}

impl ParseError {
    pub fn missing_selector(operator: char, offset: usize) -> Self {
        Self::MissingSelector { operator, offset }
    }

    pub fn unknown_directive(directive: impl Into<String>, offset: usize) -> Self {
        Self::UnknownDirective {
            directive: directive.into(),
            offset,
        }
    }

    pub fn invalid_command(found: char, offset: usize) -> Self {
        Self::InvalidCommand { found, offset }
    }

    pub fn invalid_character(found: char, offset: usize) -> Self {
        Self::InvalidCharacter { found, offset }
    }

    pub fn unbalanced_bracket(offset: usize) -> Self {
        Self::UnbalancedBracket { offset }
    }

    pub fn operator_in_group(operator: char, offset: usize) -> Self {
        Self::OperatorInGroup { operator, offset }
    }

    /// Byte offset into the rule string where the error was detected, if any.
    pub fn offset(&self) -> Option<usize> {
        match self {
            Self::MissingSelector { offset, .. }
            | Self::UnknownDirective { offset, .. }
            | Self::InvalidCommand { offset, .. }
            | Self::InvalidCharacter { offset, .. }
            | Self::UnbalancedBracket { offset }
            | Self::NestedBracket { offset }
            | Self::EmptyGroup { offset }
            | Self::OperatorInGroup { offset, .. } => Some(*offset),
            Self::GroupWithOperators => None,
        }
    }
}
