use std::path::PathBuf;
use thiserror::Error;

use super::{CipherListError, CurveError};

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read policy file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse policy file '{path}': {message}")]
    ParseError { path: PathBuf, message: String },

    #[error("unsupported policy format: {format} (expected json or yaml)")]
    UnsupportedFormat { format: String },

    #[error(transparent)]
    CipherList(#[from] CipherListError),

    #[error(transparent)]
    Curves(#[from] CurveError),
}

impl ConfigError {
    pub fn read_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::ReadError {
            path: path.into(),
            source,
        }
    }

    pub fn parse_error(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::ParseError {
            path: path.into(),
            message: message.into(),
        }
    }

    pub fn unsupported_format(format: impl Into<String>) -> Self {
        Self::UnsupportedFormat {
            format: format.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error_display() {
        let err = ConfigError::parse_error("/etc/tls/policy.yaml", "missing field");
        assert_eq!(
            err.to_string(),
            "failed to parse policy file '/etc/tls/policy.yaml': missing field"
        );
    }

    #[test]
    fn test_unsupported_format_display() {
        let err = ConfigError::unsupported_format("toml");
        assert_eq!(
            err.to_string(),
            "unsupported policy format: toml (expected json or yaml)"
        );
    }

    #[test]
    fn test_curve_error_is_transparent() {
        let err: ConfigError = CurveError::unknown_curve("P-999").into();
        assert_eq!(err.to_string(), "unknown curve: P-999");
    }
}
