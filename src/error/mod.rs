mod config;
mod curve;
mod parser;
mod selection;

pub use config::ConfigError;
pub use curve::CurveError;
pub use parser::ParseError;
pub use selection::CipherListError;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    CipherList(#[from] CipherListError),

    #[error(transparent)]
    Curve(#[from] CurveError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl From<ParseError> for Error {
    fn from(err: ParseError) -> Self {
        Self::CipherList(err.into())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    fn rule_offset(err: &Error) -> Option<usize> {
        match err {
            Error::CipherList(CipherListError::Parse(ParseError::MissingSelector { offset, .. })) => {
                Some(*offset)
            }
            _ => None,
        }
    }

    #[test]
    fn test_parse_error_converts_through_cipher_list() {
        let err: Error = ParseError::missing_selector('!', 3).into();
        assert_eq!(rule_offset(&err), Some(3));
        assert_eq!(
            err.to_string(),
            CipherListError::from(ParseError::missing_selector('!', 3)).to_string()
        );
    }

    #[test]
    fn test_question_mark_converts() {
        fn compile_empty() -> Result<()> {
            let compiled: std::result::Result<(), CipherListError> =
                Err(CipherListError::EmptySelection);
            compiled?;
            Ok(())
        }
        fn unknown_curve() -> Result<()> {
            let parsed: std::result::Result<(), CurveError> = Err(CurveError::unknown_curve("RSA"));
            parsed?;
            Ok(())
        }

        assert!(matches!(
            compile_empty(),
            Err(Error::CipherList(CipherListError::EmptySelection))
        ));
        let err = unknown_curve().unwrap_err();
        assert!(matches!(err, Error::Curve(CurveError::UnknownCurve { .. })));
        assert_eq!(err.to_string(), "unknown curve: RSA");
    }
}
