use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CurveError {
    #[error("malformed curves list '{list}'")]
    MalformedCurveList { list: String },

    #[error("unknown curve: {name}")]
    UnknownCurve { name: String },
}

impl CurveError {
    pub fn malformed(list: impl Into<String>) -> Self {
        Self::MalformedCurveList { list: list.into() }
    }

    pub fn unknown_curve(name: impl Into<String>) -> Self {
        Self::UnknownCurve { name: name.into() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_malformed_display() {
        let err = CurveError::malformed("P-256::X25519");
        assert_eq!(err.to_string(), "malformed curves list 'P-256::X25519'");
    }

    #[test]
    fn test_unknown_curve_display() {
        let err = CurveError::unknown_curve("RSA");
        assert_eq!(err.to_string(), "unknown curve: RSA");
    }
}
