//! Errors raised by strand generation, parsing and population building.

/// Errors for the specimen model
#[derive(Debug, thiserror::Error)]
pub enum DnaError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Invalid base symbol: {0:?} (expected one of A, T, C, G)")]
    InvalidBase(char),

    #[error("Configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, DnaError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = DnaError::InvalidArgument("length must be positive".into());
        assert_eq!(err.to_string(), "Invalid argument: length must be positive");

        let err = DnaError::InvalidBase('X');
        assert!(err.to_string().contains("'X'"));
    }
}
