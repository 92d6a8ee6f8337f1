//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Invalid dilemma: {0}")]
    InvalidDilemma(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let error = DomainError::InvalidDilemma("title must not be blank".to_string());
        assert_eq!(error.to_string(), "Invalid dilemma: title must not be blank");
    }
}
