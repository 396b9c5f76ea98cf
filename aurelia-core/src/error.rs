//! Structured error types for the Aurelia toolkit.

use thiserror::Error;

/// Unified error type for all Aurelia operations.
#[derive(Debug, Error)]
pub enum AureliaError {
    /// Mutation position outside the valid unit-index bounds of a sequence.
    #[error("position out of range: {0}")]
    OutOfRange(String),

    /// Mutation value not a member of the sequence's alphabet.
    #[error("invalid unit: {0}")]
    InvalidUnit(String),

    /// Invalid identifier or payload handed to a strict constructor.
    #[error("construction error: {0}")]
    Construction(String),
}

/// Convenience alias used throughout the Aurelia crates.
pub type Result<T> = std::result::Result<T, AureliaError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_failed_precondition() {
        let err = AureliaError::OutOfRange("index 7 exceeds length 4".into());
        assert_eq!(err.to_string(), "position out of range: index 7 exceeds length 4");

        let err = AureliaError::InvalidUnit("'X' is not a DNA base".into());
        assert!(err.to_string().contains("not a DNA base"));
    }
}
