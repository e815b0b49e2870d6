//! Error types for descriptor ingestion.
//!
//! Rendering itself is total: an empty or malformed value degrades to the
//! absent marker (`None`), never an error. The only fallible surface is
//! parsing filter descriptors out of JSON.

use thiserror::Error;

/// Result type for descriptor parsing.
pub type ClauseResult<T> = Result<T, ClauseError>;

/// Errors produced while ingesting filter descriptors.
#[derive(Debug, Error)]
pub enum ClauseError {
    /// The JSON descriptor did not match any known operator shape.
    #[error("invalid filter descriptor: {0}")]
    Descriptor(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::condition::Condition;

    #[test]
    fn test_descriptor_error_message() {
        let err = Condition::from_json("not json").unwrap_err();
        let ClauseError::Descriptor(_) = err;
        assert!(err.to_string().starts_with("invalid filter descriptor:"));
    }
}
