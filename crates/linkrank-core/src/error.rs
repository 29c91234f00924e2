//! Error types for linkrank

use thiserror::Error;

/// Result type alias using LinkRankError
pub type Result<T> = std::result::Result<T, LinkRankError>;

/// Error type alias for convenience
pub type Error = LinkRankError;

/// Exit codes for CLI
pub mod exit_codes {
    pub const SUCCESS: i32 = 0;
    pub const GENERAL_ERROR: i32 = 1;
    pub const CANCELLED: i32 = 2;
    pub const INVALID_INPUT: i32 = 3;
}

/// Main error type for linkrank
#[derive(Debug, Error)]
pub enum LinkRankError {
    #[error("Malformed input on line {line}: expected `source target`, got {content:?}")]
    MalformedInput { line: usize, content: String },

    #[error("Graph has no nodes")]
    EmptyGraph,

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("Estimation cancelled")]
    Cancelled,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

impl LinkRankError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Cancelled => exit_codes::CANCELLED,
            Self::MalformedInput { .. }
            | Self::EmptyGraph
            | Self::InvalidParameter(_)
            | Self::Config(_)
            | Self::Yaml(_) => exit_codes::INVALID_INPUT,
            _ => exit_codes::GENERAL_ERROR,
        }
    }

    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        Self::InvalidParameter(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        let malformed = LinkRankError::MalformedInput {
            line: 3,
            content: "onlyonetoken".to_string(),
        };
        assert_eq!(malformed.exit_code(), exit_codes::INVALID_INPUT);
        assert_eq!(LinkRankError::Cancelled.exit_code(), exit_codes::CANCELLED);
        assert_eq!(
            LinkRankError::Io(std::io::Error::other("boom")).exit_code(),
            exit_codes::GENERAL_ERROR
        );
    }

    #[test]
    fn test_config_errors_are_invalid_input() {
        let yaml = serde_yaml::from_str::<u64>("[1, 2]").unwrap_err();
        assert_eq!(LinkRankError::from(yaml).exit_code(), exit_codes::INVALID_INPUT);
        assert_eq!(
            LinkRankError::Config("bad seed".to_string()).exit_code(),
            exit_codes::INVALID_INPUT
        );
    }

    #[test]
    fn test_malformed_message_names_line() {
        let err = LinkRankError::MalformedInput {
            line: 7,
            content: "a b c".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("line 7"));
        assert!(msg.contains("a b c"));
    }
}
