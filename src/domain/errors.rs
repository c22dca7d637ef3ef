use std::fmt;

// Domain-level errors for the collect-info workflow.
#[derive(Debug, PartialEq, Eq)]
pub enum CollectInfoError {
    // The log sink refused or failed to record the value.
    Sink(String),
}

impl fmt::Display for CollectInfoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CollectInfoError::Sink(message) => write!(f, "failed to record info: {message}"),
        }
    }
}

impl std::error::Error for CollectInfoError {}
