//! Error types for DLNA metadata handling

use thiserror::Error;

/// Errors produced while building or parsing DLNA metadata
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DlnaError {
    /// Seek flag outside `00`, `01`, `10`, `11`
    #[error("Invalid seek flag: {0:?}")]
    InvalidSeekFlag(String),

    /// Clock string that is not a valid `HH:MM:SS` (or `MM:SS` for durations)
    #[error("Invalid clock format: {0:?}")]
    InvalidClockFormat(String),

    /// XML deserialization failed
    #[error("XML deserialization failed: {0}")]
    XmlDeserializationFailed(String),
}

/// Result type alias for DLNA operations
pub type DlnaResult<T> = Result<T, DlnaError>;
