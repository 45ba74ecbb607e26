//! Error types for the SOAP client

use thiserror::Error;

use crate::context::ContextError;

/// Errors that can occur during SOAP communication
#[derive(Debug, Error)]
pub enum SoapError {
    /// Network or HTTP communication error
    #[error("Network/HTTP error: {0}")]
    Network(String),

    /// Non-success HTTP status without a SOAP fault body
    #[error("Unexpected HTTP status {0}")]
    HttpStatus(u16),

    /// XML parsing error
    #[error("XML parsing error: {0}")]
    Parse(String),

    /// SOAP fault returned by the device
    #[error("SOAP fault: error code {code} ({description})")]
    Fault { code: u16, description: String },

    /// The caller cancelled the call context
    #[error("Call cancelled")]
    Cancelled,

    /// The call context deadline passed before the call completed
    #[error("Call deadline exceeded")]
    DeadlineExceeded,
}

impl From<ContextError> for SoapError {
    fn from(error: ContextError) -> Self {
        match error {
            ContextError::Cancelled => SoapError::Cancelled,
            ContextError::DeadlineExceeded => SoapError::DeadlineExceeded,
        }
    }
}
