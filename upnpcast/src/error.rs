use soap_client::SoapError;
use thiserror::Error;
use upnpcast_discovery::{DiscoveryError, ServiceType};
use upnpcast_dlna::DlnaError;

/// High-level API errors for renderer control
///
/// Lower-level SOAP, metadata and discovery errors are folded into this enum
/// so callers match on one type.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Network communication error
    ///
    /// The renderer could not be reached, the connection broke, or it
    /// answered with an HTTP error status that carried no SOAP fault.
    #[error("Network error: {0}")]
    NetworkError(String),

    /// Response parsing error
    ///
    /// The renderer answered but the envelope or one of its values could
    /// not be decoded into the expected shape.
    #[error("Parse error: {0}")]
    ParseError(String),

    /// SOAP fault returned by the renderer
    #[error("SOAP fault: error code {code} ({description})")]
    SoapFault { code: u16, description: String },

    /// Invalid parameter value
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// The renderer does not expose the service the client needs
    #[error("Renderer does not support {}", .0.name())]
    UnsupportedService(ServiceType),

    /// The caller cancelled the call context
    #[error("Operation cancelled")]
    Cancelled,

    /// The call context deadline passed
    #[error("Operation deadline exceeded")]
    DeadlineExceeded,

    /// Clock value or content feature could not be built or parsed
    #[error("Metadata error: {0}")]
    Metadata(#[from] DlnaError),

    #[error("Discovery error: {0}")]
    Discovery(#[from] DiscoveryError),
}

impl ApiError {
    /// Returns true for cancellation and deadline errors
    pub fn is_context_error(&self) -> bool {
        matches!(self, ApiError::Cancelled | ApiError::DeadlineExceeded)
    }
}

/// Type alias for results that can return an ApiError
pub type Result<T> = std::result::Result<T, ApiError>;

/// Convert from SoapError to ApiError
impl From<SoapError> for ApiError {
    fn from(error: SoapError) -> Self {
        match error {
            SoapError::Network(msg) => ApiError::NetworkError(msg),
            SoapError::HttpStatus(status) => {
                ApiError::NetworkError(format!("HTTP status {}", status))
            }
            SoapError::Parse(msg) => ApiError::ParseError(msg),
            SoapError::Fault { code, description } => ApiError::SoapFault { code, description },
            SoapError::Cancelled => ApiError::Cancelled,
            SoapError::DeadlineExceeded => ApiError::DeadlineExceeded,
        }
    }
}
