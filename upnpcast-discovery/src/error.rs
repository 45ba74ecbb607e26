//! Error types for the discovery system.

use std::fmt;

use soap_client::ContextError;

/// Error type for discovery and device description operations.
#[derive(Debug)]
pub enum DiscoveryError {
    /// Network-related errors (socket creation, HTTP requests, etc.)
    NetworkError(String),
    /// Parsing errors (XML, SSDP response, etc.)
    ParseError(String),
    /// The advertised location is not an absolute http(s) URL
    InvalidLocation(String),
    /// A service URL in the description could not be resolved
    InvalidServiceUrl { field: &'static str, url: String },
    /// The device is not a usable media renderer
    InvalidDevice(String),
    /// Search finished without a single usable renderer
    NoDeviceAvailable,
    /// The caller cancelled the call context
    Cancelled,
    /// The call context deadline passed
    DeadlineExceeded,
}

impl DiscoveryError {
    /// Cancellation and deadline errors abort a search instead of skipping a device.
    pub fn is_context_error(&self) -> bool {
        matches!(self, DiscoveryError::Cancelled | DiscoveryError::DeadlineExceeded)
    }
}

impl fmt::Display for DiscoveryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DiscoveryError::NetworkError(msg) => write!(f, "Network error: {}", msg),
            DiscoveryError::ParseError(msg) => write!(f, "Parse error: {}", msg),
            DiscoveryError::InvalidLocation(url) => write!(f, "Invalid device location: {}", url),
            DiscoveryError::InvalidServiceUrl { field, url } => {
                write!(f, "Invalid {}: {:?}", field, url)
            }
            DiscoveryError::InvalidDevice(msg) => write!(f, "Invalid device: {}", msg),
            DiscoveryError::NoDeviceAvailable => write!(f, "No media renderer available"),
            DiscoveryError::Cancelled => write!(f, "Operation cancelled"),
            DiscoveryError::DeadlineExceeded => write!(f, "Operation deadline exceeded"),
        }
    }
}

impl std::error::Error for DiscoveryError {}

impl From<ContextError> for DiscoveryError {
    fn from(error: ContextError) -> Self {
        match error {
            ContextError::Cancelled => DiscoveryError::Cancelled,
            ContextError::DeadlineExceeded => DiscoveryError::DeadlineExceeded,
        }
    }
}

/// Convenience Result type alias for discovery operations.
pub type Result<T> = std::result::Result<T, DiscoveryError>;
