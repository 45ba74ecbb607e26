//! Action schema for UPnP control calls
//!
//! Every action a client can send is a type implementing [`UpnpAction`]: a
//! service, an action name, an ordered argument list and a response parser.
//! The executor in [`crate::client`] only ever sees this trait.

pub mod macros;

use soap_client::SoapResponse;
use upnpcast_discovery::ServiceType;

use crate::error::ApiError;

/// `InstanceID` sent with every AVTransport and RenderingControl action
pub const INSTANCE_ID: &str = "0";

/// Transport play speed sent with Play, Pause and Stop
pub const DEFAULT_SPEED: &str = "1";

/// RenderingControl channel used for volume and mute
pub const MASTER_CHANNEL: &str = "Master";

/// Seek unit for relative seeks
pub const SEEK_UNIT_REL_TIME: &str = "REL_TIME";

/// Base trait for all UPnP control actions
///
/// Associated types keep requests and responses typed, while the argument
/// order lives in one place per action.
pub trait UpnpAction {
    /// The typed request data
    type Request;

    /// The typed response data
    type Response;

    /// The UPnP service this action belongs to
    const SERVICE: ServiceType;

    /// The SOAP action name, used both in the envelope and the `SOAPAction` header
    const ACTION: &'static str;

    /// Whether the response envelope is decoded.
    ///
    /// When false, any success status completes the call and
    /// [`parse_response`](Self::parse_response) receives an empty response.
    const DECODE_RESPONSE: bool = true;

    /// Build the ordered argument list for the envelope
    fn arguments(request: &Self::Request) -> Vec<(&'static str, String)>;

    /// Convert the decoded response fields into the typed response
    fn parse_response(response: &SoapResponse) -> Result<Self::Response, ApiError>;
}

/// Service and action names, for logging
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActionMetadata {
    pub service: &'static str,
    pub action: &'static str,
}

pub fn metadata<A: UpnpAction>() -> ActionMetadata {
    ActionMetadata {
        service: A::SERVICE.name(),
        action: A::ACTION,
    }
}
