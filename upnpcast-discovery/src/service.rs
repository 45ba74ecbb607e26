use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::DiscoveryError;

/// The UPnP services a media renderer may expose.
///
/// Each variant is bound to a fixed service type URN, used both to filter
/// SSDP responses and as a capability key on [`Renderer`](crate::Renderer).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ServiceType {
    /// AVTransport service - Controls playback (play, pause, stop, seek, etc.)
    AVTransport,

    /// RenderingControl service - Controls audio rendering (volume, mute)
    RenderingControl,

    /// ConnectionManager service - Reports supported protocols
    ConnectionManager,
}

impl ServiceType {
    pub const ALL: [ServiceType; 3] = [
        ServiceType::AVTransport,
        ServiceType::RenderingControl,
        ServiceType::ConnectionManager,
    ];

    /// Get the name of this service as a string
    pub fn name(&self) -> &'static str {
        match self {
            ServiceType::AVTransport => "AVTransport",
            ServiceType::RenderingControl => "RenderingControl",
            ServiceType::ConnectionManager => "ConnectionManager",
        }
    }

    /// The service type URN used in SSDP, device descriptions and SOAPAction headers
    pub fn urn(&self) -> &'static str {
        match self {
            ServiceType::AVTransport => "urn:schemas-upnp-org:service:AVTransport:1",
            ServiceType::RenderingControl => "urn:schemas-upnp-org:service:RenderingControl:1",
            ServiceType::ConnectionManager => "urn:schemas-upnp-org:service:ConnectionManager:1",
        }
    }

    pub fn from_urn(urn: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|service| service.urn() == urn.trim())
    }
}

impl fmt::Display for ServiceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.urn())
    }
}

impl FromStr for ServiceType {
    type Err = DiscoveryError;

    /// Accepts either the full URN or the bare service name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_urn(s)
            .or_else(|| Self::ALL.into_iter().find(|service| service.name() == s))
            .ok_or_else(|| DiscoveryError::ParseError(format!("Unknown service type: {}", s)))
    }
}
