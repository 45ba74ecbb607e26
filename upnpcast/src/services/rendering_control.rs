use soap_client::{CallContext, SoapClient};
use upnpcast_discovery::ServiceType;

use crate::client::ServiceClient;
use crate::error::Result;
use crate::operations::rendering_control::*;

/// Client for a renderer's RenderingControl service (master channel)
#[derive(Debug, Clone)]
pub struct RenderingControlClient {
    client: ServiceClient,
}

impl RenderingControlClient {
    pub fn new(control_url: impl Into<String>) -> Self {
        Self::with_soap_client(SoapClient::new(), control_url)
    }

    pub fn with_soap_client(soap_client: SoapClient, control_url: impl Into<String>) -> Self {
        Self {
            client: ServiceClient::with_soap_client(
                soap_client,
                ServiceType::RenderingControl,
                control_url,
            ),
        }
    }

    pub fn control_url(&self) -> &str {
        self.client.control_url()
    }

    pub fn get_mute(&self, ctx: &CallContext) -> Result<bool> {
        self.client.execute::<GetMuteAction>(ctx, &GetMuteRequest {})
    }

    pub fn set_mute(&self, ctx: &CallContext, muted: bool) -> Result<()> {
        self.client
            .execute::<SetMuteAction>(ctx, &SetMuteRequest { desired_mute: muted })
    }

    /// Current volume, negative values reported as 0
    pub fn get_volume(&self, ctx: &CallContext) -> Result<u16> {
        self.client.execute::<GetVolumeAction>(ctx, &GetVolumeRequest {})
    }

    pub fn set_volume(&self, ctx: &CallContext, volume: u16) -> Result<()> {
        self.client
            .execute::<SetVolumeAction>(ctx, &SetVolumeRequest { desired_volume: volume })
    }
}
