use soap_client::{CallContext, SoapClient};
use upnpcast_discovery::ServiceType;

use crate::client::ServiceClient;
use crate::error::Result;
use crate::operations::connection_manager::{
    GetProtocolInfoAction, GetProtocolInfoRequest, ProtocolInfo,
};

/// Client for a renderer's ConnectionManager service
#[derive(Debug, Clone)]
pub struct ConnectionManagerClient {
    client: ServiceClient,
}

impl ConnectionManagerClient {
    pub fn new(control_url: impl Into<String>) -> Self {
        Self::with_soap_client(SoapClient::new(), control_url)
    }

    pub fn with_soap_client(soap_client: SoapClient, control_url: impl Into<String>) -> Self {
        Self {
            client: ServiceClient::with_soap_client(
                soap_client,
                ServiceType::ConnectionManager,
                control_url,
            ),
        }
    }

    pub fn control_url(&self) -> &str {
        self.client.control_url()
    }

    pub fn get_protocol_info(&self, ctx: &CallContext) -> Result<ProtocolInfo> {
        self.client
            .execute::<GetProtocolInfoAction>(ctx, &GetProtocolInfoRequest {})
    }
}
