use soap_client::{CallContext, SoapClient, SoapResponse};
use tracing::debug;
use upnpcast_discovery::ServiceType;

use crate::error::{ApiError, Result};
use crate::operation::{metadata, UpnpAction};

/// Executes [`UpnpAction`]s against one service control URL
///
/// This is the bridge between the stateless action definitions and the
/// network. The typed service clients wrap one of these each.
#[derive(Debug, Clone)]
pub struct ServiceClient {
    soap_client: SoapClient,
    service: ServiceType,
    control_url: String,
}

impl ServiceClient {
    /// Create a client with the default SOAP configuration (10 s timeout)
    pub fn new(service: ServiceType, control_url: impl Into<String>) -> Self {
        Self::with_soap_client(SoapClient::new(), service, control_url)
    }

    /// Create a client with a custom SOAP client (for advanced use cases)
    pub fn with_soap_client(
        soap_client: SoapClient,
        service: ServiceType,
        control_url: impl Into<String>,
    ) -> Self {
        Self {
            soap_client,
            service,
            control_url: control_url.into(),
        }
    }

    pub fn service(&self) -> ServiceType {
        self.service
    }

    pub fn control_url(&self) -> &str {
        &self.control_url
    }

    /// Execute an action against the bound control URL
    ///
    /// # Example
    /// ```rust,no_run
    /// use soap_client::CallContext;
    /// use upnpcast::client::ServiceClient;
    /// use upnpcast::operations::av_transport::{GetTransportInfoAction, GetTransportInfoRequest};
    /// use upnpcast::ServiceType;
    ///
    /// let url = "http://192.168.1.20:9197/upnp/control/AVTransport1";
    /// let client = ServiceClient::new(ServiceType::AVTransport, url);
    /// let ctx = CallContext::background();
    /// let info = client.execute::<GetTransportInfoAction>(&ctx, &GetTransportInfoRequest {})?;
    /// println!("{}", info.state);
    /// # Ok::<(), upnpcast::ApiError>(())
    /// ```
    pub fn execute<A: UpnpAction>(
        &self,
        ctx: &CallContext,
        request: &A::Request,
    ) -> Result<A::Response> {
        if A::SERVICE != self.service {
            return Err(ApiError::UnsupportedService(A::SERVICE));
        }

        let meta = metadata::<A>();
        debug!(
            service = meta.service,
            action = meta.action,
            url = %self.control_url,
            "executing action"
        );

        let arguments = A::arguments(request);
        let urn = A::SERVICE.urn();

        if A::DECODE_RESPONSE {
            let response = self
                .soap_client
                .invoke(ctx, &self.control_url, urn, A::ACTION, &arguments)?;
            A::parse_response(&response)
        } else {
            self.soap_client
                .call(ctx, &self.control_url, urn, A::ACTION, &arguments)?;
            A::parse_response(&SoapResponse::default())
        }
    }
}
