use soap_client::SoapClient;
use upnpcast_discovery::{Renderer, ServiceType};

use crate::error::{ApiError, Result};
use crate::services::{AvTransportClient, ConnectionManagerClient, RenderingControlClient};

/// Build service clients from a discovered [`Renderer`]
///
/// Each method fails with [`ApiError::UnsupportedService`] when the renderer
/// does not expose the service.
///
/// ```rust,no_run
/// use std::time::Duration;
/// use soap_client::CallContext;
/// use upnpcast::{search, RendererExt, ServiceType};
///
/// let renderers = search(Duration::from_secs(3), &[ServiceType::RenderingControl])?;
/// let volume = renderers[0]
///     .rendering_control_client()?
///     .get_volume(&CallContext::background())?;
/// println!("volume {}", volume);
/// # Ok::<(), upnpcast::ApiError>(())
/// ```
pub trait RendererExt {
    fn av_transport_client(&self) -> Result<AvTransportClient>;
    fn rendering_control_client(&self) -> Result<RenderingControlClient>;
    fn connection_manager_client(&self) -> Result<ConnectionManagerClient>;
}

impl RendererExt for Renderer {
    fn av_transport_client(&self) -> Result<AvTransportClient> {
        let url = supported_control_url(self, ServiceType::AVTransport)?;
        Ok(AvTransportClient::with_soap_client(SoapClient::new(), url))
    }

    fn rendering_control_client(&self) -> Result<RenderingControlClient> {
        let url = supported_control_url(self, ServiceType::RenderingControl)?;
        Ok(RenderingControlClient::with_soap_client(SoapClient::new(), url))
    }

    fn connection_manager_client(&self) -> Result<ConnectionManagerClient> {
        let url = supported_control_url(self, ServiceType::ConnectionManager)?;
        Ok(ConnectionManagerClient::with_soap_client(SoapClient::new(), url))
    }
}

fn supported_control_url(renderer: &Renderer, service: ServiceType) -> Result<String> {
    match renderer.control_url(service) {
        Some(url) if renderer.supports(service) => Ok(url.to_string()),
        _ => Err(ApiError::UnsupportedService(service)),
    }
}
