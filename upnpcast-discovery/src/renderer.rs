use serde::Serialize;
use url::Url;

use crate::service::ServiceType;

/// Control and eventing URLs of one service on a renderer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ServiceEndpoint {
    control_url: Url,
    event_sub_url: Option<Url>,
}

impl ServiceEndpoint {
    pub(crate) fn new(control_url: Url, event_sub_url: Option<Url>) -> Self {
        Self {
            control_url,
            event_sub_url,
        }
    }

    pub fn control_url(&self) -> &Url {
        &self.control_url
    }

    pub fn event_sub_url(&self) -> Option<&Url> {
        self.event_sub_url.as_ref()
    }
}

/// A media renderer found on the network.
///
/// Built from a device description by [`fetch`](crate::fetch) or
/// [`search`](crate::search) and immutable afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Renderer {
    location: Url,
    friendly_name: String,
    model_name: String,
    av_transport: Option<ServiceEndpoint>,
    rendering_control: Option<ServiceEndpoint>,
    connection_manager: Option<ServiceEndpoint>,
}

impl Renderer {
    pub(crate) fn new(location: Url, friendly_name: String, model_name: String) -> Self {
        Self {
            location,
            friendly_name,
            model_name,
            av_transport: None,
            rendering_control: None,
            connection_manager: None,
        }
    }

    pub(crate) fn set_endpoint(&mut self, service: ServiceType, endpoint: ServiceEndpoint) {
        let slot = match service {
            ServiceType::AVTransport => &mut self.av_transport,
            ServiceType::RenderingControl => &mut self.rendering_control,
            ServiceType::ConnectionManager => &mut self.connection_manager,
        };
        *slot = Some(endpoint);
    }

    /// URL of the device description this renderer was built from
    pub fn location(&self) -> &Url {
        &self.location
    }

    pub fn friendly_name(&self) -> &str {
        &self.friendly_name
    }

    pub fn model_name(&self) -> &str {
        &self.model_name
    }

    pub fn endpoint(&self, service: ServiceType) -> Option<&ServiceEndpoint> {
        match service {
            ServiceType::AVTransport => self.av_transport.as_ref(),
            ServiceType::RenderingControl => self.rendering_control.as_ref(),
            ServiceType::ConnectionManager => self.connection_manager.as_ref(),
        }
    }

    /// Control URL of `service`, if the renderer exposes it
    pub fn control_url(&self, service: ServiceType) -> Option<&Url> {
        self.endpoint(service).map(ServiceEndpoint::control_url)
    }

    /// Whether the renderer exposes `service`.
    ///
    /// AVTransport additionally needs an event subscription URL.
    pub fn supports(&self, service: ServiceType) -> bool {
        match self.endpoint(service) {
            Some(endpoint) if service == ServiceType::AVTransport => {
                endpoint.event_sub_url.is_some()
            }
            Some(_) => true,
            None => false,
        }
    }

    /// All services this renderer supports, in [`ServiceType::ALL`] order
    pub fn services(&self) -> Vec<ServiceType> {
        ServiceType::ALL
            .into_iter()
            .filter(|service| self.supports(*service))
            .collect()
    }
}
