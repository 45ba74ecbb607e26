//! Device description fetching and parsing.
//!
//! A description is decoded against
//! `root/device/{friendlyName, modelName, serviceList/service[]}` and turned
//! into a [`Renderer`] by resolving each known service's URLs against the
//! location the description was fetched from.

use reqwest::header::CONNECTION;
use serde::Deserialize;
use soap_client::CallContext;
use tracing::debug;
use url::{Position, Url};

use crate::config::DiscoveryConfig;
use crate::error::{DiscoveryError, Result};
use crate::renderer::{Renderer, ServiceEndpoint};
use crate::service::ServiceType;

/// UPnP device description root element.
#[derive(Debug, Deserialize)]
pub struct Root {
    pub device: DeviceDescription,
}

/// Device description parsed from XML.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceDescription {
    #[serde(default)]
    pub device_type: String,
    #[serde(default)]
    pub friendly_name: String,
    #[serde(default)]
    pub manufacturer: Option<String>,
    #[serde(default)]
    pub model_name: String,
    #[serde(rename = "UDN", default)]
    pub udn: Option<String>,
    #[serde(default)]
    pub service_list: ServiceList,
}

#[derive(Debug, Default, Deserialize)]
pub struct ServiceList {
    #[serde(rename = "service", default)]
    pub services: Vec<ServiceDescription>,
}

/// One `<service>` entry of the service list.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceDescription {
    pub service_type: String,
    #[serde(default)]
    pub service_id: String,
    #[serde(rename = "controlURL", default)]
    pub control_url: Option<String>,
    #[serde(rename = "eventSubURL", default)]
    pub event_sub_url: Option<String>,
}

impl DeviceDescription {
    /// Parse device description from XML.
    ///
    /// # Errors
    ///
    /// Returns `DiscoveryError::ParseError` if the XML is malformed or has no `device` element.
    pub fn from_xml(xml: &str) -> Result<Self> {
        let root: Root = quick_xml::de::from_str(xml)
            .map_err(|e| DiscoveryError::ParseError(format!("Failed to parse device XML: {}", e)))?;

        Ok(root.device)
    }

    /// Build a renderer from this description fetched at `location`.
    ///
    /// Services with unknown types are ignored. A renderer without a usable
    /// AVTransport service is rejected.
    pub fn to_renderer(&self, location: &Url) -> Result<Renderer> {
        let mut renderer = Renderer::new(
            location.clone(),
            self.friendly_name.trim().to_string(),
            self.model_name.trim().to_string(),
        );

        for service in &self.service_list.services {
            let Some(service_type) = ServiceType::from_urn(&service.service_type) else {
                continue;
            };
            let (control_field, event_field) = url_fields(service_type);

            let control_url =
                resolve_service_url(location, service.control_url.as_deref(), control_field)?;
            let Some(control_url) = control_url else {
                continue;
            };
            let event_sub_url =
                resolve_service_url(location, service.event_sub_url.as_deref(), event_field)?;

            renderer.set_endpoint(service_type, ServiceEndpoint::new(control_url, event_sub_url));
        }

        if !renderer.supports(ServiceType::AVTransport) {
            return Err(DiscoveryError::InvalidDevice("not a valid renderer".to_string()));
        }

        Ok(renderer)
    }
}

fn url_fields(service: ServiceType) -> (&'static str, &'static str) {
    match service {
        ServiceType::AVTransport => ("AVTransportControlURL", "AVTransportEventSubURL"),
        ServiceType::RenderingControl => ("RenderingControlURL", "RenderingControlEventSubURL"),
        ServiceType::ConnectionManager => ("ConnectionManagerURL", "ConnectionManagerEventSubURL"),
    }
}

/// Validate a location URL before any request is made.
pub fn parse_location(location: &str) -> Result<Url> {
    let url = Url::parse(location.trim())
        .map_err(|_| DiscoveryError::InvalidLocation(location.to_string()))?;

    if !matches!(url.scheme(), "http" | "https") || !url.has_host() {
        return Err(DiscoveryError::InvalidLocation(location.to_string()));
    }
    Ok(url)
}

/// Resolve a service URL from a description against the device location.
///
/// Absolute http(s) URLs are kept. Anything else is a path on the location's
/// scheme, host and port, with a leading `/` added when missing, so
/// `MediaRenderer:AVTransport/control` resolves like any other path. Empty
/// values resolve to `None`.
pub fn resolve_service_url(
    location: &Url,
    raw: Option<&str>,
    field: &'static str,
) -> Result<Option<Url>> {
    let Some(raw) = raw.map(str::trim).filter(|raw| !raw.is_empty()) else {
        return Ok(None);
    };

    let invalid = || DiscoveryError::InvalidServiceUrl {
        field,
        url: raw.to_string(),
    };

    if has_http_scheme(raw) {
        return match Url::parse(raw) {
            Ok(absolute) if absolute.has_host() => Ok(Some(absolute)),
            _ => Err(invalid()),
        };
    }

    let path = if raw.starts_with('/') {
        raw.to_string()
    } else {
        format!("/{}", raw)
    };
    let origin = &location[..Position::BeforePath];

    let resolved = Url::parse(&format!("{}{}", origin, path)).map_err(|_| invalid())?;
    if !resolved.has_host() {
        return Err(invalid());
    }
    Ok(Some(resolved))
}

fn has_http_scheme(raw: &str) -> bool {
    ["http://", "https://"].iter().any(|scheme| {
        raw.get(..scheme.len())
            .is_some_and(|prefix| prefix.eq_ignore_ascii_case(scheme))
    })
}

/// Fetch the description at `location` and build a renderer from it.
pub(crate) fn fetch_with(
    http: &reqwest::blocking::Client,
    config: &DiscoveryConfig,
    ctx: &CallContext,
    location: &str,
) -> Result<Renderer> {
    let location = parse_location(location)?;
    ctx.check()?;

    debug!(%location, "fetching device description");
    let response = http
        .get(location.clone())
        .header(CONNECTION, "close")
        .timeout(ctx.clamp(config.http_timeout))
        .send()
        .and_then(|response| response.error_for_status());

    let response = match response {
        Ok(response) => response,
        Err(e) => {
            ctx.check()?;
            return Err(DiscoveryError::NetworkError(format!(
                "Failed to fetch device description: {}",
                e
            )));
        }
    };

    let xml = response
        .text()
        .map_err(|e| DiscoveryError::NetworkError(format!("Failed to read response body: {}", e)))?;
    ctx.check()?;

    DeviceDescription::from_xml(&xml)?.to_renderer(&location)
}
