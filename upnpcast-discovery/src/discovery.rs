//! Renderer search.
//!
//! A search runs in four steps:
//! 1. Send one SSDP M-SEARCH and collect replies for the whole timeout
//! 2. Keep replies advertising AVTransport, de-duplicated by location
//! 3. Fetch and parse each device description, skipping devices that fail
//! 4. Drop renderers missing one of the required services

use std::time::Duration;

use indexmap::IndexSet;
use soap_client::CallContext;
use tracing::{debug, info, warn};

use crate::config::DiscoveryConfig;
use crate::device;
use crate::error::{DiscoveryError, Result};
use crate::renderer::Renderer;
use crate::service::ServiceType;
use crate::ssdp::{SsdpResponse, SsdpTransport, UdpSsdpTransport};

/// Discovers media renderers through an [`SsdpTransport`].
///
/// # Examples
///
/// ```no_run
/// use std::time::Duration;
/// use soap_client::CallContext;
/// use upnpcast_discovery::{Discovery, ServiceType};
///
/// let discovery = Discovery::new()?;
/// let ctx = CallContext::with_timeout(Duration::from_secs(10));
/// for renderer in discovery.search(&ctx, Duration::from_secs(3), &[ServiceType::RenderingControl])? {
///     println!("{} ({})", renderer.friendly_name(), renderer.location());
/// }
/// # Ok::<(), upnpcast_discovery::DiscoveryError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Discovery<T: SsdpTransport = UdpSsdpTransport> {
    transport: T,
    http: reqwest::blocking::Client,
    config: DiscoveryConfig,
}

impl Discovery<UdpSsdpTransport> {
    pub fn new() -> Result<Self> {
        Self::with_config(DiscoveryConfig::default())
    }

    pub fn with_config(config: DiscoveryConfig) -> Result<Self> {
        let transport = UdpSsdpTransport::new(config.user_agent.clone());
        Self::with_transport(transport, config)
    }
}

impl<T: SsdpTransport> Discovery<T> {
    /// Use a custom SSDP transport, e.g. canned responses in tests.
    pub fn with_transport(transport: T, config: DiscoveryConfig) -> Result<Self> {
        let http = reqwest::blocking::Client::builder()
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(|e| {
                DiscoveryError::NetworkError(format!("Failed to create HTTP client: {}", e))
            })?;

        Ok(Self {
            transport,
            http,
            config,
        })
    }

    pub fn config(&self) -> &DiscoveryConfig {
        &self.config
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Fetch one device description and build a renderer from it.
    ///
    /// Unlike [`search`](Self::search), every failure is returned to the caller.
    pub fn fetch(&self, ctx: &CallContext, location: &str) -> Result<Renderer> {
        device::fetch_with(&self.http, &self.config, ctx, location)
    }

    /// Search the network for renderers supporting every type in `required`.
    ///
    /// Devices that fail to answer or describe themselves are skipped. Fails
    /// with [`DiscoveryError::NoDeviceAvailable`] when nothing usable remains,
    /// and immediately when `ctx` is cancelled or past its deadline.
    pub fn search(
        &self,
        ctx: &CallContext,
        timeout: Duration,
        required: &[ServiceType],
    ) -> Result<Vec<Renderer>> {
        ctx.check()?;
        let responses = self
            .transport
            .search(&self.config.search_target, ctx.clamp(timeout))?;
        ctx.check()?;

        let locations = renderer_locations(&responses);
        debug!(
            responses = responses.len(),
            candidates = locations.len(),
            "SSDP search finished"
        );

        let mut renderers = Vec::new();
        for location in locations {
            let renderer = match self.fetch(ctx, location) {
                Ok(renderer) => renderer,
                Err(e) if e.is_context_error() => return Err(e),
                Err(e) => {
                    warn!(%location, error = %e, "skipping device");
                    continue;
                }
            };

            if let Some(missing) = required.iter().find(|service| !renderer.supports(**service)) {
                debug!(
                    %location,
                    service = missing.name(),
                    "skipping renderer without required service"
                );
                continue;
            }
            renderers.push(renderer);
        }

        if renderers.is_empty() {
            return Err(DiscoveryError::NoDeviceAvailable);
        }

        info!(count = renderers.len(), "discovered media renderers");
        Ok(renderers)
    }
}

/// Locations of replies advertising AVTransport, in first-seen order
fn renderer_locations(responses: &[SsdpResponse]) -> IndexSet<&str> {
    responses
        .iter()
        .filter(|response| response.search_target.trim() == ServiceType::AVTransport.urn())
        .map(|response| response.location.as_str())
        .collect()
}
