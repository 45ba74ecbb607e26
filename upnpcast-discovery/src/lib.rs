//! UPnP media renderer discovery
//!
//! Finds Digital Media Renderers on the local network with SSDP, fetches their
//! device descriptions and reports which control services they expose.
//!
//! # Quick Start
//!
//! ```no_run
//! use std::time::Duration;
//! use upnpcast_discovery::{search, ServiceType};
//!
//! let renderers = search(Duration::from_secs(3), &[ServiceType::RenderingControl])?;
//! for renderer in renderers {
//!     println!("Found {} ({})", renderer.friendly_name(), renderer.model_name());
//! }
//! # Ok::<(), upnpcast_discovery::DiscoveryError>(())
//! ```
//!
//! A renderer whose location is already known can be described directly:
//!
//! ```no_run
//! use soap_client::CallContext;
//! use upnpcast_discovery::fetch;
//!
//! let renderer = fetch(&CallContext::background(), "http://192.168.1.20:9197/dmr")?;
//! println!("{:?}", renderer.services());
//! # Ok::<(), upnpcast_discovery::DiscoveryError>(())
//! ```

mod config;
pub mod device;
mod discovery;
mod error;
mod renderer;
mod service;
mod ssdp;

use std::time::Duration;

use soap_client::CallContext;

pub use config::DiscoveryConfig;
pub use discovery::Discovery;
pub use error::{DiscoveryError, Result};
pub use renderer::{Renderer, ServiceEndpoint};
pub use service::ServiceType;
pub use ssdp::{SsdpResponse, SsdpTransport, UdpSsdpTransport};

/// Search for renderers with the default configuration.
///
/// Collects SSDP replies for `timeout` and returns every renderer supporting
/// all of `required`, in the order they first answered.
pub fn search(timeout: Duration, required: &[ServiceType]) -> Result<Vec<Renderer>> {
    Discovery::new()?.search(&CallContext::background(), timeout, required)
}

/// Fetch and parse the device description at `location`.
pub fn fetch(ctx: &CallContext, location: &str) -> Result<Renderer> {
    Discovery::new()?.fetch(ctx, location)
}
