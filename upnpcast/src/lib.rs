//! Control point for UPnP/DLNA media renderers
//!
//! Discover smart TVs and DLNA speakers, load media into them and drive
//! playback through their AVTransport, RenderingControl and ConnectionManager
//! services.
//!
//! Every call is one blocking request bound to a [`CallContext`], which can
//! carry a deadline and a [`CancelToken`].
//!
//! ```rust,no_run
//! use std::time::Duration;
//! use upnpcast::{search, CallContext, MediaItem, RendererExt};
//!
//! let renderers = search(Duration::from_secs(3), &[])?;
//! let transport = renderers[0].av_transport_client()?;
//!
//! let ctx = CallContext::with_timeout(Duration::from_secs(15));
//! let item = MediaItem::new("http://192.168.1.10:3500/movie.mp4", "video/mp4")
//!     .with_title("Movie")
//!     .seekable(true);
//! transport.set_media(&ctx, &item)?;
//! transport.play(&ctx)?;
//! transport.seek(&ctx, 90)?;
//! # Ok::<(), upnpcast::ApiError>(())
//! ```

pub mod client;
pub mod error;
pub mod logging;
pub mod operation;
pub mod operations;
mod renderer;
pub mod services;

#[doc(hidden)]
pub use paste::paste as __paste;

pub use client::ServiceClient;
pub use error::{ApiError, Result};
pub use operation::UpnpAction;
pub use operations::av_transport::{MediaInfo, PositionInfo, TransportInfo, TransportState};
pub use operations::connection_manager::ProtocolInfo;
pub use renderer::RendererExt;
pub use services::{AvTransportClient, ConnectionManagerClient, RenderingControlClient};

pub use soap_client::{CallContext, CancelToken, ClientConfig, SoapClient, SoapResponse};
pub use upnpcast_discovery::{
    fetch, search, Discovery, DiscoveryConfig, DiscoveryError, Renderer, ServiceType,
};
pub use upnpcast_dlna::{DlnaError, MediaItem};
