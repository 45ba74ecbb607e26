use soap_client::{CallContext, SoapClient};
use tracing::debug;
use upnpcast_discovery::ServiceType;
use upnpcast_dlna::{build_metadata, seconds_to_clock, MediaItem};

use crate::client::ServiceClient;
use crate::error::{ApiError, Result};
use crate::operations::av_transport::*;

/// Client for a renderer's AVTransport service
///
/// Usually obtained with
/// [`RendererExt::av_transport_client`](crate::RendererExt::av_transport_client).
#[derive(Debug, Clone)]
pub struct AvTransportClient {
    client: ServiceClient,
}

impl AvTransportClient {
    pub fn new(control_url: impl Into<String>) -> Self {
        Self::with_soap_client(SoapClient::new(), control_url)
    }

    pub fn with_soap_client(soap_client: SoapClient, control_url: impl Into<String>) -> Self {
        Self {
            client: ServiceClient::with_soap_client(
                soap_client,
                ServiceType::AVTransport,
                control_url,
            ),
        }
    }

    pub fn control_url(&self) -> &str {
        self.client.control_url()
    }

    pub fn play(&self, ctx: &CallContext) -> Result<()> {
        self.client.execute::<PlayAction>(ctx, &PlayRequest {})
    }

    pub fn pause(&self, ctx: &CallContext) -> Result<()> {
        self.client.execute::<PauseAction>(ctx, &PauseRequest {})
    }

    pub fn stop(&self, ctx: &CallContext) -> Result<()> {
        self.client.execute::<StopAction>(ctx, &StopRequest {})
    }

    /// Seek to `rel_secs` seconds from the start of the current track
    pub fn seek(&self, ctx: &CallContext, rel_secs: u64) -> Result<()> {
        let request = SeekRequest {
            target: seconds_to_clock(rel_secs),
        };
        self.client.execute::<SeekAction>(ctx, &request)
    }

    /// Load `item` as the current media, with DIDL-Lite metadata built from it
    pub fn set_media(&self, ctx: &CallContext, item: &MediaItem) -> Result<()> {
        let request = SetAVTransportURIRequest {
            current_uri: media_url(item)?,
            current_uri_metadata: build_metadata(item),
        };
        debug!(uri = %request.current_uri, "setting transport media");
        self.client.execute::<SetAVTransportURIAction>(ctx, &request)
    }

    /// Queue `item` to play after the current media
    pub fn set_next_media(&self, ctx: &CallContext, item: &MediaItem) -> Result<()> {
        let request = SetNextAVTransportURIRequest {
            next_uri: media_url(item)?,
            next_uri_metadata: build_metadata(item),
        };
        debug!(uri = %request.next_uri, "setting next transport media");
        self.client.execute::<SetNextAVTransportURIAction>(ctx, &request)
    }

    pub fn get_transport_info(&self, ctx: &CallContext) -> Result<TransportInfo> {
        self.client.execute::<GetTransportInfoAction>(ctx, &GetTransportInfoRequest {})
    }

    /// Current track duration and position; unparsable clock values are errors.
    pub fn get_position_info(&self, ctx: &CallContext) -> Result<PositionInfo> {
        self.client.execute::<GetPositionInfoAction>(ctx, &GetPositionInfoRequest {})
    }

    pub fn get_media_info(&self, ctx: &CallContext) -> Result<MediaInfo> {
        self.client.execute::<GetMediaInfoAction>(ctx, &GetMediaInfoRequest {})
    }
}

fn media_url(item: &MediaItem) -> Result<String> {
    if item.url.trim().is_empty() {
        return Err(ApiError::InvalidParameter("media URL is required".to_string()));
    }
    Ok(item.url.clone())
}
