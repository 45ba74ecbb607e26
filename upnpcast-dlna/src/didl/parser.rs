use serde::{Deserialize, Serialize};

use crate::error::DlnaResult;
use crate::xml_decode;

/// Decoded `CurrentURIMetaData` / `NextURIMetaData` document.
///
/// Only the first `<item>` is kept, which is all a renderer ever reports:
/// ```xml
/// <DIDL-Lite xmlns:dc="http://purl.org/dc/elements/1.1/" ...>
///   <item id="1" parentID="0" restricted="1">
///     <dc:title>Movie</dc:title>
///     <upnp:class>object.item.videoItem.movie</upnp:class>
///     <res duration="01:30:00" protocolInfo="http-get:*:video/mp4:*">uri</res>
///   </item>
/// </DIDL-Lite>
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename = "DIDL-Lite")]
pub struct DidlLite {
    #[serde(rename = "item")]
    pub item: DidlItem,
}

impl DidlLite {
    /// Parse DIDL-Lite XML, ignoring namespace prefixes.
    pub fn from_xml(xml: &str) -> DlnaResult<Self> {
        xml_decode::parse(xml)
    }
}

/// The media item being described.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct DidlItem {
    #[serde(rename = "@id", default)]
    pub id: String,

    #[serde(rename = "@parentID", default)]
    pub parent_id: String,

    #[serde(rename = "@restricted", default)]
    pub restricted: Option<String>,

    /// `sec:CaptionInfo`
    #[serde(rename = "CaptionInfo", default)]
    pub caption_info: Option<DidlCaption>,

    /// `sec:CaptionInfoEx`
    #[serde(rename = "CaptionInfoEx", default)]
    pub caption_info_ex: Option<DidlCaption>,

    #[serde(rename = "title", default)]
    pub title: Option<String>,

    /// Item class (e.g., object.item.videoItem.movie)
    #[serde(rename = "class", default)]
    pub class: Option<String>,

    #[serde(rename = "creator", default)]
    pub creator: Option<String>,

    #[serde(rename = "album", default)]
    pub album: Option<String>,

    #[serde(rename = "albumArtURI", default)]
    pub album_art_uri: Option<String>,

    #[serde(rename = "res", default)]
    pub res: Vec<DidlResource>,
}

impl DidlItem {
    /// The media resource, as opposed to subtitle resources that follow it.
    pub fn primary_resource(&self) -> Option<&DidlResource> {
        self.res.first()
    }
}

/// A `<res>` element: one URL with its protocol info.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, Default)]
pub struct DidlResource {
    /// Clock time, `H+:MM:SS[.F+]`
    #[serde(rename = "@duration", default)]
    pub duration: Option<String>,

    #[serde(rename = "@protocolInfo", default)]
    pub protocol_info: Option<String>,

    /// The resource URI
    #[serde(rename = "$value", default)]
    pub uri: Option<String>,
}

/// Samsung caption element pointing at a subtitle file.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, Default)]
pub struct DidlCaption {
    #[serde(rename = "@type", default)]
    pub kind: Option<String>,

    #[serde(rename = "$value", default)]
    pub uri: Option<String>,
}
