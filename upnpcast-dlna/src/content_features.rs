//! `contentFeatures.dlna.org` strings.
//!
//! The fourth field of a `protocolInfo` tells a renderer which DLNA profile
//! the stream conforms to, how it may seek, whether it is transcoded and
//! which transfer modes the server supports.

use std::fmt;
use std::str::FromStr;

use bitflags::bitflags;

use crate::error::{DlnaError, DlnaResult};

bitflags! {
    /// Primary flags of the `DLNA.ORG_FLAGS` parameter.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct DlnaFlags: u32 {
        const SENDER_PACED = 1 << 31;
        const TIME_BASED_SEEK = 1 << 30;
        const BYTE_BASED_SEEK = 1 << 29;
        const PLAY_CONTAINER = 1 << 28;
        const S0_INCREASE = 1 << 27;
        const SN_INCREASE = 1 << 26;
        const RTSP_PAUSE = 1 << 25;
        const STREAMING_TRANSFER_MODE = 1 << 24;
        const INTERACTIVE_TRANSFER_MODE = 1 << 23;
        const BACKGROUND_TRANSFER_MODE = 1 << 22;
        const CONNECTION_STALL = 1 << 21;
        const DLNA_V15 = 1 << 20;
    }
}

impl DlnaFlags {
    /// Flags advertised for every stream served to a renderer.
    pub const fn streaming() -> Self {
        Self::STREAMING_TRANSFER_MODE
            .union(Self::BACKGROUND_TRANSFER_MODE)
            .union(Self::CONNECTION_STALL)
            .union(Self::DLNA_V15)
    }

    /// Eight hex digits of primary flags followed by 24 reserved zero digits.
    pub fn to_param(self) -> String {
        format!("{:08x}{:024x}", self.bits(), 0)
    }
}

/// The `DLNA.ORG_OP` operations parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SeekFlag {
    /// `00`: no seeking
    None,
    /// `01`: byte range seeking
    ByteRange,
    /// `10`: time seeking
    TimeSeek,
    /// `11`: both
    Both,
}

impl SeekFlag {
    pub fn as_str(&self) -> &'static str {
        match self {
            SeekFlag::None => "00",
            SeekFlag::ByteRange => "01",
            SeekFlag::TimeSeek => "10",
            SeekFlag::Both => "11",
        }
    }
}

impl FromStr for SeekFlag {
    type Err = DlnaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "00" => Ok(SeekFlag::None),
            "01" => Ok(SeekFlag::ByteRange),
            "10" => Ok(SeekFlag::TimeSeek),
            "11" => Ok(SeekFlag::Both),
            other => Err(DlnaError::InvalidSeekFlag(other.to_string())),
        }
    }
}

impl fmt::Display for SeekFlag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

const PROFILES: &[(&str, &str)] = &[
    ("video/x-mkv", "MATROSKA"),
    ("video/x-matroska", "MATROSKA"),
    ("video/x-msvideo", "AVI"),
    ("video/mpeg", "MPEG1"),
    ("video/vnd.dlna.mpeg-tts", "MPEG1"),
    ("video/mp4", "AVC_MP4_MP_SD_AAC_MULT5"),
    ("video/quicktime", "AVC_MP4_MP_SD_AAC_MULT5"),
    ("video/x-m4v", "AVC_MP4_MP_SD_AAC_MULT5"),
    ("video/3gpp", "AVC_MP4_MP_SD_AAC_MULT5"),
    ("video/x-flv", "AVC_MP4_MP_SD_AAC_MULT5"),
    ("video/x-ms-wmv", "WMVHIGH_FULL"),
    ("audio/mpeg", "MP3"),
    ("image/jpeg", "JPEG_LRG"),
    ("image/png", "PNG_LRG"),
];

/// DLNA profile name (`DLNA.ORG_PN`) for a MIME type, if one is known.
pub fn dlna_profile(mime: &str) -> Option<&'static str> {
    PROFILES
        .iter()
        .find(|(known, _)| known.eq_ignore_ascii_case(mime))
        .map(|(_, profile)| *profile)
}

/// Build the content features for a stream of type `mime`.
///
/// `seek` must be one of `00`, `01`, `10`, `11`.
///
/// ```
/// let features = upnpcast_dlna::build_content_features("video/mp4", "01", false).unwrap();
/// assert_eq!(
///     features,
///     "DLNA.ORG_PN=AVC_MP4_MP_SD_AAC_MULT5;DLNA.ORG_OP=01;DLNA.ORG_CI=0;DLNA.ORG_FLAGS=01700000000000000000000000000000"
/// );
/// ```
pub fn build_content_features(mime: &str, seek: &str, transcode: bool) -> DlnaResult<String> {
    let seek: SeekFlag = seek.parse()?;
    Ok(content_features(mime, seek, transcode))
}

/// Infallible form of [`build_content_features`] for an already-typed seek flag.
pub fn content_features(mime: &str, seek: SeekFlag, transcode: bool) -> String {
    let mut features = String::new();
    if let Some(profile) = dlna_profile(mime) {
        features.push_str("DLNA.ORG_PN=");
        features.push_str(profile);
        features.push(';');
    }
    features.push_str(&format!(
        "DLNA.ORG_OP={};DLNA.ORG_CI={};DLNA.ORG_FLAGS={}",
        seek,
        u8::from(transcode),
        DlnaFlags::streaming().to_param()
    ));
    features
}
