//! # upnpcast-dlna
//!
//! DLNA metadata needed to make playback requests acceptable to renderer
//! firmware: `REL_TIME` clock strings, `contentFeatures.dlna.org` strings
//! and DIDL-Lite item metadata.
//!
//! ```rust
//! use upnpcast_dlna::{build_metadata, MediaItem};
//!
//! let item = MediaItem::new("http://10.0.0.2:3500/a.mp4", "video/mp4").seekable(true);
//! let didl = build_metadata(&item);
//! assert!(didl.contains("object.item.videoItem.movie"));
//! ```

pub mod clock;
pub mod content_features;
pub mod didl;
pub mod error;
mod media;
pub mod xml_decode;

pub use clock::{clock_to_seconds, format_clock_time, parse_duration, seconds_to_clock};
pub use content_features::{build_content_features, DlnaFlags, SeekFlag};
pub use didl::{build_metadata, DidlItem, DidlLite, DidlResource, UpnpClass};
pub use error::{DlnaError, DlnaResult};
pub use media::MediaItem;
