//! DIDL-Lite metadata.
//!
//! [`build_metadata`] produces the fragment sent as `CurrentURIMetaData` /
//! `NextURIMetaData`. [`DidlLite::from_xml`] reads such fragments back, both
//! our own and the `TrackMetaData` renderers report.

mod builder;
mod parser;

pub use builder::{
    build_metadata, UpnpClass, DC_NAMESPACE, DIDL_NAMESPACE, SEC_NAMESPACE, UPNP_NAMESPACE,
};
pub use parser::{DidlCaption, DidlItem, DidlLite, DidlResource};
