//! ConnectionManager actions

use serde::Serialize;
use soap_client::SoapResponse;

use crate::define_upnp_action;
use crate::error::ApiError;

/// Protocols a renderer can send and receive, from `GetProtocolInfo`
///
/// Each entry is one `protocol:network:contentFormat:additionalInfo` tuple,
/// e.g. `http-get:*:video/mp4:*`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct ProtocolInfo {
    pub source: Vec<String>,
    pub sink: Vec<String>,
}

impl ProtocolInfo {
    /// Whether the sink list advertises `mime` (content format match only)
    pub fn accepts(&self, mime: &str) -> bool {
        self.sink.iter().any(|entry| {
            entry
                .split(':')
                .nth(2)
                .is_some_and(|format| format == "*" || format.eq_ignore_ascii_case(mime))
        })
    }
}

define_upnp_action! {
    action: GetProtocolInfo,
    service: ConnectionManager,
    request: {},
    arguments: |_req| [],
    response: ProtocolInfo,
    decode: true,
    parse: |response| parse_protocol_info(response),
}

fn parse_protocol_info(response: &SoapResponse) -> Result<ProtocolInfo, ApiError> {
    Ok(ProtocolInfo {
        source: split_list(response.get("Source").unwrap_or_default()),
        sink: split_list(response.require("Sink")?),
    })
}

fn split_list(list: &str) -> Vec<String> {
    list.split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::operation::UpnpAction;
    use soap_client::envelope;

    #[test]
    fn test_get_protocol_info_envelope() {
        let xml = envelope::encode(
            GetProtocolInfoAction::SERVICE.urn(),
            GetProtocolInfoAction::ACTION,
            &GetProtocolInfoAction::arguments(&GetProtocolInfoRequest {}),
        );
        assert!(xml.contains(
            r#"<s:Body><u:GetProtocolInfo xmlns:u="urn:schemas-upnp-org:service:ConnectionManager:1"></u:GetProtocolInfo></s:Body>"#
        ));
    }

    #[test]
    fn test_parse_protocol_info() {
        let xml = r#"<s:Envelope xmlns:s="http://schemas.xmlsoap.org/soap/envelope/"><s:Body><u:GetProtocolInfoResponse xmlns:u="urn:schemas-upnp-org:service:ConnectionManager:1"><Source></Source><Sink>http-get:*:video/mp4:DLNA.ORG_PN=AVC_MP4_BL_CIF15_AAC_520, http-get:*:audio/mpeg:*,,http-get:*:image/jpeg:*</Sink></u:GetProtocolInfoResponse></s:Body></s:Envelope>"#;
        let response = envelope::decode(xml, "GetProtocolInfo").unwrap();
        let info = GetProtocolInfoAction::parse_response(&response).unwrap();

        assert!(info.source.is_empty());
        assert_eq!(info.sink.len(), 3);
        assert_eq!(info.sink[1], "http-get:*:audio/mpeg:*");
        assert!(info.accepts("video/mp4"));
        assert!(info.accepts("IMAGE/JPEG"));
        assert!(!info.accepts("video/x-matroska"));
    }
}
