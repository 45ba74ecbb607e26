//! AVTransport actions: playback control and transport queries

use std::fmt;
use std::time::Duration;

use serde::Serialize;
use soap_client::SoapResponse;
use upnpcast_dlna::parse_duration;

use crate::define_upnp_action;
use crate::error::ApiError;
use crate::operation::{DEFAULT_SPEED, INSTANCE_ID, SEEK_UNIT_REL_TIME};

/// Snapshot returned by `GetTransportInfo`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TransportInfo {
    /// `CurrentTransportStatus`, e.g. `OK` or `ERROR_OCCURRED`
    pub status: String,
    /// `CurrentTransportState` as sent by the renderer
    pub state: String,
    /// `CurrentSpeed`
    pub speed: String,
}

impl TransportInfo {
    pub fn transport_state(&self) -> TransportState {
        TransportState::from(self.state.as_str())
    }
}

/// Typed `CurrentTransportState`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub enum TransportState {
    Stopped,
    Playing,
    Transitioning,
    PausedPlayback,
    PausedRecording,
    Recording,
    NoMediaPresent,
    /// Vendor-specific value
    Unknown(String),
}

impl TransportState {
    pub fn as_str(&self) -> &str {
        match self {
            TransportState::Stopped => "STOPPED",
            TransportState::Playing => "PLAYING",
            TransportState::Transitioning => "TRANSITIONING",
            TransportState::PausedPlayback => "PAUSED_PLAYBACK",
            TransportState::PausedRecording => "PAUSED_RECORDING",
            TransportState::Recording => "RECORDING",
            TransportState::NoMediaPresent => "NO_MEDIA_PRESENT",
            TransportState::Unknown(state) => state,
        }
    }

    pub fn is_playing(&self) -> bool {
        matches!(self, TransportState::Playing)
    }
}

impl From<&str> for TransportState {
    fn from(state: &str) -> Self {
        match state.trim() {
            "STOPPED" => TransportState::Stopped,
            "PLAYING" => TransportState::Playing,
            "TRANSITIONING" => TransportState::Transitioning,
            "PAUSED_PLAYBACK" => TransportState::PausedPlayback,
            "PAUSED_RECORDING" => TransportState::PausedRecording,
            "RECORDING" => TransportState::Recording,
            "NO_MEDIA_PRESENT" => TransportState::NoMediaPresent,
            other => TransportState::Unknown(other.to_string()),
        }
    }
}

impl fmt::Display for TransportState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Track duration and playback position returned by `GetPositionInfo`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PositionInfo {
    pub duration: Duration,
    pub rel_time: Duration,
}

/// Current and next media returned by `GetMediaInfo`
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct MediaInfo {
    pub nr_tracks: u32,
    /// `MediaDuration` as sent, usually `H+:MM:SS`
    pub media_duration: String,
    pub current_uri: String,
    pub current_uri_metadata: String,
    pub next_uri: String,
    pub next_uri_metadata: String,
    pub play_medium: String,
    pub record_medium: String,
    pub write_status: String,
}

impl MediaInfo {
    /// `media_duration` parsed, if the renderer reported one
    pub fn duration(&self) -> Option<Duration> {
        parse_duration(&self.media_duration).ok()
    }
}

define_upnp_action! {
    action: Play,
    service: AVTransport,
    request: {},
    arguments: |_req| [
        "InstanceID" => INSTANCE_ID,
        "Speed" => DEFAULT_SPEED,
    ],
    response: (),
    decode: false,
    parse: |_response| Ok(()),
}

define_upnp_action! {
    action: Pause,
    service: AVTransport,
    request: {},
    arguments: |_req| [
        "InstanceID" => INSTANCE_ID,
        "Speed" => DEFAULT_SPEED,
    ],
    response: (),
    decode: false,
    parse: |_response| Ok(()),
}

define_upnp_action! {
    action: Stop,
    service: AVTransport,
    request: {},
    arguments: |_req| [
        "InstanceID" => INSTANCE_ID,
        "Speed" => DEFAULT_SPEED,
    ],
    response: (),
    decode: false,
    parse: |_response| Ok(()),
}

define_upnp_action! {
    action: Seek,
    service: AVTransport,
    request: {
        target: String,
    },
    arguments: |req| [
        "InstanceID" => INSTANCE_ID,
        "Unit" => SEEK_UNIT_REL_TIME,
        "Target" => req.target,
    ],
    response: (),
    decode: false,
    parse: |_response| Ok(()),
}

define_upnp_action! {
    action: SetAVTransportURI,
    service: AVTransport,
    request: {
        current_uri: String,
        current_uri_metadata: String,
    },
    arguments: |req| [
        "InstanceID" => INSTANCE_ID,
        "CurrentURI" => req.current_uri,
        "CurrentURIMetaData" => req.current_uri_metadata,
    ],
    response: (),
    decode: true,
    parse: |_response| Ok(()),
}

define_upnp_action! {
    action: SetNextAVTransportURI,
    service: AVTransport,
    request: {
        next_uri: String,
        next_uri_metadata: String,
    },
    arguments: |req| [
        "InstanceID" => INSTANCE_ID,
        "NextURI" => req.next_uri,
        "NextURIMetaData" => req.next_uri_metadata,
    ],
    response: (),
    decode: true,
    parse: |_response| Ok(()),
}

define_upnp_action! {
    action: GetTransportInfo,
    service: AVTransport,
    request: {},
    arguments: |_req| [
        "InstanceID" => INSTANCE_ID,
    ],
    response: TransportInfo,
    decode: true,
    parse: |response| parse_transport_info(response),
}

define_upnp_action! {
    action: GetPositionInfo,
    service: AVTransport,
    request: {},
    arguments: |_req| [
        "InstanceID" => INSTANCE_ID,
    ],
    response: PositionInfo,
    decode: true,
    parse: |response| parse_position_info(response),
}

define_upnp_action! {
    action: GetMediaInfo,
    service: AVTransport,
    request: {},
    arguments: |_req| [
        "InstanceID" => INSTANCE_ID,
    ],
    response: MediaInfo,
    decode: true,
    parse: |response| parse_media_info(response),
}

fn parse_transport_info(response: &SoapResponse) -> Result<TransportInfo, ApiError> {
    Ok(TransportInfo {
        status: response.require("CurrentTransportStatus")?.to_string(),
        state: response.require("CurrentTransportState")?.to_string(),
        speed: response.require("CurrentSpeed")?.to_string(),
    })
}

fn parse_position_info(response: &SoapResponse) -> Result<PositionInfo, ApiError> {
    let duration = parse_duration(response.require("TrackDuration")?)?;
    let rel_time = parse_duration(response.require("RelTime")?)?;
    Ok(PositionInfo { duration, rel_time })
}

fn parse_media_info(response: &SoapResponse) -> Result<MediaInfo, ApiError> {
    let field = |name: &str| response.get(name).unwrap_or_default().to_string();

    let nr_tracks = match response.get("NrTracks").map(str::trim) {
        None | Some("") => 0,
        Some(value) => value
            .parse()
            .map_err(|_| ApiError::ParseError(format!("Invalid NrTracks value: {}", value)))?,
    };

    Ok(MediaInfo {
        nr_tracks,
        media_duration: field("MediaDuration"),
        current_uri: field("CurrentURI"),
        current_uri_metadata: field("CurrentURIMetaData"),
        next_uri: field("NextURI"),
        next_uri_metadata: field("NextURIMetaData"),
        play_medium: field("PlayMedium"),
        record_medium: field("RecordMedium"),
        write_status: field("WriteStatus"),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::operation::UpnpAction;
    use rstest::rstest;
    use soap_client::envelope;

    fn decode(action: &str, fields: &str) -> SoapResponse {
        let xml = format!(
            r#"<?xml version="1.0"?><s:Envelope xmlns:s="http://schemas.xmlsoap.org/soap/envelope/" s:encodingStyle="http://schemas.xmlsoap.org/soap/encoding/"><s:Body><u:{action}Response xmlns:u="urn:schemas-upnp-org:service:AVTransport:1">{fields}</u:{action}Response></s:Body></s:Envelope>"#
        );
        envelope::decode(&xml, action).unwrap()
    }

    #[test]
    fn test_play_pause_stop_arguments() {
        let expected = vec![("InstanceID", "0".to_string()), ("Speed", "1".to_string())];
        assert_eq!(PlayAction::arguments(&PlayRequest {}), expected);
        assert_eq!(PauseAction::arguments(&PauseRequest {}), expected);
        assert_eq!(StopAction::arguments(&StopRequest {}), expected);
        assert!(!PlayAction::DECODE_RESPONSE);
        assert!(SetAVTransportURIAction::DECODE_RESPONSE);
        assert!(SetNextAVTransportURIAction::DECODE_RESPONSE);
    }

    #[test]
    fn test_play_golden_envelope() {
        let xml = envelope::encode(
            PlayAction::SERVICE.urn(),
            PlayAction::ACTION,
            &PlayAction::arguments(&PlayRequest {}),
        );
        assert_eq!(
            xml,
            r#"<?xml version="1.0" encoding="utf-8"?><s:Envelope xmlns:s="http://schemas.xmlsoap.org/soap/envelope/" s:encodingStyle="http://schemas.xmlsoap.org/soap/encoding/"><s:Body><u:Play xmlns:u="urn:schemas-upnp-org:service:AVTransport:1"><InstanceID>0</InstanceID><Speed>1</Speed></u:Play></s:Body></s:Envelope>"#
        );
    }

    #[test]
    fn test_seek_arguments() {
        let request = SeekRequest {
            target: "00:01:40".to_string(),
        };
        assert_eq!(
            SeekAction::arguments(&request),
            vec![
                ("InstanceID", "0".to_string()),
                ("Unit", "REL_TIME".to_string()),
                ("Target", "00:01:40".to_string()),
            ]
        );
    }

    #[test]
    fn test_set_next_uri_argument_order() {
        let request = SetNextAVTransportURIRequest {
            next_uri: "http://h/b.mp3".to_string(),
            next_uri_metadata: "<DIDL-Lite/>".to_string(),
        };
        let names: Vec<&str> = SetNextAVTransportURIAction::arguments(&request)
            .into_iter()
            .map(|(name, _)| name)
            .collect();
        assert_eq!(names, vec!["InstanceID", "NextURI", "NextURIMetaData"]);
        assert_eq!(SetNextAVTransportURIAction::ACTION, "SetNextAVTransportURI");
    }

    #[test]
    fn test_parse_transport_info() {
        let response = decode(
            "GetTransportInfo",
            "<CurrentTransportState>PAUSED_PLAYBACK</CurrentTransportState><CurrentTransportStatus>OK</CurrentTransportStatus><CurrentSpeed>1</CurrentSpeed>",
        );
        let info = GetTransportInfoAction::parse_response(&response).unwrap();

        assert_eq!(info.status, "OK");
        assert_eq!(info.state, "PAUSED_PLAYBACK");
        assert_eq!(info.speed, "1");
        assert_eq!(info.transport_state(), TransportState::PausedPlayback);
    }

    #[test]
    fn test_parse_transport_info_missing_field() {
        let response = decode("GetTransportInfo", "<CurrentTransportState>PLAYING</CurrentTransportState>");
        let err = GetTransportInfoAction::parse_response(&response).unwrap_err();
        assert!(matches!(err, ApiError::ParseError(msg) if msg.contains("CurrentTransportStatus")));
    }

    #[rstest]
    #[case("PLAYING", TransportState::Playing)]
    #[case("STOPPED", TransportState::Stopped)]
    #[case("NO_MEDIA_PRESENT", TransportState::NoMediaPresent)]
    #[case("TRANSITIONING", TransportState::Transitioning)]
    #[case("CUSTOM_BUFFERING", TransportState::Unknown("CUSTOM_BUFFERING".to_string()))]
    fn test_transport_state(#[case] raw: &str, #[case] expected: TransportState) {
        let state = TransportState::from(raw);
        assert_eq!(state, expected);
        assert_eq!(state.to_string(), raw);
    }

    #[test]
    fn test_parse_position_info() {
        let response = decode(
            "GetPositionInfo",
            "<Track>1</Track><TrackDuration>0:04:05</TrackDuration><TrackMetaData></TrackMetaData><TrackURI>http://h/a.mp3</TrackURI><RelTime>00:01:02.500</RelTime><AbsTime>NOT_IMPLEMENTED</AbsTime>",
        );
        let info = GetPositionInfoAction::parse_response(&response).unwrap();

        assert_eq!(info.duration, Duration::from_secs(245));
        assert_eq!(info.rel_time, Duration::from_millis(62_500));
    }

    #[test]
    fn test_position_info_decode_errors_are_surfaced() {
        let response = decode(
            "GetPositionInfo",
            "<TrackDuration>NOT_IMPLEMENTED</TrackDuration><RelTime>00:00:10</RelTime>",
        );
        let err = GetPositionInfoAction::parse_response(&response).unwrap_err();
        assert!(matches!(err, ApiError::Metadata(_)));

        let response = decode("GetPositionInfo", "<TrackDuration>00:00:10</TrackDuration>");
        assert!(matches!(
            GetPositionInfoAction::parse_response(&response),
            Err(ApiError::ParseError(_))
        ));
    }

    #[test]
    fn test_parse_media_info() {
        let response = decode(
            "GetMediaInfo",
            "<NrTracks>1</NrTracks><MediaDuration>01:30:00</MediaDuration><CurrentURI>http://h/a.mp4</CurrentURI><CurrentURIMetaData>&lt;DIDL-Lite/&gt;</CurrentURIMetaData><NextURI></NextURI><NextURIMetaData></NextURIMetaData><PlayMedium>NETWORK</PlayMedium><RecordMedium>NOT_IMPLEMENTED</RecordMedium><WriteStatus>NOT_IMPLEMENTED</WriteStatus>",
        );
        let info = GetMediaInfoAction::parse_response(&response).unwrap();

        assert_eq!(info.nr_tracks, 1);
        assert_eq!(info.current_uri, "http://h/a.mp4");
        assert_eq!(info.current_uri_metadata, "<DIDL-Lite/>");
        assert_eq!(info.next_uri, "");
        assert_eq!(info.play_medium, "NETWORK");
        assert_eq!(info.duration(), Some(Duration::from_secs(5400)));
    }

    #[test]
    fn test_parse_media_info_tolerates_missing_fields() {
        let info = GetMediaInfoAction::parse_response(&decode("GetMediaInfo", "")).unwrap();
        assert_eq!(info, MediaInfo::default());
        assert_eq!(info.duration(), None);

        let err = GetMediaInfoAction::parse_response(&decode("GetMediaInfo", "<NrTracks>many</NrTracks>")).unwrap_err();
        assert!(matches!(err, ApiError::ParseError(_)));
    }
}
