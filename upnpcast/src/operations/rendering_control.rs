//! RenderingControl actions: volume and mute on the master channel

use soap_client::SoapResponse;

use crate::define_upnp_action;
use crate::error::ApiError;
use crate::operation::{INSTANCE_ID, MASTER_CHANNEL};

define_upnp_action! {
    action: GetMute,
    service: RenderingControl,
    request: {},
    arguments: |_req| [
        "InstanceID" => INSTANCE_ID,
        "Channel" => MASTER_CHANNEL,
    ],
    response: bool,
    decode: true,
    parse: |response| parse_mute(response),
}

define_upnp_action! {
    action: SetMute,
    service: RenderingControl,
    request: {
        desired_mute: bool,
    },
    arguments: |req| [
        "InstanceID" => INSTANCE_ID,
        "Channel" => MASTER_CHANNEL,
        "DesiredMute" => mute_flag(req.desired_mute),
    ],
    response: (),
    decode: false,
    parse: |_response| Ok(()),
}

define_upnp_action! {
    action: GetVolume,
    service: RenderingControl,
    request: {},
    arguments: |_req| [
        "InstanceID" => INSTANCE_ID,
        "Channel" => MASTER_CHANNEL,
    ],
    response: u16,
    decode: true,
    parse: |response| parse_volume(response),
}

define_upnp_action! {
    action: SetVolume,
    service: RenderingControl,
    request: {
        desired_volume: u16,
    },
    arguments: |req| [
        "InstanceID" => INSTANCE_ID,
        "Channel" => MASTER_CHANNEL,
        "DesiredVolume" => req.desired_volume,
    ],
    response: (),
    decode: false,
    parse: |_response| Ok(()),
}

fn mute_flag(muted: bool) -> &'static str {
    if muted {
        "1"
    } else {
        "0"
    }
}

fn parse_mute(response: &SoapResponse) -> Result<bool, ApiError> {
    let value = response.require("CurrentMute")?.trim();
    match value {
        "1" => Ok(true),
        "0" => Ok(false),
        _ if value.eq_ignore_ascii_case("true") => Ok(true),
        _ if value.eq_ignore_ascii_case("false") => Ok(false),
        _ => Err(ApiError::ParseError(format!("Invalid CurrentMute value: {}", value))),
    }
}

/// Negative volumes reported by some firmware are floored at 0.
fn parse_volume(response: &SoapResponse) -> Result<u16, ApiError> {
    let value = response.require("CurrentVolume")?.trim();
    let volume: i64 = value
        .parse()
        .map_err(|_| ApiError::ParseError(format!("Invalid CurrentVolume value: {}", value)))?;

    Ok(volume.clamp(0, i64::from(u16::MAX)) as u16)
}
