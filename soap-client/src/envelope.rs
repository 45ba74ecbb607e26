//! SOAP envelope codec for UPnP actions.
//!
//! Encoding emits the compact envelope renderers expect, with arguments as
//! child elements of the action in the order given. Decoding pulls the
//! children of `<{action}Response>` into a flat name -> text mapping.

use std::collections::HashMap;

use quick_xml::escape::partial_escape;
use xmltree::{Element, XMLNode};

use crate::error::SoapError;

pub const ENVELOPE_NAMESPACE: &str = "http://schemas.xmlsoap.org/soap/envelope/";
pub const ENCODING_STYLE: &str = "http://schemas.xmlsoap.org/soap/encoding/";

/// Fault code reported when a fault carries no parsable `errorCode`
const DEFAULT_FAULT_CODE: u16 = 500;

/// Build the request envelope for `action` on the service identified by `service_urn`.
///
/// Argument values are escaped exactly once as XML character data.
///
/// ```
/// let xml = soap_client::envelope::encode(
///     "urn:schemas-upnp-org:service:AVTransport:1",
///     "Play",
///     &[("InstanceID", "0".to_string()), ("Speed", "1".to_string())],
/// );
/// assert!(xml.ends_with("<Speed>1</Speed></u:Play></s:Body></s:Envelope>"));
/// ```
pub fn encode(service_urn: &str, action: &str, args: &[(&str, String)]) -> String {
    let mut payload = String::new();
    for (name, value) in args {
        payload.push('<');
        payload.push_str(name);
        payload.push('>');
        payload.push_str(&partial_escape(value.as_str()));
        payload.push_str("</");
        payload.push_str(name);
        payload.push('>');
    }

    format!(
        r#"<?xml version="1.0" encoding="utf-8"?><s:Envelope xmlns:s="{ENVELOPE_NAMESPACE}" s:encodingStyle="{ENCODING_STYLE}"><s:Body><u:{action} xmlns:u="{service_urn}">{payload}</u:{action}></s:Body></s:Envelope>"#
    )
}

/// Flattened children of an action response element.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SoapResponse {
    action: String,
    fields: HashMap<String, String>,
}

impl SoapResponse {
    pub fn action(&self) -> &str {
        &self.action
    }

    /// Text of the named child, empty elements map to `""`.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }

    /// Like [`SoapResponse::get`] but a missing field is a parse error.
    pub fn require(&self, name: &str) -> Result<&str, SoapError> {
        self.get(name).ok_or_else(|| {
            SoapError::Parse(format!("Missing {} element in {}Response", name, self.action))
        })
    }

    pub fn fields(&self) -> &HashMap<String, String> {
        &self.fields
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// Decode a response envelope for `action`.
///
/// A `Fault` in the body becomes [`SoapError::Fault`]. Unknown envelope
/// attributes and unrecognised response children are ignored.
pub fn decode(xml: &str, action: &str) -> Result<SoapResponse, SoapError> {
    let root = Element::parse(xml.as_bytes()).map_err(|e| SoapError::Parse(e.to_string()))?;
    let response = extract_response(&root, action)?;

    let fields = response
        .children
        .iter()
        .filter_map(XMLNode::as_element)
        .map(|child| {
            let text = child.get_text().map(|t| t.into_owned()).unwrap_or_default();
            (child.name.clone(), text)
        })
        .collect();

    Ok(SoapResponse {
        action: action.to_string(),
        fields,
    })
}

/// Returns the fault carried by `xml`, if it is a SOAP envelope with one.
pub(crate) fn fault(xml: &str) -> Option<SoapError> {
    let root = Element::parse(xml.as_bytes()).ok()?;
    let body = root.get_child("Body")?;
    body.get_child("Fault").map(fault_from)
}

fn extract_response<'a>(root: &'a Element, action: &str) -> Result<&'a Element, SoapError> {
    let body = root
        .get_child("Body")
        .ok_or_else(|| SoapError::Parse("Missing SOAP Body".to_string()))?;

    if let Some(fault) = body.get_child("Fault") {
        return Err(fault_from(fault));
    }

    let response_name = format!("{}Response", action);
    body.get_child(response_name.as_str())
        .ok_or_else(|| SoapError::Parse(format!("Missing {} element", response_name)))
}

fn fault_from(fault: &Element) -> SoapError {
    // Firmware spells the element UPnPError, UpnPError or upnpError.
    let upnp_error = fault.get_child("detail").and_then(|detail| {
        detail
            .children
            .iter()
            .filter_map(XMLNode::as_element)
            .find(|e| e.name.eq_ignore_ascii_case("UPnPError"))
    });

    let code = upnp_error
        .and_then(|e| e.get_child("errorCode"))
        .and_then(|c| c.get_text())
        .and_then(|t| t.trim().parse::<u16>().ok())
        .unwrap_or(DEFAULT_FAULT_CODE);

    let description = upnp_error
        .and_then(|e| e.get_child("errorDescription"))
        .or_else(|| fault.get_child("faultstring"))
        .and_then(|d| d.get_text())
        .map(|t| t.trim().to_string())
        .unwrap_or_default();

    SoapError::Fault { code, description }
}
