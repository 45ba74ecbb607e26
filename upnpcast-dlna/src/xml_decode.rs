//! XML decoding helpers for renderer-supplied metadata.
//!
//! DIDL-Lite arrives with `dc:`, `upnp:` and `sec:` prefixes that serde
//! struct definitions cannot match directly, so prefixes are stripped before
//! deserializing with quick-xml.

use std::iter::Peekable;
use std::str::Chars;

use serde::de::DeserializeOwned;

use crate::error::{DlnaError, DlnaResult};

/// Parse XML into `T` after stripping namespace prefixes.
pub fn parse<T: DeserializeOwned>(xml: &str) -> DlnaResult<T> {
    let stripped = strip_namespaces(xml);
    quick_xml::de::from_str(&stripped)
        .map_err(|e| DlnaError::XmlDeserializationFailed(e.to_string()))
}

/// Remove namespace prefixes from element and attribute names, and drop
/// `xmlns` declarations.
///
/// Input: `<e:propertyset><dc:title>Song</dc:title></e:propertyset>`
/// Output: `<propertyset><title>Song</title></propertyset>`
pub fn strip_namespaces(xml: &str) -> String {
    let mut result = String::with_capacity(xml.len());
    let mut chars = xml.chars().peekable();

    while let Some(c) = chars.next() {
        result.push(c);
        if c != '<' {
            continue;
        }

        if let Some(slash) = chars.next_if_eq(&'/') {
            result.push(slash);
        }

        // Declarations, comments and doctypes are copied through untouched.
        if chars.peek().is_some_and(|&ch| ch == '?' || ch == '!') {
            for ch in chars.by_ref() {
                result.push(ch);
                if ch == '>' {
                    break;
                }
            }
            continue;
        }

        let tag_name = take_name(&mut chars);
        result.push_str(local_name(&tag_name));

        while let Some(&ch) = chars.peek() {
            if ch == '>' {
                result.push(ch);
                chars.next();
                break;
            }
            if ch == '/' || ch.is_whitespace() {
                result.push(ch);
                chars.next();
                continue;
            }

            let attr_name = take_name(&mut chars);
            let attr_value = take_attribute_value(&mut chars);
            if attr_name == "xmlns" || attr_name.starts_with("xmlns:") {
                continue;
            }
            result.push_str(local_name(&attr_name));
            result.push_str(&attr_value);
        }
    }

    result
}

fn local_name(name: &str) -> &str {
    name.rsplit_once(':').map_or(name, |(_, local)| local)
}

fn take_name(chars: &mut Peekable<Chars<'_>>) -> String {
    let mut name = String::new();
    while let Some(ch) = chars.next_if(|ch| !ch.is_whitespace() && !matches!(ch, '>' | '/' | '=')) {
        name.push(ch);
    }
    name
}

/// Consume `="value"` (or `='value'`) and return it verbatim.
fn take_attribute_value(chars: &mut Peekable<Chars<'_>>) -> String {
    let mut raw = String::new();
    match chars.next_if_eq(&'=') {
        Some(eq) => raw.push(eq),
        None => return raw,
    }
    if let Some(quote) = chars.next_if(|ch| *ch == '"' || *ch == '\'') {
        raw.push(quote);
        for ch in chars.by_ref() {
            raw.push(ch);
            if ch == quote {
                break;
            }
        }
    }
    raw
}
