//! SSDP (Simple Service Discovery Protocol) search transport.
//!
//! [`SsdpTransport`] is the seam between discovery and the network. The UDP
//! implementation multicasts one `M-SEARCH` and collects unicast replies until
//! the timeout elapses.

use std::io::ErrorKind;
use std::net::{SocketAddr, UdpSocket};
use std::ops::ControlFlow;
use std::time::{Duration, Instant};

use tracing::{debug, warn};

use crate::error::{DiscoveryError, Result};

const SSDP_ADDR: &str = "239.255.255.250:1900";

/// One reply to an `M-SEARCH` request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SsdpResponse {
    pub location: String,
    pub search_target: String,
    pub usn: Option<String>,
    pub server: Option<String>,
}

/// Sends an SSDP search and returns every reply received within `timeout`.
pub trait SsdpTransport {
    fn search(&self, search_target: &str, timeout: Duration) -> Result<Vec<SsdpResponse>>;
}

/// Multicast UDP transport bound to an ephemeral port on all interfaces.
#[derive(Debug, Clone)]
pub struct UdpSsdpTransport {
    user_agent: String,
}

impl UdpSsdpTransport {
    pub fn new(user_agent: impl Into<String>) -> Self {
        Self {
            user_agent: user_agent.into(),
        }
    }

    fn request(&self, search_target: &str, timeout: Duration) -> String {
        format!(
            "M-SEARCH * HTTP/1.1\r\n\
             HOST: {}\r\n\
             MAN: \"ssdp:discover\"\r\n\
             MX: {}\r\n\
             ST: {}\r\n\
             USER-AGENT: {}\r\n\
             \r\n",
            SSDP_ADDR,
            mx_seconds(timeout),
            search_target,
            self.user_agent
        )
    }
}

impl SsdpTransport for UdpSsdpTransport {
    fn search(&self, search_target: &str, timeout: Duration) -> Result<Vec<SsdpResponse>> {
        let socket = UdpSocket::bind("0.0.0.0:0").map_err(|e| {
            DiscoveryError::NetworkError(format!("Failed to bind UDP socket: {}", e))
        })?;

        socket.set_multicast_loop_v4(true).map_err(|e| {
            DiscoveryError::NetworkError(format!("Failed to set multicast loop: {}", e))
        })?;

        socket
            .send_to(self.request(search_target, timeout).as_bytes(), SSDP_ADDR)
            .map_err(|e| DiscoveryError::NetworkError(format!("Failed to send M-SEARCH: {}", e)))?;

        let deadline = Instant::now() + timeout;
        let mut buffer = [0u8; 2048];
        let mut replies = ReplyCollector::default();

        loop {
            let remaining = deadline.saturating_duration_since(Instant::now());
            if remaining.is_zero() {
                break;
            }
            socket.set_read_timeout(Some(remaining)).map_err(|e| {
                DiscoveryError::NetworkError(format!("Failed to set read timeout: {}", e))
            })?;

            let received = socket
                .recv_from(&mut buffer)
                .map(|(size, from)| (&buffer[..size], from));
            if replies.accept(received).is_break() {
                break;
            }
        }

        replies.finish()
    }
}

/// Stop receiving after this many socket errors in one search
const MAX_SOCKET_ERRORS: usize = 8;

/// Replies gathered by one search.
///
/// A socket error (ICMP port unreachable, connection reset) is skipped so the
/// replies already received survive. The search only fails when errors are
/// all it saw.
#[derive(Debug, Default)]
struct ReplyCollector {
    responses: Vec<SsdpResponse>,
    errors: usize,
    last_error: Option<String>,
}

impl ReplyCollector {
    fn accept(&mut self, received: std::io::Result<(&[u8], SocketAddr)>) -> ControlFlow<()> {
        match received {
            Ok((datagram, from)) => {
                // Invalid UTF-8 or missing headers: not a reply we can use
                let Some(response) = std::str::from_utf8(datagram)
                    .ok()
                    .and_then(parse_ssdp_response)
                else {
                    return ControlFlow::Continue(());
                };
                debug!(
                    %from,
                    location = %response.location,
                    st = %response.search_target,
                    "SSDP response"
                );
                self.responses.push(response);
                ControlFlow::Continue(())
            }
            Err(e) if matches!(e.kind(), ErrorKind::WouldBlock | ErrorKind::TimedOut) => {
                ControlFlow::Break(())
            }
            Err(e) => {
                warn!(error = %e, "skipping SSDP socket error");
                self.errors += 1;
                self.last_error = Some(e.to_string());
                if self.errors >= MAX_SOCKET_ERRORS {
                    ControlFlow::Break(())
                } else {
                    ControlFlow::Continue(())
                }
            }
        }
    }

    fn finish(self) -> Result<Vec<SsdpResponse>> {
        match self.last_error {
            Some(error) if self.responses.is_empty() => {
                Err(DiscoveryError::NetworkError(format!("Socket error: {}", error)))
            }
            _ => Ok(self.responses),
        }
    }
}

/// `MX` header value for a search lasting `timeout`, kept within 1..=5 seconds
fn mx_seconds(timeout: Duration) -> u64 {
    timeout.as_secs().clamp(1, 5)
}

/// Parse an SSDP response from HTTP text
fn parse_ssdp_response(response: &str) -> Option<SsdpResponse> {
    let mut location = None;
    let mut search_target = None;
    let mut usn = None;
    let mut server = None;

    for line in response.lines() {
        let line = line.trim();

        if let Some(value) = extract_header_value(line, "LOCATION:") {
            location = Some(value);
        } else if let Some(value) = extract_header_value(line, "ST:") {
            search_target = Some(value);
        } else if let Some(value) = extract_header_value(line, "USN:") {
            usn = Some(value);
        } else if let Some(value) = extract_header_value(line, "SERVER:") {
            server = Some(value);
        }
    }

    match (location, search_target) {
        (Some(location), Some(search_target)) if !location.is_empty() => Some(SsdpResponse {
            location,
            search_target,
            usn,
            server,
        }),
        _ => None,
    }
}

/// Extract header value from a line like "HEADER: value"
fn extract_header_value(line: &str, header: &str) -> Option<String> {
    if line.len() <= header.len() {
        return None;
    }
    // `get` returns None when the header length splits a multi-byte character
    let name = line.get(..header.len())?;
    if !name.eq_ignore_ascii_case(header) {
        return None;
    }
    line.get(header.len()..).map(|value| value.trim().to_string())
}
