//! Test helpers for fixture-based integration tests

#![allow(dead_code)]

use std::cell::Cell;
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use upnpcast_discovery::{Result, SsdpResponse, SsdpTransport};

pub const AVT_URN: &str = "urn:schemas-upnp-org:service:AVTransport:1";

/// Represents a test fixture with device XML data
#[derive(Debug, Clone)]
pub struct DeviceFixture {
    pub name: String,
    pub xml_content: String,
}

impl DeviceFixture {
    /// Load a fixture from the fixtures directory
    pub fn load(filename: &str) -> Self {
        let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
        path.push("tests/fixtures");
        path.push(filename);

        let xml_content = fs::read_to_string(&path)
            .unwrap_or_else(|e| panic!("Failed to load fixture {}: {}", filename, e));

        Self {
            name: filename.to_string(),
            xml_content,
        }
    }

    /// Path the fixture is served under by a mock server
    pub fn path(&self) -> String {
        format!("/{}", self.name)
    }
}

/// SSDP reply for `location` with the given search target
pub fn ssdp_response(location: &str, st: &str) -> SsdpResponse {
    SsdpResponse {
        location: location.to_string(),
        search_target: st.to_string(),
        usn: Some(format!("uuid:test::{}", st)),
        server: Some("Linux/4.1 UPnP/1.0 TestDMR/1.0".to_string()),
    }
}

/// Transport returning canned replies and counting searches
pub struct CannedTransport {
    responses: Vec<SsdpResponse>,
    searches: Cell<usize>,
}

impl CannedTransport {
    pub fn new(responses: Vec<SsdpResponse>) -> Self {
        Self {
            responses,
            searches: Cell::new(0),
        }
    }

    pub fn searches(&self) -> usize {
        self.searches.get()
    }
}

impl SsdpTransport for CannedTransport {
    fn search(&self, search_target: &str, _timeout: Duration) -> Result<Vec<SsdpResponse>> {
        assert_eq!(search_target, "ssdp:all");
        self.searches.set(self.searches.get() + 1);
        Ok(self.responses.clone())
    }
}
