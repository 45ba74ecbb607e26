//! Integration tests against the real network
//!
//! These pass whether or not renderers are present: an empty network must
//! report `NoDeviceAvailable`, never a transport error or a panic.

use std::collections::HashSet;
use std::time::{Duration, Instant};

use soap_client::CallContext;
use upnpcast_discovery::{search, Discovery, DiscoveryError, ServiceType};

#[test]
fn test_full_discovery_flow() {
    match search(Duration::from_secs(2), &[]) {
        Ok(renderers) => {
            for renderer in &renderers {
                assert!(renderer.supports(ServiceType::AVTransport));
                assert!(renderer.location().has_host());
                println!("  - {} ({}) at {}", renderer.friendly_name(), renderer.model_name(), renderer.location());
            }
            println!("Discovered {} renderer(s)", renderers.len());
        }
        Err(DiscoveryError::NoDeviceAvailable) => println!("No renderers on this network"),
        Err(DiscoveryError::NetworkError(msg)) => println!("Multicast unavailable: {}", msg),
        Err(other) => panic!("Unexpected discovery error: {:?}", other),
    }
}

#[test]
fn test_no_duplicate_locations() {
    let Ok(renderers) = search(Duration::from_secs(2), &[]) else {
        return;
    };

    let locations: HashSet<_> = renderers.iter().map(|r| r.location().clone()).collect();
    assert_eq!(locations.len(), renderers.len(), "Each location should be reported once");
}

#[test]
fn test_search_respects_context_deadline() {
    let discovery = Discovery::new().expect("Failed to build discovery");
    let ctx = CallContext::with_timeout(Duration::from_millis(500));

    let started = Instant::now();
    let _ = discovery.search(&ctx, Duration::from_secs(5), &[]);

    // SSDP collection is clamped to the deadline; fetches add at most a little more.
    assert!(started.elapsed() < Duration::from_secs(3));
}
