//! Renderer discovery that outputs JSON for scripting
//!
//! Usage: cargo run -p upnpcast --example discover [timeout-secs]
//!
//! Logs go to stderr when `UPNPCAST_LOG_MODE` is `development` or `debug`.

use std::time::Duration;

use upnpcast::logging::init_logging_from_env;
use upnpcast::{search, DiscoveryError};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logging_from_env()?;

    let timeout = std::env::args()
        .nth(1)
        .and_then(|s| s.parse().ok())
        .unwrap_or(5);

    let renderers = match search(Duration::from_secs(timeout), &[]) {
        Ok(renderers) => renderers,
        Err(DiscoveryError::NoDeviceAvailable) => Vec::new(),
        Err(e) => return Err(e.into()),
    };

    println!("{}", serde_json::to_string_pretty(&renderers)?);
    Ok(())
}
