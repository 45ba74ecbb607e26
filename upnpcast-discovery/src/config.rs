use std::time::Duration;

/// Configuration for [`Discovery`](crate::Discovery).
#[derive(Debug, Clone)]
pub struct DiscoveryConfig {
    /// SSDP `ST` header of the M-SEARCH request
    /// Default: "ssdp:all"
    pub search_target: String,

    /// Timeout for each device description GET, capped by the call context
    /// Default: 10 seconds
    pub http_timeout: Duration,

    /// User-Agent for M-SEARCH and description requests
    /// Default: "upnpcast/<version> UPnP/1.0"
    pub user_agent: String,
}

impl Default for DiscoveryConfig {
    fn default() -> Self {
        Self {
            search_target: "ssdp:all".to_string(),
            http_timeout: Duration::from_secs(10),
            user_agent: format!("upnpcast/{} UPnP/1.0", env!("CARGO_PKG_VERSION")),
        }
    }
}
