//! Private SOAP client for UPnP device communication
//!
//! This crate provides the SOAP envelope codec and a minimal blocking HTTP
//! binding used to invoke actions on UPnP services such as AVTransport and
//! RenderingControl. Every call is bound to a [`CallContext`].

mod context;
pub mod envelope;
mod error;

pub use context::{CallContext, CancelToken, ContextError};
pub use envelope::SoapResponse;
pub use error::SoapError;

use std::time::Duration;
use tracing::debug;

/// Tunables for [`SoapClient`].
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Upper bound for a whole request, further capped by the call context
    /// Default: 10 seconds
    pub timeout: Duration,

    /// TCP connect timeout
    /// Default: 5 seconds
    pub connect_timeout: Duration,

    /// User-Agent header sent with every request
    /// Default: "upnpcast/<version> UPnP/1.0"
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(10),
            connect_timeout: Duration::from_secs(5),
            user_agent: format!("upnpcast/{} UPnP/1.0", env!("CARGO_PKG_VERSION")),
        }
    }
}

/// A minimal SOAP client for UPnP device communication
#[derive(Debug, Clone)]
pub struct SoapClient {
    agent: ureq::Agent,
    config: ClientConfig,
}

impl SoapClient {
    /// Create a new SOAP client with default configuration
    pub fn new() -> Self {
        Self::with_config(ClientConfig::default())
    }

    pub fn with_config(config: ClientConfig) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout_connect(config.connect_timeout)
            .timeout(config.timeout)
            .user_agent(&config.user_agent)
            .build();
        Self { agent, config }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// POST `action` to `control_url` and return the raw response body.
    ///
    /// An error status whose body is a SOAP fault is reported as
    /// [`SoapError::Fault`], any other error status as [`SoapError::HttpStatus`].
    pub fn call(
        &self,
        ctx: &CallContext,
        control_url: &str,
        service_urn: &str,
        action: &str,
        args: &[(&str, String)],
    ) -> Result<String, SoapError> {
        ctx.check()?;

        let body = envelope::encode(service_urn, action, args);
        let soap_action = format!("\"{}#{}\"", service_urn, action);
        debug!(url = control_url, action, "sending SOAP request");

        let result = self
            .agent
            .post(control_url)
            .timeout(ctx.clamp(self.config.timeout))
            .set("SOAPAction", &soap_action)
            .set("Content-Type", "text/xml")
            .set("charset", "utf-8")
            .set("Connection", "close")
            .send_string(&body);

        let response = match result {
            Ok(response) => response,
            Err(ureq::Error::Status(status, response)) => {
                debug!(status, action, "SOAP request returned error status");
                let text = match response.into_string() {
                    Ok(text) => text,
                    Err(e) => {
                        debug!(status, action, error = %e, "could not read error response body");
                        return Err(SoapError::HttpStatus(status));
                    }
                };
                return Err(envelope::fault(&text).unwrap_or(SoapError::HttpStatus(status)));
            }
            Err(e) => {
                ctx.check()?;
                return Err(SoapError::Network(e.to_string()));
            }
        };

        let text = response
            .into_string()
            .map_err(|e| SoapError::Network(e.to_string()))?;
        ctx.check()?;

        Ok(text)
    }

    /// [`SoapClient::call`] followed by [`envelope::decode`].
    pub fn invoke(
        &self,
        ctx: &CallContext,
        control_url: &str,
        service_urn: &str,
        action: &str,
        args: &[(&str, String)],
    ) -> Result<SoapResponse, SoapError> {
        let text = self.call(ctx, control_url, service_urn, action, args)?;
        envelope::decode(&text, action)
    }
}

impl Default for SoapClient {
    fn default() -> Self {
        Self::new()
    }
}
