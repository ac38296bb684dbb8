//! Connection configuration for the session adapter.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use crate::error::HiveError;

/// Configuration for one adapter instance.
///
/// Holds the two endpoints the adapter connects to at construction
/// time plus the socket timeouts applied to both connections.
/// Immutable once supplied.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HiveConfig {
    /// HiveServer2 endpoint (query execution)
    pub hive_server2: Endpoint,

    /// Hive Metastore endpoint (catalog lookups)
    pub metastore: Endpoint,

    /// Socket timeouts
    #[serde(default)]
    pub timeouts: TimeoutConfig,
}

impl HiveConfig {
    /// Create a configuration with the default timeouts.
    pub fn new(hive_server2: Endpoint, metastore: Endpoint) -> Self {
        Self {
            hive_server2,
            metastore,
            timeouts: TimeoutConfig::default(),
        }
    }
}

/// Host/port pair for one Thrift service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Endpoint {
    pub host: String,
    pub port: u16,
}

impl Endpoint {
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
        }
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.host, self.port)
    }
}

impl FromStr for Endpoint {
    type Err = HiveError;

    /// Parse a `thrift://host:port` URI (e.g., "thrift://localhost:10000").
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let uri = url::Url::parse(s).map_err(|e| HiveError::InvalidEndpoint(format!("{s}: {e}")))?;

        if uri.scheme() != "thrift" {
            return Err(HiveError::InvalidEndpoint(format!(
                "expected thrift:// scheme, got: {}",
                uri.scheme()
            )));
        }

        let host = uri
            .host_str()
            .ok_or_else(|| HiveError::InvalidEndpoint(format!("missing host in {s}")))?;
        let port = uri
            .port()
            .ok_or_else(|| HiveError::InvalidEndpoint(format!("missing port in {s}")))?;

        Ok(Endpoint::new(host, port))
    }
}

/// Socket timeouts applied to both connections.
///
/// The receive timeout is deliberately long: a fetch blocks until the
/// server has rows, and long-running queries can hold a fetch open for
/// hours.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimeoutConfig {
    /// Send (and connect) timeout in milliseconds
    #[serde(default = "default_send_timeout")]
    pub send_timeout_ms: u64,

    /// Receive timeout in milliseconds
    #[serde(default = "default_recv_timeout")]
    pub recv_timeout_ms: u64,
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self {
            send_timeout_ms: default_send_timeout(),
            recv_timeout_ms: default_recv_timeout(),
        }
    }
}

impl TimeoutConfig {
    /// Get send timeout as Duration
    pub fn send_timeout(&self) -> Duration {
        Duration::from_millis(self.send_timeout_ms)
    }

    /// Get receive timeout as Duration
    pub fn recv_timeout(&self) -> Duration {
        Duration::from_millis(self.recv_timeout_ms)
    }
}

fn default_send_timeout() -> u64 {
    30_000 // 30 seconds
}

fn default_recv_timeout() -> u64 {
    86_400_000 // 24 hours
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_timeouts() {
        let timeouts = TimeoutConfig::default();
        assert_eq!(timeouts.send_timeout(), Duration::from_secs(30));
        assert_eq!(timeouts.recv_timeout(), Duration::from_secs(24 * 3600));
    }

    #[test]
    fn test_parse_endpoint() {
        let endpoint: Endpoint = "thrift://localhost:10000".parse().unwrap();
        assert_eq!(endpoint, Endpoint::new("localhost", 10000));
        assert_eq!(endpoint.to_string(), "localhost:10000");
    }

    #[test]
    fn test_parse_endpoint_rejects_other_schemes() {
        let result = "http://localhost:9083".parse::<Endpoint>();
        assert!(matches!(result, Err(HiveError::InvalidEndpoint(_))));
    }

    #[test]
    fn test_parse_endpoint_requires_port() {
        let result = "thrift://metastore.internal".parse::<Endpoint>();
        assert!(matches!(result, Err(HiveError::InvalidEndpoint(_))));
    }

    #[test]
    fn test_config_defaults() {
        let config = HiveConfig::new(
            Endpoint::new("localhost", 10000),
            Endpoint::new("localhost", 9083),
        );
        assert_eq!(config.timeouts.send_timeout_ms, 30_000);
        assert_eq!(config.timeouts.recv_timeout_ms, 86_400_000);
    }
}
