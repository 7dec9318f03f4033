//! Configuration schema definitions.
//!
//! Every section derives Serde traits and falls back to defaults that
//! reproduce the stock relay: loopback port 8082, `/proxy`, a desktop
//! browser user agent and JSON-labelled responses.

use serde::Deserialize;

/// Default bind address (loopback only).
pub const DEFAULT_BIND_ADDRESS: &str = "127.0.0.1:8082";

/// Default path the relay answers on.
pub const DEFAULT_RELAY_PATH: &str = "/proxy";

/// User agent sent upstream in place of anything the caller had.
pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36";

/// Root configuration for the relay.
#[derive(Debug, Clone, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct RelayConfig {
    /// Listener configuration (bind address, relay path).
    pub listener: ListenerConfig,

    /// Outbound request settings.
    pub upstream: UpstreamConfig,

    /// Relayed response settings.
    pub response: ResponseConfig,

    /// Cross-origin headers attached to relayed and preflight responses.
    pub cors: CorsConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct ListenerConfig {
    /// Bind address (e.g., "127.0.0.1:8082").
    pub bind_address: String,

    /// Path that accepts `?url=<target>` requests.
    pub relay_path: String,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_address: DEFAULT_BIND_ADDRESS.to_string(),
            relay_path: DEFAULT_RELAY_PATH.to_string(),
        }
    }
}

/// Outbound request configuration.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct UpstreamConfig {
    /// Value of the `User-Agent` header on every upstream request.
    pub user_agent: String,

    /// Total upstream request timeout in seconds. `None` waits forever.
    pub timeout_secs: Option<u64>,

    /// Honour `HTTP_PROXY`/`HTTPS_PROXY`/`NO_PROXY` for outbound requests.
    pub use_system_proxy: bool,
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout_secs: None,
            use_system_proxy: true,
        }
    }
}

/// Relayed response configuration.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct ResponseConfig {
    /// `Content-Type` stamped on relayed bodies regardless of upstream.
    pub content_type: String,
}

impl Default for ResponseConfig {
    fn default() -> Self {
        Self {
            content_type: "application/json".to_string(),
        }
    }
}

/// CORS header values.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct CorsConfig {
    /// `Access-Control-Allow-Origin`.
    pub allow_origin: String,

    /// `Access-Control-Allow-Methods`.
    pub allow_methods: String,

    /// `Access-Control-Allow-Headers`.
    pub allow_headers: String,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allow_origin: "*".to_string(),
            allow_methods: "GET, POST, OPTIONS".to_string(),
            allow_headers: "Content-Type".to_string(),
        }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}
