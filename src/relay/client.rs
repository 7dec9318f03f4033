//! Upstream HTTP client.
//!
//! # Responsibilities
//! - Issue exactly one GET per relayed request
//! - Replace the caller's identity with a fixed `User-Agent`
//! - Buffer the whole upstream body
//! - Treat non-2xx upstream statuses as failures
//!
//! # Design Decisions
//! - One `reqwest::Client` built at startup and shared; it holds no
//!   per-request state
//! - No timeout unless configured: a silent upstream stalls only its own
//!   request

use std::time::Duration;

use axum::body::Bytes;
use reqwest::header::{HeaderMap, HeaderValue, USER_AGENT};
use url::Url;

use crate::config::UpstreamConfig;
use crate::error::{RelayError, Result};
use crate::relay::query::TargetSpec;

/// Shared client for outbound fetches.
#[derive(Debug, Clone)]
pub struct UpstreamClient {
    inner: reqwest::Client,
}

impl UpstreamClient {
    /// Build a client from the upstream configuration.
    pub fn new(config: &UpstreamConfig) -> Result<Self> {
        let mut headers = HeaderMap::new();
        let user_agent = HeaderValue::from_str(&config.user_agent)
            .map_err(|e| RelayError::Setup(format!("user agent: {e}")))?;
        headers.insert(USER_AGENT, user_agent);

        let mut builder = reqwest::Client::builder().default_headers(headers);
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        if !config.use_system_proxy {
            builder = builder.no_proxy();
        }

        Ok(Self {
            inner: builder.build()?,
        })
    }

    /// Fetch the target and return its body.
    pub async fn fetch(&self, target: &TargetSpec) -> Result<Bytes> {
        let url = Url::parse(target.as_str()).map_err(|e| RelayError::InvalidTarget {
            target: target.to_string(),
            reason: e.to_string(),
        })?;

        let response = self.inner.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(RelayError::UpstreamStatus {
                status: status.as_u16(),
                reason: status.canonical_reason().unwrap_or("Unknown").to_string(),
            });
        }

        Ok(response.bytes().await?)
    }
}
