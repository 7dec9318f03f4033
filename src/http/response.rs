//! Response construction.
//!
//! # Responsibilities
//! - Attach the CORS headers to preflight and relayed responses
//! - Stamp the configured content type on relayed bodies
//! - Pass upstream bytes through untouched
//!
//! # Design Decisions
//! - Header values are parsed once at startup, never per request
//! - Error responses carry no CORS headers; only successful relays and
//!   preflights authorize the browser

use axum::body::{Body, Bytes};
use axum::http::header::{
    ACCESS_CONTROL_ALLOW_HEADERS, ACCESS_CONTROL_ALLOW_METHODS, ACCESS_CONTROL_ALLOW_ORIGIN,
    CONTENT_TYPE,
};
use axum::http::{HeaderMap, HeaderValue};
use axum::response::Response;

use crate::config::RelayConfig;
use crate::error::{RelayError, Result};

/// Pre-parsed header values for successful responses.
#[derive(Debug, Clone)]
pub struct ResponseHeaders {
    cors: HeaderMap,
    content_type: HeaderValue,
}

impl ResponseHeaders {
    /// Parse header values from the configuration.
    pub fn from_config(config: &RelayConfig) -> Result<Self> {
        let parse = |field: &str, value: &str| {
            HeaderValue::from_str(value)
                .map_err(|e| RelayError::Setup(format!("{field}: {e}")))
        };

        let mut cors = HeaderMap::new();
        cors.insert(
            ACCESS_CONTROL_ALLOW_ORIGIN,
            parse("cors.allow_origin", &config.cors.allow_origin)?,
        );
        cors.insert(
            ACCESS_CONTROL_ALLOW_METHODS,
            parse("cors.allow_methods", &config.cors.allow_methods)?,
        );
        cors.insert(
            ACCESS_CONTROL_ALLOW_HEADERS,
            parse("cors.allow_headers", &config.cors.allow_headers)?,
        );

        Ok(Self {
            cors,
            content_type: parse("response.content_type", &config.response.content_type)?,
        })
    }

    /// 200 with the CORS headers and no body.
    pub fn preflight(&self) -> Response {
        let mut response = Response::new(Body::empty());
        *response.headers_mut() = self.cors.clone();
        response
    }

    /// 200 with the CORS headers, the configured content type and the
    /// upstream body verbatim.
    pub fn relayed(&self, body: Bytes) -> Response {
        let mut response = Response::new(Body::from(body));
        let headers = response.headers_mut();
        *headers = self.cors.clone();
        headers.insert(CONTENT_TYPE, self.content_type.clone());
        response
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    #[tokio::test]
    async fn preflight_has_three_cors_headers_and_no_body() {
        let headers = ResponseHeaders::from_config(&RelayConfig::default()).unwrap();
        let response = headers.preflight();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers().len(), 3);
        assert_eq!(response.headers()[ACCESS_CONTROL_ALLOW_ORIGIN], "*");
        assert_eq!(
            response.headers()[ACCESS_CONTROL_ALLOW_METHODS],
            "GET, POST, OPTIONS"
        );
        assert_eq!(response.headers()[ACCESS_CONTROL_ALLOW_HEADERS], "Content-Type");

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert!(body.is_empty());
    }

    #[tokio::test]
    async fn relayed_body_is_verbatim_and_labelled_json() {
        let headers = ResponseHeaders::from_config(&RelayConfig::default()).unwrap();
        let response = headers.relayed(Bytes::from_static(b"<html>not json</html>"));

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers().len(), 4);
        assert_eq!(response.headers()[CONTENT_TYPE], "application/json");

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert_eq!(&body[..], b"<html>not json</html>");
    }
}
