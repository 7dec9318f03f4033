//! Route classification.

use axum::http::{Method, Uri};

/// What to do with an inbound request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteDecision {
    /// Cross-origin preflight; answered without contacting upstream.
    Preflight,
    /// Relay request carrying the raw (undecoded) query string.
    Relay { query: String },
    /// GET on a path other than the relay path.
    NotFound,
    /// Any method besides GET and OPTIONS.
    Unsupported(Method),
}

/// Classify a request against the configured relay path.
pub fn classify(method: &Method, uri: &Uri, relay_path: &str) -> RouteDecision {
    if method == Method::OPTIONS {
        return RouteDecision::Preflight;
    }
    if method != Method::GET {
        return RouteDecision::Unsupported(method.clone());
    }
    if uri.path() != relay_path {
        return RouteDecision::NotFound;
    }
    RouteDecision::Relay {
        query: uri.query().unwrap_or_default().to_string(),
    }
}
