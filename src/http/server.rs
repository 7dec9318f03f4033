//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create the Axum Router with a single catch-all handler
//! - Wire up middleware (request ID, tracing)
//! - Bind server to listener
//! - Dispatch requests through the route classifier
//! - Relay GET requests to the upstream target

use std::sync::Arc;

use axum::{
    body::Body,
    extract::State,
    http::Request,
    response::{IntoResponse, Response},
    Router,
};
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower::ServiceBuilder;
use tower_http::{
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};

use crate::config::RelayConfig;
use crate::error::{RelayError, Result};
use crate::http::request::{request_id, MakeRelayRequestId, X_REQUEST_ID};
use crate::http::response::ResponseHeaders;
use crate::relay::{parse_target, UpstreamClient};
use crate::routing::{classify, RouteDecision};

/// Application state injected into handlers.
///
/// Everything here is read-only after startup, so requests never observe
/// one another.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<RelayConfig>,
    pub client: UpstreamClient,
    pub headers: Arc<ResponseHeaders>,
}

/// HTTP server for the relay.
pub struct RelayServer {
    router: Router,
}

impl RelayServer {
    /// Create a new server with the given configuration.
    pub fn new(config: RelayConfig) -> Result<Self> {
        let config = Arc::new(config);
        let state = AppState {
            client: UpstreamClient::new(&config.upstream)?,
            headers: Arc::new(ResponseHeaders::from_config(&config)?),
            config,
        };

        Ok(Self {
            router: Self::build_router(state),
        })
    }

    /// Build the Axum router with all middleware layers.
    ///
    /// Routing is done by [`classify`] rather than Axum's path matching, so
    /// OPTIONS is answered on every path and unknown methods get 501.
    fn build_router(state: AppState) -> Router {
        Router::new()
            .fallback(relay_handler)
            .with_state(state)
            .layer(
                ServiceBuilder::new()
                    .layer(SetRequestIdLayer::new(X_REQUEST_ID, MakeRelayRequestId))
                    .layer(TraceLayer::new_for_http())
                    .layer(PropagateRequestIdLayer::new(X_REQUEST_ID)),
            )
    }

    /// The router, for driving requests without a socket.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Run the server until `shutdown` fires.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> std::result::Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "HTTP server starting");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}

/// Catch-all handler: classify, then preflight, relay or reject.
async fn relay_handler(State(state): State<AppState>, request: Request<Body>) -> Response {
    let request_id = request_id(request.headers());
    let decision = classify(
        request.method(),
        request.uri(),
        &state.config.listener.relay_path,
    );

    tracing::debug!(
        request_id = %request_id,
        method = %request.method(),
        uri = %request.uri(),
        decision = ?decision,
        "Request classified"
    );

    match decision {
        RouteDecision::Preflight => state.headers.preflight(),
        RouteDecision::Relay { query } => match relay(&state, &query, &request_id).await {
            Ok(body) => state.headers.relayed(body),
            Err(e) => {
                if e.is_upstream() {
                    tracing::error!(request_id = %request_id, error = %e.message(), "Relay failed");
                } else {
                    tracing::warn!(request_id = %request_id, error = %e, "Relay rejected");
                }
                e.into_response()
            }
        },
        RouteDecision::NotFound => RelayError::NotFound.into_response(),
        RouteDecision::Unsupported(method) => RelayError::Unsupported(method).into_response(),
    }
}

async fn relay(state: &AppState, query: &str, request_id: &str) -> Result<axum::body::Bytes> {
    let target = parse_target(query)?;
    tracing::info!(request_id = %request_id, target_url = %target, "Proxying request");
    state.client.fetch(&target).await
}
