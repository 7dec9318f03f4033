//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, single catch-all handler)
//!     → request.rs (request ID assigned and echoed back)
//!     → routing::classify
//!     → relay (query decode, upstream fetch)
//!     → response.rs (CORS headers, content type)
//!     → Send to client
//! ```

pub mod request;
pub mod response;
pub mod server;

pub use request::{request_id, MakeRelayRequestId, X_REQUEST_ID};
pub use response::ResponseHeaders;
pub use server::{AppState, RelayServer};
