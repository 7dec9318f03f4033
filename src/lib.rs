//! Local CORS relay library.
//!
//! Accepts `GET <relay_path>?url=<encoded target>`, fetches the target and
//! hands the body back with permissive cross-origin headers, so browser code
//! can call third-party HTTP APIs directly.

pub mod config;
pub mod error;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod relay;
pub mod routing;

pub use config::RelayConfig;
pub use error::RelayError;
pub use http::RelayServer;
pub use lifecycle::Shutdown;
