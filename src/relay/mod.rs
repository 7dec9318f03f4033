//! Relay subsystem: turn a query string into an upstream fetch.
//!
//! # Data Flow
//! ```text
//! raw query string
//!     → query.rs (form-urlencoded decode, pick first `url`)
//!     → TargetSpec
//!     → client.rs (single GET, fixed User-Agent, whole body buffered)
//!     → Bytes | RelayError
//! ```

pub mod client;
pub mod query;

pub use client::UpstreamClient;
pub use query::{parse_target, TargetSpec};
