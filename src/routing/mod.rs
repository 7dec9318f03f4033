//! Request routing subsystem.
//!
//! # Data Flow
//! ```text
//! Incoming request (method + URI)
//!     → router.rs (classify)
//!     → RouteDecision
//!         Preflight   → static CORS response
//!         Relay       → relay::query → relay::client
//!         NotFound    → 404
//!         Unsupported → 501
//! ```
//!
//! # Design Decisions
//! - Classification is a pure function of method, path and config
//! - Path matching is exact and case-sensitive
//! - OPTIONS is answered on every path, before any path check

pub mod router;

pub use router::{classify, RouteDecision};
