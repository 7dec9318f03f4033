//! Observability subsystem.
//!
//! Structured logging through `tracing`. Each request carries its
//! `x-request-id` on every event it produces; `tower_http`'s trace layer adds
//! one span per request.

pub mod logging;

pub use logging::init_logging;
