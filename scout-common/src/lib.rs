//! Shared plumbing for the Scout crates.
//!
//! Right now this is only [`observability`]: one place that knows how the
//! binary and the integration tests set up `tracing`.
pub mod observability;
