//! Observability setup for Ontograph binaries.

pub mod tracing_setup;
