//! Shared domain types for Ontograph.
//!
//! This crate contains the ontology document model (nodes, edges, the closed
//! kind/relation vocabularies), the derived per-user state types, validation
//! results, configuration, and their associated error types.
//!
//! Zero infrastructure dependencies -- only serde, serde_json, thiserror.

pub mod config;
pub mod error;
pub mod graph;
pub mod state;
pub mod validation;
