//! Infrastructure layer for Ontograph.
//!
//! Reads the things the pure core needs from disk: `config.toml`, ontology
//! documents (JSON or TOML), and learned-sets (JSON arrays of node ids).
//! Nothing here writes a learned-set back.

pub mod config;
pub mod loader;
