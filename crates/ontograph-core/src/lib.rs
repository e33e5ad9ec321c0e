//! Ontology graph engine for Ontograph.
//!
//! Two pure operations sit at the centre of this crate and never call each
//! other:
//!
//! - [`ontology::validate`] checks a document against its structural
//!   invariants and reports every defect as data.
//! - [`state::resolve`] overlays one user's learned-set on a document and
//!   derives the unlock status of every node.
//!
//! [`progress`] and [`ontology::path`] build caller-facing helpers on top of
//! them. Nothing here does I/O or keeps state between calls.

pub mod ontology;
pub mod progress;
pub mod state;
