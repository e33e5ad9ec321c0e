//! Structural checks and graph queries over an ontology document.
//!
//! Validation, `requires` cycle detection, and learning-path ordering. The
//! domain types live in `ontograph-types::graph`.

pub mod cycle;
pub mod path;
pub mod validate;

use std::collections::HashMap;

use ontograph_types::graph::GraphDocument;

pub use validate::validate;

/// Targets of every `requires` edge, grouped by source id in edge order.
///
/// Sources that are not nodes of the document still get an entry; callers
/// look up by node id, so those entries are simply never read.
pub fn requires_index(doc: &GraphDocument) -> HashMap<&str, Vec<&str>> {
    let mut index: HashMap<&str, Vec<&str>> = doc
        .nodes
        .iter()
        .map(|node| (node.id.as_str(), Vec::new()))
        .collect();

    for edge in doc.edges.iter().filter(|e| e.is_requires()) {
        index
            .entry(edge.source.as_str())
            .or_default()
            .push(edge.target.as_str());
    }

    index
}
