//! Ontology document validation.
//!
//! Checks, in order, and collecting every violation:
//! - nodes: valid id, unique id, label present, kind whitelisted
//! - edges: valid id, unique id, endpoints resolve, rel whitelisted,
//!   no duplicate `(source, target, rel)`
//! - no cycles among `requires` edges
//!
//! Validation is total: malformed input produces messages, never a panic or
//! an `Err`.

use std::collections::HashSet;

use ontograph_types::graph::GraphDocument;
use ontograph_types::validation::ValidationResult;

use super::cycle::find_requires_cycles;

/// Printed in place of an empty or missing value.
const MISSING: &str = "<missing>";

fn shown(value: &str) -> &str {
    if value.is_empty() { MISSING } else { value }
}

/// Validate a graph document against its structural invariants.
pub fn validate(doc: &GraphDocument) -> ValidationResult {
    let mut errors = Vec::new();

    // Unique node ids in first-seen order; also the DFS root order.
    let mut node_ids: Vec<&str> = Vec::with_capacity(doc.nodes.len());
    let mut seen_nodes: HashSet<&str> = HashSet::with_capacity(doc.nodes.len());

    for node in &doc.nodes {
        if node.id.is_empty() {
            errors.push("Node without valid id".to_string());
            continue;
        }

        if seen_nodes.insert(node.id.as_str()) {
            node_ids.push(node.id.as_str());
        } else {
            errors.push(format!("Duplicate node.id: {}", node.id));
        }

        if node.label.is_empty() {
            errors.push(format!("Node {} missing label", node.id));
        }
        if node.kind().is_none() {
            errors.push(format!(
                "Node {} has invalid kind: {}",
                node.id,
                shown(&node.kind)
            ));
        }
    }

    let mut seen_edges: HashSet<&str> = HashSet::with_capacity(doc.edges.len());
    let mut relations: HashSet<(&str, &str, &str)> = HashSet::with_capacity(doc.edges.len());

    for edge in &doc.edges {
        if edge.id.is_empty() {
            errors.push("Edge without valid id".to_string());
            continue;
        }

        if !seen_edges.insert(edge.id.as_str()) {
            errors.push(format!("Duplicate edge.id: {}", edge.id));
        }

        if !seen_nodes.contains(edge.source.as_str()) {
            errors.push(format!(
                "Edge {} source not found: {}",
                edge.id,
                shown(&edge.source)
            ));
        }
        if !seen_nodes.contains(edge.target.as_str()) {
            errors.push(format!(
                "Edge {} target not found: {}",
                edge.id,
                shown(&edge.target)
            ));
        }
        if edge.rel().is_none() {
            errors.push(format!(
                "Edge {} has invalid rel: {}",
                edge.id,
                shown(&edge.rel)
            ));
        }

        let relation = (edge.source.as_str(), edge.target.as_str(), edge.rel.as_str());
        if !relations.insert(relation) {
            errors.push(format!(
                "Duplicate edge (source,target,rel): {}__{}__{}",
                shown(&edge.source),
                shown(&edge.target),
                shown(&edge.rel)
            ));
        }
    }

    for cycle in find_requires_cycles(&node_ids, &doc.edges) {
        errors.push(format!("Requires cycle: {}", cycle.join(" -> ")));
    }

    tracing::debug!(
        nodes = doc.nodes.len(),
        edges = doc.edges.len(),
        errors = errors.len(),
        "validated ontology document"
    );

    ValidationResult::from_errors(errors)
}
