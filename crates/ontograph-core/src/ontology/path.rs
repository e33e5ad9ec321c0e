//! Learning-path ordering.
//!
//! Walks the `requires` closure of a target node and uses `petgraph` to order
//! it so every prerequisite comes before the nodes that need it.

use std::collections::{HashMap, HashSet};

use ontograph_types::error::OntologyError;
use ontograph_types::graph::GraphDocument;
use ontograph_types::state::LearnedSet;
use petgraph::algo::toposort;
use petgraph::graph::DiGraph;

use super::requires_index;

/// Nodes still to learn before `target` can be learned, ending with `target`.
///
/// Learned nodes are neither listed nor walked through: a learned
/// prerequisite satisfies its dependants whatever its own prerequisites are.
/// Requirements pointing at ids that are not nodes are skipped. Returns an
/// empty list when `target` is already learned.
pub fn learning_path(
    doc: &GraphDocument,
    target: &str,
    learned: &LearnedSet,
) -> Result<Vec<String>, OntologyError> {
    let known: HashSet<&str> = doc
        .nodes
        .iter()
        .filter(|n| !n.id.is_empty())
        .map(|n| n.id.as_str())
        .collect();

    if !known.contains(target) {
        return Err(OntologyError::UnknownNode(target.to_string()));
    }
    if learned.contains(target) {
        return Ok(Vec::new());
    }

    let requires = requires_index(doc);
    let mut graph = DiGraph::<&str, ()>::new();
    let mut node_indices = HashMap::new();

    let mut to_visit = vec![target];
    let mut visited = HashSet::new();

    while let Some(current) = to_visit.pop() {
        if !visited.insert(current) {
            continue;
        }

        let idx = *node_indices
            .entry(current)
            .or_insert_with(|| graph.add_node(current));

        let deps = requires.get(current).map(Vec::as_slice).unwrap_or_default();
        for &dep in deps {
            if !known.contains(dep) || learned.contains(dep) {
                continue;
            }
            let dep_idx = *node_indices
                .entry(dep)
                .or_insert_with(|| graph.add_node(dep));
            // Edge from node -> prerequisite
            graph.add_edge(idx, dep_idx, ());
            to_visit.push(dep);
        }
    }

    match toposort(&graph, None) {
        // toposort puts dependants first; reverse so prerequisites lead.
        Ok(sorted) => Ok(sorted
            .into_iter()
            .rev()
            .map(|idx| graph[idx].to_string())
            .collect()),
        Err(cycle) => Err(OntologyError::CycleDetected(
            graph[cycle.node_id()].to_string(),
        )),
    }
}
