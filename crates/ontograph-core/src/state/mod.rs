//! Unlock-state resolution.
//!
//! Overlays a learned-set on an ontology document: every node gets its
//! `requires` list rebuilt from `requires` edges and a status computed from
//! those requirements. The document is never modified and the learned-set is
//! only read.

use std::collections::BTreeMap;

use ontograph_types::graph::GraphDocument;
use ontograph_types::state::{ComputedNode, GraphState, LearnedSet, NodeStatus};

use crate::ontology::requires_index;

/// Fields on an input node that are always recomputed.
const DERIVED_FIELDS: [&str; 2] = ["requires", "status"];

/// Resolve per-node status for one learned-set.
///
/// Status precedence, first match wins:
/// 1. id is in `learned` -> `Learned`
/// 2. no requirements -> `Base`
/// 3. every requirement in `learned` -> `Unlocked`
/// 4. otherwise -> `Locked`
///
/// A requirement pointing at an unknown id can never be learned through the
/// normal flow, so it keeps its dependant locked rather than raising.
pub fn resolve(doc: &GraphDocument, learned: &LearnedSet) -> GraphState {
    let label_by_id: BTreeMap<String, String> = doc
        .nodes
        .iter()
        .map(|node| (node.id.clone(), node.label.clone()))
        .collect();

    let requires_by_id = requires_index(doc);

    let computed_nodes: Vec<ComputedNode> = doc
        .nodes
        .iter()
        .map(|node| {
            let requires: Vec<String> = requires_by_id
                .get(node.id.as_str())
                .map(|targets| targets.iter().map(|t| t.to_string()).collect())
                .unwrap_or_default();
            let status = status_for(&node.id, &requires, learned);

            let mut node = node.clone();
            for field in DERIVED_FIELDS {
                node.extra.remove(field);
            }

            ComputedNode {
                node,
                requires,
                status,
            }
        })
        .collect();

    tracing::debug!(
        nodes = computed_nodes.len(),
        learned = learned.len(),
        "resolved graph state"
    );

    GraphState {
        computed_nodes,
        label_by_id,
    }
}

fn status_for(id: &str, requires: &[String], learned: &LearnedSet) -> NodeStatus {
    if learned.contains(id) {
        NodeStatus::Learned
    } else if requires.is_empty() {
        NodeStatus::Base
    } else if requires.iter().all(|r| learned.contains(r)) {
        NodeStatus::Unlocked
    } else {
        NodeStatus::Locked
    }
}
