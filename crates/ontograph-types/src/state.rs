//! Derived per-user state over an ontology document.
//!
//! A [`GraphState`] is valid for exactly one (document, learned-set) pair and
//! is recomputed on every learned-set change; it is never persisted.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::graph::Node;

/// Ids of the nodes one user has completed. Value semantics: two sets with the
/// same elements compare equal regardless of insertion order.
pub type LearnedSet = BTreeSet<String>;

/// Unlock status of a node for one learned-set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeStatus {
    /// No prerequisites.
    Base,
    /// At least one prerequisite is not learned.
    Locked,
    /// All prerequisites learned, node itself not yet learned.
    Unlocked,
    /// Explicitly completed.
    Learned,
}

impl NodeStatus {
    pub const ALL: [NodeStatus; 4] = [Self::Base, Self::Locked, Self::Unlocked, Self::Learned];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Base => "base",
            Self::Locked => "locked",
            Self::Unlocked => "unlocked",
            Self::Learned => "learned",
        }
    }
}

impl fmt::Display for NodeStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A node annotated with its reconstructed `requires` list and `status`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComputedNode {
    #[serde(flatten)]
    pub node: Node,
    /// Targets of `requires` edges whose source is this node, in edge order.
    pub requires: Vec<String>,
    pub status: NodeStatus,
}

impl ComputedNode {
    pub fn id(&self) -> &str {
        &self.node.id
    }

    pub fn label(&self) -> &str {
        &self.node.label
    }
}

/// Output of resolving a document against a learned-set.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GraphState {
    pub computed_nodes: Vec<ComputedNode>,
    pub label_by_id: BTreeMap<String, String>,
}

impl GraphState {
    /// First computed node with the given id.
    pub fn node(&self, id: &str) -> Option<&ComputedNode> {
        self.computed_nodes.iter().find(|n| n.node.id == id)
    }

    /// Display label for `id`, falling back to the id itself.
    pub fn label_of<'a>(&'a self, id: &'a str) -> &'a str {
        self.label_by_id.get(id).map(String::as_str).unwrap_or(id)
    }
}
