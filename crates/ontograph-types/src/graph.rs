//! Ontology document types.
//!
//! A [`GraphDocument`] is the canonical, versionable graph of knowledge nodes
//! and typed relations. It is loaded from untrusted static data, so every
//! field deserializes leniently: wrong-typed or missing values become empty
//! strings (or empty lists) and are reported later by the validator instead
//! of failing the parse.

use std::collections::BTreeMap;
use std::fmt;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::error::OntologyError;

// ---------------------------------------------------------------------------
// Vocabularies
// ---------------------------------------------------------------------------

/// Whitelisted node kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeKind {
    Core,
    Domain,
    Problem,
    Skill,
    Action,
    Metric,
    Tool,
}

impl NodeKind {
    /// Every kind, in declaration order.
    pub const ALL: [NodeKind; 7] = [
        Self::Core,
        Self::Domain,
        Self::Problem,
        Self::Skill,
        Self::Action,
        Self::Metric,
        Self::Tool,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Core => "core",
            Self::Domain => "domain",
            Self::Problem => "problem",
            Self::Skill => "skill",
            Self::Action => "action",
            Self::Metric => "metric",
            Self::Tool => "tool",
        }
    }

    /// Look up a raw kind string in the whitelist.
    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.as_str() == raw)
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Whitelisted edge relations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Relation {
    /// `source` cannot be unlocked until `target` is learned.
    Requires,
    Supports,
    PartOf,
    Measures,
}

impl Relation {
    pub const ALL: [Relation; 4] = [
        Self::Requires,
        Self::Supports,
        Self::PartOf,
        Self::Measures,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Requires => "requires",
            Self::Supports => "supports",
            Self::PartOf => "part_of",
            Self::Measures => "measures",
        }
    }

    /// Look up a raw relation string in the whitelist.
    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|rel| rel.as_str() == raw)
    }
}

impl fmt::Display for Relation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Node / Edge
// ---------------------------------------------------------------------------

/// One unit of knowledge, skill, tool, or metric in the ontology.
///
/// Nodes never own edges. Any field the model does not know about is kept in
/// `extra` and travels unchanged into computed views.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Node {
    #[serde(default, deserialize_with = "lenient_string")]
    pub id: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub label: String,
    /// Raw kind string; see [`Node::kind`] for the whitelisted value.
    #[serde(default, deserialize_with = "lenient_string")]
    pub kind: String,
    #[serde(
        default,
        deserialize_with = "lenient_opt_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub domain: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient_opt_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub description: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient_tags",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub tags: Vec<String>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

impl Node {
    pub fn new(id: impl Into<String>, label: impl Into<String>, kind: NodeKind) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            kind: kind.as_str().to_string(),
            ..Self::default()
        }
    }

    pub fn with_domain(mut self, domain: impl Into<String>) -> Self {
        self.domain = Some(domain.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    /// The whitelisted kind, or `None` if the raw value is unknown or missing.
    pub fn kind(&self) -> Option<NodeKind> {
        NodeKind::parse(&self.kind)
    }
}

/// A directed, typed relation between two nodes, referenced by id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edge {
    #[serde(default, deserialize_with = "lenient_string")]
    pub id: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub source: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub target: String,
    /// Raw relation string; see [`Edge::rel`] for the whitelisted value.
    #[serde(default, deserialize_with = "lenient_string")]
    pub rel: String,
}

impl Edge {
    pub fn new(
        id: impl Into<String>,
        source: impl Into<String>,
        target: impl Into<String>,
        rel: Relation,
    ) -> Self {
        Self {
            id: id.into(),
            source: source.into(),
            target: target.into(),
            rel: rel.as_str().to_string(),
        }
    }

    pub fn rel(&self) -> Option<Relation> {
        Relation::parse(&self.rel)
    }

    pub fn is_requires(&self) -> bool {
        self.rel() == Some(Relation::Requires)
    }
}

/// Ordered nodes plus ordered edges.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GraphDocument {
    #[serde(default, deserialize_with = "lenient_items")]
    pub nodes: Vec<Node>,
    #[serde(default, deserialize_with = "lenient_items")]
    pub edges: Vec<Edge>,
}

impl GraphDocument {
    pub fn new(nodes: Vec<Node>, edges: Vec<Edge>) -> Self {
        Self { nodes, edges }
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty() && self.edges.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Checked constructors
// ---------------------------------------------------------------------------

/// Input for [`make_node`].
#[derive(Debug, Clone, Default)]
pub struct NodeSpec {
    pub id: String,
    pub label: String,
    pub kind: String,
    pub domain: Option<String>,
    pub description: Option<String>,
    pub tags: Vec<String>,
}

/// Build a node, rejecting empty `id`, `label`, or `kind`.
///
/// Empty optional fields are dropped. The kind is not checked against the
/// whitelist here; that is the validator's job.
pub fn make_node(spec: NodeSpec) -> Result<Node, OntologyError> {
    if spec.id.is_empty() {
        return Err(OntologyError::MissingField("Node.id"));
    }
    if spec.label.is_empty() {
        return Err(OntologyError::MissingField("Node.label"));
    }
    if spec.kind.is_empty() {
        return Err(OntologyError::MissingField("Node.kind"));
    }

    Ok(Node {
        id: spec.id,
        label: spec.label,
        kind: spec.kind,
        domain: spec.domain.filter(|d| !d.is_empty()),
        description: spec.description.filter(|d| !d.is_empty()),
        tags: spec.tags,
        extra: BTreeMap::new(),
    })
}

/// Build an edge, rejecting any empty field.
pub fn make_edge(
    id: impl Into<String>,
    source: impl Into<String>,
    target: impl Into<String>,
    rel: impl Into<String>,
) -> Result<Edge, OntologyError> {
    let edge = Edge {
        id: id.into(),
        source: source.into(),
        target: target.into(),
        rel: rel.into(),
    };

    if edge.id.is_empty() {
        return Err(OntologyError::MissingField("Edge.id"));
    }
    if edge.source.is_empty() {
        return Err(OntologyError::MissingField("Edge.source"));
    }
    if edge.target.is_empty() {
        return Err(OntologyError::MissingField("Edge.target"));
    }
    if edge.rel.is_empty() {
        return Err(OntologyError::MissingField("Edge.rel"));
    }

    Ok(edge)
}

// ---------------------------------------------------------------------------
// Lenient deserializers
// ---------------------------------------------------------------------------

fn lenient_string<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    match Value::deserialize(deserializer)? {
        Value::String(s) => Ok(s),
        _ => Ok(String::new()),
    }
}

fn lenient_opt_string<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<String>, D::Error> {
    match Value::deserialize(deserializer)? {
        Value::String(s) => Ok(Some(s)),
        _ => Ok(None),
    }
}

fn lenient_tags<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<String>, D::Error> {
    match Value::deserialize(deserializer)? {
        Value::Array(items) => Ok(items
            .into_iter()
            .filter_map(|item| match item {
                Value::String(s) => Some(s),
                _ => None,
            })
            .collect()),
        _ => Ok(Vec::new()),
    }
}

/// A non-array becomes an empty list; a non-object entry becomes `T::default()`.
fn lenient_items<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    match Value::deserialize(deserializer)? {
        Value::Array(items) => Ok(items
            .into_iter()
            .map(|item| serde_json::from_value(item).unwrap_or_default())
            .collect()),
        _ => Ok(Vec::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_parse_is_whitelist_lookup() {
        for kind in NodeKind::ALL {
            assert_eq!(NodeKind::parse(kind.as_str()), Some(kind));
        }
        assert_eq!(NodeKind::parse("Skill"), None);
        assert_eq!(NodeKind::parse(""), None);
    }

    #[test]
    fn test_relation_parse_uses_snake_case() {
        assert_eq!(Relation::parse("part_of"), Some(Relation::PartOf));
        assert_eq!(Relation::parse("partOf"), None);
        assert_eq!(Relation::PartOf.to_string(), "part_of");
    }

    #[test]
    fn test_node_deserialize_full() {
        let json = r#"{
            "id": "pushups",
            "label": "Push-ups",
            "kind": "skill",
            "domain": "strength",
            "description": "Bodyweight press",
            "tags": ["upper", "bodyweight"]
        }"#;
        let node: Node = serde_json::from_str(json).unwrap();
        assert_eq!(node.id, "pushups");
        assert_eq!(node.kind(), Some(NodeKind::Skill));
        assert_eq!(node.domain.as_deref(), Some("strength"));
        assert_eq!(node.tags, vec!["upper", "bodyweight"]);
        assert!(node.extra.is_empty());
    }

    #[test]
    fn test_node_deserialize_wrong_types_become_empty() {
        let json = r#"{"id": 42, "label": null, "kind": "wizard", "tags": ["ok", 7]}"#;
        let node: Node = serde_json::from_str(json).unwrap();
        assert_eq!(node.id, "");
        assert_eq!(node.label, "");
        assert_eq!(node.kind, "wizard");
        assert_eq!(node.kind(), None);
        assert_eq!(node.tags, vec!["ok"]);
    }

    #[test]
    fn test_node_keeps_unknown_fields() {
        let json = r#"{"id": "a", "label": "A", "kind": "core", "icon": "star"}"#;
        let node: Node = serde_json::from_str(json).unwrap();
        assert_eq!(node.extra.get("icon"), Some(&Value::String("star".into())));

        let back = serde_json::to_value(&node).unwrap();
        assert_eq!(back["icon"], "star");
        assert!(back.get("domain").is_none());
        assert!(back.get("tags").is_none());
    }

    #[test]
    fn test_document_tolerates_malformed_shape() {
        let json = r#"{"nodes": [null, {"id": "a", "label": "A", "kind": "skill"}], "edges": "nope"}"#;
        let doc: GraphDocument = serde_json::from_str(json).unwrap();
        assert_eq!(doc.nodes.len(), 2);
        assert_eq!(doc.nodes[0].id, "");
        assert_eq!(doc.nodes[1].id, "a");
        assert!(doc.edges.is_empty());
    }

    #[test]
    fn test_document_missing_lists_is_empty() {
        let doc: GraphDocument = serde_json::from_str("{}").unwrap();
        assert!(doc.is_empty());
    }

    #[test]
    fn test_document_from_toml() {
        let toml_str = r#"
[[nodes]]
id = "a"
label = "A"
kind = "skill"

[[nodes]]
id = "b"
label = "B"
kind = "skill"

[[edges]]
id = "e1"
source = "b"
target = "a"
rel = "requires"
"#;
        let doc: GraphDocument = toml::from_str(toml_str).unwrap();
        assert_eq!(doc.nodes.len(), 2);
        assert_eq!(doc.edges.len(), 1);
        assert!(doc.edges[0].is_requires());
    }

    #[test]
    fn test_make_node_rejects_missing_fields() {
        let err = make_node(NodeSpec {
            label: "A".into(),
            kind: "skill".into(),
            ..NodeSpec::default()
        })
        .unwrap_err();
        assert_eq!(err, OntologyError::MissingField("Node.id"));

        let err = make_node(NodeSpec {
            id: "a".into(),
            kind: "skill".into(),
            ..NodeSpec::default()
        })
        .unwrap_err();
        assert_eq!(err.to_string(), "Node.label is required");
    }

    #[test]
    fn test_make_node_drops_empty_optionals() {
        let node = make_node(NodeSpec {
            id: "a".into(),
            label: "A".into(),
            kind: "skill".into(),
            domain: Some(String::new()),
            description: Some("desc".into()),
            tags: Vec::new(),
        })
        .unwrap();
        assert_eq!(node.domain, None);
        assert_eq!(node.description.as_deref(), Some("desc"));
    }

    #[test]
    fn test_make_edge() {
        let edge = make_edge("e1", "b", "a", "requires").unwrap();
        assert!(edge.is_requires());

        let err = make_edge("e1", "b", "", "requires").unwrap_err();
        assert_eq!(err, OntologyError::MissingField("Edge.target"));
    }
}
