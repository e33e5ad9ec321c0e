//! Ontology document and learned-set loading.
//!
//! Documents are JSON or TOML, picked by file extension. Learned-sets are a
//! JSON array of node ids and load forgivingly: a missing or corrupt file is
//! an empty set, matching how a fresh user starts out. Saving writes the
//! same array form back, sorted.

use std::path::Path;

use ontograph_types::graph::GraphDocument;
use ontograph_types::state::LearnedSet;
use serde_json::Value;
use thiserror::Error;

/// Errors from loading an ontology document.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("I/O error reading {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid JSON document: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid TOML document: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("unsupported document extension '{0}' (expected .json or .toml)")]
    UnsupportedFormat(String),

    #[error("I/O error writing {path}: {source}")]
    Write {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// On-disk document encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Json,
    Toml,
}

impl DocumentFormat {
    /// Pick the format from a path's extension (case-insensitive).
    pub fn from_path(path: &Path) -> Result<Self, LoadError> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or_default()
            .to_ascii_lowercase();

        match ext.as_str() {
            "json" => Ok(Self::Json),
            "toml" => Ok(Self::Toml),
            _ => Err(LoadError::UnsupportedFormat(ext)),
        }
    }
}

/// Parse a document from a string.
///
/// Field-level problems (missing ids, unknown kinds, wrong types) do not fail
/// the parse; they are left for the validator to report.
pub fn parse_graph_document(content: &str, format: DocumentFormat) -> Result<GraphDocument, LoadError> {
    let doc: GraphDocument = match format {
        DocumentFormat::Json => serde_json::from_str(content)?,
        DocumentFormat::Toml => toml::from_str(content)?,
    };
    Ok(doc)
}

/// Read and parse a document file.
pub async fn load_graph_document(path: &Path) -> Result<GraphDocument, LoadError> {
    let format = DocumentFormat::from_path(path)?;
    let content = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| LoadError::Io {
            path: path.display().to_string(),
            source,
        })?;

    let doc = parse_graph_document(&content, format)?;
    tracing::debug!(
        path = %path.display(),
        nodes = doc.nodes.len(),
        edges = doc.edges.len(),
        "loaded ontology document"
    );
    Ok(doc)
}

/// Parse a learned-set from a JSON array of ids.
///
/// Malformed JSON or a non-array yields an empty set; non-string entries are
/// skipped.
pub fn parse_learned_set(content: &str) -> LearnedSet {
    match serde_json::from_str::<Value>(content) {
        Ok(Value::Array(items)) => items
            .into_iter()
            .filter_map(|item| match item {
                Value::String(id) => Some(id),
                _ => None,
            })
            .collect(),
        Ok(_) => {
            tracing::warn!("learned-set is not a JSON array, starting empty");
            LearnedSet::new()
        }
        Err(err) => {
            tracing::warn!("failed to parse learned-set: {err}, starting empty");
            LearnedSet::new()
        }
    }
}

/// Read a learned-set file. Never fails: unreadable files yield an empty set.
pub async fn load_learned_set(path: &Path) -> LearnedSet {
    match tokio::fs::read_to_string(path).await {
        Ok(content) => parse_learned_set(&content),
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!("No learned-set at {}, starting empty", path.display());
            LearnedSet::new()
        }
        Err(err) => {
            tracing::warn!("Failed to read {}: {err}, starting empty", path.display());
            LearnedSet::new()
        }
    }
}

/// Write a learned-set as a pretty JSON array, creating parent directories.
pub async fn save_learned_set(path: &Path, learned: &LearnedSet) -> Result<(), LoadError> {
    let write_err = |source| LoadError::Write {
        path: path.display().to_string(),
        source,
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(parent).await.map_err(write_err)?;
    }

    let content = serde_json::to_string_pretty(learned)?;
    tokio::fs::write(path, content).await.map_err(write_err)?;

    tracing::debug!(path = %path.display(), learned = learned.len(), "saved learned-set");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use tempfile::tempdir;

    const GRAPH_JSON: &str = r#"{
        "nodes": [
            {"id": "a", "label": "A", "kind": "skill"},
            {"id": "b", "label": "B", "kind": "skill"}
        ],
        "edges": [{"id": "e1", "source": "b", "target": "a", "rel": "requires"}]
    }"#;

    #[test]
    fn test_format_from_extension() {
        assert_eq!(
            DocumentFormat::from_path(&PathBuf::from("g.json")).unwrap(),
            DocumentFormat::Json
        );
        assert_eq!(
            DocumentFormat::from_path(&PathBuf::from("g.TOML")).unwrap(),
            DocumentFormat::Toml
        );
        let err = DocumentFormat::from_path(&PathBuf::from("g.yaml")).unwrap_err();
        assert!(err.to_string().contains("'yaml'"));
    }

    #[test]
    fn test_parse_json_document() {
        let doc = parse_graph_document(GRAPH_JSON, DocumentFormat::Json).unwrap();
        assert_eq!(doc.nodes.len(), 2);
        assert_eq!(doc.edges[0].source, "b");
    }

    #[test]
    fn test_parse_broken_json_is_an_error() {
        let err = parse_graph_document("{ nodes: ", DocumentFormat::Json).unwrap_err();
        assert!(matches!(err, LoadError::Json(_)));
    }

    #[tokio::test]
    async fn test_load_document_from_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("graph.json");
        tokio::fs::write(&path, GRAPH_JSON).await.unwrap();

        let doc = load_graph_document(&path).await.unwrap();
        assert_eq!(doc.nodes[1].id, "b");
    }

    #[tokio::test]
    async fn test_load_toml_document_from_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("graph.toml");
        tokio::fs::write(
            &path,
            r#"
[[nodes]]
id = "a"
label = "A"
kind = "core"
"#,
        )
        .await
        .unwrap();

        let doc = load_graph_document(&path).await.unwrap();
        assert_eq!(doc.nodes.len(), 1);
        assert!(doc.edges.is_empty());
    }

    #[tokio::test]
    async fn test_load_missing_document_is_io_error() {
        let dir = tempdir().unwrap();
        let err = load_graph_document(&dir.path().join("nope.json"))
            .await
            .unwrap_err();
        assert!(matches!(err, LoadError::Io { .. }));
    }

    #[test]
    fn test_parse_learned_set() {
        let set = parse_learned_set(r#"["b", "a", 3, null, "a"]"#);
        let ids: Vec<&str> = set.iter().map(String::as_str).collect();
        assert_eq!(ids, vec!["a", "b"]);
    }

    #[test]
    fn test_parse_learned_set_tolerates_garbage() {
        assert!(parse_learned_set("not json").is_empty());
        assert!(parse_learned_set(r#"{"a": true}"#).is_empty());
    }

    #[tokio::test]
    async fn test_load_learned_set_missing_file_is_empty() {
        let dir = tempdir().unwrap();
        let set = load_learned_set(&dir.path().join("learned.json")).await;
        assert!(set.is_empty());
    }

    #[tokio::test]
    async fn test_load_learned_set_from_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("learned.json");
        tokio::fs::write(&path, r#"["plank"]"#).await.unwrap();

        let set = load_learned_set(&path).await;
        assert!(set.contains("plank"));
    }

    #[tokio::test]
    async fn test_save_learned_set_round_trips_through_load() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("learned.json");
        let set: LearnedSet = ["pushups", "plank"].into_iter().map(String::from).collect();

        save_learned_set(&path, &set).await.unwrap();

        let raw = tokio::fs::read_to_string(&path).await.unwrap();
        let value: Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(value, serde_json::json!(["plank", "pushups"]));
        assert_eq!(load_learned_set(&path).await, set);
    }

    #[tokio::test]
    async fn test_save_learned_set_into_a_file_path_fails() {
        let dir = tempdir().unwrap();
        let blocker = dir.path().join("blocker");
        tokio::fs::write(&blocker, "x").await.unwrap();

        let err = save_learned_set(&blocker.join("learned.json"), &LearnedSet::new())
            .await
            .unwrap_err();
        assert!(matches!(err, LoadError::Write { .. }));
    }
}
