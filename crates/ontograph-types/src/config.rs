//! Configuration types for Ontograph.
//!
//! `OntographConfig` represents the `config.toml` in the data directory.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Top-level configuration. All fields have defaults, so an empty file is valid.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OntographConfig {
    /// Ontology document used when a command is given no explicit path.
    #[serde(default)]
    pub graph_path: Option<PathBuf>,

    /// JSON array of learned node ids used when no `--learned` flag is given.
    #[serde(default)]
    pub learned_path: Option<PathBuf>,

    /// Run the validator whenever a document is loaded for resolution and
    /// log any defects.
    #[serde(default = "default_validate_on_load")]
    pub validate_on_load: bool,

    #[serde(default)]
    pub log_format: LogFormat,
}

fn default_validate_on_load() -> bool {
    true
}

impl Default for OntographConfig {
    fn default() -> Self {
        Self {
            graph_path: None,
            learned_path: None,
            validate_on_load: default_validate_on_load(),
            log_format: LogFormat::default(),
        }
    }
}

/// Log line format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default_values() {
        let config = OntographConfig::default();
        assert!(config.graph_path.is_none());
        assert!(config.learned_path.is_none());
        assert!(config.validate_on_load);
        assert_eq!(config.log_format, LogFormat::Pretty);
    }

    #[test]
    fn test_config_deserialize_empty_uses_defaults() {
        let config: OntographConfig = toml::from_str("").unwrap();
        assert!(config.validate_on_load);
        assert_eq!(config.log_format, LogFormat::Pretty);
    }

    #[test]
    fn test_config_deserialize_with_values() {
        let toml_str = r#"
graph_path = "/srv/ontology/graph.json"
learned_path = "/srv/ontology/learned.json"
validate_on_load = false
log_format = "json"
"#;
        let config: OntographConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(
            config.graph_path,
            Some(PathBuf::from("/srv/ontology/graph.json"))
        );
        assert!(!config.validate_on_load);
        assert_eq!(config.log_format, LogFormat::Json);
    }
}
