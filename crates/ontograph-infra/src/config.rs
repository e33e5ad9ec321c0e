//! Configuration loader for Ontograph.
//!
//! Reads `config.toml` from the data directory (`~/.ontograph/` by default)
//! and deserializes it into [`OntographConfig`]. Falls back to defaults when
//! the file is missing or malformed. Relative `graph_path` and
//! `learned_path` entries are anchored at the data directory.

use std::path::{Path, PathBuf};

use ontograph_types::config::OntographConfig;

/// Resolve the data directory from environment or platform defaults.
///
/// Priority:
/// 1. `ONTOGRAPH_DATA_DIR` environment variable
/// 2. `~/.ontograph`
/// 3. `./.ontograph`
pub fn resolve_data_dir() -> PathBuf {
    if let Ok(dir) = std::env::var("ONTOGRAPH_DATA_DIR") {
        return PathBuf::from(dir);
    }

    if let Some(home) = dirs::home_dir() {
        return home.join(".ontograph");
    }

    PathBuf::from(".ontograph")
}

/// Load configuration from `{data_dir}/config.toml`.
///
/// - Missing file: [`OntographConfig::default()`].
/// - Unreadable or unparsable file: logs a warning and returns the default.
/// - Otherwise: the parsed config with relative paths joined onto `data_dir`.
pub async fn load_config(data_dir: &Path) -> OntographConfig {
    let config_path = data_dir.join("config.toml");

    let content = match tokio::fs::read_to_string(&config_path).await {
        Ok(content) => content,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!("No config.toml found at {}, using defaults", config_path.display());
            return OntographConfig::default();
        }
        Err(err) => {
            tracing::warn!("Failed to read {}: {err}, using defaults", config_path.display());
            return OntographConfig::default();
        }
    };

    match toml::from_str::<OntographConfig>(&content) {
        Ok(config) => anchor_paths(config, data_dir),
        Err(err) => {
            tracing::warn!(
                "Failed to parse {}: {err}, using defaults",
                config_path.display()
            );
            OntographConfig::default()
        }
    }
}

fn anchor_paths(mut config: OntographConfig, data_dir: &Path) -> OntographConfig {
    // `join` keeps absolute paths as they are.
    config.graph_path = config.graph_path.map(|p| data_dir.join(p));
    config.learned_path = config.learned_path.map(|p| data_dir.join(p));

    tracing::debug!(
        graph = ?config.graph_path,
        learned = ?config.learned_path,
        "resolved configured paths"
    );
    config
}
