//! Application state shared by every command.
//!
//! AppState holds the resolved data directory and configuration, and knows
//! how to turn command-line flags plus config defaults into a loaded
//! ontology document and learned-set.

use std::path::{Path, PathBuf};

use anyhow::{Context, bail};

use ontograph_core::ontology::validate;
use ontograph_infra::config::{load_config, resolve_data_dir};
use ontograph_infra::loader::{load_graph_document, load_learned_set, save_learned_set};
use ontograph_types::config::OntographConfig;
use ontograph_types::graph::GraphDocument;
use ontograph_types::state::LearnedSet;

use crate::cli::LearnedArgs;

pub struct AppState {
    pub data_dir: PathBuf,
    pub config: OntographConfig,
}

impl AppState {
    /// Resolve the data directory and load `config.toml` from it.
    pub async fn init(config_dir: Option<PathBuf>) -> Self {
        let data_dir = config_dir.unwrap_or_else(resolve_data_dir);
        let config = load_config(&data_dir).await;
        Self { data_dir, config }
    }

    /// The document path: the `--graph` flag, else `graph_path` from config.
    pub fn graph_path(&self, flag: Option<&Path>) -> anyhow::Result<PathBuf> {
        if let Some(path) = flag {
            return Ok(path.to_path_buf());
        }
        match &self.config.graph_path {
            Some(path) => Ok(path.clone()),
            None => bail!(
                "no ontology document given; pass --graph or set graph_path in {}",
                self.data_dir.join("config.toml").display()
            ),
        }
    }

    /// Load the document without validating it.
    pub async fn load_graph(&self, flag: Option<&Path>) -> anyhow::Result<GraphDocument> {
        let path = self.graph_path(flag)?;
        load_graph_document(&path)
            .await
            .with_context(|| format!("Failed to load ontology document {}", path.display()))
    }

    /// Load the document for resolution, logging any defects when
    /// `validate_on_load` is set. Defects never stop resolution.
    pub async fn load_checked_graph(&self, flag: Option<&Path>) -> anyhow::Result<GraphDocument> {
        let doc = self.load_graph(flag).await?;
        if self.config.validate_on_load {
            for error in validate(&doc).errors() {
                tracing::warn!(%error, "ontology defect");
            }
        }
        Ok(doc)
    }

    /// The learned-set: the `--learned` file (else `learned_path` from config,
    /// else empty) plus every `--learn` id.
    pub async fn load_learned(&self, args: &LearnedArgs) -> LearnedSet {
        let mut learned = match self.learned_file(args.learned.as_deref()) {
            Some(path) => load_learned_set(&path).await,
            None => LearnedSet::new(),
        };
        learned.extend(args.extra.iter().filter(|id| !id.is_empty()).cloned());
        learned
    }

    fn learned_file(&self, flag: Option<&Path>) -> Option<PathBuf> {
        flag.map(Path::to_path_buf)
            .or_else(|| self.config.learned_path.clone())
    }

    /// The learned-set file that `learn`/`unlearn` read and rewrite.
    pub fn learned_store_path(&self, flag: Option<&Path>) -> anyhow::Result<PathBuf> {
        match self.learned_file(flag) {
            Some(path) => Ok(path),
            None => bail!(
                "no learned-set file given; pass --learned or set learned_path in {}",
                self.data_dir.join("config.toml").display()
            ),
        }
    }

    /// Persist the learned-set to `path`.
    pub async fn save_learned(&self, path: &Path, learned: &LearnedSet) -> anyhow::Result<()> {
        save_learned_set(path, learned)
            .await
            .with_context(|| format!("Failed to save learned-set {}", path.display()))
    }
}
