//! CLI command definitions and dispatch for the `ontograph` binary.
//!
//! Uses clap derive macros for argument parsing. Every command reads an
//! ontology document (from `--graph` or the configured `graph_path`) and,
//! where it needs one, a learned-set.

pub mod learn;
pub mod node;
pub mod path;
pub mod status;
pub mod validate;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;
use comfy_table::{Cell, Color};
use ontograph_types::state::NodeStatus;

/// Validate skill ontologies and see what a learner can unlock next.
#[derive(Parser)]
#[command(name = "ontograph", version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output machine-readable JSON instead of styled text.
    #[arg(long, global = true)]
    pub json: bool,

    /// Suppress all output except errors.
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Detailed output (-v for verbose, -vv for debug/trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Ontology document (.json or .toml). Defaults to `graph_path` from config.
    #[arg(short, long, global = true)]
    pub graph: Option<PathBuf>,

    /// Directory holding config.toml (defaults to ONTOGRAPH_DATA_DIR or ~/.ontograph).
    #[arg(long, global = true, env = "ONTOGRAPH_DATA_DIR")]
    pub config_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Check the ontology document against its structural invariants.
    Validate,

    /// Show every node with its unlock status.
    #[command(alias = "ls")]
    Status {
        #[command(flatten)]
        learned: LearnedArgs,
    },

    /// Show one node, its prerequisites, and whether it can be learned now.
    Node {
        /// Node id.
        id: String,

        #[command(flatten)]
        learned: LearnedArgs,
    },

    /// List what to learn, in order, to reach a node.
    Path {
        /// Target node id.
        id: String,

        #[command(flatten)]
        learned: LearnedArgs,
    },

    /// Mark a node learned and save the learned-set.
    Learn {
        /// Node id.
        id: String,

        /// Learned-set file to update. Defaults to `learned_path` from config.
        #[arg(long, value_name = "FILE")]
        learned: Option<PathBuf>,
    },

    /// Remove a node from the learned-set and save it.
    Unlearn {
        /// Node id.
        id: String,

        /// Learned-set file to update. Defaults to `learned_path` from config.
        #[arg(long, value_name = "FILE")]
        learned: Option<PathBuf>,
    },

    /// Generate shell completions.
    Completions {
        /// Shell to generate completions for.
        shell: Shell,
    },
}

/// Where the learned-set comes from.
#[derive(Args, Debug, Clone, Default)]
pub struct LearnedArgs {
    /// JSON array of learned node ids. Defaults to `learned_path` from config.
    #[arg(long, value_name = "FILE")]
    pub learned: Option<PathBuf>,

    /// Extra learned node ids (repeatable or comma-separated).
    #[arg(long = "learn", value_name = "ID", value_delimiter = ',')]
    pub extra: Vec<String>,
}

/// Status cell coloured the way the graph view colours nodes.
pub(crate) fn status_cell(status: NodeStatus) -> Cell {
    match status {
        NodeStatus::Base => Cell::new("● base").fg(Color::Green),
        NodeStatus::Unlocked => Cell::new("○ unlocked").fg(Color::Yellow),
        NodeStatus::Learned => Cell::new("✓ learned").fg(Color::Blue),
        NodeStatus::Locked => Cell::new("◌ locked").fg(Color::DarkGrey),
    }
}

pub(crate) fn styled_status(status: NodeStatus) -> console::StyledObject<&'static str> {
    let text = status.as_str();
    match status {
        NodeStatus::Base => console::style(text).green(),
        NodeStatus::Unlocked => console::style(text).yellow(),
        NodeStatus::Learned => console::style(text).blue(),
        NodeStatus::Locked => console::style(text).dim(),
    }
}
