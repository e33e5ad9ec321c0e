//! Learning-path command.

use std::path::Path;

use anyhow::Result;
use console::style;

use ontograph_core::ontology::path::learning_path;
use ontograph_core::state::resolve;

use super::{LearnedArgs, styled_status};
use crate::state::AppState;

/// Print the nodes still to learn, prerequisites first, to reach `id`.
pub async fn show_path(
    state: &AppState,
    graph: Option<&Path>,
    id: &str,
    learned: &LearnedArgs,
    json: bool,
) -> Result<()> {
    let doc = state.load_checked_graph(graph).await?;
    let learned = state.load_learned(learned).await;
    let path = learning_path(&doc, id, &learned)?;

    if json {
        let out = serde_json::json!({
            "target": id,
            "path": path,
        });
        println!("{}", serde_json::to_string_pretty(&out)?);
        return Ok(());
    }

    let graph_state = resolve(&doc, &learned);

    println!();
    if path.is_empty() {
        println!(
            "  {} '{}' is already learned",
            style("✓").blue().bold(),
            graph_state.label_of(id)
        );
        println!();
        return Ok(());
    }

    println!(
        "  {} {} step{} to '{}'",
        style("→").cyan().bold(),
        style(path.len()).bold(),
        if path.len() == 1 { "" } else { "s" },
        graph_state.label_of(id)
    );
    println!();
    for (i, step) in path.iter().enumerate() {
        let status = graph_state
            .node(step)
            .map(|n| styled_status(n.status).to_string())
            .unwrap_or_default();
        println!(
            "  {:>3}. {} {} {}",
            style(i + 1).dim(),
            graph_state.label_of(step),
            style(format!("({step})")).dim(),
            status
        );
    }
    println!();

    Ok(())
}
