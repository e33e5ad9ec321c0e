//! Unlock-status overview command.

use std::path::Path;

use anyhow::Result;
use comfy_table::{Cell, Color, ContentArrangement, Table, presets};
use console::style;

use ontograph_core::progress::StatusSummary;
use ontograph_core::state::resolve;

use super::{LearnedArgs, status_cell};
use crate::state::AppState;

/// Print every node with its status and prerequisites.
pub async fn status(
    state: &AppState,
    graph: Option<&Path>,
    learned: &LearnedArgs,
    json: bool,
) -> Result<()> {
    let doc = state.load_checked_graph(graph).await?;
    let learned = state.load_learned(learned).await;
    let graph_state = resolve(&doc, &learned);
    let summary = StatusSummary::from_state(&graph_state);

    if json {
        let out = serde_json::json!({
            "computed_nodes": graph_state.computed_nodes,
            "label_by_id": graph_state.label_by_id,
            "summary": summary,
        });
        println!("{}", serde_json::to_string_pretty(&out)?);
        return Ok(());
    }

    if graph_state.computed_nodes.is_empty() {
        println!();
        println!("  {} The ontology has no nodes.", style("ℹ").blue().bold());
        println!();
        return Ok(());
    }

    let mut table = Table::new();
    table.load_preset(presets::UTF8_FULL_CONDENSED);
    table.set_content_arrangement(ContentArrangement::Dynamic);

    table.set_header(vec![
        Cell::new("ID").fg(Color::White),
        Cell::new("Label").fg(Color::White),
        Cell::new("Kind").fg(Color::White),
        Cell::new("Status").fg(Color::White),
        Cell::new("Requires").fg(Color::White),
    ]);

    for node in &graph_state.computed_nodes {
        let requires = node
            .requires
            .iter()
            .map(|r| graph_state.label_of(r))
            .collect::<Vec<_>>()
            .join(", ");

        table.add_row(vec![
            Cell::new(node.id()),
            Cell::new(node.label()),
            Cell::new(&node.node.kind),
            status_cell(node.status),
            Cell::new(requires),
        ]);
    }

    println!();
    println!("{table}");
    println!();
    println!(
        "  {} nodes: {} base, {} unlocked, {} learned, {} locked",
        style(summary.total()).bold(),
        style(summary.base).green(),
        style(summary.unlocked).yellow(),
        style(summary.learned).blue(),
        style(summary.locked).dim(),
    );
    println!();

    Ok(())
}
