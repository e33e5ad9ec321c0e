//! Single-node detail command.

use std::path::Path;

use anyhow::{Result, bail};
use console::style;

use ontograph_core::progress::{can_learn, requirement_view};
use ontograph_core::state::resolve;
use ontograph_types::state::NodeStatus;

use super::{LearnedArgs, styled_status};
use crate::state::AppState;

/// Show a node, its prerequisites with learned marks, and whether it can be
/// learned now.
pub async fn show_node(
    state: &AppState,
    graph: Option<&Path>,
    id: &str,
    learned: &LearnedArgs,
    json: bool,
) -> Result<()> {
    let doc = state.load_checked_graph(graph).await?;
    let learned = state.load_learned(learned).await;
    let graph_state = resolve(&doc, &learned);

    let Some(node) = graph_state.node(id) else {
        bail!("Node '{id}' not found");
    };
    let requirements = requirement_view(&graph_state, &learned, id).unwrap_or_default();
    let learnable = can_learn(node.status);

    if json {
        let out = serde_json::json!({
            "node": node,
            "requirements": requirements,
            "can_learn": learnable,
        });
        println!("{}", serde_json::to_string_pretty(&out)?);
        return Ok(());
    }

    println!();
    println!("  {} {}", style(node.label()).bold(), style(format!("({})", node.id())).dim());
    println!();
    println!("  Kind:     {}", node.node.kind);
    if let Some(domain) = &node.node.domain {
        println!("  Domain:   {domain}");
    }
    println!("  Status:   {}", styled_status(node.status));
    if !node.node.tags.is_empty() {
        println!("  Tags:     {}", node.node.tags.join(", "));
    }
    if let Some(description) = &node.node.description {
        println!();
        println!("  {description}");
    }

    println!();
    println!("  {}", style("── Requirements ──").dim());
    if requirements.is_empty() {
        println!("  {}", style("none").dim());
    }
    for req in &requirements {
        let mark = if req.learned {
            style("✓").green()
        } else {
            style("·").dim()
        };
        println!("  {mark} {}", req.label);
    }

    println!();
    match node.status {
        NodeStatus::Learned => {
            println!("  {} Already learned", style("✓").blue().bold());
        }
        NodeStatus::Locked => {
            println!(
                "  {} Locked. Run `ontograph path {}` to see what to learn first.",
                style("◌").dim(),
                node.id()
            );
        }
        NodeStatus::Base | NodeStatus::Unlocked => {
            println!("  {} Ready to learn", style("●").green().bold());
        }
    }
    println!();

    Ok(())
}
