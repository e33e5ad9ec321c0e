//! Learn/unlearn commands. Both rewrite the learned-set file.

use std::path::Path;

use anyhow::Result;
use console::style;

use ontograph_core::progress::{learn, unlearn};
use ontograph_core::state::resolve;
use ontograph_types::graph::GraphDocument;
use ontograph_types::state::{LearnedSet, NodeStatus};

use crate::state::AppState;

/// Mark `id` learned and return the ids it unlocked, in document order.
fn learn_and_unlock(doc: &GraphDocument, learned: &mut LearnedSet, id: &str) -> Result<Vec<String>> {
    let before = resolve(doc, learned);
    learn(learned, &before, id)?;
    let after = resolve(doc, learned);

    Ok(before
        .computed_nodes
        .iter()
        .zip(&after.computed_nodes)
        .filter(|(old, new)| old.status == NodeStatus::Locked && new.status == NodeStatus::Unlocked)
        .map(|(_, new)| new.id().to_string())
        .collect())
}

pub async fn learn_node(
    state: &AppState,
    graph: Option<&Path>,
    id: &str,
    store: Option<&Path>,
    json: bool,
) -> Result<()> {
    let doc = state.load_checked_graph(graph).await?;
    let path = state.learned_store_path(store)?;
    let mut learned = ontograph_infra::loader::load_learned_set(&path).await;

    let unlocked = learn_and_unlock(&doc, &mut learned, id)?;
    state.save_learned(&path, &learned).await?;

    if json {
        let out = serde_json::json!({
            "learned": id,
            "unlocked": unlocked,
        });
        println!("{}", serde_json::to_string_pretty(&out)?);
        return Ok(());
    }

    let labels = resolve(&doc, &learned);
    println!();
    println!(
        "  {} Learned '{}'",
        style("✓").green().bold(),
        labels.label_of(id)
    );
    for next in &unlocked {
        println!(
            "    {} unlocked {}",
            style("○").yellow(),
            style(labels.label_of(next)).bold()
        );
    }
    println!();

    Ok(())
}

pub async fn unlearn_node(state: &AppState, id: &str, store: Option<&Path>, json: bool) -> Result<()> {
    let path = state.learned_store_path(store)?;
    let mut learned = ontograph_infra::loader::load_learned_set(&path).await;

    let removed = unlearn(&mut learned, id);
    if removed {
        state.save_learned(&path, &learned).await?;
    }

    if json {
        let out = serde_json::json!({
            "unlearned": id,
            "removed": removed,
        });
        println!("{}", serde_json::to_string_pretty(&out)?);
        return Ok(());
    }

    println!();
    if removed {
        println!("  {} Unlearned '{}'", style("✓").green().bold(), id);
    } else {
        println!("  {} '{}' was not learned", style("ℹ").blue().bold(), id);
    }
    println!();

    Ok(())
}
