//! Ontology validation command.

use std::path::Path;

use anyhow::Result;
use console::style;

use ontograph_core::ontology::validate as validate_document;
use ontograph_types::validation::ValidationResult;

use crate::state::AppState;

/// Validate the document and print the outcome. Returns whether it is valid.
pub async fn validate(state: &AppState, graph: Option<&Path>, json: bool, quiet: bool) -> Result<bool> {
    let doc = state.load_graph(graph).await?;
    let result = validate_document(&doc);

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(result.is_ok());
    }

    if quiet {
        return Ok(result.is_ok());
    }

    print_result(&result, doc.nodes.len(), doc.edges.len());
    Ok(result.is_ok())
}

fn print_result(result: &ValidationResult, nodes: usize, edges: usize) {
    println!();
    match result {
        ValidationResult::Ok => {
            println!(
                "  {} Ontology is valid ({} nodes, {} edges)",
                style("✓").green().bold(),
                nodes,
                edges
            );
        }
        ValidationResult::Invalid { errors } => {
            println!(
                "  {} {} defect{} found",
                style("✗").red().bold(),
                style(errors.len()).bold(),
                if errors.len() == 1 { "" } else { "s" }
            );
            println!();
            for (i, error) in errors.iter().enumerate() {
                println!("  {:>3}. {}", style(i + 1).dim(), error);
            }
        }
    }
    println!();
}
