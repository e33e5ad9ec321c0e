//! Cycle detection over the `requires` sub-relation.
//!
//! Builds a `petgraph` arena of node ids and their `requires` edges
//! (source -> target), then runs a three-colour depth-first traversal with an
//! explicit work stack that reports every back edge as a cycle path. Nothing
//! here recurses, so depth is bounded by the heap, not the call stack.
//! petgraph's `is_cyclic_directed` does recurse and must not be used here.

use std::collections::HashMap;

use ontograph_types::graph::Edge;
use petgraph::graph::{DiGraph, NodeIndex};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Color {
    White,
    Gray,
    Black,
}

/// Find every cycle closure among `requires` edges.
///
/// `node_ids` must be unique; roots are tried in that order, so the output is
/// deterministic. Each cycle is returned as its node path with the closing
/// node repeated at the end (`["x", "y", "x"]`).
///
/// Endpoints that are not in `node_ids` join the arena after them, in edge
/// order, so a cycle through dangling ids is still reported. Edges with an
/// empty endpoint are skipped.
pub fn find_requires_cycles(node_ids: &[&str], edges: &[Edge]) -> Vec<Vec<String>> {
    let mut graph = DiGraph::<&str, ()>::with_capacity(node_ids.len(), edges.len());
    let mut index: HashMap<&str, NodeIndex> = node_ids
        .iter()
        .map(|&id| (id, graph.add_node(id)))
        .collect();

    // petgraph yields neighbours newest-first; keep our own list in edge order.
    let mut adjacency: Vec<Vec<NodeIndex>> = vec![Vec::new(); graph.node_count()];
    for edge in edges.iter().filter(|e| e.is_requires()) {
        if edge.source.is_empty() || edge.target.is_empty() {
            continue;
        }

        let from = arena_index(&edge.source, &mut graph, &mut index, &mut adjacency);
        let to = arena_index(&edge.target, &mut graph, &mut index, &mut adjacency);

        graph.add_edge(from, to, ());
        adjacency[from.index()].push(to);
    }

    let mut color = vec![Color::White; graph.node_count()];
    let mut cycles = Vec::new();

    for root in graph.node_indices() {
        if color[root.index()] != Color::White {
            continue;
        }

        // (node, position of the next neighbour to try)
        let mut stack: Vec<(NodeIndex, usize)> = vec![(root, 0)];
        color[root.index()] = Color::Gray;

        while let Some(frame) = stack.last_mut() {
            let node = frame.0;
            let Some(&to) = adjacency[node.index()].get(frame.1) else {
                color[node.index()] = Color::Black;
                stack.pop();
                continue;
            };
            frame.1 += 1;

            match color[to.index()] {
                Color::Gray => {
                    // Every gray node is on the stack.
                    let start = stack.iter().position(|&(n, _)| n == to).unwrap_or(0);
                    let mut path: Vec<String> = stack[start..]
                        .iter()
                        .map(|&(n, _)| graph[n].to_string())
                        .collect();
                    path.push(graph[to].to_string());
                    cycles.push(path);
                }
                Color::White => {
                    color[to.index()] = Color::Gray;
                    stack.push((to, 0));
                }
                Color::Black => {}
            }
        }
    }

    cycles
}

fn arena_index<'a>(
    id: &'a str,
    graph: &mut DiGraph<&'a str, ()>,
    index: &mut HashMap<&'a str, NodeIndex>,
    adjacency: &mut Vec<Vec<NodeIndex>>,
) -> NodeIndex {
    *index.entry(id).or_insert_with(|| {
        adjacency.push(Vec::new());
        graph.add_node(id)
    })
}
