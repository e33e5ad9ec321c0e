//! Learn/unlearn policy on top of a resolved [`GraphState`].
//!
//! The learned-set belongs to the caller; these helpers only mutate the set
//! they are handed. Re-run [`crate::state::resolve`] after any change.

use serde::Serialize;

use ontograph_types::error::ProgressError;
use ontograph_types::state::{GraphState, LearnedSet, NodeStatus};

/// Only `base` and `unlocked` nodes can be marked learned.
pub fn can_learn(status: NodeStatus) -> bool {
    !matches!(status, NodeStatus::Locked | NodeStatus::Learned)
}

/// Mark `id` as learned.
///
/// `state` must have been resolved from `learned`. Locked nodes are refused
/// with the prerequisites still missing, in `requires` order.
pub fn learn(learned: &mut LearnedSet, state: &GraphState, id: &str) -> Result<(), ProgressError> {
    let node = state
        .node(id)
        .ok_or_else(|| ProgressError::UnknownNode(id.to_string()))?;

    match node.status {
        NodeStatus::Learned => Err(ProgressError::AlreadyLearned(id.to_string())),
        NodeStatus::Locked => Err(ProgressError::Locked {
            id: id.to_string(),
            missing: node
                .requires
                .iter()
                .filter(|r| !learned.contains(*r))
                .cloned()
                .collect(),
        }),
        NodeStatus::Base | NodeStatus::Unlocked => {
            learned.insert(id.to_string());
            tracing::debug!(node = %id, "marked learned");
            Ok(())
        }
    }
}

/// Remove `id` from the learned-set. Returns whether it was present.
///
/// Dependants that were learned stay learned; nothing cascades.
pub fn unlearn(learned: &mut LearnedSet, id: &str) -> bool {
    let removed = learned.remove(id);
    if removed {
        tracing::debug!(node = %id, "marked unlearned");
    }
    removed
}

/// One prerequisite of a node, ready for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RequirementView {
    pub id: String,
    /// Node label, or the raw id when the requirement points nowhere.
    pub label: String,
    pub learned: bool,
}

/// The requirements of `id` with labels and learned marks, or `None` if the
/// node is unknown.
pub fn requirement_view(
    state: &GraphState,
    learned: &LearnedSet,
    id: &str,
) -> Option<Vec<RequirementView>> {
    let node = state.node(id)?;
    Some(
        node.requires
            .iter()
            .map(|req| RequirementView {
                id: req.clone(),
                label: state.label_of(req).to_string(),
                learned: learned.contains(req),
            })
            .collect(),
    )
}

/// Node counts per status.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct StatusSummary {
    pub base: usize,
    pub locked: usize,
    pub unlocked: usize,
    pub learned: usize,
}

impl StatusSummary {
    pub fn from_state(state: &GraphState) -> Self {
        let mut summary = Self::default();
        for node in &state.computed_nodes {
            match node.status {
                NodeStatus::Base => summary.base += 1,
                NodeStatus::Locked => summary.locked += 1,
                NodeStatus::Unlocked => summary.unlocked += 1,
                NodeStatus::Learned => summary.learned += 1,
            }
        }
        summary
    }

    pub fn total(&self) -> usize {
        self.base + self.locked + self.unlocked + self.learned
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::resolve;
    use ontograph_types::graph::{Edge, GraphDocument, Node, NodeKind, Relation};

    /// archer requires pushups, pushups requires plank.
    fn fitness_doc() -> GraphDocument {
        GraphDocument::new(
            vec![
                Node::new("plank", "Plank", NodeKind::Skill),
                Node::new("pushups", "Push-ups", NodeKind::Skill),
                Node::new("archer", "Archer push-ups", NodeKind::Skill),
            ],
            vec![
                Edge::new("e1", "pushups", "plank", Relation::Requires),
                Edge::new("e2", "archer", "pushups", Relation::Requires),
            ],
        )
    }

    #[test]
    fn test_can_learn_by_status() {
        assert!(can_learn(NodeStatus::Base));
        assert!(can_learn(NodeStatus::Unlocked));
        assert!(!can_learn(NodeStatus::Locked));
        assert!(!can_learn(NodeStatus::Learned));
    }

    #[test]
    fn test_learn_base_then_unlocked() {
        let doc = fitness_doc();
        let mut learned = LearnedSet::new();

        let state = resolve(&doc, &learned);
        learn(&mut learned, &state, "plank").unwrap();
        assert!(learned.contains("plank"));

        let state = resolve(&doc, &learned);
        assert_eq!(state.node("pushups").unwrap().status, NodeStatus::Unlocked);
        learn(&mut learned, &state, "pushups").unwrap();
        assert_eq!(learned.len(), 2);
    }

    #[test]
    fn test_learn_locked_reports_missing() {
        let doc = fitness_doc();
        let mut learned = LearnedSet::new();
        let state = resolve(&doc, &learned);

        let err = learn(&mut learned, &state, "archer").unwrap_err();
        assert_eq!(
            err,
            ProgressError::Locked {
                id: "archer".to_string(),
                missing: vec!["pushups".to_string()],
            }
        );
        assert!(learned.is_empty());
    }

    #[test]
    fn test_learn_twice_and_unknown() {
        let doc = fitness_doc();
        let mut learned: LearnedSet = ["plank".to_string()].into_iter().collect();
        let state = resolve(&doc, &learned);

        assert_eq!(
            learn(&mut learned, &state, "plank").unwrap_err(),
            ProgressError::AlreadyLearned("plank".to_string())
        );
        assert_eq!(
            learn(&mut learned, &state, "nope").unwrap_err(),
            ProgressError::UnknownNode("nope".to_string())
        );
    }

    #[test]
    fn test_unlearn_does_not_cascade() {
        let doc = fitness_doc();
        let mut learned: LearnedSet = ["plank", "pushups"].into_iter().map(String::from).collect();

        assert!(unlearn(&mut learned, "plank"));
        assert!(!unlearn(&mut learned, "plank"));
        assert!(learned.contains("pushups"));

        let state = resolve(&doc, &learned);
        assert_eq!(state.node("plank").unwrap().status, NodeStatus::Base);
        assert_eq!(state.node("pushups").unwrap().status, NodeStatus::Learned);
        assert_eq!(state.node("archer").unwrap().status, NodeStatus::Unlocked);
    }

    #[test]
    fn test_requirement_view_labels_and_marks() {
        let mut doc = fitness_doc();
        doc.edges
            .push(Edge::new("e3", "pushups", "ghost", Relation::Requires));
        let learned: LearnedSet = ["plank".to_string()].into_iter().collect();
        let state = resolve(&doc, &learned);

        let view = requirement_view(&state, &learned, "pushups").unwrap();
        assert_eq!(
            view,
            vec![
                RequirementView {
                    id: "plank".into(),
                    label: "Plank".into(),
                    learned: true,
                },
                RequirementView {
                    id: "ghost".into(),
                    label: "ghost".into(),
                    learned: false,
                },
            ]
        );
        assert!(requirement_view(&state, &learned, "nope").is_none());
    }

    #[test]
    fn test_status_summary_counts() {
        let doc = fitness_doc();
        let learned: LearnedSet = ["plank".to_string()].into_iter().collect();
        let summary = StatusSummary::from_state(&resolve(&doc, &learned));
        assert_eq!(
            summary,
            StatusSummary {
                base: 0,
                locked: 1,
                unlocked: 1,
                learned: 1,
            }
        );
        assert_eq!(summary.total(), 3);
    }
}
