use thiserror::Error;

/// Errors from building or querying an ontology document.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum OntologyError {
    /// A checked constructor was given an empty required field (e.g. `Node.id`).
    #[error("{0} is required")]
    MissingField(&'static str),

    #[error("node '{0}' not found")]
    UnknownNode(String),

    #[error("requires cycle detected involving node '{0}'")]
    CycleDetected(String),
}

/// Errors from applying a learn action to a learned-set.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ProgressError {
    #[error("node '{0}' not found")]
    UnknownNode(String),

    #[error("node '{id}' is locked; missing prerequisites: {}", .missing.join(", "))]
    Locked { id: String, missing: Vec<String> },

    #[error("node '{0}' is already learned")]
    AlreadyLearned(String),
}
