//! Validation result of an ontology document.

use serde::{Deserialize, Serialize};

/// Either `{"ok": true}` or `{"ok": false, "errors": [...]}`.
///
/// Errors are human-readable and ordered the way they were found. Their
/// wording is stable and safe to match on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "ValidationWire", into = "ValidationWire")]
pub enum ValidationResult {
    Ok,
    Invalid { errors: Vec<String> },
}

impl ValidationResult {
    pub fn from_errors(errors: Vec<String>) -> Self {
        if errors.is_empty() {
            Self::Ok
        } else {
            Self::Invalid { errors }
        }
    }

    pub fn is_ok(&self) -> bool {
        matches!(self, Self::Ok)
    }

    pub fn errors(&self) -> &[String] {
        match self {
            Self::Ok => &[],
            Self::Invalid { errors } => errors,
        }
    }
}

#[derive(Serialize, Deserialize)]
struct ValidationWire {
    ok: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    errors: Vec<String>,
}

impl From<ValidationWire> for ValidationResult {
    fn from(wire: ValidationWire) -> Self {
        if wire.ok && wire.errors.is_empty() {
            Self::Ok
        } else {
            Self::Invalid {
                errors: wire.errors,
            }
        }
    }
}

impl From<ValidationResult> for ValidationWire {
    fn from(result: ValidationResult) -> Self {
        match result {
            ValidationResult::Ok => Self {
                ok: true,
                errors: Vec::new(),
            },
            ValidationResult::Invalid { errors } => Self { ok: false, errors },
        }
    }
}
