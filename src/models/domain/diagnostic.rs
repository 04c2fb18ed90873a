use serde::{Deserialize, Serialize};

/// Structured failure description returned instead of a `Quiz` when the
/// model's output cannot be trusted. Always carries the raw text verbatim
/// for operator debugging; never silently dropped.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Diagnostic {
    /// The raw text is not syntactically valid JSON. No field-level detail
    /// is possible.
    ParseError { raw: String, message: String },
    /// The JSON parsed but violates the quiz schema. `issues` is the
    /// complete list of violations, not just the first one found.
    SchemaMismatch {
        raw: String,
        issues: Vec<ValidationIssue>,
    },
}

/// One schema violation, addressed by a field path such as
/// `questions[2].answer_index`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct ValidationIssue {
    pub path: String,
    pub message: String,
}

impl ValidationIssue {
    pub fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }
}

impl Diagnostic {
    pub fn category(&self) -> &'static str {
        match self {
            Diagnostic::ParseError { .. } => "parse_error",
            Diagnostic::SchemaMismatch { .. } => "schema_mismatch",
        }
    }

    pub fn raw(&self) -> &str {
        match self {
            Diagnostic::ParseError { raw, .. } | Diagnostic::SchemaMismatch { raw, .. } => raw,
        }
    }

    /// Serialized issue list for schema mismatches; parse failures have no
    /// field-level detail to serialize.
    pub fn details(&self) -> Option<String> {
        match self {
            Diagnostic::ParseError { .. } => None,
            Diagnostic::SchemaMismatch { issues, .. } => {
                serde_json::to_string_pretty(issues).ok()
            }
        }
    }
}
