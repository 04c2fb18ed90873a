use serde::Serialize;

use crate::models::domain::{Diagnostic, Quiz};

/// Wire shape of `POST /api/generate-quiz`. Success carries the quiz plus
/// the raw model text (kept for debugging display); failures carry an error
/// message, the raw text when one exists, and field-level details only for
/// schema mismatches.
#[derive(Debug, Clone, Serialize)]
pub struct GenerateQuizResponse {
    pub ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quiz: Option<Quiz>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub raw: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl GenerateQuizResponse {
    pub fn success(quiz: Quiz, raw: String) -> Self {
        Self {
            ok: true,
            quiz: Some(quiz),
            error: None,
            raw: Some(raw),
            details: None,
        }
    }

    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            ok: false,
            quiz: None,
            error: Some(error.into()),
            raw: None,
            details: None,
        }
    }

    pub fn from_diagnostic(diagnostic: Diagnostic) -> Self {
        let details = diagnostic.details();
        Self {
            ok: false,
            quiz: None,
            error: Some("Invalid JSON or schema mismatch".to_string()),
            raw: Some(diagnostic.raw().to_string()),
            details,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub ok: bool,
    pub service: &'static str,
}

impl HealthResponse {
    pub fn up() -> Self {
        Self {
            ok: true,
            service: "quizforge-server",
        }
    }
}
