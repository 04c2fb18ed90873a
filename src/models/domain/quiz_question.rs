use serde::{Deserialize, Serialize};

/// One quiz question, discriminated by the `type` tag the model emits.
///
/// The four shapes share no behavior beyond `id` and `explanation`, so this
/// is a tagged sum type rather than a trait hierarchy. Field constraints
/// (non-empty text, choices >= 4, unique matching pairs, ...) are enforced
/// by the response validator, not by construction.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum QuizQuestion {
    Mcq {
        id: String,
        prompt: String,
        choices: Vec<String>,
        answer_index: usize,
        explanation: String,
    },
    FillBlank {
        id: String,
        prompt: String,
        answers: Vec<String>,
        explanation: String,
    },
    Identification {
        id: String,
        prompt: String,
        answers: Vec<String>,
        explanation: String,
    },
    Matching {
        id: String,
        pairs: Vec<MatchingPair>,
        explanation: String,
    },
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct MatchingPair {
    pub left: String,
    pub right: String,
}

/// Question shape without the per-variant payload, used in score reports.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionKind {
    Mcq,
    FillBlank,
    Identification,
    Matching,
}

impl QuizQuestion {
    pub fn id(&self) -> &str {
        match self {
            QuizQuestion::Mcq { id, .. }
            | QuizQuestion::FillBlank { id, .. }
            | QuizQuestion::Identification { id, .. }
            | QuizQuestion::Matching { id, .. } => id,
        }
    }

    pub fn kind(&self) -> QuestionKind {
        match self {
            QuizQuestion::Mcq { .. } => QuestionKind::Mcq,
            QuizQuestion::FillBlank { .. } => QuestionKind::FillBlank,
            QuizQuestion::Identification { .. } => QuestionKind::Identification,
            QuizQuestion::Matching { .. } => QuestionKind::Matching,
        }
    }

    /// Points the question is worth: one for everything except matching,
    /// which awards one point per pair.
    pub fn point_value(&self) -> u32 {
        match self {
            QuizQuestion::Matching { pairs, .. } => pairs.len() as u32,
            _ => 1,
        }
    }
}
