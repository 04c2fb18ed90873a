use serde::{Deserialize, Serialize};

use crate::models::domain::quiz_question::QuestionKind;

/// Result of scoring one quiz attempt. `per_question` is in quiz order so
/// callers can zip results with questions positionally.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct ScoreReport {
    pub earned_points: u32,
    pub total_points: u32,
    /// earned/total as a percentage, rounded to two decimal places.
    /// Zero when the quiz is worth zero points.
    pub percent: f64,
    pub per_question: Vec<QuestionResult>,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct QuestionResult {
    pub id: String,
    pub question_type: QuestionKind,
    pub earned: u32,
    pub total: u32,
    pub correct: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pair_breakdown: Option<Vec<PairResult>>,
}

/// Per-pair verdict for a matching question, retained for detailed
/// feedback rather than collapsed into the aggregate count.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct PairResult {
    pub left: String,
    pub selected: String,
    pub expected: String,
    pub correct: bool,
}
