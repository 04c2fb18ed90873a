use std::fmt;

use serde::{Deserialize, Serialize};

use crate::models::domain::quiz_question::QuizQuestion;

/// The five recognized quiz-type tags. `Mixed` permits heterogeneous
/// question variants within one quiz.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum QuizType {
    Mcq,
    FillBlank,
    Identification,
    Matching,
    Mixed,
}

impl QuizType {
    pub fn as_tag(&self) -> &'static str {
        match self {
            QuizType::Mcq => "mcq",
            QuizType::FillBlank => "fill_blank",
            QuizType::Identification => "identification",
            QuizType::Matching => "matching",
            QuizType::Mixed => "mixed",
        }
    }

    pub fn parse_tag(tag: &str) -> Option<Self> {
        match tag {
            "mcq" => Some(QuizType::Mcq),
            "fill_blank" => Some(QuizType::FillBlank),
            "identification" => Some(QuizType::Identification),
            "matching" => Some(QuizType::Matching),
            "mixed" => Some(QuizType::Mixed),
            _ => None,
        }
    }
}

impl fmt::Display for QuizType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_tag())
    }
}

/// A validated quiz. Values of this type only come out of the response
/// validator, so every invariant (question_count equals questions.len(),
/// answer_index in bounds, matching pairs unique) already holds and is
/// never re-checked downstream.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct Quiz {
    pub quiz_title: String,
    pub quiz_type: QuizType,
    pub question_count: usize,
    pub source_summary: String,
    pub questions: Vec<QuizQuestion>,
}
