use std::fmt;

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::domain::{Quiz, QuizType, UserAnswers};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub fn as_tag(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }

    pub fn parse_tag(tag: &str) -> Option<Self> {
        match tag {
            "easy" => Some(Difficulty::Easy),
            "medium" => Some(Difficulty::Medium),
            "hard" => Some(Difficulty::Hard),
            _ => None,
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_tag())
    }
}

/// Validated generation parameters, built by the handler from the raw
/// multipart fields before any AI call is made.
#[derive(Clone, Debug, Deserialize, Validate)]
pub struct GenerateQuizParams {
    pub quiz_type: QuizType,

    #[validate(range(min = 1, max = 100, message = "questionCount must be between 1 and 100"))]
    pub question_count: u32,

    pub difficulty: Option<Difficulty>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct ScoreQuizRequest {
    pub quiz: Quiz,
    #[serde(default)]
    pub answers: UserAnswers,
}
