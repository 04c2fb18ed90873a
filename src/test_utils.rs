#[cfg(test)]
pub mod fixtures {
    use crate::models::domain::{MatchingPair, Quiz, QuizQuestion, QuizType};

    /// A minimal valid one-question mcq quiz.
    pub fn mcq_quiz() -> Quiz {
        Quiz {
            quiz_title: "Geography basics".to_string(),
            quiz_type: QuizType::Mcq,
            question_count: 1,
            source_summary: "Notes about European capitals.".to_string(),
            questions: vec![QuizQuestion::Mcq {
                id: "q-1".to_string(),
                prompt: "What is the capital of France?".to_string(),
                choices: vec![
                    "Paris".to_string(),
                    "Lyon".to_string(),
                    "Nice".to_string(),
                    "Lille".to_string(),
                ],
                answer_index: 0,
                explanation: "Paris has been the capital since 987.".to_string(),
            }],
        }
    }

    /// The same quiz as schema-conformant JSON text, as the model would
    /// return it.
    pub fn mcq_quiz_json() -> String {
        serde_json::to_string(&mcq_quiz()).expect("fixture quiz serializes")
    }

    /// A quiz exercising all four question shapes.
    pub fn mixed_quiz() -> Quiz {
        let mut quiz = mcq_quiz();
        quiz.quiz_type = QuizType::Mixed;
        quiz.questions.push(QuizQuestion::FillBlank {
            id: "q-2".to_string(),
            prompt: "The capital of Italy is ____.".to_string(),
            answers: vec!["Rome".to_string()],
            explanation: "Rome is the Italian capital.".to_string(),
        });
        quiz.questions.push(QuizQuestion::Identification {
            id: "q-3".to_string(),
            prompt: "Name the longest river in Europe.".to_string(),
            answers: vec!["Volga".to_string(), "the Volga".to_string()],
            explanation: "The Volga runs 3,531 km.".to_string(),
        });
        quiz.questions.push(QuizQuestion::Matching {
            id: "q-4".to_string(),
            pairs: vec![
                MatchingPair {
                    left: "Spain".to_string(),
                    right: "Madrid".to_string(),
                },
                MatchingPair {
                    left: "Portugal".to_string(),
                    right: "Lisbon".to_string(),
                },
            ],
            explanation: "Iberian capitals.".to_string(),
        });
        quiz.question_count = quiz.questions.len();
        quiz
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::*;
    use crate::services::validate_quiz_response;

    #[test]
    fn mcq_fixture_passes_the_validator() {
        let quiz = validate_quiz_response(&mcq_quiz_json()).expect("fixture should validate");
        assert_eq!(quiz, mcq_quiz());
    }

    #[test]
    fn mixed_fixture_passes_the_validator() {
        let raw = serde_json::to_string(&mixed_quiz()).unwrap();
        let quiz = validate_quiz_response(&raw).expect("fixture should validate");
        assert_eq!(quiz.questions.len(), 4);
    }
}
