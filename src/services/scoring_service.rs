//! Deterministic answer scoring. Pure functions, no side effects: the same
//! (quiz, answers) pair always yields the same report, so callers may
//! invoke this repeatedly and concurrently.

use crate::models::domain::{
    PairResult, QuestionResult, Quiz, QuizQuestion, ScoreReport, UserAnswers,
};

/// Normalization applied before free-text comparison: trim, collapse
/// internal whitespace runs to a single space, case-fold. Applied
/// symmetrically to the submission and every accepted answer.
pub fn normalize_answer(value: &str) -> String {
    value
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

/// Score a validated quiz against a set of submitted answers. Missing
/// entries count as unanswered (incorrect), never as errors.
pub fn score_quiz(quiz: &Quiz, answers: &UserAnswers) -> ScoreReport {
    let mut earned_points = 0u32;
    let mut total_points = 0u32;
    let mut per_question = Vec::with_capacity(quiz.questions.len());

    for question in &quiz.questions {
        let result = score_question(question, answers);
        earned_points += result.earned;
        total_points += result.total;
        per_question.push(result);
    }

    ScoreReport {
        earned_points,
        total_points,
        percent: percent(earned_points, total_points),
        per_question,
    }
}

fn score_question(question: &QuizQuestion, answers: &UserAnswers) -> QuestionResult {
    match question {
        QuizQuestion::Mcq {
            id, answer_index, ..
        } => {
            let correct = answers.mcq.get(id) == Some(answer_index);
            single_point_result(question, correct)
        }
        QuizQuestion::FillBlank { id, answers: accepted, .. }
        | QuizQuestion::Identification { id, answers: accepted, .. } => {
            let submitted = normalize_answer(answers.text.get(id).map_or("", String::as_str));
            let correct = accepted
                .iter()
                .any(|answer| normalize_answer(answer) == submitted);
            single_point_result(question, correct)
        }
        QuizQuestion::Matching { id, pairs, .. } => {
            let selected_pairs = answers.matching.get(id);
            let mut earned = 0u32;
            let breakdown: Vec<PairResult> = pairs
                .iter()
                .map(|pair| {
                    let selected = selected_pairs
                        .and_then(|slots| slots.get(&pair.left))
                        .cloned()
                        .unwrap_or_default();
                    // Exact string equality here, no normalization: the
                    // selections come from the quiz's own right values.
                    let correct = selected == pair.right;
                    if correct {
                        earned += 1;
                    }
                    PairResult {
                        left: pair.left.clone(),
                        selected,
                        expected: pair.right.clone(),
                        correct,
                    }
                })
                .collect();

            let total = question.point_value();
            QuestionResult {
                id: id.clone(),
                question_type: question.kind(),
                earned,
                total,
                correct: earned == total,
                pair_breakdown: Some(breakdown),
            }
        }
    }
}

fn single_point_result(question: &QuizQuestion, correct: bool) -> QuestionResult {
    QuestionResult {
        id: question.id().to_string(),
        question_type: question.kind(),
        earned: u32::from(correct),
        total: question.point_value(),
        correct,
        pair_breakdown: None,
    }
}

fn percent(earned: u32, total: u32) -> f64 {
    if total == 0 {
        return 0.0;
    }
    (f64::from(earned) / f64::from(total) * 10_000.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::domain::{MatchingPair, QuestionKind, QuizType};

    fn mcq_quiz() -> Quiz {
        Quiz {
            quiz_title: "Geography".to_string(),
            quiz_type: QuizType::Mcq,
            question_count: 1,
            source_summary: "Notes.".to_string(),
            questions: vec![QuizQuestion::Mcq {
                id: "q-1".to_string(),
                prompt: "Pick one".to_string(),
                choices: vec![
                    "A".to_string(),
                    "B".to_string(),
                    "C".to_string(),
                    "D".to_string(),
                ],
                answer_index: 2,
                explanation: "C is correct.".to_string(),
            }],
        }
    }

    fn matching_quiz() -> Quiz {
        Quiz {
            quiz_title: "Chemistry".to_string(),
            quiz_type: QuizType::Matching,
            question_count: 1,
            source_summary: "Notes.".to_string(),
            questions: vec![QuizQuestion::Matching {
                id: "q-1".to_string(),
                pairs: vec![
                    MatchingPair {
                        left: "H2O".to_string(),
                        right: "water".to_string(),
                    },
                    MatchingPair {
                        left: "NaCl".to_string(),
                        right: "salt".to_string(),
                    },
                    MatchingPair {
                        left: "CO2".to_string(),
                        right: "carbon dioxide".to_string(),
                    },
                ],
                explanation: "Common compounds.".to_string(),
            }],
        }
    }

    #[test]
    fn normalize_trims_collapses_and_lowercases() {
        assert_eq!(normalize_answer("  Paris  "), "paris");
        assert_eq!(normalize_answer("NEW   york\tCity"), "new york city");
        assert_eq!(normalize_answer(""), "");
        assert_eq!(normalize_answer("   "), "");
    }

    #[test]
    fn mcq_selecting_answer_index_earns_the_point() {
        let quiz = mcq_quiz();
        let mut answers = UserAnswers::new();
        answers.select_choice("q-1", 2);

        let report = score_quiz(&quiz, &answers);

        assert_eq!(report.earned_points, 1);
        assert_eq!(report.total_points, 1);
        assert_eq!(report.percent, 100.0);
        assert!(report.per_question[0].correct);
        assert_eq!(report.per_question[0].question_type, QuestionKind::Mcq);
    }

    #[test]
    fn mcq_selecting_wrong_index_earns_nothing() {
        let quiz = mcq_quiz();
        let mut answers = UserAnswers::new();
        answers.select_choice("q-1", 0);

        let report = score_quiz(&quiz, &answers);

        assert_eq!(report.earned_points, 0);
        assert!(!report.per_question[0].correct);
    }

    #[test]
    fn mcq_unanswered_is_incorrect_not_an_error() {
        let quiz = mcq_quiz();
        let report = score_quiz(&quiz, &UserAnswers::new());

        assert_eq!(report.earned_points, 0);
        assert_eq!(report.total_points, 1);
        assert!(!report.per_question[0].correct);
    }

    #[test]
    fn fill_blank_matches_after_symmetric_normalization() {
        let quiz = Quiz {
            quiz_title: "Geography".to_string(),
            quiz_type: QuizType::FillBlank,
            question_count: 1,
            source_summary: "Notes.".to_string(),
            questions: vec![QuizQuestion::FillBlank {
                id: "q-1".to_string(),
                prompt: "The capital of France is ____.".to_string(),
                answers: vec!["Paris".to_string(), "  THE   city of Paris ".to_string()],
                explanation: "Basic geography.".to_string(),
            }],
        };

        let mut answers = UserAnswers::new();
        answers.enter_text("q-1", "  paris  ");
        assert!(score_quiz(&quiz, &answers).per_question[0].correct);

        answers.enter_text("q-1", "the city   of PARIS");
        assert!(score_quiz(&quiz, &answers).per_question[0].correct);

        answers.enter_text("q-1", "pariss");
        assert!(!score_quiz(&quiz, &answers).per_question[0].correct);
    }

    #[test]
    fn fill_blank_requires_whole_string_match_not_substring() {
        let quiz = Quiz {
            quiz_title: "Geography".to_string(),
            quiz_type: QuizType::Identification,
            question_count: 1,
            source_summary: "Notes.".to_string(),
            questions: vec![QuizQuestion::Identification {
                id: "q-1".to_string(),
                prompt: "Name the capital of France.".to_string(),
                answers: vec!["Paris".to_string()],
                explanation: "Basic geography.".to_string(),
            }],
        };

        let mut answers = UserAnswers::new();
        answers.enter_text("q-1", "Paris, France");

        assert!(!score_quiz(&quiz, &answers).per_question[0].correct);
    }

    #[test]
    fn matching_awards_partial_credit_with_full_breakdown() {
        let quiz = matching_quiz();
        let mut answers = UserAnswers::new();
        answers.select_match("q-1", "H2O", "water");
        answers.select_match("q-1", "NaCl", "salt");
        answers.select_match("q-1", "CO2", "water");

        let report = score_quiz(&quiz, &answers);
        let result = &report.per_question[0];

        assert_eq!(result.earned, 2);
        assert_eq!(result.total, 3);
        assert!(!result.correct);

        let breakdown = result.pair_breakdown.as_ref().expect("breakdown present");
        assert_eq!(breakdown.len(), 3);
        assert!(breakdown[0].correct);
        assert!(breakdown[1].correct);
        assert!(!breakdown[2].correct);
        assert_eq!(breakdown[2].selected, "water");
        assert_eq!(breakdown[2].expected, "carbon dioxide");
        assert_eq!(report.percent, 66.67);
    }

    #[test]
    fn matching_with_nothing_selected_scores_zero_of_n() {
        let quiz = matching_quiz();
        let report = score_quiz(&quiz, &UserAnswers::new());
        let result = &report.per_question[0];

        assert_eq!(result.earned, 0);
        assert_eq!(result.total, 3);
        assert!(!result.correct);
        let breakdown = result.pair_breakdown.as_ref().expect("breakdown present");
        assert!(breakdown.iter().all(|pair| pair.selected.is_empty()));
    }

    #[test]
    fn matching_comparison_is_exact_not_normalized() {
        let quiz = matching_quiz();
        let mut answers = UserAnswers::new();
        answers.select_match("q-1", "H2O", "Water");

        let report = score_quiz(&quiz, &answers);
        assert_eq!(report.per_question[0].earned, 0);
    }

    #[test]
    fn results_are_in_quiz_question_order() {
        let mut quiz = mcq_quiz();
        quiz.questions.push(QuizQuestion::Identification {
            id: "q-2".to_string(),
            prompt: "Who wrote Dune?".to_string(),
            answers: vec!["Frank Herbert".to_string()],
            explanation: "Published 1965.".to_string(),
        });
        quiz.question_count = 2;

        let report = score_quiz(&quiz, &UserAnswers::new());
        let ids: Vec<&str> = report
            .per_question
            .iter()
            .map(|result| result.id.as_str())
            .collect();

        assert_eq!(ids, vec!["q-1", "q-2"]);
    }

    #[test]
    fn empty_quiz_scores_zero_percent_without_dividing() {
        let quiz = Quiz {
            quiz_title: "Empty".to_string(),
            quiz_type: QuizType::Mixed,
            question_count: 0,
            source_summary: "Nothing.".to_string(),
            questions: vec![],
        };

        let report = score_quiz(&quiz, &UserAnswers::new());

        assert_eq!(report.total_points, 0);
        assert_eq!(report.percent, 0.0);
        assert!(report.per_question.is_empty());
    }

    #[test]
    fn total_points_are_the_sum_of_question_point_values() {
        let mut quiz = matching_quiz();
        quiz.questions.extend(mcq_quiz().questions);
        quiz.question_count = 2;

        let expected: u32 = quiz.questions.iter().map(QuizQuestion::point_value).sum();
        let report = score_quiz(&quiz, &UserAnswers::new());

        assert_eq!(expected, 4);
        assert_eq!(report.total_points, expected);
    }

    #[test]
    fn scoring_is_idempotent() {
        let quiz = matching_quiz();
        let mut answers = UserAnswers::new();
        answers.select_match("q-1", "H2O", "water");

        let first = score_quiz(&quiz, &answers);
        let second = score_quiz(&quiz, &answers);

        assert_eq!(first, second);
    }

    #[test]
    fn percent_rounds_to_two_decimal_places() {
        assert_eq!(percent(1, 3), 33.33);
        assert_eq!(percent(2, 3), 66.67);
        assert_eq!(percent(1, 1), 100.0);
        assert_eq!(percent(0, 0), 0.0);
    }
}
