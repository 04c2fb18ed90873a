//! The trust boundary between the model and the rest of the system.
//!
//! The model is an untrusted producer of structured text. Everything it
//! returns passes through `validate_quiz_response`, which either yields a
//! fully typed `Quiz` whose invariants all hold, or a `Diagnostic` listing
//! every violation found. Checks do not short-circuit: the usual
//! remediation is regenerating with corrective prompt text, which needs the
//! complete error list, not one error per retry.

use std::collections::HashSet;

use serde_json::{Map, Value};

use crate::models::domain::{
    Diagnostic, MatchingPair, Quiz, QuizQuestion, QuizType, ValidationIssue,
};

/// Literal blank marker required in fill_blank prompts.
pub const BLANK_MARKER: &str = "____";

const MIN_MCQ_CHOICES: usize = 4;

pub fn validate_quiz_response(raw: &str) -> Result<Quiz, Diagnostic> {
    let value: Value = match serde_json::from_str(raw) {
        Ok(value) => value,
        Err(err) => {
            return Err(Diagnostic::ParseError {
                raw: raw.to_string(),
                message: err.to_string(),
            })
        }
    };

    let mut issues = Vec::new();
    match validate_root(&value, &mut issues) {
        Some(quiz) if issues.is_empty() => Ok(quiz),
        _ => Err(Diagnostic::SchemaMismatch {
            raw: raw.to_string(),
            issues,
        }),
    }
}

fn validate_root(value: &Value, issues: &mut Vec<ValidationIssue>) -> Option<Quiz> {
    let Some(obj) = value.as_object() else {
        issues.push(ValidationIssue::new("$", "response must be a JSON object"));
        return None;
    };

    let quiz_title = non_empty_string(obj, "", "quiz_title", issues);
    let quiz_type = quiz_type_field(obj, issues);
    let question_count = positive_integer(obj, "question_count", issues);
    let source_summary = non_empty_string(obj, "", "source_summary", issues);
    let questions = questions_field(obj, issues);

    // Cross-field: question_count against the actual array length. Uses the
    // raw length so the mismatch is reported even when individual questions
    // also failed validation.
    if let (Some(count), Some(actual)) = (
        question_count,
        obj.get("questions").and_then(Value::as_array).map(Vec::len),
    ) {
        if count != actual {
            issues.push(ValidationIssue::new(
                "question_count",
                "question_count must equal the number of questions",
            ));
        }
    }

    Some(Quiz {
        quiz_title: quiz_title?,
        quiz_type: quiz_type?,
        question_count: question_count?,
        source_summary: source_summary?,
        questions: questions?,
    })
}

fn questions_field(
    obj: &Map<String, Value>,
    issues: &mut Vec<ValidationIssue>,
) -> Option<Vec<QuizQuestion>> {
    let Some(value) = obj.get("questions") else {
        issues.push(ValidationIssue::new("questions", "missing required field"));
        return None;
    };
    let Some(array) = value.as_array() else {
        issues.push(ValidationIssue::new("questions", "must be an array"));
        return None;
    };
    if array.is_empty() {
        issues.push(ValidationIssue::new(
            "questions",
            "must contain at least one question",
        ));
        return None;
    }

    // First pass: per-variant structural shape, every question checked.
    let validated: Vec<Option<QuizQuestion>> = array
        .iter()
        .enumerate()
        .map(|(index, entry)| validate_question(entry, index, issues))
        .collect();

    // Second pass: cross-field invariants, applied to the questions whose
    // structure held up.
    for (index, question) in validated.iter().enumerate() {
        if let Some(question) = question {
            check_question_invariants(question, index, issues);
        }
    }

    validated.into_iter().collect()
}

fn validate_question(
    value: &Value,
    index: usize,
    issues: &mut Vec<ValidationIssue>,
) -> Option<QuizQuestion> {
    let prefix = format!("questions[{index}]");
    let Some(obj) = value.as_object() else {
        issues.push(ValidationIssue::new(prefix, "must be a JSON object"));
        return None;
    };

    let tag = match obj.get("type") {
        Some(Value::String(tag)) => tag.as_str(),
        Some(_) => {
            issues.push(ValidationIssue::new(
                field_path(&prefix, "type"),
                "must be a string",
            ));
            return None;
        }
        None => {
            issues.push(ValidationIssue::new(
                field_path(&prefix, "type"),
                "missing required field",
            ));
            return None;
        }
    };

    match tag {
        "mcq" => {
            let id = non_empty_string(obj, &prefix, "id", issues);
            let prompt = non_empty_string(obj, &prefix, "prompt", issues);
            let choices = string_array(obj, &prefix, "choices", MIN_MCQ_CHOICES, issues);
            let answer_index = non_negative_integer(obj, &prefix, "answer_index", issues);
            let explanation = non_empty_string(obj, &prefix, "explanation", issues);

            Some(QuizQuestion::Mcq {
                id: id?,
                prompt: prompt?,
                choices: choices?,
                answer_index: answer_index?,
                explanation: explanation?,
            })
        }
        "fill_blank" => {
            let id = non_empty_string(obj, &prefix, "id", issues);
            let prompt = non_empty_string(obj, &prefix, "prompt", issues).and_then(|prompt| {
                if prompt.contains(BLANK_MARKER) {
                    Some(prompt)
                } else {
                    issues.push(ValidationIssue::new(
                        field_path(&prefix, "prompt"),
                        "must contain the blank marker ____",
                    ));
                    None
                }
            });
            let answers = string_array(obj, &prefix, "answers", 1, issues);
            let explanation = non_empty_string(obj, &prefix, "explanation", issues);

            Some(QuizQuestion::FillBlank {
                id: id?,
                prompt: prompt?,
                answers: answers?,
                explanation: explanation?,
            })
        }
        "identification" => {
            let id = non_empty_string(obj, &prefix, "id", issues);
            let prompt = non_empty_string(obj, &prefix, "prompt", issues);
            let answers = string_array(obj, &prefix, "answers", 1, issues);
            let explanation = non_empty_string(obj, &prefix, "explanation", issues);

            Some(QuizQuestion::Identification {
                id: id?,
                prompt: prompt?,
                answers: answers?,
                explanation: explanation?,
            })
        }
        "matching" => {
            let id = non_empty_string(obj, &prefix, "id", issues);
            let pairs = matching_pairs(obj, &prefix, issues);
            let explanation = non_empty_string(obj, &prefix, "explanation", issues);

            Some(QuizQuestion::Matching {
                id: id?,
                pairs: pairs?,
                explanation: explanation?,
            })
        }
        other => {
            issues.push(ValidationIssue::new(
                field_path(&prefix, "type"),
                format!("unknown question type \"{other}\""),
            ));
            None
        }
    }
}

fn check_question_invariants(
    question: &QuizQuestion,
    index: usize,
    issues: &mut Vec<ValidationIssue>,
) {
    let prefix = format!("questions[{index}]");
    match question {
        QuizQuestion::Mcq {
            choices,
            answer_index,
            ..
        } => {
            if *answer_index >= choices.len() {
                issues.push(ValidationIssue::new(
                    field_path(&prefix, "answer_index"),
                    "answer_index must reference an existing choices entry",
                ));
            }
        }
        QuizQuestion::Matching { pairs, .. } => {
            let mut lefts = HashSet::new();
            let mut rights = HashSet::new();
            for (pair_index, pair) in pairs.iter().enumerate() {
                if !lefts.insert(pair.left.as_str()) {
                    issues.push(ValidationIssue::new(
                        format!("{prefix}.pairs[{pair_index}].left"),
                        "matching left values must be unique",
                    ));
                }
                if !rights.insert(pair.right.as_str()) {
                    issues.push(ValidationIssue::new(
                        format!("{prefix}.pairs[{pair_index}].right"),
                        "matching right values must be unique",
                    ));
                }
            }
        }
        QuizQuestion::FillBlank { .. } | QuizQuestion::Identification { .. } => {}
    }
}

fn quiz_type_field(obj: &Map<String, Value>, issues: &mut Vec<ValidationIssue>) -> Option<QuizType> {
    match obj.get("quiz_type") {
        None => {
            issues.push(ValidationIssue::new("quiz_type", "missing required field"));
            None
        }
        Some(Value::String(tag)) => QuizType::parse_tag(tag).or_else(|| {
            issues.push(ValidationIssue::new(
                "quiz_type",
                "must be one of mcq, fill_blank, identification, matching, mixed",
            ));
            None
        }),
        Some(_) => {
            issues.push(ValidationIssue::new(
                "quiz_type",
                "must be one of mcq, fill_blank, identification, matching, mixed",
            ));
            None
        }
    }
}

fn positive_integer(
    obj: &Map<String, Value>,
    key: &str,
    issues: &mut Vec<ValidationIssue>,
) -> Option<usize> {
    match obj.get(key) {
        None => {
            issues.push(ValidationIssue::new(key, "missing required field"));
            None
        }
        Some(value) => match value.as_u64() {
            Some(n) if n >= 1 => Some(n as usize),
            _ => {
                issues.push(ValidationIssue::new(key, "must be a positive integer"));
                None
            }
        },
    }
}

fn non_negative_integer(
    obj: &Map<String, Value>,
    prefix: &str,
    key: &str,
    issues: &mut Vec<ValidationIssue>,
) -> Option<usize> {
    let path = field_path(prefix, key);
    match obj.get(key) {
        None => {
            issues.push(ValidationIssue::new(path, "missing required field"));
            None
        }
        Some(value) => match value.as_u64() {
            Some(n) => Some(n as usize),
            None => {
                issues.push(ValidationIssue::new(path, "must be a non-negative integer"));
                None
            }
        },
    }
}

fn non_empty_string(
    obj: &Map<String, Value>,
    prefix: &str,
    key: &str,
    issues: &mut Vec<ValidationIssue>,
) -> Option<String> {
    let path = field_path(prefix, key);
    match obj.get(key) {
        None => {
            issues.push(ValidationIssue::new(path, "missing required field"));
            None
        }
        Some(Value::String(text)) if !text.is_empty() => Some(text.clone()),
        Some(_) => {
            issues.push(ValidationIssue::new(path, "must be a non-empty string"));
            None
        }
    }
}

fn string_array(
    obj: &Map<String, Value>,
    prefix: &str,
    key: &str,
    min_len: usize,
    issues: &mut Vec<ValidationIssue>,
) -> Option<Vec<String>> {
    let path = field_path(prefix, key);
    let Some(value) = obj.get(key) else {
        issues.push(ValidationIssue::new(path, "missing required field"));
        return None;
    };
    let Some(array) = value.as_array() else {
        issues.push(ValidationIssue::new(path, "must be an array of strings"));
        return None;
    };
    if array.len() < min_len {
        let message = if min_len == 1 {
            "must contain at least one entry".to_string()
        } else {
            format!("must contain at least {min_len} entries")
        };
        issues.push(ValidationIssue::new(path, message));
        return None;
    }

    let mut entries = Vec::with_capacity(array.len());
    let mut valid = true;
    for (entry_index, entry) in array.iter().enumerate() {
        match entry {
            Value::String(text) if !text.is_empty() => entries.push(text.clone()),
            _ => {
                issues.push(ValidationIssue::new(
                    format!("{}[{entry_index}]", field_path(prefix, key)),
                    "must be a non-empty string",
                ));
                valid = false;
            }
        }
    }

    valid.then_some(entries)
}

fn matching_pairs(
    obj: &Map<String, Value>,
    prefix: &str,
    issues: &mut Vec<ValidationIssue>,
) -> Option<Vec<MatchingPair>> {
    let path = field_path(prefix, "pairs");
    let Some(value) = obj.get("pairs") else {
        issues.push(ValidationIssue::new(path, "missing required field"));
        return None;
    };
    let Some(array) = value.as_array() else {
        issues.push(ValidationIssue::new(path, "must be an array of pairs"));
        return None;
    };
    if array.is_empty() {
        issues.push(ValidationIssue::new(path, "must contain at least one pair"));
        return None;
    }

    let pairs: Vec<Option<MatchingPair>> = array
        .iter()
        .enumerate()
        .map(|(pair_index, entry)| {
            let pair_prefix = format!("{path}[{pair_index}]");
            let Some(pair_obj) = entry.as_object() else {
                issues.push(ValidationIssue::new(pair_prefix, "must be a JSON object"));
                return None;
            };
            let left = non_empty_string(pair_obj, &pair_prefix, "left", issues);
            let right = non_empty_string(pair_obj, &pair_prefix, "right", issues);
            Some(MatchingPair {
                left: left?,
                right: right?,
            })
        })
        .collect();

    pairs.into_iter().collect()
}

fn field_path(prefix: &str, key: &str) -> String {
    if prefix.is_empty() {
        key.to_string()
    } else {
        format!("{prefix}.{key}")
    }
}
