use serde_json::json;

use crate::models::dto::request::GenerateQuizParams;

pub const QUIZ_SYSTEM_PROMPT: &str = "You are QuizForge, a quiz generation engine. \
You read the attached source documents and produce a quiz grounded strictly in their content. \
Every question, choice, accepted answer, and explanation must be supported by the documents; \
never invent facts that are not present in them. \
Respond with a single JSON object and nothing else: no markdown fences, no commentary, \
no text before or after the JSON.";

/// User instruction parameterized by the request. The embedded shape
/// description steers the model toward the exact quiz schema; it is
/// outbound documentation only, enforcement happens in the response
/// validator.
pub fn build_quiz_user_prompt(params: &GenerateQuizParams) -> String {
    let difficulty_line = match params.difficulty {
        Some(difficulty) => format!("Target difficulty: {}.\n", difficulty),
        None => String::new(),
    };

    format!(
        "Create a quiz of type \"{quiz_type}\" with exactly {question_count} questions \
based on the attached documents.\n\
{difficulty_line}\
Rules:\n\
- quiz_type \"mixed\" may combine any of the four question shapes; any other quiz_type means every question uses that shape.\n\
- Every question needs a unique id and a non-empty explanation.\n\
- mcq questions need at least 4 choices and answer_index must point at one of them.\n\
- fill_blank prompts must contain the literal blank marker ____.\n\
- matching pairs must have unique left values and unique right values.\n\
- question_count must equal the number of entries in questions.\n\
Respond with one JSON object matching this shape exactly:\n{schema}",
        quiz_type = params.quiz_type,
        question_count = params.question_count,
        difficulty_line = difficulty_line,
        schema = schema_json_string(),
    )
}

/// JSON-shaped description of the expected output, enumerating every field
/// of all four question variants.
pub fn schema_json_string() -> String {
    let shape = json!({
        "quiz_title": "string",
        "quiz_type": "mcq | fill_blank | identification | matching | mixed",
        "question_count": "number",
        "source_summary": "string",
        "questions": [
            {
                "id": "string",
                "type": "mcq",
                "prompt": "string",
                "choices": ["string"],
                "answer_index": "number",
                "explanation": "string"
            },
            {
                "id": "string",
                "type": "fill_blank",
                "prompt": "string with ____",
                "answers": ["string"],
                "explanation": "string"
            },
            {
                "id": "string",
                "type": "identification",
                "prompt": "string",
                "answers": ["string"],
                "explanation": "string"
            },
            {
                "id": "string",
                "type": "matching",
                "pairs": [{ "left": "string", "right": "string" }],
                "explanation": "string"
            }
        ]
    });

    serde_json::to_string_pretty(&shape).unwrap_or_else(|_| shape.to_string())
}
