use actix_web::{test, App};
use serde_json::{json, Value};

use quizforge_server::handlers;

fn score_request_body() -> Value {
    json!({
        "quiz": {
            "quiz_title": "Chemistry",
            "quiz_type": "mixed",
            "question_count": 3,
            "source_summary": "Notes on compounds.",
            "questions": [
                {
                    "id": "q-1",
                    "type": "mcq",
                    "prompt": "Symbol for sodium?",
                    "choices": ["Na", "So", "Sd", "N"],
                    "answer_index": 0,
                    "explanation": "From the Latin natrium."
                },
                {
                    "id": "q-2",
                    "type": "identification",
                    "prompt": "Name the compound H2O.",
                    "answers": ["water"],
                    "explanation": "Two hydrogen, one oxygen."
                },
                {
                    "id": "q-3",
                    "type": "matching",
                    "pairs": [
                        { "left": "NaCl", "right": "salt" },
                        { "left": "CO2", "right": "carbon dioxide" }
                    ],
                    "explanation": "Everyday names."
                }
            ]
        },
        "answers": {
            "mcq": { "q-1": 0 },
            "text": { "q-2": "  WATER " },
            "matching": { "q-3": { "NaCl": "salt", "CO2": "oxygen" } }
        }
    })
}

#[actix_web::test]
async fn health_endpoint_reports_service_up() {
    let app = test::init_service(App::new().service(handlers::health_check)).await;

    let request = test::TestRequest::get().uri("/api/health").to_request();
    let body: Value = test::call_and_read_body_json(&app, request).await;

    assert_eq!(body["ok"], true);
    assert_eq!(body["service"], "quizforge-server");
}

#[actix_web::test]
async fn score_endpoint_grades_a_mixed_quiz() {
    let app = test::init_service(App::new().service(handlers::score_quiz)).await;

    let request = test::TestRequest::post()
        .uri("/api/score-quiz")
        .set_json(score_request_body())
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, request).await;

    // mcq correct (1) + text correct after normalization (1) + one of two
    // matching pairs (1) out of 4 total points.
    assert_eq!(body["earned_points"], 3);
    assert_eq!(body["total_points"], 4);
    assert_eq!(body["percent"], 75.0);

    let per_question = body["per_question"].as_array().expect("array");
    assert_eq!(per_question.len(), 3);
    assert_eq!(per_question[0]["correct"], true);
    assert_eq!(per_question[1]["correct"], true);
    assert_eq!(per_question[2]["correct"], false);

    let breakdown = per_question[2]["pair_breakdown"].as_array().expect("array");
    assert_eq!(breakdown.len(), 2);
    assert_eq!(breakdown[1]["selected"], "oxygen");
    assert_eq!(breakdown[1]["expected"], "carbon dioxide");
    assert_eq!(breakdown[1]["correct"], false);
}

#[actix_web::test]
async fn score_endpoint_treats_missing_answers_as_unanswered() {
    let app = test::init_service(App::new().service(handlers::score_quiz)).await;

    let mut body = score_request_body();
    body["answers"] = json!({});
    let request = test::TestRequest::post()
        .uri("/api/score-quiz")
        .set_json(body)
        .to_request();
    let response: Value = test::call_and_read_body_json(&app, request).await;

    assert_eq!(response["earned_points"], 0);
    assert_eq!(response["total_points"], 4);
    assert_eq!(response["percent"], 0.0);
}

#[actix_web::test]
async fn scoring_the_same_submission_twice_gives_identical_reports() {
    let app = test::init_service(App::new().service(handlers::score_quiz)).await;

    let first_request = test::TestRequest::post()
        .uri("/api/score-quiz")
        .set_json(score_request_body())
        .to_request();
    let first: Value = test::call_and_read_body_json(&app, first_request).await;

    let second_request = test::TestRequest::post()
        .uri("/api/score-quiz")
        .set_json(score_request_body())
        .to_request();
    let second: Value = test::call_and_read_body_json(&app, second_request).await;

    assert_eq!(first, second);
}
