use actix_multipart::{
    form::{tempfile::TempFile, text::Text, MultipartForm, MultipartFormConfig},
    MultipartError,
};
use actix_web::{
    error::{InternalError, PayloadError},
    get, post, web, HttpRequest, HttpResponse, ResponseError,
};
use validator::Validate;

use crate::{
    app_state::AppState,
    models::domain::QuizType,
    models::dto::request::{Difficulty, GenerateQuizParams, ScoreQuizRequest},
    models::dto::response::{GenerateQuizResponse, HealthResponse},
    services::{scoring_service, UploadedFile},
};

const MAX_UPLOAD_FILES: usize = 10;
const MAX_TOTAL_UPLOAD_BYTES: usize = MAX_UPLOAD_FILES * 20 * 1024 * 1024;
const FILE_TOO_LARGE_MESSAGE: &str = "File too large. Maximum allowed size is 20MB per file.";

/// Multipart extractor settings for `generate_quiz`. Size-limit failures
/// happen before the handler body runs, so the rejection body shape is
/// installed here; register with `app_data` alongside the handler.
pub fn multipart_form_config() -> MultipartFormConfig {
    MultipartFormConfig::default()
        .total_limit(MAX_TOTAL_UPLOAD_BYTES)
        .error_handler(handle_multipart_error)
}

fn handle_multipart_error(err: MultipartError, _req: &HttpRequest) -> actix_web::Error {
    let message = match &err {
        MultipartError::Payload(PayloadError::Overflow) => FILE_TOO_LARGE_MESSAGE.to_string(),
        other => other.to_string(),
    };
    InternalError::from_response(err, bad_request(message)).into()
}

#[derive(Debug, MultipartForm)]
pub struct GenerateQuizForm {
    #[multipart(rename = "files", limit = "20MB")]
    pub files: Vec<TempFile>,
    #[multipart(rename = "quizType")]
    pub quiz_type: Text<String>,
    #[multipart(rename = "questionCount")]
    pub question_count: Text<String>,
    pub difficulty: Option<Text<String>>,
}

#[get("/api/health")]
pub async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(HealthResponse::up())
}

#[post("/api/generate-quiz")]
pub async fn generate_quiz(
    state: web::Data<AppState>,
    MultipartForm(form): MultipartForm<GenerateQuizForm>,
) -> HttpResponse {
    // Boundary rejections happen before any AI call is made.
    if form.files.is_empty() {
        return bad_request("Please upload at least one file.");
    }
    if form.files.len() > MAX_UPLOAD_FILES {
        return bad_request(format!(
            "Too many files. Maximum is {MAX_UPLOAD_FILES} files per request."
        ));
    }
    let params = match parse_params(
        &form.quiz_type,
        &form.question_count,
        form.difficulty.as_ref().map(|text| text.as_str()),
    ) {
        Ok(params) => params,
        Err(message) => return bad_request(message),
    };

    // The temp files stay alive for the duration of this request and are
    // removed on drop, whether generation succeeds or fails.
    let files = match read_uploads(&form.files) {
        Ok(files) => files,
        Err(err) => {
            return HttpResponse::build(err.status_code())
                .json(GenerateQuizResponse::failure(err.to_string()))
        }
    };

    match state.generation_service.generate_quiz(files, &params).await {
        Ok(outcome) => match outcome.quiz {
            Ok(quiz) => HttpResponse::Ok().json(GenerateQuizResponse::success(quiz, outcome.raw)),
            Err(diagnostic) => {
                HttpResponse::Ok().json(GenerateQuizResponse::from_diagnostic(diagnostic))
            }
        },
        Err(err) => HttpResponse::build(err.status_code())
            .json(GenerateQuizResponse::failure(err.to_string())),
    }
}

#[post("/api/score-quiz")]
pub async fn score_quiz(request: web::Json<ScoreQuizRequest>) -> HttpResponse {
    let ScoreQuizRequest { quiz, answers } = request.into_inner();
    HttpResponse::Ok().json(scoring_service::score_quiz(&quiz, &answers))
}

fn parse_params(
    quiz_type: &str,
    question_count: &str,
    difficulty: Option<&str>,
) -> Result<GenerateQuizParams, String> {
    let quiz_type = QuizType::parse_tag(quiz_type).ok_or("Invalid quizType.")?;

    let question_count: u32 = question_count
        .trim()
        .parse()
        .map_err(|_| "questionCount must be an integer between 1 and 100.")?;

    let difficulty = match difficulty {
        None => None,
        Some(tag) => Some(
            Difficulty::parse_tag(tag).ok_or("difficulty must be easy, medium, or hard.")?,
        ),
    };

    let params = GenerateQuizParams {
        quiz_type,
        question_count,
        difficulty,
    };
    params
        .validate()
        .map_err(|_| "questionCount must be an integer between 1 and 100.".to_string())?;

    Ok(params)
}

fn read_uploads(files: &[TempFile]) -> crate::errors::AppResult<Vec<UploadedFile>> {
    files
        .iter()
        .map(|temp| {
            let filename = temp
                .file_name
                .clone()
                .unwrap_or_else(|| "upload".to_string());
            let bytes = std::fs::read(temp.file.path())?;
            Ok(UploadedFile { filename, bytes })
        })
        .collect()
}

fn bad_request(message: impl Into<String>) -> HttpResponse {
    HttpResponse::BadRequest().json(GenerateQuizResponse::failure(message))
}
