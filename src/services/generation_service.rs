use std::sync::Arc;

use futures::future::try_join_all;

use crate::constants::quiz_prompt::{build_quiz_user_prompt, QUIZ_SYSTEM_PROMPT};
use crate::errors::{AppError, AppResult};
use crate::models::domain::{Diagnostic, Quiz};
use crate::models::dto::request::GenerateQuizParams;
use crate::services::validation_service::validate_quiz_response;
use crate::services::xai_client::{extract_response_text, AiClient, UploadedFile};

/// What one generation attempt produced. The raw model text is kept in
/// both arms: diagnostics need it on failure and the debugging display
/// wants it on success.
#[derive(Debug)]
pub struct GenerationOutcome {
    pub raw: String,
    pub quiz: Result<Quiz, Diagnostic>,
}

/// Composes file registration, prompt construction, the single completion
/// call, and response validation into one request/response cycle.
pub struct GenerationService {
    client: Arc<dyn AiClient>,
}

impl GenerationService {
    pub fn new(client: Arc<dyn AiClient>) -> Self {
        Self { client }
    }

    /// Run one generation cycle. `Err` means transport failure (file
    /// registration or the completion call); parse failures and schema
    /// mismatches come back as `Ok` with a `Diagnostic` inside, since they
    /// need different remediation (regenerate) than a transport error
    /// (resubmit).
    pub async fn generate_quiz(
        &self,
        files: Vec<UploadedFile>,
        params: &GenerateQuizParams,
    ) -> AppResult<GenerationOutcome> {
        if files.is_empty() {
            return Err(AppError::ValidationError(
                "at least one file is required".to_string(),
            ));
        }

        // Registrations run concurrently; one failure aborts the batch so
        // we never issue a completion call over a partial submission.
        let registrations = files
            .into_iter()
            .map(|file| self.client.register_file(file));
        let file_ids = try_join_all(registrations).await?;

        let user_prompt = build_quiz_user_prompt(params);
        let response = self
            .client
            .create_response(QUIZ_SYSTEM_PROMPT, &user_prompt, &file_ids)
            .await?;

        let raw = extract_response_text(&response);
        let quiz = validate_quiz_response(&raw);

        match &quiz {
            Ok(quiz) => log::info!(
                "generated quiz \"{}\" with {} question(s)",
                quiz.quiz_title,
                quiz.questions.len()
            ),
            Err(diagnostic) => log::warn!(
                "model response failed validation ({}, raw {} bytes)",
                diagnostic.category(),
                raw.len()
            ),
        }

        Ok(GenerationOutcome { raw, quiz })
    }
}
