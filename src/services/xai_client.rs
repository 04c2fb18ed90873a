//! Client for xAI's OpenAI-compatible API: file registration plus the
//! Responses endpoint. The `AiClient` trait is the seam the generation
//! orchestrator depends on, so tests can swap in an in-memory impl.
//!
//! The API key is never logged; log lines carry sizes and ids only.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::multipart;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::errors::{AppError, AppResult};

/// One uploaded document handed over by the ingestion boundary.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UploadedFile {
    pub filename: String,
    pub bytes: Vec<u8>,
}

/// Completion call result, mirroring the Responses API wire shape. Either
/// the aggregated `output_text` field or the per-item message content may
/// be populated; text extraction handles both.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct CompletionResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_text: Option<String>,
    #[serde(default)]
    pub output: Vec<OutputItem>,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct OutputItem {
    #[serde(rename = "type")]
    pub item_type: String,
    #[serde(default)]
    pub content: Vec<OutputContent>,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct OutputContent {
    #[serde(rename = "type")]
    pub content_type: String,
    #[serde(default)]
    pub text: String,
}

/// Plain-text extraction from a completion response. Total by design:
/// prefer the aggregated field, otherwise concatenate the text segments of
/// every message item in order; worst case an empty string, never a
/// failure.
pub fn extract_response_text(response: &CompletionResponse) -> String {
    if let Some(output_text) = &response.output_text {
        let trimmed = output_text.trim();
        if !trimmed.is_empty() {
            return trimmed.to_string();
        }
    }

    let chunks: Vec<&str> = response
        .output
        .iter()
        .filter(|item| item.item_type == "message")
        .flat_map(|item| item.content.iter())
        .filter(|content| content.content_type == "output_text")
        .map(|content| content.text.as_str())
        .collect();

    chunks.join("\n").trim().to_string()
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AiClient: Send + Sync {
    /// Register one file with the provider's file store, returning the
    /// opaque file reference to attach to the completion request.
    async fn register_file(&self, file: UploadedFile) -> AppResult<String>;

    /// Issue exactly one completion call. No retry here: a transport
    /// failure surfaces to the caller, who decides whether to resubmit.
    async fn create_response(
        &self,
        system_prompt: &str,
        user_prompt: &str,
        file_ids: &[String],
    ) -> AppResult<CompletionResponse>;
}

#[derive(Debug, Serialize)]
struct CreateResponseRequest {
    model: String,
    store: bool,
    input: Vec<InputMessage>,
}

#[derive(Debug, Serialize)]
struct InputMessage {
    role: &'static str,
    content: Vec<ContentPart>,
}

#[derive(Debug, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum ContentPart {
    InputText { text: String },
    InputFile { file_id: String },
}

#[derive(Debug, Deserialize)]
struct FileObject {
    id: String,
}

/// Real client. Built once from `Config` at startup and shared; no
/// process-global credential cache.
pub struct XaiClient {
    client: reqwest::Client,
    api_key: SecretString,
    base_url: String,
    model: String,
}

impl XaiClient {
    pub fn new(config: &Config) -> AppResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .map_err(|e| AppError::InternalError(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            api_key: config.xai_api_key.clone(),
            base_url: config.xai_base_url.trim_end_matches('/').to_string(),
            model: config.xai_model.clone(),
        })
    }

    async fn into_error(response: reqwest::Response) -> AppError {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        let snippet: String = body.chars().take(500).collect();
        AppError::AiServiceError(format!("xAI API returned {status}: {snippet}"))
    }
}

#[async_trait]
impl AiClient for XaiClient {
    async fn register_file(&self, file: UploadedFile) -> AppResult<String> {
        log::info!(
            "registering file {} ({} bytes) with xAI",
            file.filename,
            file.bytes.len()
        );

        let part = multipart::Part::bytes(file.bytes).file_name(file.filename);
        let form = multipart::Form::new()
            .part("file", part)
            .text("purpose", "assistants");

        let response = self
            .client
            .post(format!("{}/files", self.base_url))
            .bearer_auth(self.api_key.expose_secret())
            .multipart(form)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(Self::into_error(response).await);
        }

        let file_object: FileObject = response.json().await?;
        Ok(file_object.id)
    }

    async fn create_response(
        &self,
        system_prompt: &str,
        user_prompt: &str,
        file_ids: &[String],
    ) -> AppResult<CompletionResponse> {
        let mut user_content = vec![ContentPart::InputText {
            text: user_prompt.to_string(),
        }];
        user_content.extend(file_ids.iter().map(|file_id| ContentPart::InputFile {
            file_id: file_id.clone(),
        }));

        let request = CreateResponseRequest {
            model: self.model.clone(),
            store: false,
            input: vec![
                InputMessage {
                    role: "system",
                    content: vec![ContentPart::InputText {
                        text: system_prompt.to_string(),
                    }],
                },
                InputMessage {
                    role: "user",
                    content: user_content,
                },
            ],
        };

        log::info!(
            "requesting completion from model {} with {} file(s)",
            self.model,
            file_ids.len()
        );

        let response = self
            .client
            .post(format!("{}/responses", self.base_url))
            .bearer_auth(self.api_key.expose_secret())
            .json(&request)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(Self::into_error(response).await);
        }

        Ok(response.json().await?)
    }
}
