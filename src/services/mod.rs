pub mod generation_service;
pub mod scoring_service;
pub mod validation_service;
pub mod xai_client;

pub use generation_service::{GenerationOutcome, GenerationService};
pub use scoring_service::score_quiz;
pub use validation_service::validate_quiz_response;
pub use xai_client::{AiClient, UploadedFile, XaiClient};
