pub mod quiz_handler;

pub use quiz_handler::{generate_quiz, health_check, multipart_form_config, score_quiz};
