use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Answers submitted for one quiz attempt, keyed by question id and
/// partitioned by answer shape. Created empty when an attempt starts,
/// filled in incrementally, and reset when the user starts over. A missing
/// entry means "unanswered", which the scoring engine treats as incorrect
/// rather than as an error.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct UserAnswers {
    #[serde(default)]
    pub mcq: HashMap<String, usize>,
    #[serde(default)]
    pub text: HashMap<String, String>,
    #[serde(default)]
    pub matching: HashMap<String, HashMap<String, String>>,
}

impl UserAnswers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Discard everything answered so far, e.g. when returning to setup.
    pub fn reset(&mut self) {
        self.mcq.clear();
        self.text.clear();
        self.matching.clear();
    }

    pub fn select_choice(&mut self, question_id: &str, choice_index: usize) {
        self.mcq.insert(question_id.to_string(), choice_index);
    }

    pub fn enter_text(&mut self, question_id: &str, text: &str) {
        self.text.insert(question_id.to_string(), text.to_string());
    }

    pub fn select_match(&mut self, question_id: &str, left: &str, right: &str) {
        self.matching
            .entry(question_id.to_string())
            .or_default()
            .insert(left.to_string(), right.to_string());
    }

    pub fn is_empty(&self) -> bool {
        self.mcq.is_empty() && self.text.is_empty() && self.matching.is_empty()
    }
}
