use chrono::{DateTime, Utc};

use crate::domain::errors::GenerationError;

/// Parameters for a single, non-streaming completion request.
#[derive(Debug, Clone, PartialEq)]
pub struct CompletionRequest {
    pub engine: String,
    pub prompt: String,
    pub max_tokens: u32,
    pub stream: bool,
}

impl CompletionRequest {
    pub fn new(engine: impl Into<String>, prompt: impl Into<String>, max_tokens: u32) -> Self {
        Self {
            engine: engine.into(),
            prompt: prompt.into(),
            max_tokens,
            stream: false,
        }
    }
}

/// One ranked continuation returned by the provider.
#[derive(Debug, Clone, PartialEq)]
pub struct CompletionChoice {
    pub text: String,
    pub index: Option<u32>,
    pub finish_reason: Option<String>,
}

impl CompletionChoice {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            index: None,
            finish_reason: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Completion {
    pub id: Option<String>,
    pub model: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub choices: Vec<CompletionChoice>,
}

impl Completion {
    pub fn from_choices(choices: Vec<CompletionChoice>) -> Self {
        Self {
            id: None,
            model: None,
            created_at: None,
            choices,
        }
    }

    /// Text of the top-ranked choice. Later choices are never consulted.
    pub fn first_choice_text(&self) -> Result<&str, GenerationError> {
        self.choices
            .first()
            .map(|choice| choice.text.as_str())
            .ok_or(GenerationError::EmptyChoices)
    }
}
