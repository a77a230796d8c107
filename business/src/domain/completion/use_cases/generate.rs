use async_trait::async_trait;

use crate::domain::errors::GenerationError;

#[derive(Debug, Clone)]
pub struct GenerateCompletionParams {
    pub engine: String,
    pub prompt: String,
    pub max_tokens: u32,
}

/// Produces the text of the top-ranked completion for a prompt.
#[async_trait]
pub trait GenerateCompletionUseCase: Send + Sync {
    async fn execute(&self, params: GenerateCompletionParams) -> Result<String, GenerationError>;
}
