use async_trait::async_trait;

use crate::domain::errors::GenerationError;

use super::model::{Completion, CompletionRequest};

/// Service port for generating text continuations of a prompt.
#[async_trait]
pub trait CompletionService: Send + Sync {
    async fn create_completion(
        &self,
        request: &CompletionRequest,
    ) -> Result<Completion, GenerationError>;
}
