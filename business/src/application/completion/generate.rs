use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::completion::model::CompletionRequest;
use crate::domain::completion::services::CompletionService;
use crate::domain::completion::use_cases::generate::{
    GenerateCompletionParams, GenerateCompletionUseCase,
};
use crate::domain::errors::GenerationError;
use crate::domain::logger::Logger;

pub struct GenerateCompletionUseCaseImpl {
    pub service: Arc<dyn CompletionService>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GenerateCompletionUseCase for GenerateCompletionUseCaseImpl {
    async fn execute(&self, params: GenerateCompletionParams) -> Result<String, GenerationError> {
        self.logger.info(&format!(
            "Generating completion with engine: {} (max_tokens: {})",
            params.engine, params.max_tokens
        ));

        let request = CompletionRequest::new(params.engine, params.prompt, params.max_tokens);
        let completion = self.service.create_completion(&request).await?;

        self.logger.debug(&format!(
            "Completion returned {} choices",
            completion.choices.len()
        ));

        match completion.first_choice_text() {
            Ok(text) => Ok(text.to_string()),
            Err(error) => {
                self.logger.warn("Completion response contained no choices");
                Err(error)
            }
        }
    }
}
