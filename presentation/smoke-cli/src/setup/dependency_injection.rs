use std::sync::Arc;

use logger::TracingLogger;

use gooseai::client::GooseAIClient;
use gooseai::text_generation::TextGenerationGooseAI;

use business::application::completion::generate::GenerateCompletionUseCaseImpl;
use business::application::engine::list::ListEnginesUseCaseImpl;
use business::domain::completion::use_cases::generate::GenerateCompletionUseCase;
use business::domain::engine::use_cases::list::ListEnginesUseCase;
use business::domain::logger::Logger;

use crate::config::goose_config::GooseConfig;

pub struct DependencyContainer {
    pub list_engines: Arc<dyn ListEnginesUseCase>,
    pub generate_completion: Arc<dyn GenerateCompletionUseCase>,
    pub logger: Arc<dyn Logger>,
}

impl DependencyContainer {
    pub fn new(config: &GooseConfig) -> Self {
        let logger: Arc<dyn Logger> = Arc::new(TracingLogger::default());

        // Infrastructure adapters
        let client = GooseAIClient::new(config.api_key.clone(), config.base_url.clone());
        let goose = Arc::new(TextGenerationGooseAI::new(client));

        let list_engines = Arc::new(ListEnginesUseCaseImpl {
            catalog: goose.clone(),
            logger: logger.clone(),
        });
        let generate_completion = Arc::new(GenerateCompletionUseCaseImpl {
            service: goose,
            logger: logger.clone(),
        });

        Self {
            list_engines,
            generate_completion,
            logger,
        }
    }
}
