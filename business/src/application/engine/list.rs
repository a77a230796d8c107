use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::engine::model::Engine;
use crate::domain::engine::services::EngineCatalogService;
use crate::domain::engine::use_cases::list::ListEnginesUseCase;
use crate::domain::errors::GenerationError;
use crate::domain::logger::Logger;

pub struct ListEnginesUseCaseImpl {
    pub catalog: Arc<dyn EngineCatalogService>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl ListEnginesUseCase for ListEnginesUseCaseImpl {
    async fn execute(&self) -> Result<Vec<Engine>, GenerationError> {
        self.logger.info("Listing available engines");

        let engines = self.catalog.list_engines().await?;

        self.logger
            .info(&format!("Provider returned {} engines", engines.len()));

        Ok(engines)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockall::mock;

    mock! {
        pub Catalog {}

        #[async_trait]
        impl EngineCatalogService for Catalog {
            async fn list_engines(&self) -> Result<Vec<Engine>, GenerationError>;
        }
    }

    mock! {
        pub Log {}

        impl Logger for Log {
            fn info(&self, message: &str);
            fn warn(&self, message: &str);
            fn error(&self, message: &str);
            fn debug(&self, message: &str);
        }
    }

    fn mock_logger() -> Arc<dyn Logger> {
        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger.expect_warn().returning(|_| ());
        logger.expect_error().returning(|_| ());
        logger.expect_debug().returning(|_| ());
        Arc::new(logger)
    }

    #[tokio::test]
    async fn should_return_engines_in_provider_order() {
        let mut mock_catalog = MockCatalog::new();
        mock_catalog.expect_list_engines().times(1).returning(|| {
            Ok(vec![
                Engine::new("gpt-neo-20b"),
                Engine::new("gpt-j-6b"),
                Engine::new("fairseq-13b"),
            ])
        });

        let use_case = ListEnginesUseCaseImpl {
            catalog: Arc::new(mock_catalog),
            logger: mock_logger(),
        };

        let engines = use_case.execute().await.unwrap();

        let ids: Vec<_> = engines.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["gpt-neo-20b", "gpt-j-6b", "fairseq-13b"]);
    }

    #[tokio::test]
    async fn should_propagate_catalog_failure() {
        let mut mock_catalog = MockCatalog::new();
        mock_catalog
            .expect_list_engines()
            .returning(|| Err(GenerationError::transport("dns error")));

        let use_case = ListEnginesUseCaseImpl {
            catalog: Arc::new(mock_catalog),
            logger: mock_logger(),
        };

        let result = use_case.execute().await;

        assert!(matches!(result, Err(GenerationError::Transport(_))));
    }
}
