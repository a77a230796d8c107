use async_trait::async_trait;

use crate::domain::engine::model::Engine;
use crate::domain::errors::GenerationError;

#[async_trait]
pub trait ListEnginesUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<Engine>, GenerationError>;
}
