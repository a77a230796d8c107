use async_trait::async_trait;

use crate::domain::errors::GenerationError;

use super::model::Engine;

/// Service port for discovering the engines a provider offers.
///
/// Implementations return the full list from a single response, in the
/// order the provider sent it.
#[async_trait]
pub trait EngineCatalogService: Send + Sync {
    async fn list_engines(&self) -> Result<Vec<Engine>, GenerationError>;
}
