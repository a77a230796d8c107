use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use business::domain::completion::model::{Completion, CompletionChoice, CompletionRequest};
use business::domain::completion::services::CompletionService;
use business::domain::engine::model::Engine;
use business::domain::engine::services::EngineCatalogService;
use business::domain::errors::GenerationError;

use crate::client::GooseAIClient;

#[derive(Deserialize)]
struct EngineListResponse {
    data: Vec<EngineDto>,
}

#[derive(Deserialize)]
struct EngineDto {
    id: String,
    name: Option<String>,
    owner: Option<String>,
    ready: Option<bool>,
}

#[derive(Serialize)]
struct CompletionBody<'a> {
    prompt: &'a str,
    max_tokens: u32,
    stream: bool,
}

#[derive(Deserialize)]
struct CompletionResponse {
    id: Option<String>,
    model: Option<String>,
    created: Option<i64>,
    choices: Vec<ChoiceDto>,
}

#[derive(Deserialize)]
struct ChoiceDto {
    text: String,
    index: Option<u32>,
    finish_reason: Option<String>,
}

impl From<EngineDto> for Engine {
    fn from(dto: EngineDto) -> Self {
        Engine {
            id: dto.id,
            name: dto.name,
            owner: dto.owner,
            ready: dto.ready,
        }
    }
}

impl From<CompletionResponse> for Completion {
    fn from(response: CompletionResponse) -> Self {
        Completion {
            id: response.id,
            model: response.model,
            created_at: response
                .created
                .and_then(|secs| DateTime::<Utc>::from_timestamp(secs, 0)),
            choices: response
                .choices
                .into_iter()
                .map(|choice| CompletionChoice {
                    text: choice.text,
                    index: choice.index,
                    finish_reason: choice.finish_reason,
                })
                .collect(),
        }
    }
}

/// GooseAI adapter for the engine catalog and completion ports.
pub struct TextGenerationGooseAI {
    client: GooseAIClient,
}

impl TextGenerationGooseAI {
    pub fn new(client: GooseAIClient) -> Self {
        Self { client }
    }

    async fn read_json<T: DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> Result<T, GenerationError> {
        let status = response.status();

        if !status.is_success() {
            let body = response
                .text()
                .await
                .map_err(GenerationError::transport)?;
            let code = status.as_u16();

            // Without a key, an auth rejection is a configuration problem.
            if !self.client.has_api_key() && (code == 401 || code == 403) {
                return Err(GenerationError::MissingApiKey { status: code });
            }

            return Err(GenerationError::ProviderRejected { status: code, body });
        }

        let bytes = response
            .bytes()
            .await
            .map_err(GenerationError::transport)?;

        serde_json::from_slice(&bytes).map_err(GenerationError::malformed)
    }
}

#[async_trait]
impl EngineCatalogService for TextGenerationGooseAI {
    async fn list_engines(&self) -> Result<Vec<Engine>, GenerationError> {
        let response = self
            .client
            .authorize(self.client.client.get(self.client.engines_url()))
            .send()
            .await
            .map_err(GenerationError::transport)?;

        let listing: EngineListResponse = self.read_json(response).await?;

        Ok(listing.data.into_iter().map(Engine::from).collect())
    }
}

#[async_trait]
impl CompletionService for TextGenerationGooseAI {
    async fn create_completion(
        &self,
        request: &CompletionRequest,
    ) -> Result<Completion, GenerationError> {
        let body = CompletionBody {
            prompt: &request.prompt,
            max_tokens: request.max_tokens,
            stream: request.stream,
        };

        let response = self
            .client
            .authorize(
                self.client
                    .client
                    .post(self.client.completions_url(&request.engine)),
            )
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .await
            .map_err(GenerationError::transport)?;

        let completion: CompletionResponse = self.read_json(response).await?;

        Ok(completion.into())
    }
}
