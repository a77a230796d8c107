use reqwest::{Client, RequestBuilder};

/// Default GooseAI endpoint, used in place of the OpenAI host.
pub const GOOSE_API_BASE: &str = "https://api.goose.ai/v1";

/// Explicit GooseAI client configuration, built once and owned by the adapter.
pub struct GooseAIClient {
    pub client: Client,
    pub api_key: Option<String>,
    pub base_url: String,
}

impl GooseAIClient {
    pub fn new(api_key: Option<String>, base_url: impl Into<String>) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .unwrap_or_default();

        Self {
            client,
            api_key,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    /// Builds the authorization header value, if a key is configured.
    pub fn auth_header(&self) -> Option<String> {
        self.api_key.as_ref().map(|key| format!("Bearer {}", key))
    }

    /// Attaches the bearer token when one is configured. Without a key the
    /// request goes out unauthenticated and the provider decides.
    pub fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        match self.auth_header() {
            Some(value) => request.header("Authorization", value),
            None => request,
        }
    }

    /// Returns the engine listing endpoint URL.
    pub fn engines_url(&self) -> String {
        format!("{}/engines", self.base_url)
    }

    /// Returns the completions endpoint URL for an engine.
    pub fn completions_url(&self, engine: &str) -> String {
        format!("{}/engines/{}/completions", self.base_url, engine)
    }
}
