use std::env;

use gooseai::client::GOOSE_API_BASE;

/// Environment variable holding the GooseAI API key.
pub const API_KEY_VAR: &str = "KB_Key";
/// Optional override for the GooseAI base URL.
pub const API_BASE_VAR: &str = "GOOSE_API_BASE";

/// Configuration for GooseAI API access.
///
/// A missing key is not an error: the smoke test reports it and still
/// performs both calls, letting the provider reject them.
#[derive(Clone)]
pub struct GooseConfig {
    pub api_key: Option<String>,
    pub base_url: String,
}

impl GooseConfig {
    /// Load GooseAI configuration from environment variables
    ///
    /// Environment variables:
    /// - KB_Key: API key (optional, only an empty value counts as unset)
    /// - GOOSE_API_BASE: base URL (default: "https://api.goose.ai/v1")
    pub fn from_env() -> Self {
        Self::from_lookup(|name| env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let api_key = lookup(API_KEY_VAR).filter(|key| !key.is_empty());
        let base_url = lookup(API_BASE_VAR)
            .filter(|url| !url.trim().is_empty())
            .unwrap_or_else(|| GOOSE_API_BASE.to_string());

        Self { api_key, base_url }
    }

    pub fn api_key_available(&self) -> bool {
        self.api_key.is_some()
    }
}

impl std::fmt::Debug for GooseConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GooseConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("base_url", &self.base_url)
            .finish()
    }
}
