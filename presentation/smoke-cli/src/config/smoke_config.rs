pub const SMOKE_ENGINE: &str = "gpt-j-6b";
pub const SMOKE_PROMPT: &str = "Once upon a time there was a Goose. ";
pub const SMOKE_MAX_TOKENS: u32 = 160;

/// Fixed parameters of the completion sent by the smoke test.
#[derive(Debug, Clone, PartialEq)]
pub struct SmokeConfig {
    pub engine: String,
    pub prompt: String,
    pub max_tokens: u32,
}

impl Default for SmokeConfig {
    fn default() -> Self {
        Self {
            engine: SMOKE_ENGINE.to_string(),
            prompt: SMOKE_PROMPT.to_string(),
            max_tokens: SMOKE_MAX_TOKENS,
        }
    }
}
