/// Failures surfaced while talking to the text-generation provider.
///
/// Each variant maps to a distinct line printed by the failure reporter.
#[derive(Debug, thiserror::Error)]
pub enum GenerationError {
    #[error("no API key configured (provider answered {status})")]
    MissingApiKey { status: u16 },
    #[error("transport failure: {0}")]
    Transport(String),
    #[error("provider rejected request with status {status}")]
    ProviderRejected { status: u16, body: String },
    #[error("malformed response: {0}")]
    MalformedResponse(String),
    #[error("completion returned no choices")]
    EmptyChoices,
}

impl GenerationError {
    pub fn transport(reason: impl std::fmt::Display) -> Self {
        GenerationError::Transport(reason.to_string())
    }

    pub fn malformed(reason: impl std::fmt::Display) -> Self {
        GenerationError::MalformedResponse(reason.to_string())
    }

    /// Status code and raw body when the provider answered with a rejection.
    pub fn provider_response(&self) -> Option<(u16, &str)> {
        match self {
            GenerationError::ProviderRejected { status, body } => Some((*status, body.as_str())),
            _ => None,
        }
    }
}
