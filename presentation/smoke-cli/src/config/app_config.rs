use super::{goose_config::GooseConfig, smoke_config::SmokeConfig};

pub struct AppConfig {
    pub goose: GooseConfig,
    pub smoke: SmokeConfig,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            goose: GooseConfig::from_env(),
            smoke: SmokeConfig::default(),
        }
    }
}
