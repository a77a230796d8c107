pub mod app_config;
pub mod goose_config;
pub mod smoke_config;
