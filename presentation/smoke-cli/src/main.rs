use dotenvy::dotenv;

mod config;
mod diagnostics;
mod setup;

use config::app_config::AppConfig;
use setup::{dependency_injection::DependencyContainer, smoke_test::SmokeTest};

/// GooseAI smoke test entry point.
///
/// Checks the API key, lists the available engines and asks for one
/// completion. Failures are printed, never turned into a non-zero exit.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Load environment variables
    dotenv().ok();

    // 2. Initialize tracing on stderr, RUST_LOG overrides the default
    logger::init_subscriber("warn");

    // 3. Load configuration
    let config = AppConfig::from_env();

    // 4. Wire dependencies
    let container = DependencyContainer::new(&config.goose);

    // 5. Run the smoke test against stdout
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    SmokeTest::run(&config, &container, &mut out).await?;

    Ok(())
}
