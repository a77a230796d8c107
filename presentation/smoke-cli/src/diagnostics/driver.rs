use std::io::Write;

use business::domain::completion::use_cases::generate::GenerateCompletionParams;
use business::domain::errors::GenerationError;

use crate::config::smoke_config::SmokeConfig;
use crate::setup::dependency_injection::DependencyContainer;

#[derive(Debug, thiserror::Error)]
pub enum DriverError {
    #[error(transparent)]
    Generation(#[from] GenerationError),
    #[error("could not write diagnostic output: {0}")]
    Output(#[from] std::io::Error),
}

/// Lists the engines, then requests one completion, printing as it goes.
///
/// Stops at the first failing step; the caller decides how to report it.
pub async fn run_diagnostics<W: Write>(
    container: &DependencyContainer,
    smoke: &SmokeConfig,
    out: &mut W,
) -> Result<(), DriverError> {
    writeln!(out, "Listing available engines...")?;
    let engines = container.list_engines.execute().await?;

    writeln!(out, "Available engines:")?;
    for engine in &engines {
        writeln!(out, "- {}", engine)?;
    }

    writeln!(out)?;
    writeln!(out, "Generating completion...")?;
    writeln!(out, "Prompt: {}", smoke.prompt)?;

    let text = container
        .generate_completion
        .execute(GenerateCompletionParams {
            engine: smoke.engine.clone(),
            prompt: smoke.prompt.clone(),
            max_tokens: smoke.max_tokens,
        })
        .await?;

    writeln!(out)?;
    writeln!(out, "Completion result:")?;
    writeln!(out, "{}", text)?;

    Ok(())
}
