use std::io::{self, Write};

use business::domain::errors::GenerationError;

/// Prints a failed run as an `Error:` line, plus the provider's answer when
/// the request was rejected.
pub fn report_failure<W: Write>(error: &GenerationError, out: &mut W) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "Error: {}", error)?;

    if let Some((status, body)) = error.provider_response() {
        writeln!(out, "Response status: {}", status)?;
        writeln!(out, "Response data: {}", body)?;
    }

    Ok(())
}
