use tracing_subscriber::EnvFilter;

/// Installs the global fmt subscriber.
///
/// Records go to stderr so they never interleave with the diagnostic
/// lines printed on stdout. `RUST_LOG` wins over `default_filter`.
pub fn init_subscriber(default_filter: &str) {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    // A second call (e.g. from tests) leaves the first subscriber in place.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .try_init();
}
