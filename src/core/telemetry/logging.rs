use tracing_subscriber::{fmt, EnvFilter};

/// Initializes the global subscriber. `RUST_LOG` overrides `default_filter`.
/// Diagnostics go to stderr so generated documents printed on stdout stay
/// clean.
pub fn init_logging(default_filter: &str) {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    let _ = fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .try_init();
}
