use tracing_subscriber::EnvFilter;

pub const LOG_LEVEL_ENV_VAR: &str = "JARMUX_LOG_LEVEL";

/// Logging stays off unless JARMUX_LOG_LEVEL asks for it, keeping the
/// terminal clean for the interactive attach. Events go to stderr so they
/// never mix with the usage/confirmation output on stdout.
pub fn init() {
    let filter = EnvFilter::try_from_env(LOG_LEVEL_ENV_VAR).unwrap_or_else(|_| EnvFilter::new("off"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
