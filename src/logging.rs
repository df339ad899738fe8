use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter (EnvFilter syntax).
pub const LOG_ENV: &str = "TIMELINE_LOG";

/// Initialize logging with a filter taken from the `TIMELINE_LOG` environment variable.
/// Defaults to `warn` if the variable is not set or invalid.
///
/// Logs go to stderr so they do not interleave with the game screen.
/// Calling this more than once is harmless.
pub fn init_logging() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
