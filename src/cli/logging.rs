//! Logging initialization

/// Initialize logging based on debug flag
///
/// Output goes to stderr so `show` and `get` stay pipeable on stdout.
pub fn init_logging(debug: bool) {
    if !debug {
        // Silent operation by default
        return;
    }

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug")),
        )
        .with_target(true)
        .init();
}
