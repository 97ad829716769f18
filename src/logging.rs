use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Default filter directive for the given number of `-v` flags.
pub fn default_directive(verbosity: u64) -> &'static str {
    match verbosity {
        0 => "gitstart=warn",
        1 => "gitstart=info",
        _ => "gitstart=debug",
    }
}

/// Install the global subscriber. Diagnostics go to stderr so they never
/// mix with the status lines printed on stdout.
///
/// `RUST_LOG`, when set, takes precedence over `verbosity`.
pub fn init_cli_logger(verbosity: u64) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbosity)));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .init();
}
