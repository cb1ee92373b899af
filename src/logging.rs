use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Build a subscriber for one run. `RUST_LOG` directives are honored on top of `level`.
pub fn build_subscriber(level: Level) -> impl tracing::Subscriber + Send + Sync {
    let filter = EnvFilter::from_default_env().add_directive(level.into());

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .finish()
}

/// Run `f` with a scoped subscriber instead of installing a global one
pub fn with_logger<T>(level: Level, f: impl FnOnce() -> T) -> T {
    tracing::subscriber::with_default(build_subscriber(level), f)
}
