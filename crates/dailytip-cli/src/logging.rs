use tracing_subscriber::EnvFilter;

/// Log to stderr. Filter from `DAILYTIP_LOG`, `warn` by default.
pub fn init() {
    let filter = EnvFilter::try_from_env("DAILYTIP_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
