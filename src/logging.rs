use tracing_subscriber::EnvFilter;

/// Honors RUST_LOG, defaults to info
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

// the shell calls this once on startup
#[uniffi::export]
fn init_logging() {
    init();
}
