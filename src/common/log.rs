use tracing_subscriber::EnvFilter;

/// Installs a subscriber for the crate's diagnostics, filtered through
/// `RUST_LOG`. Embedding shells that already install a global subscriber can
/// skip this; the call does nothing if one is present.
pub fn init() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("taskbar=info"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}
