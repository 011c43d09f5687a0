use tracing::Level;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Registry};

pub fn setup_tracing() {
    setup_tracing_with_log_level(Level::WARN);
}

/// Installs a stderr subscriber filtered by `RUST_LOG`, defaulting to `level`.
/// Stdout stays reserved for command output.
pub fn setup_tracing_with_log_level(level: Level) {
    let env_filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();
    let _ = Registry::default()
        .with(env_filter)
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .try_init();
}
