use tracing_subscriber::{
    fmt::format::Format, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter,
};

const DEFAULT_FILTER: &str = "boomerang=debug,tower_http=debug";

/// Initialize console tracing. Safe to call more than once; later calls are no-ops.
pub fn init_telemetry(environment: &str) {
    // Console: compact format, no timestamps (the process supervisor adds them).
    let console_fmt = tracing_subscriber::fmt::layer().event_format(
        Format::default()
            .compact()
            .with_target(false)
            .without_time(),
    );

    let initialized = tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| DEFAULT_FILTER.into()))
        .with(console_fmt)
        .try_init()
        .is_ok();

    if initialized {
        tracing::info!(environment = %environment, "Tracing initialized");
    }
}
