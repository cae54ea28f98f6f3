//! Tracing subscriber setup.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::{LogFormat, LoggingConfig};

/// Filter used when RUST_LOG is unset.
const DEFAULT_FILTER: &str = "transcribe_gate=info,tower_http=info";

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Install the global subscriber in the configured format.
pub fn init(config: &LoggingConfig) {
    let (json, pretty) = match config.format {
        LogFormat::Json => (
            Some(
                fmt::layer()
                    .json()
                    .with_target(true)
                    .with_file(true)
                    .with_line_number(true),
            ),
            None,
        ),
        LogFormat::Pretty => (None, Some(fmt::layer().pretty().with_target(true))),
    };

    tracing_subscriber::registry()
        .with(env_filter())
        .with(json)
        .with(pretty)
        .init();
}

#[cfg(test)]
pub fn init_test() {
    let _ = fmt()
        .with_test_writer()
        .with_env_filter("transcribe_gate=debug")
        .try_init();
}
