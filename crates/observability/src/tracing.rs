//! Tracing/logging initialization.

use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::MakeWriter;

use crate::config::{LogConfig, LogFormat};

const FALLBACK_FILTER: &str = "info";

/// Initialize tracing/logging for the process with the given configuration.
///
/// Safe to call multiple times (subsequent calls are no-ops).
pub fn init_with(config: &LogConfig) {
    init_with_writer(config, std::io::stdout);
}

/// Same as [`init_with`], writing log lines to `writer`.
///
/// Configuration fallbacks are logged after the subscriber is installed so
/// they are not lost on the first init.
pub fn init_with_writer<W>(config: &LogConfig, writer: W)
where
    W: for<'a> MakeWriter<'a> + Send + Sync + 'static,
{
    let (filter, filter_error) = match EnvFilter::try_new(&config.filter) {
        Ok(filter) => (filter, None),
        Err(err) => (EnvFilter::new(FALLBACK_FILTER), Some(err)),
    };

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_timer(tracing_subscriber::fmt::time::SystemTime)
        .with_target(false);

    // A second init returns an error we deliberately ignore.
    let _ = match config.format {
        LogFormat::Json => builder.json().try_init(),
        LogFormat::Pretty => builder.pretty().try_init(),
        LogFormat::Compact => builder.compact().try_init(),
    };

    if let Some(error) = filter_error {
        ::tracing::warn!(filter = %config.filter, %error, "invalid log filter; using info");
    }
    if let Some(error) = &config.format_error {
        ::tracing::warn!(%error, "falling back to json log format");
    }
}
