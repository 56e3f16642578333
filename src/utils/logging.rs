//! Logging - tracing subscriber setup

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::constants::LOG_FILE_PREFIX;
use crate::domain::config::LogConfig;
use crate::utils::config_store::log_dir;

/// Install the global subscriber.
///
/// Logs go to stdout and, when enabled and a log directory is available, to a
/// daily rolling file. The returned guard must live until exit to flush it.
pub fn init_tracing(config: &LogConfig) -> Option<WorkerGuard> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.level.as_str()));

    let file = if config.file {
        match log_dir() {
            Ok(dir) => Some(tracing_appender::non_blocking(
                tracing_appender::rolling::daily(dir, LOG_FILE_PREFIX),
            )),
            Err(e) => {
                eprintln!("File logging disabled: {e}");
                None
            }
        }
    } else {
        None
    };

    let (file_layer, guard) = match file {
        Some((writer, guard)) => (
            Some(fmt::layer().with_ansi(false).with_writer(writer)),
            Some(guard),
        ),
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer())
        .with(file_layer)
        .init();

    guard
}
