//! Tracing setup shared by the browser entry point and native tests.
//!
//! The filter sits behind a reload layer so the level embedded in the page
//! config can replace the startup default once the config has been parsed.

use crate::config::LogLevel;
use tracing::{debug, warn};
use tracing_subscriber::{EnvFilter, fmt, prelude::*, reload};

pub type ReloadHandle = reload::Handle<EnvFilter, tracing_subscriber::Registry>;

const DEFAULT_FILTER: &str = "info";

/// Install the global subscriber. A second call keeps the first subscriber;
/// the returned handle is then detached and level changes through it are
/// reported as warnings.
pub fn init_tracing() -> ReloadHandle {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    let (filter_layer, handle) = reload::Layer::new(env_filter);

    #[cfg(target_arch = "wasm32")]
    let fmt_layer = fmt::layer()
        .with_ansi(false)
        .without_time()
        .with_target(true)
        .with_writer(crate::web::MakeConsoleWriter);

    #[cfg(not(target_arch = "wasm32"))]
    let fmt_layer = fmt::layer()
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .with_writer(std::io::stderr);

    if tracing_subscriber::registry()
        .with(fmt_layer.with_filter(filter_layer))
        .try_init()
        .is_ok()
    {
        debug!("Logging initialized; override level with logging.log_level");
    }
    handle
}

/// Swap the active filter for the configured level.
pub fn set_log_level(handle: &ReloadHandle, level: LogLevel) {
    let parsed = filter_for(level);
    if let Err(err) = handle.modify(|filter| *filter = parsed) {
        warn!(%level, "Failed to update log level from config: {err}");
    } else {
        debug!(%level, "Log level set from config");
    }
}

fn filter_for(level: LogLevel) -> EnvFilter {
    EnvFilter::builder()
        .parse(level.as_filter_str())
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing::level_filters::LevelFilter;

    #[test]
    fn every_level_maps_to_its_filter() {
        let expected = [
            (LogLevel::Trace, LevelFilter::TRACE),
            (LogLevel::Debug, LevelFilter::DEBUG),
            (LogLevel::Info, LevelFilter::INFO),
            (LogLevel::Warn, LevelFilter::WARN),
            (LogLevel::Error, LevelFilter::ERROR),
        ];
        for (level, filter) in expected {
            assert_eq!(filter_for(level).max_level_hint(), Some(filter));
        }
    }

    #[test]
    fn level_changes_apply_through_the_handle() {
        let (filter_layer, handle) = reload::Layer::new(EnvFilter::new(DEFAULT_FILTER));
        let subscriber = tracing_subscriber::registry().with(filter_layer);
        let current = |handle: &ReloadHandle| {
            handle
                .with_current(|filter| filter.max_level_hint())
                .ok()
                .flatten()
        };

        tracing::subscriber::with_default(subscriber, || {
            assert_eq!(current(&handle), Some(LevelFilter::INFO));
            set_log_level(&handle, LogLevel::Warn);
            assert_eq!(current(&handle), Some(LevelFilter::WARN));
            set_log_level(&handle, LogLevel::Debug);
            assert_eq!(current(&handle), Some(LevelFilter::DEBUG));
        });
    }
}
