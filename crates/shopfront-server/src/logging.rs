//! Tracing subscriber setup.

use clap::ValueEnum;
use tracing_subscriber::fmt::time::ChronoLocal;
use tracing_subscriber::EnvFilter;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Output format for log lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    Text,
    Json,
}

/// Resolved logging options.
#[derive(Debug, Clone)]
pub struct LogSettings {
    pub level: String,
    pub format: LogFormat,
    pub ansi: bool,
}

/// Build the env filter for a level directive, falling back to `info` when
/// the directive does not parse.
pub fn env_filter(level: &str) -> EnvFilter {
    EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Install the global subscriber. Call once at startup.
pub fn init(settings: &LogSettings) {
    let filter = env_filter(&settings.level);
    let timer = ChronoLocal::new(TIMESTAMP_FORMAT.to_string());

    let result = match settings.format {
        LogFormat::Json => tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .with_timer(timer)
            .with_target(false)
            .try_init(),
        LogFormat::Text => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_timer(timer)
            .with_ansi(settings.ansi)
            .with_target(false)
            .try_init(),
    };

    // Already installed (tests, embedding); keep the existing subscriber.
    if result.is_err() {
        tracing::debug!("tracing subscriber already initialized");
    }
}
