use clap::ValueEnum;
use std::io::{self, IsTerminal};
use tracing_subscriber::{EnvFilter, fmt};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum LogFormat {
    /// Pretty when stderr is a terminal, compact otherwise
    #[default]
    Auto,
    Pretty,
    Compact,
    Json,
}

/// Initialize the logging system with environment-based filtering.
///
/// Diagnostics go to stderr so they never interleave with the report on
/// stdout. The level is taken from `RUST_LOG` and defaults to "info".
pub fn init_logging(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let builder = fmt().with_env_filter(filter).with_writer(io::stderr);

    match resolve_log_format(format) {
        LogFormat::Json => builder.json().flatten_event(true).init(),
        LogFormat::Pretty => builder.pretty().init(),
        LogFormat::Compact | LogFormat::Auto => builder.compact().init(),
    }
}

pub fn resolve_log_format(format: LogFormat) -> LogFormat {
    match format {
        LogFormat::Auto if io::stderr().is_terminal() => LogFormat::Pretty,
        LogFormat::Auto => LogFormat::Compact,
        other => other,
    }
}
