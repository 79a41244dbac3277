//! Logging initialisation for the maguro CLI.
//!
//! Installs a global `tracing` subscriber writing to stderr, so command
//! output on stdout stays clean. The format defaults to human-readable and
//! switches to JSON via `MAGURO_LOG_FORMAT=json`; the level is controlled by
//! `RUST_LOG`. A `log` bridge is installed so dependencies using either
//! facade emit structured events.

use std::{env, io, sync::OnceLock};

use thiserror::Error;
use tracing_log::LogTracer;
use tracing_subscriber::{
    EnvFilter, Layer, layer::SubscriberExt, util::SubscriberInitExt,
};

const LOG_FORMAT_ENV: &str = "MAGURO_LOG_FORMAT";

static INSTALLED: OnceLock<()> = OnceLock::new();

/// Errors raised while initialising structured logging.
#[derive(Debug, Error)]
pub enum LoggingError {
    /// Unsupported log format requested via `MAGURO_LOG_FORMAT`.
    #[error("unsupported log format `{provided}`; expected `human` or `json`")]
    UnsupportedFormat {
        /// Raw value supplied by the user.
        provided: String,
    },
    /// Failed to install the global tracing subscriber.
    #[error("failed to install tracing subscriber: {source}")]
    InstallFailed {
        /// Error raised by `tracing_subscriber`.
        #[source]
        source: tracing_subscriber::util::TryInitError,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LogFormat {
    Human,
    Json,
}

/// Install global structured logging if this process has not done so yet.
///
/// # Errors
/// Returns [`LoggingError`] when the requested format is unsupported or the
/// subscriber cannot be installed.
pub fn init_logging() -> Result<(), LoggingError> {
    if INSTALLED.get().is_some() {
        return Ok(());
    }

    let format = format_from_env()?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let fmt_layer = tracing_subscriber::fmt::layer().with_writer(io::stderr);
    let fmt_layer = match format {
        LogFormat::Human => fmt_layer.boxed(),
        LogFormat::Json => fmt_layer.json().boxed(),
    };

    // Best-effort: another logger owning the `log` slot keeps its config.
    let _ = LogTracer::init();

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init()
        .map_err(|source| LoggingError::InstallFailed { source })?;

    let _ = INSTALLED.set(());
    Ok(())
}

/// Reads `MAGURO_LOG_FORMAT`, defaulting to human-readable when unset.
fn format_from_env() -> Result<LogFormat, LoggingError> {
    match env::var(LOG_FORMAT_ENV) {
        Ok(raw) => parse_format(&raw),
        Err(_) => Ok(LogFormat::Human),
    }
}

fn parse_format(raw: &str) -> Result<LogFormat, LoggingError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "human" => Ok(LogFormat::Human),
        "json" => Ok(LogFormat::Json),
        other => Err(LoggingError::UnsupportedFormat {
            provided: other.to_owned(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use rstest::rstest;

    #[rstest]
    #[case("human", LogFormat::Human)]
    #[case("HUMAN", LogFormat::Human)]
    #[case(" json ", LogFormat::Json)]
    fn parse_format_accepts_supported_values(#[case] raw: &str, #[case] expected: LogFormat) {
        let format = parse_format(raw).expect("format must parse");
        assert_eq!(format, expected);
    }

    #[test]
    fn parse_format_rejects_unknown_values() {
        let err = parse_format("xml").expect_err("xml is not supported");
        match err {
            LoggingError::UnsupportedFormat { provided } => assert_eq!(provided, "xml"),
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
