//! Structured logging for the netrecover CLI.
//!
//! Diagnostics go to stderr so the edge list on stdout stays machine
//! readable. `RUST_LOG` selects the level (default `info`) and
//! `NETRECOVER_LOG_FORMAT` selects `human` or `json` output. Events from the
//! `log` facade are bridged into `tracing`.

use std::{env, str::FromStr, sync::OnceLock};

use thiserror::Error;
use tracing_log::LogTracer;
use tracing_subscriber::{EnvFilter, Layer, layer::SubscriberExt};

/// Environment variable selecting the log format.
pub const LOG_FORMAT_ENV: &str = "NETRECOVER_LOG_FORMAT";

static INSTALLED: OnceLock<LogFormat> = OnceLock::new();

/// Output format of the stderr log stream.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum LogFormat {
    /// Human-readable lines.
    #[default]
    Human,
    /// One JSON object per event.
    Json,
}

impl FromStr for LogFormat {
    type Err = LoggingError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "human" => Ok(Self::Human),
            "json" => Ok(Self::Json),
            other => Err(LoggingError::UnsupportedFormat {
                provided: other.to_owned(),
            }),
        }
    }
}

/// Errors raised while initialising structured logging.
#[derive(Debug, Error)]
pub enum LoggingError {
    /// `NETRECOVER_LOG_FORMAT` was not valid UTF-8.
    #[error("environment variable `{name}` contained invalid UTF-8")]
    InvalidUnicode {
        /// Name of the offending environment variable.
        name: &'static str,
    },
    /// `NETRECOVER_LOG_FORMAT` named an unknown format.
    #[error("unsupported log format `{provided}`; expected `human` or `json`")]
    UnsupportedFormat {
        /// Normalised value supplied by the user.
        provided: String,
    },
    /// The global subscriber could not be installed.
    #[error("failed to install tracing subscriber: {source}")]
    InstallFailed {
        /// Error raised when a global subscriber is already set.
        #[source]
        source: tracing::subscriber::SetGlobalDefaultError,
    },
}

/// Reads the requested format from `NETRECOVER_LOG_FORMAT`.
///
/// # Errors
/// Returns [`LoggingError`] when the variable is not UTF-8 or names an
/// unknown format.
pub fn format_from_env() -> Result<LogFormat, LoggingError> {
    match env::var(LOG_FORMAT_ENV) {
        Ok(raw) => raw.parse(),
        Err(env::VarError::NotPresent) => Ok(LogFormat::default()),
        Err(env::VarError::NotUnicode(_)) => Err(LoggingError::InvalidUnicode {
            name: LOG_FORMAT_ENV,
        }),
    }
}

/// Installs the global subscriber once; later calls return the first format.
///
/// # Errors
/// Returns [`LoggingError`] when the format cannot be determined or another
/// subscriber already owns the global slot.
pub fn init_logging() -> Result<LogFormat, LoggingError> {
    if let Some(format) = INSTALLED.get() {
        return Ok(*format);
    }

    let format = format_from_env()?;
    install(format)?;
    Ok(*INSTALLED.get_or_init(|| format))
}

fn install(format: LogFormat) -> Result<(), LoggingError> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let fmt_layer = tracing_subscriber::fmt::layer().with_writer(std::io::stderr);
    let fmt_layer = match format {
        LogFormat::Human => fmt_layer.boxed(),
        LogFormat::Json => fmt_layer.json().with_current_span(true).boxed(),
    };
    let subscriber = tracing_subscriber::registry().with(filter).with(fmt_layer);

    // `set_global_default` never touches the `log` facade, whatever features
    // `tracing-subscriber` was built with, so the bridge below is the only one.
    tracing::subscriber::set_global_default(subscriber)
        .map_err(|source| LoggingError::InstallFailed { source })?;

    // Another logger may already own the `log` slot; keep it if so.
    let _ = LogTracer::init();
    Ok(())
}
