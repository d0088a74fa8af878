//! Structured logging setup.
//!
//! Configuration comes from the environment by default:
//!
//! - `POLYMODEL_TRACE`: filter directive (`debug`, `polymodel_core=trace`, ...).
//!   Unset means `off`.
//! - `POLYMODEL_LOG_FORMAT`: `pretty` (default) or `json`.
//! - `POLYMODEL_LOG_FILE`: optional path; logs are appended there as well.

use std::env;
use std::fs::{File, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};

use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

pub const TRACE_ENV: &str = "POLYMODEL_TRACE";
pub const FORMAT_ENV: &str = "POLYMODEL_LOG_FORMAT";
pub const FILE_ENV: &str = "POLYMODEL_LOG_FILE";

#[derive(Debug)]
pub enum LoggingError {
    InvalidFilter(String),
    InvalidFormat(String),
    LogFile(io::Error),
    Init(String),
}

impl LoggingError {
    /// Returns a semantic error code for programmatic handling.
    pub fn code(&self) -> &'static str {
        match self {
            LoggingError::InvalidFilter(_) => "LOGGING_INVALID_FILTER",
            LoggingError::InvalidFormat(_) => "LOGGING_INVALID_FORMAT",
            LoggingError::LogFile(_) => "LOGGING_FILE_ERROR",
            LoggingError::Init(_) => "LOGGING_INIT_FAILED",
        }
    }
}

impl std::fmt::Display for LoggingError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LoggingError::InvalidFilter(detail) => {
                write!(f, "[{}] Invalid log filter: {}", self.code(), detail)
            }
            LoggingError::InvalidFormat(value) => write!(
                f,
                "[{}] Invalid {} '{}' (expected 'json' or 'pretty')",
                self.code(),
                FORMAT_ENV,
                value
            ),
            LoggingError::LogFile(err) => {
                write!(f, "[{}] Failed to open log file: {}", self.code(), err)
            }
            LoggingError::Init(detail) => {
                write!(f, "[{}] Failed to initialize logging: {}", self.code(), detail)
            }
        }
    }
}

impl std::error::Error for LoggingError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LoggingError::LogFile(err) => Some(err),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

impl LogFormat {
    pub fn parse(value: &str) -> Result<Self, LoggingError> {
        if value.eq_ignore_ascii_case("pretty") {
            Ok(LogFormat::Pretty)
        } else if value.eq_ignore_ascii_case("json") {
            Ok(LogFormat::Json)
        } else {
            Err(LoggingError::InvalidFormat(value.to_string()))
        }
    }
}

/// Resolved logging settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggingConfig {
    /// Filter directive; `None` disables logging.
    pub level: Option<String>,
    pub format: LogFormat,
    pub file: Option<PathBuf>,
}

impl LoggingConfig {
    /// Read settings from `POLYMODEL_*` environment variables.
    pub fn from_env() -> Result<Self, LoggingError> {
        Self::from_parts(
            env::var(TRACE_ENV).ok().as_deref(),
            env::var(FORMAT_ENV).ok().as_deref(),
            env::var(FILE_ENV).ok().as_deref(),
        )
    }

    /// Build settings from raw string values, as found in the environment.
    pub fn from_parts(
        level: Option<&str>,
        format: Option<&str>,
        file: Option<&str>,
    ) -> Result<Self, LoggingError> {
        let level = level
            .map(str::trim)
            .filter(|value| !value.is_empty() && !value.eq_ignore_ascii_case("off"))
            .map(str::to_string);
        let format = format.map(LogFormat::parse).transpose()?.unwrap_or_default();
        let file = file.filter(|path| !path.is_empty()).map(PathBuf::from);
        Ok(Self {
            level,
            format,
            file,
        })
    }

    /// Override the filter directive.
    pub fn with_level(mut self, level: impl Into<String>) -> Self {
        self.level = Some(level.into());
        self
    }

    pub fn filter(&self) -> Result<EnvFilter, LoggingError> {
        match &self.level {
            None => Ok(EnvFilter::default().add_directive(LevelFilter::OFF.into())),
            Some(level) => {
                EnvFilter::try_new(level).map_err(|err| LoggingError::InvalidFilter(err.to_string()))
            }
        }
    }
}

fn open_log_file(path: &Path) -> Result<File, LoggingError> {
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(LoggingError::LogFile)
}

fn map_init_err<E: std::fmt::Display>(err: E) -> LoggingError {
    LoggingError::Init(err.to_string())
}

/// Install a global subscriber for `config`.
///
/// Returns `Ok(true)` when logging was initialized, `Ok(false)` if a
/// subscriber is already configured.
pub fn enable_logging(config: &LoggingConfig) -> Result<bool, LoggingError> {
    if tracing::dispatcher::has_been_set() {
        return Ok(false);
    }

    let filter = config.filter()?;
    let base = tracing_subscriber::registry().with(filter);

    match config.format {
        LogFormat::Json => {
            let stderr_layer = tracing_subscriber::fmt::layer()
                .with_writer(io::stderr)
                .json();
            let base = base.with(stderr_layer);
            if let Some(path) = &config.file {
                let file_layer = tracing_subscriber::fmt::layer()
                    .with_writer(open_log_file(path)?)
                    .with_ansi(false)
                    .json();
                base.with(file_layer).try_init().map_err(map_init_err)?;
            } else {
                base.try_init().map_err(map_init_err)?;
            }
        }
        LogFormat::Pretty => {
            let stderr_layer = tracing_subscriber::fmt::layer()
                .with_writer(io::stderr)
                .pretty();
            let base = base.with(stderr_layer);
            if let Some(path) = &config.file {
                let file_layer = tracing_subscriber::fmt::layer()
                    .with_writer(open_log_file(path)?)
                    .with_ansi(false)
                    .pretty();
                base.with(file_layer).try_init().map_err(map_init_err)?;
            } else {
                base.try_init().map_err(map_init_err)?;
            }
        }
    }

    tracing::debug!(
        component = "logging",
        operation = "enable_logging",
        status = "success",
        format = ?config.format,
        "Logging initialized"
    );
    Ok(true)
}

/// [`LoggingConfig::from_env`] followed by [`enable_logging`].
pub fn enable_logging_from_env() -> Result<bool, LoggingError> {
    enable_logging(&LoggingConfig::from_env()?)
}
