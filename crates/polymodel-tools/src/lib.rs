//! Diagnostics tooling for polymodel.
//!
//! Currently this is the structured logging setup shared by applications
//! and test harnesses that embed the expression crates.

pub mod logging;

pub use logging::{
    LogFormat, LoggingConfig, LoggingError, enable_logging, enable_logging_from_env,
};
