//! Core result and error types
//!
//! - **Results**: [`Evaluation`], one verdict per rule and field
//! - **Failures**: [`ValidationError`], user-facing, built from a failed evaluation
//! - **Misuse**: [`ConfigError`], the form was wired up wrong
//!
//! The split matters: a `ConfigError` is returned as `Err` from every entry
//! point and is never folded into `valid == false`.

pub mod config_error;
pub mod error;
pub mod evaluation;

pub use config_error::ConfigError;
pub use error::ValidationError;
pub use evaluation::Evaluation;

/// Result of an operation that can only fail through misconfiguration.
pub type ConfigResult<T> = Result<T, ConfigError>;
