//! Logging utilities.
//!
//! The engine only emits through the `log` facade; hosts call
//! [`init_logging`] to install `env_logger`.

mod init;

pub use init::{LoggingConfig, init_logging};
