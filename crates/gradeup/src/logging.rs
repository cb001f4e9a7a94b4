//! Logging setup.

use tracing_subscriber::EnvFilter;

use crate::GradeupError;

/// Installs a `tracing` fmt subscriber for the process.
///
/// `RUST_LOG` wins when set; otherwise `default_filter` (for example
/// `"gradeup=info"`) is used.
///
/// # Errors
/// Returns [`GradeupError::Logging`] if the directive doesn't parse or a
/// global subscriber is already installed.
pub fn init_logging(default_filter: &str) -> Result<(), GradeupError> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(default_filter)
            .map_err(|e| GradeupError::Logging(e.to_string()))?,
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| GradeupError::Logging(e.to_string()))
}
