//! Errors that stop the service before or while it serves.

use std::path::PathBuf;

use thiserror::Error;

/// Failures of the startup sequence.
#[derive(Error, Debug)]
pub enum StartupError {
    /// Configuration could not be read or validated.
    #[error("configuration error: {0}")]
    Config(#[from] figment::Error),

    /// A configuration file was named but does not exist.
    #[error("configuration file not found: {}", .0.display())]
    MissingConfigFile(PathBuf),

    /// The `.env` file exists but could not be parsed.
    #[error("could not read .env: {0}")]
    Dotenv(#[from] dotenvy::Error),

    /// The listener could not be bound.
    #[error("could not bind to {address}: {source}")]
    Bind {
        address: String,
        #[source]
        source: std::io::Error,
    },

    /// The server stopped with an I/O error.
    #[error("server error: {0}")]
    Serve(#[from] std::io::Error),
}
