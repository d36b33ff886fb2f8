//! Errors that can occur when reading, writing or interpreting a configuration.

use std::path::PathBuf;

use thiserror::Error;

/// The configuration cannot be turned into a connection.
#[derive(Debug, Error)]
pub enum ConfigurationError {
    #[error("Missing {field}.")]
    MissingField { field: &'static str },
}

/// The configuration directory could not be read.
#[derive(Debug, Error)]
pub enum ParseConfigurationError {
    #[error("parse error on {file_path}:{line}:{column}: {message}")]
    ParseError {
        file_path: PathBuf,
        line: usize,
        column: usize,
        message: String,
    },
    #[error("unsupported configuration version {found}, expected {expected}")]
    UnsupportedVersion { found: u32, expected: u32 },
    #[error("I/O error: {0}")]
    IoErrorButStringified(String),
}

/// The configuration could not be written to a directory.
#[derive(Debug, Error)]
pub enum WriteParsedConfigurationError {
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}
