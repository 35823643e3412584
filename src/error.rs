//! Error handling for csvcmd operations.
//!
//! `CsvCmdError` covers the fatal conditions that stop a run. The per-row
//! failures reported by `verify` are `ValidationError`s and never abort.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CsvCmdError {
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Input file not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error("CSV parsing error in file '{file}': {message}")]
    Csv {
        file: String,
        message: String,
        #[source]
        source: csv::Error,
    },

    #[error("Column '{column}' is missing from the header")]
    MissingColumn { column: String },

    #[error("Unknown text encoding: {label}")]
    Encoding { label: String },

    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

impl CsvCmdError {
    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create a CSV parsing error for a file
    pub fn csv(file: impl Into<String>, message: impl Into<String>, source: csv::Error) -> Self {
        Self::Csv {
            file: file.into(),
            message: message.into(),
            source,
        }
    }

    /// Create a missing column error
    pub fn missing_column(column: impl Into<String>) -> Self {
        Self::MissingColumn {
            column: column.into(),
        }
    }

    /// Create an unknown encoding error
    pub fn encoding(label: impl Into<String>) -> Self {
        Self::Encoding {
            label: label.into(),
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }
}

impl From<std::io::Error> for CsvCmdError {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: "I/O operation failed".to_string(),
            source: error,
        }
    }
}

impl From<figment::Error> for CsvCmdError {
    fn from(error: figment::Error) -> Self {
        Self::Configuration {
            message: error.to_string(),
        }
    }
}

/// Recoverable failure of a single data row
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("unknown type")]
    UnknownType,

    #[error("{column} missing")]
    MissingField { column: &'static str },
}

pub type Result<T> = std::result::Result<T, CsvCmdError>;
