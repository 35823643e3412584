//! csvcmd Library
//!
//! A Rust library for inspecting CSV exports of calibration parameter
//! sheets (module, access-table and physical/flag/mode data rows).
//!
//! This library provides tools for:
//! - Decoding sheets in their original text encoding (Shift_JIS by default)
//! - Resolving the header once into a typed column map
//! - Classifying each row and validating required fields per data type
//! - Counting, listing and verifying records from the command line

pub mod classifier;
pub mod config;
pub mod constants;
pub mod error;
pub mod header;
pub mod models;
pub mod reader;

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use classifier::{classify, required_fields, validate};
pub use config::Config;
pub use error::{CsvCmdError, Result, ValidationError};
pub use models::{Category, Field, Row};
pub use reader::SheetReader;
