//! Configuration management and validation.
//!
//! Settings are layered: built-in defaults, then an optional TOML file
//! (`~/.csvcmd` unless another file is given), then `CSVCMD_*` environment
//! variables. Command-line flags are applied on top by the CLI.

use crate::constants::{
    ACCESS_COLUMN_COUNT, CONFIG_FILE_NAME, CP932_ALIAS, DEFAULT_DELIMITER, DEFAULT_ENCODING,
    ENV_PREFIX,
};
use crate::error::{CsvCmdError, Result};
use encoding_rs::Encoding;
use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Settings for reading a parameter sheet
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Text encoding label of the input file (a WHATWG label such as
    /// `windows-31j` or `utf-8`; `cp932` is also accepted)
    pub encoding: String,

    /// Single-byte field delimiter
    pub delimiter: String,

    /// Number of access-table columns (`a001`..) to read
    pub access_columns: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            encoding: DEFAULT_ENCODING.to_string(),
            delimiter: DEFAULT_DELIMITER.to_string(),
            access_columns: ACCESS_COLUMN_COUNT,
        }
    }
}

impl Config {
    /// Create configuration with a custom encoding label
    pub fn with_encoding(mut self, encoding: impl Into<String>) -> Self {
        self.encoding = encoding.into();
        self
    }

    /// Create configuration with a custom delimiter
    pub fn with_delimiter(mut self, delimiter: impl Into<String>) -> Self {
        self.delimiter = delimiter.into();
        self
    }

    /// Create configuration with a custom access column count
    pub fn with_access_columns(mut self, access_columns: usize) -> Self {
        self.access_columns = access_columns;
        self
    }

    /// Default config file location (`$HOME/.csvcmd`)
    pub fn default_config_path() -> Option<PathBuf> {
        dirs::home_dir().map(|home| home.join(CONFIG_FILE_NAME))
    }

    /// Load defaults, then the config file, then the environment
    ///
    /// An explicitly named file must exist. Values are not validated here;
    /// call `validate` once command-line overrides have been applied.
    pub fn load_layered(config_file: Option<&Path>) -> Result<Self> {
        let mut figment = Figment::from(Serialized::defaults(Config::default()));

        if let Some(path) = config_file {
            if !path.exists() {
                return Err(CsvCmdError::configuration(format!(
                    "Config file does not exist: {}",
                    path.display()
                )));
            }
            debug!("Merging config file {}", path.display());
            figment = figment.merge(Toml::file(path));
        }

        let config: Config = figment.merge(Env::prefixed(ENV_PREFIX)).extract()?;
        Ok(config)
    }

    /// Validate settings
    pub fn validate(&self) -> Result<()> {
        self.text_encoding()?;
        self.delimiter_byte()?;

        if self.access_columns == 0 {
            return Err(CsvCmdError::configuration(
                "access_columns must be greater than 0",
            ));
        }
        if self.access_columns > 999 {
            return Err(CsvCmdError::configuration(
                "access_columns cannot exceed 999 (a001..a999)",
            ));
        }

        Ok(())
    }

    /// Resolve the encoding label
    pub fn text_encoding(&self) -> Result<&'static Encoding> {
        let label = match self.encoding.trim() {
            label if label.eq_ignore_ascii_case(CP932_ALIAS) => DEFAULT_ENCODING,
            label => label,
        };
        Encoding::for_label(label.as_bytes()).ok_or_else(|| CsvCmdError::encoding(&self.encoding))
    }

    /// Delimiter as the single byte the CSV reader expects
    pub fn delimiter_byte(&self) -> Result<u8> {
        match self.delimiter.as_bytes() {
            [byte] => Ok(*byte),
            _ => Err(CsvCmdError::configuration(format!(
                "Delimiter must be a single ASCII character, got '{}'",
                self.delimiter
            ))),
        }
    }
}
