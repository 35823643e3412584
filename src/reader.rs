//! Parameter sheet reader.
//!
//! Decodes the input file with the configured text encoding, resolves the
//! header once and yields typed `Row`s in file order.

use crate::config::Config;
use crate::error::{CsvCmdError, Result};
use crate::header::ColumnMap;
use crate::models::Row;
use csv::StringRecord;
use std::io::Cursor;
use std::path::Path;
use tracing::{debug, info, warn};

/// Streaming reader over the data rows of one sheet
///
/// The input file is read and closed when the reader is opened; rows are
/// then parsed lazily from the decoded text.
#[derive(Debug)]
pub struct SheetReader {
    source: String,
    columns: ColumnMap,
    reader: csv::Reader<Cursor<Vec<u8>>>,
    record: StringRecord,
    line: usize,
}

impl SheetReader {
    /// Open a sheet file
    pub fn open(path: &Path, config: &Config) -> Result<Self> {
        if !path.exists() {
            return Err(CsvCmdError::FileNotFound {
                path: path.to_path_buf(),
            });
        }

        info!("Reading parameter sheet: {}", path.display());
        let bytes = std::fs::read(path)
            .map_err(|e| CsvCmdError::io(format!("Failed to read {}", path.display()), e))?;

        Self::from_bytes(path.display().to_string(), &bytes, config)
    }

    /// Build a reader over raw file content
    pub fn from_bytes(source: impl Into<String>, bytes: &[u8], config: &Config) -> Result<Self> {
        let source = source.into();
        let encoding = config.text_encoding()?;

        let (text, used, had_errors) = encoding.decode(bytes);
        if used != encoding {
            debug!("Byte order mark selects {} over {}", used.name(), encoding.name());
        }
        if had_errors {
            warn!(
                "{} contains bytes that are not valid {}; they were replaced",
                source,
                used.name()
            );
        }

        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .delimiter(config.delimiter_byte()?)
            .from_reader(Cursor::new(text.into_owned().into_bytes()));

        let headers = reader
            .headers()
            .map_err(|e| CsvCmdError::csv(&source, "Failed to read CSV header", e))?;
        let columns = ColumnMap::from_headers(headers, config.access_columns)?;

        Ok(Self {
            source,
            columns,
            reader,
            record: StringRecord::new(),
            line: 0,
        })
    }

    /// Column mapping resolved from the header
    pub fn columns(&self) -> &ColumnMap {
        &self.columns
    }

    /// Name of the input, for messages
    pub fn source(&self) -> &str {
        &self.source
    }
}

impl Iterator for SheetReader {
    type Item = Result<Row>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.reader.read_record(&mut self.record) {
            Ok(true) => {
                self.line += 1;
                Some(Ok(self.columns.row(self.line, &self.record)))
            }
            Ok(false) => None,
            Err(e) => Some(Err(CsvCmdError::csv(
                &self.source,
                format!("Failed to read data row {}", self.line + 1),
                e,
            ))),
        }
    }
}
