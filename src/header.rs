//! Header resolution for parameter sheets.
//!
//! Maps the header row onto the fixed `Field` set and the numbered
//! access-table columns once, so that every data row can be turned into
//! a typed `Row` without further name lookups.

use crate::constants::ACCESS_COLUMN_PATTERN;
use crate::error::{CsvCmdError, Result};
use crate::models::{FIELD_COUNT, Field, Row};
use csv::StringRecord;
use regex::Regex;
use std::collections::HashMap;
use tracing::{debug, warn};

/// Column index mapping for one sheet
#[derive(Debug, Clone)]
pub struct ColumnMap {
    /// Record index of each fixed field, in `Field::ALL` order
    fields: [usize; FIELD_COUNT],

    /// Record index of each access column (`a001` at 0); `None` if absent
    access: Vec<Option<usize>>,
}

impl ColumnMap {
    /// Resolve a header record
    ///
    /// Every fixed field must be present. Access columns are optional and
    /// only those numbered `1..=access_count` are mapped.
    pub fn from_headers(headers: &StringRecord, access_count: usize) -> Result<Self> {
        let name_to_index: HashMap<&str, usize> = headers
            .iter()
            .enumerate()
            .map(|(index, name)| (name, index))
            .collect();

        let mut fields = [0usize; FIELD_COUNT];
        for (slot, field) in fields.iter_mut().zip(Field::ALL) {
            *slot = *name_to_index
                .get(field.name())
                .ok_or_else(|| CsvCmdError::missing_column(field.name()))?;
        }

        let pattern = Regex::new(ACCESS_COLUMN_PATTERN)
            .map_err(|e| CsvCmdError::configuration(format!("Invalid access pattern: {}", e)))?;

        let mut access = vec![None; access_count];
        for (index, name) in headers.iter().enumerate() {
            let Some(caps) = pattern.captures(name) else {
                continue;
            };
            let number: usize = caps[1].parse().unwrap_or(0);
            if (1..=access_count).contains(&number) {
                access[number - 1] = Some(index);
            } else {
                warn!("Ignoring access column '{}' outside a001..a{:03}", name, access_count);
            }
        }

        let map = Self { fields, access };
        let (fixed, mapped) = map.stats();
        debug!(
            "Column map: {} fixed columns, {} of {} access columns",
            fixed, mapped, access_count
        );

        Ok(map)
    }

    /// Build a typed row from a data record
    ///
    /// Cells past the end of a short record read as empty strings.
    pub fn row(&self, line: usize, record: &StringRecord) -> Row {
        let mut row = Row::new(line);
        for (field, &index) in Field::ALL.iter().zip(self.fields.iter()) {
            row.set(*field, record.get(index).unwrap_or(""));
        }
        for (slot, index) in self.access.iter().enumerate() {
            if let Some(index) = index {
                row.set_access(slot, record.get(*index).unwrap_or(""));
            }
        }
        row
    }

    /// Get statistics about the mapping: (fixed columns, mapped access columns)
    pub fn stats(&self) -> (usize, usize) {
        (
            self.fields.len(),
            self.access.iter().filter(|index| index.is_some()).count(),
        )
    }
}
