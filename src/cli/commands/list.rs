//! List command implementation
//!
//! Prints module names, data names, record dumps or the module names held
//! in the access table.

use super::shared::open_sheet;
use crate::classifier::{is_access_table, is_module, is_skip};
use crate::cli::args::{ListArgs, ListMode};
use crate::config::Config;
use crate::error::{CsvCmdError, Result};
use crate::models::{Category, Field, Row, access_column_name};
use std::io::Write;
use tracing::{debug, info};

/// Columns dumped after the line number for a flag row
const FLAG_DUMP_FIELDS: &[Field] = &[
    Field::Name,
    Field::Type,
    Field::Flag0,
    Field::Flag1,
    Field::InitValue,
    Field::Identifier,
    Field::IdentLen,
    Field::IdentType,
    Field::Min2,
    Field::Max2,
    Field::InitValue2,
];

/// Columns dumped after the line number for physical and mode rows
const SHORT_DUMP_FIELDS: &[Field] = &[Field::Name, Field::Type];

/// Outcome of a list run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListStats {
    /// Data rows read
    pub rows_scanned: usize,
    /// Lines printed
    pub lines_written: usize,
    /// Line of the access-table row that ended the scan, if any
    pub stopped_at: Option<usize>,
}

/// List rows according to the selection flags
pub fn run_list<W: Write>(args: &ListArgs, config: &Config, out: &mut W) -> Result<ListStats> {
    let mode = args.mode();
    let mut stats = ListStats::default();
    debug!("List mode {:?}, access modules: {}", mode, args.access_modules);

    for row in open_sheet(&args.infile, config)? {
        let row = row?;
        stats.rows_scanned += 1;

        if args.access_modules && is_access_table(&row) {
            stats.lines_written += write_access_modules(&row, config.access_columns, out)?;
            stats.stopped_at = Some(row.line);
            break;
        }

        if is_skip(&row) {
            continue;
        }

        let line = match mode {
            Some(ListMode::Modules) => is_module(&row).then(|| row.name().to_string()),
            Some(ListMode::Data) => is_data_typed(&row).then(|| row.name().to_string()),
            Some(ListMode::All) => {
                if is_module(&row) {
                    Some(format!("m:{}", row.name()))
                } else if is_data_typed(&row) {
                    Some(format!("d:{}", row.name()))
                } else {
                    None
                }
            }
            Some(ListMode::Long) => record_dump(&row),
            None => None,
        };

        if let Some(line) = line {
            writeln!(out, "{}", line)?;
            stats.lines_written += 1;
        }
    }

    info!(
        "Listed {} lines from {} rows",
        stats.lines_written, stats.rows_scanned
    );

    Ok(stats)
}

/// True if the row's `type` is one of the three data labels
fn is_data_typed(row: &Row) -> bool {
    Category::from_type_label(row.type_label()).is_data()
}

/// Space-joined dump of a data row, `None` for other rows
fn record_dump(row: &Row) -> Option<String> {
    let fields = match Category::from_type_label(row.type_label()) {
        Category::Physical | Category::Mode => SHORT_DUMP_FIELDS,
        Category::Flag => FLAG_DUMP_FIELDS,
        _ => return None,
    };

    let line = format!("{:04}", row.line);
    let mut parts = vec![line.as_str()];
    parts.extend(fields.iter().map(|field| row.get(*field)));
    Some(parts.join(" "))
}

/// Last line of a multi-line access cell
fn last_segment(cell: &str) -> &str {
    cell.rsplit(|c: char| c == '\n' || c == '\r')
        .next()
        .unwrap_or_default()
}

/// Print the last line of every access cell of an access-table row
fn write_access_modules<W: Write>(row: &Row, access_columns: usize, out: &mut W) -> Result<usize> {
    for index in 0..access_columns {
        let cell = row
            .access_cell(index)
            .ok_or_else(|| CsvCmdError::missing_column(access_column_name(index)))?;
        writeln!(out, "{}", last_segment(cell))?;
    }
    Ok(access_columns)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::type_labels;

    #[test]
    fn test_last_segment() {
        assert_eq!(last_segment("MOD_A"), "MOD_A");
        assert_eq!(last_segment("r\nMOD_A"), "MOD_A");
        assert_eq!(last_segment("r\r\nw\r\nMOD_B"), "MOD_B");
        assert_eq!(last_segment("MOD_C\n"), "");
        assert_eq!(last_segment(""), "");
    }

    #[test]
    fn test_record_dump_physical_and_mode() {
        let row = Row::new(12)
            .with(Field::Name, "ENG_SPD")
            .with(Field::Type, type_labels::PHYSICAL)
            .with(Field::PhysUnit, "rpm");
        assert_eq!(record_dump(&row).as_deref(), Some("0012 ENG_SPD 物理値"));

        let row = Row::new(3)
            .with(Field::Name, "DRV_MODE")
            .with(Field::Type, type_labels::MODE);
        assert_eq!(record_dump(&row).as_deref(), Some("0003 DRV_MODE モード"));
    }

    #[test]
    fn test_record_dump_flag_has_twelve_fields() {
        let row = Row::new(5)
            .with(Field::Name, "IGN_ON")
            .with(Field::Type, type_labels::FLAG)
            .with(Field::Flag0, "OFF")
            .with(Field::Flag1, "ON")
            .with(Field::InitValue, "0")
            .with(Field::Identifier, "0x10")
            .with(Field::IdentLen, "1")
            .with(Field::IdentType, "u8")
            .with(Field::Min2, "0")
            .with(Field::Max2, "1")
            .with(Field::InitValue2, "0");

        let dump = record_dump(&row).unwrap();
        assert_eq!(dump, "0005 IGN_ON フラグ OFF ON 0 0x10 1 u8 0 1 0");
        assert_eq!(dump.split(' ').count(), 12);
    }

    #[test]
    fn test_record_dump_unknown_is_none() {
        let row = Row::new(1).with(Field::Name, "X").with(Field::Type, "マップ");
        assert_eq!(record_dump(&row), None);
    }

    #[test]
    fn test_write_access_modules_missing_column() {
        let row = Row::new(1).with_access(0, "MOD_A");
        let mut out = Vec::new();

        let result = write_access_modules(&row, 2, &mut out);

        match result {
            Err(CsvCmdError::MissingColumn { column }) => assert_eq!(column, "a002"),
            other => panic!("Expected MissingColumn, got {:?}", other),
        }
        assert_eq!(String::from_utf8(out).unwrap(), "MOD_A\n");
    }
}
