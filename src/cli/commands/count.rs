//! Count command implementation
//!
//! Tallies rows by data type and counts module rows.

use super::shared::open_sheet;
use crate::classifier::classify;
use crate::cli::args::CountArgs;
use crate::config::Config;
use crate::constants::report_labels;
use crate::error::Result;
use crate::models::Category;
use std::io::Write;
use tracing::info;

/// Per-type record counts of one sheet
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CountSummary {
    pub physical: usize,
    pub flag: usize,
    pub mode: usize,
    pub unknown: usize,
    pub modules: usize,
}

impl CountSummary {
    /// Number of rows tallied by type (modules excluded)
    pub fn total(&self) -> usize {
        self.physical + self.flag + self.mode + self.unknown
    }

    /// Add one row of the given type category
    pub fn record(&mut self, category: Category) {
        match category {
            Category::Physical => self.physical += 1,
            Category::Flag => self.flag += 1,
            Category::Mode => self.mode += 1,
            Category::Module => self.modules += 1,
            // Rows without a data label, access tables included
            Category::Unknown | Category::AccessTable | Category::Skip => self.unknown += 1,
        }
    }

    /// First report line: per-type counts and total
    pub fn summary_line(&self) -> String {
        format!(
            "{}:{} {}:{} {}:{} {}:{} {}:{}",
            report_labels::PHYSICAL,
            self.physical,
            report_labels::FLAG,
            self.flag,
            report_labels::MODE,
            self.mode,
            report_labels::UNKNOWN,
            self.unknown,
            report_labels::TOTAL,
            self.total()
        )
    }

    /// Second report line: module count
    pub fn modules_line(&self) -> String {
        format!("{}:{}", report_labels::MODULES, self.modules)
    }
}

/// Count records of each type
///
/// Skip rows are ignored and module rows counted apart. Every other row,
/// access-table rows included, is tallied by its `type` label.
pub fn run_count<W: Write>(args: &CountArgs, config: &Config, out: &mut W) -> Result<CountSummary> {
    let mut summary = CountSummary::default();

    for row in open_sheet(&args.infile, config)? {
        let row = row?;

        match classify(&row) {
            Category::Skip => continue,
            Category::Module => summary.record(Category::Module),
            _ => {
                let category = Category::from_type_label(row.type_label());
                summary.record(category);
                if category == Category::Unknown && args.print_unknown {
                    writeln!(out, "{:04} missing type:{}", row.line, row.name())?;
                }
            }
        }
    }

    writeln!(out, "{}", summary.summary_line())?;
    writeln!(out, "{}", summary.modules_line())?;

    info!(
        "Counted {} data rows and {} modules",
        summary.total(),
        summary.modules
    );

    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_lines() {
        let summary = CountSummary {
            physical: 2,
            flag: 1,
            mode: 0,
            unknown: 0,
            modules: 1,
        };

        assert_eq!(summary.total(), 3);
        assert_eq!(
            summary.summary_line(),
            "物理値:2 フラグ:1 モード:0 Unknown:0 合計:3"
        );
        assert_eq!(summary.modules_line(), "モジュール数:1");
    }

    #[test]
    fn test_record() {
        let mut summary = CountSummary::default();
        summary.record(Category::Physical);
        summary.record(Category::Mode);
        summary.record(Category::Unknown);
        summary.record(Category::Module);

        assert_eq!(summary.physical, 1);
        assert_eq!(summary.mode, 1);
        assert_eq!(summary.unknown, 1);
        assert_eq!(summary.modules, 1);
        assert_eq!(summary.total(), 3);
    }

    #[test]
    fn test_record_non_data_categories_as_unknown() {
        let mut summary = CountSummary::default();
        summary.record(Category::AccessTable);
        summary.record(Category::Skip);

        assert_eq!(summary.unknown, 2);
        assert_eq!(summary.modules, 0);
        assert_eq!(summary.total(), 2);
    }
}
