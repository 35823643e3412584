//! Verify command implementation
//!
//! Runs required-field validation over every data row and prints one error
//! line per failing row.

use super::shared::open_sheet;
use crate::classifier::{classify, validate};
use crate::cli::args::VerifyArgs;
use crate::config::Config;
use crate::error::Result;
use crate::models::Category;
use std::io::Write;
use tracing::info;

/// Outcome of a verify run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VerifyReport {
    /// Rows that went through validation
    pub rows_checked: usize,
    /// Rows that failed validation
    pub failures: usize,
}

impl VerifyReport {
    pub fn is_clean(&self) -> bool {
        self.failures == 0
    }
}

/// Verify data records, printing `<line> Error: <reason> <name>` per failure
pub fn run_verify<W: Write>(args: &VerifyArgs, config: &Config, out: &mut W) -> Result<VerifyReport> {
    let mut report = VerifyReport::default();

    for row in open_sheet(&args.infile, config)? {
        let row = row?;

        if matches!(
            classify(&row),
            Category::Skip | Category::Module | Category::AccessTable
        ) {
            continue;
        }

        report.rows_checked += 1;
        if let Err(reason) = validate(&row) {
            report.failures += 1;
            writeln!(out, "{} Error: {} {}", row.line, reason, row.name())?;
        }
    }

    info!(
        "Verified {} rows, {} with errors",
        report.rows_checked, report.failures
    );

    Ok(report)
}
