//! Command-line argument definitions for csvcmd
//!
//! Defines the CLI interface using the clap derive API. `list` accepts
//! `-ma` as a single-dash long flag; `normalize_args` rewrites it to `--ma`
//! before clap sees it.

use clap::{ArgAction, Parser, Subcommand};
use std::ffi::OsString;
use std::path::PathBuf;

/// CLI arguments for the parameter sheet tool
///
/// Counts, lists and verifies records of a CSV export of a calibration
/// parameter sheet.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "csvcmd",
    version,
    disable_version_flag = true,
    about = "Count, list and verify records of a calibration parameter sheet CSV"
)]
pub struct Args {
    /// Show program version and exit
    #[arg(short = 'v', long = "version", action = ArgAction::Version)]
    pub version: Option<bool>,

    /// Text encoding of the input file (overrides config)
    #[arg(long = "encoding", value_name = "LABEL", global = true)]
    pub encoding: Option<String>,

    /// Path to configuration file
    ///
    /// TOML file with `encoding`, `delimiter` and `access_columns` keys.
    /// If not specified, ~/.csvcmd is used when it exists.
    #[arg(long = "config", value_name = "FILE", global = true)]
    pub config_file: Option<PathBuf>,

    /// Logging verbosity level
    #[arg(
        long = "verbose",
        action = ArgAction::Count,
        global = true,
        help = "Increase logging verbosity (--verbose: info, twice: debug, three times: trace)"
    )]
    pub verbose: u8,

    /// Suppress log output except errors
    #[arg(short = 'q', long = "quiet", global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Count data records of each type
    Count(CountArgs),
    /// List data with various options
    List(ListArgs),
    /// Verify data records
    Verify(VerifyArgs),
    /// Generate access map
    Generate(GenerateArgs),
}

/// Arguments for the count command
#[derive(Debug, Clone, Parser)]
pub struct CountArgs {
    /// Print data name without type field
    #[arg(short = 'p')]
    pub print_unknown: bool,

    /// CSV file pre-converted from the original data file
    #[arg(value_name = "INCSVFILE")]
    pub infile: PathBuf,
}

/// Arguments for the list command
///
/// The selection flags may be combined; the first of `-m`, `-d`, `-a`,
/// `-l` that is set decides what is printed.
#[derive(Debug, Clone, Default, Parser)]
pub struct ListArgs {
    /// List all module names
    #[arg(short = 'm')]
    pub modules: bool,

    /// List all data names
    #[arg(short = 'd')]
    pub data: bool,

    /// List all module and data names
    #[arg(short = 'a')]
    pub all: bool,

    /// List all data with values
    #[arg(short = 'l')]
    pub long: bool,

    /// List all module names in access fields
    #[arg(long = "ma")]
    pub access_modules: bool,

    /// CSV file pre-converted from the original data file
    #[arg(value_name = "INCSVFILE")]
    pub infile: PathBuf,
}

/// What the list command prints for ordinary rows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListMode {
    Modules,
    Data,
    All,
    Long,
}

impl ListArgs {
    /// Resolve the selection flags, first set flag wins
    pub fn mode(&self) -> Option<ListMode> {
        if self.modules {
            Some(ListMode::Modules)
        } else if self.data {
            Some(ListMode::Data)
        } else if self.all {
            Some(ListMode::All)
        } else if self.long {
            Some(ListMode::Long)
        } else {
            None
        }
    }
}

/// Arguments for the verify command
#[derive(Debug, Clone, Parser)]
pub struct VerifyArgs {
    /// CSV file pre-converted from the original data file
    #[arg(value_name = "INCSVFILE")]
    pub infile: PathBuf,
}

/// Arguments for the generate command
#[derive(Debug, Clone, Parser)]
pub struct GenerateArgs {
    /// CSV file pre-converted from the original data file
    #[arg(value_name = "INCSVFILE")]
    pub infile: PathBuf,

    /// CSV file to output results
    #[arg(value_name = "OUTCSVFILE")]
    pub outfile: PathBuf,
}

impl Args {
    /// Determine the appropriate log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else {
            match self.verbose {
                0 => "warn",
                1 => "info",
                2 => "debug",
                _ => "trace",
            }
        }
    }
}

/// Rewrite the single-dash long flag `-ma` to `--ma`
///
/// clap would otherwise read `-ma` as `-m -a`.
pub fn normalize_args<I>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = OsString>,
{
    args.into_iter()
        .map(|arg| {
            if arg == "-ma" {
                OsString::from("--ma")
            } else {
                arg
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(argv: &[&str]) -> Args {
        Args::try_parse_from(normalize_args(argv.iter().map(OsString::from))).unwrap()
    }

    #[test]
    fn test_count_args() {
        let args = parse(&["csvcmd", "count", "-p", "sheet.csv"]);
        match args.command {
            Some(Commands::Count(count)) => {
                assert!(count.print_unknown);
                assert_eq!(count.infile, PathBuf::from("sheet.csv"));
            }
            other => panic!("Expected count command, got {:?}", other),
        }
    }

    #[test]
    fn test_list_single_dash_ma() {
        let args = parse(&["csvcmd", "list", "-ma", "sheet.csv"]);
        match args.command {
            Some(Commands::List(list)) => {
                assert!(list.access_modules);
                assert!(!list.modules);
                assert!(!list.all);
                assert_eq!(list.mode(), None);
            }
            other => panic!("Expected list command, got {:?}", other),
        }
    }

    #[test]
    fn test_list_flag_precedence() {
        let args = parse(&["csvcmd", "list", "-l", "-d", "-a", "sheet.csv"]);
        let Some(Commands::List(list)) = args.command else {
            panic!("Expected list command");
        };
        assert_eq!(list.mode(), Some(ListMode::Data));

        let list = ListArgs {
            long: true,
            ..ListArgs::default()
        };
        assert_eq!(list.mode(), Some(ListMode::Long));

        let list = ListArgs {
            modules: true,
            long: true,
            ..ListArgs::default()
        };
        assert_eq!(list.mode(), Some(ListMode::Modules));
    }

    #[test]
    fn test_generate_args() {
        let args = parse(&["csvcmd", "generate", "in.csv", "out.csv"]);
        let Some(Commands::Generate(generate)) = args.command else {
            panic!("Expected generate command");
        };
        assert_eq!(generate.infile, PathBuf::from("in.csv"));
        assert_eq!(generate.outfile, PathBuf::from("out.csv"));
    }

    #[test]
    fn test_version_flag() {
        let err = Args::try_parse_from(["csvcmd", "-v"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayVersion);

        let err = Args::try_parse_from(["csvcmd", "--version"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayVersion);
    }

    #[test]
    fn test_global_options() {
        let args = parse(&[
            "csvcmd",
            "verify",
            "--encoding",
            "utf-8",
            "--verbose",
            "--verbose",
            "sheet.csv",
        ]);
        assert_eq!(args.encoding.as_deref(), Some("utf-8"));
        assert_eq!(args.get_log_level(), "debug");
        assert!(matches!(args.command, Some(Commands::Verify(_))));
    }

    #[test]
    fn test_log_level() {
        let mut args = parse(&["csvcmd"]);
        assert!(args.command.is_none());
        assert_eq!(args.get_log_level(), "warn");

        args.verbose = 1;
        assert_eq!(args.get_log_level(), "info");
        args.verbose = 3;
        assert_eq!(args.get_log_level(), "trace");

        args.quiet = true;
        assert_eq!(args.get_log_level(), "error");
    }

    #[test]
    fn test_quiet_conflicts_with_verbose() {
        let result = Args::try_parse_from(["csvcmd", "-q", "--verbose", "count", "x.csv"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_missing_infile_is_error() {
        assert!(Args::try_parse_from(["csvcmd", "verify"]).is_err());
    }
}
