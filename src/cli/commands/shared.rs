//! Shared components for CLI commands
//!
//! Logging setup, layered configuration loading and sheet opening used by
//! every command.

use crate::cli::args::Args;
use crate::config::Config;
use crate::error::Result;
use crate::reader::SheetReader;
use std::path::Path;
use tracing::{debug, info};

/// Set up structured logging on stderr
///
/// `RUST_LOG` takes precedence over the verbosity flags.
pub fn setup_logging(args: &Args) {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let log_level = args.get_log_level();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("csvcmd={}", log_level)));

    let initialized = tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_level(true)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .try_init();

    if initialized.is_ok() {
        debug!("Logging initialized at level: {}", log_level);
    }
}

/// Load configuration using layered approach (file -> env -> args)
pub fn load_configuration(args: &Args) -> Result<Config> {
    let default_config_path = if args.config_file.is_none() {
        Config::default_config_path()
    } else {
        None
    };

    let config_file = match &args.config_file {
        Some(path) => Some(path.as_path()),
        None => default_config_path
            .as_deref()
            .filter(|path| path.exists()),
    };

    if let Some(config_path) = config_file {
        info!("Using config file: {}", config_path.display());
    } else {
        debug!("No config file found, using defaults and environment variables");
    }

    let mut config = Config::load_layered(config_file)?;
    apply_cli_overrides(&mut config, args);

    config.validate()?;
    Ok(config)
}

/// Apply CLI argument overrides to configuration
pub fn apply_cli_overrides(config: &mut Config, args: &Args) {
    if let Some(encoding) = &args.encoding {
        config.encoding = encoding.clone();
    }
}

/// Open the input sheet of a command
pub fn open_sheet(path: &Path, config: &Config) -> Result<SheetReader> {
    let reader = SheetReader::open(path, config)?;
    let (fixed, access) = reader.columns().stats();
    debug!(
        "{}: {} fixed columns, {} access columns",
        reader.source(),
        fixed,
        access
    );
    Ok(reader)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_cli_encoding_overrides_config_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "encoding = \"utf-8\"").unwrap();
        writeln!(file, "access_columns = 3").unwrap();
        let config_path = file.path().to_string_lossy().to_string();

        let args = Args::parse_from([
            "csvcmd",
            "--config",
            config_path.as_str(),
            "--encoding",
            "euc-jp",
            "verify",
            "x.csv",
        ]);
        let config = load_configuration(&args).unwrap();

        assert_eq!(config.encoding, "euc-jp");
        assert_eq!(config.access_columns, 3);
    }

    #[test]
    fn test_invalid_cli_encoding_rejected() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "delimiter = \",\"").unwrap();
        let config_path = file.path().to_string_lossy().to_string();

        let args = Args::parse_from([
            "csvcmd",
            "--config",
            config_path.as_str(),
            "--encoding",
            "bogus",
            "verify",
            "x.csv",
        ]);

        assert!(load_configuration(&args).is_err());
    }

    #[test]
    fn test_cli_encoding_replaces_invalid_file_encoding() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "encoding = \"no-such-encoding\"").unwrap();
        let config_path = file.path().to_string_lossy().to_string();

        let args = Args::parse_from([
            "csvcmd",
            "--config",
            config_path.as_str(),
            "--encoding",
            "utf-8",
            "verify",
            "x.csv",
        ]);
        let config = load_configuration(&args).unwrap();

        assert_eq!(config.encoding, "utf-8");
    }

    #[test]
    fn test_invalid_file_encoding_rejected_without_override() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "encoding = \"no-such-encoding\"").unwrap();
        let config_path = file.path().to_string_lossy().to_string();

        let args = Args::parse_from([
            "csvcmd",
            "--config",
            config_path.as_str(),
            "verify",
            "x.csv",
        ]);

        assert!(matches!(
            load_configuration(&args),
            Err(crate::error::CsvCmdError::Encoding { .. })
        ));
    }

    #[test]
    fn test_missing_explicit_config_rejected() {
        let args = Args::parse_from([
            "csvcmd",
            "--config",
            "/nonexistent/csvcmd.toml",
            "verify",
            "x.csv",
        ]);

        assert!(load_configuration(&args).is_err());
    }
}
