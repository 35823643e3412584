//! Generate command implementation
//!
//! Access map generation has no defined output format yet; the command only
//! prints its placeholder label and touches neither file.

use crate::cli::args::GenerateArgs;
use crate::constants::GENERATE_PLACEHOLDER;
use crate::error::Result;
use std::io::Write;
use tracing::debug;

pub fn run_generate<W: Write>(args: &GenerateArgs, out: &mut W) -> Result<()> {
    debug!(
        "generate: {} -> {}",
        args.infile.display(),
        args.outfile.display()
    );
    writeln!(out, "{}", GENERATE_PLACEHOLDER)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_prints_placeholder_only() {
        let args = GenerateArgs {
            infile: PathBuf::from("/nonexistent/in.csv"),
            outfile: PathBuf::from("/nonexistent/out.csv"),
        };
        let mut out = Vec::new();

        run_generate(&args, &mut out).unwrap();

        assert_eq!(String::from_utf8(out).unwrap(), "generate_access_map\n");
        assert!(!args.outfile.exists());
    }
}
