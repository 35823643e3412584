use clap::Parser;
use colored::*;
use csvcmd::cli::args::{Args, normalize_args};
use csvcmd::cli::commands;
use std::process;

fn main() {
    // Parse command line arguments
    let args = Args::parse_from(normalize_args(std::env::args_os()));

    // If no subcommand was provided, show help and available commands
    if args.command.is_none() {
        show_help_and_commands();
        process::exit(0);
    }

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match commands::run(args, &mut out) {
        Ok(_outcome) => {
            // Validation failures are reported on stdout and are not an error
            process::exit(0);
        }
        Err(error) => {
            eprintln!("Error: {:#}", error);
            process::exit(1);
        }
    }
}

/// Show help information and available commands when no subcommand is provided
fn show_help_and_commands() {
    println!("{}", "csvcmd - Calibration Parameter Sheet Tool".bright_green().bold());
    println!("=========================================");
    println!();
    println!("USAGE:");
    println!("    csvcmd <COMMAND> [OPTIONS] <INCSVFILE>");
    println!();
    println!("COMMANDS:");
    println!("    count       Count data records of each type");
    println!("    list        List data with various options");
    println!("    verify      Verify data records");
    println!("    generate    Generate access map");
    println!("    help        Show this help message or help for specific commands");
    println!();
    println!("OPTIONS:");
    println!("    -h, --help       Show help information");
    println!("    -v, --version    Show version information");
    println!();
    println!("EXAMPLES:");
    println!("    csvcmd count -p sheet.csv");
    println!("    csvcmd list -ma sheet.csv");
    println!("    csvcmd verify --encoding utf-8 sheet.csv");
    println!();
    println!("For detailed help on any command, use:");
    println!("    csvcmd <COMMAND> --help");
}
