use clap::Parser;
use std::process;
use stepmeta::cli::{args::Args, commands};

fn main() {
    // Parse command line arguments
    let args = Args::parse();

    // If no subcommand was provided, show help and available commands
    if args.command.is_none() {
        show_help_and_commands();
        process::exit(0);
    }

    match commands::run(args) {
        Ok(()) => process::exit(0),
        Err(error) => {
            eprintln!("Error: {error:#}");
            process::exit(1);
        }
    }
}

/// Show help information and available commands when no subcommand is provided
fn show_help_and_commands() {
    println!("stepmeta - STEP Header Metadata Extractor");
    println!("=========================================");
    println!();
    println!("Extract header metadata (part name, schema, unit of measure and the");
    println!("rest of the twelve-field catalog) from STEP (ISO 10303-21) files.");
    println!();
    println!("USAGE:");
    println!("    stepmeta <COMMAND> [OPTIONS]");
    println!();
    println!("COMMANDS:");
    println!("    extract     Extract header fields from a STEP file");
    println!("    help        Show this help message or help for specific commands");
    println!();
    println!("OPTIONS:");
    println!("    -h, --help       Show help information");
    println!("    -V, --version    Show version information");
    println!();
    println!("EXAMPLES:");
    println!("    # Print the field table for a part:");
    println!("    stepmeta extract part.stp");
    println!();
    println!("    # JSON output with the marker trace enabled:");
    println!("    stepmeta extract part.stp --format json --debug");
    println!();
    println!("For detailed help on any command, use:");
    println!("    stepmeta <COMMAND> --help");
}
