//! Command implementations for the STEP header extractor CLI
//!
//! Contains the command execution logic, logging setup, and result
//! presentation for the CLI interface.

use colored::Colorize;
use tracing::info;

use crate::cli::args::{Args, Commands, ExtractArgs, OutputFormat};
use crate::error::Result;
use crate::header::parse_step_header;
use crate::models::StepHeader;

/// Main command runner
///
/// Dispatches to the appropriate subcommand handler based on CLI args.
pub fn run(args: Args) -> Result<()> {
    match args.get_command() {
        Commands::Extract(extract_args) => run_extract(extract_args),
    }
}

/// Execute the extract command: parse the file and print the field table
fn run_extract(args: ExtractArgs) -> Result<()> {
    setup_logging(&args);
    args.validate()?;

    info!("Extracting header fields from {}", args.file.display());
    let header = parse_step_header(&args.file, args.debug)?;

    match args.output_format {
        OutputFormat::Human => print_human(&header),
        OutputFormat::Json => print_json(&header)?,
    }

    Ok(())
}

fn print_human(header: &StepHeader) {
    println!(
        "{:<5} {:<22} {}",
        "Index".bold(),
        "Field".bold(),
        "Value".bold()
    );
    for (index, field) in header.iter() {
        println!("{index:<5} {:<22} {}", field.name, field.value);
    }
}

fn print_json(header: &StepHeader) -> Result<()> {
    let json = serde_json::to_string_pretty(header)?;
    println!("{json}");
    Ok(())
}

/// Set up structured logging based on CLI arguments
fn setup_logging(args: &ExtractArgs) {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let log_level = args.get_log_level();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("stepmeta={log_level}")));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_level(true)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .init();
}
