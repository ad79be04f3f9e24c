//! Command-line argument definitions for the STEP header extractor
//!
//! Defines the CLI interface using the clap derive API.

use crate::error::{Result, StepError};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// CLI arguments for the STEP header extractor
///
/// Extracts header metadata (part name, schema, unit of measure and the
/// rest of the twelve-field catalog) from STEP (ISO 10303-21) files.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "stepmeta",
    version,
    about = "Extract header metadata from STEP (ISO 10303-21) CAD exchange files"
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Extract header fields from a STEP file
    Extract(ExtractArgs),
}

/// Arguments for the extract command
#[derive(Debug, Clone, Parser)]
pub struct ExtractArgs {
    /// Path to the STEP file to read
    ///
    /// Any ISO 10303-21 text file; no particular extension is required.
    #[arg(value_name = "FILE", help = "Path to the STEP file")]
    pub file: PathBuf,

    /// Emit a trace of each recognized marker and the final field table
    ///
    /// Observational only; parsing outcomes are unaffected.
    #[arg(long = "debug", help = "Trace recognized markers while parsing")]
    pub debug: bool,

    /// Output format for the extracted fields
    #[arg(
        long = "format",
        value_enum,
        default_value = "human",
        help = "Output format for extracted fields"
    )]
    pub output_format: OutputFormat,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Suppress output except errors
    #[arg(
        short = 'q',
        long = "quiet",
        help = "Suppress logging except errors",
        conflicts_with = "verbose"
    )]
    pub quiet: bool,
}

/// Output format options for extracted fields
#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable index/name/value table
    Human,
    /// JSON format for scripting
    Json,
}

impl Args {
    /// Get the command if one was specified
    pub fn get_command(&self) -> Commands {
        self.command
            .clone()
            .expect("Command should be present when get_command() is called")
    }
}

impl ExtractArgs {
    /// Validate the extract command arguments for consistency
    pub fn validate(&self) -> Result<()> {
        if !self.file.exists() {
            return Err(StepError::io(
                &self.file,
                std::io::Error::new(std::io::ErrorKind::NotFound, "file does not exist"),
            ));
        }

        if self.file.is_dir() {
            return Err(StepError::io(
                &self.file,
                std::io::Error::new(std::io::ErrorKind::InvalidInput, "path is a directory"),
            ));
        }

        Ok(())
    }

    /// Determine the appropriate log level based on verbosity flags.
    /// The --debug flag forces at least debug so its trace is visible.
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else if self.debug {
            "debug"
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

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn extract_args(file: PathBuf) -> ExtractArgs {
        ExtractArgs {
            file,
            debug: false,
            output_format: OutputFormat::Human,
            verbose: 0,
            quiet: false,
        }
    }

    #[test]
    fn test_validate_existing_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "ISO-10303-21;").unwrap();

        let args = extract_args(file.path().to_path_buf());
        assert!(args.validate().is_ok());
    }

    #[test]
    fn test_validate_missing_file() {
        let args = extract_args(PathBuf::from("/nonexistent/part.stp"));
        assert!(args.validate().is_err());
    }

    #[test]
    fn test_log_level() {
        let mut args = extract_args(PathBuf::from("part.stp"));
        assert_eq!(args.get_log_level(), "warn");

        args.verbose = 1;
        assert_eq!(args.get_log_level(), "info");

        args.verbose = 3;
        assert_eq!(args.get_log_level(), "trace");

        args.verbose = 0;
        args.debug = true;
        assert_eq!(args.get_log_level(), "debug");

        args.quiet = true;
        assert_eq!(args.get_log_level(), "error");
    }
}
