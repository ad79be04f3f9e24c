//! STEP Header Metadata Extractor
//!
//! A Rust library and CLI for extracting the fixed metadata field catalog
//! from the header section of STEP (ISO 10303-21) CAD exchange files.
//!
//! This library provides tools for:
//! - Scanning semicolon-terminated header records that wrap across lines
//! - Decoding record payloads with a restricted literal parser (no code
//!   evaluation of externally supplied file content)
//! - Mapping `LENGTH_UNIT`/`SI_UNIT` declarations to unit abbreviations
//! - Producing an index-keyed mapping of the twelve catalog fields

pub mod constants;
pub mod error;
pub mod header;
pub mod literal;
pub mod models;
pub mod scanner;

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use error::{Result, StepError};
pub use header::parse_step_header;
pub use models::{HeaderField, StepHeader};
