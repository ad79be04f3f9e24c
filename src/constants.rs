//! Application constants for the STEP header extractor
//!
//! Contains the field catalog, recognized STEP markers, and the SI unit
//! abbreviation tables used throughout the application.

// =============================================================================
// Field Catalog
// =============================================================================

/// The fixed ordered catalog of header fields this extractor recognizes.
///
/// Extracted values are zipped positionally against this list, so the order
/// here must match the scan order in `header::parse_step_header` exactly.
pub const FIELD_NAMES: &[&str] = &[
    "ISO Standard",
    "Description",
    "Implementation Level",
    "Name",
    "Time_Stamp",
    "Author",
    "Organization",
    "Preprocessor Version",
    "Originating System",
    "Authorization",
    "Schema",
    "Unit",
];

/// Catalog indices consumed by downstream metadata assembly
pub mod fields {
    pub const ISO_STANDARD: usize = 0;
    pub const DESCRIPTION: usize = 1;
    pub const IMPLEMENTATION_LEVEL: usize = 2;
    pub const NAME: usize = 3;
    pub const TIME_STAMP: usize = 4;
    pub const AUTHOR: usize = 5;
    pub const ORGANIZATION: usize = 6;
    pub const PREPROCESSOR_VERSION: usize = 7;
    pub const ORIGINATING_SYSTEM: usize = 8;
    pub const AUTHORIZATION: usize = 9;
    pub const SCHEMA: usize = 10;
    pub const UNIT: usize = 11;
}

// =============================================================================
// Recognized STEP Tokens
// =============================================================================

/// Marker substrings matched while scanning, in file order
pub mod markers {
    pub const ISO: &str = "ISO-";
    pub const HEADER: &str = "HEADER";
    pub const FILE_DESCRIPTION: &str = "FILE_DESCRIPTION";
    pub const FILE_NAME: &str = "FILE_NAME";
    pub const FILE_SCHEMA: &str = "FILE_SCHEMA";
    pub const ENDSEC: &str = "ENDSEC";
    pub const LENGTH_UNIT: &str = "LENGTH_UNIT";
    pub const SI_UNIT: &str = "SI_UNIT";
}

/// Record terminator token
pub const RECORD_TERMINATOR: &str = ";";

// =============================================================================
// SI Unit Abbreviations
// =============================================================================

/// Abbreviate a metric prefix name from an `SI_UNIT` declaration.
///
/// Only prefixes exercised by the known corpus are mapped; anything else
/// must surface as an unsupported-unit error at the call site.
pub fn prefix_abbreviation(prefix: &str) -> Option<&'static str> {
    match prefix {
        "MILLI" => Some("m"),
        _ => None,
    }
}

/// Abbreviate a base unit name from an `SI_UNIT` declaration
pub fn unit_abbreviation(unit: &str) -> Option<&'static str> {
    match unit {
        "METRE" => Some("m"),
        _ => None,
    }
}
