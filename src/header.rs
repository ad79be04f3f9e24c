//! STEP header parsing and metadata extraction.
//!
//! Parses the header section of an ISO 10303-21 file (plus the single
//! `LENGTH_UNIT` declaration from the data section) into the fixed
//! twelve-field catalog. Records are matched in file order and the
//! extracted values are zipped positionally against the catalog, so the
//! scan order here must never be rearranged independently of
//! [`crate::constants::FIELD_NAMES`].

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::debug;

use crate::constants::{RECORD_TERMINATOR, markers, prefix_abbreviation, unit_abbreviation};
use crate::error::{Result, StepError};
use crate::literal::parse_literal;
use crate::models::StepHeader;
use crate::scanner::{scan_record, strip_comments};

/// Extract header metadata from a STEP file.
///
/// `debug` enables a trace of each recognized marker and the final field
/// table; it never alters the parse outcome.
pub fn parse_step_header(path: &Path, debug: bool) -> Result<StepHeader> {
    let file = File::open(path).map_err(|e| StepError::io(path, e))?;
    let mut reader = BufReader::new(file);
    let mut values: Vec<String> = Vec::new();

    // ISO standard line, recorded verbatim without the terminator.
    // Absence is tolerated; every later field then shifts, which is the
    // documented fragility of the positional zip.
    if let Some(record) = scan(&mut reader, markers::ISO, path)? {
        let text = record.strip_suffix(RECORD_TERMINATOR).unwrap_or(&record);
        values.push(text.to_string());
    }

    // The three file records are only scanned inside a recognized HEADER
    // block; there their absence is a hard failure since they drive
    // mandatory catalog fields.
    if scan(&mut reader, markers::HEADER, path)?.is_some() {
        if debug {
            debug!("header start mark found");
        }

        let description = decode_record(&mut reader, markers::FILE_DESCRIPTION, path)?;
        for item in description.flatten() {
            values.push(item.render());
        }

        let file_name = decode_record(&mut reader, markers::FILE_NAME, path)?;
        for item in file_name.flatten() {
            values.push(item.render());
        }

        // Schema is a single catalog value, not flattened
        let schema = decode_record(&mut reader, markers::FILE_SCHEMA, path)?;
        values.push(schema.render());

        // Advances the scan past the header section; no value recorded
        if scan(&mut reader, markers::ENDSEC, path)?.is_some() && debug {
            debug!("header end mark found");
        }
    }

    // Unit declaration from the data section. Scanning is bounded: EOF
    // without a usable LENGTH_UNIT record leaves the Unit entry absent.
    while let Some(record) = scan(&mut reader, markers::LENGTH_UNIT, path)? {
        let parts: Vec<&str> = record.split(markers::SI_UNIT).collect();
        if parts.len() != 2 {
            continue;
        }
        values.push(decode_si_unit(parts[1], &record)?);
        if debug {
            debug!("length unit found: {}", record);
        }
        break;
    }

    let header = StepHeader::from_values(values);

    if debug {
        for (index, field) in header.iter() {
            debug!("{:02}\t({}, {})", index, field.name, field.value);
        }
    }

    Ok(header)
}

fn scan<R: BufRead>(reader: &mut R, marker: &str, path: &Path) -> Result<Option<String>> {
    scan_record(reader, marker, RECORD_TERMINATOR).map_err(|e| StepError::io(path, e))
}

/// Scan for a mandatory record and decode its parenthesized payload
fn decode_record<R: BufRead>(
    reader: &mut R,
    marker: &'static str,
    path: &Path,
) -> Result<crate::literal::Literal> {
    let record = scan(reader, marker, path)?.ok_or(StepError::MissingRecord {
        record: marker,
        path: path.to_path_buf(),
    })?;

    let record = strip_comments(&record);
    let start = record
        .find(marker)
        .map(|pos| pos + marker.len())
        .unwrap_or(0);
    let payload = &record[start..];
    let payload = payload.strip_suffix(RECORD_TERMINATOR).unwrap_or(payload);

    parse_literal(payload.trim())
        .map_err(|e| StepError::malformed(marker, payload.trim(), e.to_string()))
}

/// Decode the `SI_UNIT(.PREFIX.,.UNIT.)` tail of a LENGTH_UNIT record
/// into a two-character abbreviation such as `mm`
fn decode_si_unit(tail: &str, record: &str) -> Result<String> {
    let tokens: Vec<&str> = tail.split('.').collect();
    if tokens.len() < 4 {
        return Err(StepError::malformed(
            markers::LENGTH_UNIT,
            record,
            "expected .PREFIX. and .UNIT. tokens after SI_UNIT",
        ));
    }
    let (prefix, unit) = (tokens[1], tokens[3]);

    match (prefix_abbreviation(prefix), unit_abbreviation(unit)) {
        (Some(p), Some(u)) => Ok(format!("{p}{u}")),
        _ => Err(StepError::UnsupportedUnit {
            prefix: prefix.to_string(),
            unit: unit.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::fields;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn step_file(lines: &[&str]) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        for line in lines {
            writeln!(file, "{line}").unwrap();
        }
        file
    }

    const SAMPLE: &[&str] = &[
        "ISO-10303-21;",
        "HEADER;",
        "FILE_DESCRIPTION(('A simple part'),'');",
        "FILE_NAME('23059898_C_x_t','2020-01-01T00:00:00',('Author'),('Org'),'','','');",
        "FILE_SCHEMA(('AUTOMOTIVE_DESIGN'));",
        "ENDSEC;",
        "DATA;",
        "#1=LENGTH_UNIT()SI_UNIT(.MILLI.,.METRE.);",
    ];

    #[test]
    fn test_well_formed_file_fills_all_twelve_fields() {
        let file = step_file(SAMPLE);
        let header = parse_step_header(file.path(), false).unwrap();

        assert_eq!(header.len(), 12);
        assert_eq!(header.value(fields::ISO_STANDARD), Some("ISO-10303-21"));
        assert_eq!(header.value(fields::DESCRIPTION), Some("A simple part"));
        assert_eq!(header.value(fields::IMPLEMENTATION_LEVEL), Some(""));
        assert_eq!(header.value(fields::NAME), Some("23059898_C_x_t"));
        assert_eq!(header.value(fields::TIME_STAMP), Some("2020-01-01T00:00:00"));
        assert_eq!(header.value(fields::AUTHOR), Some("Author"));
        assert_eq!(header.value(fields::ORGANIZATION), Some("Org"));
        assert_eq!(header.value(fields::SCHEMA), Some("AUTOMOTIVE_DESIGN"));
        assert_eq!(header.value(fields::UNIT), Some("mm"));

        let name = header.get(fields::NAME).unwrap();
        assert_eq!((name.name, name.value.as_str()), ("Name", "23059898_C_x_t"));
        let unit = header.get(fields::UNIT).unwrap();
        assert_eq!((unit.name, unit.value.as_str()), ("Unit", "mm"));
    }

    #[test]
    fn test_multi_line_record_equals_single_line() {
        let wrapped = step_file(&[
            "ISO-10303-21;",
            "HEADER;",
            "FILE_DESCRIPTION(",
            "  ('A simple part'),",
            "  '');",
            "FILE_NAME('part','ts',('a'),('o'),'','','');",
            "FILE_SCHEMA(('AP203'));",
            "ENDSEC;",
        ]);
        let flat = step_file(&[
            "ISO-10303-21;",
            "HEADER;",
            "FILE_DESCRIPTION(('A simple part'),'');",
            "FILE_NAME('part','ts',('a'),('o'),'','','');",
            "FILE_SCHEMA(('AP203'));",
            "ENDSEC;",
        ]);

        let from_wrapped = parse_step_header(wrapped.path(), false).unwrap();
        let from_flat = parse_step_header(flat.path(), false).unwrap();
        assert_eq!(from_wrapped, from_flat);
    }

    #[test]
    fn test_comments_stripped_from_payload() {
        let file = step_file(&[
            "ISO-10303-21;",
            "HEADER;",
            "FILE_DESCRIPTION(('Desc /*note*/ here'),'');",
            "FILE_NAME('part','ts',('a'),('o'),'','','');",
            "FILE_SCHEMA(('AP203'));",
            "ENDSEC;",
        ]);
        let header = parse_step_header(file.path(), false).unwrap();
        assert_eq!(header.value(fields::DESCRIPTION), Some("Desc  here"));
    }

    #[test]
    fn test_missing_file_schema_is_hard_failure() {
        let file = step_file(&[
            "ISO-10303-21;",
            "HEADER;",
            "FILE_DESCRIPTION(('d'),'');",
            "FILE_NAME('part','ts',('a'),('o'),'','','');",
            "ENDSEC;",
        ]);
        let err = parse_step_header(file.path(), false).unwrap_err();
        match err {
            StepError::MissingRecord { record, .. } => assert_eq!(record, "FILE_SCHEMA"),
            other => panic!("expected MissingRecord, got {other:?}"),
        }
    }

    #[test]
    fn test_malformed_payload_names_the_record() {
        let file = step_file(&[
            "ISO-10303-21;",
            "HEADER;",
            "FILE_DESCRIPTION(('d'),'');",
            "FILE_NAME(open('x'),'ts');",
        ]);
        let err = parse_step_header(file.path(), false).unwrap_err();
        match err {
            StepError::MalformedRecord { record, .. } => assert_eq!(record, "FILE_NAME"),
            other => panic!("expected MalformedRecord, got {other:?}"),
        }
    }

    #[test]
    fn test_unsupported_unit_prefix_fails() {
        let mut lines = SAMPLE[..7].to_vec();
        lines.push("#1=LENGTH_UNIT()SI_UNIT(.CENTI.,.METRE.);");
        let file = step_file(&lines);

        let err = parse_step_header(file.path(), false).unwrap_err();
        match err {
            StepError::UnsupportedUnit { prefix, unit } => {
                assert_eq!(prefix, "CENTI");
                assert_eq!(unit, "METRE");
            }
            other => panic!("expected UnsupportedUnit, got {other:?}"),
        }
    }

    #[test]
    fn test_missing_unit_leaves_entry_absent() {
        let file = step_file(&SAMPLE[..7]);
        let header = parse_step_header(file.path(), false).unwrap();
        assert_eq!(header.len(), 11);
        assert_eq!(header.unit(), None);
    }

    #[test]
    fn test_length_unit_without_si_unit_is_skipped() {
        let mut lines = SAMPLE[..7].to_vec();
        lines.push("#1=LENGTH_UNIT();");
        lines.push("#2=LENGTH_UNIT()SI_UNIT(.MILLI.,.METRE.);");
        let file = step_file(&lines);

        let header = parse_step_header(file.path(), false).unwrap();
        assert_eq!(header.unit(), Some("mm"));
    }

    #[test]
    fn test_no_header_block_yields_iso_only() {
        // Without a HEADER block the file records are never scanned and
        // the mapping holds just the ISO line. Regression guard for the
        // positional-zip shifting behavior.
        let file = step_file(&["ISO-10303-21;", "DATA;"]);
        let header = parse_step_header(file.path(), false).unwrap();
        assert_eq!(header.len(), 1);
        assert_eq!(header.value(fields::ISO_STANDARD), Some("ISO-10303-21"));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = parse_step_header(Path::new("/nonexistent/part.stp"), false).unwrap_err();
        assert!(matches!(err, StepError::Io { .. }));
    }

    #[test]
    fn test_debug_flag_does_not_alter_result() {
        let file = step_file(SAMPLE);
        let quiet = parse_step_header(file.path(), false).unwrap();
        let traced = parse_step_header(file.path(), true).unwrap();
        assert_eq!(quiet, traced);
    }
}
