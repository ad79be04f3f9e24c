//! Line-oriented record scanning over STEP file text.
//!
//! STEP header records are semicolon-terminated but commonly wrap across
//! multiple physical lines, so scanning concatenates stripped lines until
//! the terminator appears. Marker matching is by substring, not prefix,
//! to tolerate leading whitespace or tokens before the keyword.

use std::borrow::Cow;
use std::io::{self, BufRead};
use std::sync::LazyLock;

use regex::Regex;

/// Non-greedy so adjacent comments on one concatenated line are removed
/// independently instead of everything between the first `/*` and the
/// last `*/` being swallowed as one span.
static COMMENT_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"/\*.*?\*/").expect("comment pattern is valid"));

/// Scan forward for the next record containing `marker`.
///
/// Each line is stripped of surrounding whitespace. From the first line
/// containing the marker substring, successive stripped lines are
/// concatenated with no separator until one ends with `terminator`; the
/// concatenation is returned. Reaching end-of-input before a match yields
/// `Ok(None)` rather than blocking on empty reads. End-of-input after a
/// match but before the terminator returns the partial record; callers
/// decide whether that is acceptable for the record in question.
pub fn scan_record<R: BufRead>(
    reader: &mut R,
    marker: &str,
    terminator: &str,
) -> io::Result<Option<String>> {
    let mut line = String::new();
    loop {
        line.clear();
        if reader.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let stripped = line.trim();
        if !stripped.contains(marker) {
            continue;
        }

        let mut record = stripped.to_string();
        while !record.ends_with(terminator) {
            line.clear();
            if reader.read_line(&mut line)? == 0 {
                break;
            }
            record.push_str(line.trim());
        }
        return Ok(Some(record));
    }
}

/// Remove embedded STEP comments (`/* ... */`) from a record's text
pub fn strip_comments(text: &str) -> Cow<'_, str> {
    COMMENT_PATTERN.replace_all(text, "")
}
