//! Result types for extracted STEP header metadata.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::constants::fields;

/// One extracted header field: a catalog name paired with its raw value
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HeaderField {
    pub name: &'static str,
    pub value: String,
}

/// The result mapping from catalog index to extracted field.
///
/// Built once per parse and never mutated afterwards. Indices follow
/// [`crate::constants::FIELD_NAMES`]; entries whose record was absent from
/// the file are simply missing, so consumers must tolerate absent indices.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct StepHeader(BTreeMap<usize, HeaderField>);

impl StepHeader {
    pub(crate) fn from_values<I>(values: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        // Positional zip: extra values beyond the catalog are dropped,
        // missing values leave trailing catalog entries absent.
        let map = crate::constants::FIELD_NAMES
            .iter()
            .copied()
            .zip(values)
            .enumerate()
            .map(|(index, (name, value))| (index, HeaderField { name, value }))
            .collect();
        Self(map)
    }

    /// Field at a catalog index, if its record was present
    pub fn get(&self, index: usize) -> Option<&HeaderField> {
        self.0.get(&index)
    }

    /// Part name from the `FILE_NAME` record (catalog index 3)
    pub fn part_name(&self) -> Option<&str> {
        self.value(fields::NAME)
    }

    /// Unit-of-measure abbreviation from the `LENGTH_UNIT` declaration
    /// (catalog index 11), e.g. `"mm"`
    pub fn unit(&self) -> Option<&str> {
        self.value(fields::UNIT)
    }

    /// Raw value at a catalog index
    pub fn value(&self, index: usize) -> Option<&str> {
        self.0.get(&index).map(|field| field.value.as_str())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate fields in catalog-index order
    pub fn iter(&self) -> impl Iterator<Item = (usize, &HeaderField)> {
        self.0.iter().map(|(index, field)| (*index, field))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zip_truncates_to_catalog() {
        let values = (0..20).map(|i| format!("v{i}"));
        let header = StepHeader::from_values(values);
        assert_eq!(header.len(), 12);
        assert_eq!(header.value(11), Some("v11"));
        assert_eq!(header.get(12), None);
    }

    #[test]
    fn test_zip_leaves_trailing_entries_absent() {
        let header = StepHeader::from_values(vec!["ISO-10303-21".to_string()]);
        assert_eq!(header.len(), 1);
        assert_eq!(header.value(0), Some("ISO-10303-21"));
        assert_eq!(header.part_name(), None);
        assert_eq!(header.unit(), None);
    }

    #[test]
    fn test_accessors() {
        let values: Vec<String> = (0..12).map(|i| format!("v{i}")).collect();
        let header = StepHeader::from_values(values);
        assert_eq!(header.part_name(), Some("v3"));
        assert_eq!(header.unit(), Some("v11"));
        assert_eq!(header.get(3).unwrap().name, "Name");
    }
}
