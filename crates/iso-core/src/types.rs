//! Domain types for the country table.
//!
//! # Examples
//!
//! ```
//! use iso_core::{CountryRecord, CountryTable};
//!
//! let table = CountryTable::from_records(vec![
//!     CountryRecord::new("US", "United States"),
//!     CountryRecord::new("AD", "Andorra"),
//! ]);
//!
//! assert_eq!(table.len(), 2);
//! assert_eq!(table.records()[0].code(), "AD");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

/// A single `(code, name)` pair read from the dataset.
///
/// Deserializes from a dataset object carrying `alpha-2` and `name`; every
/// other key of the object is ignored. Serializes as `{"code", "name"}`,
/// which is the shape the templates consume.
///
/// The code is taken verbatim: no case folding and no length check.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CountryRecord {
    #[serde(rename(deserialize = "alpha-2"))]
    code: String,
    name: String,
}

impl CountryRecord {
    /// Creates a record from a code and a display name.
    #[inline]
    #[must_use]
    pub fn new(code: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
        }
    }

    /// Returns the alpha-2 code.
    #[inline]
    #[must_use]
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Returns the display name.
    #[inline]
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the record as a borrowed `(code, name)` pair.
    #[inline]
    #[must_use]
    pub fn as_pair(&self) -> (&str, &str) {
        (&self.code, &self.name)
    }
}

impl fmt::Display for CountryRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.code, self.name)
    }
}

impl<C, N> From<(C, N)> for CountryRecord
where
    C: Into<String>,
    N: Into<String>,
{
    fn from((code, name): (C, N)) -> Self {
        Self::new(code, name)
    }
}

/// Records sorted by code.
///
/// Ordering is byte-wise ascending on the code. The sort is stable, so
/// records sharing a code keep their dataset order. Nothing is filtered or
/// deduplicated: the table always holds as many records as it was built from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CountryTable {
    records: Vec<CountryRecord>,
}

impl CountryTable {
    /// Builds a table from records in dataset order.
    ///
    /// # Examples
    ///
    /// ```
    /// use iso_core::{CountryRecord, CountryTable};
    ///
    /// let table = CountryTable::from_records(vec![
    ///     CountryRecord::new("ZW", "Zimbabwe"),
    ///     CountryRecord::new("AX", "Åland Islands"),
    ///     CountryRecord::new("AD", "Andorra"),
    /// ]);
    ///
    /// let codes: Vec<&str> = table.iter().map(|r| r.code()).collect();
    /// assert_eq!(codes, ["AD", "AX", "ZW"]);
    /// ```
    #[must_use]
    pub fn from_records(mut records: Vec<CountryRecord>) -> Self {
        records.sort_by(|a, b| a.code.as_bytes().cmp(b.code.as_bytes()));
        Self { records }
    }

    /// Returns the number of records.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns `true` if the table holds no records.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Returns the sorted records.
    #[inline]
    #[must_use]
    pub fn records(&self) -> &[CountryRecord] {
        &self.records
    }

    /// Iterates over the sorted records.
    pub fn iter(&self) -> std::slice::Iter<'_, CountryRecord> {
        self.records.iter()
    }

    /// Iterates over the sorted records as `(code, name)` pairs.
    pub fn pairs(&self) -> impl Iterator<Item = (&str, &str)> {
        self.records.iter().map(CountryRecord::as_pair)
    }
}

impl From<Vec<CountryRecord>> for CountryTable {
    fn from(records: Vec<CountryRecord>) -> Self {
        Self::from_records(records)
    }
}

impl FromIterator<CountryRecord> for CountryTable {
    fn from_iter<I: IntoIterator<Item = CountryRecord>>(iter: I) -> Self {
        Self::from_records(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a CountryTable {
    type Item = &'a CountryRecord;
    type IntoIter = std::slice::Iter<'a, CountryRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_record_deserializes_from_dataset_keys() {
        let record: CountryRecord = serde_json::from_value(json!({
            "name": "Andorra",
            "alpha-2": "AD",
            "alpha-3": "AND",
            "country-code": "020",
            "region": "Europe"
        }))
        .unwrap();

        assert_eq!(record.code(), "AD");
        assert_eq!(record.name(), "Andorra");
    }

    #[test]
    fn test_record_missing_code_fails() {
        let result = serde_json::from_value::<CountryRecord>(json!({"name": "Andorra"}));
        let message = result.unwrap_err().to_string();
        assert!(message.contains("alpha-2"), "unexpected message: {message}");
    }

    #[test]
    fn test_record_serializes_as_code_and_name() {
        let value = serde_json::to_value(CountryRecord::new("FR", "France")).unwrap();
        assert_eq!(value, json!({"code": "FR", "name": "France"}));
    }

    #[test]
    fn test_table_sorts_by_code() {
        let table = CountryTable::from_records(vec![
            CountryRecord::new("US", "United States"),
            CountryRecord::new("AD", "Andorra"),
            CountryRecord::new("FR", "France"),
        ]);

        let codes: Vec<&str> = table.iter().map(CountryRecord::code).collect();
        assert_eq!(codes, vec!["AD", "FR", "US"]);
    }

    #[test]
    fn test_table_sort_is_stable_for_duplicate_codes() {
        let table = CountryTable::from_records(vec![
            CountryRecord::new("XK", "Kosovo"),
            CountryRecord::new("AD", "Andorra"),
            CountryRecord::new("XK", "Kosovo (alias)"),
        ]);

        let pairs: Vec<(&str, &str)> = table.pairs().collect();
        assert_eq!(
            pairs,
            vec![
                ("AD", "Andorra"),
                ("XK", "Kosovo"),
                ("XK", "Kosovo (alias)"),
            ]
        );
    }

    #[test]
    fn test_table_sort_is_bytewise() {
        // Uppercase sorts before lowercase in byte order
        let table = CountryTable::from_records(vec![
            CountryRecord::new("ab", "lower"),
            CountryRecord::new("AB", "upper"),
            CountryRecord::new("Ab", "mixed"),
        ]);

        let codes: Vec<&str> = table.iter().map(CountryRecord::code).collect();
        assert_eq!(codes, vec!["AB", "Ab", "ab"]);
    }

    #[test]
    fn test_table_preserves_cardinality() {
        let records: Vec<CountryRecord> = (0..50)
            .map(|i| CountryRecord::new(format!("C{}", i % 7), format!("Country {i}")))
            .collect();
        let table: CountryTable = records.into_iter().collect();
        assert_eq!(table.len(), 50);
    }

    #[test]
    fn test_empty_table() {
        let table = CountryTable::default();
        assert!(table.is_empty());
        assert_eq!(table.len(), 0);
        assert_eq!(table.pairs().count(), 0);
    }

    #[test]
    fn test_record_from_tuple() {
        let record = CountryRecord::from(("DE", "Germany"));
        assert_eq!(record.as_pair(), ("DE", "Germany"));
        assert_eq!(record.to_string(), "DE Germany");
    }
}
