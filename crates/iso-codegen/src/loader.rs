//! Dataset loading.
//!
//! The dataset is a JSON list of objects. Each object must carry `alpha-2`
//! and `name` string values; any other key is ignored.
//!
//! Loading happens in two stages so the two failure kinds stay distinct:
//! the whole document is parsed first (any failure there is a
//! [`Error::DataLoadError`]), then every element is projected to a
//! [`CountryRecord`] (any failure there is a [`Error::SchemaError`] naming
//! the element's index).

use iso_core::{CountryRecord, Error, Result};
use serde_json::Value;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use tracing::debug;

/// Loads every record from the dataset at `path`, in file order.
///
/// The file handle is only held while the document is parsed.
///
/// # Errors
///
/// Returns [`Error::DataLoadError`] if the file cannot be opened, is not
/// valid JSON, or its top level is not a list. Returns
/// [`Error::SchemaError`] if an element lacks a required field.
pub fn load_records(path: impl AsRef<Path>) -> Result<Vec<CountryRecord>> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| Error::DataLoadError {
        path: path.to_path_buf(),
        reason: format!("cannot open file: {e}"),
        source: Some(Box::new(e)),
    })?;

    let records = read_records(BufReader::new(file), path)?;
    debug!(path = %path.display(), count = records.len(), "loaded dataset");
    Ok(records)
}

/// Reads records from any reader. `origin` is only used in error messages.
///
/// # Errors
///
/// Same as [`load_records`], minus the open failure.
///
/// # Examples
///
/// ```
/// use iso_codegen::loader::read_records;
/// use std::path::Path;
///
/// let json = r#"[{"alpha-2": "AD", "name": "Andorra", "region": "Europe"}]"#;
/// let records = read_records(json.as_bytes(), Path::new("inline.json")).unwrap();
/// assert_eq!(records[0].as_pair(), ("AD", "Andorra"));
/// ```
pub fn read_records<R: Read>(reader: R, origin: &Path) -> Result<Vec<CountryRecord>> {
    let document: Value = serde_json::from_reader(reader).map_err(|e| Error::DataLoadError {
        path: origin.to_path_buf(),
        reason: format!("invalid JSON: {e}"),
        source: Some(Box::new(e)),
    })?;

    let Value::Array(elements) = document else {
        return Err(Error::DataLoadError {
            path: origin.to_path_buf(),
            reason: "expected a list of records at the top level".to_string(),
            source: None,
        });
    };

    elements
        .into_iter()
        .enumerate()
        .map(|(index, element)| project_record(index, element))
        .collect()
}

/// Projects one dataset element down to its `(code, name)` pair.
///
/// Only objects are records. Derived struct deserialization would also
/// accept a positional list such as `["AD", "Andorra"]`.
fn project_record(index: usize, element: Value) -> Result<CountryRecord> {
    if !element.is_object() {
        return Err(Error::SchemaError {
            index,
            message: "expected an object".to_string(),
        });
    }

    serde_json::from_value(element).map_err(|e| Error::SchemaError {
        index,
        message: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn read(json: &str) -> Result<Vec<CountryRecord>> {
        read_records(json.as_bytes(), Path::new("test.json"))
    }

    #[test]
    fn test_reads_records_in_file_order() {
        let records = read(
            r#"[
                {"alpha-2": "US", "name": "United States"},
                {"alpha-2": "AD", "name": "Andorra"}
            ]"#,
        )
        .unwrap();

        assert_eq!(
            records,
            vec![
                CountryRecord::new("US", "United States"),
                CountryRecord::new("AD", "Andorra"),
            ]
        );
    }

    #[test]
    fn test_extra_keys_are_ignored() {
        let records = read(
            r#"[{
                "name": "Åland Islands",
                "alpha-2": "AX",
                "alpha-3": "ALA",
                "country-code": "248",
                "iso_3166-2": "ISO 3166-2:AX",
                "region": "Europe",
                "sub-region": "Northern Europe"
            }]"#,
        )
        .unwrap();

        assert_eq!(records, vec![CountryRecord::new("AX", "Åland Islands")]);
    }

    #[test]
    fn test_empty_list() {
        assert!(read("[]").unwrap().is_empty());
    }

    #[test]
    fn test_invalid_json_is_load_error() {
        let err = read("[{\"alpha-2\": \"AD\",").unwrap_err();
        assert!(err.is_data_load_error());
        assert!(err.to_string().contains("test.json"));
    }

    #[test]
    fn test_top_level_object_is_load_error() {
        let err = read(r#"{"alpha-2": "AD", "name": "Andorra"}"#).unwrap_err();
        assert!(err.is_data_load_error());
    }

    #[test]
    fn test_missing_name_is_schema_error() {
        let err = read(
            r#"[
                {"alpha-2": "AD", "name": "Andorra"},
                {"alpha-2": "AE"}
            ]"#,
        )
        .unwrap_err();

        match err {
            Error::SchemaError { index, message } => {
                assert_eq!(index, 1);
                assert!(message.contains("name"), "unexpected message: {message}");
            }
            other => panic!("expected schema error, got {other:?}"),
        }
    }

    #[test]
    fn test_missing_code_is_schema_error() {
        let err = read(r#"[{"alpha2": "AD", "name": "Andorra"}]"#).unwrap_err();
        assert!(err.is_schema_error());
        assert!(err.to_string().contains("alpha-2"));
    }

    #[test]
    fn test_non_string_field_is_schema_error() {
        let err = read(r#"[{"alpha-2": 20, "name": "Andorra"}]"#).unwrap_err();
        assert!(err.is_schema_error());
    }

    #[test]
    fn test_non_object_element_is_schema_error() {
        let err = read(r#"[["AD", "Andorra"], "AE"]"#).unwrap_err();
        assert!(matches!(err, Error::SchemaError { index: 0, .. }));
        assert!(err.to_string().contains("expected an object"));
    }

    #[test]
    fn test_positional_list_after_valid_record_is_schema_error() {
        let err = read(r#"[{"alpha-2": "AD", "name": "Andorra"}, ["US", "United States"]]"#)
            .unwrap_err();
        assert!(matches!(err, Error::SchemaError { index: 1, .. }));
    }

    #[test]
    fn test_scalar_and_null_elements_are_schema_errors() {
        for element in ["null", "\"AD\"", "20", "true"] {
            let err = read(&format!("[{element}]")).unwrap_err();
            assert!(
                matches!(err, Error::SchemaError { index: 0, .. }),
                "{element} should be rejected, got {err:?}"
            );
        }
    }

    #[test]
    fn test_load_records_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{"alpha-2": "FR", "name": "France"}}, {{"alpha-2": "DE", "name": "Germany"}}]"#
        )
        .unwrap();

        let records = load_records(file.path()).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].code(), "FR");
    }

    #[test]
    fn test_load_records_missing_file() {
        let err = load_records("/nonexistent/iso3166_all.json").unwrap_err();
        assert!(err.is_data_load_error());
        assert!(err.to_string().contains("/nonexistent/iso3166_all.json"));
    }
}
