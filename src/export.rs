// Author: Dustin Pilgrim
// License: MIT

use serde_json::json;

use crate::ast::{Document, Table};
use crate::parser::ParseOptions;
use crate::{TomlConfig, TomlError};

/// JSON view of a document:
///
/// ```text
/// { "globals": { "key": value, ... },
///   "sections": { "name": { "key": value, ... }, ... } }
/// ```
///
/// Strings, integers and floats map directly; key order follows the source.
pub fn to_json_value(doc: &Document) -> serde_json::Value {
    fn table_to_json(table: &Table) -> serde_json::Value {
        table
            .iter()
            .map(|(k, v)| (k.clone(), json!(v)))
            .collect::<serde_json::Map<_, _>>()
            .into()
    }

    let sections = doc
        .sections()
        .filter_map(|view| Some((view.name()?.to_string(), table_to_json(view.table()?))))
        .collect::<serde_json::Map<_, _>>();

    json!({
        "globals": table_to_json(doc.globals()),
        "sections": sections,
    })
}

/// Export a document to pretty-printed JSON.
///
/// # Examples
/// ```
/// let doc = microtoml::parse("[server]\nport = 8080").unwrap();
/// let json = microtoml::export::export_document_to_json(&doc).unwrap();
/// assert!(json.contains("\"port\": 8080"));
/// ```
pub fn export_document_to_json(doc: &Document) -> Result<String, TomlError> {
    serde_json::to_string_pretty(&to_json_value(doc)).map_err(|e| TomlError::TypeError {
        message: format!("Failed to serialize document: {}", e),
        line: 0,
        hint: None,
        code: Some(501),
    })
}

/// Export a config file directly to JSON.
///
/// Convenience function that reads, parses, and exports in one call. The
/// file is loaded the same way as [`TomlConfig::from_file`], so `~/` is
/// expanded.
///
/// # Errors
/// Returns error if the file can't be read or contains invalid syntax.
pub fn export_file(path: &str) -> Result<String, TomlError> {
    export_file_with_options(path, ParseOptions::default())
}

pub fn export_file_with_options(path: &str, options: ParseOptions) -> Result<String, TomlError> {
    let doc = TomlConfig::from_file_with_options(path, options).map(TomlConfig::into_document)?;
    export_document_to_json(&doc)
}
