use std::fmt;

use indexmap::IndexMap;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Value {
    String(String),
    Integer(i64),
    Float(f64),
}

/// Key/value pairs of one scope, in the order they were first assigned.
pub type Table = IndexMap<String, Value>;

/// A parsed document. Built once by the parser, read-only afterwards.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Document {
    globals: Table,
    sections: IndexMap<String, Table>,
}

/// Lookup handle bound to one section of a [`Document`].
///
/// Returned for missing sections too, in which case every lookup reports
/// absence.
#[derive(Debug, Clone, Copy)]
pub struct SectionView<'a> {
    name: Option<&'a str>,
    table: Option<&'a Table>,
}

impl Value {
    pub fn as_str(&self) -> Option<&str> {
        if let Value::String(s) = self {
            Some(s)
        } else {
            None
        }
    }

    pub fn as_integer(&self) -> Option<i64> {
        if let Value::Integer(n) = self {
            Some(*n)
        } else {
            None
        }
    }

    pub fn as_float(&self) -> Option<f64> {
        if let Value::Float(n) = self {
            Some(*n)
        } else {
            None
        }
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            Value::String(_) => "string",
            Value::Integer(_) => "integer",
            Value::Float(_) => "float",
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::String(s) => write!(f, "{}", s),
            Value::Integer(n) => write!(f, "{}", n),
            Value::Float(n) => write!(f, "{:?}", n),
        }
    }
}

impl Document {
    pub(crate) fn from_parts(globals: Table, sections: IndexMap<String, Table>) -> Self {
        Self { globals, sections }
    }

    pub fn get_global(&self, key: &str) -> Option<&Value> {
        self.globals.get(key)
    }

    pub fn section(&self, name: &str) -> SectionView<'_> {
        match self.sections.get_key_value(name) {
            Some((name, table)) => SectionView {
                name: Some(name.as_str()),
                table: Some(table),
            },
            None => SectionView { name: None, table: None },
        }
    }

    pub fn globals(&self) -> &Table {
        &self.globals
    }

    pub fn has_section(&self, name: &str) -> bool {
        self.sections.contains_key(name)
    }

    pub fn section_names(&self) -> impl Iterator<Item = &str> {
        self.sections.keys().map(String::as_str)
    }

    pub fn sections(&self) -> impl Iterator<Item = SectionView<'_>> {
        self.sections.iter().map(|(name, table)| SectionView {
            name: Some(name.as_str()),
            table: Some(table),
        })
    }

    pub fn is_empty(&self) -> bool {
        self.globals.is_empty() && self.sections.is_empty()
    }
}

impl<'a> SectionView<'a> {
    /// Name of the section, `None` for the view of a missing section.
    pub fn name(&self) -> Option<&'a str> {
        self.name
    }

    pub fn get(&self, key: &str) -> Option<&'a Value> {
        self.table.and_then(|t| t.get(key))
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// The underlying table, `None` for a missing section.
    pub fn table(&self) -> Option<&'a Table> {
        self.table
    }

    /// Whether the section was present in the source (possibly empty).
    pub fn exists(&self) -> bool {
        self.table.is_some()
    }

    pub fn keys(&self) -> impl Iterator<Item = &'a str> + use<'a> {
        self.table.into_iter().flat_map(|t| t.keys().map(String::as_str))
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'a str, &'a Value)> + use<'a> {
        self.table
            .into_iter()
            .flat_map(|t| t.iter().map(|(k, v)| (k.as_str(), v)))
    }

    pub fn len(&self) -> usize {
        self.table.map_or(0, |t| t.len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
