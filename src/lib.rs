pub mod ast;
pub mod error;
pub mod export;
pub mod lexer;
pub mod parser;
pub mod config;

use std::str::FromStr;

pub use ast::{Document, SectionView, Table, Value};
pub use error::{ErrorKind, TomlError};
pub use parser::ParseOptions;
pub use config::TomlConfig;

/// Parse a complete document with the default options.
///
/// ```
/// let doc = microtoml::parse("name = \"demo\"\n[server]\nport = 8080").unwrap();
/// assert_eq!(doc.section("server").get("port"), Some(&microtoml::Value::Integer(8080)));
/// ```
pub fn parse(text: &str) -> Result<Document, TomlError> {
    parser::Parser::new(text).parse_document()
}

pub fn parse_with_options(text: &str, options: ParseOptions) -> Result<Document, TomlError> {
    parser::Parser::with_options(text, options).parse_document()
}

impl FromStr for Document {
    type Err = TomlError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s)
    }
}
