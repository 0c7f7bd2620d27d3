use crate::lexer::{Lexer, Line};
use crate::TomlError;
use crate::ast::{Document, Value};

mod document;
mod value;

/// Knobs for the few places where the format leaves a choice open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseOptions {
    /// Accept unquoted values that are neither integers nor floats as
    /// strings. When `false` they fail with `UnrecognizedValue`.
    pub bare_strings: bool,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self { bare_strings: true }
    }
}

impl ParseOptions {
    pub fn strict() -> Self {
        Self { bare_strings: false }
    }
}

pub struct Parser<'a> {
    lexer: Lexer<'a>,
    options: ParseOptions,
}

impl<'a> Parser<'a> {
    pub fn new(input: &'a str) -> Self {
        Self::with_options(input, ParseOptions::default())
    }

    pub fn with_options(input: &'a str, options: ParseOptions) -> Self {
        Self {
            lexer: Lexer::new(input),
            options,
        }
    }

    pub(crate) fn next_line(&mut self) -> Result<Line<'a>, TomlError> {
        self.lexer.next_line()
    }

    pub(crate) fn options(&self) -> ParseOptions {
        self.options
    }

    pub(crate) fn line(&self) -> usize {
        self.lexer.line()
    }

    /// Consume the whole input. Either every line is accepted and the
    /// document is returned, or the first offending line is reported.
    pub fn parse_document(&mut self) -> Result<Document, TomlError> {
        document::parse_document(self)
    }

    /// Coerce a single trimmed value token the same way assignments are.
    /// Errors are reported against `line`, the 1-based line the token came from.
    pub fn parse_value(&self, token: &str, line: usize) -> Result<Value, TomlError> {
        value::coerce_value(token, line, self.options)
    }
}

#[cfg(test)]
mod tests;
