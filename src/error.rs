// Author: Dustin Pilgrim
// License: MIT

use std::fmt;

/// The main error type for parsing and querying microtoml documents.
///
/// Parse failures always carry the 1-based line number of the offending
/// line. Nothing is returned alongside a parse error; a document either
/// parses completely or not at all.
#[derive(Debug, Clone, PartialEq)]
pub enum TomlError {
    /// A line starting with `[` is not a well-formed `[name]` header.
    MalformedSectionHeader {
        text: String,
        line: usize,
        hint: Option<String>,
        code: Option<u32>,
    },
    /// A line that is neither blank, comment nor header is not `key = value`.
    MalformedKeyValue {
        text: String,
        line: usize,
        hint: Option<String>,
        code: Option<u32>,
    },
    /// A value token matches none of the accepted value grammars.
    UnrecognizedValue {
        token: String,
        line: usize,
        hint: Option<String>,
        code: Option<u32>,
    },
    /// Raised when a quoted string value is not closed on its line.
    UnterminatedQuote {
        quote: char,
        line: usize,
        hint: Option<String>,
        code: Option<u32>,
    },
    FileError {
        message: String,
        path: String,
        hint: Option<String>,
        code: Option<u32>,
    },
    /// A value exists but cannot be converted to the requested type.
    TypeError {
        message: String,
        line: usize,
        hint: Option<String>,
        code: Option<u32>,
    },
    MissingKey {
        path: String,
        hint: Option<String>,
        code: Option<u32>,
    },
    /// A value converted fine but was rejected by a caller-supplied check.
    ValidationError {
        message: String,
        line: usize,
        hint: Option<String>,
        code: Option<u32>,
    },
}

/// Discriminant-only view of [`TomlError`], handy for matching in callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    MalformedSectionHeader,
    MalformedKeyValue,
    UnrecognizedValue,
    UnterminatedQuote,
    File,
    Type,
    MissingKey,
    Validation,
}

impl TomlError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            TomlError::MalformedSectionHeader { .. } => ErrorKind::MalformedSectionHeader,
            TomlError::MalformedKeyValue { .. } => ErrorKind::MalformedKeyValue,
            TomlError::UnrecognizedValue { .. } => ErrorKind::UnrecognizedValue,
            TomlError::UnterminatedQuote { .. } => ErrorKind::UnterminatedQuote,
            TomlError::FileError { .. } => ErrorKind::File,
            TomlError::TypeError { .. } => ErrorKind::Type,
            TomlError::MissingKey { .. } => ErrorKind::MissingKey,
            TomlError::ValidationError { .. } => ErrorKind::Validation,
        }
    }

    /// The 1-based line the error points at, if it has one.
    ///
    /// Typed-access errors use line 0 internally when the key could not be
    /// located in the source text; that is reported as `None`.
    pub fn line(&self) -> Option<usize> {
        let line = match self {
            TomlError::MalformedSectionHeader { line, .. }
            | TomlError::MalformedKeyValue { line, .. }
            | TomlError::UnrecognizedValue { line, .. }
            | TomlError::UnterminatedQuote { line, .. }
            | TomlError::TypeError { line, .. }
            | TomlError::ValidationError { line, .. } => *line,
            TomlError::FileError { .. } | TomlError::MissingKey { .. } => 0,
        };
        (line > 0).then_some(line)
    }

    pub fn code(&self) -> Option<u32> {
        match self {
            TomlError::MalformedSectionHeader { code, .. }
            | TomlError::MalformedKeyValue { code, .. }
            | TomlError::UnrecognizedValue { code, .. }
            | TomlError::UnterminatedQuote { code, .. }
            | TomlError::FileError { code, .. }
            | TomlError::TypeError { code, .. }
            | TomlError::MissingKey { code, .. }
            | TomlError::ValidationError { code, .. } => *code,
        }
    }

    pub fn is_parse_error(&self) -> bool {
        matches!(
            self.kind(),
            ErrorKind::MalformedSectionHeader
                | ErrorKind::MalformedKeyValue
                | ErrorKind::UnrecognizedValue
                | ErrorKind::UnterminatedQuote
        )
    }
}

fn suffix(hint: &Option<String>, code: &Option<u32>) -> String {
    format!(
        "{}{}",
        hint.as_ref().map_or(String::new(), |h| format!(" Hint: {}", h)),
        code.map_or(String::new(), |c| format!(" Code: {}", c))
    )
}

impl fmt::Display for TomlError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TomlError::MalformedSectionHeader { text, line, hint, code } =>
                write!(f, "[microtoml] Malformed section header '{}' at line {}{}",
                    text, line, suffix(hint, code)),
            TomlError::MalformedKeyValue { text, line, hint, code } =>
                write!(f, "[microtoml] Malformed key/value '{}' at line {}{}",
                    text, line, suffix(hint, code)),
            TomlError::UnrecognizedValue { token, line, hint, code } =>
                write!(f, "[microtoml] Unrecognized value '{}' at line {}{}",
                    token, line, suffix(hint, code)),
            TomlError::UnterminatedQuote { quote, line, hint, code } =>
                write!(f, "[microtoml] Unterminated string starting with '{}' at line {}{}",
                    quote, line, suffix(hint, code)),
            TomlError::FileError { message, path, hint, code } =>
                write!(f, "[microtoml] File Error '{}': {}{}",
                    path, message, suffix(hint, code)),
            TomlError::TypeError { message, line, hint, code } =>
                if *line > 0 {
                    write!(f, "[microtoml] Type Error at line {}: {}{}",
                        line, message, suffix(hint, code))
                } else {
                    write!(f, "[microtoml] Type Error: {}{}", message, suffix(hint, code))
                },
            TomlError::MissingKey { path, hint, code } =>
                write!(f, "[microtoml] Key '{}' not found{}", path, suffix(hint, code)),
            TomlError::ValidationError { message, line, hint, code } =>
                if *line > 0 {
                    write!(f, "[microtoml] Validation Error at line {}: {}{}",
                        line, message, suffix(hint, code))
                } else {
                    write!(f, "[microtoml] Validation Error: {}{}", message, suffix(hint, code))
                },
        }
    }
}

impl std::error::Error for TomlError {}
