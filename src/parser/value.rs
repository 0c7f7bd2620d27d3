use once_cell::sync::Lazy;
use regex::Regex;

use super::*;
use crate::lexer::is_quote;

static INTEGER: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[+-]?[0-9]+$").unwrap());

// Needs a fraction or an exponent; plain digit runs are integers.
static FLOAT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[+-]?(?:[0-9]+\.[0-9]*|\.[0-9]+|[0-9]+)(?:[eE][+-]?[0-9]+)?$").unwrap()
});

pub(super) fn coerce_value(token: &str, line: usize, options: ParseOptions) -> Result<Value, TomlError> {
    match token.chars().next() {
        Some(c) if is_quote(c) => parse_quoted_value(token, c, line),
        _ if INTEGER.is_match(token) => parse_integer_value(token, line),
        _ if FLOAT.is_match(token) => parse_float_value(token, line),
        _ => parse_bare_value(token, line, options),
    }
}

fn parse_quoted_value(token: &str, quote: char, line: usize) -> Result<Value, TomlError> {
    let body = &token[quote.len_utf8()..];

    let Some(end) = body.find(quote) else {
        return Err(TomlError::UnterminatedQuote {
            quote,
            line,
            hint: Some(format!("Close the string with {}", quote)),
            code: Some(105),
        });
    };

    if end + quote.len_utf8() != body.len() {
        return Err(TomlError::UnrecognizedValue {
            token: token.to_string(),
            line,
            hint: Some("Unexpected text after closing quote; escaped quotes are not supported".into()),
            code: Some(108),
        });
    }

    Ok(Value::String(body[..end].to_string()))
}

fn parse_integer_value(token: &str, line: usize) -> Result<Value, TomlError> {
    token
        .parse::<i64>()
        .map(Value::Integer)
        .map_err(|_| TomlError::UnrecognizedValue {
            token: token.to_string(),
            line,
            hint: Some(format!("Integers must be between {} and {}", i64::MIN, i64::MAX)),
            code: Some(107),
        })
}

fn parse_float_value(token: &str, line: usize) -> Result<Value, TomlError> {
    token
        .parse::<f64>()
        .map(Value::Float)
        .map_err(|_| TomlError::UnrecognizedValue {
            token: token.to_string(),
            line,
            hint: Some("Invalid floating point number".into()),
            code: Some(106),
        })
}

fn parse_bare_value(token: &str, line: usize, options: ParseOptions) -> Result<Value, TomlError> {
    if options.bare_strings {
        return Ok(Value::String(token.to_string()));
    }

    Err(TomlError::UnrecognizedValue {
        token: token.to_string(),
        line,
        hint: Some("Quote string values, e.g. key = \"text\"".into()),
        code: Some(106),
    })
}
