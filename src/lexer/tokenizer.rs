use super::*;
use super::scanner::strip_inline_comment;

pub(super) fn classify_line<'a>(raw: &'a str, line: usize) -> Result<Token<'a>, TomlError> {
    let trimmed = raw.trim();

    if trimmed.is_empty() {
        return Ok(Token::Blank);
    }
    if trimmed.starts_with('#') {
        return Ok(Token::Comment);
    }

    let content = strip_inline_comment(trimmed).trim_end();

    if content.starts_with('[') {
        tokenize_header(content, line)
    } else {
        tokenize_assignment(content, line)
    }
}

fn tokenize_header(content: &str, line: usize) -> Result<Token<'_>, TomlError> {
    let inner = match content.strip_prefix('[').and_then(|s| s.strip_suffix(']')) {
        Some(inner) => inner,
        None => {
            return Err(TomlError::MalformedSectionHeader {
                text: content.to_string(),
                line,
                hint: Some("Section headers must close with ']'".into()),
                code: Some(101),
            });
        }
    };

    if inner.contains(&['[', ']'][..]) {
        return Err(TomlError::MalformedSectionHeader {
            text: content.to_string(),
            line,
            hint: Some("Brackets are unbalanced; nested tables are not supported".into()),
            code: Some(101),
        });
    }

    let name = inner.trim();
    if name.is_empty() {
        return Err(TomlError::MalformedSectionHeader {
            text: content.to_string(),
            line,
            hint: Some("Section name cannot be empty".into()),
            code: Some(102),
        });
    }

    Ok(Token::Header(name))
}

fn tokenize_assignment(content: &str, line: usize) -> Result<Token<'_>, TomlError> {
    let Some((key, value)) = content.split_once('=') else {
        return Err(TomlError::MalformedKeyValue {
            text: content.to_string(),
            line,
            hint: Some("Expected 'key = value'".into()),
            code: Some(103),
        });
    };

    let key = key.trim();
    if !is_valid_key(key) {
        return Err(TomlError::MalformedKeyValue {
            text: content.to_string(),
            line,
            hint: Some(if key.is_empty() {
                "Key cannot be empty".into()
            } else {
                format!("Key '{}' cannot contain whitespace, '[', ']' or '#'", key)
            }),
            code: Some(104),
        });
    }

    Ok(Token::Assignment { key, value: value.trim() })
}

fn is_valid_key(key: &str) -> bool {
    !key.is_empty()
        && !key
            .chars()
            .any(|c| c.is_whitespace() || matches!(c, '[' | ']' | '#'))
}
