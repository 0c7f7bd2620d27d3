use std::iter::Peekable;
use std::str::CharIndices;

pub(crate) fn is_quote(c: char) -> bool {
    c == '"' || c == '\''
}

/// Skip spaces and tabs
fn skip_blanks(chars: &mut Peekable<CharIndices>) {
    while let Some(&(_, c)) = chars.peek() {
        if c == ' ' || c == '\t' {
            chars.next();
        } else {
            break;
        }
    }
}

/// Cut a trailing `# comment` off an already trimmed line.
///
/// Before the first `=` any `#` starts a comment. After it, a value that
/// opens with a quote is skipped up to its closing quote first, so a `#`
/// inside a quoted string is kept. An unclosed quote keeps the rest of the
/// line intact for the value coercion to report.
pub(super) fn strip_inline_comment(line: &str) -> &str {
    let mut chars = line.char_indices().peekable();

    while let Some((idx, ch)) = chars.next() {
        match ch {
            '#' => return &line[..idx],
            '=' => break,
            _ => {}
        }
    }

    skip_blanks(&mut chars);

    if let Some(&(_, quote)) = chars.peek() {
        if is_quote(quote) {
            chars.next();
            if !chars.by_ref().any(|(_, c)| c == quote) {
                return line;
            }
        }
    }

    for (idx, ch) in chars {
        if ch == '#' {
            return &line[..idx];
        }
    }

    line
}
