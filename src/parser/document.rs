use indexmap::IndexMap;
use tracing::{debug, trace};

use super::*;
use crate::ast::Table;
use crate::lexer::Token;

pub(super) fn parse_document(parser: &mut Parser) -> Result<Document, TomlError> {
    let mut globals = Table::new();
    let mut sections: IndexMap<String, Table> = IndexMap::new();

    // None while still in the global scope
    let mut current: Option<usize> = None;

    loop {
        let line = parser.next_line()?;
        match line.token {
            Token::Blank | Token::Comment => {}
            Token::Eof => {
                break;
            }
            Token::Header(name) => {
                current = Some(open_section(&mut sections, name, line.number));
            }
            Token::Assignment { key, value } => {
                let value = value::coerce_value(value, line.number, parser.options())?;
                let scope = match current {
                    Some(index) => &mut sections[index],
                    None => &mut globals,
                };
                if scope.insert(key.to_string(), value).is_some() {
                    trace!(key, line = line.number, "key reassigned, later value wins");
                }
            }
        }
    }

    debug!(
        globals = globals.len(),
        sections = sections.len(),
        lines = parser.line(),
        "parsed document"
    );

    Ok(Document::from_parts(globals, sections))
}

/// Switch to `name`, creating its table on first sight. A repeated header
/// reopens the existing table.
fn open_section(sections: &mut IndexMap<String, Table>, name: &str, line: usize) -> usize {
    match sections.get_index_of(name) {
        Some(index) => {
            trace!(section = name, line, "reopening section");
            index
        }
        None => {
            trace!(section = name, line, "opening section");
            sections.insert_full(name.to_string(), Table::new()).0
        }
    }
}
