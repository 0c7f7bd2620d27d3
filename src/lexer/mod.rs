// Author: Dustin Pilgrim
// License: MIT

use std::str::Lines;
use crate::TomlError;

mod scanner;
mod tokenizer;

pub(crate) use scanner::is_quote;

/// Classification of one source line.
#[derive(Debug, Clone, PartialEq)]
pub enum Token<'a> {
    // --- ignored ---
    Blank,
    Comment,

    // --- structure ---
    Header(&'a str),
    Assignment { key: &'a str, value: &'a str },

    // --- layout ---
    Eof,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Line<'a> {
    pub number: usize,
    pub token: Token<'a>,
}

pub struct Lexer<'a> {
    input: Lines<'a>,
    line: usize,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        Lexer {
            input: input.lines(),
            line: 0,
        }
    }

    /// Number of the most recently produced line (0 before the first).
    pub fn line(&self) -> usize {
        self.line
    }

    /// Classify the next line. `\r\n` endings are handled by `str::lines`.
    /// Once the input is exhausted this keeps returning `Token::Eof`.
    pub fn next_line(&mut self) -> Result<Line<'a>, TomlError> {
        match self.input.next() {
            Some(raw) => {
                self.line += 1;
                let token = tokenizer::classify_line(raw, self.line)?;
                Ok(Line { number: self.line, token })
            }
            None => Ok(Line { number: self.line, token: Token::Eof }),
        }
    }
}
