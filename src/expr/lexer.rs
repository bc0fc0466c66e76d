// src/expr/lexer.rs

use regex::Regex;

use crate::expr::ParseError;

/// A raw token slice and its byte offset in the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Lexeme<'h> {
    pub position: usize,
    pub text: &'h str,
}

/// Split `input` into lexemes, skipping whitespace between them.
///
/// `pattern` must be anchored with `^` and match exactly one lexeme.
pub(crate) fn scan<'h>(input: &'h str, pattern: &Regex) -> Result<Vec<Lexeme<'h>>, ParseError> {
    let mut lexemes = Vec::new();
    let mut pos = 0;

    loop {
        let rest = &input[pos..];
        let trimmed = rest.trim_start();
        if trimmed.is_empty() {
            break;
        }
        let start = pos + (rest.len() - trimmed.len());

        match pattern.find(trimmed) {
            Some(m) if m.start() == 0 && !m.is_empty() => {
                lexemes.push(Lexeme {
                    position: start,
                    text: m.as_str(),
                });
                pos = start + m.end();
            }
            _ => {
                return Err(ParseError::UnexpectedCharacter {
                    position: start,
                    found: trimmed.chars().next().unwrap_or_default(),
                });
            }
        }
    }

    Ok(lexemes)
}
