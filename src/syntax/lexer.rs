//! Line lexer for album files.
//!
//! A line is scanned left to right into [`Token`]s. Which tokens may appear
//! depends only on the line's first character:
//!
//! ```text
//! # anything                      COMMENT
//! (whitespace only)               EMPTY
//! /dir[; string[; string...]]     SLASH DIR (SEMICOLON STRING)*
//! file[; string[; string...]]     FILE (SEMICOLON STRING)*
//! ```
//!
//! The separator is the two characters `"; "`. A string field runs up to the
//! next unescaped `;` and is trimmed; `\;` puts a literal semicolon into it.
//!
//! Each token shape is a small `nom` parser; [`tokenize`] chains them and
//! turns a failed parser into the [`SyntaxError`] for that position.

use super::SyntaxError;
use nom::IResult;
use nom::branch::alt;
use nom::bytes::complete::{tag, take_while1};
use nom::character::complete::none_of;
use nom::combinator::{consumed, value};
use nom::multi::fold_many0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Comment,
    Empty,
    Slash,
    Dir,
    File,
    Semicolon,
    String,
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            TokenKind::Comment => "COMMENT",
            TokenKind::Empty => "EMPTY",
            TokenKind::Slash => "SLASH",
            TokenKind::Dir => "DIR",
            TokenKind::File => "FILE",
            TokenKind::Semicolon => "SEMICOLON",
            TokenKind::String => "STRING",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub value: String,
    /// 1-based character column where the token starts
    pub column: usize,
}

impl Token {
    fn new(kind: TokenKind, value: impl Into<String>, column: usize) -> Self {
        Self {
            kind,
            value: value.into(),
            column,
        }
    }
}

const SEPARATOR: &str = "; ";

type ParseResult<'a, O> = IResult<&'a str, O>;

fn is_file_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c == '-'
}

fn is_dir_char(c: char) -> bool {
    is_file_char(c) || c == '/'
}

fn slash(src: &str) -> ParseResult<'_, &str> {
    tag("/")(src)
}

fn dir(src: &str) -> ParseResult<'_, &str> {
    take_while1(is_dir_char)(src)
}

fn file(src: &str) -> ParseResult<'_, &str> {
    take_while1(is_file_char)(src)
}

fn separator(src: &str) -> ParseResult<'_, &str> {
    tag(SEPARATOR)(src)
}

/// A string field up to the next unescaped `;`, with `\;` unescaped.
///
/// Yields the raw consumed text alongside the unescaped value.
fn string_field(src: &str) -> ParseResult<'_, (&str, String)> {
    consumed(fold_many0(
        alt((value(';', tag("\\;")), none_of(";"))),
        String::new,
        |mut acc, c| {
            acc.push(c);
            acc
        },
    ))(src)
}

/// 1-based character column of `rest` within `line`.
fn column_of(line: &str, rest: &str) -> usize {
    line[..line.len() - rest.len()].chars().count() + 1
}

fn unexpected(line: &str, rest: &str) -> SyntaxError {
    let column = column_of(line, rest);
    match rest.chars().next() {
        Some(found) => SyntaxError::UnexpectedChar { found, column },
        None => SyntaxError::MissingField { column },
    }
}

/// Split one line into tokens.
pub fn tokenize(line: &str) -> Result<Vec<Token>, SyntaxError> {
    if line.trim().is_empty() {
        return Ok(vec![Token::new(TokenKind::Empty, line, 1)]);
    }
    if line.starts_with('#') {
        return Ok(vec![Token::new(TokenKind::Comment, line, 1)]);
    }

    let mut tokens = Vec::new();
    let mut rest = line;

    if let Ok((after, matched)) = slash(rest) {
        tokens.push(Token::new(TokenKind::Slash, matched, 1));
        let column = column_of(line, after);
        let (after, name) = dir(after).map_err(|_| SyntaxError::MissingDir { column })?;
        if name.chars().all(|c| c == '/') {
            return Err(SyntaxError::MissingDir { column });
        }
        tokens.push(Token::new(TokenKind::Dir, name, column));
        rest = after;
    } else {
        let (after, name) = file(rest).map_err(|_| unexpected(line, rest))?;
        tokens.push(Token::new(TokenKind::File, name, 1));
        rest = after;
    }

    while !rest.is_empty() {
        let (after, matched) = separator(rest).map_err(|_| unexpected(line, rest))?;
        tokens.push(Token::new(TokenKind::Semicolon, matched, column_of(line, rest)));
        rest = after;

        let column = column_of(line, rest);
        let (after, (raw, field)) =
            string_field(rest).map_err(|_| SyntaxError::MissingField { column })?;
        if raw.is_empty() {
            return Err(SyntaxError::MissingField { column });
        }
        tokens.push(Token::new(TokenKind::String, field.trim(), column));
        rest = after;
    }

    Ok(tokens)
}
