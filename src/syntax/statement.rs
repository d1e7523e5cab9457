//! Line parser: token sequence → [`Statement`].

use super::SyntaxError;
use super::lexer::{Token, TokenKind as K};

/// One parsed line of an album file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Statement {
    /// `/dir; title[; description]`
    Album {
        dir: String,
        title: String,
        description: String,
    },
    /// `/dir`
    Subalbum { dir: String },
    /// `name[; title[; description]]`
    Photo {
        name: String,
        title: String,
        description: String,
    },
    Comment,
    Empty,
}

/// Classify a line's tokens. Missing title/description fields are empty.
pub fn parse_statement(tokens: &[Token]) -> Result<Statement, SyntaxError> {
    let kinds: Vec<K> = tokens.iter().map(|t| t.kind).collect();
    let value = |i: usize| tokens[i].value.clone();

    let statement = match kinds.as_slice() {
        [K::Comment] => Statement::Comment,
        [K::Empty] => Statement::Empty,
        [K::Slash, K::Dir] => Statement::Subalbum { dir: value(1) },
        [K::Slash, K::Dir, K::Semicolon, K::String] => Statement::Album {
            dir: value(1),
            title: value(3),
            description: String::new(),
        },
        [K::Slash, K::Dir, K::Semicolon, K::String, K::Semicolon, K::String] => {
            Statement::Album {
                dir: value(1),
                title: value(3),
                description: value(5),
            }
        }
        [K::File] => Statement::Photo {
            name: value(0),
            title: String::new(),
            description: String::new(),
        },
        [K::File, K::Semicolon, K::String] => Statement::Photo {
            name: value(0),
            title: value(2),
            description: String::new(),
        },
        [K::File, K::Semicolon, K::String, K::Semicolon, K::String] => Statement::Photo {
            name: value(0),
            title: value(2),
            description: value(4),
        },
        _ => {
            let shape = kinds
                .iter()
                .map(|k| k.to_string())
                .collect::<Vec<_>>()
                .join(" ");
            return Err(SyntaxError::UnexpectedShape {
                shape,
                column: tokens.first().map_or(1, |t| t.column),
            });
        }
    };
    Ok(statement)
}
