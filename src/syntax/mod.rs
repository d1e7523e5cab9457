//! Album file syntax: lexing and line parsing.
//!
//! Every line is handled on its own: [`lexer::tokenize`] turns it into
//! tokens and [`statement::parse_statement`] maps those to a [`Statement`].
//! [`parse_line`] runs both.

pub mod lexer;
pub mod statement;

pub use lexer::{Token, TokenKind, tokenize};
pub use statement::{Statement, parse_statement};

use thiserror::Error;

/// Why a line could not be lexed or parsed. Columns are 1-based.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SyntaxError {
    #[error("unexpected character {found:?} at column {column}")]
    UnexpectedChar { found: char, column: usize },
    #[error("missing album directory at column {column}")]
    MissingDir { column: usize },
    #[error("missing field after separator at column {column}")]
    MissingField { column: usize },
    #[error("unexpected token sequence {shape} at column {column}")]
    UnexpectedShape { shape: String, column: usize },
}

/// Lex and parse a single line.
pub fn parse_line(line: &str) -> Result<Statement, SyntaxError> {
    let tokens = tokenize(line)?;
    parse_statement(&tokens)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_line_runs_both_stages() {
        assert_eq!(
            parse_line("/album3; album 3").unwrap(),
            Statement::Album {
                dir: "album3".into(),
                title: "album 3".into(),
                description: String::new(),
            }
        );
    }

    #[test]
    fn parse_line_reports_lexer_errors() {
        assert_eq!(
            parse_line("album1:"),
            Err(SyntaxError::UnexpectedChar {
                found: ':',
                column: 7
            })
        );
    }

    #[test]
    fn syntax_error_messages() {
        let err = SyntaxError::MissingDir { column: 2 };
        assert_eq!(err.to_string(), "missing album directory at column 2");
    }
}
