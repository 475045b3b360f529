use std::fmt::Display;

use thiserror::Error;

use crate::{lexer::tokens::TokenKind, Position};

/// The pipeline stage an error belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Raised by the tokenizer.
    Lexical,
    /// Raised by the parser.
    Syntax,
}

#[derive(Error, Debug, Clone, PartialEq)]
#[error("{internal_error}")]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position,
        }
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn get_impl(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn kind(&self) -> ErrorKind {
        match &self.internal_error {
            ErrorImpl::UnrecognisedToken { .. } => ErrorKind::Lexical,
            ErrorImpl::UnexpectedToken { .. } | ErrorImpl::UnexpectedEndOfInput { .. } => {
                ErrorKind::Syntax
            }
        }
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnrecognisedToken { .. } => "UnrecognisedToken",
            ErrorImpl::UnexpectedToken { .. } => "UnexpectedToken",
            ErrorImpl::UnexpectedEndOfInput { .. } => "UnexpectedEndOfInput",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::UnrecognisedToken { .. } => ErrorTip::None,
            ErrorImpl::UnexpectedToken {
                expected,
                found_kind,
                found,
            } => ErrorTip::Suggestion(format!(
                "Expected {}, but found {} `{}`",
                expected, found_kind, found
            )),
            ErrorImpl::UnexpectedEndOfInput { expected } => {
                ErrorTip::Suggestion(format!("Expected {}, but reached end of input", expected))
            }
        }
    }
}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

/// What the parser was looking for when it stopped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expected {
    /// A token of `kind`, and when `value` is set, with exactly that text.
    Token {
        kind: TokenKind,
        value: Option<String>,
    },
    /// The first token of a statement.
    Statement,
    /// A number or an identifier inside an addition.
    Term,
}

impl Expected {
    pub fn token(kind: TokenKind, value: Option<&str>) -> Self {
        Expected::Token {
            kind,
            value: value.map(String::from),
        }
    }
}

impl Display for Expected {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Expected::Token { kind, value: Some(value) } => write!(f, "{} `{}`", kind, value),
            Expected::Token { kind, value: None } => write!(f, "{}", kind),
            Expected::Statement => write!(f, "Let, For, Return or Identifier"),
            Expected::Term => write!(f, "Number or Identifier"),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ErrorImpl {
    #[error("unexpected character {character:?}")]
    UnrecognisedToken { character: char },
    #[error("expected {expected}, but found {found_kind} ({found})")]
    UnexpectedToken {
        expected: Expected,
        found_kind: TokenKind,
        found: String,
    },
    #[error("expected {expected}, but reached end of input")]
    UnexpectedEndOfInput { expected: Expected },
}
