use lazy_static::lazy_static;
use num_bigint::BigUint;
use std::{collections::HashMap, fmt::Display};

use crate::Span;

lazy_static! {
    pub static ref RESERVED_LOOKUP: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        map.insert("let", TokenKind::Let);
        map.insert("for", TokenKind::For);
        map.insert("in", TokenKind::In);
        map.insert("return", TokenKind::Return);
        map
    };
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    // Reserved
    Let,
    For,
    In,
    Return,

    Identifier,
    Number,
    Operator,  // == = + - * /
    Delimiter, // [ ] ( ) , ; . :
    String,
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// Payload of a token: the matched text, or the parsed value for numbers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenValue {
    Text(String),
    Integer(BigUint),
}

impl TokenValue {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            TokenValue::Text(text) => Some(text),
            TokenValue::Integer(_) => None,
        }
    }
}

impl Display for TokenValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TokenValue::Text(text) => write!(f, "{}", text),
            TokenValue::Integer(value) => write!(f, "{}", value),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub value: TokenValue,
    pub span: Span,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.kind, self.value)
    }
}

impl Token {
    /// True when the token has `kind` and, if `value` is given, exactly that text.
    pub fn matches(&self, kind: TokenKind, value: Option<&str>) -> bool {
        if self.kind != kind {
            return false;
        }

        match value {
            Some(value) => self.value.as_text() == Some(value),
            None => true,
        }
    }
}
