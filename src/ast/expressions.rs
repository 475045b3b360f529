use std::fmt::{Display, Formatter, Result};

use crate::lexer::tokens::Token;

/// Operand of an addition.
#[derive(Debug, Clone, PartialEq)]
pub enum Term {
    Number(Token),
    Identifier(Token),
}

impl Term {
    pub fn token(&self) -> &Token {
        match self {
            Term::Number(token) | Term::Identifier(token) => token,
        }
    }
}

impl Display for Term {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "{}", self.token().value)
    }
}

/// A left-associative chain of `+`.
///
/// `a + b + c` is `Sum { left: Sum { left: a, right: b }, right: c }`; a lone
/// operand stays a bare `Term`.
#[derive(Debug, Clone, PartialEq)]
pub enum Addition {
    Term(Term),
    Sum {
        left: Box<Addition>,
        operator: Token,
        right: Term,
    },
}

impl Display for Addition {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Addition::Term(term) => write!(f, "{}", term),
            Addition::Sum { left, right, .. } => write!(f, "Addition({}, {})", left, right),
        }
    }
}
