//! Parser implementation for building the parse tree.
//!
//! This module contains the main Parser struct and its cursor operations.
//! Statements are dispatched through a lookup table keyed by the kind of
//! the statement's first token; each production then consumes its tokens
//! with `expect`, failing on the first mismatch.

use std::{collections::HashMap, rc::Rc};

use crate::{
    ast::ast::Program,
    errors::errors::{Error, ErrorImpl, Expected},
    lexer::tokens::{Token, TokenKind},
    Position,
};

use super::{
    lookups::{create_token_lookups, StmtHandler, StmtLookup},
    stmt::parse_stmt,
};

/// The main parser structure that maintains parsing state.
///
/// This struct owns the token sequence and a cursor into it. The cursor only
/// ever moves forward.
pub struct Parser {
    /// The list of tokens to parse
    tokens: Vec<Token>,
    /// Current position in the token stream
    pos: usize,
    /// The name of the source the tokens came from
    file: Rc<String>,
    /// Lookup table for statement parsing handlers
    stmt_lookup: StmtLookup,
}

impl Parser {
    /// Creates a new Parser over `tokens`, with the statement table filled in.
    ///
    /// # Arguments
    ///
    /// * `tokens` - Vector of tokens to parse
    /// * `file` - Reference-counted string containing the source name
    pub fn new(tokens: Vec<Token>, file: Rc<String>) -> Self {
        let mut parser = Parser {
            tokens,
            pos: 0,
            file,
            stmt_lookup: HashMap::new(),
        };
        create_token_lookups(&mut parser);
        parser
    }

    /// Returns the token at the cursor without advancing, or `None` at end of input.
    pub fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.pos)
    }

    pub fn peek_kind(&self) -> Option<TokenKind> {
        self.peek().map(|token| token.kind)
    }

    /// Returns the token at the cursor and moves past it.
    pub fn advance(&mut self) -> Option<Token> {
        let token = self.tokens.get(self.pos).cloned();
        if token.is_some() {
            self.pos += 1;
        }
        token
    }

    /// Checks the next token without consuming it.
    pub fn next_is(&self, kind: TokenKind, value: Option<&str>) -> bool {
        self.peek().is_some_and(|token| token.matches(kind, value))
    }

    /// Consumes the next token if it has `kind` (and `value`, when given).
    ///
    /// # Returns
    ///
    /// The consumed token, or an error naming what was expected and what was
    /// found instead.
    pub fn expect(&mut self, kind: TokenKind, value: Option<&str>) -> Result<Token, Error> {
        if !self.next_is(kind, value) {
            return Err(self.unexpected(Expected::token(kind, value)));
        }

        self.advance()
            .ok_or_else(|| self.unexpected(Expected::token(kind, value)))
    }

    /// Builds the error for finding something other than `expected` at the cursor.
    pub fn unexpected(&self, expected: Expected) -> Error {
        match self.peek() {
            Some(token) => Error::new(
                ErrorImpl::UnexpectedToken {
                    expected,
                    found_kind: token.kind,
                    found: token.value.to_string(),
                },
                token.span.start.clone(),
            ),
            None => Error::new(ErrorImpl::UnexpectedEndOfInput { expected }, self.get_position()),
        }
    }

    /// Checks if there are more tokens to parse.
    pub fn has_tokens(&self) -> bool {
        self.pos < self.tokens.len()
    }

    /// Returns a reference to the statement lookup table.
    pub fn get_stmt_lookup(&self) -> &StmtLookup {
        &self.stmt_lookup
    }

    /// Registers a statement handler for a token.
    ///
    /// # Arguments
    ///
    /// * `kind` - The token kind to register
    /// * `stmt_fn` - The handler function for this statement type
    pub fn stmt(&mut self, kind: TokenKind, stmt_fn: StmtHandler) {
        self.stmt_lookup.insert(kind, stmt_fn);
    }

    /// Returns the source position of the cursor.
    ///
    /// Past the last token this is the end of the last token.
    pub fn get_position(&self) -> Position {
        match self.peek().or(self.tokens.last()) {
            Some(token) if self.has_tokens() => token.span.start.clone(),
            Some(token) => token.span.end.clone(),
            None => Position(0, Rc::clone(&self.file)),
        }
    }

    /// Parses statements until the tokens run out.
    ///
    /// The first error aborts the whole parse; no partial program is returned.
    pub fn parse_program(&mut self) -> Result<Program, Error> {
        let mut statements = vec![];

        while self.has_tokens() {
            statements.push(parse_stmt(self)?);
        }

        Ok(Program { statements })
    }
}

/// Parses a sequence of tokens into a Program.
///
/// This is the main entry point for parsing. It creates a parser instance
/// and parses all statements until the tokens are exhausted.
///
/// # Arguments
///
/// * `tokens` - Vector of tokens to parse
/// * `file` - Reference-counted string containing the source name
pub fn parse(tokens: Vec<Token>, file: Rc<String>) -> Result<Program, Error> {
    Parser::new(tokens, file).parse_program()
}
