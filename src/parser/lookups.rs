use std::collections::HashMap;

use crate::{ast::ast::Stmt, errors::errors::Error, lexer::tokens::TokenKind};

use super::{parser::Parser, stmt::*};

pub type StmtHandler = fn(&mut Parser) -> Result<Stmt, Error>;

/// Registers the production each statement-leading token kind selects.
pub fn create_token_lookups(parser: &mut Parser) {
    parser.stmt(TokenKind::Let, parse_declaration_stmt);
    parser.stmt(TokenKind::For, parse_for_stmt);
    parser.stmt(TokenKind::Return, parse_return_stmt);
    parser.stmt(TokenKind::Identifier, parse_assignment_stmt);
}

// Lookup table inside parser struct, so it's easier
pub type StmtLookup = HashMap<TokenKind, StmtHandler>;
