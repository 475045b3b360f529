use crate::{
    ast::{
        ast::Stmt,
        statements::{Assignment, Count, Declaration, Division, ForLoop, ReturnStmt},
    },
    errors::errors::{Error, Expected},
    lexer::tokens::TokenKind,
};

use super::{
    expr::{parse_addition, parse_number_set},
    parser::Parser,
};

pub fn parse_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let handler = parser
        .peek_kind()
        .and_then(|kind| parser.get_stmt_lookup().get(&kind).copied());

    match handler {
        Some(handler) => handler(parser),
        None => Err(parser.unexpected(Expected::Statement)),
    }
}

pub fn parse_declaration_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    parser.expect(TokenKind::Let, None)?;
    let identifier = parser.expect(TokenKind::Identifier, None)?;
    parser.expect(TokenKind::Operator, Some("="))?;
    let number_set = parse_number_set(parser)?;

    // The terminator is optional here, unlike after an assignment.
    if parser.next_is(TokenKind::Delimiter, Some(";")) {
        parser.advance();
    }

    Ok(Stmt::Declaration(Declaration {
        identifier,
        number_set,
    }))
}

pub fn parse_assignment_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    Ok(Stmt::Assignment(parse_assignment(parser)?))
}

pub fn parse_assignment(parser: &mut Parser) -> Result<Assignment, Error> {
    let target = parser.expect(TokenKind::Identifier, None)?;
    parser.expect(TokenKind::Operator, Some("="))?;
    let value = parse_addition(parser)?;
    parser.expect(TokenKind::Delimiter, Some(";"))?;

    Ok(Assignment { target, value })
}

pub fn parse_count(parser: &mut Parser) -> Result<Count, Error> {
    let Assignment { target, value } = parse_assignment(parser)?;
    Ok(Count { target, value })
}

pub fn parse_for_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    parser.expect(TokenKind::For, None)?;
    let variable = parser.expect(TokenKind::Identifier, None)?;
    parser.expect(TokenKind::In, None)?;
    let iterable = parse_number_set(parser)?;
    parser.expect(TokenKind::Delimiter, Some(":"))?;

    let body = parse_assignment(parser)?;
    let count = parse_count(parser)?;

    Ok(Stmt::ForLoop(ForLoop {
        variable,
        iterable,
        body,
        count,
    }))
}

pub fn parse_return_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    parser.expect(TokenKind::Return, None)?;
    let left = parser.expect(TokenKind::Identifier, None)?;
    let operator = parser.expect(TokenKind::Operator, Some("/"))?;
    let right = parser.expect(TokenKind::Identifier, None)?;

    Ok(Stmt::Return(ReturnStmt {
        division: Division {
            left,
            operator,
            right,
        },
    }))
}
