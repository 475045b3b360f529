use crate::{
    ast::{
        expressions::{Addition, Term},
        statements::{NumberList, NumberSet},
    },
    errors::errors::{Error, Expected},
    lexer::tokens::TokenKind,
};

use super::parser::Parser;

pub fn parse_number_set(parser: &mut Parser) -> Result<NumberSet, Error> {
    parser.expect(TokenKind::Delimiter, Some("["))?;
    let list = parse_number_list(parser)?;
    parser.expect(TokenKind::Delimiter, Some("]"))?;

    Ok(NumberSet { list })
}

/// At least one number; `[]` is rejected here.
pub fn parse_number_list(parser: &mut Parser) -> Result<NumberList, Error> {
    let mut numbers = vec![parser.expect(TokenKind::Number, None)?];

    while parser.next_is(TokenKind::Delimiter, Some(",")) {
        parser.expect(TokenKind::Delimiter, Some(","))?;
        numbers.push(parser.expect(TokenKind::Number, None)?);
    }

    Ok(NumberList { numbers })
}

pub fn parse_addition(parser: &mut Parser) -> Result<Addition, Error> {
    let mut left = Addition::Term(parse_term(parser)?);

    while parser.next_is(TokenKind::Operator, Some("+")) {
        let operator = parser.expect(TokenKind::Operator, Some("+"))?;
        let right = parse_term(parser)?;

        left = Addition::Sum {
            left: Box::new(left),
            operator,
            right,
        };
    }

    Ok(left)
}

pub fn parse_term(parser: &mut Parser) -> Result<Term, Error> {
    match parser.peek_kind() {
        Some(TokenKind::Number) => Ok(Term::Number(parser.expect(TokenKind::Number, None)?)),
        Some(TokenKind::Identifier) => Ok(Term::Identifier(
            parser.expect(TokenKind::Identifier, None)?,
        )),
        _ => Err(parser.unexpected(Expected::Term)),
    }
}
