//! Unit tests for the parser module.
//!
//! This module contains tests for parsing the language constructs:
//! - Declarations with number sets
//! - For loops with their assignment and count statements
//! - Assignments and addition chains
//! - Return statements
//! - Cursor operations and error reporting

use std::rc::Rc;

use super::parser::{parse, Parser};
use crate::{
    ast::{
        ast::{Program, Stmt},
        expressions::{Addition, Term},
        statements::NumberSet,
    },
    errors::errors::{Error, ErrorImpl, ErrorKind, Expected},
    lexer::{lexer::tokenize, tokens::TokenKind},
};

fn parse_source(source: &str) -> Result<Program, Error> {
    let tokens = tokenize(source.to_string(), Some("test.nl".to_string())).unwrap();
    parse(tokens, Rc::new("test.nl".to_string()))
}

fn parser_for(source: &str) -> Parser {
    let tokens = tokenize(source.to_string(), Some("test.nl".to_string())).unwrap();
    Parser::new(tokens, Rc::new("test.nl".to_string()))
}

fn numbers(set: &NumberSet) -> Vec<String> {
    set.list
        .numbers
        .iter()
        .map(|token| token.value.to_string())
        .collect()
}

fn term_names(addition: &Addition) -> Vec<String> {
    match addition {
        Addition::Term(term) => vec![term.token().value.to_string()],
        Addition::Sum { left, right, .. } => {
            let mut names = term_names(left);
            names.push(right.token().value.to_string());
            names
        }
    }
}

fn stmt_name(stmt: &Stmt) -> &'static str {
    match stmt {
        Stmt::Declaration(_) => "Declaration",
        Stmt::ForLoop(_) => "ForLoop",
        Stmt::Return(_) => "ReturnStmt",
        Stmt::Assignment(_) => "Assignment",
    }
}

fn delimiter(value: &str) -> Expected {
    Expected::token(TokenKind::Delimiter, Some(value))
}

#[test]
fn test_parse_declaration() {
    let program = parse_source("let list = [5, 8, 12];").unwrap();

    assert_eq!(program.statements.len(), 1);
    match &program.statements[0] {
        Stmt::Declaration(declaration) => {
            assert_eq!(declaration.identifier.value.as_text(), Some("list"));
            assert_eq!(numbers(&declaration.number_set), vec!["5", "8", "12"]);
        }
        other => panic!("Expected declaration, got {:?}", other),
    }
}

#[test]
fn test_declaration_terminator_is_optional() {
    let with = parse_source("let list = [5, 8, 12];").unwrap();
    let without = parse_source("let list = [5, 8, 12]").unwrap();

    assert_eq!(with, without);
}

#[test]
fn test_declaration_single_number() {
    let program = parse_source("let list = [10]").unwrap();

    match &program.statements[0] {
        Stmt::Declaration(declaration) => {
            assert_eq!(numbers(&declaration.number_set), vec!["10"]);
        }
        other => panic!("Expected declaration, got {:?}", other),
    }
}

#[test]
fn test_declaration_requires_plain_equals() {
    let error = parse_source("let list == [1]").unwrap_err();

    assert_eq!(
        error.get_impl(),
        &ErrorImpl::UnexpectedToken {
            expected: Expected::token(TokenKind::Operator, Some("=")),
            found_kind: TokenKind::Operator,
            found: "==".to_string(),
        }
    );
}

#[test]
fn test_declaration_only_consumes_semicolon() {
    // A trailing `,` is not taken as the optional terminator.
    let error = parse_source("let list = [1],").unwrap_err();

    assert_eq!(
        error.get_impl(),
        &ErrorImpl::UnexpectedToken {
            expected: Expected::Statement,
            found_kind: TokenKind::Delimiter,
            found: ",".to_string(),
        }
    );
}

#[test]
fn test_empty_number_set_is_rejected() {
    let error = parse_source("let list = [];").unwrap_err();

    assert_eq!(error.kind(), ErrorKind::Syntax);
    assert_eq!(
        error.get_impl(),
        &ErrorImpl::UnexpectedToken {
            expected: Expected::token(TokenKind::Number, None),
            found_kind: TokenKind::Delimiter,
            found: "]".to_string(),
        }
    );
    assert_eq!(error.get_position().0, 12);
}

#[test]
fn test_trailing_comma_in_number_set() {
    let error = parse_source("let list = [1, 2,]").unwrap_err();

    assert_eq!(
        error.get_impl(),
        &ErrorImpl::UnexpectedToken {
            expected: Expected::token(TokenKind::Number, None),
            found_kind: TokenKind::Delimiter,
            found: "]".to_string(),
        }
    );
}

#[test]
fn test_parse_assignment() {
    let program = parse_source("total = 42;").unwrap();

    match &program.statements[0] {
        Stmt::Assignment(assignment) => {
            assert_eq!(assignment.target.value.as_text(), Some("total"));
            match &assignment.value {
                Addition::Term(Term::Number(token)) => {
                    assert_eq!(token.value.to_string(), "42")
                }
                other => panic!("Expected number term, got {:?}", other),
            }
        }
        other => panic!("Expected assignment, got {:?}", other),
    }
}

#[test]
fn test_assignment_requires_semicolon() {
    let error = parse_source("total = a + b").unwrap_err();

    assert_eq!(
        error.get_impl(),
        &ErrorImpl::UnexpectedEndOfInput {
            expected: delimiter(";"),
        }
    );
}

#[test]
fn test_addition_is_left_associative() {
    let program = parse_source("total = a + b + c;").unwrap();

    let Stmt::Assignment(assignment) = &program.statements[0] else {
        panic!("Expected assignment");
    };

    match &assignment.value {
        Addition::Sum { left, right, operator } => {
            assert_eq!(operator.value.as_text(), Some("+"));
            assert_eq!(right.token().value.as_text(), Some("c"));
            match left.as_ref() {
                Addition::Sum { left, right, .. } => {
                    assert!(matches!(
                        left.as_ref(),
                        Addition::Term(Term::Identifier(token)) if token.value.as_text() == Some("a")
                    ));
                    assert_eq!(right.token().value.as_text(), Some("b"));
                }
                other => panic!("Expected nested sum, got {:?}", other),
            }
        }
        other => panic!("Expected sum, got {:?}", other),
    }

    assert_eq!(term_names(&assignment.value), vec!["a", "b", "c"]);
}

#[test]
fn test_addition_mixes_numbers_and_identifiers() {
    let program = parse_source("count = count + 1;").unwrap();

    let Stmt::Assignment(assignment) = &program.statements[0] else {
        panic!("Expected assignment");
    };
    let Addition::Sum { left, right, .. } = &assignment.value else {
        panic!("Expected sum");
    };

    assert!(matches!(left.as_ref(), Addition::Term(Term::Identifier(_))));
    assert!(matches!(right, Term::Number(_)));
}

#[test]
fn test_addition_rejects_other_operators() {
    let error = parse_source("total = a - b;").unwrap_err();

    assert_eq!(
        error.get_impl(),
        &ErrorImpl::UnexpectedToken {
            expected: delimiter(";"),
            found_kind: TokenKind::Operator,
            found: "-".to_string(),
        }
    );
}

#[test]
fn test_addition_rejects_missing_operand() {
    let error = parse_source("total = a + ;").unwrap_err();

    assert_eq!(
        error.get_impl(),
        &ErrorImpl::UnexpectedToken {
            expected: Expected::Term,
            found_kind: TokenKind::Delimiter,
            found: ";".to_string(),
        }
    );
}

#[test]
fn test_parse_for_loop() {
    let source = "for item in [5, 8, 12]:\n    total = total + item;\n    count = count + 1;";
    let program = parse_source(source).unwrap();

    assert_eq!(program.statements.len(), 1);
    match &program.statements[0] {
        Stmt::ForLoop(for_loop) => {
            assert_eq!(for_loop.variable.value.as_text(), Some("item"));
            assert_eq!(numbers(&for_loop.iterable), vec!["5", "8", "12"]);
            assert_eq!(for_loop.body.target.value.as_text(), Some("total"));
            assert_eq!(for_loop.count.target.value.as_text(), Some("count"));
            assert_eq!(term_names(&for_loop.count.value), vec!["count", "1"]);
        }
        other => panic!("Expected for loop, got {:?}", other),
    }
}

#[test]
fn test_for_loop_requires_count() {
    let error = parse_source("for item in [1]: total = total + item;").unwrap_err();

    assert_eq!(
        error.get_impl(),
        &ErrorImpl::UnexpectedEndOfInput {
            expected: Expected::token(TokenKind::Identifier, None),
        }
    );
}

#[test]
fn test_for_loop_requires_number_set() {
    let error = parse_source("for item in list: a = a; b = b;").unwrap_err();

    assert_eq!(
        error.get_impl(),
        &ErrorImpl::UnexpectedToken {
            expected: delimiter("["),
            found_kind: TokenKind::Identifier,
            found: "list".to_string(),
        }
    );
}

#[test]
fn test_parse_return() {
    let program = parse_source("return total / count").unwrap();

    match &program.statements[0] {
        Stmt::Return(stmt) => {
            assert_eq!(stmt.division.left.value.as_text(), Some("total"));
            assert_eq!(stmt.division.operator.value.as_text(), Some("/"));
            assert_eq!(stmt.division.right.value.as_text(), Some("count"));
        }
        other => panic!("Expected return, got {:?}", other),
    }
}

#[test]
fn test_return_rejects_numbers() {
    let error = parse_source("return total / 2").unwrap_err();

    assert_eq!(
        error.get_impl(),
        &ErrorImpl::UnexpectedToken {
            expected: Expected::token(TokenKind::Identifier, None),
            found_kind: TokenKind::Number,
            found: "2".to_string(),
        }
    );
}

#[test]
fn test_statement_dispatch_rejects_other_tokens() {
    let cases = [
        ("[1]", TokenKind::Delimiter, "["),
        ("5 = x;", TokenKind::Number, "5"),
        ("in x", TokenKind::In, "in"),
        ("\"s\"", TokenKind::String, "\"s\""),
    ];
    for (source, found_kind, found) in cases {
        let error = parse_source(source).unwrap_err();

        assert_eq!(
            error.get_impl(),
            &ErrorImpl::UnexpectedToken {
                expected: Expected::Statement,
                found_kind,
                found: found.to_string(),
            },
            "{source}"
        );
    }
}

#[test]
fn test_parse_empty_program() {
    let program = parse_source("").unwrap();

    assert!(program.statements.is_empty());
    assert_eq!(program.to_string(), "Program[]");
}

#[test]
fn test_program_keeps_statement_order() {
    let program = parse_source("a = 1; let l = [1] return a / b b = a;").unwrap();
    let names: Vec<_> = program.statements.iter().map(stmt_name).collect();

    assert_eq!(names, vec!["Assignment", "Declaration", "ReturnStmt", "Assignment"]);
}

#[test]
fn test_program_display() {
    let program = parse_source("let list = [5, 8]; total = total + item; return total / count").unwrap();

    assert_eq!(
        program.to_string(),
        "Program[Declaration(list, NumberSet[5, 8]), Assignment(total, Addition(total, item)), ReturnStmt(Division(total, count))]"
    );
}

#[test]
fn test_cursor_operations() {
    let mut parser = parser_for("let list");

    assert_eq!(parser.peek_kind(), Some(TokenKind::Let));
    assert_eq!(parser.peek_kind(), Some(TokenKind::Let));
    assert!(parser.next_is(TokenKind::Let, Some("let")));
    assert!(!parser.next_is(TokenKind::Let, Some("for")));

    let token = parser.advance().unwrap();
    assert_eq!(token.kind, TokenKind::Let);

    let error = parser.expect(TokenKind::Number, None).unwrap_err();
    assert_eq!(
        error.get_impl(),
        &ErrorImpl::UnexpectedToken {
            expected: Expected::token(TokenKind::Number, None),
            found_kind: TokenKind::Identifier,
            found: "list".to_string(),
        }
    );
    // A failed expect leaves the cursor where it was.
    assert_eq!(parser.peek().and_then(|token| token.value.as_text()), Some("list"));

    let token = parser.expect(TokenKind::Identifier, Some("list")).unwrap();
    assert_eq!(token.value.as_text(), Some("list"));

    assert!(!parser.has_tokens());
    assert!(parser.peek().is_none());
    assert!(parser.advance().is_none());
}

#[test]
fn test_end_of_input_position() {
    let mut parser = parser_for("let list");
    parser.advance();
    parser.advance();

    let error = parser.expect(TokenKind::Operator, Some("=")).unwrap_err();
    assert_eq!(error.get_position().0, 8);
    assert_eq!(
        error.to_string(),
        "expected Operator `=`, but reached end of input"
    );
}

#[test]
fn test_statement_lookup_table() {
    let parser = parser_for("");
    let lookup = parser.get_stmt_lookup();

    assert_eq!(lookup.len(), 4);
    for kind in [TokenKind::Let, TokenKind::For, TokenKind::Return, TokenKind::Identifier] {
        assert!(lookup.contains_key(&kind));
    }
}
