//! Lexical analysis module for the front end.
//!
//! This module contains the lexer (tokenizer) that converts source text
//! into a flat sequence of tokens for parsing. It handles:
//!
//! - Tokenization using an ordered table of anchored regex patterns
//! - Recognition of keywords, identifiers, integers, operators and delimiters
//! - Token position tracking for error reporting
//! - Whitespace and newline skipping

pub mod lexer;
pub mod tokens;
