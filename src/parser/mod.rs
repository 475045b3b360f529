//! Parser module for building the parse tree.
//!
//! This module contains the recursive-descent parser that transforms a
//! sequence of tokens into a `Program`. The grammar is LL(1): every
//! production is picked from the kind of the next token alone, and there
//! is no backtracking. It handles:
//!
//! - Statement dispatch through a token-kind lookup table
//! - Declarations, for loops, assignments and return statements
//! - Number sets and left-associative additions
//! - Fail-fast error reporting at the first grammar violation

pub mod expr;
pub mod lookups;
pub mod parser;
pub mod stmt;

#[cfg(test)]
mod tests;
