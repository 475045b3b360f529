//! Utility macros for the front end.
//!
//! This module defines helper macros used by the lexer:
//!
//! - `MK_TOKEN!` - Creates a Token instance
//! - `MK_PATTERN!` - Compiles an anchored RegexPattern
//! - `MK_TEXT_HANDLER!` - Creates a lexer handler that keeps the matched text
//!
//! These macros reduce boilerplate in the pattern table.

/// Creates a Token instance.
///
/// # Arguments
///
/// * `$kind` - The TokenKind
/// * `$value` - The token's TokenValue
/// * `$span` - The source span
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(TokenKind::Number, TokenValue::Integer(42), span);
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $value:expr, $span:expr) => {
        $crate::lexer::tokens::Token {
            kind: $kind,
            value: $value,
            span: $span,
        }
    };
}

/// Compiles a pattern for the lexer's ordered pattern table.
///
/// The regex is anchored so it only ever matches at the lexer's current
/// position. Only meant for literal patterns known to be valid.
///
/// # Example
///
/// ```ignore
/// MK_PATTERN!(r"[0-9]+", number_handler)
/// ```
#[macro_export]
macro_rules! MK_PATTERN {
    ($regex:expr, $handler:expr) => {
        $crate::lexer::lexer::RegexPattern::new($regex, $handler)
            .expect("invalid token pattern")
    };
}

/// Creates a lexer handler that emits the matched text as a token of `$kind`
/// and advances the lexer past it.
///
/// # Example
///
/// ```ignore
/// MK_PATTERN!(r"==|=|\+", MK_TEXT_HANDLER!(TokenKind::Operator))
/// ```
#[macro_export]
macro_rules! MK_TEXT_HANDLER {
    ($kind:expr) => {
        |lexer: &mut $crate::lexer::lexer::Lexer, matched: &str| {
            lexer.push_text($kind, matched);
            Ok(())
        }
    };
}
