use std::rc::Rc;

use lazy_static::lazy_static;
use num_bigint::BigUint;
use regex::Regex;

use crate::{errors::errors::{Error, ErrorImpl}, Position, Span, MK_PATTERN, MK_TEXT_HANDLER, MK_TOKEN};

use super::tokens::{Token, TokenKind, TokenValue, RESERVED_LOOKUP};

/// Consumes `matched` (the text the pattern matched at the lexer's position),
/// either pushing a token or skipping it.
pub type RegexHandler = fn(&mut Lexer, &str) -> Result<(), Error>;

#[derive(Clone)]
pub struct RegexPattern {
    regex: Regex,
    handler: RegexHandler,
}

impl RegexPattern {
    /// Anchors `pattern` to the current position and pairs it with `handler`.
    pub fn new(pattern: &str, handler: RegexHandler) -> Result<RegexPattern, regex::Error> {
        Ok(RegexPattern {
            regex: Regex::new(&format!("^(?:{})", pattern))?,
            handler,
        })
    }
}

lazy_static! {
    /// The language's token classes, in priority order. Earlier patterns win
    /// ties, so keywords shadow identifiers and `==` shadows `=`.
    pub static ref DEFAULT_PATTERNS: Vec<RegexPattern> = vec![
        MK_PATTERN!(&keyword_pattern(), keyword_handler),
        MK_PATTERN!(r"[a-zA-Z_]\w*", symbol_handler),
        MK_PATTERN!(r"[0-9]+", number_handler),
        MK_PATTERN!(r"==|=|\+|-|\*|/", MK_TEXT_HANDLER!(TokenKind::Operator)),
        MK_PATTERN!(r"[\[\](),;.:]", MK_TEXT_HANDLER!(TokenKind::Delimiter)),
        MK_PATTERN!(r#""[^"]*""#, MK_TEXT_HANDLER!(TokenKind::String)),
        MK_PATTERN!(r"\n", skip_handler),
        MK_PATTERN!(r"[ \t\r]+", skip_handler),
        MK_PATTERN!(r"(?s).", mismatch_handler),
    ];
}

/// Whole-word alternation over the reserved words.
fn keyword_pattern() -> String {
    let mut words: Vec<&str> = RESERVED_LOOKUP.keys().copied().collect();
    words.sort_unstable();

    let words: Vec<String> = words.into_iter().map(regex::escape).collect();
    format!(r"(?:{})\b", words.join("|"))
}

pub struct Lexer {
    tokens: Vec<Token>,
    source: String,
    pos: usize,
    file: Rc<String>,
}

impl Lexer {
    pub fn new(source: String, file: Option<String>) -> Lexer {
        let file_name = if let Some(file) = file {
            Rc::new(file)
        } else {
            Rc::new(String::from("shell"))
        };

        Lexer {
            pos: 0,
            tokens: vec![],
            source,
            file: file_name,
        }
    }

    pub fn advance_n(&mut self, n: usize) {
        self.pos += n;
    }

    pub fn push(&mut self, token: Token) {
        self.tokens.push(token);
    }

    /// Pushes a token spanning the next `len` bytes and steps over them.
    pub fn push_value(&mut self, kind: TokenKind, value: TokenValue, len: usize) {
        let span = self.span_of(len);
        self.push(MK_TOKEN!(kind, value, span));
        self.advance_n(len);
    }

    pub fn push_text(&mut self, kind: TokenKind, matched: &str) {
        self.push_value(kind, TokenValue::Text(String::from(matched)), matched.len());
    }

    pub fn position(&self) -> Position {
        Position(self.pos as u32, Rc::clone(&self.file))
    }

    pub fn span_of(&self, len: usize) -> Span {
        Span {
            start: self.position(),
            end: Position((self.pos + len) as u32, Rc::clone(&self.file)),
        }
    }

    pub fn at(&self) -> Option<char> {
        self.remainder().chars().next()
    }

    /// The character just before the current position, if any.
    pub fn previous(&self) -> Option<char> {
        self.source[..self.pos].chars().next_back()
    }

    pub fn remainder(&self) -> &str {
        &self.source[self.pos..]
    }

    pub fn at_eof(&self) -> bool {
        self.pos >= self.source.len()
    }
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

fn keyword_handler(lexer: &mut Lexer, matched: &str) -> Result<(), Error> {
    // A keyword glued to the end of a number (`1let`) has no word boundary on its left.
    let glued = lexer.previous().is_some_and(is_word_char);

    let kind = match RESERVED_LOOKUP.get(matched) {
        Some(kind) if !glued => *kind,
        _ => TokenKind::Identifier,
    };

    lexer.push_text(kind, matched);
    Ok(())
}

fn symbol_handler(lexer: &mut Lexer, matched: &str) -> Result<(), Error> {
    lexer.push_text(TokenKind::Identifier, matched);
    Ok(())
}

fn number_handler(lexer: &mut Lexer, matched: &str) -> Result<(), Error> {
    // The pattern only admits ASCII digits, and the value is unbounded.
    let value = matched
        .bytes()
        .fold(BigUint::default(), |value, digit| value * 10u32 + u32::from(digit - b'0'));

    lexer.push_value(TokenKind::Number, TokenValue::Integer(value), matched.len());
    Ok(())
}

fn skip_handler(lexer: &mut Lexer, matched: &str) -> Result<(), Error> {
    lexer.advance_n(matched.len());
    Ok(())
}

fn mismatch_handler(lexer: &mut Lexer, matched: &str) -> Result<(), Error> {
    Err(unrecognised(lexer, matched.chars().next()))
}

fn unrecognised(lexer: &Lexer, character: Option<char>) -> Error {
    Error::new(
        ErrorImpl::UnrecognisedToken { character: character.unwrap_or('\0') },
        lexer.position(),
    )
}

/// Tokenizes `source` with the language's default pattern table.
pub fn tokenize(source: String, file: Option<String>) -> Result<Vec<Token>, Error> {
    tokenize_with(source, file, &DEFAULT_PATTERNS)
}

/// Tokenizes `source`, trying `patterns` in order at every position.
///
/// Stops at the first character no pattern accepts, or at the first handler error.
pub fn tokenize_with(
    source: String,
    file: Option<String>,
    patterns: &[RegexPattern],
) -> Result<Vec<Token>, Error> {
    let mut lex = Lexer::new(source, file);

    while !lex.at_eof() {
        let matched = patterns.iter().find_map(|pattern| {
            pattern
                .regex
                .find(lex.remainder())
                .filter(|found| found.end() > found.start())
                .map(|found| (pattern.handler, String::from(found.as_str())))
        });

        match matched {
            Some((handler, text)) => handler(&mut lex, &text)?,
            None => return Err(unrecognised(&lex, lex.at())),
        }
    }

    Ok(lex.tokens)
}
