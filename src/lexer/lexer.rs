use lazy_static::lazy_static;
use regex::Regex;
use tracing::{debug, trace};

use crate::{
    errors::{
        errors::{Error, ErrorImpl},
        reporter::ErrorReporter,
    },
    MK_TOKEN,
};

use super::tokens::{Literal, Token, TokenKind, RESERVED_LOOKUP};

lazy_static! {
    static ref NUMBER_PATTERN: Regex = Regex::new("^[0-9]+(\\.[0-9]+)?").unwrap();
    static ref SYMBOL_PATTERN: Regex = Regex::new("^[a-zA-Z_][a-zA-Z0-9_]*").unwrap();
}

/// Single pass scanner over one source text.
///
/// `start` and `current` are byte offsets into `source` and always sit on
/// a char boundary.
pub struct Scanner<'r> {
    source: String,
    tokens: Vec<Token>,
    start: usize,
    current: usize,
    line: usize,
    reporter: &'r mut dyn ErrorReporter,
}

impl<'r> Scanner<'r> {
    pub fn new(source: String, reporter: &'r mut dyn ErrorReporter) -> Scanner<'r> {
        Scanner {
            source,
            tokens: vec![],
            start: 0,
            current: 0,
            line: 1,
            reporter,
        }
    }

    pub fn scan_tokens(mut self) -> Vec<Token> {
        while !self.at_eof() {
            self.start = self.current;
            self.scan_token();
        }

        self.tokens.push(MK_TOKEN!(TokenKind::EOF, String::new(), None, self.line));
        self.tokens
    }

    fn scan_token(&mut self) {
        let Some(c) = self.advance() else {
            return;
        };

        match c {
            '(' => self.add_token(TokenKind::LeftParen),
            ')' => self.add_token(TokenKind::RightParen),
            '{' => self.add_token(TokenKind::LeftBrace),
            '}' => self.add_token(TokenKind::RightBrace),
            ',' => self.add_token(TokenKind::Comma),
            '.' => self.add_token(TokenKind::Dot),
            '-' => self.add_token(TokenKind::Minus),
            '+' => self.add_token(TokenKind::Plus),
            ';' => self.add_token(TokenKind::Semicolon),
            '*' => self.add_token(TokenKind::Star),
            '!' => self.add_either('=', TokenKind::BangEqual, TokenKind::Bang),
            '=' => self.add_either('=', TokenKind::EqualEqual, TokenKind::Equal),
            '<' => self.add_either('=', TokenKind::LessEqual, TokenKind::Less),
            '>' => self.add_either('=', TokenKind::GreaterEqual, TokenKind::Greater),
            '/' => {
                if self.match_next('/') {
                    self.line_comment();
                } else if self.match_next('*') {
                    self.block_comment();
                } else {
                    self.add_token(TokenKind::Slash);
                }
            }
            ' ' | '\r' | '\t' => {}
            '\n' => self.line += 1,
            '"' => self.string(),
            c if c.is_ascii_digit() => self.number(),
            c if c.is_ascii_alphabetic() || c == '_' => self.symbol(),
            c => self.error(ErrorImpl::UnexpectedCharacter { character: c }),
        }
    }

    fn line_comment(&mut self) {
        // The newline is left for the main loop so it bumps the line count.
        while !self.at_eof() && self.peek() != Some('\n') {
            self.advance();
        }
    }

    fn block_comment(&mut self) {
        while !self.at_eof() {
            if self.peek() == Some('*') && self.peek_next() == Some('/') {
                self.advance();
                self.advance();
                return;
            }

            if self.peek() == Some('\n') {
                self.line += 1;
            }
            self.advance();
        }

        self.error(ErrorImpl::UnterminatedBlockComment);
    }

    fn string(&mut self) {
        while !self.at_eof() && self.peek() != Some('"') {
            if self.peek() == Some('\n') {
                self.line += 1;
            }
            self.advance();
        }

        if self.at_eof() {
            self.error(ErrorImpl::UnterminatedString);
            return;
        }

        // Closing quote
        self.advance();

        let value = self.source[self.start + 1..self.current - 1].to_string();
        self.add_token_with_literal(TokenKind::String, Some(Literal::String(value)));
    }

    fn number(&mut self) {
        if let Some(matched) = NUMBER_PATTERN.find(self.remainder()) {
            self.current = self.start + matched.end();
        }

        let parsed = self.lexeme().parse::<f64>();
        match parsed {
            Ok(value) => {
                self.add_token_with_literal(TokenKind::Number, Some(Literal::Number(value)))
            }
            Err(_) => {
                let lexeme = self.lexeme().to_string();
                self.error(ErrorImpl::InvalidNumberLiteral { lexeme });
            }
        }
    }

    fn symbol(&mut self) {
        if let Some(matched) = SYMBOL_PATTERN.find(self.remainder()) {
            self.current = self.start + matched.end();
        }

        let kind = RESERVED_LOOKUP
            .get(self.lexeme())
            .copied()
            .unwrap_or(TokenKind::Identifier);
        self.add_token(kind);
    }

    fn add_either(&mut self, expected: char, matched: TokenKind, otherwise: TokenKind) {
        if self.match_next(expected) {
            self.add_token(matched);
        } else {
            self.add_token(otherwise);
        }
    }

    fn add_token(&mut self, kind: TokenKind) {
        self.add_token_with_literal(kind, None);
    }

    fn add_token_with_literal(&mut self, kind: TokenKind, literal: Option<Literal>) {
        let lexeme = self.lexeme().to_string();
        trace!(%kind, lexeme = %lexeme, line = self.line, "token");
        self.tokens.push(MK_TOKEN!(kind, lexeme, literal, self.line));
    }

    fn error(&mut self, error: ErrorImpl) {
        debug!(line = self.line, error = %error, "lexical error");
        self.reporter.report(Error::new(error, self.line));
    }

    fn match_next(&mut self, expected: char) -> bool {
        if self.peek() != Some(expected) {
            return false;
        }

        self.current += expected.len_utf8();
        true
    }

    fn advance(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.current += c.len_utf8();
        Some(c)
    }

    fn peek(&self) -> Option<char> {
        self.remainder_from(self.current).chars().next()
    }

    fn peek_next(&self) -> Option<char> {
        let mut chars = self.remainder_from(self.current).chars();
        chars.next();
        chars.next()
    }

    fn lexeme(&self) -> &str {
        &self.source[self.start..self.current]
    }

    fn remainder(&self) -> &str {
        self.remainder_from(self.start)
    }

    fn remainder_from(&self, pos: usize) -> &str {
        &self.source[pos..]
    }

    fn at_eof(&self) -> bool {
        self.current >= self.source.len()
    }
}

/// Scans `source` into tokens, reporting lexical errors to `reporter`.
///
/// Always returns a sequence ending in exactly one `EOF` token, even when
/// errors were reported.
#[tracing::instrument(level = "debug", skip_all, fields(len = source.len()))]
pub fn tokenize(source: String, reporter: &mut dyn ErrorReporter) -> Vec<Token> {
    let tokens = Scanner::new(source, reporter).scan_tokens();

    debug!(count = tokens.len(), "scan complete");
    tokens
}
