#![allow(clippy::module_inception)]

pub mod errors;
pub mod lexer;
pub mod macros;

extern crate regex;

pub use errors::{
    errors::{Error, ErrorImpl, ErrorTip},
    reporter::{ConsoleReporter, ErrorCollector, ErrorReporter},
};
pub use lexer::{
    lexer::{tokenize, Scanner},
    tokens::{Literal, Token, TokenKind},
};

/// Returns the text of the 1-based `line` of `source`, without its line
/// terminator, or `None` if the source has fewer lines.
pub fn source_line(source: &str, line: usize) -> Option<&str> {
    if line == 0 {
        return None;
    }

    source
        .split('\n')
        .nth(line - 1)
        .map(|text| text.strip_suffix('\r').unwrap_or(text))
}
