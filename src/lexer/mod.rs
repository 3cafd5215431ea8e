//! Lexical analysis module.
//!
//! This module contains the scanner that converts source code into a
//! sequence of tokens for parsing. It handles:
//!
//! - Single and double character operators with one character of lookahead
//! - Recognition of keywords, identifiers, numbers and strings
//! - Line and block comments
//! - Line tracking for error reporting

pub mod lexer;
pub mod tokens;
