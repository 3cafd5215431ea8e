//! Error types and error reporting for the scanner.
//!
//! This module defines the lexical errors the scanner can detect and the
//! sinks they are reported through. It includes:
//!
//! - Error structures carrying the source line they were found on
//! - One error variant per lexical error category
//! - Reporter implementations for the console and for collecting errors
//! - Helpful error messages and suggestions

pub mod errors;
pub mod reporter;
