//! Diagnostic sinks handed to the scanner.
//!
//! The scanner never decides what an error means for the run as a whole.
//! It hands each error to an `ErrorReporter` and keeps going; the reporter
//! is where a caller tracks whether anything went wrong.

use crate::source_line;

use super::errors::{Error, ErrorTip};

pub trait ErrorReporter {
    /// Called once per lexical error, in source order.
    fn report(&mut self, error: Error);
}

/// Prints errors to stderr as `[line N] Error: message`.
#[derive(Debug, Default)]
pub struct ConsoleReporter {
    source: Option<String>,
    had_error: bool,
}

impl ConsoleReporter {
    pub fn new() -> Self {
        ConsoleReporter::default()
    }

    /// Also prints the offending source line under each error.
    pub fn with_source(source: String) -> Self {
        ConsoleReporter {
            source: Some(source),
            had_error: false,
        }
    }

    pub fn had_error(&self) -> bool {
        self.had_error
    }

    /// Clears the error flag, e.g. between lines of an interactive session.
    pub fn reset(&mut self) {
        self.had_error = false;
    }

    pub fn render(&self, error: &Error) -> String {
        /*
            [line 3] Error: Unterminated string. (Add a closing `"` to end the string)
              |
            3 | print "abc
        */

        let mut rendered = match error.get_tip() {
            ErrorTip::None => format!("[line {}] Error: {}", error.get_line(), error),
            tip => format!("[line {}] Error: {} ({})", error.get_line(), error, tip),
        };

        let excerpt = self
            .source
            .as_deref()
            .and_then(|source| source_line(source, error.get_line()));

        if let Some(line_text) = excerpt {
            let line_str = error.get_line().to_string();
            let padding = line_str.len() + 2;

            rendered.push('\n');
            rendered.push_str(&format!("{:>padding$}", "|"));
            rendered.push('\n');
            rendered.push_str(&format!("{} | {}", line_str, line_text.trim()));
        }

        rendered
    }
}

impl ErrorReporter for ConsoleReporter {
    fn report(&mut self, error: Error) {
        eprintln!("{}", self.render(&error));
        self.had_error = true;
    }
}

/// Keeps every reported error for later inspection.
#[derive(Debug, Default)]
pub struct ErrorCollector {
    errors: Vec<Error>,
}

impl ErrorCollector {
    pub fn new() -> Self {
        ErrorCollector::default()
    }

    pub fn errors(&self) -> &[Error] {
        &self.errors
    }

    pub fn had_error(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn into_errors(self) -> Vec<Error> {
        self.errors
    }
}

impl ErrorReporter for ErrorCollector {
    fn report(&mut self, error: Error) {
        self.errors.push(error);
    }
}
