//! Error codes for syntax diagnostics.
//!
//! The first digit after the prefix names the phase that produced the code.

use std::fmt;

use crate::Severity;

/// Error codes for syntax diagnostics.
///
/// Format: `E####` for errors, `W####` for warnings. First digit:
/// - 0: lexer
/// - 1: parser
/// - 2: trivia (comments, skipped text)
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ErrorCode {
    // Lexer Errors (E0xxx)
    /// Unterminated string literal
    E0001,
    /// Invalid character in source
    E0002,
    /// Invalid number literal
    E0003,
    /// Unterminated block comment
    E0004,

    // Parser Errors (E1xxx)
    /// Unexpected token
    E1001,
    /// Expected expression
    E1002,
    /// Unclosed delimiter
    E1003,
    /// Expected identifier
    E1004,
    /// Missing token was synthesized
    E1005,

    // Trivia Errors (E2xxx)
    /// Tokens skipped during error recovery
    E2001,
    /// Malformed doc comment
    E2002,

    // Warnings
    /// Mixed tabs and spaces in indentation
    W0001,
    /// Empty statement
    W1001,
}

impl ErrorCode {
    /// The code as written in diagnostics (e.g., `"E1001"`).
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::E0001 => "E0001",
            ErrorCode::E0002 => "E0002",
            ErrorCode::E0003 => "E0003",
            ErrorCode::E0004 => "E0004",
            ErrorCode::E1001 => "E1001",
            ErrorCode::E1002 => "E1002",
            ErrorCode::E1003 => "E1003",
            ErrorCode::E1004 => "E1004",
            ErrorCode::E1005 => "E1005",
            ErrorCode::E2001 => "E2001",
            ErrorCode::E2002 => "E2002",
            ErrorCode::W0001 => "W0001",
            ErrorCode::W1001 => "W1001",
        }
    }

    /// Check if this is a lexer code (`E0xxx`/`W0xxx`).
    pub fn is_lexer_error(&self) -> bool {
        self.phase_digit() == b'0'
    }

    /// Check if this is a parser code (`E1xxx`/`W1xxx`).
    pub fn is_parser_error(&self) -> bool {
        self.phase_digit() == b'1'
    }

    /// Check if this is a trivia code (`E2xxx`).
    pub fn is_trivia_error(&self) -> bool {
        self.phase_digit() == b'2'
    }

    /// Check if this is a warning code (`W` prefix).
    pub fn is_warning(&self) -> bool {
        self.as_str().starts_with('W')
    }

    /// Severity a record with this code gets unless overridden.
    pub fn default_severity(&self) -> Severity {
        if self.is_warning() {
            Severity::Warning
        } else {
            Severity::Error
        }
    }

    fn phase_digit(&self) -> u8 {
        self.as_str().as_bytes()[1]
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests;
