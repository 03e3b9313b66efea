//! The diagnostic record and its severity.

use std::fmt;

use crate::ErrorCode;

/// Severity level for diagnostics, least to most severe.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub enum Severity {
    /// Recorded for tooling, never shown.
    Hidden,
    Info,
    Warning,
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Hidden => write!(f, "hidden"),
            Severity::Info => write!(f, "info"),
            Severity::Warning => write!(f, "warning"),
            Severity::Error => write!(f, "error"),
        }
    }
}

/// A diagnostic attached to a single green node.
///
/// `offset` and `width` are byte positions relative to the start of the
/// owning node's full text. `args` are the message arguments, in the order
/// the code's message template expects them.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[must_use = "diagnostics should be attached to a node, not silently dropped"]
pub struct DiagnosticInfo {
    pub code: ErrorCode,
    pub severity: Severity,
    pub offset: u32,
    pub width: u32,
    pub args: Vec<String>,
}

impl DiagnosticInfo {
    /// Create a record with the code's default severity, covering nothing.
    pub fn new(code: ErrorCode) -> Self {
        DiagnosticInfo {
            code,
            severity: code.default_severity(),
            offset: 0,
            width: 0,
            args: Vec::new(),
        }
    }

    /// Create an error record.
    #[cold]
    pub fn error(code: ErrorCode) -> Self {
        Self::new(code).with_severity(Severity::Error)
    }

    /// Create a warning record.
    #[cold]
    pub fn warning(code: ErrorCode) -> Self {
        Self::new(code).with_severity(Severity::Warning)
    }

    /// Position the record within its node.
    pub fn at(mut self, offset: u32, width: u32) -> Self {
        self.offset = offset;
        self.width = width;
        self
    }

    /// Append a message argument.
    pub fn with_arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn with_severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }

    /// Exclusive end, relative to the owning node.
    #[inline]
    pub fn end(&self) -> u32 {
        self.offset.saturating_add(self.width)
    }

    #[inline]
    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }

    #[inline]
    pub fn is_warning(&self) -> bool {
        self.severity == Severity::Warning
    }
}

impl fmt::Display for DiagnosticInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}[{}] @{}+{}",
            self.severity, self.code, self.offset, self.width
        )?;
        if !self.args.is_empty() {
            write!(f, ": {}", self.args.join(", "))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests;
