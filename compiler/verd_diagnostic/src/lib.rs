//! Diagnostic records attached to green tree nodes.
//!
//! A [`DiagnosticInfo`] is created by the lexer or parser and attached to
//! exactly one node. It never moves afterwards: its `offset` is relative to
//! the start of that node's full text (leading trivia included), so the
//! record stays valid when the node is shared between trees.
//!
//! Turning a record into a rendered message (templates, source snippets)
//! belongs to the reporting layer, not here.

mod diagnostic;
mod error_code;

pub use diagnostic::{DiagnosticInfo, Severity};
pub use error_code::ErrorCode;
