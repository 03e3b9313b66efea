//! Diagnostic enumeration over immutable green trees.
//!
//! A green tree caches, on every node, whether anything in its subtree
//! carries a diagnostic. [`DiagnosticIter`] uses that bit to skip clean
//! subtrees wholesale and walks the rest in source order:
//!
//! - a node's own diagnostics come before its children's
//! - children are visited left to right, absent slots skipped
//! - a token expands to leading trivia, the token, then trailing trivia
//!
//! The walk keeps an explicit frame stack instead of recursing, so tree
//! depth is bounded by heap, not by the call stack. Nothing is collected up
//! front: each [`DiagnosticIter::move_next`] does just enough work to reach
//! the next diagnostic.
//!
//! ```text
//! let list = DiagnosticList::of(&root);
//! if list.any(|d| d.is_error()) {
//!     for diagnostic in list {
//!         report(diagnostic);
//!     }
//! }
//! ```
//!
//! # Tree contract
//!
//! The summary bit is trusted, never re-derived. A tree that reports
//! `contains_diagnostics() == false` for a subtree that does carry
//! diagnostics will silently under-report. Keeping the bit correct is the
//! tree builder's job; see [`GreenElement`].

mod element;
mod iter;
mod list;

#[cfg(test)]
mod test_tree;

pub use element::{GreenElement, NodeShape};
pub use iter::{DiagnosticIter, WalkState, INITIAL_STACK_DEPTH};
pub use list::DiagnosticList;
