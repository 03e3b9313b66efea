//! Verdant green trees.
//!
//! Green nodes are immutable, position-independent, and shared through
//! `Arc`, so identical subtrees can appear in many trees and many threads
//! at once. Every node caches [`NodeFlags`] computed from its children when
//! it is built; in particular `CONTAINS_DIAGNOSTICS` lets
//! [`GreenNode::all_diagnostics`] skip clean subtrees without looking
//! inside them.
//!
//! # Node shapes
//!
//! - **Branch**: a structural node with a fixed number of slots, any of
//!   which may be absent.
//! - **Token**: a leaf with text plus optional leading and trailing trivia.
//! - **Trivia**: whitespace, comments, skipped text. Trivia is an ordinary
//!   node: a trivia list is a branch of trivia entries, and skipped text is
//!   a branch of tokens.
//!
//! Build trees with [`GreenBuilder`], or directly with the `GreenNode`
//! constructors for tokens and trivia.

mod builder;
mod flags;
mod kind;
mod node;
mod tracing_setup;

pub use builder::{BuildError, GreenBuilder};
pub use flags::NodeFlags;
pub use kind::SyntaxKind;
pub use node::GreenNode;
pub use tracing_setup::init_tracing;

pub use verd_diagnostic::{DiagnosticInfo, ErrorCode, Severity};
pub use verd_walk::{DiagnosticIter, DiagnosticList, GreenElement, WalkState};
