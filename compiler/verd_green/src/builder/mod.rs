//! Push-down builder for green trees.
//!
//! The builder never recurses: open nodes live on an explicit stack and
//! finished children in a flat buffer, so arbitrarily deep trees can be
//! built on any thread.

use std::sync::Arc;

use thiserror::Error;
use tracing::debug;
use verd_diagnostic::DiagnosticInfo;

use crate::{GreenNode, SyntaxKind};

/// Misuse of a [`GreenBuilder`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BuildError {
    /// `finish_node` or `attach_diagnostic` with nothing open.
    #[error("no open node")]
    NoOpenNode,
    /// `finish` while nodes were still open.
    #[error("{open} node(s) still open at finish")]
    UnclosedNodes { open: usize },
    /// `finish` with nothing built, or with only an absent slot.
    #[error("tree has no root")]
    NoRoot,
    /// `finish` with more than one top-level element.
    #[error("expected a single root, found {count}")]
    MultipleRoots { count: usize },
}

struct OpenNode {
    kind: SyntaxKind,
    /// Index in `children` where this node's slots start.
    first_child: usize,
    diagnostics: Vec<DiagnosticInfo>,
}

/// Builds a green tree in source order.
///
/// ```text
/// let mut builder = GreenBuilder::new();
/// builder.start_node(SyntaxKind::NameExpr);
/// builder.token(SyntaxKind::Ident, "x");
/// builder.finish_node()?;
/// let root = builder.finish()?;
/// ```
///
/// Tokens with trivia or diagnostics are built with the [`GreenNode`]
/// constructors and added with [`push`](GreenBuilder::push).
#[derive(Default)]
pub struct GreenBuilder {
    parents: Vec<OpenNode>,
    children: Vec<Option<Arc<GreenNode>>>,
}

impl GreenBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open a node; everything added until the matching
    /// [`finish_node`](GreenBuilder::finish_node) becomes its slots.
    pub fn start_node(&mut self, kind: SyntaxKind) {
        self.parents.push(OpenNode {
            kind,
            first_child: self.children.len(),
            diagnostics: Vec::new(),
        });
    }

    /// Close the innermost open node.
    pub fn finish_node(&mut self) -> Result<(), BuildError> {
        let open = self.parents.pop().ok_or(BuildError::NoOpenNode)?;
        let slots: Vec<_> = self.children.drain(open.first_child..).collect();
        let node = GreenNode::branch(open.kind, slots);
        let node = if open.diagnostics.is_empty() {
            node
        } else {
            node.with_diagnostics(open.diagnostics)
        };
        self.children.push(Some(Arc::new(node)));
        Ok(())
    }

    /// Add a token with no trivia.
    pub fn token(&mut self, kind: SyntaxKind, text: &str) {
        self.push(Arc::new(GreenNode::token(kind, text)));
    }

    /// Add a zero-width token standing in for one that was expected.
    pub fn missing(&mut self, kind: SyntaxKind) {
        self.push(Arc::new(GreenNode::missing_token(kind)));
    }

    /// Leave the next slot of the open node empty.
    pub fn absent(&mut self) {
        self.children.push(None);
    }

    /// Add a prebuilt node or token as the next slot.
    pub fn push(&mut self, node: Arc<GreenNode>) {
        self.children.push(Some(node));
    }

    /// Attach a diagnostic to the innermost open node.
    pub fn attach_diagnostic(&mut self, diagnostic: DiagnosticInfo) -> Result<(), BuildError> {
        let open = self.parents.last_mut().ok_or(BuildError::NoOpenNode)?;
        open.diagnostics.push(diagnostic);
        Ok(())
    }

    /// Current nesting depth.
    pub fn depth(&self) -> usize {
        self.parents.len()
    }

    /// Take the single finished root.
    pub fn finish(mut self) -> Result<Arc<GreenNode>, BuildError> {
        if !self.parents.is_empty() {
            return Err(BuildError::UnclosedNodes {
                open: self.parents.len(),
            });
        }
        match self.children.len() {
            0 => return Err(BuildError::NoRoot),
            1 => {}
            count => return Err(BuildError::MultipleRoots { count }),
        }
        let root = self.children.pop().flatten().ok_or(BuildError::NoRoot)?;
        debug!(
            kind = ?root.kind(),
            full_width = root.full_width(),
            flags = ?root.flags(),
            "built green tree"
        );
        Ok(root)
    }
}
