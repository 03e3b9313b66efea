//! The green node.

use std::fmt;
use std::sync::Arc;

use verd_diagnostic::DiagnosticInfo;
use verd_stack::ensure_sufficient_stack;
use verd_walk::{DiagnosticList, GreenElement, NodeShape};

use crate::{NodeFlags, SyntaxKind};

/// Immutable syntax node: a branch, a token, or a piece of trivia.
///
/// Nodes carry no parent pointers and no absolute positions. Children are
/// `Arc`-shared, so a `GreenNode` is `Send + Sync` and cheap to reuse in
/// new trees. Updates ([`with_diagnostics`](GreenNode::with_diagnostics))
/// build a new node; the original is untouched.
pub struct GreenNode {
    kind: SyntaxKind,
    flags: NodeFlags,
    full_width: u32,
    diagnostics: Box<[DiagnosticInfo]>,
    data: GreenData,
}

#[derive(Clone)]
enum GreenData {
    Branch {
        slots: Box<[Option<Arc<GreenNode>>]>,
    },
    Token {
        text: Box<str>,
        leading: Option<Arc<GreenNode>>,
        trailing: Option<Arc<GreenNode>>,
    },
    Trivia {
        text: Box<str>,
    },
}

impl GreenData {
    fn full_width(&self) -> u32 {
        match self {
            GreenData::Branch { slots } => slots
                .iter()
                .flatten()
                .fold(0, |width, child| width.saturating_add(child.full_width)),
            GreenData::Token {
                text,
                leading,
                trailing,
            } => trivia_width(leading.as_deref())
                .saturating_add(width_of(text))
                .saturating_add(trivia_width(trailing.as_deref())),
            GreenData::Trivia { text } => width_of(text),
        }
    }

    /// Flags inherited from children and trivia attachments.
    fn inherited_flags(&self) -> NodeFlags {
        match self {
            GreenData::Branch { slots } => {
                NodeFlags::propagate_all(slots.iter().flatten().map(|child| child.flags))
            }
            GreenData::Token {
                leading, trailing, ..
            } => NodeFlags::propagate_all(
                leading
                    .iter()
                    .chain(trailing.iter())
                    .map(|trivia| trivia.flags),
            ),
            GreenData::Trivia { .. } => NodeFlags::empty(),
        }
    }
}

fn width_of(text: &str) -> u32 {
    u32::try_from(text.len()).unwrap_or(u32::MAX)
}

fn trivia_width(trivia: Option<&GreenNode>) -> u32 {
    trivia.map_or(0, |trivia| trivia.full_width)
}

impl GreenNode {
    fn new(
        kind: SyntaxKind,
        own_flags: NodeFlags,
        diagnostics: Box<[DiagnosticInfo]>,
        data: GreenData,
    ) -> Self {
        let mut flags = own_flags | data.inherited_flags();
        if !diagnostics.is_empty() {
            flags |= NodeFlags::CONTAINS_DIAGNOSTICS;
        }
        if kind == SyntaxKind::SkippedTokens {
            flags |= NodeFlags::CONTAINS_SKIPPED_TEXT;
        }
        GreenNode {
            kind,
            flags,
            full_width: data.full_width(),
            diagnostics,
            data,
        }
    }

    /// A token with no trivia.
    pub fn token(kind: SyntaxKind, text: impl Into<Box<str>>) -> Self {
        Self::token_with_trivia(kind, text, None, None)
    }

    /// A token with optional leading and trailing trivia.
    pub fn token_with_trivia(
        kind: SyntaxKind,
        text: impl Into<Box<str>>,
        leading: Option<Arc<GreenNode>>,
        trailing: Option<Arc<GreenNode>>,
    ) -> Self {
        debug_assert!(kind.is_token(), "{kind:?} is not a token kind");
        Self::new(
            kind,
            NodeFlags::empty(),
            Box::default(),
            GreenData::Token {
                text: text.into(),
                leading,
                trailing,
            },
        )
    }

    /// A zero-width token the parser synthesized in place of one it
    /// expected but did not find.
    pub fn missing_token(kind: SyntaxKind) -> Self {
        debug_assert!(kind.is_token(), "{kind:?} is not a token kind");
        Self::new(
            kind,
            NodeFlags::IS_MISSING,
            Box::default(),
            GreenData::Token {
                text: Box::default(),
                leading: None,
                trailing: None,
            },
        )
    }

    /// A single piece of trivia: whitespace, a newline, or a comment.
    pub fn trivia(kind: SyntaxKind, text: impl Into<Box<str>>) -> Self {
        debug_assert!(kind.is_trivia(), "{kind:?} is not a trivia kind");
        Self::new(
            kind,
            NodeFlags::empty(),
            Box::default(),
            GreenData::Trivia { text: text.into() },
        )
    }

    /// Trivia holding tokens the parser skipped while recovering.
    pub fn skipped_tokens(tokens: impl IntoIterator<Item = Arc<GreenNode>>) -> Self {
        Self::branch(SyntaxKind::SkippedTokens, tokens.into_iter().map(Some))
    }

    /// A structural node over `slots`. Absent slots keep their position.
    pub fn branch(
        kind: SyntaxKind,
        slots: impl IntoIterator<Item = Option<Arc<GreenNode>>>,
    ) -> Self {
        Self::new(
            kind,
            NodeFlags::empty(),
            Box::default(),
            GreenData::Branch {
                slots: slots.into_iter().collect(),
            },
        )
    }

    /// A list node over `elements`, all present.
    pub fn list(elements: impl IntoIterator<Item = Arc<GreenNode>>) -> Self {
        Self::branch(SyntaxKind::List, elements.into_iter().map(Some))
    }

    /// Trivia attachment for a token: nothing for no entries, the entry
    /// itself for one, a list otherwise.
    pub fn trivia_list(entries: impl IntoIterator<Item = Arc<GreenNode>>) -> Option<Arc<GreenNode>> {
        let mut entries: Vec<_> = entries.into_iter().collect();
        match entries.len() {
            0 => None,
            1 => entries.pop(),
            _ => Some(Arc::new(Self::list(entries))),
        }
    }

    /// A copy of this node with `diagnostics` as its local diagnostics.
    ///
    /// Children are shared, not copied. Flags are recomputed, so the new
    /// node is clean again if `diagnostics` is empty and nothing below
    /// carries any. Ancestors are not affected: rebuild them to propagate.
    pub fn with_diagnostics(&self, diagnostics: impl IntoIterator<Item = DiagnosticInfo>) -> Self {
        let own_flags = self.flags & NodeFlags::IS_MISSING;
        Self::new(
            self.kind,
            own_flags,
            diagnostics.into_iter().collect(),
            self.data.clone(),
        )
    }

    #[inline]
    pub fn kind(&self) -> SyntaxKind {
        self.kind
    }

    #[inline]
    pub fn flags(&self) -> NodeFlags {
        self.flags
    }

    /// Width of the full text, trivia included.
    #[inline]
    pub fn full_width(&self) -> u32 {
        self.full_width
    }

    /// Width without the leading trivia of the first token and the
    /// trailing trivia of the last.
    pub fn width(&self) -> u32 {
        let leading = self
            .first_token()
            .map_or(0, |token| trivia_width(token.leading_trivia()));
        let trailing = self
            .last_token()
            .map_or(0, |token| trivia_width(token.trailing_trivia()));
        self.full_width
            .saturating_sub(leading)
            .saturating_sub(trailing)
    }

    #[inline]
    pub fn is_token(&self) -> bool {
        matches!(self.data, GreenData::Token { .. })
    }

    #[inline]
    pub fn is_trivia(&self) -> bool {
        self.kind.is_trivia()
    }

    #[inline]
    pub fn is_missing(&self) -> bool {
        self.flags.is_missing()
    }

    /// A token's own text, or a trivia entry's text. `None` for branches.
    pub fn token_text(&self) -> Option<&str> {
        match &self.data {
            GreenData::Token { text, .. } | GreenData::Trivia { text } => Some(&**text),
            GreenData::Branch { .. } => None,
        }
    }

    pub fn leading_trivia(&self) -> Option<&GreenNode> {
        match &self.data {
            GreenData::Token { leading, .. } => leading.as_deref(),
            _ => None,
        }
    }

    pub fn trailing_trivia(&self) -> Option<&GreenNode> {
        match &self.data {
            GreenData::Token { trailing, .. } => trailing.as_deref(),
            _ => None,
        }
    }

    /// All slots in order; absent slots are `None`.
    pub fn slots(&self) -> impl ExactSizeIterator<Item = Option<&GreenNode>> + '_ {
        let slots: &[Option<Arc<GreenNode>>] = match &self.data {
            GreenData::Branch { slots } => &slots[..],
            _ => &[],
        };
        slots.iter().map(Option::as_deref)
    }

    /// Diagnostics attached directly to this node.
    #[inline]
    pub fn local_diagnostics(&self) -> &[DiagnosticInfo] {
        &self.diagnostics
    }

    /// Every diagnostic in this subtree, lazily, in source order.
    #[inline]
    pub fn all_diagnostics(&self) -> DiagnosticList<'_, GreenNode> {
        DiagnosticList::of(self)
    }

    /// Whether any error-severity diagnostic sits in this subtree.
    pub fn has_errors(&self) -> bool {
        self.flags.contains_diagnostics() && self.all_diagnostics().any(DiagnosticInfo::is_error)
    }

    /// First token in this subtree, ignoring trivia.
    pub fn first_token(&self) -> Option<&GreenNode> {
        self.find_token(|slots, pending| pending.extend(slots.iter().rev().flatten().map(Arc::as_ref)))
    }

    /// Last token in this subtree, ignoring trivia.
    pub fn last_token(&self) -> Option<&GreenNode> {
        self.find_token(|slots, pending| pending.extend(slots.iter().flatten().map(Arc::as_ref)))
    }

    fn find_token<'a>(
        &'a self,
        push_slots: impl Fn(&'a [Option<Arc<GreenNode>>], &mut Vec<&'a GreenNode>),
    ) -> Option<&'a GreenNode> {
        let mut pending = vec![self];
        while let Some(node) = pending.pop() {
            match &node.data {
                GreenData::Token { .. } => return Some(node),
                GreenData::Branch { slots } if !node.kind.is_trivia() => {
                    push_slots(&slots[..], &mut pending);
                }
                GreenData::Branch { .. } | GreenData::Trivia { .. } => {}
            }
        }
        None
    }

    /// Full source text of this subtree, trivia included.
    pub fn text(&self) -> String {
        let mut out = String::with_capacity(self.full_width as usize);
        self.write_text(&mut out);
        out
    }

    fn write_text(&self, out: &mut String) {
        ensure_sufficient_stack(|| match &self.data {
            GreenData::Branch { slots } => {
                for child in slots.iter().flatten() {
                    child.write_text(out);
                }
            }
            GreenData::Token {
                text,
                leading,
                trailing,
            } => {
                if let Some(leading) = leading {
                    leading.write_text(out);
                }
                out.push_str(text);
                if let Some(trailing) = trailing {
                    trailing.write_text(out);
                }
            }
            GreenData::Trivia { text } => out.push_str(text),
        });
    }
}

impl GreenElement for GreenNode {
    type Diagnostic = DiagnosticInfo;

    #[inline]
    fn contains_diagnostics(&self) -> bool {
        self.flags.contains_diagnostics()
    }

    #[inline]
    fn diagnostics(&self) -> &[DiagnosticInfo] {
        &self.diagnostics
    }

    #[inline]
    fn slot_count(&self) -> usize {
        match &self.data {
            GreenData::Branch { slots } => slots.len(),
            _ => 0,
        }
    }

    #[inline]
    fn slot(&self, index: usize) -> Option<&Self> {
        match &self.data {
            GreenData::Branch { slots } => slots.get(index)?.as_deref(),
            _ => None,
        }
    }

    #[inline]
    fn shape(&self) -> NodeShape<'_, Self> {
        match &self.data {
            GreenData::Token {
                leading, trailing, ..
            } => NodeShape::Token {
                leading: leading.as_deref(),
                trailing: trailing.as_deref(),
            },
            _ => NodeShape::Node,
        }
    }
}

impl Drop for GreenNode {
    fn drop(&mut self) {
        // Releasing the last reference to a deep chain recurses once per
        // level; grow the stack as that happens.
        let data = std::mem::replace(
            &mut self.data,
            GreenData::Trivia {
                text: Box::default(),
            },
        );
        ensure_sufficient_stack(move || drop(data));
    }
}

impl fmt::Debug for GreenNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}@{}", self.kind, self.full_width)?;
        if let Some(text) = self.token_text() {
            write!(f, " {text:?}")?;
        }
        if !self.flags.is_empty() {
            write!(f, " {:?}", self.flags)?;
        }
        if !self.diagnostics.is_empty() {
            write!(f, " ({} diagnostics)", self.diagnostics.len())?;
        }
        Ok(())
    }
}
