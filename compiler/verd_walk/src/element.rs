//! The read-only node contract consumed by the diagnostic walk.

/// Structural shape of a node, as far as visit order is concerned.
///
/// Plain nodes (including trivia) are visited as themselves. Tokens carry
/// their trivia out of band and are expanded into up to three visits.
#[derive(Debug)]
pub enum NodeShape<'a, N> {
    /// Structural node or trivia: own diagnostics, then slots.
    Node,
    /// Token: leading trivia, the token itself, trailing trivia.
    Token {
        leading: Option<&'a N>,
        trailing: Option<&'a N>,
    },
}

/// A node of an immutable green tree.
///
/// Every accessor must be side-effect free and cheap (O(1), or O(slot
/// count) at worst): the walk calls them repeatedly and never caches.
///
/// # Invariant
///
/// `contains_diagnostics()` must equal "`diagnostics()` is non-empty, or
/// any present slot (or, for a token, either trivia attachment) has
/// `contains_diagnostics()`". It is computed once, bottom-up, when the node
/// is built. The walk prunes on it without checking.
pub trait GreenElement: Sized {
    /// Opaque diagnostic record attached to nodes.
    type Diagnostic;

    /// Whether this node or anything beneath it carries a diagnostic.
    fn contains_diagnostics(&self) -> bool;

    /// Diagnostics attached directly to this node, in attachment order.
    fn diagnostics(&self) -> &[Self::Diagnostic];

    /// Number of child slots, present or not.
    fn slot_count(&self) -> usize;

    /// Child at `index`; `None` for an absent slot or an index out of range.
    fn slot(&self, index: usize) -> Option<&Self>;

    /// Whether this is a token (with trivia attachments) or a plain node.
    fn shape(&self) -> NodeShape<'_, Self>;
}
