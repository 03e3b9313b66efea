//! Cached per-node summary flags.
//!
//! Computed once when a node is built, from its own content and the flags
//! of its children, so that "is there anything of interest below here?"
//! is an O(1) question.

use bitflags::bitflags;

bitflags! {
    /// Per-node summary bits.
    #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
    pub struct NodeFlags: u8 {
        /// This node or a descendant (trivia included) carries a diagnostic.
        const CONTAINS_DIAGNOSTICS = 1 << 0;
        /// This node or a descendant is skipped-tokens trivia.
        const CONTAINS_SKIPPED_TEXT = 1 << 1;
        /// Synthesized by the parser; not present in the source.
        const IS_MISSING = 1 << 2;
    }
}

impl NodeFlags {
    /// Flags inherited by a parent from any child (bitwise OR).
    pub const PROPAGATE_MASK: Self = Self::from_bits_truncate(
        Self::CONTAINS_DIAGNOSTICS.bits() | Self::CONTAINS_SKIPPED_TEXT.bits(),
    );

    #[inline]
    pub const fn contains_diagnostics(self) -> bool {
        self.contains(Self::CONTAINS_DIAGNOSTICS)
    }

    #[inline]
    pub const fn contains_skipped_text(self) -> bool {
        self.contains(Self::CONTAINS_SKIPPED_TEXT)
    }

    #[inline]
    pub const fn is_missing(self) -> bool {
        self.contains(Self::IS_MISSING)
    }

    /// The part of a child's flags a parent inherits.
    #[inline]
    pub const fn propagate_from(child: Self) -> Self {
        Self::from_bits_truncate(child.bits() & Self::PROPAGATE_MASK.bits())
    }

    /// Combine inherited flags from all children.
    #[inline]
    pub fn propagate_all(children: impl IntoIterator<Item = Self>) -> Self {
        children
            .into_iter()
            .fold(Self::empty(), |acc, child| acc.union(Self::propagate_from(child)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_does_not_propagate() {
        let child = NodeFlags::IS_MISSING | NodeFlags::CONTAINS_DIAGNOSTICS;
        assert_eq!(
            NodeFlags::propagate_from(child),
            NodeFlags::CONTAINS_DIAGNOSTICS
        );
    }

    #[test]
    fn test_propagate_all() {
        let flags = NodeFlags::propagate_all([
            NodeFlags::empty(),
            NodeFlags::CONTAINS_SKIPPED_TEXT,
            NodeFlags::CONTAINS_DIAGNOSTICS | NodeFlags::IS_MISSING,
        ]);
        assert!(flags.contains_diagnostics());
        assert!(flags.contains_skipped_text());
        assert!(!flags.is_missing());
    }

    #[test]
    fn test_propagate_nothing() {
        assert_eq!(NodeFlags::propagate_all([]), NodeFlags::empty());
    }
}
