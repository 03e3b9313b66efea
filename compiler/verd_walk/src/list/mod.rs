//! Restartable view over the diagnostics of a subtree.

use crate::element::GreenElement;
use crate::iter::DiagnosticIter;

/// All diagnostics under a root, as a lazy, restartable sequence.
///
/// Holds only the root reference. Each [`iter`](DiagnosticList::iter)
/// starts a fresh walk; nothing is collected.
pub struct DiagnosticList<'a, N> {
    root: Option<&'a N>,
}

impl<N> Clone for DiagnosticList<'_, N> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<N> Copy for DiagnosticList<'_, N> {}

impl<'a, N: GreenElement> DiagnosticList<'a, N> {
    /// View over an optional root. `None` is an empty list.
    #[inline]
    pub fn new(root: Option<&'a N>) -> Self {
        DiagnosticList { root }
    }

    /// View over `root`.
    #[inline]
    pub fn of(root: &'a N) -> Self {
        DiagnosticList { root: Some(root) }
    }

    /// O(1): answered by the root's summary bit.
    #[inline]
    pub fn is_empty(&self) -> bool {
        !self.root.is_some_and(GreenElement::contains_diagnostics)
    }

    /// Start a fresh walk.
    #[inline]
    pub fn iter(&self) -> DiagnosticIter<'a, N> {
        DiagnosticIter::new(self.root)
    }

    /// Whether any diagnostic satisfies `predicate`.
    ///
    /// Stops at the first match; the rest of the tree is never touched.
    pub fn any(&self, mut predicate: impl FnMut(&N::Diagnostic) -> bool) -> bool {
        let mut walk = self.iter();
        while walk.move_next() {
            if walk.current().is_some_and(&mut predicate) {
                return true;
            }
        }
        false
    }

    /// Number of diagnostics satisfying `predicate`.
    pub fn count_matching(&self, mut predicate: impl FnMut(&N::Diagnostic) -> bool) -> usize {
        let mut walk = self.iter();
        let mut count = 0;
        while walk.move_next() {
            if walk.current().is_some_and(&mut predicate) {
                count += 1;
            }
        }
        count
    }
}

impl<'a, N: GreenElement> IntoIterator for DiagnosticList<'a, N> {
    type Item = &'a N::Diagnostic;
    type IntoIter = DiagnosticIter<'a, N>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, N: GreenElement> IntoIterator for &DiagnosticList<'a, N> {
    type Item = &'a N::Diagnostic;
    type IntoIter = DiagnosticIter<'a, N>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
