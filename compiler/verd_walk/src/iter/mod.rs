//! The diagnostic enumerator.

use std::iter::FusedIterator;

use smallvec::SmallVec;
use tracing::trace;

use crate::element::{GreenElement, NodeShape};

/// Frames kept inline before the walk stack spills to the heap.
///
/// Once clean subtrees are pruned, diagnostic-bearing paths are shallow.
pub const INITIAL_STACK_DEPTH: usize = 8;

/// Lifecycle of a [`DiagnosticIter`].
///
/// `Unstarted -> Yielding -> Exhausted`. `Exhausted` is terminal.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum WalkState {
    /// Constructed over a dirty root, `move_next` not yet called.
    Unstarted,
    /// The last `move_next` returned `true`; `current` is valid.
    Yielding,
    /// No diagnostics remain. Every further `move_next` returns `false`.
    Exhausted,
}

/// One suspended node on the walk stack.
struct Frame<'a, N> {
    node: &'a N,
    /// Index of the next local diagnostic to yield.
    next_diagnostic: usize,
    /// Index of the next slot to consider for descent.
    next_slot: usize,
}

impl<'a, N> Frame<'a, N> {
    #[inline]
    fn new(node: &'a N) -> Self {
        Frame {
            node,
            next_diagnostic: 0,
            next_slot: 0,
        }
    }
}

/// Lazy pre-order enumerator over every diagnostic under a root.
///
/// Use either the explicit protocol:
///
/// ```text
/// let mut walk = DiagnosticIter::new(Some(&root));
/// while walk.move_next() {
///     let diagnostic = walk.current();
/// }
/// ```
///
/// or the [`Iterator`] impl, which is built on `move_next`.
///
/// The enumerator borrows the tree and owns only its frame stack. It is
/// not meant to be shared between threads; separate enumerators over the
/// same tree are independent.
pub struct DiagnosticIter<'a, N: GreenElement> {
    stack: SmallVec<[Frame<'a, N>; INITIAL_STACK_DEPTH]>,
    current: Option<&'a N::Diagnostic>,
    state: WalkState,
    max_depth: usize,
}

impl<'a, N: GreenElement> DiagnosticIter<'a, N> {
    /// Start a walk at `root`.
    ///
    /// An absent root, or one whose subtree carries no diagnostics, yields
    /// an enumerator that is already exhausted and has pushed nothing.
    pub fn new(root: Option<&'a N>) -> Self {
        let mut walk = DiagnosticIter {
            stack: SmallVec::new(),
            current: None,
            state: WalkState::Exhausted,
            max_depth: 0,
        };
        if let Some(root) = root.filter(|root| root.contains_diagnostics()) {
            walk.state = WalkState::Unstarted;
            walk.push_node_or_token(root);
        }
        walk
    }

    /// Advance to the next diagnostic. Returns `false` once none remain,
    /// and on every call after that.
    pub fn move_next(&mut self) -> bool {
        while let Some(frame) = self.stack.last_mut() {
            let node = frame.node;

            // Local diagnostics first.
            if let Some(diagnostic) = node.diagnostics().get(frame.next_diagnostic) {
                frame.next_diagnostic += 1;
                self.current = Some(diagnostic);
                self.state = WalkState::Yielding;
                return true;
            }

            match next_dirty_slot(node, frame.next_slot) {
                Some((index, child)) => {
                    frame.next_slot = index + 1;
                    self.push_node_or_token(child);
                }
                None => {
                    self.stack.pop();
                }
            }
        }

        self.current = None;
        self.state = WalkState::Exhausted;
        false
    }

    /// The diagnostic reached by the last successful [`move_next`].
    ///
    /// Only meaningful in [`WalkState::Yielding`]. Reading it in any other
    /// state is a protocol error: debug builds panic, release builds get
    /// `None`.
    ///
    /// [`move_next`]: DiagnosticIter::move_next
    pub fn current(&self) -> Option<&'a N::Diagnostic> {
        debug_assert!(
            self.state == WalkState::Yielding,
            "DiagnosticIter::current() read while {:?}",
            self.state
        );
        self.current
    }

    /// Where the enumerator is in its lifecycle.
    #[inline]
    pub fn state(&self) -> WalkState {
        self.state
    }

    /// Frames the stack can hold before it next grows.
    #[inline]
    pub fn stack_capacity(&self) -> usize {
        self.stack.capacity()
    }

    /// Deepest the frame stack has been so far.
    #[inline]
    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    fn push_node_or_token(&mut self, node: &'a N) {
        match node.shape() {
            NodeShape::Node => self.push(node),
            NodeShape::Token { leading, trailing } => {
                // LIFO: trailing goes in first so leading comes out first.
                if let Some(trailing) = trailing.filter(|t| t.contains_diagnostics()) {
                    self.push(trailing);
                }
                self.push(node);
                if let Some(leading) = leading.filter(|l| l.contains_diagnostics()) {
                    self.push(leading);
                }
            }
        }
    }

    fn push(&mut self, node: &'a N) {
        if self.stack.len() == self.stack.capacity() {
            let capacity = self.stack.capacity();
            self.stack.reserve_exact(capacity);
            trace!(
                from = capacity,
                to = self.stack.capacity(),
                "diagnostic walk stack grew"
            );
        }
        self.stack.push(Frame::new(node));
        self.max_depth = self.max_depth.max(self.stack.len());
    }
}

/// First slot at or after `from` that is present and dirty.
#[inline]
fn next_dirty_slot<N: GreenElement>(node: &N, from: usize) -> Option<(usize, &N)> {
    (from..node.slot_count()).find_map(|index| {
        node.slot(index)
            .filter(|child| child.contains_diagnostics())
            .map(|child| (index, child))
    })
}

impl<'a, N: GreenElement> Iterator for DiagnosticIter<'a, N> {
    type Item = &'a N::Diagnostic;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.move_next() {
            self.current
        } else {
            None
        }
    }
}

impl<N: GreenElement> FusedIterator for DiagnosticIter<'_, N> {}
