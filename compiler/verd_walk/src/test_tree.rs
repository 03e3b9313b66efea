//! Minimal instrumented tree for exercising the walk in isolation.

use std::cell::Cell;

use crate::element::{GreenElement, NodeShape};

pub(crate) struct TestNode {
    diagnostics: Vec<&'static str>,
    slots: Vec<Option<TestNode>>,
    trivia: Option<(Option<Box<TestNode>>, Option<Box<TestNode>>)>,
    contains: bool,
    /// Incremented whenever the walk reads this node's diagnostics.
    visits: Cell<usize>,
}

impl TestNode {
    pub(crate) fn node(diagnostics: &[&'static str], slots: Vec<Option<TestNode>>) -> Self {
        let contains = !diagnostics.is_empty()
            || slots.iter().flatten().any(GreenElement::contains_diagnostics);
        TestNode {
            diagnostics: diagnostics.to_vec(),
            slots,
            trivia: None,
            contains,
            visits: Cell::new(0),
        }
    }

    pub(crate) fn leaf(diagnostics: &[&'static str]) -> Self {
        Self::node(diagnostics, Vec::new())
    }

    pub(crate) fn token(
        diagnostics: &[&'static str],
        leading: Option<TestNode>,
        trailing: Option<TestNode>,
    ) -> Self {
        let contains = !diagnostics.is_empty()
            || leading.as_ref().is_some_and(GreenElement::contains_diagnostics)
            || trailing.as_ref().is_some_and(GreenElement::contains_diagnostics);
        TestNode {
            diagnostics: diagnostics.to_vec(),
            slots: Vec::new(),
            trivia: Some((leading.map(Box::new), trailing.map(Box::new))),
            contains,
            visits: Cell::new(0),
        }
    }

    /// Force the summary bit off, breaking the tree invariant on purpose.
    pub(crate) fn marked_clean(mut self) -> Self {
        self.contains = false;
        self
    }

    pub(crate) fn visits(&self) -> usize {
        self.visits.get()
    }

    pub(crate) fn child(&self, index: usize) -> &TestNode {
        match self.slots.get(index) {
            Some(Some(child)) => child,
            _ => panic!("no child at slot {index}"),
        }
    }

    pub(crate) fn leading(&self) -> &TestNode {
        match &self.trivia {
            Some((Some(leading), _)) => leading,
            _ => panic!("no leading trivia"),
        }
    }

    pub(crate) fn trailing(&self) -> &TestNode {
        match &self.trivia {
            Some((_, Some(trailing))) => trailing,
            _ => panic!("no trailing trivia"),
        }
    }
}

impl Drop for TestNode {
    fn drop(&mut self) {
        // Unlink iteratively; deep test chains would overflow otherwise.
        let mut pending: Vec<TestNode> = self.slots.drain(..).flatten().collect();
        while let Some(mut node) = pending.pop() {
            pending.extend(node.slots.drain(..).flatten());
        }
    }
}

impl GreenElement for TestNode {
    type Diagnostic = &'static str;

    fn contains_diagnostics(&self) -> bool {
        self.contains
    }

    fn diagnostics(&self) -> &[&'static str] {
        self.visits.set(self.visits.get() + 1);
        &self.diagnostics
    }

    fn slot_count(&self) -> usize {
        self.slots.len()
    }

    fn slot(&self, index: usize) -> Option<&Self> {
        self.slots.get(index).and_then(Option::as_ref)
    }

    fn shape(&self) -> NodeShape<'_, Self> {
        match &self.trivia {
            Some((leading, trailing)) => NodeShape::Token {
                leading: leading.as_deref(),
                trailing: trailing.as_deref(),
            },
            None => NodeShape::Node,
        }
    }
}
