//! Stack growth for recursive tree operations.
//!
//! Diagnostic enumeration never recurses (it keeps its own frame stack), but
//! a few tree operations are naturally recursive: rendering full text and
//! tearing down `Arc`-linked children. Generated or adversarial input can
//! nest tens of thousands of levels deep, so those operations wrap each
//! level in [`ensure_sufficient_stack`].
//!
//! - **Native targets**: `stacker` allocates a fresh segment on demand.
//! - **WASM targets**: passthrough.

/// Remaining stack below which a new segment is allocated (100KB).
const RED_ZONE: usize = 100 * 1024;

/// Size of each newly allocated stack segment (1MB).
const STACK_PER_SEGMENT: usize = 1024 * 1024;

/// Run `f`, first growing the stack if less than the red zone remains.
///
/// ```text
/// fn write_text(node: &GreenNode, out: &mut String) {
///     ensure_sufficient_stack(|| {
///         for child in node.slots().flatten() {
///             write_text(child, out);
///         }
///     });
/// }
/// ```
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, STACK_PER_SEGMENT, f)
}

/// WASM manages its own stack.
#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}

#[cfg(test)]
mod tests;
