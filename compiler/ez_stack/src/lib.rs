//! Stack growth for recursive tree walks.
//!
//! Both the checker and the interpreter recurse once per tree level, so a
//! deeply nested expression (a long chain of `+`, a tall `if` ladder) can
//! exhaust the native stack. Wrapping each recursive step in
//! [`ensure_sufficient_stack`] moves the walk onto a freshly allocated
//! segment whenever the remaining stack gets low.

/// Grow when less than this much stack remains (128KB).
#[cfg(not(target_arch = "wasm32"))]
const RED_ZONE: usize = 128 * 1024;

/// Size of each newly allocated segment (2MB).
#[cfg(not(target_arch = "wasm32"))]
const SEGMENT_SIZE: usize = 2 * 1024 * 1024;

/// Run `f`, first switching to a new stack segment if the current one is
/// nearly exhausted.
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, SEGMENT_SIZE, f)
}

/// WASM manages its own stack; run `f` directly.
#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}
