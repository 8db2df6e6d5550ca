//! Stack safety for the inference recursion.
//!
//! Caller-built expression trees can nest arbitrarily deep, and the W
//! recursion descends one frame per node. `stacker` grows the stack
//! instead of overflowing it.

/// Ensure sufficient stack space for a recursive operation.
///
/// Grows the stack when less than 256KB remains, allocating 2MB segments.
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(256 * 1024, 2 * 1024 * 1024, f)
}
