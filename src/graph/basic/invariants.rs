//! Debug-only representation checks.
//!
//! Graph mutators call into these after every change so broken adjacency
//! bookkeeping is caught at the mutation that caused it. Release builds
//! compile the checks away.

/// Debug-asserts a representation invariant with a message.
#[cfg_attr(not(debug_assertions), allow(dead_code))]
#[inline(always)]
pub(crate) fn rep_invariant(condition: bool, message: &str) {
    debug_assert!(condition, "Graph representation invariant violated: {}", message);
}

/// Returns `true` when `items` holds no repeated element.
///
/// Child lists are short, so a quadratic scan beats hashing here.
#[cfg_attr(not(debug_assertions), allow(dead_code))]
pub(crate) fn all_distinct<T: PartialEq>(items: &[T]) -> bool {
    items
        .iter()
        .enumerate()
        .all(|(i, a)| items[i + 1..].iter().all(|b| a != b))
}
