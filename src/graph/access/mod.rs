//! Traversal-scoped state kept apart from the graph.
//!
//! Searches only ever read the graph; everything they write goes into
//! structures from this module, owned by the search itself.

pub mod marks;

pub use marks::TraversalMarks;
