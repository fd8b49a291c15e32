//! Basic graph implementations.
//!
//! This module contains the directed graph every algorithm in the crate
//! runs over.

pub mod digraph;
mod invariants;

pub use digraph::{Children, Graph, Insertion, NodeIndex};
