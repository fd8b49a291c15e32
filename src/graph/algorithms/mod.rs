//! Traversals over weighted graphs.

pub mod dfs;
pub mod path_finder;

pub use dfs::DfsAlgorithm;
pub use path_finder::PathFinder;
