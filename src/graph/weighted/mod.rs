//! Weighted nodes and the paths built from them.

pub mod description;
pub mod node;
pub mod path;

pub use description::{EdgeDescription, GraphDescription};
pub use node::{Color, WeightedNode};
pub use path::NodeCountingPath;
