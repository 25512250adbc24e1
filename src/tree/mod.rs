//! Tree
//!
//! Growing a classification tree and routing rows through it.
pub mod predict;
pub mod tree;

pub use predict::classify;
pub use tree::{build_node, Tree};
